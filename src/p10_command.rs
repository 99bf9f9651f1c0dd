// Pattern 10: Command - Receiver plus Action Behind execute()
// Demonstrates bundling an action and its receiver into one no-argument
// capability that any invoker can hold and run later.

use std::cell::RefCell;
use std::rc::Rc;

// ============================================================================
// Example: Remote Control Commands with Trait Objects
// ============================================================================

trait Command {
    fn execute(&mut self);
}

// The receiver: the thing commands act on.
struct Tv {
    powered: bool,
}

impl Tv {
    fn new() -> Self {
        Self { powered: false }
    }

    fn switch_on(&mut self) {
        self.powered = true;
        println!("  TV is on");
    }

    fn switch_off(&mut self) {
        self.powered = false;
        println!("  TV is off");
    }
}

struct SwitchOnCommand {
    tv: Rc<RefCell<Tv>>,
}

impl Command for SwitchOnCommand {
    fn execute(&mut self) {
        self.tv.borrow_mut().switch_on();
    }
}

struct SwitchOffCommand {
    tv: Rc<RefCell<Tv>>,
}

impl Command for SwitchOffCommand {
    fn execute(&mut self) {
        self.tv.borrow_mut().switch_off();
    }
}

// The invoker holds a command without knowing receiver or action.
struct RemoteButton {
    command: Box<dyn Command>,
}

impl RemoteButton {
    fn new(command: Box<dyn Command>) -> Self {
        Self { command }
    }

    fn press(&mut self) {
        self.command.execute();
    }
}

fn command_button_example() {
    let tv = Rc::new(RefCell::new(Tv::new()));

    let mut on_button = RemoteButton::new(Box::new(SwitchOnCommand { tv: tv.clone() }));
    let mut off_button = RemoteButton::new(Box::new(SwitchOffCommand { tv: tv.clone() }));

    println!("pressing on button:");
    on_button.press();
    println!("pressing off button:");
    off_button.press();
}

// ============================================================================
// Example: Deferred Execution with a Command Queue
// ============================================================================

struct CommandQueue {
    pending: Vec<Box<dyn Command>>,
}

impl CommandQueue {
    fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    fn submit(&mut self, command: Box<dyn Command>) {
        self.pending.push(command);
    }

    // Runs everything submitted so far, in submission order.
    fn drain(&mut self) {
        for command in self.pending.iter_mut() {
            command.execute();
        }
        self.pending.clear();
    }
}

fn command_queue_example() {
    let tv = Rc::new(RefCell::new(Tv::new()));

    let mut queue = CommandQueue::new();
    queue.submit(Box::new(SwitchOnCommand { tv: tv.clone() }));
    queue.submit(Box::new(SwitchOffCommand { tv: tv.clone() }));
    queue.submit(Box::new(SwitchOnCommand { tv: tv.clone() }));

    println!("nothing has run yet; draining the queue:");
    queue.drain();
    println!("TV ends up powered: {}", tv.borrow().powered);
}

// ============================================================================
// Example: Commands as Closures
// ============================================================================

struct ClosureCommand {
    action: Box<dyn FnMut()>,
}

impl ClosureCommand {
    fn new(action: Box<dyn FnMut()>) -> Self {
        Self { action }
    }
}

impl Command for ClosureCommand {
    fn execute(&mut self) {
        (self.action)();
    }
}

fn command_closure_example() {
    let tv = Rc::new(RefCell::new(Tv::new()));
    let handle = tv.clone();

    let mut command = ClosureCommand::new(Box::new(move || handle.borrow_mut().switch_on()));
    command.execute();
    println!("TV powered after closure command: {}", tv.borrow().powered);
}

// ============================================================================
// Tests
// ============================================================================


fn main() {
    println!("Pattern 10: Command");
    println!("====================\n");

    println!("=== Remote Buttons (Trait Objects) ===");
    command_button_example();
    println!();

    println!("=== Deferred Command Queue ===");
    command_queue_example();
    println!();

    println!("=== Commands as Closures ===");
    command_closure_example();
}
