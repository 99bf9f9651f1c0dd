// Pattern 8: Strategy - Interchangeable Algorithms
// Demonstrates a family of algorithm objects behind one execute capability,
// swappable at runtime without touching the call site.

// ============================================================================
// Example: Arithmetic Strategies with Trait Objects
// ============================================================================

trait Operation {
    fn execute(&self, a: i32, b: i32) -> i32;
    fn name(&self) -> &str;
}

struct Add;
impl Operation for Add {
    fn execute(&self, a: i32, b: i32) -> i32 {
        a + b
    }
    fn name(&self) -> &str {
        "add"
    }
}

struct Subtract;
impl Operation for Subtract {
    fn execute(&self, a: i32, b: i32) -> i32 {
        a - b
    }
    fn name(&self) -> &str {
        "subtract"
    }
}

// The context holds the capability, never a concrete algorithm.
struct Calculator {
    operation: Box<dyn Operation>,
}

impl Calculator {
    fn new(operation: Box<dyn Operation>) -> Self {
        Self { operation }
    }

    fn set_operation(&mut self, operation: Box<dyn Operation>) {
        self.operation = operation;
    }

    fn run(&self, a: i32, b: i32) -> i32 {
        self.operation.execute(a, b)
    }

    fn operation_name(&self) -> &str {
        self.operation.name()
    }
}

fn strategy_trait_object_example() {
    let mut calculator = Calculator::new(Box::new(Add));
    println!("{}(2, 3) = {}", calculator.operation_name(), calculator.run(2, 3));

    calculator.set_operation(Box::new(Subtract));
    println!("{}(5, 2) = {}", calculator.operation_name(), calculator.run(5, 2));
}

// ============================================================================
// Example: Compile-time Strategy with Generics
// ============================================================================

struct StaticCalculator<S: Operation> {
    operation: S,
}

impl<S: Operation> StaticCalculator<S> {
    fn new(operation: S) -> Self {
        Self { operation }
    }

    fn run(&self, a: i32, b: i32) -> i32 {
        self.operation.execute(a, b)
    }
}

fn strategy_generic_example() {
    // Strategy chosen at compile time; no heap allocation.
    let calculator = StaticCalculator::new(Add);
    println!("static add(2, 3) = {}", calculator.run(2, 3));
}

// ============================================================================
// Example: Strategies as Closures
// ============================================================================

struct ClosureCalculator<F>
where
    F: Fn(i32, i32) -> i32,
{
    operation: F,
}

impl<F> ClosureCalculator<F>
where
    F: Fn(i32, i32) -> i32,
{
    fn new(operation: F) -> Self {
        Self { operation }
    }

    fn run(&self, a: i32, b: i32) -> i32 {
        (self.operation)(a, b)
    }
}

fn strategy_closure_example() {
    let calculator = ClosureCalculator::new(|a, b| a * b);
    println!("closure multiply(4, 6) = {}", calculator.run(4, 6));
}

// ============================================================================
// Tests
// ============================================================================


fn main() {
    println!("Pattern 8: Strategy");
    println!("====================\n");

    println!("=== Strategy (Trait Objects) ===");
    strategy_trait_object_example();
    println!();

    println!("=== Strategy (Generics) ===");
    strategy_generic_example();
    println!();

    println!("=== Strategy (Closures) ===");
    strategy_closure_example();
}
