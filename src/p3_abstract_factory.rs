// Pattern 3: Abstract Factory - Matched Product Families
// Demonstrates one factory capability producing a coherent family of widgets,
// where swapping the factory swaps the whole family.

// ============================================================================
// Example: Widget Families with Trait Objects
// ============================================================================

trait Button {
    fn press(&self) -> String;
}

trait Checkbox {
    fn check(&self) -> String;
}

struct WindowsButton;
impl Button for WindowsButton {
    fn press(&self) -> String {
        "Windows Button Pressed".to_string()
    }
}

struct WindowsCheckbox;
impl Checkbox for WindowsCheckbox {
    fn check(&self) -> String {
        "Windows Checkbox Checked".to_string()
    }
}

struct MacButton;
impl Button for MacButton {
    fn press(&self) -> String {
        "Mac Button Pressed".to_string()
    }
}

struct MacCheckbox;
impl Checkbox for MacCheckbox {
    fn check(&self) -> String {
        "Mac Checkbox Checked".to_string()
    }
}

// Family consistency is structural: each factory method can only return its
// own family's concrete type, so callers never mix families.
trait WidgetFactory {
    fn create_button(&self) -> Box<dyn Button>;
    fn create_checkbox(&self) -> Box<dyn Checkbox>;
}

struct WindowsFactory;
impl WidgetFactory for WindowsFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WindowsButton)
    }
    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(WindowsCheckbox)
    }
}

struct MacFactory;
impl WidgetFactory for MacFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(MacButton)
    }
    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(MacCheckbox)
    }
}

// Client code sees only the factory capability.
fn render_form(factory: &dyn WidgetFactory) {
    let button = factory.create_button();
    let checkbox = factory.create_checkbox();
    println!("  {}", button.press());
    println!("  {}", checkbox.check());
}

fn abstract_factory_example() {
    println!("Windows family:");
    render_form(&WindowsFactory);

    println!("Mac family:");
    render_form(&MacFactory);
}

// ============================================================================
// Example: Selecting a Factory by Platform Tag
// ============================================================================

// Same absent-result convention as the factory method: unknown platforms
// yield None.
fn factory_for(platform: &str) -> Option<Box<dyn WidgetFactory>> {
    match platform {
        "windows" => Some(Box::new(WindowsFactory)),
        "mac" => Some(Box::new(MacFactory)),
        _ => None,
    }
}

fn factory_selection_example() {
    for platform in ["windows", "mac", "beos"] {
        match factory_for(platform) {
            Some(factory) => {
                println!("{} widgets:", platform);
                render_form(&*factory);
            }
            None => println!("no widget family for {:?}", platform),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_family() {
        let factory = WindowsFactory;
        assert_eq!(factory.create_button().press(), "Windows Button Pressed");
        assert_eq!(
            factory.create_checkbox().check(),
            "Windows Checkbox Checked"
        );
    }

    #[test]
    fn test_mac_family() {
        let factory = MacFactory;
        assert_eq!(factory.create_button().press(), "Mac Button Pressed");
        assert_eq!(factory.create_checkbox().check(), "Mac Checkbox Checked");
    }

    #[test]
    fn test_family_is_consistent() {
        // Every product of one factory names the same family.
        let factories: Vec<(&str, Box<dyn WidgetFactory>)> = vec![
            ("Windows", Box::new(WindowsFactory)),
            ("Mac", Box::new(MacFactory)),
        ];

        for (family, factory) in factories {
            assert!(factory.create_button().press().starts_with(family));
            assert!(factory.create_checkbox().check().starts_with(family));
        }
    }

    #[test]
    fn test_factory_selection() {
        let factory = factory_for("mac").unwrap();
        assert_eq!(factory.create_button().press(), "Mac Button Pressed");
        assert!(factory_for("beos").is_none());
    }
}

fn main() {
    println!("Pattern 3: Abstract Factory");
    println!("============================\n");

    println!("=== Widget Families ===");
    abstract_factory_example();
    println!();

    println!("=== Factory Selection ===");
    factory_selection_example();
}
