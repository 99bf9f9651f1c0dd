// Pattern 6: Decorator - Layered Behavior Behind One Capability
// Demonstrates wrapping a value behind its own interface to augment the
// result, with trait-object and zero-cost generic renditions.

// ============================================================================
// Example: Coffee Decorators with Trait Objects
// ============================================================================

trait Coffee {
    fn cost(&self) -> f64;
    fn description(&self) -> String;
}

struct SimpleCoffee;

impl Coffee for SimpleCoffee {
    fn cost(&self) -> f64 {
        2.0
    }

    fn description(&self) -> String {
        "coffee".to_string()
    }
}

struct MilkDecorator {
    inner: Box<dyn Coffee>,
}

impl Coffee for MilkDecorator {
    // Delegate first, then add this layer's surcharge.
    fn cost(&self) -> f64 {
        self.inner.cost() + 0.5
    }

    fn description(&self) -> String {
        format!("{} + milk", self.inner.description())
    }
}

struct SugarDecorator {
    inner: Box<dyn Coffee>,
}

impl Coffee for SugarDecorator {
    fn cost(&self) -> f64 {
        self.inner.cost() + 0.25
    }

    fn description(&self) -> String {
        format!("{} + sugar", self.inner.description())
    }
}

fn decorator_trait_object_example() {
    let mut order: Box<dyn Coffee> = Box::new(SimpleCoffee);
    println!("{}: {:.2}", order.description(), order.cost());

    order = Box::new(MilkDecorator { inner: order });
    println!("{}: {:.2}", order.description(), order.cost());

    order = Box::new(MilkDecorator { inner: order });
    println!("{}: {:.2}", order.description(), order.cost());

    order = Box::new(SugarDecorator { inner: order });
    println!("{}: {:.2}", order.description(), order.cost());
}

// ============================================================================
// Example: Zero-cost Decorators with Generics
// ============================================================================

// Composition happens at the type level: Milk<Sugar<SimpleCoffee>> is a
// distinct type with no boxing and no vtable.
struct Milk<C: Coffee>(C);

impl<C: Coffee> Coffee for Milk<C> {
    fn cost(&self) -> f64 {
        self.0.cost() + 0.5
    }

    fn description(&self) -> String {
        format!("{} + milk", self.0.description())
    }
}

struct Sugar<C: Coffee>(C);

impl<C: Coffee> Coffee for Sugar<C> {
    fn cost(&self) -> f64 {
        self.0.cost() + 0.25
    }

    fn description(&self) -> String {
        format!("{} + sugar", self.0.description())
    }
}

fn decorator_generic_example() {
    let order = Milk(Sugar(SimpleCoffee));
    println!("{}: {:.2}", order.description(), order.cost());
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_milk_layer() {
        let order = MilkDecorator {
            inner: Box::new(SimpleCoffee),
        };
        assert_eq!(order.cost(), 2.5);
    }

    #[test]
    fn test_double_milk_layer() {
        let order = MilkDecorator {
            inner: Box::new(MilkDecorator {
                inner: Box::new(SimpleCoffee),
            }),
        };
        assert_eq!(order.cost(), 3.0);
    }

    #[test]
    fn test_mixed_layers() {
        let order = SugarDecorator {
            inner: Box::new(MilkDecorator {
                inner: Box::new(SimpleCoffee),
            }),
        };
        assert_eq!(order.cost(), 2.75);
        assert_eq!(order.description(), "coffee + milk + sugar");
    }

    #[test]
    fn test_generic_rendition_matches_dynamic() {
        let boxed = MilkDecorator {
            inner: Box::new(MilkDecorator {
                inner: Box::new(SimpleCoffee),
            }),
        };
        let generic = Milk(Milk(SimpleCoffee));

        assert_eq!(boxed.cost(), generic.cost());
        assert_eq!(boxed.description(), generic.description());
    }

    #[test]
    fn test_every_layer_keeps_the_contract() {
        // A decorated coffee is itself a valid input to the next decorator.
        fn add_milk(inner: Box<dyn Coffee>) -> Box<dyn Coffee> {
            Box::new(MilkDecorator { inner })
        }

        let mut order: Box<dyn Coffee> = Box::new(SimpleCoffee);
        for _ in 0..4 {
            order = add_milk(order);
        }
        assert_eq!(order.cost(), 4.0);
    }
}

fn main() {
    println!("Pattern 6: Decorator");
    println!("=====================\n");

    println!("=== Coffee Decorators (Trait Objects) ===");
    decorator_trait_object_example();
    println!();

    println!("=== Coffee Decorators (Generics) ===");
    decorator_generic_example();
}
