// Pattern 5: Prototype - Independent Field-wise Copies
// Demonstrates value-semantics cloning and an object-safe clone capability
// with downcasting back to the concrete type.

use std::any::Any;

#[derive(Debug, Clone, PartialEq)]
struct Product {
    name: String,
    category: String,
}

// ============================================================================
// Example: Prototype with Clone
// ============================================================================

fn prototype_clone_example() {
    let original = Product {
        name: "Phone".to_string(),
        category: "Electronics".to_string(),
    };

    let mut copy = original.clone();
    copy.name = "Smartphone".to_string();

    // The copy owns its own fields; mutating it leaves the source untouched.
    println!("original: {:?}", original);
    println!("copy:     {:?}", copy);
}

// ============================================================================
// Example: Object-safe Clone Capability
// ============================================================================

// Clone itself is not object-safe, so the capability returns a boxed copy
// and exposes Any for narrowing back to the concrete type.
trait Prototype {
    fn clone_box(&self) -> Box<dyn Prototype>;
    fn as_any(&self) -> &dyn Any;
    fn describe(&self) -> String;
}

impl Prototype for Product {
    fn clone_box(&self) -> Box<dyn Prototype> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn describe(&self) -> String {
        format!("{} ({})", self.name, self.category)
    }
}

fn prototype_trait_object_example() {
    let original: Box<dyn Prototype> = Box::new(Product {
        name: "Phone".to_string(),
        category: "Electronics".to_string(),
    });

    let copy = original.clone_box();
    println!("cloned through the capability: {}", copy.describe());

    // Concrete-specific access needs an explicit downcast at the call site.
    match copy.as_any().downcast_ref::<Product>() {
        Some(product) => println!("downcast name: {}", product.name),
        None => println!("not a Product"),
    }
}

// ============================================================================
// Tests
// ============================================================================


fn main() {
    println!("Pattern 5: Prototype");
    println!("=====================\n");

    println!("=== Prototype (Clone) ===");
    prototype_clone_example();
    println!();

    println!("=== Prototype (Object-safe Capability) ===");
    prototype_trait_object_example();
}
