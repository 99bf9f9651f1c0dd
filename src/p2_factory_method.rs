// Pattern 2: Factory Method - Tag to Product
// Demonstrates creation functions that map a discriminator to one of several
// implementations of a shared capability.

use thiserror::Error;

// ============================================================================
// Example: Factory Function with Trait Objects
// ============================================================================

trait Animal {
    fn speak(&self) -> String;
    fn name(&self) -> &str;
}

struct Dog;
impl Animal for Dog {
    fn speak(&self) -> String {
        "Woof!".to_string()
    }
    fn name(&self) -> &str {
        "dog"
    }
}

struct Cat;
impl Animal for Cat {
    fn speak(&self) -> String {
        "Meow!".to_string()
    }
    fn name(&self) -> &str {
        "cat"
    }
}

// Unknown tags yield None instead of panicking; the absent case is part of
// the signature. Adding a variant means a new type and a new match arm,
// call sites stay untouched.
fn create_animal(tag: &str) -> Option<Box<dyn Animal>> {
    match tag {
        "dog" => Some(Box::new(Dog)),
        "cat" => Some(Box::new(Cat)),
        _ => None,
    }
}

fn factory_trait_object_example() {
    for tag in ["dog", "cat", "hamster"] {
        match create_animal(tag) {
            Some(animal) => println!("{} says {}", animal.name(), animal.speak()),
            None => println!("no animal registered for {:?}", tag),
        }
    }
}

// ============================================================================
// Example: Factory with Enums (Zero-Cost)
// ============================================================================

enum KnownAnimal {
    Dog(Dog),
    Cat(Cat),
}

impl KnownAnimal {
    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "dog" => Some(KnownAnimal::Dog(Dog)),
            "cat" => Some(KnownAnimal::Cat(Cat)),
            _ => None,
        }
    }

    fn speak(&self) -> String {
        match self {
            KnownAnimal::Dog(dog) => dog.speak(),
            KnownAnimal::Cat(cat) => cat.speak(),
        }
    }
}

fn factory_enum_example() {
    // No heap allocation, no vtable; the variant set is closed.
    if let Some(animal) = KnownAnimal::from_tag("dog") {
        println!("Enum-based factory: {}", animal.speak());
    }
}

// ============================================================================
// Example: Factory with a Typed Error
// ============================================================================

#[derive(Debug, Error, PartialEq)]
enum CreationError {
    #[error("no animal registered for tag {0:?}")]
    UnknownTag(String),
}

// Same mapping, but the absent case carries the rejected tag for callers
// that report it upstream.
fn try_create_animal(tag: &str) -> Result<Box<dyn Animal>, CreationError> {
    create_animal(tag).ok_or_else(|| CreationError::UnknownTag(tag.to_string()))
}

fn factory_error_example() {
    match try_create_animal("ferret") {
        Ok(animal) => println!("{}", animal.speak()),
        Err(err) => println!("creation failed: {}", err),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_dog() {
        let animal = create_animal("dog").unwrap();
        assert_eq!(animal.speak(), "Woof!");
    }

    #[test]
    fn test_create_cat() {
        let animal = create_animal("cat").unwrap();
        assert_eq!(animal.speak(), "Meow!");
    }

    #[test]
    fn test_unknown_tag_is_absent() {
        assert!(create_animal("unknown").is_none());
    }

    #[test]
    fn test_enum_factory_matches_trait_factory() {
        for tag in ["dog", "cat"] {
            let dynamic = create_animal(tag).unwrap().speak();
            let closed = KnownAnimal::from_tag(tag).unwrap().speak();
            assert_eq!(dynamic, closed);
        }
        assert!(KnownAnimal::from_tag("unknown").is_none());
    }

    #[test]
    fn test_typed_error_carries_tag() {
        let err = try_create_animal("ferret").map(|_| ()).unwrap_err();
        assert_eq!(err, CreationError::UnknownTag("ferret".to_string()));
        assert_eq!(err.to_string(), "no animal registered for tag \"ferret\"");
    }
}

fn main() {
    println!("Pattern 2: Factory Method");
    println!("==========================\n");

    println!("=== Factory Function (Trait Objects) ===");
    factory_trait_object_example();
    println!();

    println!("=== Factory Function (Enums) ===");
    factory_enum_example();
    println!();

    println!("=== Factory Function (Typed Error) ===");
    factory_error_example();
}
