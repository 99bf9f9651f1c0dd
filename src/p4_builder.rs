// Pattern 4: Builder - Configure Then Finalize
// Demonstrates fluent step-by-step construction and a director that sequences
// a fixed recipe over interchangeable builders.

use std::mem;

#[derive(Debug, Default, Clone, PartialEq)]
struct House {
    windows: String,
    doors: String,
    roof: String,
}

// ============================================================================
// Example: Consuming Fluent Builder
// ============================================================================

#[derive(Default)]
struct HouseBuilder {
    windows: String,
    doors: String,
    roof: String,
}

impl House {
    fn builder() -> HouseBuilder {
        HouseBuilder::default()
    }
}

impl HouseBuilder {
    // Each setter takes `self` and returns `self`, so the in-progress house
    // stays exclusively owned by the chain until build() transfers it out.
    fn windows(mut self, windows: impl Into<String>) -> Self {
        self.windows = windows.into();
        self
    }

    fn doors(mut self, doors: impl Into<String>) -> Self {
        self.doors = doors.into();
        self
    }

    fn roof(mut self, roof: impl Into<String>) -> Self {
        self.roof = roof.into();
        self
    }

    // No validation: finalizing early just yields a partially-populated house.
    fn build(self) -> House {
        House {
            windows: self.windows,
            doors: self.doors,
            roof: self.roof,
        }
    }
}

fn fluent_builder_example() {
    let house = House::builder()
        .windows("Bay Windows")
        .doors("Oak Doors")
        .roof("Slate Roof")
        .build();

    println!("Fluent build: {:?}", house);

    let partial = House::builder().roof("Tin Roof").build();
    println!("Partial build: {:?}", partial);
}

// ============================================================================
// Example: Step Builders with a Director
// ============================================================================

// The step interface lets the director drive any concrete builder without
// knowing which family of parts it installs.
trait BuildsHouse {
    fn add_windows(&mut self);
    fn add_doors(&mut self);
    fn add_roof(&mut self);
    fn finish(&mut self) -> House;
}

#[derive(Default)]
struct VillaBuilder {
    house: House,
}

impl BuildsHouse for VillaBuilder {
    fn add_windows(&mut self) {
        self.house.windows = "Villa Windows".to_string();
    }

    fn add_doors(&mut self) {
        self.house.doors = "Villa Doors".to_string();
    }

    fn add_roof(&mut self) {
        self.house.roof = "Villa Roof".to_string();
    }

    fn finish(&mut self) -> House {
        mem::take(&mut self.house)
    }
}

#[derive(Default)]
struct CabinBuilder {
    house: House,
}

impl BuildsHouse for CabinBuilder {
    fn add_windows(&mut self) {
        self.house.windows = "Cabin Windows".to_string();
    }

    fn add_doors(&mut self) {
        self.house.doors = "Cabin Doors".to_string();
    }

    fn add_roof(&mut self) {
        self.house.roof = "Cabin Roof".to_string();
    }

    fn finish(&mut self) -> House {
        mem::take(&mut self.house)
    }
}

// The director owns the step ordering, so callers only pick a builder.
struct Director<B: BuildsHouse> {
    builder: B,
}

impl<B: BuildsHouse> Director<B> {
    fn new(builder: B) -> Self {
        Self { builder }
    }

    fn construct(&mut self) -> House {
        self.builder.add_windows();
        self.builder.add_doors();
        self.builder.add_roof();
        self.builder.finish()
    }
}

fn director_example() {
    let villa = Director::new(VillaBuilder::default()).construct();
    println!("Villa recipe: {:?}", villa);

    let cabin = Director::new(CabinBuilder::default()).construct();
    println!("Cabin recipe: {:?}", cabin);
}

// ============================================================================
// Tests
// ============================================================================


fn main() {
    println!("Pattern 4: Builder");
    println!("===================\n");

    println!("=== Fluent Builder ===");
    fluent_builder_example();
    println!();

    println!("=== Director over Step Builders ===");
    director_example();
}
