// Pattern 7: Adapter - Translating Between Interfaces
// Demonstrates exposing the target capability a client expects while
// delegating to an adaptee with an incompatible method set.

// ============================================================================
// Example: Sensor Adapter with Trait Objects
// ============================================================================

// Target capability: what the client code is written against.
trait TemperatureSource {
    fn celsius(&self) -> f64;
}

struct CelsiusSensor {
    reading: f64,
}

impl TemperatureSource for CelsiusSensor {
    fn celsius(&self) -> f64 {
        self.reading
    }
}

// Adaptee: an existing sensor with a different interface and unit.
struct FahrenheitSensor {
    reading: f64,
}

impl FahrenheitSensor {
    fn read_fahrenheit(&self) -> f64 {
        self.reading
    }
}

// The adapter exposes exactly the target capability and does the unit
// translation on the way through.
struct FahrenheitAdapter {
    sensor: FahrenheitSensor,
}

impl TemperatureSource for FahrenheitAdapter {
    fn celsius(&self) -> f64 {
        (self.sensor.read_fahrenheit() - 32.0) * 5.0 / 9.0
    }
}

fn report(source: &dyn TemperatureSource) {
    println!("  {:.1} degrees C", source.celsius());
}

fn adapter_trait_object_example() {
    let native = CelsiusSensor { reading: 21.5 };
    let legacy = FahrenheitAdapter {
        sensor: FahrenheitSensor { reading: 212.0 },
    };

    println!("native sensor:");
    report(&native);
    println!("adapted legacy sensor:");
    report(&legacy);
}

// ============================================================================
// Example: Zero-cost Adapter with Generics
// ============================================================================

trait ReadsFahrenheit {
    fn read_fahrenheit(&self) -> f64;
}

impl ReadsFahrenheit for FahrenheitSensor {
    fn read_fahrenheit(&self) -> f64 {
        self.reading
    }
}

// Monomorphized per adaptee type; no boxing, no vtable.
struct IntoCelsius<T> {
    inner: T,
}

impl<T: ReadsFahrenheit> TemperatureSource for IntoCelsius<T> {
    fn celsius(&self) -> f64 {
        (self.inner.read_fahrenheit() - 32.0) * 5.0 / 9.0
    }
}

fn adapter_generic_example() {
    let adapter = IntoCelsius {
        inner: FahrenheitSensor { reading: 98.6 },
    };
    println!("generic adapter: {:.1} degrees C", adapter.celsius());
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_boiling_point() {
        let adapter = FahrenheitAdapter {
            sensor: FahrenheitSensor { reading: 212.0 },
        };
        assert!(approx_eq(adapter.celsius(), 100.0));
    }

    #[test]
    fn test_freezing_point() {
        let adapter = FahrenheitAdapter {
            sensor: FahrenheitSensor { reading: 32.0 },
        };
        assert!(approx_eq(adapter.celsius(), 0.0));
    }

    #[test]
    fn test_adapter_is_a_drop_in_source() {
        // Both the native sensor and the adapter satisfy the same capability.
        let sources: Vec<Box<dyn TemperatureSource>> = vec![
            Box::new(CelsiusSensor { reading: 0.0 }),
            Box::new(FahrenheitAdapter {
                sensor: FahrenheitSensor { reading: 32.0 },
            }),
        ];

        for source in &sources {
            assert!(approx_eq(source.celsius(), 0.0));
        }
    }

    #[test]
    fn test_generic_adapter_matches_dynamic() {
        let dynamic = FahrenheitAdapter {
            sensor: FahrenheitSensor { reading: 98.6 },
        };
        let generic = IntoCelsius {
            inner: FahrenheitSensor { reading: 98.6 },
        };
        assert!(approx_eq(dynamic.celsius(), generic.celsius()));
    }
}

fn main() {
    println!("Pattern 7: Adapter");
    println!("===================\n");

    println!("=== Sensor Adapter (Trait Objects) ===");
    adapter_trait_object_example();
    println!();

    println!("=== Sensor Adapter (Generics) ===");
    adapter_generic_example();
}
