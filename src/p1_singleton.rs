// Pattern 1: Singleton - Process-wide Lazy Instance
// Demonstrates the execute-once initialization gate behind a global accessor.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, OnceLock};
use std::thread;

use lazy_static::lazy_static;

// ============================================================================
// Example: Singleton with OnceLock
// ============================================================================

// Counts constructor executions so the execute-once guarantee is observable.
static INIT_CALLS: AtomicUsize = AtomicUsize::new(0);

struct AppConfig {
    environment: String,
}

impl AppConfig {
    // First call constructs the instance; every later call, including
    // concurrent ones, returns the same reference.
    fn instance() -> &'static AppConfig {
        static INSTANCE: OnceLock<AppConfig> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            INIT_CALLS.fetch_add(1, Ordering::SeqCst);
            AppConfig {
                environment: std::env::var("APP_ENV")
                    .unwrap_or_else(|_| "production".to_string()),
            }
        })
    }
}

fn singleton_oncelock_example() {
    let config = AppConfig::instance();
    println!("AppConfig singleton:");
    println!("  environment: {}", config.environment);

    let config2 = AppConfig::instance();
    println!("  same instance: {}", std::ptr::eq(config, config2));
    println!("  constructor runs: {}", INIT_CALLS.load(Ordering::SeqCst));
}

// ============================================================================
// Example: Concurrent Accessors See One Construction
// ============================================================================

fn singleton_concurrent_example() {
    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(|| AppConfig::instance() as *const AppConfig as usize))
        .collect();

    let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    println!("8 threads called instance():");
    println!(
        "  all identical: {}",
        addresses.windows(2).all(|pair| pair[0] == pair[1])
    );
    println!("  constructor runs: {}", INIT_CALLS.load(Ordering::SeqCst));
}

// ============================================================================
// Example: Mutable Singleton with lazy_static
// ============================================================================

struct StatusBoard {
    message: String,
}

lazy_static! {
    // The record itself is global; interior mutability goes through the Mutex.
    static ref STATUS: Mutex<StatusBoard> = Mutex::new(StatusBoard {
        message: "starting up".to_string(),
    });
}

fn set_status(message: &str) {
    STATUS.lock().unwrap().message = message.to_string();
}

fn current_status() -> String {
    STATUS.lock().unwrap().message.clone()
}

fn singleton_lazy_static_example() {
    println!("StatusBoard singleton:");
    println!("  initial: {}", current_status());
    set_status("serving requests");
    println!("  updated: {}", current_status());
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_instance() {
        let a = AppConfig::instance();
        let b = AppConfig::instance();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_concurrent_accessors_identical() {
        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(|| AppConfig::instance() as *const AppConfig as usize))
            .collect();

        let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        let first = addresses[0];
        assert!(addresses.iter().all(|&addr| addr == first));
    }

    #[test]
    fn test_constructor_runs_once() {
        // Hammer the accessor from several threads, then check the counter.
        let handles: Vec<_> = (0..8)
            .map(|_| {
                thread::spawn(|| {
                    for _ in 0..100 {
                        AppConfig::instance();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(INIT_CALLS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_repeated_access_is_idempotent() {
        let before = AppConfig::instance().environment.clone();
        for _ in 0..10 {
            AppConfig::instance();
        }
        assert_eq!(AppConfig::instance().environment, before);
    }

    #[test]
    fn test_status_board_mutation() {
        set_status("under test");
        assert_eq!(current_status(), "under test");
    }
}

fn main() {
    println!("Pattern 1: Singleton");
    println!("=====================\n");

    println!("=== Singleton (OnceLock) ===");
    singleton_oncelock_example();
    println!();

    println!("=== Concurrent Accessors ===");
    singleton_concurrent_example();
    println!();

    println!("=== Mutable Singleton (lazy_static) ===");
    singleton_lazy_static_example();
}
