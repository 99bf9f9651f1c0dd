// Pattern 9: Observer - Ordered Listener Registry
// Demonstrates synchronous fan-out to registered listeners, in registration
// order, plus a channel-based publisher for cross-thread delivery.

use std::sync::{Arc, Mutex};

use crossbeam::channel::{unbounded, Receiver, Sender};

// ============================================================================
// Example: Listener Registry with Trait Objects
// ============================================================================

trait Listener {
    fn update(&mut self, event: &str);
}

struct HeadlineDisplay {
    name: String,
}

impl Listener for HeadlineDisplay {
    fn update(&mut self, event: &str) {
        println!("  [{}] showing headline: {}", self.name, event);
    }
}

struct HeadlineArchive {
    entries: Vec<String>,
}

impl Listener for HeadlineArchive {
    fn update(&mut self, event: &str) {
        self.entries.push(event.to_string());
        println!("  [archive] stored ({} total)", self.entries.len());
    }
}

struct Newsroom {
    // Append-only: no dedup, no removal. Notification walks this order.
    listeners: Vec<Arc<Mutex<dyn Listener + Send>>>,
}

impl Newsroom {
    fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    fn attach(&mut self, listener: Arc<Mutex<dyn Listener + Send>>) {
        self.listeners.push(listener);
    }

    // Blocking sequential fan-out; with nothing attached this is a no-op.
    fn notify(&self, event: &str) {
        for listener in &self.listeners {
            listener.lock().unwrap().update(event);
        }
    }
}

fn observer_registry_example() {
    let mut newsroom = Newsroom::new();

    let display = Arc::new(Mutex::new(HeadlineDisplay {
        name: "lobby screen".to_string(),
    }));
    let archive = Arc::new(Mutex::new(HeadlineArchive {
        entries: Vec::new(),
    }));

    newsroom.attach(display);
    newsroom.attach(archive.clone());

    println!("publishing first headline:");
    newsroom.notify("markets open higher");
    println!("publishing second headline:");
    newsroom.notify("rain expected tonight");

    println!("archive holds {} entries", archive.lock().unwrap().entries.len());
}

// ============================================================================
// Example: Channel-based Publisher
// ============================================================================

struct Publisher {
    subscribers: Vec<Sender<String>>,
}

impl Publisher {
    fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    fn subscribe(&mut self) -> Receiver<String> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    // Dropping a receiver unsubscribes it: dead senders are pruned here.
    fn publish(&mut self, event: &str) {
        self.subscribers
            .retain(|tx| tx.send(event.to_string()).is_ok());
    }

    fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

fn observer_channel_example() {
    let mut publisher = Publisher::new();

    let rx1 = publisher.subscribe();
    let rx2 = publisher.subscribe();

    publisher.publish("breaking news");
    println!("subscriber 1 got: {}", rx1.recv().unwrap());
    println!("subscriber 2 got: {}", rx2.recv().unwrap());

    drop(rx2);
    publisher.publish("follow-up story");
    println!(
        "after one receiver dropped, {} subscriber remains",
        publisher.subscriber_count()
    );
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // Records every delivery into a shared journal so order is observable.
    struct JournalingListener {
        name: &'static str,
        journal: Arc<Mutex<Vec<String>>>,
    }

    impl Listener for JournalingListener {
        fn update(&mut self, event: &str) {
            self.journal
                .lock()
                .unwrap()
                .push(format!("{}:{}", self.name, event));
        }
    }

    #[test]
    fn test_notify_in_attachment_order() {
        let journal = Arc::new(Mutex::new(Vec::new()));
        let mut newsroom = Newsroom::new();

        newsroom.attach(Arc::new(Mutex::new(JournalingListener {
            name: "first",
            journal: journal.clone(),
        })));
        newsroom.attach(Arc::new(Mutex::new(JournalingListener {
            name: "second",
            journal: journal.clone(),
        })));

        newsroom.notify("X");

        let entries = journal.lock().unwrap();
        assert_eq!(*entries, vec!["first:X", "second:X"]);
    }

    #[test]
    fn test_notify_without_listeners_is_a_noop() {
        let newsroom = Newsroom::new();
        newsroom.notify("X");
    }

    #[test]
    fn test_duplicate_attach_delivers_twice() {
        let journal = Arc::new(Mutex::new(Vec::new()));
        let listener = Arc::new(Mutex::new(JournalingListener {
            name: "dup",
            journal: journal.clone(),
        }));

        let mut newsroom = Newsroom::new();
        newsroom.attach(listener.clone());
        newsroom.attach(listener);

        newsroom.notify("X");
        assert_eq!(journal.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_archive_accumulates() {
        let archive = Arc::new(Mutex::new(HeadlineArchive {
            entries: Vec::new(),
        }));

        let mut newsroom = Newsroom::new();
        newsroom.attach(archive.clone());
        newsroom.notify("one");
        newsroom.notify("two");

        assert_eq!(archive.lock().unwrap().entries, vec!["one", "two"]);
    }

    #[test]
    fn test_channel_delivery() {
        let mut publisher = Publisher::new();
        let rx1 = publisher.subscribe();
        let rx2 = publisher.subscribe();

        publisher.publish("X");

        assert_eq!(rx1.recv().unwrap(), "X");
        assert_eq!(rx2.recv().unwrap(), "X");
    }

    #[test]
    fn test_dropped_receiver_is_pruned() {
        let mut publisher = Publisher::new();
        let rx1 = publisher.subscribe();
        let rx2 = publisher.subscribe();
        assert_eq!(publisher.subscriber_count(), 2);

        drop(rx2);
        publisher.publish("X");

        assert_eq!(publisher.subscriber_count(), 1);
        assert_eq!(rx1.recv().unwrap(), "X");
    }
}

fn main() {
    println!("Pattern 9: Observer");
    println!("====================\n");

    println!("=== Listener Registry (Trait Objects) ===");
    observer_registry_example();
    println!();

    println!("=== Publisher (Channels) ===");
    observer_channel_example();
}
