//! Ordered observer table and synchronous fan-out
//!
//! The table is the only mutable shared state in the crate. Reads (every
//! dispatch) load a lock-free snapshot via `arc-swap`; writes (every
//! registration) are serialized by a mutex and replace the snapshot
//! copy-on-write. A dispatch therefore always sees exactly the
//! registrations that existed when it started: an observer never fires
//! twice for one event, and a concurrent registration applies to the
//! next dispatch ordered after its store rather than dropping anything.

use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use arc_swap::ArcSwap;
use parking_lot::Mutex;

use crate::event::Event;
use crate::observer::Observer;
use crate::{Error, Result};

/// Ordered collection of observers with synchronous dispatch.
///
/// Registrations keep insertion order and may contain duplicates. There is
/// no unregister operation; the table lives as long as its owner.
pub struct Registry {
    observers: ArcSwap<Vec<Arc<dyn Observer>>>,
    write_lock: Mutex<()>,
    capacity: Option<usize>,
}

impl Registry {
    /// Empty table without a capacity limit.
    #[must_use]
    pub fn new() -> Self {
        Self {
            observers: ArcSwap::from_pointee(Vec::new()),
            write_lock: Mutex::new(()),
            capacity: None,
        }
    }

    /// Empty table that refuses registrations beyond `capacity`.
    #[must_use]
    pub fn bounded(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
            ..Self::new()
        }
    }

    /// Append an observer, reporting capacity exhaustion as an error.
    ///
    /// # Errors
    ///
    /// [`Error::RegistryFull`] when the table was created with
    /// [`bounded`](Self::bounded) and already holds `capacity` observers.
    /// This is the only failure mode.
    pub fn try_register(&self, observer: Arc<dyn Observer>) -> Result<()> {
        let _guard = self.write_lock.lock();
        let current = self.observers.load();
        if let Some(capacity) = self.capacity {
            if current.len() >= capacity {
                return Err(Error::RegistryFull { capacity });
            }
        }
        let mut next = Vec::with_capacity(current.len() + 1);
        next.extend(current.iter().cloned());
        next.push(observer);
        self.observers.store(Arc::new(next));
        Ok(())
    }

    /// Append an observer. `false` only when a capacity limit is exhausted.
    pub fn register(&self, observer: Arc<dyn Observer>) -> bool {
        self.try_register(observer).is_ok()
    }

    /// Invoke every registered observer with `event`, synchronously, in
    /// registration order.
    ///
    /// Each call is isolated: an observer that panics is unwound and the
    /// remaining observers still run. Blocking observers block the caller;
    /// there is no queue and no timeout.
    pub fn dispatch(&self, event: &Event) {
        let snapshot = self.observers.load_full();
        for observer in snapshot.iter() {
            let _ = catch_unwind(AssertUnwindSafe(|| observer.observe(event)));
        }
    }

    /// Number of currently registered observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.load().len()
    }

    /// Capacity limit, when one was configured.
    #[must_use]
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("observers", &self.observer_count())
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::severity::Severity;

    struct CountingObserver {
        count: Arc<AtomicUsize>,
    }

    impl Observer for CountingObserver {
        fn observe(&self, _event: &Event) {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn dispatch_invokes_each_observer_exactly_once() {
        let registry = Registry::new();
        let counts: Vec<Arc<AtomicUsize>> =
            (0..3).map(|_| Arc::new(AtomicUsize::new(0))).collect();
        for count in &counts {
            registry.register(Arc::new(CountingObserver {
                count: Arc::clone(count),
            }));
        }

        registry.dispatch(&Event::new(Severity::Information, "once"));

        for count in &counts {
            assert_eq!(count.load(Ordering::SeqCst), 1);
        }
    }

    #[test]
    fn duplicate_registrations_are_kept() {
        let registry = Registry::new();
        let count = Arc::new(AtomicUsize::new(0));
        let observer = Arc::new(CountingObserver {
            count: Arc::clone(&count),
        });
        registry.register(observer.clone());
        registry.register(observer);

        registry.dispatch(&Event::new(Severity::Debugging, "twice"));
        assert_eq!(count.load(Ordering::SeqCst), 2);
        assert_eq!(registry.observer_count(), 2);
    }

    #[test]
    fn bounded_registry_rejects_overflow() {
        let registry = Registry::bounded(1);
        assert!(registry.register(Arc::new(|_: &Event| {})));
        assert!(!registry.register(Arc::new(|_: &Event| {})));
        assert_eq!(registry.observer_count(), 1);

        let err = registry
            .try_register(Arc::new(|_: &Event| {}))
            .expect_err("table is full");
        assert_eq!(err.to_string(), "observer table is full (capacity 1)");
    }

    #[test]
    fn panicking_observer_does_not_suppress_the_rest() {
        let registry = Registry::new();
        registry.register(Arc::new(|_: &Event| panic!("observer fault")));
        let count = Arc::new(AtomicUsize::new(0));
        registry.register(Arc::new(CountingObserver {
            count: Arc::clone(&count),
        }));

        registry.dispatch(&Event::new(Severity::Error, "fault ahead"));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn concurrent_registration_loses_nothing() {
        let registry = Arc::new(Registry::new());
        let threads: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || {
                    for _ in 0..16 {
                        assert!(registry.register(Arc::new(|_: &Event| {})));
                    }
                })
            })
            .collect();
        for thread in threads {
            thread.join().expect("registering thread");
        }
        assert_eq!(registry.observer_count(), 8 * 16);
    }
}
