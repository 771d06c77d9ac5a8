//! Unique element ID generation.

use std::sync::atomic::{AtomicU64, Ordering};

/// Produces IDs unique within the generator's lifetime.
pub trait UniqueIdGenerator: Send + Sync {
    /// Return a fresh ID starting with `prefix`.
    fn next_id(&self, prefix: &str) -> String;
}

/// Monotonic counter shared by every prefix (`nav-1`, `nav-2`, `menu-3`).
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    /// Create a generator whose first ID ends in `1`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of IDs handed out so far.
    pub fn issued(&self) -> u64 {
        self.counter.load(Ordering::Relaxed)
    }
}

impl UniqueIdGenerator for SequentialIdGenerator {
    fn next_id(&self, prefix: &str) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{prefix}{n}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_sequential() {
        let ids = SequentialIdGenerator::new();
        assert_eq!(ids.next_id("nav-"), "nav-1");
        assert_eq!(ids.next_id("nav-"), "nav-2");
        assert_eq!(ids.issued(), 2);
    }

    #[test]
    fn counter_is_shared_across_prefixes() {
        let ids = SequentialIdGenerator::new();
        let seen: HashSet<String> = (0..50)
            .map(|i| ids.next_id(if i % 2 == 0 { "nav-" } else { "nav" }))
            .collect();
        assert_eq!(seen.len(), 50);
    }
}
