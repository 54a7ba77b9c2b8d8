//! Id generation for newly created nodes and edges.

use uuid::Uuid;

pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

pub const DEFAULT_PREFIX: &str = "dndnode_";

/// `prefix` followed by a counter, starting at `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_PREFIX)
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 0,
        }
    }

    /// Continues counting from `next`, e.g. after loading a saved document.
    pub fn starting_at(mut self, next: u64) -> Self {
        self.next = next;
        self
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

/// Random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_ids_count_from_zero() {
        let mut ids = SequentialIds::new();
        assert_eq!(ids.next_id(), "dndnode_0");
        assert_eq!(ids.next_id(), "dndnode_1");

        let mut ids = SequentialIds::with_prefix("e").starting_at(7);
        assert_eq!(ids.next_id(), "e7");
    }

    #[test]
    fn uuid_ids_are_distinct() {
        let mut ids = UuidIds;
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a).is_ok());
    }
}
