//! Role ranks: where a person's job title sits in the configured hierarchy.

use crate::model::Node;
use rustc_hash::FxHashMap as HashMap;

/// Lookup from role name to rank. Unranked nodes share [`RoleRanks::sentinel`], which sorts
/// after every listed role.
#[derive(Debug, Clone, Default)]
pub struct RoleRanks {
    index: HashMap<String, usize>,
    sentinel: usize,
}

impl RoleRanks {
    pub fn new<S: AsRef<str>>(roles: &[S]) -> Self {
        let mut index: HashMap<String, usize> = HashMap::default();
        for (i, role) in roles.iter().enumerate() {
            index.entry(role.as_ref().to_string()).or_insert(i);
        }
        Self {
            index,
            sentinel: roles.len(),
        }
    }

    pub fn sentinel(&self) -> usize {
        self.sentinel
    }

    /// Rank of a role name; empty and unknown roles get the sentinel.
    pub fn rank_of_role(&self, role: &str) -> usize {
        if role.is_empty() {
            return self.sentinel;
        }
        self.index.get(role).copied().unwrap_or(self.sentinel)
    }

    /// Rank of a node. Only person nodes can be ranked.
    pub fn rank(&self, node: &Node) -> usize {
        if !node.is_person() {
            return self.sentinel;
        }
        node.role()
            .map(|role| self.rank_of_role(role))
            .unwrap_or(self.sentinel)
    }
}
