//! The editable role ranking.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Ordered, de-duplicated role names; index `0` is the highest rank.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct RoleList {
    roles: Vec<String>,
}

impl RoleList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `role` (trimmed) and returns its index.
    pub fn add(&mut self, role: &str) -> Result<usize> {
        let role = role.trim();
        if role.is_empty() {
            return Err(Error::EmptyRole);
        }
        if self.contains(role) {
            return Err(Error::DuplicateRole {
                role: role.to_string(),
            });
        }
        self.roles.push(role.to_string());
        Ok(self.roles.len() - 1)
    }

    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.roles.len() {
            Some(self.roles.remove(index))
        } else {
            None
        }
    }

    /// Swaps `index` with the role above it. Returns whether anything moved.
    pub fn move_up(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.roles.len() {
            return false;
        }
        self.roles.swap(index - 1, index);
        true
    }

    /// Swaps `index` with the role below it. Returns whether anything moved.
    pub fn move_down(&mut self, index: usize) -> bool {
        if index + 1 >= self.roles.len() {
            return false;
        }
        self.roles.swap(index, index + 1);
        true
    }

    pub fn contains(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.roles
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.roles.iter().map(String::as_str)
    }
}

/// Builds a list from arbitrary input, dropping blanks and later duplicates.
impl From<Vec<String>> for RoleList {
    fn from(value: Vec<String>) -> Self {
        let mut list = RoleList::new();
        for role in value {
            let _ = list.add(&role);
        }
        list
    }
}

impl From<RoleList> for Vec<String> {
    fn from(value: RoleList) -> Self {
        value.roles
    }
}

impl<S: AsRef<str>> FromIterator<S> for RoleList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = RoleList::new();
        for role in iter {
            let _ = list.add(role.as_ref());
        }
        list
    }
}
