//! Bounded undo/redo over immutable snapshots.

use std::collections::VecDeque;

pub const DEFAULT_DEPTH: usize = 50;

/// Snapshot history. Callers take a snapshot of the current state before every edit;
/// `undo`/`redo` swap the current state with the neighbouring snapshot.
#[derive(Debug, Clone)]
pub struct History<T> {
    past: VecDeque<T>,
    future: Vec<T>,
    depth: usize,
}

impl<T: Clone> History<T> {
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }

    pub fn with_depth(depth: usize) -> Self {
        Self {
            past: VecDeque::new(),
            future: Vec::new(),
            depth: depth.max(1),
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Records `current` as an undo point and forgets any redo states.
    pub fn take_snapshot(&mut self, current: &T) {
        self.push_past(current.clone());
        self.future.clear();
    }

    /// Returns the state to restore, or `None` when there is nothing to undo.
    pub fn undo(&mut self, current: T) -> Option<T> {
        let previous = self.past.pop_back()?;
        self.future.push(current);
        Some(previous)
    }

    pub fn redo(&mut self, current: T) -> Option<T> {
        let next = self.future.pop()?;
        self.push_past(current);
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    fn push_past(&mut self, state: T) {
        self.past.push_back(state);
        while self.past.len() > self.depth {
            self.past.pop_front();
        }
    }
}

impl<T: Clone> Default for History<T> {
    fn default() -> Self {
        Self::new()
    }
}
