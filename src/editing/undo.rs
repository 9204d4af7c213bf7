// Copyright 2025 the ROI Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Bounded undo history
//!
//! Snapshots are pushed before each mutation and popped on undo. There is
//! no redo stack: a popped snapshot is gone.

use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct UndoState<T> {
    stack: VecDeque<T>,
    capacity: usize,
}

impl<T> UndoState<T> {
    /// Create a history that keeps at most `capacity` snapshots
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            stack: VecDeque::with_capacity(capacity.min(64)),
            capacity,
        }
    }

    /// Record a snapshot, evicting the oldest one past capacity
    pub fn push(&mut self, snapshot: T) {
        self.stack.push_back(snapshot);
        while self.stack.len() > self.capacity {
            self.stack.pop_front();
        }
    }

    /// Remove and return the most recent snapshot
    pub fn pop(&mut self) -> Option<T> {
        self.stack.pop_back()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    #[allow(dead_code)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T> Default for UndoState<T> {
    fn default() -> Self {
        Self::with_capacity(crate::settings::history::CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pop_returns_most_recent() {
        let mut undo = UndoState::with_capacity(5);
        undo.push(1);
        undo.push(2);
        assert_eq!(undo.pop(), Some(2));
        assert_eq!(undo.pop(), Some(1));
        assert_eq!(undo.pop(), None);
    }

    #[test]
    fn pop_on_empty_is_harmless() {
        let mut undo: UndoState<u32> = UndoState::default();
        assert_eq!(undo.pop(), None);
        assert_eq!(undo.pop(), None);
        assert!(undo.is_empty());
    }

    #[test]
    fn oldest_entries_are_evicted_first() {
        let mut undo = UndoState::with_capacity(3);
        for i in 0..5 {
            undo.push(i);
        }
        assert_eq!(undo.len(), 3);
        assert_eq!(undo.pop(), Some(4));
        assert_eq!(undo.pop(), Some(3));
        assert_eq!(undo.pop(), Some(2));
        assert_eq!(undo.pop(), None);
    }

    #[test]
    fn default_capacity_matches_settings() {
        let mut undo = UndoState::default();
        for i in 0..100 {
            undo.push(i);
        }
        assert_eq!(undo.len(), crate::settings::history::CAPACITY);
        assert_eq!(undo.capacity(), crate::settings::history::CAPACITY);
    }
}
