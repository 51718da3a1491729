//! Bounded undo history of value snapshots

use std::collections::VecDeque;

/// Default number of snapshots kept
pub const DEFAULT_UNDO_DEPTH: usize = 100;

/// Stack of previous states, oldest dropped first once full
#[derive(Debug, Clone)]
pub struct UndoStack<T> {
    snapshots: VecDeque<T>,
    max_depth: usize,
}

impl<T> UndoStack<T> {
    /// Create a stack with the default depth (100)
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_UNDO_DEPTH)
    }

    /// Create with a custom maximum depth, at least 1
    pub fn with_depth(max_depth: usize) -> Self {
        let max_depth = max_depth.max(1);
        Self {
            snapshots: VecDeque::with_capacity(max_depth.min(DEFAULT_UNDO_DEPTH)),
            max_depth,
        }
    }

    /// Record the state prior to a change
    pub fn push(&mut self, snapshot: T) {
        self.snapshots.push_back(snapshot);
        if self.snapshots.len() > self.max_depth {
            self.snapshots.pop_front();
        }
    }

    /// Take the most recent snapshot
    pub fn pop(&mut self) -> Option<T> {
        self.snapshots.pop_back()
    }

    pub fn can_undo(&self) -> bool {
        !self.snapshots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}

impl<T> Default for UndoStack<T> {
    fn default() -> Self {
        Self::new()
    }
}
