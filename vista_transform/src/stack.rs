// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Save/restore stack of matrix snapshots.

use kurbo::Affine;
use smallvec::SmallVec;

use crate::TransformError;

/// Inline capacity before the stack spills to the heap.
///
/// Viewer frames nest at most a couple of levels deep.
const INLINE_CAPACITY: usize = 8;

/// How a `restore` on an empty stack is handled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum UnderflowHandling {
    /// Panic in debug builds; log and ignore in release builds.
    #[default]
    DebugAssert,
    /// Always log and ignore.
    Ignore,
}

/// Ordered sequence of matrix snapshots pushed on save and popped on restore.
#[derive(Clone, Debug, Default)]
pub struct TransformStack {
    entries: SmallVec<[Affine; INLINE_CAPACITY]>,
}

impl TransformStack {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a snapshot.
    pub fn push(&mut self, transform: Affine) {
        self.entries.push(transform);
    }

    /// Pops the most recent snapshot.
    pub fn pop(&mut self) -> Result<Affine, TransformError> {
        self.entries.pop().ok_or(TransformError::EmptyStack)
    }

    /// Returns the most recent snapshot without removing it.
    #[must_use]
    pub fn top(&self) -> Option<Affine> {
        self.entries.last().copied()
    }

    /// Number of snapshots on the stack.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every snapshot.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Affine;

    use super::TransformStack;
    use crate::TransformError;

    #[test]
    fn push_pop_is_lifo() {
        let mut stack = TransformStack::new();
        stack.push(Affine::scale(2.0));
        stack.push(Affine::translate((3.0, 4.0)));
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.top(), Some(Affine::translate((3.0, 4.0))));

        assert_eq!(stack.pop(), Ok(Affine::translate((3.0, 4.0))));
        assert_eq!(stack.pop(), Ok(Affine::scale(2.0)));
        assert!(stack.is_empty());
    }

    #[test]
    fn pop_on_empty_is_an_error() {
        let mut stack = TransformStack::new();
        assert_eq!(stack.pop(), Err(TransformError::EmptyStack));
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn spills_past_inline_capacity() {
        let mut stack = TransformStack::new();
        for i in 0..20 {
            stack.push(Affine::translate((f64::from(i), 0.0)));
        }
        assert_eq!(stack.depth(), 20);
        for i in (0..20).rev() {
            assert_eq!(stack.pop(), Ok(Affine::translate((f64::from(i), 0.0))));
        }
        assert!(stack.is_empty());
    }

    #[test]
    fn clear_resets_depth() {
        let mut stack = TransformStack::new();
        stack.push(Affine::IDENTITY);
        stack.push(Affine::IDENTITY);
        stack.clear();
        assert_eq!(stack.depth(), 0);
        assert_eq!(stack.top(), None);
    }
}
