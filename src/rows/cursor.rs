//! # Row Cursor
//!
//! This module provides `RowCursor`, the single mutable offset shared by
//! every field of one row operation. The cursor is created per row call,
//! owned exclusively by that call stack, and discarded at its end or on
//! first failure; it never carries state across rows.
//!
//! The cursor has exactly one legal direction (forward) and one terminal
//! condition (all fields processed, or first failure). Advancement is
//! validated by the row paths against the type registry; the cursor itself
//! only tracks position against the buffer end.

/// Monotonically advancing byte position within one row buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowCursor {
    pos: usize,
    end: usize,
}

impl RowCursor {
    /// Creates a cursor over a buffer of `len` bytes, positioned at 0.
    pub fn new(len: usize) -> Self {
        Self { pos: 0, end: len }
    }

    /// Current byte offset from the start of the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left between the current position and the buffer end.
    pub fn remaining(&self) -> usize {
        self.end - self.pos
    }

    /// Returns true if at least `n` bytes remain.
    pub fn has(&self, n: usize) -> bool {
        self.remaining() >= n
    }

    /// Moves the position forward by `n` bytes.
    ///
    /// Callers check `has(n)` (or receive the count from a codec routine
    /// that already bounds-checked) before advancing; overrunning the
    /// buffer is a programming error.
    pub fn advance(&mut self, n: usize) {
        debug_assert!(self.pos + n <= self.end, "cursor advanced past buffer end");
        self.pos += n;
    }
}
