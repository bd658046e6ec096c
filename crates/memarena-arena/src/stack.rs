//! LIFO cursor over the stack region.
//!
//! [`StackRegion`] only tracks the cursor; the bytes live in the
//! [`crate::Arena`]. Each reservation may skip a few padding bytes so the
//! payload starts at a multiple of its element width, and the padding is
//! handed back to the caller so the matching release can rewind past it.

use memarena_core::MemoryError;

/// Cursor state for the stack region.
#[derive(Clone, Debug)]
pub struct StackRegion {
    /// Length of the stack region in bytes.
    capacity: usize,
    /// Bytes in use; the next push starts here. Zero means empty.
    used: usize,
}

impl StackRegion {
    /// Create an empty stack over a region of `capacity` bytes.
    pub fn new(capacity: usize) -> Self {
        Self { capacity, used: 0 }
    }

    /// Reserve `byte_len` bytes aligned to `align`.
    ///
    /// Returns `(offset, padding)`: the aligned offset of the payload and
    /// the number of bytes skipped to reach it. On overflow nothing moves.
    pub fn reserve(&mut self, byte_len: usize, align: usize) -> Result<(usize, usize), MemoryError> {
        let overflow = |requested| MemoryError::StackOverflow {
            requested,
            available: self.remaining(),
        };
        let offset = self
            .used
            .checked_next_multiple_of(align)
            .ok_or_else(|| overflow(usize::MAX))?;
        let padding = offset - self.used;
        let end = offset
            .checked_add(byte_len)
            .ok_or_else(|| overflow(padding.saturating_add(byte_len)))?;
        if end > self.capacity {
            return Err(overflow(end - self.used));
        }
        self.used = end;
        Ok((offset, padding))
    }

    /// Rewind the cursor by `block_len` bytes (payload plus padding).
    ///
    /// Clamps at empty. The released bytes are left as they are.
    pub fn release(&mut self, block_len: usize) {
        self.used = self.used.saturating_sub(block_len);
    }

    /// Rewind to empty without touching the bytes.
    pub fn reset(&mut self) {
        self.used = 0;
    }

    /// Bytes currently in use, padding included.
    pub fn used(&self) -> usize {
        self.used
    }

    /// Offset of the last occupied byte, or `None` when empty.
    pub fn top(&self) -> Option<usize> {
        self.used.checked_sub(1)
    }

    /// Whether nothing is on the stack.
    pub fn is_empty(&self) -> bool {
        self.used == 0
    }

    /// Total capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bytes left before the stack is full.
    pub fn remaining(&self) -> usize {
        self.capacity - self.used
    }
}
