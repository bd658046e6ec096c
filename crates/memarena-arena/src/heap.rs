//! First-fit free-list allocator over the heap region.
//!
//! [`HeapRegion`] keeps the unused parts of the heap as a list of
//! [`FreeBlock`]s. The list is always sorted by offset, blocks never
//! overlap, and no block ends where the next begins: every free merges
//! with its neighbours before returning. Allocation walks the list in
//! offset order and carves from the first block large enough once the
//! payload is padded to its element width. This favours a short scan over
//! tight packing, so small gaps can accumulate in front of larger blocks.

use smallvec::SmallVec;
use tracing::trace;

/// A maximal run of unused heap bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FreeBlock {
    /// Region-relative byte offset of the first free byte.
    pub offset: usize,
    /// Length of the run in bytes.
    pub size: usize,
}

impl FreeBlock {
    /// One past the last byte of the block.
    pub fn end(&self) -> usize {
        self.offset + self.size
    }
}

/// Free-list state for the heap region.
#[derive(Clone, Debug)]
pub struct HeapRegion {
    /// Length of the heap region in bytes.
    capacity: usize,
    /// Unused ranges, sorted by offset, non-overlapping, non-adjacent.
    free: SmallVec<[FreeBlock; 8]>,
}

impl HeapRegion {
    /// Create a heap whose whole `capacity` is one free block.
    pub fn new(capacity: usize) -> Self {
        let mut free = SmallVec::new();
        if capacity > 0 {
            free.push(FreeBlock {
                offset: 0,
                size: capacity,
            });
        }
        Self { capacity, free }
    }

    /// Carve `byte_len` bytes aligned to `align` from the first block that fits.
    ///
    /// Returns `(offset, padding)` where `offset` is the aligned payload
    /// offset and `padding` the bytes skipped at the front of the block.
    /// Returns `None` if no block fits; the list is left untouched.
    pub fn alloc(&mut self, byte_len: usize, align: usize) -> Option<(usize, usize)> {
        let (index, offset, padding) = self.free.iter().enumerate().find_map(|(i, block)| {
            let aligned = block.offset.checked_next_multiple_of(align)?;
            let padding = aligned - block.offset;
            let needed = byte_len.checked_add(padding)?;
            (block.size >= needed).then_some((i, aligned, padding))
        })?;

        let taken = byte_len + padding;
        let block = &mut self.free[index];
        block.offset += taken;
        block.size -= taken;
        if block.size == 0 {
            self.free.remove(index);
        }
        Some((offset, padding))
    }

    /// Return a block to the free list and coalesce.
    ///
    /// Zero-sized blocks are ignored. A block that overlaps a range which
    /// is already free (a double free) is rejected and `false` returned;
    /// the list is left as it was.
    pub fn free(&mut self, block: FreeBlock) -> bool {
        if block.size == 0 {
            return true;
        }
        debug_assert!(block.end() <= self.capacity, "{block:?} outside heap");

        let index = self.free.partition_point(|b| b.offset < block.offset);
        let overlaps_prev = index > 0 && self.free[index - 1].end() > block.offset;
        let overlaps_next = self
            .free
            .get(index)
            .is_some_and(|next| next.offset < block.end());
        if overlaps_prev || overlaps_next {
            return false;
        }

        self.free.insert(index, block);
        self.coalesce();
        true
    }

    /// Merge every pair of touching blocks, left to right.
    fn coalesce(&mut self) {
        let mut i = 0;
        while i + 1 < self.free.len() {
            let next = self.free[i + 1];
            let current = &mut self.free[i];
            if current.end() == next.offset {
                trace!(offset = current.offset, size = current.size, next_size = next.size, "merge free blocks");
                current.size += next.size;
                self.free.remove(i + 1);
                // Retry at the same position: the grown block may touch the next one too.
            } else {
                i += 1;
            }
        }
    }

    /// Forget all allocations; the heap becomes one free block again.
    pub fn reset(&mut self) {
        *self = Self::new(self.capacity);
    }

    /// The free list, sorted by offset.
    pub fn free_blocks(&self) -> &[FreeBlock] {
        &self.free
    }

    /// Total free bytes across all blocks.
    pub fn free_bytes(&self) -> usize {
        self.free.iter().map(|b| b.size).sum()
    }

    /// Size of the largest free block, or zero when the heap is full.
    pub fn largest_free(&self) -> usize {
        self.free.iter().map(|b| b.size).max().unwrap_or(0)
    }

    /// Bytes reserved by live allocations, padding included.
    pub fn used(&self) -> usize {
        self.capacity - self.free_bytes()
    }

    /// Total capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
