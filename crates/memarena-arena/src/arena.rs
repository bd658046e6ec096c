//! The fixed-size byte buffer backing both regions.
//!
//! An [`Arena`] is a single contiguous `Box<[u8]>` allocated once and
//! zero-initialised. Its length never changes, so byte offsets handed out
//! by the allocators stay meaningful for the arena's whole lifetime.

use memarena_core::ArenaId;

use crate::handle::Region;

/// Contiguous byte storage split into a stack prefix and a heap suffix.
pub struct Arena {
    /// Identity stamped into every pointer minted over this arena.
    id: ArenaId,
    /// Backing storage. Allocated to full length at creation.
    bytes: Box<[u8]>,
    /// Length of the stack prefix; the heap is everything after it.
    stack_len: usize,
}

impl Arena {
    /// Allocate a zeroed arena of `total` bytes with a `stack_len` prefix.
    ///
    /// # Panics
    ///
    /// Panics if `stack_len > total`. [`crate::MemoryConfig::validate`]
    /// enforces the stricter half-arena bound before this is reached.
    pub fn new(total: usize, stack_len: usize) -> Self {
        assert!(
            stack_len <= total,
            "stack region ({stack_len} bytes) larger than arena ({total} bytes)"
        );
        Self {
            id: ArenaId::next(),
            bytes: vec![0u8; total].into_boxed_slice(),
            stack_len,
        }
    }

    /// Unique id of this arena.
    pub fn id(&self) -> ArenaId {
        self.id
    }

    /// Total length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the arena has zero length.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Length of the given region in bytes.
    pub fn region_len(&self, region: Region) -> usize {
        match region {
            Region::Stack => self.stack_len,
            Region::Heap => self.bytes.len() - self.stack_len,
        }
    }

    /// Absolute byte offset at which the given region starts.
    pub fn region_base(&self, region: Region) -> usize {
        match region {
            Region::Stack => 0,
            Region::Heap => self.stack_len,
        }
    }

    /// The bytes of one region.
    pub fn region(&self, region: Region) -> &[u8] {
        let (stack, heap) = self.bytes.split_at(self.stack_len);
        match region {
            Region::Stack => stack,
            Region::Heap => heap,
        }
    }

    /// The bytes of one region, mutably.
    pub fn region_mut(&mut self, region: Region) -> &mut [u8] {
        let (stack, heap) = self.bytes.split_at_mut(self.stack_len);
        match region {
            Region::Stack => stack,
            Region::Heap => heap,
        }
    }

    /// The whole buffer, both regions.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Memory usage of the backing storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.bytes.len()
    }
}

impl std::fmt::Debug for Arena {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Arena")
            .field("id", &self.id)
            .field("len", &self.bytes.len())
            .field("stack_len", &self.stack_len)
            .finish()
    }
}
