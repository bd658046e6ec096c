//! The memory manager: one arena, a stack region, and a heap region.
//!
//! [`Memory`] is the top-level type. It owns the [`Arena`] and the cursor
//! and free-list state for its two regions, mints [`Pointer`]s on push and
//! alloc, and resolves them back to bytes on deref and change.
//!
//! The lifecycle of a pointer is:
//! 1. `push()` / `alloc()` reserves bytes and returns a pointer
//! 2. `deref()` / `change()` read and overwrite the bytes in place
//! 3. `pop()` (strict LIFO) / `free()` (any order) hands the bytes back
//!
//! Nothing records step 3. A pointer used after it is a dangling
//! reference: it resolves to whatever now occupies its range.

use memarena_core::{ArenaId, Element, ElementKind, MemoryError};
use tracing::{debug, warn};

use crate::arena::Arena;
use crate::config::MemoryConfig;
use crate::handle::{Pointer, RawPointer, Region};
use crate::heap::{FreeBlock, HeapRegion};
use crate::raw;
use crate::stack::StackRegion;
use crate::view::View;

/// Fixed-size arena with a LIFO stack and a coalescing heap.
///
/// # Region layout
///
/// ```text
/// arena:  [ stack: 0 .. stack_size | heap: stack_size .. total_size ]
/// stack:  StackRegion  ←─── cursor, grows upward, released in reverse
/// heap:   HeapRegion   ←─── first-fit free list, released in any order
/// ```
///
/// Pointer offsets are relative to their region, and alignment is
/// measured from the region start.
#[derive(Debug)]
pub struct Memory {
    /// Backing bytes for both regions.
    arena: Arena,
    /// Cursor over the stack region.
    stack: StackRegion,
    /// Free list over the heap region.
    heap: HeapRegion,
    /// Configuration this memory was built from.
    config: MemoryConfig,
}

impl Memory {
    /// Build a memory from a validated config.
    ///
    /// Allocates the whole arena up front. The heap starts as a single
    /// free block spanning its region.
    pub fn new(config: MemoryConfig) -> Result<Self, MemoryError> {
        config.validate()?;
        let stack_size = config.resolved_stack_size();
        let arena = Arena::new(config.total_size, stack_size);
        debug!(
            arena = %arena.id(),
            total = config.total_size,
            stack = stack_size,
            "memory created"
        );
        Ok(Self {
            stack: StackRegion::new(stack_size),
            heap: HeapRegion::new(config.total_size - stack_size),
            arena,
            config,
        })
    }

    /// Build a memory of `total_size` bytes with the default stack share.
    pub fn with_size(total_size: usize) -> Result<Self, MemoryError> {
        Self::new(MemoryConfig::new(total_size))
    }

    // ── Stack ───────────────────────────────────────────────────

    /// Copy `data` onto the stack.
    ///
    /// The payload starts at the next offset that is a multiple of `T`'s
    /// width. Fails with [`MemoryError::StackOverflow`] if the padded
    /// payload does not fit; nothing is written in that case.
    pub fn push<T: Element>(&mut self, data: &[T]) -> Result<Pointer<T>, MemoryError> {
        let bytes: &[u8] = bytemuck::cast_slice(data);
        let (offset, padding) = self
            .stack
            .reserve(bytes.len(), T::WIDTH)
            .inspect_err(|err| debug!(arena = %self.arena.id(), %err, "push rejected"))?;

        let ptr = RawPointer::new(
            self.arena.id(),
            Region::Stack,
            offset,
            data.len(),
            T::KIND,
            padding,
        );
        raw::window_mut(&mut self.arena, &ptr).copy_from_slice(bytes);
        debug!(arena = %self.arena.id(), %ptr, sp = ?self.stack.top(), "push");
        Ok(Pointer::from_raw(ptr))
    }

    /// Release the most recent push.
    ///
    /// Pops must mirror pushes in reverse order; the pointer is trusted
    /// and the cursor simply rewinds by its payload plus padding, clamped
    /// at empty. Bytes are not cleared.
    ///
    /// # Panics
    ///
    /// Panics if `ptr` is a heap pointer or comes from another memory.
    pub fn pop<T: Element>(&mut self, ptr: &Pointer<T>) {
        self.pop_raw(&ptr.raw());
    }

    /// Kind-erased [`Memory::pop`].
    ///
    /// # Panics
    ///
    /// Panics if `ptr` is a heap pointer or comes from another memory.
    pub fn pop_raw(&mut self, ptr: &RawPointer) {
        self.check_pointer(ptr, Region::Stack, "pop");
        self.stack.release(ptr.block_len());
        debug!(arena = %self.arena.id(), %ptr, sp = ?self.stack.top(), "pop");
    }

    // ── Heap ────────────────────────────────────────────────────

    /// Reserve `count` elements of `T` on the heap.
    ///
    /// Fails with [`MemoryError::OutOfMemory`] if no free block can hold
    /// the padded payload.
    pub fn alloc<T: Element>(&mut self, count: usize) -> Result<Pointer<T>, MemoryError> {
        self.alloc_raw(count, T::KIND).map(Pointer::from_raw)
    }

    /// Reserve `count` elements of a runtime-chosen kind on the heap.
    ///
    /// The allocation is not zeroed: it holds whatever the range last held.
    pub fn alloc_raw(&mut self, count: usize, kind: ElementKind) -> Result<RawPointer, MemoryError> {
        let width = kind.byte_width();
        let Some(byte_len) = count.checked_mul(width) else {
            return Err(self.out_of_memory(usize::MAX, kind));
        };
        let Some((offset, padding)) = self.heap.alloc(byte_len, width) else {
            let err = self.out_of_memory(byte_len, kind);
            debug!(arena = %self.arena.id(), %err, "alloc rejected");
            return Err(err);
        };

        let ptr = RawPointer::new(self.arena.id(), Region::Heap, offset, count, kind, padding);
        debug!(
            arena = %self.arena.id(),
            %ptr,
            free_blocks = self.heap.free_blocks().len(),
            "alloc"
        );
        Ok(ptr)
    }

    /// Return a heap allocation to the free list.
    ///
    /// Frees may happen in any order; adjacent free ranges are merged
    /// immediately. Freeing a range that is already free is ignored with
    /// a warning.
    ///
    /// # Panics
    ///
    /// Panics if `ptr` is a stack pointer or comes from another memory.
    pub fn free<T: Element>(&mut self, ptr: &Pointer<T>) {
        self.free_raw(&ptr.raw());
    }

    /// Kind-erased [`Memory::free`].
    ///
    /// # Panics
    ///
    /// Panics if `ptr` is a stack pointer or comes from another memory.
    pub fn free_raw(&mut self, ptr: &RawPointer) {
        self.check_pointer(ptr, Region::Heap, "free");
        let block = FreeBlock {
            offset: ptr.block_offset(),
            size: ptr.block_len(),
        };
        if self.heap.free(block) {
            debug!(
                arena = %self.arena.id(),
                %ptr,
                free_blocks = self.heap.free_blocks().len(),
                "free"
            );
        } else {
            warn!(arena = %self.arena.id(), %ptr, "ignoring free of a range that is already free");
        }
    }

    // ── Access ──────────────────────────────────────────────────

    /// Typed view over `ptr`'s elements.
    ///
    /// # Panics
    ///
    /// Panics if `ptr` comes from another memory.
    pub fn view<T: Element>(&self, ptr: &Pointer<T>) -> View<'_, T> {
        View::new(raw::window(&self.arena, &ptr.raw()))
    }

    /// Payload bytes of a kind-erased pointer.
    ///
    /// # Panics
    ///
    /// Panics if `ptr` comes from another memory.
    pub fn raw_bytes(&self, ptr: &RawPointer) -> &[u8] {
        raw::window(&self.arena, ptr)
    }

    /// Overwrite `ptr`'s elements with `data`, zero-filling the tail.
    ///
    /// Never resizes. If `data` is longer than the pointer, returns
    /// [`MemoryError::OversizedWrite`] and leaves every byte as it was.
    ///
    /// # Panics
    ///
    /// Panics if `ptr` comes from another memory.
    pub fn change<T: Element>(&mut self, ptr: &Pointer<T>, data: &[T]) -> Result<(), MemoryError> {
        if data.len() > ptr.len() {
            return Err(MemoryError::OversizedWrite {
                capacity: ptr.len(),
                len: data.len(),
            });
        }
        let src: &[u8] = bytemuck::cast_slice(data);
        let dst = raw::window_mut(&mut self.arena, &ptr.raw());
        let (head, tail) = dst.split_at_mut(src.len());
        head.copy_from_slice(src);
        tail.fill(0);
        Ok(())
    }

    // ── Lifecycle ───────────────────────────────────────────────

    /// Empty both regions without clearing any bytes.
    ///
    /// Every outstanding pointer dangles afterwards.
    pub fn reset(&mut self) {
        self.stack.reset();
        self.heap.reset();
        debug!(arena = %self.arena.id(), "memory reset");
    }

    // ── Inspection ──────────────────────────────────────────────

    /// Unique id of the underlying arena.
    pub fn id(&self) -> ArenaId {
        self.arena.id()
    }

    /// The configuration this memory was built from.
    pub fn config(&self) -> &MemoryConfig {
        &self.config
    }

    /// The underlying arena.
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Heap free list, sorted by offset.
    pub fn free_blocks(&self) -> &[FreeBlock] {
        self.heap.free_blocks()
    }

    /// Bytes in use on the stack, padding included.
    pub fn stack_used(&self) -> usize {
        self.stack.used()
    }

    /// Offset of the last occupied stack byte, or `None` when empty.
    pub fn stack_pointer(&self) -> Option<usize> {
        self.stack.top()
    }

    /// Size of the stack region in bytes.
    pub fn stack_capacity(&self) -> usize {
        self.stack.capacity()
    }

    /// Bytes left on the stack.
    pub fn stack_remaining(&self) -> usize {
        self.stack.remaining()
    }

    /// Size of the heap region in bytes.
    pub fn heap_capacity(&self) -> usize {
        self.heap.capacity()
    }

    /// Total free heap bytes.
    pub fn heap_free_bytes(&self) -> usize {
        self.heap.free_bytes()
    }

    /// Size of the largest free heap block.
    pub fn largest_free_block(&self) -> usize {
        self.heap.largest_free()
    }

    /// Memory usage of the backing arena in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.arena.memory_bytes()
    }

    fn out_of_memory(&self, requested: usize, kind: ElementKind) -> MemoryError {
        MemoryError::OutOfMemory {
            requested,
            kind,
            largest_free: self.heap.largest_free(),
        }
    }

    fn check_pointer(&self, ptr: &RawPointer, region: Region, op: &str) {
        assert!(
            ptr.arena() == self.arena.id(),
            "{op}() given a pointer from arena {}, expected arena {}",
            ptr.arena(),
            self.arena.id()
        );
        assert!(
            ptr.region() == region,
            "{op}() given a {} pointer, expected a {region} pointer",
            ptr.region()
        );
    }
}
