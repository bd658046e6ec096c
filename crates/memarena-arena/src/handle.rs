//! Pointers into the arena.
//!
//! A [`RawPointer`] encodes the location of an allocation: which region,
//! the byte offset of its first element, its element count and kind, and
//! the alignment padding that preceded it. [`Pointer`] adds the element
//! type statically. Neither borrows the arena; both are resolved against
//! a [`Memory`] on every access.

use std::fmt;
use std::marker::PhantomData;

use memarena_core::{ArenaId, Element, ElementKind, MemoryError};

use crate::memory::Memory;
use crate::view::View;

/// Which sub-range of the arena a pointer refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    /// The LIFO stack prefix.
    Stack,
    /// The free-list heap suffix.
    Heap,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stack => f.write_str("stack"),
            Self::Heap => f.write_str("heap"),
        }
    }
}

/// Kind-erased location of an allocation.
///
/// Minted only by [`Memory::push`] and [`Memory::alloc_raw`]; the fields
/// are not constructible from outside the crate, which is what keeps every
/// pointer's byte range inside its region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct RawPointer {
    /// Arena that minted this pointer.
    pub(crate) arena: ArenaId,
    /// Region-relative byte offset of the first element.
    pub(crate) offset: usize,
    /// Length of the allocation in elements.
    pub(crate) len: usize,
    /// Element kind (and therefore width).
    pub(crate) kind: ElementKind,
    /// Bytes skipped before `offset` to reach alignment.
    pub(crate) padding: usize,
    /// Region the offset is relative to.
    pub(crate) region: Region,
}

impl RawPointer {
    pub(crate) fn new(
        arena: ArenaId,
        region: Region,
        offset: usize,
        len: usize,
        kind: ElementKind,
        padding: usize,
    ) -> Self {
        Self {
            arena,
            offset,
            len,
            kind,
            padding,
            region,
        }
    }

    /// Id of the arena that minted this pointer.
    pub fn arena(&self) -> ArenaId {
        self.arena
    }

    /// Region-relative byte offset of the first element.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Length of the allocation in elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether this is a zero-length allocation.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Element kind.
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Size of one element in bytes.
    pub fn element_size(&self) -> usize {
        self.kind.byte_width()
    }

    /// Alignment padding that precedes the payload.
    pub fn padding(&self) -> usize {
        self.padding
    }

    /// Region the pointer refers into.
    pub fn region(&self) -> Region {
        self.region
    }

    /// Payload size in bytes.
    pub fn byte_len(&self) -> usize {
        self.len * self.kind.byte_width()
    }

    /// Offset of the reserved block, padding included.
    pub fn block_offset(&self) -> usize {
        self.offset - self.padding
    }

    /// Size of the reserved block, padding included.
    pub fn block_len(&self) -> usize {
        self.byte_len() + self.padding
    }

    /// Recover a typed pointer if `T` matches the recorded kind.
    pub fn typed<T: Element>(self) -> Option<Pointer<T>> {
        (self.kind == T::KIND).then(|| Pointer::from_raw(self))
    }

    /// Borrow the payload bytes from `memory`.
    ///
    /// # Panics
    ///
    /// Panics if `memory` is not the arena that minted this pointer.
    pub fn bytes<'a>(&self, memory: &'a Memory) -> &'a [u8] {
        memory.raw_bytes(self)
    }
}

impl fmt::Display for RawPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pointer({}, off={}, len={}, {}, pad={})",
            self.region, self.offset, self.len, self.kind, self.padding
        )
    }
}

/// Typed, non-owning pointer to `len` elements of `T`.
///
/// Copying a pointer copies the handle, not the data. The allocator does
/// not track outstanding pointers: after the matching `pop`/`free`, the
/// pointer still resolves, but to whatever bytes now occupy its range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct Pointer<T: Element> {
    raw: RawPointer,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Element> Pointer<T> {
    pub(crate) fn from_raw(raw: RawPointer) -> Self {
        debug_assert_eq!(raw.kind, T::KIND);
        Self {
            raw,
            _marker: PhantomData,
        }
    }

    /// The kind-erased handle.
    pub fn raw(&self) -> RawPointer {
        self.raw
    }

    /// Region-relative byte offset of the first element.
    pub fn offset(&self) -> usize {
        self.raw.offset
    }

    /// Length of the allocation in elements.
    pub fn len(&self) -> usize {
        self.raw.len
    }

    /// Whether this is a zero-length allocation.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Element kind, always `T::KIND`.
    pub fn kind(&self) -> ElementKind {
        T::KIND
    }

    /// Alignment padding that precedes the payload.
    pub fn padding(&self) -> usize {
        self.raw.padding
    }

    /// Region the pointer refers into.
    pub fn region(&self) -> Region {
        self.raw.region
    }

    /// Payload size in bytes.
    pub fn byte_len(&self) -> usize {
        self.raw.byte_len()
    }

    /// Materialize a typed view over the pointer's bytes.
    ///
    /// Every call builds a fresh view; views from the same pointer alias.
    ///
    /// # Panics
    ///
    /// Panics if `memory` is not the arena that minted this pointer.
    pub fn deref<'a>(&self, memory: &'a Memory) -> View<'a, T> {
        memory.view(self)
    }

    /// Overwrite the pointed-to elements in place.
    ///
    /// Shorter `data` is zero-filled to the pointer's full length; longer
    /// `data` fails with [`MemoryError::OversizedWrite`] and writes nothing.
    ///
    /// # Panics
    ///
    /// Panics if `memory` is not the arena that minted this pointer.
    pub fn change(&self, memory: &mut Memory, data: &[T]) -> Result<(), MemoryError> {
        memory.change(self, data)
    }
}

impl<T: Element> From<Pointer<T>> for RawPointer {
    fn from(ptr: Pointer<T>) -> Self {
        ptr.raw
    }
}

impl<T: Element> fmt::Display for Pointer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.raw, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(kind: ElementKind, offset: usize, len: usize, padding: usize) -> RawPointer {
        RawPointer::new(ArenaId::next(), Region::Heap, offset, len, kind, padding)
    }

    #[test]
    fn raw_pointer_accessors() {
        let p = raw(ElementKind::I32, 12, 2, 2);
        assert_eq!(p.offset(), 12);
        assert_eq!(p.len(), 2);
        assert_eq!(p.element_size(), 4);
        assert_eq!(p.byte_len(), 8);
        assert_eq!(p.block_offset(), 10);
        assert_eq!(p.block_len(), 10);
        assert!(!p.is_empty());
        assert_eq!(p.region(), Region::Heap);
    }

    #[test]
    fn typed_requires_matching_kind() {
        let p = raw(ElementKind::F64, 8, 3, 0);
        assert!(p.typed::<f64>().is_some());
        assert!(p.typed::<i64>().is_none());
        assert!(p.typed::<f32>().is_none());
    }

    #[test]
    fn typed_pointer_round_trips_to_raw() {
        let p = raw(ElementKind::U16, 4, 5, 0);
        let typed = p.typed::<u16>().unwrap();
        assert_eq!(typed.kind(), ElementKind::U16);
        assert_eq!(typed.byte_len(), 10);
        assert_eq!(RawPointer::from(typed), p);
    }

    #[test]
    fn display_names_region_and_kind() {
        let p = RawPointer::new(ArenaId::next(), Region::Stack, 16, 3, ElementKind::F64, 6);
        assert_eq!(p.to_string(), "Pointer(stack, off=16, len=3, f64, pad=6)");
    }

    #[test]
    fn empty_pointer() {
        let p = raw(ElementKind::U8, 0, 0, 0);
        assert!(p.is_empty());
        assert_eq!(p.byte_len(), 0);
    }
}
