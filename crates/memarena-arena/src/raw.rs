//! Unchecked byte windows over the arena.
//!
//! Resolving a pointer never consults allocator state: a popped or freed
//! pointer reads and writes whatever bytes now sit in its range. Bounds are
//! the only thing that must hold, and they are established when the pointer
//! is minted: `push` and `alloc` only hand out ranges inside their region,
//! regions never shrink, and the arena id check rejects pointers from any
//! other arena. Each `unsafe` block below relies on exactly that.

#![allow(unsafe_code)]

use crate::arena::Arena;
use crate::handle::RawPointer;

/// Panic unless `ptr` was minted by `arena`.
fn check_owner(arena: &Arena, ptr: &RawPointer) {
    assert!(
        ptr.arena == arena.id(),
        "pointer from arena {} resolved against arena {}",
        ptr.arena,
        arena.id()
    );
}

/// Borrow the payload bytes of `ptr`.
///
/// # Panics
///
/// Panics if `ptr` was minted by a different arena.
pub(crate) fn window<'a>(arena: &'a Arena, ptr: &RawPointer) -> &'a [u8] {
    check_owner(arena, ptr);
    let bytes = arena.region(ptr.region);
    let end = ptr.offset + ptr.byte_len();
    debug_assert!(end <= bytes.len(), "{ptr} outside region of {} bytes", bytes.len());
    // SAFETY: `ptr` was minted by this arena, so `offset..end` was checked
    // against this region's length at push/alloc time and the region has
    // not changed length since.
    unsafe { bytes.get_unchecked(ptr.offset..end) }
}

/// Borrow the payload bytes of `ptr` mutably.
///
/// # Panics
///
/// Panics if `ptr` was minted by a different arena.
pub(crate) fn window_mut<'a>(arena: &'a mut Arena, ptr: &RawPointer) -> &'a mut [u8] {
    check_owner(arena, ptr);
    let bytes = arena.region_mut(ptr.region);
    let end = ptr.offset + ptr.byte_len();
    debug_assert!(end <= bytes.len(), "{ptr} outside region of {} bytes", bytes.len());
    // SAFETY: as in `window`; the range lies inside this region.
    unsafe { bytes.get_unchecked_mut(ptr.offset..end) }
}
