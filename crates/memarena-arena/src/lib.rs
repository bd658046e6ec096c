//! Fixed-size byte arena with manual, pointer-based memory management.
//!
//! A single byte buffer is allocated once and split into two regions: a
//! LIFO stack for scoped, nested allocations and a heap with explicit
//! alloc/free backed by a first-fit free list. This crate is the only one
//! in the workspace that contains `unsafe` code, confined to `raw.rs`.
//!
//! # Architecture
//!
//! ```text
//! Memory (orchestrator)
//! ├── Arena (Box<[u8]>, fixed length, never moves)
//! │   ├── [0, stack_size)      stack region
//! │   └── [stack_size, total)  heap region
//! ├── StackRegion (cursor over the stack region)
//! └── HeapRegion (sorted, coalesced free list over the heap region)
//! ```
//!
//! # Pointers
//!
//! [`Pointer`] is a plain `Copy` record: offset, element count, alignment
//! padding, region tag, and the id of the arena that minted it. It does
//! not borrow the arena and is not tracked by it. Dereferencing a pointer
//! after its bytes were popped or freed reads whatever now occupies that
//! range; this mirrors raw-pointer semantics and is not reported.
//!
//! # Threading
//!
//! Every mutating operation takes `&mut Memory`. Sharing an instance
//! across threads requires the caller to serialize access (e.g. a
//! `Mutex<Memory>`); there is no internal locking.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod arena;
pub mod config;
pub mod handle;
pub mod heap;
pub mod memory;
mod raw;
pub mod stack;
pub mod view;

// Public re-exports for the primary API surface.
pub use arena::Arena;
pub use config::MemoryConfig;
pub use handle::{Pointer, RawPointer, Region};
pub use heap::{FreeBlock, HeapRegion};
pub use memory::Memory;
pub use stack::StackRegion;
pub use view::View;

pub use memarena_core::{ArenaId, Element, ElementKind, MemoryError};
