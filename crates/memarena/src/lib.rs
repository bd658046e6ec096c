//! memarena: manual stack and heap allocation over one fixed-size byte arena.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the memarena sub-crates. For most users, adding `memarena` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use memarena::prelude::*;
//!
//! let mut memory = Memory::new(MemoryConfig::new(1024).with_stack_size(256)).unwrap();
//!
//! // Stack: scoped, strictly LIFO.
//! let temps = memory.push(&[-2i16, 145, 42]).unwrap();
//! assert_eq!(temps.deref(&memory), [-2i16, 145, 42]);
//! memory.pop(&temps);
//!
//! // Heap: explicit alloc/free in any order.
//! let block = memory.alloc::<f64>(4).unwrap();
//! block.change(&mut memory, &[1.5, 2.5]).unwrap();
//! assert_eq!(block.deref(&memory), [1.5, 2.5, 0.0, 0.0]);
//! memory.free(&block);
//! assert_eq!(memory.free_blocks().len(), 1);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`arena`] | `memarena-arena` | `Memory`, regions, pointers, views |
//! | [`types`] | `memarena-core` | Element kinds, arena ids, errors |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Arena, regions, pointers, and views (`memarena-arena`).
///
/// Most users only need [`arena::Memory`] and [`arena::Pointer`]; both
/// are also available in the [`prelude`].
pub use memarena_arena as arena;

/// Element kinds, arena ids, and error types (`memarena-core`).
pub use memarena_core as types;

/// Common imports for typical memarena usage.
///
/// ```rust
/// use memarena::prelude::*;
/// ```
pub mod prelude {
    pub use memarena_arena::{FreeBlock, Memory, MemoryConfig, Pointer, RawPointer, Region, View};

    pub use memarena_core::{Element, ElementKind, MemoryError};
}
