//! Core types for the memarena allocator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the arena and its clients: the closed set of
//! element kinds a pointer can carry, arena identifiers, and the error
//! taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod element;
pub mod error;
pub mod id;

pub use element::{Element, ElementKind};
pub use error::MemoryError;
pub use id::ArenaId;
