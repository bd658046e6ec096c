//! Error types for the memarena allocator.
//!
//! Every failure is synchronous and leaves the allocator exactly as it was
//! before the call. Reading through a reclaimed pointer is not an error:
//! it is undetected and returns whatever bytes currently occupy the range.

use std::error::Error;
use std::fmt;

use crate::element::ElementKind;

/// Errors that can occur during memory operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MemoryError {
    /// Construction parameters are invalid (stack region empty or larger
    /// than half the arena).
    InvalidConfig {
        /// Total arena size in bytes.
        total_size: usize,
        /// Requested stack region size in bytes.
        stack_size: usize,
        /// Human-readable description of the violated constraint.
        reason: &'static str,
    },
    /// A push would run past the end of the stack region.
    StackOverflow {
        /// Bytes the push needed, including alignment padding.
        requested: usize,
        /// Bytes left between the cursor and the end of the stack region.
        available: usize,
    },
    /// No heap free block can hold the requested aligned size.
    OutOfMemory {
        /// Payload bytes requested (before alignment padding).
        requested: usize,
        /// Element kind of the failed allocation.
        kind: ElementKind,
        /// Size of the largest free block at the time of the request.
        largest_free: usize,
    },
    /// `change()` was given more elements than the pointer holds.
    OversizedWrite {
        /// Element count the pointer was created with.
        capacity: usize,
        /// Element count of the rejected data.
        len: usize,
    },
}

impl fmt::Display for MemoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig {
                total_size,
                stack_size,
                reason,
            } => {
                write!(
                    f,
                    "invalid memory config (total {total_size} bytes, stack {stack_size} bytes): {reason}"
                )
            }
            Self::StackOverflow {
                requested,
                available,
            } => {
                write!(
                    f,
                    "stack overflow: requested {requested} bytes, {available} bytes available"
                )
            }
            Self::OutOfMemory {
                requested,
                kind,
                largest_free,
            } => {
                write!(
                    f,
                    "out of heap memory: requested {requested} bytes of {kind}, largest free block {largest_free} bytes"
                )
            }
            Self::OversizedWrite { capacity, len } => {
                write!(
                    f,
                    "write of {len} elements exceeds pointer capacity of {capacity} elements"
                )
            }
        }
    }
}

impl Error for MemoryError {}
