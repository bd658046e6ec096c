//! Benchmark workloads for the memarena allocator.
//!
//! Provides pre-built memory configurations and deterministic allocation
//! mixes for benchmarks:
//!
//! - [`reference_config`]: 1KB arena with a 256-byte stack
//! - [`stress_config`]: 1MB arena with the default stack share
//! - [`mixed_workload`]: a fixed sequence of `(kind, count)` requests

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use memarena_arena::MemoryConfig;
use memarena_core::ElementKind;

/// The 1KB arena / 256-byte stack layout used throughout the tests.
pub fn reference_config() -> MemoryConfig {
    MemoryConfig::new(1024).with_stack_size(256)
}

/// A 1MB arena with the default 30% stack.
pub fn stress_config() -> MemoryConfig {
    MemoryConfig::new(1024 * 1024)
}

/// Build `n` heap requests cycling through every element kind.
///
/// Counts follow a fixed stride so runs are comparable; every request
/// is between 1 and 16 elements.
pub fn mixed_workload(n: usize) -> Vec<(ElementKind, usize)> {
    let kinds = ElementKind::ALL;
    (0..n)
        .map(|i| (kinds[i % kinds.len()], 1 + (i * 7) % 16))
        .collect()
}

/// Order in which to free `n` allocations: evens ascending, then odds
/// descending. Leaves holes first so coalescing has work to do.
pub fn interleaved_free_order(n: usize) -> Vec<usize> {
    (0..n)
        .step_by(2)
        .chain((1..n).step_by(2).rev())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configs_are_valid() {
        assert!(reference_config().validate().is_ok());
        assert!(stress_config().validate().is_ok());
    }

    #[test]
    fn workload_is_deterministic() {
        assert_eq!(mixed_workload(32), mixed_workload(32));
        assert!(mixed_workload(64).iter().all(|&(_, c)| (1..=16).contains(&c)));
    }

    #[test]
    fn free_order_is_a_permutation() {
        let mut order = interleaved_free_order(9);
        assert_eq!(&order[..5], &[0, 2, 4, 6, 8]);
        order.sort_unstable();
        assert_eq!(order, (0..9).collect::<Vec<_>>());
    }
}
