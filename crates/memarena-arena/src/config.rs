//! Memory configuration parameters.

use memarena_core::MemoryError;

/// Configuration for a [`crate::Memory`] instance.
///
/// Controls the total arena size and how much of it is reserved for the
/// stack region. Validated at construction; immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryConfig {
    /// Total arena size in bytes (stack + heap).
    pub total_size: usize,

    /// Stack region size in bytes.
    ///
    /// Default (`None`): [`MemoryConfig::DEFAULT_STACK_PERCENT`] percent of
    /// `total_size`, rounded down. Must be non-zero and at most
    /// [`MemoryConfig::MAX_STACK_PERCENT`] percent of `total_size`.
    pub stack_size: Option<usize>,
}

impl MemoryConfig {
    /// Default arena size: 64KB.
    pub const DEFAULT_TOTAL_SIZE: usize = 64 * 1024;

    /// Share of the arena given to the stack when no override is set.
    pub const DEFAULT_STACK_PERCENT: usize = 30;

    /// Largest share of the arena the stack may take.
    pub const MAX_STACK_PERCENT: usize = 50;

    /// Create a config for an arena of `total_size` bytes with the default
    /// stack share.
    pub fn new(total_size: usize) -> Self {
        Self {
            total_size,
            stack_size: None,
        }
    }

    /// Override the stack region size.
    pub fn with_stack_size(mut self, stack_size: usize) -> Self {
        self.stack_size = Some(stack_size);
        self
    }

    /// Stack region size after applying the default.
    pub fn resolved_stack_size(&self) -> usize {
        self.stack_size.unwrap_or_else(|| {
            // Widen so `total * 30` cannot overflow on 64-bit sizes.
            (self.total_size as u128 * Self::DEFAULT_STACK_PERCENT as u128 / 100) as usize
        })
    }

    /// Heap region size after applying the default stack size.
    pub fn heap_size(&self) -> usize {
        self.total_size.saturating_sub(self.resolved_stack_size())
    }

    /// Check the stack/heap split.
    ///
    /// The stack must be non-empty and no larger than half the arena.
    pub fn validate(&self) -> Result<(), MemoryError> {
        let stack_size = self.resolved_stack_size();
        let invalid = |reason: &'static str| MemoryError::InvalidConfig {
            total_size: self.total_size,
            stack_size,
            reason,
        };
        if stack_size == 0 {
            return Err(invalid("stack region must not be empty"));
        }
        if stack_size as u128 * 100 > self.total_size as u128 * Self::MAX_STACK_PERCENT as u128 {
            return Err(invalid("stack region exceeds half of the arena"));
        }
        Ok(())
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TOTAL_SIZE)
    }
}
