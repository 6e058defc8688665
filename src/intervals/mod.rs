//! Interval source: the repeating sequence of countdown durations.
//!
//! Produces an unbounded sequence of countdown durations (in minutes) by
//! cycling through a fixed ordered list. The only mutable state is the
//! cycle position, which wraps to the start after the last element.

use crate::config::ConfigError;

// ============================================================================
// IntervalSource
// ============================================================================

/// An infinite, cycling source of countdown durations.
///
/// Iteration never ends on its own: the list is non-empty by construction,
/// so `next()` always yields a value. Termination is only ever external
/// (session cancellation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalSource {
    cycle: Vec<u32>,
    position: usize,
}

impl IntervalSource {
    /// Creates a new interval source from an ordered list of minute counts.
    ///
    /// The cycle position starts at the first element.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyCycle`] if the list is empty.
    pub fn new(cycle: Vec<u32>) -> Result<Self, ConfigError> {
        if cycle.is_empty() {
            return Err(ConfigError::EmptyCycle);
        }
        Ok(Self { cycle, position: 0 })
    }

    /// Returns the configured cycle.
    #[must_use]
    pub fn cycle(&self) -> &[u32] {
        &self.cycle
    }

    /// Returns the number of durations in one full cycle.
    #[must_use]
    pub fn cycle_len(&self) -> usize {
        self.cycle.len()
    }
}

impl Iterator for IntervalSource {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let minutes = self.cycle.get(self.position).copied()?;
        self.position = (self.position + 1) % self.cycle.len();
        Some(minutes)
    }
}

// ============================================================================
// Tests
// ============================================================================
