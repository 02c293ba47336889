//! Configuration module
//!
//! The search is configured at compile time. The constants below are the only
//! knobs the binary exposes; [`SearchConfig`] carries them (plus the worker
//! count discovered at startup) into the coordinator and the workers.

pub mod cli;
pub mod validator;

use std::fmt;

/// Integer type stored in every grid cell.
///
/// Must be wide enough to hold `MAX_VALUE * MAX_VALUE` without wrapping.
pub type Cell = u32;

/// Grid dimension (the grid is `SIZE x SIZE`)
pub const SIZE: usize = 3;

/// Smallest value a cell may take (inclusive)
///
/// Zero is reserved as the "empty cell" sentinel while a grid is populated,
/// so the minimum must be at least 1.
pub const MIN_VALUE: Cell = 1;

/// Largest value a cell may take (inclusive)
pub const MAX_VALUE: Cell = 1000;

const _: () = assert!(MIN_VALUE >= 1, "MIN_VALUE must be at least 1");
const _: () = assert!(MIN_VALUE <= MAX_VALUE, "MIN_VALUE must not exceed MAX_VALUE");
const _: () = assert!(
    (MAX_VALUE - MIN_VALUE + 1) as usize >= SIZE * SIZE,
    "value range must hold at least SIZE * SIZE distinct values"
);
const _: () = assert!(
    MAX_VALUE <= 65_535,
    "MAX_VALUE squared must fit in a u32 cell"
);

/// Complete search configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Smallest cell value (inclusive)
    pub min_value: Cell,
    /// Largest cell value (inclusive)
    pub max_value: Cell,
    /// Number of worker threads
    pub workers: usize,
    /// Optional per-worker trial budget. `None` searches until a solution is
    /// found or the stop flag is raised.
    pub max_trials: Option<u64>,
}

impl SearchConfig {
    /// Configuration built from the compile-time constants
    pub fn new(workers: usize) -> Self {
        Self {
            min_value: MIN_VALUE,
            max_value: MAX_VALUE,
            workers,
            max_trials: None,
        }
    }

    /// Same configuration with a different value range
    pub fn with_range(mut self, min_value: Cell, max_value: Cell) -> Self {
        self.min_value = min_value;
        self.max_value = max_value;
        self
    }

    /// Same configuration with a per-worker trial budget
    pub fn with_max_trials(mut self, max_trials: u64) -> Self {
        self.max_trials = Some(max_trials);
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(1)
    }
}

impl fmt::Display for SearchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "values {}..={}, {} worker(s)",
            self.min_value, self.max_value, self.workers
        )?;
        if let Some(max) = self.max_trials {
            write!(f, ", at most {} tries per worker", max)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let config = SearchConfig::new(4);
        assert_eq!(config.min_value, 1);
        assert_eq!(config.max_value, 1000);
        assert_eq!(config.workers, 4);
        assert_eq!(config.max_trials, None);
    }

    #[test]
    fn test_max_value_square_fits_cell() {
        assert!(MAX_VALUE.checked_mul(MAX_VALUE).is_some());
        assert_eq!(MAX_VALUE * MAX_VALUE, 1_000_000);
    }

    #[test]
    fn test_display() {
        let config = SearchConfig::new(2).with_range(1, 9).with_max_trials(50);
        assert_eq!(
            config.to_string(),
            "values 1..=9, 2 worker(s), at most 50 tries per worker"
        );
    }
}
