//! Configuration validation
//!
//! Population retries forever when the value range cannot supply enough
//! distinct values, so the range is checked once here before any worker starts.

use super::{Cell, SearchConfig};
use thiserror::Error;

/// Reasons a [`SearchConfig`] cannot be searched
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("min_value must be at least 1 (0 marks an empty cell), got {0}")]
    ZeroMinimum(Cell),

    #[error("min_value ({min}) must not exceed max_value ({max})")]
    EmptyRange { min: Cell, max: Cell },

    #[error("value range {min}..={max} holds {available} values but a grid needs {needed} distinct values")]
    RangeTooSmall {
        min: Cell,
        max: Cell,
        available: u64,
        needed: u64,
    },

    #[error("max_value {0} squared does not fit in a grid cell")]
    SquareOverflow(Cell),

    #[error("at least one worker is required")]
    NoWorkers,
}

/// Validate a configuration for an `size x size` grid
pub fn validate_config(config: &SearchConfig, size: usize) -> Result<(), ConfigError> {
    validate_range(config.min_value, config.max_value, size)?;

    if config.workers == 0 {
        return Err(ConfigError::NoWorkers);
    }

    Ok(())
}

/// Validate the value range for an `size x size` grid
pub fn validate_range(min: Cell, max: Cell, size: usize) -> Result<(), ConfigError> {
    if min == 0 {
        return Err(ConfigError::ZeroMinimum(min));
    }

    if min > max {
        return Err(ConfigError::EmptyRange { min, max });
    }

    let available = u64::from(max - min) + 1;
    let needed = (size * size) as u64;
    if available < needed {
        return Err(ConfigError::RangeTooSmall {
            min,
            max,
            available,
            needed,
        });
    }

    if max.checked_mul(max).is_none() {
        return Err(ConfigError::SquareOverflow(max));
    }

    Ok(())
}
