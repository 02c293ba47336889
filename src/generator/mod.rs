//! Cell value generators
//!
//! A generator produces candidate values for grid cells. It knows nothing
//! about the grid it fills: rejecting duplicates is the job of
//! [`Square::populate`](crate::square::Square::populate).
//!
//! # Generators
//!
//! - **Uniform**: values drawn uniformly from `[min, max]` (the search default)
//! - **Sequence**: replays a fixed list of values (deterministic tests)
//!
//! # Example
//!
//! ```
//! use magicsquare::generator::{ValueGenerator, uniform::UniformGenerator};
//!
//! let mut gen = UniformGenerator::with_seed(1, 1000, 7);
//! let value = gen.next_value(0, 0);
//! assert!((1..=1000).contains(&value));
//! ```

use crate::config::Cell;

/// Source of candidate cell values
///
/// Generators must be `Send` so each worker thread can own one. They are
/// never shared between workers, so implementations need no synchronization.
pub trait ValueGenerator: Send {
    /// Produce a candidate value for the cell at `(row, col)`
    fn next_value(&mut self, row: usize, col: usize) -> Cell;
}

impl<G: ValueGenerator + ?Sized> ValueGenerator for Box<G> {
    #[inline]
    fn next_value(&mut self, row: usize, col: usize) -> Cell {
        (**self).next_value(row, col)
    }
}

pub mod sequence;
pub mod uniform;
