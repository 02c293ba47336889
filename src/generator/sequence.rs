//! Scripted value generation
//!
//! Replays a fixed list of values in order and wraps back to the first value
//! at the end of the list.

use super::ValueGenerator;
use crate::config::Cell;

/// Generator that replays a fixed list of values
#[derive(Debug, Clone)]
pub struct SequenceGenerator {
    values: Vec<Cell>,
    /// Index of the next value to hand out
    position: usize,
    /// Total values handed out so far
    drawn: u64,
}

impl SequenceGenerator {
    /// Create a generator replaying `values`
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn new(values: impl Into<Vec<Cell>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty(), "sequence must contain at least one value");
        Self {
            values,
            position: 0,
            drawn: 0,
        }
    }

    /// Number of values handed out so far (duplicates included)
    pub fn drawn(&self) -> u64 {
        self.drawn
    }
}

impl ValueGenerator for SequenceGenerator {
    fn next_value(&mut self, _row: usize, _col: usize) -> Cell {
        let value = self.values[self.position];

        self.position += 1;
        if self.position >= self.values.len() {
            self.position = 0;
        }
        self.drawn += 1;

        value
    }
}
