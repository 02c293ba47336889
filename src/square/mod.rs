//! Fixed-size square grids
//!
//! A [`Square`] is an `N x N` grid of [`Cell`] values, stored inline so a
//! trial never allocates. Each trial:
//!
//! 1. fills a fresh grid with pairwise distinct values ([`Square::populate`])
//! 2. squares every cell ([`Square::square_cells`])
//! 3. tests the squared grid ([`Square::is_magic`], see [`magic`])
//!
//! # Example
//!
//! ```
//! use magicsquare::square::Square;
//! use magicsquare::generator::uniform::UniformGenerator;
//!
//! let mut gen = UniformGenerator::with_seed(1, 1000, 3);
//! let mut square = Square::<3>::empty();
//! square.populate(&mut gen);
//!
//! let squared = square.squared();
//! assert_eq!(squared.get(0, 0), square.get(0, 0) * square.get(0, 0));
//! ```

pub mod magic;

use crate::config::Cell;
use crate::generator::ValueGenerator;
use std::fmt;

/// Value of a cell that has not been filled yet
const EMPTY: Cell = 0;

/// `N x N` grid of cell values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square<const N: usize> {
    cells: [[Cell; N]; N],
}

impl<const N: usize> Square<N> {
    /// Grid with every cell empty
    pub const fn empty() -> Self {
        Self {
            cells: [[EMPTY; N]; N],
        }
    }

    /// Grid from rows, `rows[r][c]` being the cell at `(r, c)`
    pub const fn from_rows(rows: [[Cell; N]; N]) -> Self {
        Self { cells: rows }
    }

    /// Rows of the grid
    pub fn rows(&self) -> &[[Cell; N]; N] {
        &self.cells
    }

    /// Value at `(row, col)`
    ///
    /// # Panics
    ///
    /// Panics if `row >= N` or `col >= N`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Set the value at `(row, col)` without any uniqueness check
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: Cell) {
        self.cells[row][col] = value;
    }

    /// Whether `value` is stored in any cell
    #[inline]
    pub fn contains(&self, value: Cell) -> bool {
        self.cells.iter().any(|row| row.contains(&value))
    }

    /// Iterate over all cells in row-major order
    pub fn values(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }

    /// Fill every cell with a value from `generator`, no value appearing twice
    ///
    /// All cells are reset to empty first, then filled in row-major order.
    /// For each cell the generator is asked again and again until it yields a
    /// value that is not already in the grid; there is no retry limit, so the
    /// generator's range must hold at least `N * N` distinct non-zero values
    /// (see [`validate_range`](crate::config::validator::validate_range)),
    /// otherwise this never returns.
    pub fn populate<G: ValueGenerator + ?Sized>(&mut self, generator: &mut G) {
        self.cells = [[EMPTY; N]; N];

        for row in 0..N {
            for col in 0..N {
                self.cells[row][col] = self.next_unique(generator, row, col);
            }
        }
    }

    fn next_unique<G: ValueGenerator + ?Sized>(
        &self,
        generator: &mut G,
        row: usize,
        col: usize,
    ) -> Cell {
        loop {
            let value = generator.next_value(row, col);
            if !self.contains(value) {
                return value;
            }
        }
    }

    /// Replace every cell with its square, in place
    ///
    /// Cell values must not exceed `sqrt(Cell::MAX)`; the configured maximum
    /// is checked against this when the search is configured.
    pub fn square_cells(&mut self) {
        for row in self.cells.iter_mut() {
            for value in row.iter_mut() {
                *value *= *value;
            }
        }
    }

    /// Copy of this grid with every cell squared
    pub fn squared(&self) -> Self {
        let mut squared = *self;
        squared.square_cells();
        squared
    }

    /// Grid mirrored along the main diagonal
    pub fn transpose(&self) -> Self {
        let mut transposed = Self::empty();
        for row in 0..N {
            for col in 0..N {
                transposed.cells[col][row] = self.cells[row][col];
            }
        }
        transposed
    }

    /// Grid rotated a quarter turn clockwise
    pub fn rotate(&self) -> Self {
        let mut rotated = Self::empty();
        for row in 0..N {
            for col in 0..N {
                rotated.cells[col][N - 1 - row] = self.cells[row][col];
            }
        }
        rotated
    }
}

impl<const N: usize> Default for Square<N> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Nested-list form: `[[a,b,c],[d,e,f],[g,h,i]]`
impl<const N: usize> fmt::Display for Square<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                f.write_str(",")?;
            }
            f.write_str("[")?;
            for (c, value) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{}", value)?;
            }
            f.write_str("]")?;
        }
        f.write_str("]")
    }
}
