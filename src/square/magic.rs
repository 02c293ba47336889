//! Magic-square predicate
//!
//! A grid is magic when all `N` row sums, all `N` column sums, the main
//! diagonal sum and the anti-diagonal sum are equal. Every line sum is
//! computed independently and accumulated in `u64`, so a grid of squared
//! cells cannot overflow.

use super::Square;

/// Sums of every line of a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSums<const N: usize> {
    pub rows: [u64; N],
    pub cols: [u64; N],
    /// Cells where `row == col`
    pub diagonal: u64,
    /// Cells where `row + col == N - 1`
    pub anti_diagonal: u64,
}

impl<const N: usize> LineSums<N> {
    /// The common sum if every line agrees
    pub fn common(&self) -> Option<u64> {
        let target = self.diagonal;
        let agrees = self.anti_diagonal == target
            && self.rows.iter().all(|&s| s == target)
            && self.cols.iter().all(|&s| s == target);

        agrees.then_some(target)
    }
}

impl<const N: usize> Square<N> {
    /// Sum every row, column and both diagonals
    pub fn line_sums(&self) -> LineSums<N> {
        let mut sums = LineSums {
            rows: [0; N],
            cols: [0; N],
            diagonal: 0,
            anti_diagonal: 0,
        };

        for (r, row) in self.rows().iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                let value = u64::from(value);
                sums.rows[r] += value;
                sums.cols[c] += value;
                if r == c {
                    sums.diagonal += value;
                }
                if r + c + 1 == N {
                    sums.anti_diagonal += value;
                }
            }
        }

        sums
    }

    /// The magic sum, or `None` if the grid is not magic
    pub fn magic_sum(&self) -> Option<u64> {
        self.line_sums().common()
    }

    /// Whether every row, column and diagonal has the same sum
    pub fn is_magic(&self) -> bool {
        self.magic_sum().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lo_shu() -> Square<3> {
        Square::from_rows([[4, 9, 2], [3, 5, 7], [8, 1, 6]])
    }

    /// Euler's 4x4 magic square of squares (roots shown, magic sum 8515)
    fn euler_roots() -> Square<4> {
        Square::from_rows([
            [68, 29, 41, 37],
            [17, 31, 79, 32],
            [59, 28, 23, 61],
            [11, 77, 8, 49],
        ])
    }

    /// Parker square: rows, columns and main diagonal of the squares agree,
    /// the anti-diagonal does not
    fn parker_roots() -> Square<3> {
        Square::from_rows([[29, 1, 47], [41, 37, 1], [23, 41, 29]])
    }

    #[test]
    fn test_lo_shu_is_magic() {
        assert!(lo_shu().is_magic());
        assert_eq!(lo_shu().magic_sum(), Some(15));
    }

    #[test]
    fn test_lo_shu_squared_is_not_magic() {
        assert!(!lo_shu().squared().is_magic());
    }

    #[test]
    fn test_euler_squares_are_magic() {
        let squares = euler_roots().squared();
        assert!(squares.is_magic());
        assert_eq!(squares.magic_sum(), Some(8515));
        assert!(!euler_roots().is_magic());
    }

    #[test]
    fn test_one_row_differs() {
        // Swapping two cells between rows 0 and 1 keeps the columns but breaks both rows
        let mut square = lo_shu();
        square.set(0, 0, 5);
        square.set(1, 1, 4);
        let sums = square.line_sums();
        assert_eq!(sums.rows, [16, 14, 15]);
        assert!(!square.is_magic());

        // Only the first row changes
        let mut square = lo_shu();
        square.set(0, 2, 3);
        assert_eq!(square.line_sums().rows, [16, 15, 15]);
        assert!(!square.is_magic());
    }

    #[test]
    fn test_diagonal_differs() {
        // Swapping the first two columns keeps every row and column sum
        let square = Square::from_rows([[9, 4, 2], [5, 3, 7], [1, 8, 6]]);
        let sums = square.line_sums();
        assert_eq!(sums.rows, [15, 15, 15]);
        assert_eq!(sums.cols, [15, 15, 15]);
        assert_ne!(sums.diagonal, 15);
        assert!(!square.is_magic());
    }

    #[test]
    fn test_parker_square_fails_on_anti_diagonal() {
        let squares = parker_roots().squared();
        let sums = squares.line_sums();

        assert_eq!(sums.rows, [3051; 3]);
        assert_eq!(sums.cols, [3051; 3]);
        assert_eq!(sums.diagonal, 3051);
        assert_eq!(sums.anti_diagonal, 4107);
        assert!(!squares.is_magic());
    }

    #[test]
    fn test_transpose_preserves_magic() {
        assert!(lo_shu().transpose().is_magic());
        assert!(euler_roots().squared().transpose().is_magic());
    }

    #[test]
    fn test_rotations_preserve_magic() {
        let mut square = lo_shu();
        for _ in 0..4 {
            square = square.rotate();
            assert!(square.is_magic());
        }
    }

    #[test]
    fn test_transpose_preserves_non_magic() {
        let squares = parker_roots().squared();
        assert!(!squares.transpose().is_magic());
    }

    #[test]
    fn test_uniform_grid_is_magic() {
        // Line equality alone; distinctness is enforced by population
        let square = Square::<3>::from_rows([[7; 3]; 3]);
        assert_eq!(square.magic_sum(), Some(21));
    }

    #[test]
    fn test_single_cell_is_magic() {
        assert_eq!(Square::<1>::from_rows([[9]]).magic_sum(), Some(9));
    }

    #[test]
    fn test_no_overflow_at_max() {
        let square = Square::<3>::from_rows([[u32::MAX; 3]; 3]);
        assert_eq!(square.magic_sum(), Some(3 * u64::from(u32::MAX)));
    }
}
