/*!
# Dense Integer Matrix

A dense, owned N×N matrix of `i64` with a sentinel value for "no path" entries, used to hold the
`W`, `D`, and `PC` matrices of the retiming pipeline. Row-major storage in a single `Vec<i64>`
keeps the whole matrix in one allocation rather than the nested-array-of-arrays shape of the
tool this was distilled from.
*/

use crate::core::error::RetimingError;

/// Sentinel for "no path" in the `W` matrix (`0x3f3f3f3f`, matching the reference tool's sentinel
/// while being cheap to sum repeatedly without overflowing `i64`).
pub const INF: i64 = 0x3f3f3f3f;

/// A dense, square matrix of `i64` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    side: usize,
    data: Vec<i64>,
}

impl Matrix {
    /// Creates a new matrix with every entry set to `default_value`.
    pub fn new(side: usize, default_value: i64) -> Self {
        Self {
            side,
            data: vec![default_value; side * side],
        }
    }

    /// Returns the side (number of rows, equivalently columns) of the matrix.
    pub fn side(&self) -> usize {
        self.side
    }

    #[inline]
    fn pos(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.side && j < self.side);
        i * self.side + j
    }

    /// Returns the element at row `i`, column `j`.
    pub fn get(&self, i: usize, j: usize) -> i64 {
        self.data[self.pos(i, j)]
    }

    /// Sets the element at row `i`, column `j`.
    pub fn set(&mut self, i: usize, j: usize, value: i64) {
        let p = self.pos(i, j);
        self.data[p] = value;
    }

    /// Copies the contents of `other` into `self`.
    ///
    /// # Errors
    ///
    /// Returns [`RetimingError::MatrixSizeMismatch`] if the two matrices have different sides.
    pub fn copy_from(&mut self, other: &Matrix) -> Result<(), RetimingError> {
        if self.side != other.side {
            return Err(RetimingError::MatrixSizeMismatch {
                expected: self.side,
                found: other.side,
            });
        }
        self.data.copy_from_slice(&other.data);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_roundtrip() {
        let mut m = Matrix::new(3, INF);
        m.set(1, 2, 7);
        assert_eq!(m.get(1, 2), 7);
        assert_eq!(m.get(0, 0), INF);
    }

    #[test]
    fn test_copy_from_matching_side() {
        let mut a = Matrix::new(2, 0);
        let mut b = Matrix::new(2, 0);
        b.set(0, 1, 5);
        a.copy_from(&b).unwrap();
        assert_eq!(a.get(0, 1), 5);
    }

    #[test]
    fn test_copy_from_mismatched_side_errors() {
        let mut a = Matrix::new(2, 0);
        let b = Matrix::new(3, 0);
        let err = a.copy_from(&b).unwrap_err();
        assert!(matches!(
            err,
            RetimingError::MatrixSizeMismatch {
                expected: 2,
                found: 3
            }
        ));
    }
}
