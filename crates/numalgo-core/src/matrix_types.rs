//! Square integer matrix value type.

use num_traits::PrimInt;

/// Errors raised when building or combining matrices.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    /// A matrix must have at least one row.
    #[error("matrix must not be empty")]
    Empty,

    /// A row does not have as many entries as there are rows.
    #[error("row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// The operands of a product have different dimensions.
    #[error("cannot multiply {left}x{left} matrix by {right}x{right} matrix")]
    DimensionMismatch { left: usize, right: usize },

    /// A product entry does not fit in the element type.
    #[error("matrix entry overflow")]
    Overflow,
}

/// Immutable n×n matrix stored row-major.
///
/// Operations never mutate their operands; `multiply` and `power` return
/// fresh values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    size: usize,
    values: Vec<T>,
}

impl<T: PrimInt> Matrix<T> {
    /// Build a matrix from its rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let size = rows.len();
        if size == 0 {
            return Err(MatrixError::Empty);
        }
        let mut values = Vec::with_capacity(size * size);
        for (row, entries) in rows.into_iter().enumerate() {
            if entries.len() != size {
                return Err(MatrixError::NotSquare {
                    row,
                    len: entries.len(),
                    expected: size,
                });
            }
            values.extend(entries);
        }
        Ok(Self { size, values })
    }

    /// Create the identity matrix of the given dimension.
    #[must_use]
    pub fn identity(size: usize) -> Self {
        let mut values = vec![T::zero(); size * size];
        for i in 0..size {
            values[i * size + i] = T::one();
        }
        Self { size, values }
    }

    /// Create the zero matrix of the given dimension.
    #[must_use]
    pub(crate) fn zeros(size: usize) -> Self {
        Self {
            size,
            values: vec![T::zero(); size * size],
        }
    }

    /// Create the Fibonacci Q matrix [[1,1],[1,0]].
    #[must_use]
    pub fn fibonacci_q() -> Self {
        Self {
            size: 2,
            values: vec![T::one(), T::one(), T::one(), T::zero()],
        }
    }

    /// Dimension of the matrix.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Entry at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        assert!(
            row < self.size && col < self.size,
            "index ({row}, {col}) out of range for {0}x{0} matrix",
            self.size
        );
        self.values[row * self.size + col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: T) {
        self.values[row * self.size + col] = value;
    }

    /// Copy the entries out as nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.values.chunks(self.size).map(<[T]>::to_vec).collect()
    }

    /// Check if this is the identity matrix.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::identity(self.size)
    }

    /// Product `self · other`. See [`crate::matrix_ops::matrix_multiply`].
    pub fn multiply(&self, other: &Self) -> Result<Self, MatrixError> {
        crate::matrix_ops::matrix_multiply(self, other)
    }

    /// `self^exponent`. See [`crate::matrix_ops::matrix_power`].
    ///
    /// # Panics
    ///
    /// Panics if an entry overflows `T`.
    #[must_use]
    pub fn power(&self, exponent: u64) -> Self {
        crate::matrix_ops::matrix_power(self, exponent)
    }

    /// `self^exponent`, or [`MatrixError::Overflow`].
    pub fn checked_power(&self, exponent: u64) -> Result<Self, MatrixError> {
        crate::matrix_ops::checked_matrix_power(self, exponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_matrix() {
        let m = Matrix::<i64>::identity(3);
        assert!(m.is_identity());
        assert_eq!(m.to_rows(), vec![vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 1]]);
    }

    #[test]
    fn fibonacci_q_matrix() {
        let q = Matrix::<u64>::fibonacci_q();
        assert_eq!(q.size(), 2);
        assert_eq!(q.get(0, 0), 1);
        assert_eq!(q.get(0, 1), 1);
        assert_eq!(q.get(1, 0), 1);
        assert_eq!(q.get(1, 1), 0);
        assert!(!q.is_identity());
    }

    #[test]
    fn from_rows_rejects_ragged() {
        let err = Matrix::from_rows(vec![vec![1i64, 2], vec![3]]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::NotSquare {
                row: 1,
                len: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn from_rows_rejects_empty() {
        assert_eq!(
            Matrix::<i64>::from_rows(Vec::new()).unwrap_err(),
            MatrixError::Empty
        );
    }

    #[test]
    fn to_rows_round_trip() {
        let rows = vec![vec![1i64, -2], vec![3, 4]];
        let m = Matrix::from_rows(rows.clone()).unwrap();
        assert_eq!(m.to_rows(), rows);
    }

    #[test]
    fn error_display() {
        let err = MatrixError::DimensionMismatch { left: 2, right: 3 };
        assert_eq!(err.to_string(), "cannot multiply 2x2 matrix by 3x3 matrix");
    }
}
