//! Matrix multiplication and binary matrix exponentiation.

use num_traits::PrimInt;

use crate::matrix_types::{Matrix, MatrixError};

/// Multiply two square matrices of equal dimension.
///
/// Standard O(k³) triple loop; size-generic even though the Fibonacci
/// engine only ever feeds it 2x2 matrices. Entries are accumulated with
/// checked arithmetic.
pub fn matrix_multiply<T: PrimInt>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    if a.size() != b.size() {
        return Err(MatrixError::DimensionMismatch {
            left: a.size(),
            right: b.size(),
        });
    }
    product(a, b)
}

/// Square a matrix.
///
/// # Panics
///
/// Panics if an entry overflows `T`.
#[must_use]
pub fn matrix_square<T: PrimInt>(m: &Matrix<T>) -> Matrix<T> {
    match product(m, m) {
        Ok(square) => square,
        Err(err) => panic!("{err}"),
    }
}

/// Raise a matrix to a non-negative power by square-and-multiply.
///
/// `exponent == 0` yields the identity. The running base is only squared
/// while higher exponent bits remain, so no power above the requested one
/// is ever formed.
///
/// # Panics
///
/// Panics if an entry overflows `T`. Use [`checked_matrix_power`] to get
/// [`MatrixError::Overflow`] instead.
#[must_use]
pub fn matrix_power<T: PrimInt>(m: &Matrix<T>, exponent: u64) -> Matrix<T> {
    match checked_matrix_power(m, exponent) {
        Ok(power) => power,
        Err(err) => panic!("{err}"),
    }
}

/// Like [`matrix_power`], returning [`MatrixError::Overflow`] when an entry
/// does not fit in `T`.
pub fn checked_matrix_power<T: PrimInt>(
    m: &Matrix<T>,
    exponent: u64,
) -> Result<Matrix<T>, MatrixError> {
    let mut result = Matrix::identity(m.size());
    let mut base = m.clone();
    let mut remaining = exponent;

    while remaining > 0 {
        if remaining & 1 == 1 {
            result = product(&result, &base)?;
        }
        remaining >>= 1;
        if remaining > 0 {
            base = product(&base, &base)?;
        }
    }

    Ok(result)
}

// Callers guarantee equal dimensions.
fn product<T: PrimInt>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    let size = a.size();
    let mut out = Matrix::zeros(size);
    for i in 0..size {
        for j in 0..size {
            let mut acc = T::zero();
            for k in 0..size {
                let term = a
                    .get(i, k)
                    .checked_mul(&b.get(k, j))
                    .ok_or(MatrixError::Overflow)?;
                acc = acc.checked_add(&term).ok_or(MatrixError::Overflow)?;
            }
            out.set(i, j, acc);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q() -> Matrix<u64> {
        Matrix::fibonacci_q()
    }

    #[test]
    fn multiply_identity() {
        let id = Matrix::identity(2);
        let left = matrix_multiply(&id, &q()).unwrap();
        let right = matrix_multiply(&q(), &id).unwrap();
        assert_eq!(left, q());
        assert_eq!(right, q());
    }

    #[test]
    fn square_q_matrix() {
        // Q^2 = [[2,1],[1,1]]
        assert_eq!(matrix_square(&q()).to_rows(), vec![vec![2, 1], vec![1, 1]]);
    }

    #[test]
    fn cube_q_matrix() {
        let q3 = matrix_multiply(&matrix_square(&q()), &q()).unwrap();
        // Q^3 = [[3,2],[2,1]]
        assert_eq!(q3.to_rows(), vec![vec![3, 2], vec![2, 1]]);
    }

    #[test]
    fn power_zero_is_identity() {
        assert!(matrix_power(&q(), 0).is_identity());
        let m = Matrix::from_rows(vec![vec![5i64, 7, 1], vec![0, 2, 3], vec![4, 4, 4]]).unwrap();
        assert!(matrix_power(&m, 0).is_identity());
        assert_eq!(matrix_power(&m, 0).size(), 3);
    }

    #[test]
    fn power_one_is_self() {
        assert_eq!(matrix_power(&q(), 1), q());
    }

    #[test]
    fn q_power_10_gives_fib_10() {
        // Q^10: a = F(11) = 89, b = F(10) = 55
        let q10 = matrix_power(&q(), 10);
        assert_eq!(q10.get(0, 0), 89);
        assert_eq!(q10.get(0, 1), 55);
        assert_eq!(q10.get(1, 1), 34);
    }

    #[test]
    fn q_power_92_fits_in_u64() {
        let q92 = matrix_power(&q(), 92);
        assert_eq!(q92.get(0, 0), 12_200_160_415_121_876_738);
    }

    #[test]
    fn cube_matches_repeated_multiply() {
        let m = Matrix::from_rows(vec![vec![2i64, -1, 0], vec![3, 1, 4], vec![-5, 2, 1]]).unwrap();
        let mm = matrix_multiply(&m, &m).unwrap();
        let mmm = matrix_multiply(&mm, &m).unwrap();
        assert_eq!(matrix_power(&m, 3), mmm);
    }

    #[test]
    fn power_sum_of_exponents() {
        let m = Matrix::from_rows(vec![vec![1i64, 2], vec![-1, 3]]).unwrap();
        for (e1, e2) in [(1, 1), (2, 3), (4, 5), (7, 1)] {
            let combined = matrix_multiply(&matrix_power(&m, e1), &matrix_power(&m, e2)).unwrap();
            assert_eq!(matrix_power(&m, e1 + e2), combined, "e1={e1} e2={e2}");
        }
    }

    #[test]
    fn dimension_mismatch_is_an_error() {
        let two = Matrix::<i64>::identity(2);
        let three = Matrix::<i64>::identity(3);
        assert_eq!(
            matrix_multiply(&two, &three).unwrap_err(),
            MatrixError::DimensionMismatch { left: 2, right: 3 }
        );
    }

    #[test]
    fn method_forms_delegate() {
        let m = q();
        assert_eq!(m.multiply(&m).unwrap(), matrix_square(&m));
        assert_eq!(m.power(5), matrix_power(&m, 5));
    }

    #[test]
    fn q_power_93_overflows_u64() {
        // Q^93 holds F(94) in its top-left entry.
        assert!(checked_matrix_power(&q(), 92).is_ok());
        assert_eq!(
            checked_matrix_power(&q(), 93).unwrap_err(),
            MatrixError::Overflow
        );
        assert_eq!(q().checked_power(93).unwrap_err(), MatrixError::Overflow);
    }

    #[test]
    fn multiply_overflow_is_an_error() {
        let big = Matrix::from_rows(vec![vec![200u8, 0], vec![0, 1]]).unwrap();
        assert_eq!(matrix_multiply(&big, &big).unwrap_err(), MatrixError::Overflow);
        // 144 + 144 overflows on the accumulation, not the products.
        let sum = Matrix::from_rows(vec![vec![12u8, 12], vec![12, 12]]).unwrap();
        assert_eq!(matrix_multiply(&sum, &sum).unwrap_err(), MatrixError::Overflow);
    }

    #[test]
    #[should_panic(expected = "matrix entry overflow")]
    fn matrix_power_panics_on_overflow() {
        let _ = matrix_power(&Matrix::from_rows(vec![vec![2u8]]).unwrap(), 8);
    }

    #[test]
    fn symmetry_preserved_for_q_powers() {
        for e in 1..20 {
            let p = matrix_power(&q(), e);
            assert_eq!(p.get(0, 1), p.get(1, 0));
        }
    }
}
