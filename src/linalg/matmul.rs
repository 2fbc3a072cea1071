//! Matrix multiplication.

use crate::matrix::Matrix;
use num_traits::Float;

/// Multiply two matrices.
///
/// Inner dimension agreement is part of the types: the left operand's column
/// count and the right operand's row count are the same const parameter.
pub fn matmul<const R: usize, const C: usize, const K: usize, T: Float>(
    lhs: &Matrix<R, C, T>,
    rhs: &Matrix<C, K, T>,
) -> Matrix<R, K, T> {
    let mut product = Matrix::zeros();

    for row_index in 0..R {
        for column_index in 0..K {
            let mut sum = T::zero();
            for inner_index in 0..C {
                sum = sum + lhs[[row_index, inner_index]] * rhs[[inner_index, column_index]];
            }
            product[[row_index, column_index]] = sum;
        }
    }

    product
}
