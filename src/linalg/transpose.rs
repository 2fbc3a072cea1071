//! Matrix transpose.

use crate::matrix::Matrix;
use num_traits::Float;

/// Transpose a matrix: entry `(i, j)` of the result is entry `(j, i)` of the
/// input.
pub fn transpose<const R: usize, const C: usize, T: Float>(
    input: &Matrix<R, C, T>,
) -> Matrix<C, R, T> {
    let mut transposed = Matrix::zeros();

    for row_index in 0..R {
        for column_index in 0..C {
            transposed[[column_index, row_index]] = input[[row_index, column_index]];
        }
    }

    transposed
}
