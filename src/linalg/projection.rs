//! Vector normalization, subspace projection, and orthonormalization.
//!
//! The projection `p` of a vector `b` onto the subspace spanned by the
//! column space of a matrix `A` is `p = A (A^T A)^-1 A^T b`; the matrix
//! `P = A (A^T A)^-1 A^T` maps `b` to `p` directly. Orthonormalization turns
//! the columns of a matrix into an orthonormal set via Gram–Schmidt.

use super::{inverse::inverse, matmul::matmul, transpose::transpose};
use crate::{
    error::{MatrustError, Result},
    matrix::Matrix,
    ops::{column, set_column},
};
use num_traits::Float;

/// Compute the unit-length version of a column vector.
///
/// # Errors
///
/// Returns `MatrustError::ZeroVector` for a zero-length input, which has no
/// direction to preserve.
pub fn normalize<const N: usize, T: Float>(vector: &Matrix<N, 1, T>) -> Result<Matrix<N, 1, T>> {
    let length_squared = matmul(&transpose(vector), vector)[[0, 0]];
    if length_squared == T::zero() {
        return Err(MatrustError::ZeroVector);
    }

    Ok(*vector / length_squared.sqrt())
}

/// Compute the projection matrix of the subspace spanned by the column space
/// of `matrix`.
///
/// # Errors
///
/// Returns `MatrustError::Singular` when the columns are linearly dependent,
/// making `A^T A` non-invertible.
pub fn projection_matrix<const R: usize, const C: usize, T: Float>(
    matrix: &Matrix<R, C, T>,
) -> Result<Matrix<R, R, T>> {
    let transposed = transpose(matrix);
    let gram = matmul(&transposed, matrix);
    let gram_inverse = inverse(&gram)?;

    Ok(matmul(&matmul(matrix, &gram_inverse), &transposed))
}

/// Project a column vector onto the subspace spanned by the column space of
/// `matrix`.
pub fn project<const R: usize, const C: usize, T: Float>(
    vector: &Matrix<R, 1, T>,
    matrix: &Matrix<R, C, T>,
) -> Result<Matrix<R, 1, T>> {
    Ok(matmul(&projection_matrix(matrix)?, vector))
}

/// Orthonormalize the columns of a matrix via Gram–Schmidt: subtract from
/// each column its components along the already-processed columns, then
/// normalize it.
///
/// # Errors
///
/// Returns `MatrustError::ZeroVector` when a column is a linear combination
/// of the columns before it, leaving nothing to normalize.
pub fn orthonormalize<const R: usize, const C: usize, T: Float>(
    matrix: &Matrix<R, C, T>,
) -> Result<Matrix<R, C, T>> {
    let mut orthonormal = *matrix;

    for column_index in 0..C {
        let mut current = Matrix::<R, 1, T>::from_column(column(&orthonormal, column_index));

        for previous_index in 0..column_index {
            let previous = Matrix::<R, 1, T>::from_column(column(&orthonormal, previous_index));
            let overlap = matmul(&transpose(&previous), &current)[[0, 0]];
            current = current - previous * overlap;
        }

        let unit = normalize(&current)?;
        set_column(column_index, column(&unit, 0), &mut orthonormal);
    }

    Ok(orthonormal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{matrix, vector, Matrix};

    #[test]
    fn test_normalize() {
        let unit = normalize(&vector![3.0, 4.0]).unwrap();
        assert_eq!(unit, vector![0.6, 0.8]);
    }

    #[test]
    fn test_normalize_zero_vector_fails() {
        let zero = Matrix::<3, 1>::zeros();
        assert_eq!(normalize(&zero), Err(MatrustError::ZeroVector));
    }

    #[test]
    fn test_projection_matrix_onto_plane() {
        // The span of the first two coordinate axes.
        let plane = matrix![
            [1.0, 0.0],
            [0.0, 1.0],
            [0.0, 0.0]
        ];
        let projection = projection_matrix(&plane).unwrap();
        assert_eq!(
            projection,
            matrix![
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0]
            ]
        );
    }

    #[test]
    fn test_projection_matrix_is_idempotent() {
        let subspace = matrix![
            [1.0, 1.0],
            [1.0, 0.0],
            [0.0, 1.0]
        ];
        let projection = projection_matrix(&subspace).unwrap();
        assert_eq!(matmul(&projection, &projection), projection);
        assert_eq!(transpose(&projection), projection);
    }

    #[test]
    fn test_project_vector_already_in_subspace() {
        let plane = matrix![
            [1.0, 0.0],
            [0.0, 1.0],
            [0.0, 0.0]
        ];
        let vector = vector![2.0, 3.0, 0.0];
        assert_eq!(project(&vector, &plane).unwrap(), vector);
    }

    #[test]
    fn test_projection_of_dependent_columns_fails() {
        let dependent = matrix![
            [1.0, 2.0],
            [2.0, 4.0],
            [3.0, 6.0]
        ];
        assert_eq!(projection_matrix(&dependent), Err(MatrustError::Singular));
    }

    #[test]
    fn test_orthonormalize() {
        let matrix = matrix![
            [3.0, 1.0],
            [4.0, 0.0]
        ];
        let orthonormal = orthonormalize(&matrix).unwrap();
        let gram = matmul(&transpose(&orthonormal), &orthonormal);
        assert_eq!(gram, Matrix::identity());
    }

    #[test]
    fn test_orthonormalize_dependent_columns_fail() {
        let dependent = matrix![
            [1.0, 2.0],
            [0.0, 0.0]
        ];
        assert_eq!(orthonormalize(&dependent), Err(MatrustError::ZeroVector));
    }
}
