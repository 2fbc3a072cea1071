//! Row and column extraction, assignment, and exchange.

use crate::matrix::Matrix;
use num_traits::Float;

/// Extract a copy of a row of a matrix.
///
/// The elimination engine uses this to snapshot the pivot row before mutating
/// the rows beneath it.
pub fn row<const R: usize, const C: usize, T: Float>(
    matrix: &Matrix<R, C, T>,
    row_index: usize,
) -> [T; C] {
    debug_assert!(row_index < R);

    let mut entries = [T::zero(); C];
    for (column_index, entry) in entries.iter_mut().enumerate() {
        *entry = matrix[[row_index, column_index]];
    }
    entries
}

/// Assign the values of a row of a matrix.
pub fn set_row<const R: usize, const C: usize, T: Float>(
    row_index: usize,
    values: [T; C],
    matrix: &mut Matrix<R, C, T>,
) {
    debug_assert!(row_index < R);

    for (column_index, value) in values.into_iter().enumerate() {
        matrix[[row_index, column_index]] = value;
    }
}

/// Extract a copy of a column of a matrix.
pub fn column<const R: usize, const C: usize, T: Float>(
    matrix: &Matrix<R, C, T>,
    column_index: usize,
) -> [T; R] {
    debug_assert!(column_index < C);

    let mut entries = [T::zero(); R];
    for (row_index, entry) in entries.iter_mut().enumerate() {
        *entry = matrix[[row_index, column_index]];
    }
    entries
}

/// Assign the values of a column of a matrix.
pub fn set_column<const R: usize, const C: usize, T: Float>(
    column_index: usize,
    values: [T; R],
    matrix: &mut Matrix<R, C, T>,
) {
    debug_assert!(column_index < C);

    for (row_index, value) in values.into_iter().enumerate() {
        matrix[[row_index, column_index]] = value;
    }
}

/// Exchange two rows of a matrix, in place.
///
/// The indices must differ and both must be in bounds (checked in debug
/// builds).
pub fn row_exchange<const R: usize, const C: usize, T: Float>(
    row_index_a: usize,
    row_index_b: usize,
    matrix: &mut Matrix<R, C, T>,
) {
    debug_assert!(row_index_a < R);
    debug_assert!(row_index_b < R);
    debug_assert!(row_index_a != row_index_b);

    matrix.entries.swap(row_index_a, row_index_b);
}
