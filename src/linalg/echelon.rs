//! Row echelon reductions.
//!
//! Reducing a matrix to its row echelon form (REF) exposes its pivot and
//! free columns:
//! - zero rows sit at the bottom of the matrix;
//! - each pivot is to the right of the pivot of the row above it.
//!
//! The reduced row echelon form (RREF) goes further: every pivot equals 1
//! and is the only non-zero entry in its column, which makes the pivot and
//! free columns directly readable.

use super::elimination::{
    find_and_exchange_pivot, record_elimination, EliminationCache, StepRange,
};
use crate::matrix::Matrix;
use num_traits::Float;

/// The role a column played in a row echelon reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// The column carries a pivot: it is independent of the columns before it.
    Pivot,
    /// The column is a linear combination of the columns before it.
    Free,
}

/// Compute the row echelon form of a matrix together with the per-column
/// classification revealed by the reduction, for reuse by `rank` and the
/// reduced form.
pub(crate) fn row_echelon_with_columns<const R: usize, const C: usize, T: Float>(
    input: &Matrix<R, C, T>,
) -> (Matrix<R, C, T>, [ColumnKind; C]) {
    let mut matrix = *input;
    let mut cache = EliminationCache::new();
    let mut columns = [ColumnKind::Free; C];

    let mut pivot_row = 0;
    let mut pivot_col = 0;
    while pivot_row < R && pivot_col < C {
        if matrix[[pivot_row, pivot_col]] == T::zero()
            && find_and_exchange_pivot(pivot_row, pivot_col, &mut matrix).is_none()
        {
            // No pivot in this column: the row stays, to be retried against
            // the next column.
            columns[pivot_col] = ColumnKind::Free;
            pivot_col += 1;
            continue;
        }

        record_elimination(
            pivot_row,
            pivot_col,
            StepRange::new(pivot_row as isize + 1, R as isize),
            StepRange::new(pivot_col as isize, C as isize),
            &mut cache,
            &mut matrix,
        );
        cache.reset();

        columns[pivot_col] = ColumnKind::Pivot;
        pivot_row += 1;
        pivot_col += 1;
    }

    (matrix, columns)
}

/// Compute the row echelon form of a matrix, through elimination.
pub fn row_echelon_form<const R: usize, const C: usize, T: Float>(
    input: &Matrix<R, C, T>,
) -> Matrix<R, C, T> {
    row_echelon_with_columns(input).0
}

/// Compute the reduced row echelon form of a matrix.
///
/// Walks the REF pivots from last to first, zeroing each pivot column above
/// its pivot, then scales each pivot row so the pivot is exactly 1. The
/// reduction is idempotent: re-running it on its own output is a no-op.
pub fn reduced_row_echelon_form<const R: usize, const C: usize, T: Float>(
    input: &Matrix<R, C, T>,
) -> Matrix<R, C, T> {
    let (mut matrix, columns) = row_echelon_with_columns(input);
    let mut cache = EliminationCache::new();

    // The i-th pivot column pairs with row i.
    let mut pivots = [(0usize, 0usize); C];
    let mut pivot_count = 0;
    for (column_index, kind) in columns.iter().enumerate() {
        if *kind == ColumnKind::Pivot {
            pivots[pivot_count] = (pivot_count, column_index);
            pivot_count += 1;
        }
    }

    for &(pivot_row, pivot_col) in pivots[..pivot_count].iter().rev() {
        record_elimination(
            pivot_row,
            pivot_col,
            StepRange::new(pivot_row as isize - 1, -1),
            StepRange::new(C as isize - 1, -1),
            &mut cache,
            &mut matrix,
        );
        cache.reset();

        let pivot_value = matrix[[pivot_row, pivot_col]];
        for column_index in 0..C {
            matrix[[pivot_row, column_index]] = matrix[[pivot_row, column_index]] / pivot_value;
        }
    }

    matrix
}
