//! Matrix rank.
//!
//! The rank of a matrix is the number of pivot columns it possesses: the
//! number of independent columns, and the dimension of its column space.

use super::echelon::{row_echelon_with_columns, ColumnKind};
use crate::matrix::Matrix;
use num_traits::Float;

/// Compute the rank of a matrix by counting the pivots discovered during row
/// echelon reduction.
///
/// Bounded above by `min(R, C)`; a value below that bound means the matrix is
/// rank-deficient, which is a valid degenerate result rather than an error.
pub fn rank<const R: usize, const C: usize, T: Float>(input: &Matrix<R, C, T>) -> usize {
    let (_, columns) = row_echelon_with_columns(input);
    columns
        .iter()
        .filter(|kind| **kind == ColumnKind::Pivot)
        .count()
}
