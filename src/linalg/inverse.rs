//! Matrix inversion and determinant, both driven by Gauss elimination.
//!
//! Inversion runs the full Gauss–Jordan sequence: a forward pass reduces the
//! working copy to upper triangular while the recorded row operations are
//! replayed onto a companion matrix seeded with the identity; a backward pass
//! reduces it further to diagonal; finally each companion row is divided by
//! the matching working pivot, leaving the companion holding the inverse.
//!
//! The determinant needs only the forward pass: it is the product of the
//! final diagonal, with one sign flip per row exchange performed along the
//! way.

use super::elimination::{
    find_and_exchange_pivot, record_elimination, replay_elimination, EliminationCache, StepRange,
};
use crate::{
    error::{MatrustError, Result},
    matrix::Matrix,
    ops::row_exchange,
};
use num_traits::Float;

/// Compute the inverse of a square matrix via Gauss–Jordan elimination.
///
/// # Errors
///
/// Returns `MatrustError::Singular` when no pivot-eligible row exists at some
/// elimination step; a singular matrix has no inverse.
pub fn inverse<const N: usize, T: Float>(input: &Matrix<N, N, T>) -> Result<Matrix<N, N, T>> {
    let mut working = *input;
    let mut companion = Matrix::identity();
    let mut cache = EliminationCache::new();

    // Gauss phase: eliminate below each pivot, mirroring every row operation
    // onto the companion.
    for pivot_index in 0..N.saturating_sub(1) {
        if working[[pivot_index, pivot_index]] == T::zero() {
            match find_and_exchange_pivot(pivot_index, pivot_index, &mut working) {
                Some(exchanged_row) => row_exchange(exchanged_row, pivot_index, &mut companion),
                None => return Err(MatrustError::Singular),
            }
        }

        record_elimination(
            pivot_index,
            pivot_index,
            StepRange::new(pivot_index as isize + 1, N as isize),
            StepRange::new(pivot_index as isize, N as isize),
            &mut cache,
            &mut working,
        );
        replay_elimination(pivot_index, StepRange::new(0, N as isize), &cache, &mut companion);
        cache.reset();
    }

    // No exchange can repair a zero in the last pivot; without this check a
    // singular matrix would reach normalization and divide by zero.
    if N > 0 && working[[N - 1, N - 1]] == T::zero() {
        return Err(MatrustError::Singular);
    }

    // Jordan phase: eliminate above each pivot, reducing the working matrix
    // to diagonal.
    for pivot_index in (1..N).rev() {
        record_elimination(
            pivot_index,
            pivot_index,
            StepRange::new(pivot_index as isize - 1, -1),
            StepRange::new(pivot_index as isize, -1),
            &mut cache,
            &mut working,
        );
        replay_elimination(
            pivot_index,
            StepRange::new(N as isize - 1, -1),
            &cache,
            &mut companion,
        );
        cache.reset();
    }

    // Divide each companion row by the matching working pivot.
    for pivot_index in 0..N {
        let reciprocal = T::one() / working[[pivot_index, pivot_index]];
        for column_index in 0..N {
            companion[[pivot_index, column_index]] =
                companion[[pivot_index, column_index]] * reciprocal;
        }
    }

    Ok(companion)
}

/// Compute the determinant of a square matrix via the product of pivots.
///
/// Returns exactly zero the moment elimination fails to find a pivot:
/// a singular matrix has determinant 0. Each row exchange performed during
/// elimination flips the sign of the result.
pub fn determinant<const N: usize, T: Float>(input: &Matrix<N, N, T>) -> T {
    let mut working = *input;
    let mut cache = EliminationCache::new();
    let mut exchange_count = 0usize;

    for pivot_index in 0..N.saturating_sub(1) {
        if working[[pivot_index, pivot_index]] == T::zero() {
            if find_and_exchange_pivot(pivot_index, pivot_index, &mut working).is_some() {
                exchange_count += 1;
            } else {
                return T::zero();
            }
        }

        record_elimination(
            pivot_index,
            pivot_index,
            StepRange::new(pivot_index as isize + 1, N as isize),
            StepRange::new(pivot_index as isize, N as isize),
            &mut cache,
            &mut working,
        );
        cache.reset();
    }

    let mut determinant = T::one();
    for pivot_index in 0..N {
        determinant = determinant * working[[pivot_index, pivot_index]];
    }

    if exchange_count % 2 == 1 {
        -determinant
    } else {
        determinant
    }
}
