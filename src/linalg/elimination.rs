//! Shared elimination sub-routines: pivot search and exchange, factor
//! recording, and replay onto a companion matrix.
//!
//! One elimination step around a pivot records a `(row, column, factor)`
//! entry for every row it touches. Replaying those entries onto a second
//! matrix reproduces the identical row operations without recomputing
//! factors or re-testing zero coefficients, which is what makes the replay
//! cheaper than multiplying by an elimination matrix: zero coefficients cost
//! nothing in either pass.

use crate::{
    matrix::Matrix,
    ops::{row, row_exchange},
};
use num_traits::Float;

/// A half-open span of indices whose direction is inferred from its
/// endpoints: ascending when `begin < end`, descending otherwise.
///
/// `begin` is inclusive and `end` exclusive in both directions, so a
/// descending sweep down to (and including) index 0 ends at `-1`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct StepRange {
    current: isize,
    end: isize,
    step: isize,
}

impl StepRange {
    pub(crate) fn new(begin: isize, end: isize) -> Self {
        Self {
            current: begin,
            end,
            step: if begin < end { 1 } else { -1 },
        }
    }
}

impl Iterator for StepRange {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.current == self.end {
            return None;
        }
        let index = self.current;
        self.current += self.step;
        Some(index as usize)
    }
}

/// One recorded row operation: `factor * pivot row` was subtracted from row
/// `row`, starting at column `column`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FactorEntry<T> {
    pub(crate) row: usize,
    pub(crate) column: usize,
    pub(crate) factor: T,
}

/// Bounded, append-only store of the factors recorded during one elimination
/// step, iterable in insertion order.
///
/// Capacity equals the matrix's row count, an upper bound on how many rows
/// one pivot step can touch. `reset` is called once per pivot step, after any
/// replay, so a single stack-resident cache serves a whole reduction pass.
pub(crate) struct EliminationCache<const R: usize, T> {
    entries: [FactorEntry<T>; R],
    count: usize,
}

impl<const R: usize, T: Float> EliminationCache<R, T> {
    pub(crate) fn new() -> Self {
        Self {
            entries: [FactorEntry {
                row: 0,
                column: 0,
                factor: T::zero(),
            }; R],
            count: 0,
        }
    }

    /// Forget all recorded entries so the cache can serve the next pivot.
    pub(crate) fn reset(&mut self) {
        self.count = 0;
    }

    /// Record a factor. Appending beyond capacity is a caller bug, checked in
    /// debug builds.
    pub(crate) fn append(&mut self, row: usize, column: usize, factor: T) {
        debug_assert!(row < R);
        debug_assert!(self.count < R);

        self.entries[self.count] = FactorEntry { row, column, factor };
        self.count += 1;
    }

    pub(crate) fn iter(&self) -> std::slice::Iter<'_, FactorEntry<T>> {
        self.entries[..self.count].iter()
    }
}

/// Find a row strictly below `pivot_row` with a non-zero coefficient in
/// `pivot_col` and exchange it with the pivot row, in place.
///
/// The first qualifying row wins (plain partial pivoting, no magnitude
/// selection). Returns the exchanged row index, or `None` when no row
/// qualifies; the absence of a pivot is the engine's sole singularity signal.
/// Precondition: the current pivot entry is zero (why an exchange is needed
/// in the first place).
pub(crate) fn find_and_exchange_pivot<const R: usize, const C: usize, T: Float>(
    pivot_row: usize,
    pivot_col: usize,
    matrix: &mut Matrix<R, C, T>,
) -> Option<usize> {
    debug_assert!(matrix[[pivot_row, pivot_col]] == T::zero());

    for row_index in pivot_row + 1..R {
        if matrix[[row_index, pivot_col]] != T::zero() {
            row_exchange(row_index, pivot_row, matrix);
            return Some(row_index);
        }
    }

    None
}

/// Eliminate the coefficients in `pivot_col` for every row in `rows`,
/// restricted to the columns in `columns`, recording each row's elimination
/// factor into `cache`.
///
/// Rows whose coefficient is already zero are skipped: no mutation, no
/// recorded factor. Precondition: the pivot entry is non-zero.
pub(crate) fn record_elimination<const R: usize, const C: usize, T: Float>(
    pivot_row: usize,
    pivot_col: usize,
    rows: StepRange,
    columns: StepRange,
    cache: &mut EliminationCache<R, T>,
    matrix: &mut Matrix<R, C, T>,
) {
    debug_assert!(matrix[[pivot_row, pivot_col]] != T::zero());

    let pivot_value = matrix[[pivot_row, pivot_col]];
    let pivot_entries = row(matrix, pivot_row);

    for row_index in rows {
        let coefficient = matrix[[row_index, pivot_col]];
        if coefficient == T::zero() {
            continue;
        }

        let factor = coefficient / pivot_value;
        cache.append(row_index, pivot_col, factor);

        for column_index in columns {
            let delta = pivot_entries[column_index] * factor;
            matrix[[row_index, column_index]] = matrix[[row_index, column_index]] - delta;
        }
    }
}

/// Re-apply the row operations recorded in `cache` onto a companion matrix,
/// restricted to the columns in `columns`.
pub(crate) fn replay_elimination<const R: usize, const C: usize, T: Float>(
    pivot_row: usize,
    columns: StepRange,
    cache: &EliminationCache<R, T>,
    companion: &mut Matrix<R, C, T>,
) {
    let pivot_entries = row(companion, pivot_row);

    for entry in cache.iter() {
        debug_assert!(entry.row < R && entry.column < C);
        for column_index in columns {
            let delta = pivot_entries[column_index] * entry.factor;
            companion[[entry.row, column_index]] =
                companion[[entry.row, column_index]] - delta;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix;

    #[test]
    fn test_step_range_ascending() {
        let indices: Vec<usize> = StepRange::new(1, 4).collect();
        assert_eq!(indices, vec![1, 2, 3]);
    }

    #[test]
    fn test_step_range_descending() {
        let indices: Vec<usize> = StepRange::new(2, -1).collect();
        assert_eq!(indices, vec![2, 1, 0]);
    }

    #[test]
    fn test_step_range_empty() {
        assert_eq!(StepRange::new(3, 3).count(), 0);
        assert_eq!(StepRange::new(-1, -1).count(), 0);
    }

    #[test]
    fn test_cache_append_iterate_reset() {
        let mut cache = EliminationCache::<4, f32>::new();
        assert!(cache.iter().next().is_none());

        cache.append(1, 0, 2.0);
        cache.append(3, 0, 0.5);

        let entries: Vec<(usize, usize, f32)> = cache
            .iter()
            .map(|entry| (entry.row, entry.column, entry.factor))
            .collect();
        assert_eq!(entries, vec![(1, 0, 2.0), (3, 0, 0.5)]);

        cache.reset();
        assert!(cache.iter().next().is_none());
    }

    #[test]
    fn test_find_and_exchange_pivot() {
        let mut matrix = matrix![
            [0.0, 1.0],
            [0.0, 2.0],
            [3.0, 4.0]
        ];
        let exchanged = find_and_exchange_pivot(0, 0, &mut matrix);
        assert_eq!(exchanged, Some(2));
        assert_eq!(matrix, matrix![[3.0, 4.0], [0.0, 2.0], [0.0, 1.0]]);
    }

    #[test]
    fn test_find_and_exchange_pivot_none() {
        let mut matrix = matrix![
            [0.0, 1.0],
            [0.0, 2.0]
        ];
        assert_eq!(find_and_exchange_pivot(0, 0, &mut matrix), None);
        assert_eq!(matrix, matrix![[0.0, 1.0], [0.0, 2.0]]);
    }

    #[test]
    fn test_record_elimination_below_pivot() {
        let mut cache = EliminationCache::new();
        let mut matrix = matrix![
            [2.0, 1.0],
            [4.0, 1.0],
            [0.0, 5.0]
        ];

        record_elimination(0, 0, StepRange::new(1, 3), StepRange::new(0, 2), &mut cache, &mut matrix);

        assert_eq!(matrix, matrix![[2.0, 1.0], [0.0, -1.0], [0.0, 5.0]]);

        // The zero-coefficient row is skipped entirely.
        assert_eq!(cache.iter().count(), 1);
        let entry = cache.iter().next().unwrap();
        assert_eq!((entry.row, entry.column), (1, 0));
        assert_eq!(entry.factor, 2.0);
    }

    #[test]
    fn test_replay_matches_recorded_operations() {
        let mut cache = EliminationCache::new();
        let mut primary = matrix![
            [2.0, 1.0],
            [4.0, 1.0],
            [6.0, 5.0]
        ];
        let mut companion = primary;

        record_elimination(0, 0, StepRange::new(1, 3), StepRange::new(0, 2), &mut cache, &mut primary);
        replay_elimination(0, StepRange::new(0, 2), &cache, &mut companion);

        assert_eq!(primary, companion);
    }
}
