//! Macros for constructing matrices with a convenient literal syntax.

/// Creates a matrix from nested row-major bracketed rows.
///
/// Entries are cast to `f32`, so integer literals are accepted.
///
/// # Examples
/// ```
/// use matrust::matrix;
///
/// let m = matrix![
///     [1.0, 2.0],
///     [3.0, 4.0]
/// ];
/// assert_eq!(m.row_count(), 2);
/// assert_eq!(m[[1, 0]], 3.0);
/// ```
#[macro_export]
macro_rules! matrix {
    ($([$($entry:expr),+ $(,)?]),+ $(,)?) => {
        $crate::Matrix::from_rows([$([$($entry as f32),+]),+])
    };
}

/// Creates a column vector (an `N` x `1` matrix) from a list of values.
///
/// Entries are cast to `f32`, so integer literals are accepted.
///
/// # Examples
/// ```
/// use matrust::vector;
///
/// let v = vector![3.0, 4.0];
/// assert_eq!(v.entry_count(), 2);
/// assert_eq!(v[[1, 0]], 4.0);
/// ```
#[macro_export]
macro_rules! vector {
    ($($entry:expr),+ $(,)?) => {
        $crate::Matrix::from_column([$($entry as f32),+])
    };
}
