//! Dense, fixed-shape matrices with compile-time dimensions.
//!
//! `matrust` provides stack-resident matrices whose row and column counts are
//! const generic parameters, together with elimination-based linear algebra:
//! Gauss–Jordan inversion, determinant, rank, and (reduced) row echelon form,
//! plus the entrywise arithmetic, multiplication, transpose, and projection
//! operations that accompany them.
//!
//! # Example
//!
//! ```
//! use matrust::{matrix, inverse, matmul, Matrix};
//!
//! let a = matrix![
//!     [1.0, 0.0, 0.0],
//!     [0.0, 5.0, 0.0],
//!     [2.0, 3.0, 1.0]
//! ];
//!
//! let a_inverse = inverse(&a).unwrap();
//! assert_eq!(matmul(&a, &a_inverse), Matrix::identity());
//! ```
//!
//! Singular inputs are reported through [`error::MatrustError`], never by
//! panicking: `inverse` returns an `Err`, `determinant` returns exactly zero,
//! and `rank` simply comes back below `max_rank()`.

pub mod error;
pub mod linalg;
mod macros;
pub mod matrix;
pub mod ops;

pub use error::{MatrustError, Result};
pub use linalg::*;
pub use matrix::{almost_equal, Matrix, ALMOST_EQUAL_EPSILON};
pub use ops::*;
