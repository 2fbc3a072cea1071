//! Entrywise arithmetic and row/column access for matrices.

mod arithmetic;
mod row;

pub use row::*;
