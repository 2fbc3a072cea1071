use thiserror::Error;

/// Errors surfaced by matrix operations.
///
/// Shape errors are unrepresentable here: matrix dimensions are part of the
/// type, so a non-square input to `inverse` or mismatched operands to `matmul`
/// fail to compile instead of failing at runtime.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrustError {
    #[error("matrix is singular")]
    Singular,
    #[error("vector has zero length")]
    ZeroVector,
}

pub type Result<T> = std::result::Result<T, MatrustError>;
