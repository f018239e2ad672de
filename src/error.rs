//! Error types for network construction and linear algebra.

use thiserror::Error;

/// Failure signals raised before any update step runs.
///
/// Exhausting the iteration budget is not represented here; it is a regular
/// [`Outcome`](crate::network::convergence::Outcome).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HopfieldError {
    /// Vector length does not match the matrix column count.
    #[error("dimension mismatch: matrix expects {expected} components, vector has {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// No closed-form determinant exists for this order.
    #[error("unsupported matrix order {0}: determinants are defined for orders 1 to 3")]
    UnsupportedOrder(usize),

    /// Weight matrices must be square.
    #[error("weight matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// A neuron state outside {+1, -1}.
    #[error("component {index} is {value}, expected +1 or -1")]
    InvalidComponent { index: usize, value: i64 },

    /// Rejected engine or experiment settings.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for library operations.
pub type Result<T> = std::result::Result<T, HopfieldError>;

impl HopfieldError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
