//! Linear algebra primitives for small dense weight matrices.
//!
//! Only what the update rule and the matrix diagnostics need:
//! - **Scaling** a matrix in place
//! - **Matrix-vector product** with explicit dimension checks
//! - **Determinants** of order 1 to 3 via closed-form rules

pub mod determinant;
pub mod matrix;
pub mod ops;

pub use determinant::{determinant, DeterminantRule};
pub use matrix::WeightMatrix;
pub use ops::{matrix_vector_product, multiply_by_scalar};
