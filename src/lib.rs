//! # hopfield
//!
//! **Synchronous Hopfield convergence analysis** for small bipolar networks.
//!
//! Given a square weight matrix `W` and a starting state `x ∈ {+1, -1}^N`, the
//! network is updated synchronously:
//!
//!   x' = sgn(W · x)        (with sgn(0) = -1)
//!
//! until the state maps onto itself (a **fixed point**), revisits an earlier
//! produced state (a **cycle**), or the iteration budget runs out.
//!
//! ## Components
//!
//! 1. **linalg**: scalar scaling, matrix-vector product, closed-form determinants
//! 2. **validation**: symmetry / diagonal / Sylvester diagnostics for `W`
//! 3. **network**: activation, convergence engine, experiment driver
//! 4. **presets**: the reference weight matrices and a seeded random generator
//! 5. **report**: line-oriented narration and JSON rendering of experiments

pub mod error;
pub mod linalg;
pub mod network;
pub mod presets;
pub mod report;
pub mod validation;

pub use error::{HopfieldError, Result};

/// Crate-wide constants.
pub mod config {
    /// Iteration at which a run is abandoned without a classification.
    pub const MAXIMUM_ITERATIONS: usize = 20;

    /// Scaling applied to the 3×3 reference matrix before use.
    pub const MATRIX_MULTIPLIER: f64 = 1.0 / 3.0;

    /// Allowed neuron states, in enumeration order.
    pub const BIPOLAR_VALUES: [i8; 2] = [1, -1];

    /// Largest matrix order with a closed-form determinant rule.
    pub const MAX_DETERMINANT_ORDER: usize = 3;
}
