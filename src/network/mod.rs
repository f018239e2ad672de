//! Synchronous bipolar network dynamics.
//!
//! - **state**: `{+1, -1}` state vectors
//! - **activation**: sign thresholding with `sgn(0) = -1`
//! - **convergence**: bounded update loop, fixed point / cycle detection
//! - **driver**: exhaustive experiments over every initial state

pub mod activation;
pub mod convergence;
pub mod driver;
pub mod state;

pub use activation::{activate, apply_activation};
pub use convergence::{Convergence, ConvergenceEngine, EngineConfig, IterationStep, Outcome};
pub use driver::{enumerate_vectors, Experiment, ExperimentReport};
pub use state::BipolarVector;
