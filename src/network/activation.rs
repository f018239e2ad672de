//! Sign activation.
//!
//! Zero input maps to `-1`, not to the neuron's previous state. NaN also maps
//! to `-1` since it is not greater than zero.

use ndarray::Array1;

use crate::network::state::BipolarVector;

/// `+1` for strictly positive input, `-1` otherwise.
pub fn activate(value: f64) -> i8 {
    if value > 0.0 {
        1
    } else {
        -1
    }
}

/// Apply [`activate`] elementwise.
pub fn apply_activation(field: &Array1<f64>) -> BipolarVector {
    BipolarVector::from_signs(field.iter().map(|&v| activate(v)).collect())
}
