//! Reference weight matrices and random weight generation.
//!
//! - **Case 1**: symmetric 3×3 with zero diagonal, scaled by 1/3
//! - **Case 2**: asymmetric 2×2 (`w01 = 1.1`, `w10 = -1`), unscaled

pub mod random;

use serde::{Deserialize, Serialize};

use crate::config::MATRIX_MULTIPLIER;
use crate::linalg::WeightMatrix;

pub use random::{random_general, random_symmetric};

/// The built-in experiments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Preset {
    CaseOne,
    CaseTwo,
}

impl Preset {
    /// Both presets in run order.
    pub fn all() -> [Preset; 2] {
        [Preset::CaseOne, Preset::CaseTwo]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Preset::CaseOne => "CASE 1",
            Preset::CaseTwo => "CASE 2",
        }
    }

    pub fn weights(&self) -> WeightMatrix {
        match self {
            Preset::CaseOne => case_one(),
            Preset::CaseTwo => case_two(),
        }
    }
}

/// `(1/3) · [[0, -2, 2], [-2, 0, -2], [2, -2, 0]]`
pub fn case_one() -> WeightMatrix {
    WeightMatrix::from([[0.0, -2.0, 2.0], [-2.0, 0.0, -2.0], [2.0, -2.0, 0.0]])
        .scaled(MATRIX_MULTIPLIER)
}

/// `[[0, 1.1], [-1, 0]]`
pub fn case_two() -> WeightMatrix {
    WeightMatrix::from([[0.0, 1.1], [-1.0, 0.0]])
}
