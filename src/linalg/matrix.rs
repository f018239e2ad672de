//! Square weight matrix wrapper.

use std::fmt;

use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::error::{HopfieldError, Result};
use crate::linalg::ops::multiply_by_scalar;

/// Connection weights `W ∈ R^{N×N}` of a network with `N` neurons.
///
/// Serialised as a list of rows.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<Vec<f64>>", try_from = "Vec<Vec<f64>>")]
pub struct WeightMatrix {
    weights: Array2<f64>,
}

impl WeightMatrix {
    /// Wrap a square array.
    pub fn new(weights: Array2<f64>) -> Result<Self> {
        let (rows, cols) = weights.dim();
        if rows != cols {
            return Err(HopfieldError::NotSquare { rows, cols });
        }
        Ok(Self { weights })
    }

    /// Callers guarantee `weights` is square.
    pub(crate) fn from_square(weights: Array2<f64>) -> Self {
        debug_assert_eq!(weights.nrows(), weights.ncols());
        Self { weights }
    }

    /// Build from row literals. Ragged rows are rejected as non-square.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let n = rows.len();
        let mut weights = Array2::zeros((n, n));
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(HopfieldError::NotSquare {
                    rows: n,
                    cols: row.len(),
                });
            }
            for (j, &w) in row.iter().enumerate() {
                weights[[i, j]] = w;
            }
        }
        Ok(Self { weights })
    }

    /// Return the matrix with every weight multiplied by `scalar`.
    pub fn scaled(mut self, scalar: f64) -> Self {
        multiply_by_scalar(scalar, &mut self.weights);
        self
    }

    /// Number of neurons.
    pub fn order(&self) -> usize {
        self.weights.nrows()
    }

    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.weights.view()
    }

    pub fn as_array(&self) -> &Array2<f64> {
        &self.weights
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.weights[[row, col]]
    }

    /// Weights as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.weights
            .rows()
            .into_iter()
            .map(|r| r.to_vec())
            .collect()
    }
}

impl From<WeightMatrix> for Vec<Vec<f64>> {
    fn from(m: WeightMatrix) -> Self {
        m.to_rows()
    }
}

impl TryFrom<Vec<Vec<f64>>> for WeightMatrix {
    type Error = HopfieldError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        WeightMatrix::from_rows(&rows)
    }
}

impl<const N: usize> From<[[f64; N]; N]> for WeightMatrix {
    fn from(rows: [[f64; N]; N]) -> Self {
        Self::from_square(ndarray::arr2(&rows))
    }
}

impl fmt::Debug for WeightMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WeightMatrix(order={}, rows={:?})", self.order(), self.to_rows())
    }
}

impl fmt::Display for WeightMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.weights.rows().into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let cells: Vec<String> = row.iter().map(|w| format!("{:>7.3}", w)).collect();
            write!(f, "[{}]", cells.join(", "))?;
        }
        Ok(())
    }
}
