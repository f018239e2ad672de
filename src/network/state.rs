//! Bipolar state vectors.

use std::fmt;

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::error::{HopfieldError, Result};

/// Network state `x ∈ {+1, -1}^N`.
///
/// Ordered lexicographically by component so states can be collected into a
/// sorted set.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "Vec<i8>", try_from = "Vec<i64>")]
pub struct BipolarVector {
    components: Vec<i8>,
}

impl BipolarVector {
    /// Validate and wrap components. Anything other than `+1` / `-1` is rejected.
    pub fn new<I>(components: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<i64>,
    {
        let components = components
            .into_iter()
            .enumerate()
            .map(|(index, c)| {
                let value: i64 = c.into();
                match value {
                    1 => Ok(1i8),
                    -1 => Ok(-1i8),
                    _ => Err(HopfieldError::InvalidComponent { index, value }),
                }
            })
            .collect::<Result<Vec<i8>>>()?;
        Ok(Self { components })
    }

    /// Callers guarantee every component is `+1` or `-1`.
    pub(crate) fn from_signs(components: Vec<i8>) -> Self {
        debug_assert!(components.iter().all(|&c| c == 1 || c == -1));
        Self { components }
    }

    pub fn dimension(&self) -> usize {
        self.components.len()
    }

    pub fn components(&self) -> &[i8] {
        &self.components
    }

    /// Real-valued copy for the matrix-vector product.
    pub fn to_array(&self) -> Array1<f64> {
        self.components.iter().map(|&c| f64::from(c)).collect()
    }
}

impl From<BipolarVector> for Vec<i8> {
    fn from(v: BipolarVector) -> Self {
        v.components
    }
}

impl TryFrom<Vec<i64>> for BipolarVector {
    type Error = HopfieldError;

    fn try_from(components: Vec<i64>) -> Result<Self> {
        BipolarVector::new(components)
    }
}

impl fmt::Display for BipolarVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.components.iter().map(|c| c.to_string()).collect();
        write!(f, "[{}]", parts.join(", "))
    }
}

impl fmt::Debug for BipolarVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BipolarVector{}", self)
    }
}
