//! Weight matrix diagnostics.
//!
//! Classical Hopfield convergence guarantees assume a symmetric weight matrix
//! with a non-negative diagonal, and sharper ones a positive definite matrix.
//! These checks only report; the update loop runs the same either way.

use ndarray::s;
use serde::{Deserialize, Serialize};

use crate::config::MAX_DETERMINANT_ORDER;
use crate::error::{HopfieldError, Result};
use crate::linalg::{determinant, WeightMatrix};

/// `m[i][j] == m[j][i]` for every `i < j` (exact comparison).
pub fn is_symmetric(matrix: &WeightMatrix) -> bool {
    let n = matrix.order();
    for i in 0..n {
        for j in (i + 1)..n {
            if matrix.get(i, j) != matrix.get(j, i) {
                return false;
            }
        }
    }
    true
}

/// Every diagonal entry is `>= 0`.
pub fn has_non_negative_diagonal(matrix: &WeightMatrix) -> bool {
    matrix.as_array().diag().iter().all(|&w| w >= 0.0)
}

/// Sylvester's criterion on the leading principal minors of order `1..=N`.
///
/// Limited to `N <= 3` by the available determinant rules.
pub fn is_positive_definite(matrix: &WeightMatrix) -> Result<bool> {
    let n = matrix.order();
    if n > MAX_DETERMINANT_ORDER {
        return Err(HopfieldError::UnsupportedOrder(n));
    }

    let m = matrix.view();
    for k in 1..=n {
        let minor = determinant(m.slice(s![..k, ..k]))?;
        if minor <= 0.0 {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Results of the three diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixProperties {
    pub non_negative_diagonal: bool,
    pub symmetric: bool,
    /// `None` when the order has no determinant rule.
    pub positive_definite: Option<bool>,
}

impl MatrixProperties {
    /// Run every check. Never fails: a check that cannot be evaluated is
    /// reported as `None` and the matrix stays usable.
    pub fn inspect(matrix: &WeightMatrix) -> Self {
        let positive_definite = match is_positive_definite(matrix) {
            Ok(pd) => Some(pd),
            Err(err) => {
                tracing::debug!(order = matrix.order(), %err, "positive definiteness not evaluated");
                None
            }
        };

        let props = Self {
            non_negative_diagonal: has_non_negative_diagonal(matrix),
            symmetric: is_symmetric(matrix),
            positive_definite,
        };

        if !props.symmetric {
            tracing::warn!(
                order = matrix.order(),
                "weight matrix is not symmetric; cycles are possible"
            );
        }
        props
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets;
    use ndarray::{array, Array2};

    fn m(a: Array2<f64>) -> WeightMatrix {
        WeightMatrix::new(a).unwrap()
    }

    #[test]
    fn test_symmetric() {
        assert!(is_symmetric(&presets::case_one()));
        assert!(!is_symmetric(&presets::case_two()));
        assert!(is_symmetric(&m(array![[5.0]])));
    }

    #[test]
    fn test_non_negative_diagonal() {
        assert!(has_non_negative_diagonal(&presets::case_one()));
        assert!(has_non_negative_diagonal(&m(array![[0.0, 9.0], [9.0, 2.0]])));
        assert!(!has_non_negative_diagonal(&m(array![[1.0, 0.0], [0.0, -0.1]])));
    }

    #[test]
    fn test_positive_diagonal_is_positive_definite() {
        assert!(is_positive_definite(&m(array![[2.0]])).unwrap());
        assert!(is_positive_definite(&m(array![[1.0, 0.0], [0.0, 3.0]])).unwrap());
        assert!(is_positive_definite(&m(Array2::from_diag(&array![0.5, 1.0, 4.0]))).unwrap());
    }

    #[test]
    fn test_non_positive_diagonal_entry_fails() {
        assert!(!is_positive_definite(&m(array![[0.0]])).unwrap());
        assert!(!is_positive_definite(&m(array![[1.0, 0.0], [0.0, 0.0]])).unwrap());
        assert!(!is_positive_definite(&m(Array2::from_diag(&array![2.0, 1.0, -4.0]))).unwrap());
        assert!(!is_positive_definite(&m(Array2::from_diag(&array![-1.0, -1.0, 1.0]))).unwrap());
    }

    #[test]
    fn test_positive_definite_uses_leading_minors() {
        // Minors: 2, 2·2 - 1 = 3, det = 4.
        let a = m(array![[2.0, -1.0, 0.0], [-1.0, 2.0, -1.0], [0.0, -1.0, 2.0]]);
        assert!(is_positive_definite(&a).unwrap());

        // First minor positive, second negative.
        let b = m(array![[1.0, 2.0], [2.0, 1.0]]);
        assert!(!is_positive_definite(&b).unwrap());
    }

    #[test]
    fn test_positive_definite_order_four_unsupported() {
        let err = is_positive_definite(&m(Array2::eye(4))).unwrap_err();
        assert_eq!(err, HopfieldError::UnsupportedOrder(4));
    }

    #[test]
    fn test_reference_properties() {
        let one = MatrixProperties::inspect(&presets::case_one());
        assert_eq!(
            one,
            MatrixProperties {
                non_negative_diagonal: true,
                symmetric: true,
                positive_definite: Some(false),
            }
        );

        let two = MatrixProperties::inspect(&presets::case_two());
        assert!(two.non_negative_diagonal);
        assert!(!two.symmetric);
        assert_eq!(two.positive_definite, Some(false));
    }

    #[test]
    fn test_inspect_large_order_skips_positive_definite() {
        let props = MatrixProperties::inspect(&m(Array2::eye(4)));
        assert!(props.symmetric);
        assert!(props.non_negative_diagonal);
        assert_eq!(props.positive_definite, None);
    }
}
