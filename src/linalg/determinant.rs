//! Closed-form determinants for orders 1 to 3.
//!
//! There is deliberately no general elimination fallback: the rule is picked
//! from the matrix order, and any order without a rule is reported as
//! [`HopfieldError::UnsupportedOrder`].

use ndarray::ArrayView2;

use crate::error::{HopfieldError, Result};

/// Determinant strategy, selected by matrix order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeterminantRule {
    /// `a00`
    Order1,
    /// `a00·a11 - a01·a10`
    Order2,
    /// Three forward diagonal products minus three backward ones.
    Order3,
    /// No rule for this order.
    Unsupported(usize),
}

impl DeterminantRule {
    pub fn for_order(order: usize) -> Self {
        match order {
            1 => DeterminantRule::Order1,
            2 => DeterminantRule::Order2,
            3 => DeterminantRule::Order3,
            n => DeterminantRule::Unsupported(n),
        }
    }

    /// Matrix order this rule applies to.
    pub fn order(&self) -> usize {
        match self {
            DeterminantRule::Order1 => 1,
            DeterminantRule::Order2 => 2,
            DeterminantRule::Order3 => 3,
            DeterminantRule::Unsupported(n) => *n,
        }
    }

    /// Evaluate the rule on a square matrix of the matching order.
    pub fn evaluate(&self, m: ArrayView2<'_, f64>) -> Result<f64> {
        let (rows, cols) = m.dim();
        if rows != cols {
            return Err(HopfieldError::NotSquare { rows, cols });
        }
        if rows != self.order() {
            return Err(HopfieldError::DimensionMismatch {
                expected: self.order(),
                found: rows,
            });
        }

        match self {
            DeterminantRule::Order1 => Ok(m[[0, 0]]),
            DeterminantRule::Order2 => Ok(m[[0, 0]] * m[[1, 1]] - m[[0, 1]] * m[[1, 0]]),
            DeterminantRule::Order3 => Ok(sarrus(m)),
            DeterminantRule::Unsupported(n) => Err(HopfieldError::UnsupportedOrder(*n)),
        }
    }
}

/// Cyclic-index expansion of a 3×3 determinant.
///
/// Forward diagonal `i` multiplies `m[(i + j) mod 3][j]`, backward diagonal `i`
/// multiplies `m[(-1 - i - j) mod 3][j]`, for `j = 0..3`.
fn sarrus(m: ArrayView2<'_, f64>) -> f64 {
    let mut result = 0.0;

    for i in 0..3 {
        let mut product = 1.0;
        for j in 0..3 {
            product *= m[[(i + j) % 3, j]];
        }
        result += product;
    }

    for i in 0..3i64 {
        let mut product = 1.0;
        for j in 0..3i64 {
            let row = (-1 - i - j).rem_euclid(3) as usize;
            product *= m[[row, j as usize]];
        }
        result -= product;
    }

    result
}

/// Determinant of a square matrix of order 1, 2 or 3.
pub fn determinant(matrix: ArrayView2<'_, f64>) -> Result<f64> {
    let (rows, cols) = matrix.dim();
    if rows != cols {
        return Err(HopfieldError::NotSquare { rows, cols });
    }
    DeterminantRule::for_order(rows).evaluate(matrix)
}
