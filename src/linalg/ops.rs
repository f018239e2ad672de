//! Scaling and matrix-vector product.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use crate::error::{HopfieldError, Result};

/// Scale every entry of `matrix` by `scalar`, in place.
pub fn multiply_by_scalar(scalar: f64, matrix: &mut Array2<f64>) {
    matrix.mapv_inplace(|w| w * scalar);
}

/// Compute `W · x`.
///
/// Each output entry is the dot product of one row with `vector`, accumulated
/// left to right. The vector length must equal the number of columns.
pub fn matrix_vector_product(
    matrix: ArrayView2<'_, f64>,
    vector: ArrayView1<'_, f64>,
) -> Result<Array1<f64>> {
    if vector.len() != matrix.ncols() {
        return Err(HopfieldError::DimensionMismatch {
            expected: matrix.ncols(),
            found: vector.len(),
        });
    }

    let out = matrix
        .rows()
        .into_iter()
        .map(|row| {
            row.iter()
                .zip(vector.iter())
                .fold(0.0, |acc, (&w, &x)| acc + w * x)
        })
        .collect();
    Ok(out)
}
