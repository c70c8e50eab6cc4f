//! Rowwise metrics between spectra matrices.
//!
//! Each function compares two `(N, B)` matrices row by row and returns one
//! scalar per spectrum, ready to be laid out on a scan grid.

use ndarray::{Array1, ArrayView2, Axis};

use crate::error::{Error, Result};

fn check_congruent(y_true: &ArrayView2<'_, f64>, y_pred: &ArrayView2<'_, f64>) -> Result<()> {
    if y_true.dim() != y_pred.dim() {
        return Err(Error::ShapeMismatch {
            expected: y_true.dim(),
            actual: y_pred.dim(),
        });
    }
    Ok(())
}

/// Euclidean distance between corresponding rows of two spectra matrices.
pub fn rowwise_euclid(
    y_true: ArrayView2<'_, f64>,
    y_pred: ArrayView2<'_, f64>,
) -> Result<Array1<f64>> {
    check_congruent(&y_true, &y_pred)?;
    let diff = &y_true - &y_pred;
    Ok(diff.mapv_into(|d| d * d).sum_axis(Axis(1)).mapv_into(f64::sqrt))
}

/// Mean absolute error between corresponding rows of two spectra matrices.
pub fn rowwise_mae(
    y_true: ArrayView2<'_, f64>,
    y_pred: ArrayView2<'_, f64>,
) -> Result<Array1<f64>> {
    check_congruent(&y_true, &y_pred)?;
    let diff = &y_true - &y_pred;
    // mean_axis is None only for an empty channel axis
    Ok(diff
        .mapv_into(f64::abs)
        .mean_axis(Axis(1))
        .unwrap_or_else(|| Array1::zeros(y_true.nrows())))
}
