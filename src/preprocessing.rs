//! Spectra preprocessing ahead of mapping and plotting.

use ndarray::{Array2, ArrayView1, ArrayView2, Axis};

use crate::error::{Error, Result};

/// Crops spectra to the wavelength channels whose calibration label falls
/// inside an inclusive `[from, to]` range.
///
/// Open bounds keep everything on that side:
///
/// ```rust,ignore
/// // keep channels from 480 nm up to the end of the calibration
/// let cropped = LabelCrop::new(480.0, None).apply(spectra.view(), calibration.view())?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelCrop {
    label_from: Option<f64>,
    label_to: Option<f64>,
}

impl LabelCrop {
    /// Crop to the inclusive `[label_from, label_to]` range. Pass `None` to
    /// leave a bound open.
    pub fn new(label_from: impl Into<Option<f64>>, label_to: impl Into<Option<f64>>) -> Self {
        Self {
            label_from: label_from.into(),
            label_to: label_to.into(),
        }
    }

    /// Indices of the calibration labels inside the range, in channel order.
    pub fn selected_channels(&self, calibration: ArrayView1<'_, f64>) -> Vec<usize> {
        calibration
            .iter()
            .enumerate()
            .filter(|&(_, &label)| {
                self.label_from.is_none_or(|from| label >= from)
                    && self.label_to.is_none_or(|to| label <= to)
            })
            .map(|(i, _)| i)
            .collect()
    }

    /// Select the in-range channel columns of an `(N, B)` spectra matrix.
    ///
    /// `calibration` must have one label per channel. An empty selection is
    /// permitted and yields an `(N, 0)` matrix.
    pub fn apply(
        &self,
        spectra: ArrayView2<'_, f64>,
        calibration: ArrayView1<'_, f64>,
    ) -> Result<Array2<f64>> {
        if calibration.len() != spectra.ncols() {
            return Err(Error::CalibrationMismatch {
                labels: calibration.len(),
                channels: spectra.ncols(),
            });
        }
        let channels = self.selected_channels(calibration);
        if channels.is_empty() {
            log::warn!(
                "label crop [{:?}, {:?}] selects no channels",
                self.label_from,
                self.label_to
            );
        }
        Ok(spectra.select(Axis(1), &channels))
    }
}
