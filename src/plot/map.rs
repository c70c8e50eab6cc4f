//! Heatmaps of per-spectrum scalars laid out on the scan grid.

use ndarray::{Array1, ArrayView1, ArrayView2, Axis};
use plotly::{HeatMap, Layout, Plot};

use crate::error::Result;
use crate::metrics::rowwise_euclid;
use crate::preprocessing::LabelCrop;
use crate::scan::{GridShape, ScanPattern, to_grid};

/// Heatmap of a flat per-spectrum value sequence laid out on the scan grid.
///
/// Fails when the sequence length does not match the grid area.
pub fn plot_map(
    values: ArrayView1<'_, f64>,
    shape: GridShape,
    pattern: ScanPattern,
    title: Option<&str>,
) -> Result<Plot> {
    let grid = to_grid(values, shape, pattern)?;
    let z: Vec<Vec<f64>> = grid.outer_iter().map(|row| row.to_vec()).collect();

    let mut plot = Plot::new();
    plot.add_trace(HeatMap::new_z(z));

    let mut layout = Layout::new();
    if let Some(title) = title {
        layout = layout.title(title);
    }
    plot.set_layout(layout);

    Ok(plot)
}

/// Rowwise model error per spectrum, laid out on the scan grid.
///
/// Uses [`rowwise_euclid`] as the error metric; see [`error_map_with`] for
/// supplying a different one. With `add_stats` the error's mean, minimum and
/// maximum are appended to the figure title.
pub fn error_map(
    y_true: ArrayView2<'_, f64>,
    y_pred: ArrayView2<'_, f64>,
    shape: GridShape,
    pattern: ScanPattern,
    title: Option<&str>,
    add_stats: bool,
) -> Result<Plot> {
    error_map_with(y_true, y_pred, shape, pattern, rowwise_euclid, title, add_stats)
}

/// Like [`error_map`], with a caller-supplied rowwise error metric.
pub fn error_map_with<F>(
    y_true: ArrayView2<'_, f64>,
    y_pred: ArrayView2<'_, f64>,
    shape: GridShape,
    pattern: ScanPattern,
    metric: F,
    title: Option<&str>,
    add_stats: bool,
) -> Result<Plot>
where
    F: Fn(ArrayView2<'_, f64>, ArrayView2<'_, f64>) -> Result<Array1<f64>>,
{
    let values = metric(y_true, y_pred)?;

    let title = if add_stats {
        Some(append_stats(title, values.view()))
    } else {
        title.map(str::to_owned)
    };

    plot_map(values.view(), shape, pattern, title.as_deref())
}

/// Total intensity per spectrum over an inclusive wavelength range, laid out
/// on the scan grid.
///
/// `calibration` defaults to channel indices `0..B`; open `start`/`end`
/// bounds default to the calibration's full extent.
pub fn intensity_map(
    spectra: ArrayView2<'_, f64>,
    shape: GridShape,
    pattern: ScanPattern,
    calibration: Option<ArrayView1<'_, f64>>,
    start: Option<f64>,
    end: Option<f64>,
    title: Option<&str>,
) -> Result<Plot> {
    let values = band_intensities(spectra, calibration, start, end)?;
    plot_map(values.view(), shape, pattern, title)
}

/// Per-spectrum sum of the channels whose calibration label lies inside the
/// inclusive `[start, end]` range.
pub fn band_intensities(
    spectra: ArrayView2<'_, f64>,
    calibration: Option<ArrayView1<'_, f64>>,
    start: Option<f64>,
    end: Option<f64>,
) -> Result<Array1<f64>> {
    let channel_indices;
    let calibration = match calibration {
        Some(calibration) => calibration,
        None => {
            channel_indices = Array1::from_iter((0..spectra.ncols()).map(|i| i as f64));
            channel_indices.view()
        }
    };

    let cropped = LabelCrop::new(start, end).apply(spectra, calibration)?;
    Ok(cropped.sum_axis(Axis(1)))
}

fn append_stats(title: Option<&str>, values: ArrayView1<'_, f64>) -> String {
    let avg = values.mean().unwrap_or(f64::NAN);
    let min = values.fold(f64::INFINITY, |acc, &v| acc.min(v));
    let max = values.fold(f64::NEG_INFINITY, |acc, &v| acc.max(v));
    format!(
        "{} (avg: {avg}, min: {min}, max: {max})",
        title.unwrap_or_default()
    )
}
