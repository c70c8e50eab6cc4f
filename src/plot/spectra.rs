//! Line plots of individual spectra.

use ndarray::{Array1, ArrayView1, ArrayView2};
use plotly::color::Rgb;
use plotly::common::{Line, Mode};
use plotly::layout::Axis;
use plotly::{Layout, Plot, Scatter};

use crate::error::{Error, Result};

/// Qualitative 12-color palette (ColorBrewer "Paired") used to tell spectra
/// apart; figures with more traces than colors cycle through it.
pub const PAIRED: [(u8, u8, u8); 12] = [
    (166, 206, 227),
    (31, 120, 180),
    (178, 223, 138),
    (51, 160, 44),
    (251, 154, 153),
    (227, 26, 28),
    (253, 191, 111),
    (255, 127, 0),
    (202, 178, 214),
    (106, 61, 154),
    (255, 255, 153),
    (177, 89, 40),
];

fn paired_color(index: usize) -> Rgb {
    let (r, g, b) = PAIRED[index % PAIRED.len()];
    Rgb::new(r, g, b)
}

/// Line plot with one trace per spectrum row of an `(N, B)` matrix.
///
/// `calibration` defaults to channel indices `0..B` and must otherwise have
/// one label per channel. `labels` defaults to `"class 1"`, `"class 2"`, …
/// and must otherwise have one entry per spectrum. `axis_titles` toggles the
/// default wavelength/intensity axis captions; callers wanting custom ones
/// can restyle the returned figure's layout.
pub fn plot_spectra(
    spectra: ArrayView2<'_, f64>,
    calibration: Option<ArrayView1<'_, f64>>,
    labels: Option<&[String]>,
    title: Option<&str>,
    axis_titles: bool,
) -> Result<Plot> {
    let channel_indices;
    let calibration = match calibration {
        Some(calibration) => {
            if calibration.len() != spectra.ncols() {
                return Err(Error::CalibrationMismatch {
                    labels: calibration.len(),
                    channels: spectra.ncols(),
                });
            }
            calibration
        }
        None => {
            channel_indices = Array1::from_iter((0..spectra.ncols()).map(|i| i as f64));
            channel_indices.view()
        }
    };
    if let Some(labels) = labels
        && labels.len() != spectra.nrows()
    {
        return Err(Error::LabelMismatch {
            labels: labels.len(),
            spectra: spectra.nrows(),
        });
    }

    let x: Vec<f64> = calibration.to_vec();
    let mut plot = Plot::new();
    for (i, row) in spectra.outer_iter().enumerate() {
        let name = match labels {
            Some(labels) => labels[i].clone(),
            None => format!("class {}", i + 1),
        };
        plot.add_trace(
            Scatter::new(x.clone(), row.to_vec())
                .mode(Mode::Lines)
                .name(&name)
                .line(Line::new().color(paired_color(i))),
        );
    }

    let mut layout = Layout::new();
    if let Some(title) = title {
        layout = layout.title(title);
    }
    if axis_titles {
        layout = layout
            .x_axis(Axis::new().title("wavelength (nm)"))
            .y_axis(Axis::new().title("intensity (a.u.)"));
    }
    plot.set_layout(layout);

    Ok(plot)
}
