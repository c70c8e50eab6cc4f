//! Line plot of a few synthetic reference spectra.
//!
//! Run with `cargo run --example spectra-plot`.

use libs_tools::plot::plot_spectra;
use ndarray::{Array1, Array2};

const CHANNELS: usize = 256;

fn main() -> libs_tools::Result<()> {
    env_logger::init();

    let calibration = Array1::from_iter((0..CHANNELS).map(|c| 300.0 + c as f64 * 1.5));

    // Three samples, each with two emission lines at sample-specific
    // wavelengths on a shared continuum.
    let peaks = [(396.8, 589.0), (422.7, 656.3), (404.6, 520.0)];
    let spectra = Array2::from_shape_fn((peaks.len(), CHANNELS), |(s, c)| {
        let wavelength = calibration[c];
        let (first, second) = peaks[s];
        let continuum = 0.05 + 0.02 * (wavelength / 100.0).sin().abs();
        let line = |center: f64| (-((wavelength - center) / 4.0).powi(2)).exp();
        continuum + line(first) + 0.6 * line(second)
    });

    let labels = vec![
        "sample A".to_string(),
        "sample B".to_string(),
        "sample C".to_string(),
    ];
    let figure = plot_spectra(
        spectra.view(),
        Some(calibration.view()),
        Some(&labels),
        Some("reference spectra"),
        true,
    )?;
    figure.write_html("spectra.html");
    log::info!("wrote spectra.html");

    Ok(())
}
