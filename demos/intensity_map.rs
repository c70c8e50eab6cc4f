//! Renders an intensity map and an error map for a synthetic LIBS scan.
//!
//! Run with `cargo run --example intensity-map`; the figures land in the
//! current directory as standalone HTML files.

use libs_tools::plot::{error_map, intensity_map};
use libs_tools::{GridShape, ScanPattern};
use ndarray::{Array1, Array2};

const WIDTH: usize = 16;
const HEIGHT: usize = 12;
const CHANNELS: usize = 128;

fn main() -> libs_tools::Result<()> {
    env_logger::init();

    let shape = GridShape::new(WIDTH, HEIGHT);
    let pattern = ScanPattern::HorizontalSnake;
    let calibration = Array1::from_iter((0..CHANNELS).map(|c| 350.0 + c as f64 * 2.5));

    // Synthetic scan: an emission line at 500 nm whose amplitude falls off
    // with distance from the map center.
    let spectra = Array2::from_shape_fn((shape.len(), CHANNELS), |(i, c)| {
        let (x, y) = pattern.coords_of(i, shape);
        let fx = x as f64 / WIDTH as f64 - 0.5;
        let fy = y as f64 / HEIGHT as f64 - 0.5;
        let amplitude = (1.0 - 2.0 * (fx * fx + fy * fy).sqrt()).max(0.05);
        let wavelength = calibration[c];
        amplitude * (-((wavelength - 500.0) / 8.0).powi(2)).exp()
    });

    let map = intensity_map(
        spectra.view(),
        shape,
        pattern,
        Some(calibration.view()),
        Some(480.0),
        Some(520.0),
        Some("line intensity around 500 nm"),
    )?;
    map.write_html("intensity_map.html");
    log::info!("wrote intensity_map.html");

    // Compare the scan against its own mean spectrum to get a contrast map.
    let mean = spectra
        .mean_axis(ndarray::Axis(0))
        .expect("scan is not empty");
    let reference = Array2::from_shape_fn((shape.len(), CHANNELS), |(_, c)| mean[c]);
    let errors = error_map(
        spectra.view(),
        reference.view(),
        shape,
        pattern,
        Some("distance from mean spectrum"),
        true,
    )?;
    errors.write_html("error_map.html");
    log::info!("wrote error_map.html");

    Ok(())
}
