//! Figure builders for hyperspectral maps and spectra line plots.
//!
//! All builders return [`plotly::Plot`] values; callers decide whether to
//! `show()` them, embed them, or write them out with `write_html`.

mod map;
mod spectra;

pub use map::{band_intensities, error_map, error_map_with, intensity_map, plot_map};
pub use spectra::{PAIRED, plot_spectra};
