//! Commonly used tools for LIBS spectral analysis.
//!
//! Laser-induced breakdown spectroscopy rigs raster the laser across the
//! sample and record one spectrum per pulse, so a measurement arrives as a
//! flat sequence of spectra in acquisition order. This crate provides the
//! pieces needed to turn that sequence back into pictures:
//!
//! - [`scan`]: mapping between acquisition indices and scan grid positions,
//!   including the "snake" raster patterns that reverse every other pass
//! - [`metrics`]: rowwise error metrics between spectra matrices
//! - [`preprocessing`]: wavelength-range cropping against a calibration
//! - [`plot`]: heatmap and line-plot figure builders on top of plotly

pub mod error;
pub mod metrics;
pub mod plot;
pub mod preprocessing;
pub mod scan;

pub use error::{Error, Result};
pub use scan::{GridShape, ScanPattern};
