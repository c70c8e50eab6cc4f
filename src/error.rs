//! Error types shared across the crate.

use thiserror::Error;

use crate::scan::GridShape;

/// Convenience alias used by every fallible operation in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while mapping, cropping or plotting spectra.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Value sequence length does not match the scan grid area.
    #[error("value count {len} does not match scan grid {shape}")]
    SizeMismatch {
        /// The target grid.
        shape: GridShape,
        /// Number of values actually supplied.
        len: usize,
    },

    /// Two spectra matrices that should be congruent are not.
    #[error("matrix shapes differ: {expected:?} vs {actual:?}")]
    ShapeMismatch {
        /// Shape of the reference matrix (rows, channels).
        expected: (usize, usize),
        /// Shape of the offending matrix (rows, channels).
        actual: (usize, usize),
    },

    /// Calibration vector does not cover the spectra's channel axis.
    #[error("calibration has {labels} labels but spectra have {channels} channels")]
    CalibrationMismatch {
        /// Number of calibration labels supplied.
        labels: usize,
        /// Number of spectral channels in the matrix.
        channels: usize,
    },

    /// Label vector does not cover the spectra's row axis.
    #[error("{labels} labels supplied for {spectra} spectra")]
    LabelMismatch {
        /// Number of trace labels supplied.
        labels: usize,
        /// Number of spectra to label.
        spectra: usize,
    },
}
