//! Mapping between acquisition order and scan grid positions.
//!
//! A LIBS instrument rasters the laser across the sample and records one
//! spectrum per pulse, so the data arrives as a flat sequence in acquisition
//! order. Depending on the stage controller the raster runs row-by-row or
//! column-by-column, and "snake" variants reverse direction on every other
//! pass to save stage travel. This module lays the flat sequence back out as
//! a grid matching the physical positions, and exposes the underlying
//! index/coordinate mapping for both directions.

use ndarray::{Array2, Array3, ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Dimensions of the scan raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridShape {
    /// Number of positions per row.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
}

impl GridShape {
    /// Create a new grid shape.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Total number of grid positions.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// Whether the grid has no positions at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Display for GridShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Recognized acquisition-index to grid-position mappings.
///
/// `Horizontal`/`Vertical` rasters restart every pass from the same edge;
/// the snake variants alternate direction each pass, so every other row
/// (or column) arrives reversed and has to be flipped back when building a
/// map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanPattern {
    /// Row by row, every row scanned left to right.
    Horizontal,
    /// Column by column, every column scanned top to bottom.
    Vertical,
    /// Row by row, alternating direction each row.
    #[default]
    HorizontalSnake,
    /// Column by column, alternating direction each column.
    VerticalSnake,
}

impl ScanPattern {
    /// Acquisition index of the spectrum measured at grid position `(x, y)`.
    ///
    /// `x` must be below `shape.width` and `y` below `shape.height`.
    pub fn index_of(self, x: usize, y: usize, shape: GridShape) -> usize {
        match self {
            Self::Horizontal => y * shape.width + x,
            Self::HorizontalSnake => {
                let col = if y % 2 == 0 { x } else { shape.width - 1 - x };
                y * shape.width + col
            }
            Self::Vertical => x * shape.height + y,
            Self::VerticalSnake => {
                let row = if x % 2 == 0 { y } else { shape.height - 1 - y };
                x * shape.height + row
            }
        }
    }

    /// Grid position `(x, y)` of the spectrum with the given acquisition
    /// index. Inverse of [`index_of`](Self::index_of); `index` must be below
    /// `shape.len()`.
    pub fn coords_of(self, index: usize, shape: GridShape) -> (usize, usize) {
        match self {
            Self::Horizontal => (index % shape.width, index / shape.width),
            Self::HorizontalSnake => {
                let y = index / shape.width;
                let x = index % shape.width;
                if y % 2 == 0 {
                    (x, y)
                } else {
                    (shape.width - 1 - x, y)
                }
            }
            Self::Vertical => (index / shape.height, index % shape.height),
            Self::VerticalSnake => {
                let x = index / shape.height;
                let y = index % shape.height;
                if x % 2 == 0 {
                    (x, y)
                } else {
                    (x, shape.height - 1 - y)
                }
            }
        }
    }
}

/// Lay a flat acquisition-ordered value sequence out as a grid.
///
/// The result has shape `(height, width)`; element `(y, x)` is the value
/// acquired while the instrument was at position `(x, y)`. Undoing a snake
/// pattern only permutes values, it never changes them.
///
/// Fails with [`Error::SizeMismatch`] when the sequence length does not
/// equal `shape.len()`.
pub fn to_grid(
    values: ArrayView1<'_, f64>,
    shape: GridShape,
    pattern: ScanPattern,
) -> Result<Array2<f64>> {
    if values.len() != shape.len() {
        return Err(Error::SizeMismatch {
            shape,
            len: values.len(),
        });
    }
    log::debug!("laying out {} values as {shape} grid ({pattern:?})", values.len());
    Ok(Array2::from_shape_fn(
        (shape.height, shape.width),
        |(y, x)| values[pattern.index_of(x, y, shape)],
    ))
}

/// Lay an `(N, B)` spectra matrix out as an `(height, width, B)` cube.
///
/// Same remapping as [`to_grid`], keeping the full spectrum at every grid
/// position instead of a single scalar.
pub fn to_cube(
    spectra: ArrayView2<'_, f64>,
    shape: GridShape,
    pattern: ScanPattern,
) -> Result<Array3<f64>> {
    if spectra.nrows() != shape.len() {
        return Err(Error::SizeMismatch {
            shape,
            len: spectra.nrows(),
        });
    }
    let bands = spectra.ncols();
    log::debug!(
        "laying out {} spectra of {bands} channels as {shape} cube ({pattern:?})",
        spectra.nrows()
    );
    Ok(Array3::from_shape_fn(
        (shape.height, shape.width, bands),
        |(y, x, b)| spectra[[pattern.index_of(x, y, shape), b]],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array1, Array2, array};

    const ALL_PATTERNS: [ScanPattern; 4] = [
        ScanPattern::Horizontal,
        ScanPattern::Vertical,
        ScanPattern::HorizontalSnake,
        ScanPattern::VerticalSnake,
    ];

    #[test]
    fn test_horizontal_snake_reverses_odd_rows() {
        let values = array![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let grid = to_grid(values.view(), GridShape::new(3, 2), ScanPattern::HorizontalSnake)
            .expect("matching length");
        assert_eq!(grid, array![[1.0, 2.0, 3.0], [6.0, 5.0, 4.0]]);
    }

    #[test]
    fn test_horizontal_snake_even_rows_unchanged() {
        let values: Array1<f64> = Array1::from_iter((0..12).map(f64::from));
        let grid = to_grid(values.view(), GridShape::new(4, 3), ScanPattern::HorizontalSnake)
            .expect("matching length");
        assert_eq!(grid.row(0).to_vec(), vec![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(grid.row(1).to_vec(), vec![7.0, 6.0, 5.0, 4.0]);
        assert_eq!(grid.row(2).to_vec(), vec![8.0, 9.0, 10.0, 11.0]);
    }

    #[test]
    fn test_horizontal_keeps_acquisition_order() {
        let values = array![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let grid = to_grid(values.view(), GridShape::new(3, 2), ScanPattern::Horizontal)
            .expect("matching length");
        assert_eq!(grid, array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    }

    #[test]
    fn test_vertical_fills_columns() {
        let values = array![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let grid = to_grid(values.view(), GridShape::new(2, 3), ScanPattern::Vertical)
            .expect("matching length");
        assert_eq!(grid, array![[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]]);
    }

    #[test]
    fn test_vertical_snake_reverses_odd_columns() {
        let values = array![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let grid = to_grid(values.view(), GridShape::new(2, 3), ScanPattern::VerticalSnake)
            .expect("matching length");
        assert_eq!(grid, array![[1.0, 6.0], [2.0, 5.0], [3.0, 4.0]]);
    }

    #[test]
    fn test_round_trip_in_acquisition_order() {
        // Reading the grid back via index_of must reproduce the input for
        // every pattern and a spread of shapes, including degenerate ones.
        for pattern in ALL_PATTERNS {
            for (w, h) in [(1, 1), (3, 2), (2, 3), (4, 4), (5, 1), (1, 5)] {
                let shape = GridShape::new(w, h);
                let values: Array1<f64> = Array1::from_iter((0..shape.len()).map(|i| i as f64));
                let grid = to_grid(values.view(), shape, pattern).expect("matching length");
                for i in 0..shape.len() {
                    let (x, y) = pattern.coords_of(i, shape);
                    assert_eq!(
                        grid[[y, x]], values[i],
                        "{pattern:?} {shape} index {i} landed at ({x}, {y})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_coords_of_inverts_index_of() {
        for pattern in ALL_PATTERNS {
            let shape = GridShape::new(4, 3);
            for y in 0..shape.height {
                for x in 0..shape.width {
                    let i = pattern.index_of(x, y, shape);
                    assert!(i < shape.len());
                    assert_eq!(pattern.coords_of(i, shape), (x, y), "{pattern:?} ({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn test_remap_only_permutes_values() {
        let shape = GridShape::new(5, 4);
        let values: Array1<f64> = Array1::from_iter((0..shape.len()).map(|i| i as f64 * 1.5));
        for pattern in ALL_PATTERNS {
            let grid = to_grid(values.view(), shape, pattern).expect("matching length");
            let mut flat: Vec<f64> = grid.iter().copied().collect();
            flat.sort_by(f64::total_cmp);
            let mut original: Vec<f64> = values.to_vec();
            original.sort_by(f64::total_cmp);
            assert_eq!(flat, original, "{pattern:?} changed a value");
        }
    }

    #[test]
    fn test_size_mismatch_is_an_error() {
        let values = array![1.0, 2.0, 3.0];
        let result = to_grid(values.view(), GridShape::new(3, 2), ScanPattern::Horizontal);
        assert_eq!(
            result,
            Err(crate::Error::SizeMismatch {
                shape: GridShape::new(3, 2),
                len: 3,
            })
        );
    }

    #[test]
    fn test_empty_grid_is_valid() {
        let values: Array1<f64> = Array1::zeros(0);
        let grid = to_grid(values.view(), GridShape::new(0, 0), ScanPattern::HorizontalSnake)
            .expect("empty input matches empty grid");
        assert_eq!(grid.dim(), (0, 0));
    }

    #[test]
    fn test_cube_matches_grid_per_channel() {
        let shape = GridShape::new(3, 2);
        let spectra = Array2::from_shape_fn((shape.len(), 4), |(i, b)| (i * 10 + b) as f64);
        let cube = to_cube(spectra.view(), shape, ScanPattern::HorizontalSnake)
            .expect("matching length");
        assert_eq!(cube.dim(), (2, 3, 4));
        for b in 0..4 {
            let channel = spectra.column(b).to_owned();
            let grid = to_grid(channel.view(), shape, ScanPattern::HorizontalSnake)
                .expect("matching length");
            for y in 0..shape.height {
                for x in 0..shape.width {
                    assert_eq!(cube[[y, x, b]], grid[[y, x]]);
                }
            }
        }
    }

    #[test]
    fn test_cube_size_mismatch_is_an_error() {
        let spectra = Array2::<f64>::zeros((5, 3));
        assert!(to_cube(spectra.view(), GridShape::new(3, 2), ScanPattern::Vertical).is_err());
    }

    #[test]
    fn test_pattern_serde_names() {
        assert_eq!(
            serde_json::to_string(&ScanPattern::HorizontalSnake).unwrap(),
            "\"horizontal_snake\""
        );
        let pattern: ScanPattern = serde_json::from_str("\"vertical\"").unwrap();
        assert_eq!(pattern, ScanPattern::Vertical);
    }

    #[test]
    fn test_grid_shape_display() {
        assert_eq!(GridShape::new(16, 12).to_string(), "16x12");
    }
}
