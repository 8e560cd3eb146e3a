//! Module for 2D planes taken from a volume

// crate modules
use crate::axis::Axis;
use crate::error::Result;
use crate::volume::Range;

// voltools modules
use voltools_utils::SliceExt;

// external crates
use serde::Serialize;

/// A 2D plane copied out of a [Volume](crate::Volume)
///
/// Slices are generated by [Volume::slice()](crate::Volume::slice) and keep
/// track of where they came from. Values are row-major with `rows * cols`
/// entries.
///
/// ```rust
/// # use voltools_volume::{Axis, Volume};
/// let volume = Volume::new([1, 2, 3], vec![1.0, 2.0, 3.0,
///                                          4.0, 5.0, 6.0]).unwrap();
/// let slice = volume.slice(Axis::X, 0).unwrap();
///
/// // Readout of a single pixel by (row, column)
/// assert_eq!(slice.value(1, 2), Some(6.0));
///
/// // Iterate over the rows for plotting or writing
/// let first_row = slice.rows_iter().next().unwrap();
/// assert_eq!(first_row, &[1.0, 2.0, 3.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
    axis: Axis,
    index: usize,
    rows: usize,
    cols: usize,
    values: Vec<f32>,
}

impl Slice {
    /// Only the volume knows how to build a consistent slice
    pub(crate) fn new(axis: Axis, index: usize, rows: usize, cols: usize, values: Vec<f32>) -> Self {
        Self {
            axis,
            index,
            rows,
            cols,
            values,
        }
    }

    /// Axis the plane was taken along
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Index of the plane along the axis
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// All values in row-major order
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Value at (row, column), if in bounds
    pub fn value(&self, row: usize, col: usize) -> Option<f32> {
        if row < self.rows && col < self.cols {
            Some(self.values[row * self.cols + col])
        } else {
            None
        }
    }

    /// Iterator over each row of the plane
    pub fn rows_iter(&self) -> std::slice::ChunksExact<'_, f32> {
        self.values.chunks_exact(self.cols)
    }

    /// Minimum and maximum of the plane
    pub fn range(&self) -> Result<Range> {
        let (min, max) = self.values.try_min_max()?;
        Ok(Range { min, max })
    }
}

impl std::fmt::Display for Slice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} = {} ({} x {})",
            self.axis, self.index, self.rows, self.cols
        )?;
        if let Ok(range) = self.range() {
            write!(f, ", range {range}")?;
        }
        Ok(())
    }
}
