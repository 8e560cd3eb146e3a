//! Module for volume-related data and implementations

// crate modules
use crate::axis::Axis;
use crate::error::{Error, Result};
use crate::slice::Slice;

// voltools modules
use voltools_utils::{f, SliceExt, ValueExt};

// external crates
use log::debug;
use serde::Serialize;

/// Dense 3D array of scalar samples
///
/// A [Volume] is a stack of 2D matrices of identical shape. The `shape` is
/// therefore always `[matrices, rows, columns]`, matching the order the values
/// appear in a volume file.
///
/// Values are stored flat in row-major order, i.e. the column index changes
/// fastest and the matrix index slowest. The global index of any value is:
///
/// ```text
/// index = (i * rows + j) * columns + k
/// ```
///
/// A volume is constructed once and never mutated, so there are no setters.
/// The checked constructor guarantees the number of values matches the shape
/// and that no extent is zero.
///
/// ```rust
/// # use voltools_volume::{Axis, Volume};
/// // Two 2x2 matrices
/// let volume = Volume::new([2, 2, 2], vec![1.0, 2.0, 3.0, 4.0,
///                                          5.0, 6.0, 7.0, 8.0]).unwrap();
///
/// // Single values may be looked up by (matrix, row, column)
/// assert_eq!(volume.value(1, 0, 1), Some(6.0));
/// assert_eq!(volume.value(2, 0, 0), None);
///
/// // Planes may be taken along any axis
/// let slice = volume.slice(Axis::Z, 0).unwrap();
/// assert_eq!(slice.values(), &[1.0, 3.0, 5.0, 7.0]);
///
/// // The range is used for consistent scaling of any plots
/// let range = volume.range().unwrap();
/// assert_eq!((range.min, range.max), (1.0, 8.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Volume {
    /// Number of (matrices, rows, columns)
    shape: [usize; 3],
    /// Flat row-major values
    values: Vec<f32>,
}

/// Global minimum and maximum of a set of values
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Range {
    /// Smallest value
    pub min: f32,
    /// Largest value
    pub max: f32,
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} to {}", self.min.sci(5, 2), self.max.sci(5, 2))
    }
}

// ! ------------------------------------------------------------------------
// !                                Public API
// ! ------------------------------------------------------------------------

impl Volume {
    /// Create a new volume from a shape and row-major values
    ///
    /// Fails if the number of values is not exactly the product of the shape,
    /// if any of the extents are zero, or if the product overflows `usize`.
    ///
    /// ```rust
    /// # use voltools_volume::Volume;
    /// assert!(Volume::new([1, 2, 3], vec![0.0; 6]).is_ok());
    /// assert!(Volume::new([1, 2, 3], vec![0.0; 5]).is_err());
    /// assert!(Volume::new([0, 2, 3], vec![]).is_err());
    /// ```
    pub fn new(shape: [usize; 3], values: Vec<f32>) -> Result<Self> {
        if shape.iter().any(|n| *n == 0) {
            return Err(Error::EmptyVolume { shape });
        }

        let expected = shape
            .iter()
            .try_fold(1usize, |acc, n| acc.checked_mul(*n))
            .ok_or(Error::ShapeOverflow { shape })?;
        if values.len() != expected {
            return Err(Error::UnexpectedNumberOfValues {
                expected,
                found: values.len(),
            });
        }

        debug!("New volume of shape {shape:?}");
        Ok(Self { shape, values })
    }

    /// Number of (matrices, rows, columns)
    pub fn shape(&self) -> [usize; 3] {
        self.shape
    }

    /// Number of matrices, i.e. planes along [Axis::X]
    pub fn n_matrices(&self) -> usize {
        self.shape[0]
    }

    /// Number of rows in every matrix
    pub fn n_rows(&self) -> usize {
        self.shape[1]
    }

    /// Number of columns in every row
    pub fn n_cols(&self) -> usize {
        self.shape[2]
    }

    /// Total number of values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a constructed volume, here for completeness
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All values in row-major order
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Number of planes along an axis
    ///
    /// ```rust
    /// # use voltools_volume::{Axis, Volume};
    /// let volume = Volume::new([2, 3, 4], vec![0.0; 24]).unwrap();
    /// assert_eq!(volume.extent(Axis::X), 2);
    /// assert_eq!(volume.extent(Axis::Y), 3);
    /// assert_eq!(volume.extent(Axis::Z), 4);
    /// ```
    pub fn extent(&self, axis: Axis) -> usize {
        self.shape[axis.index()]
    }

    /// Global index of the value at (matrix, row, column)
    ///
    /// Returns `None` if any index is out of bounds.
    pub fn index(&self, i: usize, j: usize, k: usize) -> Option<usize> {
        let [n, r, c] = self.shape;
        if i < n && j < r && k < c {
            Some((i * r + j) * c + k)
        } else {
            None
        }
    }

    /// Value at (matrix, row, column), if the indices are in bounds
    pub fn value(&self, i: usize, j: usize, k: usize) -> Option<f32> {
        self.index(i, j, k).map(|idx| self.values[idx])
    }

    /// Borrow the values of a single matrix in row-major order
    ///
    /// ```rust
    /// # use voltools_volume::Volume;
    /// let volume = Volume::new([2, 1, 2], vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(volume.matrix(1), Some([3.0, 4.0].as_slice()));
    /// assert_eq!(volume.matrix(2), None);
    /// ```
    pub fn matrix(&self, i: usize) -> Option<&[f32]> {
        let size = self.n_rows() * self.n_cols();
        self.values.chunks_exact(size).nth(i)
    }

    /// Extract a 2D plane at `index` along `axis`
    ///
    /// The plane is copied into a new [Slice] so that it may be used without
    /// holding on to the volume. The orientation of each plane is:
    ///
    /// | Axis      | Slice rows | Slice columns |
    /// | --------- | ---------- | ------------- |
    /// | [Axis::X] | rows       | columns       |
    /// | [Axis::Y] | matrices   | columns       |
    /// | [Axis::Z] | matrices   | rows          |
    pub fn slice(&self, axis: Axis, index: usize) -> Result<Slice> {
        let extent = self.extent(axis);
        if index >= extent {
            return Err(Error::IndexOutOfBounds {
                axis,
                index,
                extent,
            });
        }

        let [n, r, c] = self.shape;
        let (rows, cols, values) = match axis {
            Axis::X => {
                // contiguous, so just copy the whole matrix
                let start = index * r * c;
                (r, c, self.values[start..start + r * c].to_vec())
            }
            Axis::Y => {
                let mut values = Vec::with_capacity(n * c);
                for i in 0..n {
                    let start = (i * r + index) * c;
                    values.extend_from_slice(&self.values[start..start + c]);
                }
                (n, c, values)
            }
            Axis::Z => {
                let values = (0..n * r)
                    .map(|row| self.values[row * c + index])
                    .collect::<Vec<f32>>();
                (n, r, values)
            }
        };

        Ok(Slice::new(axis, index, rows, cols, values))
    }

    /// Global minimum and maximum of all values
    ///
    /// Any non-finite values (NaN, inf) make the range undefined and are an
    /// error case.
    pub fn range(&self) -> Result<Range> {
        let (min, max) = self.values.try_min_max()?;
        Ok(Range { min, max })
    }

    /// Global minimum of all values
    pub fn minimum(&self) -> Result<f32> {
        Ok(self.values.try_min()?)
    }

    /// Global maximum of all values
    pub fn maximum(&self) -> Result<f32> {
        Ok(self.values.try_max()?)
    }

    /// Number of values that are NaN or infinite
    pub fn count_non_finite(&self) -> usize {
        self.values.iter().filter(|v| !v.is_finite()).count()
    }
}

impl std::str::FromStr for Volume {
    type Err = Error;

    /// Parse a volume from the full text of a volume file
    fn from_str(s: &str) -> Result<Self> {
        crate::reader::read_volume_from(s.as_bytes())
    }
}

impl std::fmt::Display for Volume {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let [n, r, c] = self.shape;
        let range = match self.range() {
            Ok(range) => range.to_string(),
            Err(_) => f!("undefined ({} non-finite values)", self.count_non_finite()),
        };
        writeln!(f, "Volume shape: {n} x {r} x {c} ({} values)", self.len())?;
        write!(f, "Value range : {range}")
    }
}
