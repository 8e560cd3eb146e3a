//! Parsers and logic for reading volume files
//!
//! All functions are re-exported to the crate root for easy access.
//!
//! # Quickstart
//!
//! The simplest way to read a file is the convenience function:
//!
//! ```rust, no_run
//! # use voltools_volume::{read_volume, Volume};
//! let volume: Volume = read_volume("/path/to/GRF_sinxds.out").unwrap();
//! ```
//!
//! Anything that implements [BufRead] may also be used directly, which is
//! useful for data that does not live in a file.
//!
//! ```rust
//! # use voltools_volume::read_volume_from;
//! let text = "header\n\n\n\n\n\n1\n\n\n\n\n1\n\n2\n\n\n1.0 2.0\n";
//! let volume = read_volume_from(text.as_bytes()).unwrap();
//! assert_eq!(volume.shape(), [1, 1, 2]);
//! ```
//!
//! # File layout
//!
//! Volume files are line oriented with fixed length preambles that carry no
//! numerical data and are skipped.
//!
//! ```text
//! <6 ignored lines>
//! <integer: number of matrices>
//! repeated for every matrix:
//!   <4 ignored lines>
//!   <integer: number of rows>
//!   <1 ignored line>
//!   <integer: number of columns>
//!   <2 ignored lines>
//!   <one line per row, each with whitespace separated values>
//! ```
//!
//! Every matrix becomes one plane along [Axis::X](crate::Axis::X) of the
//! [Volume].
//!
//! # Failures
//!
//! Parsing is all or nothing. The first problem found is returned as an
//! [Error](crate::Error) and no partial volume is ever produced:
//!
//! - a count that is not a non-negative integer
//! - a value that is not a number
//! - the input ending before the layout says it should
//! - a row with the wrong number of values
//! - a matrix with a different shape to the first
//! - no matrices, or matrices with no rows or columns
//!
//! Anything after the last row of the last matrix is never read.

// reader modules
mod parsers;

// standard library
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

// crate modules
use crate::error::{Error, Result};
use crate::Volume;

// external crates
use log::{debug, trace, warn};

/// Number of lines before the matrix count
const FILE_PREAMBLE: usize = 6;
/// Number of lines before the row count of each matrix
const MATRIX_PREAMBLE: usize = 4;
/// Number of lines between the row and column counts
const ROWS_TO_COLS: usize = 1;
/// Number of lines between the column count and the first row
const COLS_TO_DATA: usize = 2;

/// Read a volume from the file at `path`
///
/// The file is closed as soon as this returns, whether parsing succeeded or
/// not.
///
/// ```rust, no_run
/// # use voltools_volume::read_volume;
/// let volume = read_volume("path/to/file.out").unwrap();
/// println!("{volume}");
/// ```
pub fn read_volume<P: AsRef<Path>>(path: P) -> Result<Volume> {
    let file = File::open(path)?;
    VolumeReader::new(BufReader::new(file)).read()
}

/// Read a volume from any buffered input stream
pub fn read_volume_from<R: BufRead>(reader: R) -> Result<Volume> {
    VolumeReader::new(reader).read()
}

/// Line-by-line reader for volume files
///
/// Only a single line is held in memory at any time, and the line number is
/// tracked so that any failure can point to the offending line.
///
/// The convenience functions [read_volume()] and [read_volume_from()] are the
/// preferred API, but the reader is public for completeness.
///
/// ```rust
/// # use voltools_volume::reader::VolumeReader;
/// let text = "\n\n\n\n\n\n1\n\n\n\n\n2\n\n1\n\n\n5.0\n6.0\n";
/// let volume = VolumeReader::new(text.as_bytes()).read().unwrap();
/// assert_eq!(volume.values(), &[5.0, 6.0]);
/// ```
#[derive(Debug)]
pub struct VolumeReader<R: BufRead> {
    /// Line iterator over the input
    lines: Lines<R>,
    /// Most recent line read
    cached_line: String,
    /// Number of lines read so far, i.e. 1-based number of the cached line
    line_number: usize,
    /// Shape of the first matrix, all others must match
    matrix_shape: Option<[usize; 2]>,
    /// Values collected so far in row-major order
    values: Vec<f32>,
}

// ! ------------------------------------------------------------------------
// !                                Public API
// ! ------------------------------------------------------------------------

impl<R: BufRead> VolumeReader<R> {
    /// Wrap a buffered reader, nothing is read until [read()](Self::read)
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            cached_line: String::new(),
            line_number: 0,
            matrix_shape: None,
            values: Vec::new(),
        }
    }

    /// Parse the full volume from the input
    ///
    /// Consumes the reader, so the underlying input is dropped on every exit
    /// path.
    pub fn read(mut self) -> Result<Volume> {
        let n_matrices = self.parse_file_header()?;

        if n_matrices == 0 {
            return Err(Error::EmptyVolume { shape: [0, 0, 0] });
        }

        for matrix in 0..n_matrices {
            self.parse_matrix(matrix, n_matrices)?;
        }

        // at least one matrix was read so the shape is always known here
        let [rows, cols] = self.matrix_shape.unwrap_or_default();
        let volume = Volume::new([n_matrices, rows, cols], self.values)?;

        let non_finite = volume.count_non_finite();
        if non_finite > 0 {
            warn!("Volume contains {non_finite} NaN or infinite values");
        }

        debug!(
            "Read {} values over {} lines",
            volume.len(),
            self.line_number
        );
        Ok(volume)
    }
}

// ! ------------------------------------------------------------------------
// !                              Internal API
// ! ------------------------------------------------------------------------

impl<R: BufRead> VolumeReader<R> {
    /// Advances to the next line, saving it to the cache and returning a ref
    fn next_line(&mut self, expected: &'static str) -> Result<&str> {
        self.cached_line = match self.lines.next() {
            Some(line) => line?,
            None => {
                return Err(Error::EndOfInput {
                    line_number: self.line_number,
                    expected,
                })
            }
        };
        self.line_number += 1;
        Ok(self.cached_line.as_str())
    }

    /// Skip over a fixed number of lines with no useful content
    fn skip_lines(&mut self, n: usize, expected: &'static str) -> Result<()> {
        for _ in 0..n {
            self.next_line(expected)?;
        }
        Ok(())
    }

    /// Read the next line as a non-negative integer count
    fn parse_count(&mut self, expected: &'static str) -> Result<usize> {
        self.next_line(expected)?;
        let (_, count) = parsers::count(&self.cached_line).map_err(|_| Error::IntegerFormat {
            line_number: self.line_number,
            line: self.cached_line.clone(),
        })?;
        Ok(count)
    }

    /// Skip the file preamble and get the number of matrices
    fn parse_file_header(&mut self) -> Result<usize> {
        self.skip_lines(FILE_PREAMBLE, "file header")?;
        let n_matrices = self.parse_count("number of matrices")?;
        trace!("Found {n_matrices} matrices on line {}", self.line_number);
        Ok(n_matrices)
    }

    /// Read a full matrix block, appending the values
    fn parse_matrix(&mut self, matrix: usize, n_matrices: usize) -> Result<()> {
        self.skip_lines(MATRIX_PREAMBLE, "matrix header")?;
        let rows = self.parse_count("number of rows")?;
        self.skip_lines(ROWS_TO_COLS, "matrix header")?;
        let cols = self.parse_count("number of columns")?;
        self.skip_lines(COLS_TO_DATA, "matrix header")?;

        self.check_matrix_shape(matrix, n_matrices, [rows, cols])?;
        trace!("Matrix {matrix} of shape [{rows}, {cols}]");

        for row in 0..rows {
            self.parse_row(matrix, row, cols)?;
        }

        Ok(())
    }

    /// Make sure every matrix matches the first, and none are empty
    fn check_matrix_shape(
        &mut self,
        matrix: usize,
        n_matrices: usize,
        found: [usize; 2],
    ) -> Result<()> {
        match self.matrix_shape {
            None => {
                if found.contains(&0) {
                    return Err(Error::EmptyVolume {
                        shape: [n_matrices, found[0], found[1]],
                    });
                }
                self.matrix_shape = Some(found);
                Ok(())
            }
            Some(expected) if expected != found => Err(Error::InconsistentMatrixShape {
                matrix,
                expected,
                found,
            }),
            Some(_) => Ok(()),
        }
    }

    /// Read a single row of values, which must have exactly `cols` entries
    fn parse_row(&mut self, matrix: usize, row: usize, cols: usize) -> Result<()> {
        self.next_line("row values")?;
        let (_, values) =
            parsers::vector_of_f32(&self.cached_line).map_err(|_| Error::FloatFormat {
                line_number: self.line_number,
                line: self.cached_line.clone(),
            })?;

        if values.len() != cols {
            return Err(Error::UnexpectedRowLength {
                matrix,
                row,
                line_number: self.line_number,
                expected: cols,
                found: values.len(),
            });
        }

        self.values.extend(values);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Full text of a volume file from the matrix count and matrix blocks
    fn volume_text(count: &str, blocks: &[String]) -> String {
        let mut text = "H1\nH2\nH3\nH4\nH5\nH6\n".to_string();
        text.push_str(count);
        text.push('\n');
        for block in blocks {
            text.push_str(block);
        }
        text
    }

    /// One matrix block with the given row/column counts and row lines
    fn block(rows: usize, cols: usize, lines: &[&str]) -> String {
        let mut text = format!("\nMatrix\nPlane\nRows\n{rows}\nColumns\n{cols}\nValues\n--\n");
        for line in lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }

    #[test]
    fn concrete_layout() {
        let rows = ["1.0 2.0", "3.0 4.0"];
        let text = volume_text("2", &[block(2, 2, &rows), block(2, 2, &rows)]);
        let volume = read_volume_from(text.as_bytes()).unwrap();
        assert_eq!(volume.shape(), [2, 2, 2]);
        assert_eq!(volume.values(), &[1.0, 2.0, 3.0, 4.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn trailing_content_ignored() {
        let mut text = volume_text("1", &[block(1, 2, &["1.0 2.0"])]);
        text.push_str("\n\nnot part of the volume\n");
        let volume = text.parse::<Volume>().unwrap();
        assert_eq!(volume.values(), &[1.0, 2.0]);
    }

    #[test]
    fn end_of_input_in_rows() {
        let text = volume_text("1", &[block(3, 2, &["1.0 2.0", "3.0 4.0"])]);
        match read_volume_from(text.as_bytes()) {
            Err(Error::EndOfInput {
                line_number,
                expected,
            }) => {
                assert_eq!(line_number, 18);
                assert_eq!(expected, "row values");
            }
            other => panic!("expected end of input, found {other:?}"),
        }
    }

    #[test]
    fn end_of_input_before_count() {
        let result = read_volume_from("H1\nH2\nH3\nH4\nH5\nH6\n".as_bytes());
        assert!(matches!(
            result,
            Err(Error::EndOfInput {
                line_number: 6,
                expected: "number of matrices"
            })
        ));
    }

    #[test]
    fn negative_matrix_count() {
        let text = volume_text("-1", &[]);
        assert!(matches!(
            read_volume_from(text.as_bytes()),
            Err(Error::IntegerFormat { line_number: 7, .. })
        ));
    }

    #[test]
    fn padded_counts() {
        let text = volume_text("  +1 ", &[block(1, 1, &["  42  "])]);
        let volume = read_volume_from(text.as_bytes()).unwrap();
        assert_eq!(volume.values(), &[42.0]);
    }
}
