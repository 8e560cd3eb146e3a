//! Result and Error types for voltools-volume

use crate::axis::Axis;

/// Type alias for Result<T, volume::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `voltools-volume` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    #[error("vtkio error")]
    VtkioError(#[from] vtkio::Error),

    #[error("failed serde JSON operation")]
    JSONError(#[from] serde_json::Error),

    #[error("failed csv operation")]
    CSVError(#[from] csv::Error),

    #[error("failed value range operation: {0}")]
    UtilsError(#[from] voltools_utils::Error),

    #[error("expected an integer count on line {line_number}, found \"{line}\"")]
    IntegerFormat { line_number: usize, line: String },

    #[error("expected whitespace separated numbers on line {line_number}, found \"{line}\"")]
    FloatFormat { line_number: usize, line: String },

    #[error("unexpected end of input after line {line_number} (expected {expected})")]
    EndOfInput {
        line_number: usize,
        expected: &'static str,
    },

    #[error(
        "inconsistent row length in matrix {matrix} row {row} on line {line_number} (expected {expected}, found {found})"
    )]
    UnexpectedRowLength {
        matrix: usize,
        row: usize,
        line_number: usize,
        expected: usize,
        found: usize,
    },

    #[error("inconsistent shape of matrix {matrix} (expected {expected:?}, found {found:?})")]
    InconsistentMatrixShape {
        matrix: usize,
        expected: [usize; 2],
        found: [usize; 2],
    },

    #[error("volume has no values (shape {shape:?})")]
    EmptyVolume { shape: [usize; 3] },

    #[error("volume shape {shape:?} is too large to index")]
    ShapeOverflow { shape: [usize; 3] },

    #[error("unexpected number of values (expected {expected}, found {found})")]
    UnexpectedNumberOfValues { expected: usize, found: usize },

    #[error("index {index} out of bounds for axis {axis} with {extent} planes")]
    IndexOutOfBounds {
        axis: Axis,
        index: usize,
        extent: usize,
    },

    #[error("failed to infer axis from \"{0}\"")]
    FailedToInferAxis(String),
}
