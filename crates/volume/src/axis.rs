//! Module for the axes of a volume

// crate modules
use crate::error::Error;

// external crates
use serde::{Deserialize, Serialize};

/// One of the three axes of a [Volume](crate::Volume)
///
/// Values are stacked as a sequence of 2D matrices, so the axes follow the
/// order of the file:
///
/// | Axis      | Index | Runs over        |
/// | --------- | ----- | ---------------- |
/// | [Axis::X] | 0     | matrices         |
/// | [Axis::Y] | 1     | rows of a matrix |
/// | [Axis::Z] | 2     | columns of a row |
///
/// Conversions are implemented from both the index and a name:
///
/// ```rust
/// # use voltools_volume::Axis;
/// assert_eq!(Axis::try_from(1).unwrap(), Axis::Y);
/// assert_eq!("z".parse::<Axis>().unwrap(), Axis::Z);
/// assert_eq!("0".parse::<Axis>().unwrap(), Axis::X);
/// assert!(Axis::try_from(3).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Axis {
    /// Axis 0, the matrix index
    X,
    /// Axis 1, the row index
    Y,
    /// Axis 2, the column index
    Z,
}

impl Axis {
    /// All axes in index order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Position of the axis in the `(matrices, rows, columns)` shape
    pub fn index(&self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl TryFrom<usize> for Axis {
    type Error = Error;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Axis::X),
            1 => Ok(Axis::Y),
            2 => Ok(Axis::Z),
            _ => Err(Error::FailedToInferAxis(index.to_string())),
        }
    }
}

impl std::str::FromStr for Axis {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "x" | "0" => Ok(Axis::X),
            "y" | "1" => Ok(Axis::Y),
            "z" | "2" => Ok(Axis::Z),
            _ => Err(Error::FailedToInferAxis(s.to_string())),
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        };
        write!(f, "{name}")
    }
}
