//! Volume file parsing, slicing and conversion
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod axis;
mod error;
mod slice;
mod volume;
mod writer;

pub mod reader;
pub mod vtk;

// inline important the volume-related modules for a nice public API
#[doc(inline)]
pub use reader::{read_volume, read_volume_from};

#[doc(inline)]
pub use volume::{Range, Volume};

#[doc(inline)]
pub use axis::Axis;

#[doc(inline)]
pub use slice::Slice;

#[doc(inline)]
pub use writer::{write_json, write_slice_csv, write_volume, write_volume_to};

#[doc(inline)]
pub use vtk::{write_vtk, VolumeToVtk, VtkFormat};

#[doc(inline)]
pub use error::{Error, Result};
