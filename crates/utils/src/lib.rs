//! Common utility for extended `std` types
//!
//! These are left public for convenience.
//!
//! For example, safe minimum/maximum of float slices or prettier formatting
//! for scientific numbers are useful everywhere.

// Alias for the format! macro
pub use std::format as f;

// Modules
mod error;
mod slice_ext;
mod value_ext;

// Flatten
pub use error::{Error, Result};
pub use slice_ext::SliceExt;
pub use value_ext::ValueExt;
