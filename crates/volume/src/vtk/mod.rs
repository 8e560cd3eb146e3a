//! Convert volumes to VTK formats for plotting
//!
//! A [Volume](crate::Volume) is written as a rectilinear grid with one cell per
//! value. This is the simplest way to get a 3D view of the data in ParaView,
//! VisIt, or anything else that reads VTK files.
//!
//! ```rust, no_run
//! # use voltools_volume::read_volume;
//! # use voltools_volume::vtk::{write_vtk, VolumeToVtk, VtkFormat};
//! let volume = read_volume("./data/simple.out").unwrap();
//!
//! // Convert with the default settings
//! let vtk = VolumeToVtk::new().convert(&volume);
//!
//! // Write to an XML rectilinear grid file
//! write_vtk(vtk, "./volume.vtr", VtkFormat::Xml).unwrap();
//! ```
//!
//! The axes of the volume map directly to the VTK grid:
//!
//! | Volume axis          | VTK axis |
//! | -------------------- | -------- |
//! | [X](crate::Axis::X), matrices | x |
//! | [Y](crate::Axis::Y), rows     | y |
//! | [Z](crate::Axis::Z), columns  | z |

mod builder;
mod convert;

#[doc(inline)]
pub use builder::VolumeToVtkBuilder;

#[doc(inline)]
pub use convert::VolumeToVtk;

// standard library
use std::path::Path;

// crate modules
use crate::error::Result;

// external crates
use log::{debug, warn};
use vtkio::model::ByteOrder;
use vtkio::model::Vtk;

/// Supported VTK output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VtkFormat {
    /// XML rectilinear grid, always written with a `.vtr` extension
    Xml,
    /// Legacy ASCII text format
    LegacyAscii,
    /// Legacy binary format, using the byte order of the [Vtk]
    LegacyBinary,
}

impl std::str::FromStr for VtkFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "xml" => Ok(VtkFormat::Xml),
            "legacy-ascii" | "ascii" => Ok(VtkFormat::LegacyAscii),
            "legacy-binary" | "binary" => Ok(VtkFormat::LegacyBinary),
            _ => Err(format!("unknown vtk format \"{s}\"")),
        }
    }
}

/// Write a [Vtk] to `path` in one of the supported formats
///
/// XML files are required to have a `.vtr` extension to be recognised, so the
/// extension is replaced if needed.
pub fn write_vtk<P: AsRef<Path>>(vtk: Vtk, path: P, format: VtkFormat) -> Result<()> {
    let path = path.as_ref();
    debug!("Writing {format:?} vtk to {}", path.display());

    match format {
        VtkFormat::Xml => {
            let vtr = path.with_extension("vtr");
            if vtr.as_path() != path {
                warn!("Xml output written to {}", vtr.display());
            }
            vtk.export(vtr)?
        }
        VtkFormat::LegacyAscii => vtk.export_ascii(path)?,
        VtkFormat::LegacyBinary => {
            if matches!(vtk.byte_order, ByteOrder::BigEndian) {
                vtk.export_be(path)?
            } else {
                vtk.export_le(path)?
            }
        }
    }

    Ok(())
}
