// internal modules
use crate::vtk::VolumeToVtk;

// extrenal crates
use log::warn;
use vtkio::model::ByteOrder;

/// Builder implementation for VolumeToVtk configuration
///
/// The fields of [VolumeToVtk] are left public for direct use but the module
/// also implements a builder.
///
/// To get the final [VolumeToVtk] from the builder, call
/// [build()](VolumeToVtkBuilder::build).
///
/// ```rust, no_run
/// # use voltools_volume::vtk::{write_vtk, VolumeToVtk, VtkFormat};
/// # use voltools_volume::read_volume;
/// # use vtkio::model::ByteOrder;
/// # let volume = read_volume("./data/simple.out").unwrap();
/// // Make a new builder, change some values
/// let converter = VolumeToVtk::builder()
///     .name("temperature")
///     .spacing([0.5, 0.5, 2.0])
///     .origin([-1.0, -1.0, 0.0])
///     .byte_order(ByteOrder::LittleEndian)
///     .build();
///
/// // Convert the volume using the parameters set
/// let vtk = converter.convert(&volume);
///
/// // Write to "output.vtk" using the old ASCII text format
/// write_vtk(vtk, "./output.vtk", VtkFormat::LegacyAscii).unwrap();
/// ```
#[derive(Debug)]
pub struct VolumeToVtkBuilder {
    /// Name of the cell data array
    name: String,
    /// Coordinates of the first grid point
    origin: [f64; 3],
    /// Width of a voxel along each axis
    spacing: [f64; 3],
    /// Byte ordering as big or little endian
    byte_order: ByteOrder,
}

impl VolumeToVtkBuilder {
    /// Create a new instance of the builder with default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the [VolumeToVtk] type
    pub fn build(self) -> VolumeToVtk {
        VolumeToVtk {
            name: self.name,
            origin: self.origin,
            spacing: self.spacing,
            byte_order: self.byte_order,
        }
    }

    /// Name of the cell data array shown in plotting software
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Coordinates of the lowest corner of the grid
    pub fn origin(mut self, origin: [f64; 3]) -> Self {
        self.origin = origin;
        self
    }

    /// Width of a voxel along each axis
    ///
    /// Every value must be finite and positive, otherwise the spacing is left
    /// unchanged.
    pub fn spacing(mut self, spacing: [f64; 3]) -> Self {
        if spacing.iter().all(|s| s.is_finite() && *s > 0.0) {
            self.spacing = spacing;
        } else {
            warn!("Warning: Ignoring invalid voxel spacing {spacing:?}");
        }
        self
    }

    /// Set the byte ordering
    ///
    /// Note that Visit being Visit only reads big endian, even though most
    /// systems are little endian. The default is big endian for convenience.
    pub fn byte_order(mut self, order: ByteOrder) -> Self {
        self.byte_order = order;
        self
    }
}

impl Default for VolumeToVtkBuilder {
    fn default() -> Self {
        Self {
            name: "values".to_string(),
            origin: [0.0; 3],
            spacing: [1.0; 3],
            byte_order: ByteOrder::BigEndian,
        }
    }
}
