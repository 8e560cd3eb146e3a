// standard library
use std::ops::RangeInclusive;

// crate modules
use crate::Volume;
use voltools_utils::f;

// internal modules
use crate::vtk::VolumeToVtkBuilder;

// extrenal crates
use vtkio::model::{
    Attribute, Attributes, ByteOrder, Coordinates, DataArray, DataSet, ElementType, Extent,
    IOBuffer, RangeExtent, RectilinearGridPiece, Version, Vtk,
};

/// Convert volumes to vtk formats for plotting
///
/// The fields remain public for direct use, but for convenience and style
/// preference a builder pattern is also implemented and recommended.
///
/// ## Grid geometry
///
/// By default every voxel is a unit cube with the grid starting at the origin.
/// Both may be changed to give the data physical dimensions.
///
/// ```rust
/// # use voltools_volume::vtk::VolumeToVtk;
/// // Voxels 2 units wide in every direction, centered on zero
/// let converter = VolumeToVtk::builder()
///     .spacing([2.0, 2.0, 2.0])
///     .origin([-10.0, -10.0, -10.0])
///     .build();
/// ```
///
/// ## Vtk formatting
///
/// The byte ordering is important for binary file compatability with plotting
/// software. ParaView does not care, but something like Visit only likes big
/// endian. This is the default for convenience but is completely up to the
/// user.
///
/// ```rust
/// # use voltools_volume::vtk::VolumeToVtk;
/// # use vtkio::model::ByteOrder;
/// // Change the byte ordering to little endian
/// let converter = VolumeToVtk::builder()
///     .byte_order(ByteOrder::LittleEndian)
///     .build();
/// ```
#[derive(Debug, PartialEq)]
pub struct VolumeToVtk {
    /// Name of the cell data array
    pub name: String,
    /// Coordinates of the first grid point
    pub origin: [f64; 3],
    /// Width of a voxel along each axis
    pub spacing: [f64; 3],
    /// Byte ordering as big or little endian
    pub byte_order: ByteOrder,
}

// Public API
impl VolumeToVtk {
    /// Start with the default configuration
    pub fn new() -> VolumeToVtk {
        Default::default()
    }

    /// Get an instance of the [VolumeToVtkBuilder]
    pub fn builder() -> VolumeToVtkBuilder {
        VolumeToVtkBuilder::default()
    }

    /// Convert a [Volume] to vtkio::Vtk object
    ///
    /// Once the configuration is set through either the builder or changing the
    /// fields directly, convert any [Volume] into a Vtk ready for writing or
    /// futher processing.
    pub fn convert(&self, volume: &Volume) -> Vtk {
        let [n, r, c] = volume.shape();
        Vtk {
            version: Version::Auto,
            title: f!("Volume {n} x {r} x {c}"),
            byte_order: self.byte_order,
            file_path: None,
            data: DataSet::inline(RectilinearGridPiece {
                extent: Self::extent(volume),
                coords: self.coordinates(volume),
                data: self.collect_attributes(volume),
            }),
        }
    }
}

impl Default for VolumeToVtk {
    fn default() -> Self {
        VolumeToVtkBuilder::default().build()
    }
}

/// Implementations for the rectilinear grid
impl VolumeToVtk {
    /// Defines number of voxels in each extent for the rectilinear grid
    fn extent(volume: &Volume) -> Extent {
        let [n, r, c] = volume.shape();
        let range_ext: RangeExtent = [
            RangeInclusive::new(0, n as i32),
            RangeInclusive::new(0, r as i32),
            RangeInclusive::new(0, c as i32),
        ];
        Extent::Ranges(range_ext)
    }

    /// Defines coordinates of every grid point from the origin and spacing
    fn coordinates(&self, volume: &Volume) -> Coordinates {
        let bounds = |axis: usize, count: usize| {
            (0..=count)
                .map(|i| self.origin[axis] + i as f64 * self.spacing[axis])
                .collect::<Vec<f64>>()
        };

        let [n, r, c] = volume.shape();
        Coordinates {
            x: IOBuffer::F64(bounds(0, n)),
            y: IOBuffer::F64(bounds(1, r)),
            z: IOBuffer::F64(bounds(2, c)),
        }
    }

    /// Collect the values as cell data
    fn collect_attributes(&self, volume: &Volume) -> Attributes {
        let mut attributes: Attributes = Attributes::new();

        let cell_data = DataArray {
            name: self.name.clone(),
            elem: ElementType::Scalars {
                num_comp: 1,
                lookup_table: None,
            },
            data: IOBuffer::F32(Self::sort_by_cell_index(volume)),
        };
        attributes.cell.push(Attribute::DataArray(cell_data));

        attributes
    }

    /// Reorder values for the rectilinear grid cell ordering
    ///
    /// Volumes vary fastest along the last axis but VTK cells vary fastest
    /// along x, so the order is reversed.
    pub(crate) fn sort_by_cell_index(volume: &Volume) -> Vec<f32> {
        let [n, r, c] = volume.shape();
        let values = volume.values();

        let mut cells = Vec::with_capacity(values.len());
        for k in 0..c {
            for j in 0..r {
                for i in 0..n {
                    cells.push(values[(i * r + j) * c + k]);
                }
            }
        }
        cells
    }
}
