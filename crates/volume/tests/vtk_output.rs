//! Integration tests for writing VTK files

use voltools_volume::{read_volume, write_vtk, Volume, VolumeToVtk, VtkFormat};
use rstest::{fixture, rstest};
use std::path::{Path, PathBuf};
use vtkio::model::ByteOrder;

#[fixture]
fn volume() -> Volume {
    read_volume("./data/positions.out").unwrap()
}

/// Unique output path in the system temp directory
fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("voltools_vtk_{}_{name}", std::process::id()))
}

/// Read a written file and clean up after it
fn take_file(path: &Path) -> Vec<u8> {
    let bytes = std::fs::read(path).unwrap();
    std::fs::remove_file(path).unwrap();
    bytes
}

#[rstest]
#[case(VtkFormat::Xml, "xml.vtk", "xml.vtr", "RectilinearGrid")] // case 1
#[case(VtkFormat::LegacyAscii, "ascii.vtk", "ascii.vtk", "ASCII")] // case 2
#[case(VtkFormat::LegacyBinary, "binary.vtk", "binary.vtk", "BINARY")] // case 3
fn output_formats(
    volume: Volume,
    #[case] format: VtkFormat,
    #[case] requested: &str,
    #[case] written: &str,
    #[case] marker: &str,
) {
    let requested = temp_path(requested);
    let written = temp_path(written);

    let vtk = VolumeToVtk::new().convert(&volume);
    write_vtk(vtk, &requested, format).unwrap();

    assert!(written.exists(), "missing {}", written.display());
    if requested != written {
        assert!(!requested.exists());
    }

    let bytes = take_file(&written);
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains(marker));
}

#[rstest]
fn xml_extension_kept(volume: Volume) {
    let path = temp_path("kept.vtr");
    let vtk = VolumeToVtk::new().convert(&volume);
    write_vtk(vtk, &path, VtkFormat::Xml).unwrap();
    let bytes = take_file(&path);
    assert!(contains(&bytes, b"<VTKFile"));
}

#[rstest]
fn legacy_binary_byte_order(volume: Volume) {
    let big = temp_path("big.vtk");
    let little = temp_path("little.vtk");

    let vtk = VolumeToVtk::builder()
        .byte_order(ByteOrder::BigEndian)
        .build()
        .convert(&volume);
    write_vtk(vtk, &big, VtkFormat::LegacyBinary).unwrap();

    let vtk = VolumeToVtk::builder()
        .byte_order(ByteOrder::LittleEndian)
        .build()
        .convert(&volume);
    write_vtk(vtk, &little, VtkFormat::LegacyBinary).unwrap();

    let big = take_file(&big);
    let little = take_file(&little);

    // same layout, swapped bytes in the binary sections
    assert_eq!(big.len(), little.len());
    assert_ne!(big, little);

    // 102.0_f32 is the value at (1, 0, 2) and appears in the cell data
    let value = 102.0_f32;
    assert!(contains(&big, &value.to_be_bytes()));
    assert!(contains(&little, &value.to_le_bytes()));
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}
