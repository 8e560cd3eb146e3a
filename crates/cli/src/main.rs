//! Command line tool for inspecting and converting volume files
//!
//! Loads a volume, reports the shape and value range, and optionally extracts
//! slices, single values, and VTK/JSON/CSV outputs.

// standard library
use std::path::{Path, PathBuf};
use std::process::ExitCode;

// voltools modules
use voltools_utils::f;
use voltools_volume::vtk::{write_vtk, VolumeToVtk, VtkFormat};
use voltools_volume::{read_volume, write_json, write_slice_csv, Axis, Error, Result, Volume};

// external crates
use clap::{ArgAction, Parser};
use log::{error, info, warn};

/// Default file name searched for in the `data` directory
const DEFAULT_FILE: &str = "GRF_sinxds.out";

/// Inspect and convert volume files
///
/// A volume file is a sequence of 2D matrices that are stacked into a 3D
/// array of shape (matrices, rows, columns). Planes may be taken along any of
/// the three axes and the full volume converted to VTK for 3D visualisation.
#[derive(Parser, Debug)]
#[command(name = "volview", version, about, long_about)]
struct Cli {
    /// Path to the volume file [default: <exe dir>/data/GRF_sinxds.out]
    path: Option<PathBuf>,

    /// Extract the plane at INDEX along AXIS (x/y/z or 0/1/2)
    #[arg(short, long, value_name = "AXIS:INDEX", value_parser = parse_plane)]
    slice: Vec<(Axis, usize)>,

    /// Print the value at a single (matrix, row, column)
    #[arg(long, value_name = "I,J,K", value_delimiter = ',', num_args = 3)]
    value: Option<Vec<usize>>,

    /// Write every requested slice to a CSV file in DIR
    #[arg(long, value_name = "DIR")]
    csv: Option<PathBuf>,

    /// Write the volume to a VTK file
    #[arg(long, value_name = "FILE")]
    vtk: Option<PathBuf>,

    /// Output format for VTK files (xml, legacy-ascii, legacy-binary)
    #[arg(long, value_name = "FORMAT", default_value = "xml")]
    format: VtkFormat,

    /// Width of a voxel along each axis for VTK files
    #[arg(long, value_names = ["DX", "DY", "DZ"], num_args = 3)]
    spacing: Option<Vec<f64>>,

    /// Write the volume to a JSON file
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Verbose logging (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Supress all log output (overrules --verbose)
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Error: {e}");
            if let Some(source) = std::error::Error::source(&e) {
                error!("  caused by: {source}");
            }
            ExitCode::FAILURE
        }
    }
}

/// Everything after argument parsing, any failure is fatal
fn run(cli: &Cli) -> Result<()> {
    let path = match &cli.path {
        Some(path) => path.clone(),
        None => default_path()?,
    };

    info!("Looking for {}", path.display());
    if !path.exists() {
        warn!("No file found at {}", path.display());
    }

    let volume = read_volume(&path)?;
    println!("{volume}");

    for (axis, index) in &cli.slice {
        let slice = volume.slice(*axis, *index)?;
        println!("{slice}");

        if let Some(dir) = &cli.csv {
            let output = dir.join(f!("slice_{}_{index}.csv", axis.to_string().to_lowercase()));
            write_slice_csv(&slice, &output)?;
            info!("Slice written to {}", output.display());
        }
    }

    if let Some(ijk) = &cli.value {
        let (i, j, k) = (ijk[0], ijk[1], ijk[2]);
        let value = value_at(&volume, [i, j, k])?;
        println!("Value at [{i}, {j}, {k}]: {value}");
    }

    if let Some(output) = &cli.vtk {
        write_volume_vtk(cli, &volume, output)?;
    }

    if let Some(output) = &cli.json {
        write_json(&volume, output)?;
        info!("JSON written to {}", output.display());
    }

    Ok(())
}

/// Value at a single position, like a hover readout
///
/// The first index outside of the volume is reported as the error.
fn value_at(volume: &Volume, [i, j, k]: [usize; 3]) -> Result<f32> {
    if let Some(v) = volume.value(i, j, k) {
        return Ok(v);
    }

    let (axis, index) = Axis::ALL
        .into_iter()
        .zip([i, j, k])
        .find(|(axis, index)| *index >= volume.extent(*axis))
        .unwrap_or((Axis::X, i));

    Err(Error::IndexOutOfBounds {
        axis,
        index,
        extent: volume.extent(axis),
    })
}

/// Convert to a rectilinear grid and write in the requested format
fn write_volume_vtk(cli: &Cli, volume: &Volume, output: &Path) -> Result<()> {
    let mut builder = VolumeToVtk::builder();
    if let Some(spacing) = &cli.spacing {
        builder = builder.spacing([spacing[0], spacing[1], spacing[2]]);
    }

    let vtk = builder.build().convert(volume);
    write_vtk(vtk, output, cli.format)?;
    info!("VTK written to {}", output.display());
    Ok(())
}

/// The `data` directory next to the executable
fn default_path() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let dir = exe.parent().unwrap_or_else(|| Path::new("."));
    Ok(dir.join("data").join(DEFAULT_FILE))
}

/// Parse `AXIS:INDEX` pairs such as `x:10` or `2:0`
fn parse_plane(s: &str) -> std::result::Result<(Axis, usize), String> {
    let (axis, index) = s
        .split_once(':')
        .ok_or_else(|| f!("expected AXIS:INDEX, found \"{s}\""))?;

    let axis = axis.parse::<Axis>().map_err(|e| e.to_string())?;
    let index = index
        .trim()
        .parse::<usize>()
        .map_err(|_| f!("invalid plane index \"{index}\""))?;

    Ok((axis, index))
}

/// Sets up logging at runtime to allow for multiple verbosity levels
fn init_logging(cli: &Cli) {
    let result = stderrlog::new()
        .module(module_path!())
        .module("voltools_volume")
        .quiet(cli.quiet)
        .verbosity(cli.verbose as usize + 2)
        .show_level(false)
        .color(stderrlog::ColorChoice::Auto)
        .timestamp(stderrlog::Timestamp::Off)
        .init();

    if let Err(e) = result {
        eprintln!("Unable to initialise logging: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plane_arguments() {
        assert_eq!(parse_plane("x:3"), Ok((Axis::X, 3)));
        assert_eq!(parse_plane("Y:0"), Ok((Axis::Y, 0)));
        assert_eq!(parse_plane("2:15"), Ok((Axis::Z, 15)));
        assert!(parse_plane("x3").is_err());
        assert!(parse_plane("w:3").is_err());
        assert!(parse_plane("x:-1").is_err());
    }

    #[test]
    fn cli_arguments() {
        let cli = Cli::parse_from([
            "volview",
            "volume.out",
            "--slice",
            "x:1",
            "-s",
            "z:0",
            "--value",
            "1,2,3",
            "--spacing",
            "0.5",
            "1",
            "2",
            "--format",
            "legacy-ascii",
            "-vv",
        ]);
        assert_eq!(cli.path, Some(PathBuf::from("volume.out")));
        assert_eq!(cli.slice, vec![(Axis::X, 1), (Axis::Z, 0)]);
        assert_eq!(cli.value, Some(vec![1, 2, 3]));
        assert_eq!(cli.spacing, Some(vec![0.5, 1.0, 2.0]));
        assert_eq!(cli.format, VtkFormat::LegacyAscii);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn value_readout() {
        let values = (0..24).map(|v| v as f32).collect();
        let volume = Volume::new([2, 3, 4], values).unwrap();
        assert_eq!(value_at(&volume, [1, 2, 3]).unwrap(), 23.0);
        assert_eq!(value_at(&volume, [0, 1, 2]).unwrap(), 6.0);
    }

    #[test]
    fn value_readout_out_of_bounds() {
        let volume = Volume::new([2, 3, 4], vec![0.0; 24]).unwrap();
        assert!(matches!(
            value_at(&volume, [0, 3, 0]),
            Err(Error::IndexOutOfBounds {
                axis: Axis::Y,
                index: 3,
                extent: 3
            })
        ));
        assert!(matches!(
            value_at(&volume, [2, 0, 9]),
            Err(Error::IndexOutOfBounds {
                axis: Axis::X,
                index: 2,
                extent: 2
            })
        ));
    }
}
