//! Write operations for volume data

// standard library
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// crate modules
use crate::error::Result;
use crate::slice::Slice;
use crate::volume::Volume;

// voltools modules
use voltools_utils::ValueExt;

// external crates
use itertools::Itertools;
use log::trace;

/// Decimal places for values, 9 significant figures round-trip any `f32`
const PRECISION: usize = 8;

/// Write a [Volume] to a text file in the same format it is read from
///
/// The fixed length preambles are filled with a human readable description of
/// the data, so the output is useful for inspection as well as being a valid
/// input for [read_volume()](crate::read_volume).
///
/// Values are written in scientific notation with 9 significant figures so
/// that reading the file back gives exactly the same values.
///
/// ```rust, no_run
/// # use voltools_volume::{read_volume, write_volume};
/// let volume = read_volume("./data/simple.out").unwrap();
/// write_volume(&volume, "./copy.out").unwrap();
/// ```
pub fn write_volume<P: AsRef<Path>>(volume: &Volume, path: P) -> Result<()> {
    let writer = init_writer(path)?;
    write_volume_to(volume, writer)
}

/// Write a [Volume] in the text format to anything implementing [Write]
///
/// ```rust
/// # use voltools_volume::{write_volume_to, Volume};
/// let volume = Volume::new([1, 1, 2], vec![1.0, -2.5]).unwrap();
///
/// let mut buffer = Vec::new();
/// write_volume_to(&volume, &mut buffer).unwrap();
///
/// let text = String::from_utf8(buffer).unwrap();
/// assert!(text.ends_with("1.00000000e+00 -2.50000000e+00\n"));
/// assert_eq!(text.parse::<Volume>().unwrap(), volume);
/// ```
pub fn write_volume_to<W: Write>(volume: &Volume, mut writer: W) -> Result<()> {
    let [n, r, c] = volume.shape();
    let range = match volume.range() {
        Ok(range) => range.to_string(),
        Err(_) => "undefined".to_string(),
    };

    // file preamble, always 6 lines
    writeln!(writer, "Volume data")?;
    writeln!(writer, "Shape (matrices x rows x columns): {n} x {r} x {c}")?;
    writeln!(writer, "Number of values: {}", volume.len())?;
    writeln!(writer, "Value range: {range}")?;
    writeln!(writer)?;
    writeln!(writer, "Number of matrices:")?;
    writeln!(writer, "{n}")?;

    for (i, matrix) in volume.values().chunks_exact(r * c).enumerate() {
        trace!("Writing matrix {i}");

        // matrix preamble, 4 lines
        writeln!(writer)?;
        writeln!(writer, "Matrix {} of {n}", i + 1)?;
        writeln!(writer, "X = {i}")?;
        writeln!(writer, "Number of rows:")?;
        writeln!(writer, "{r}")?;
        writeln!(writer, "Number of columns:")?;
        writeln!(writer, "{c}")?;
        writeln!(writer, "Values by row:")?;
        writeln!(writer, "{}", "-".repeat(14))?;

        for row in matrix.chunks_exact(c) {
            writeln!(writer, "{}", format_row(row))?;
        }
    }

    writer.flush()?;
    Ok(())
}

/// Write [Volume] data to a JSON file
///
/// This is a direct serialization of the shape and the flat row-major list of
/// values.
///
/// ```rust, no_run
/// # use voltools_volume::{read_volume, write_json};
/// let volume = read_volume("./data/simple.out").unwrap();
/// write_json(&volume, "./volume.json").unwrap();
/// ```
pub fn write_json<P: AsRef<Path>>(volume: &Volume, path: P) -> Result<()> {
    let mut writer = init_writer(path)?;
    serde_json::to_writer_pretty(&mut writer, volume)?;
    writer.flush()?;
    Ok(())
}

/// Write a [Slice] to a CSV file, one record per row of the plane
///
/// ```rust, no_run
/// # use voltools_volume::{read_volume, write_slice_csv, Axis};
/// let volume = read_volume("./data/simple.out").unwrap();
/// let slice = volume.slice(Axis::Y, 0).unwrap();
/// write_slice_csv(&slice, "./slice_y_0.csv").unwrap();
/// ```
pub fn write_slice_csv<P: AsRef<Path>>(slice: &Slice, path: P) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(init_writer(path)?);

    for row in slice.rows_iter() {
        writer.write_record(row.iter().map(|v| v.sci(PRECISION, 2)))?;
    }

    writer.flush()?;
    Ok(())
}

/// Space separated values in consistent scientific notation
fn format_row(row: &[f32]) -> String {
    row.iter().map(|v| v.sci(PRECISION, 2)).join(" ")
}

/// Initialise a writer from anything that can be turned into a path
fn init_writer<P: AsRef<Path>>(path: P) -> Result<BufWriter<File>> {
    let file = File::create(path)?;
    Ok(BufWriter::new(file))
}
