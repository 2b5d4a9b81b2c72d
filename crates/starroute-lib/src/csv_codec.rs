//! Route import and export in CSV form.
//!
//! Routes are stored with a fixed `System Name,X,Y,Z` header and one system
//! per row, in route order. Decoding is all-or-nothing: any missing column or
//! unparsable row fails the whole import.

use std::io::{self, Read};

use csv::{ReaderBuilder, StringRecord, Terminator, Trim, WriterBuilder};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::geometry::Point;

/// Column names of the route CSV format, in the order they are written.
pub const CSV_HEADER: [&str; 4] = ["System Name", "X", "Y", "Z"];

const NAME_COLUMN: usize = 0;
const X_COLUMN: usize = 1;
const Y_COLUMN: usize = 2;
const Z_COLUMN: usize = 3;

/// Encode `route` as CSV text, header first.
pub fn encode(route: &[Point]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for point in route {
        writer.write_record([
            point.name.clone(),
            format_coordinate(point.x),
            format_coordinate(point.y),
            format_coordinate(point.z),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|err| err.into_error())?;
    let text =
        String::from_utf8(bytes).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
    debug!(systems = route.len(), "encoded route CSV");
    Ok(text)
}

/// Decode route CSV text into an ordered list of systems.
pub fn decode(text: &str) -> Result<Vec<Point>> {
    decode_reader(text.as_bytes())
}

/// Decode route CSV from a reader (e.g. file or in-memory buffer).
pub fn decode_reader<R: Read>(reader: R) -> Result<Vec<Point>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::None).from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let columns = locate_columns(&headers)?;

    let mut points = Vec::new();
    for (offset, result) in csv_reader.records().enumerate() {
        let record = result?;
        // Header is line 1; fall back to counting when positions are unavailable.
        let row = record
            .position()
            .map(|position| position.line() as usize)
            .unwrap_or(offset + 2);
        points.push(parse_point(&record, &columns, row)?);
    }

    debug!(systems = points.len(), "decoded route CSV");
    Ok(points)
}

fn locate_columns(headers: &StringRecord) -> Result<[usize; 4]> {
    let mut columns = [0usize; 4];
    let mut missing = Vec::new();

    for (slot, name) in CSV_HEADER.iter().enumerate() {
        match headers.iter().position(|header| header == *name) {
            Some(index) => columns[slot] = index,
            None => missing.push(name.to_string()),
        }
    }

    if !missing.is_empty() {
        warn!(missing = ?missing, "route CSV is missing required columns");
        return Err(Error::MissingColumns {
            required: CSV_HEADER.iter().map(|name| name.to_string()).collect(),
            missing,
        });
    }

    Ok(columns)
}

fn parse_point(record: &StringRecord, columns: &[usize; 4], row: usize) -> Result<Point> {
    let name = record.get(columns[NAME_COLUMN]).unwrap_or_default();
    if name.trim().is_empty() {
        return Err(invalid_field(row, NAME_COLUMN, name));
    }

    let coordinate = |slot: usize| -> Result<f64> {
        let value = record.get(columns[slot]).unwrap_or_default();
        value
            .trim()
            .parse::<f64>()
            .map_err(|_| invalid_field(row, slot, value))
    };

    Ok(Point {
        name: name.to_string(),
        x: coordinate(X_COLUMN)?,
        y: coordinate(Y_COLUMN)?,
        z: coordinate(Z_COLUMN)?,
    })
}

fn invalid_field(row: usize, slot: usize, value: &str) -> Error {
    warn!(row, column = CSV_HEADER[slot], value, "unparsable route CSV field");
    Error::InvalidField {
        row,
        column: CSV_HEADER[slot].to_string(),
        value: value.to_string(),
    }
}

/// Shortest representation that parses back to the same value; integral
/// values keep a trailing `.0`.
fn format_coordinate(value: f64) -> String {
    format!("{value:?}")
}
