use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use super::model::{
    Coordinate, Customer, GeoPoint, RawCustomer, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON,
};
use crate::error::{GuestListError, Result};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load customers from a line-delimited JSON file.
pub fn load_customers(path: &Path) -> Result<Vec<Customer>> {
    let file = File::open(path)?;
    parse_customers(BufReader::new(file))
}

/// Parse one JSON object per line:
///
/// ```json
/// {"latitude": "52.986375", "user_id": 12, "name": "Christina McArdle", "longitude": "-6.043701"}
/// ```
///
/// Blank lines are skipped. The first bad line aborts the whole load.
/// Lines are handed to serde as raw bytes so invalid UTF-8 is reported
/// against its line rather than as a read failure.
pub fn parse_customers<R: BufRead>(reader: R) -> Result<Vec<Customer>> {
    let mut customers = Vec::new();

    for (i, line) in reader.split(b'\n').enumerate() {
        let line = line?;
        let line_no = i + 1;
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }
        customers.push(parse_line(&line, line_no)?);
    }

    debug!("parsed {} customer records", customers.len());
    Ok(customers)
}

// ---------------------------------------------------------------------------
// Line helpers
// ---------------------------------------------------------------------------

fn parse_line(line: &[u8], line_no: usize) -> Result<Customer> {
    let raw: RawCustomer =
        serde_json::from_slice(line).map_err(|e| GuestListError::Parse {
            line: line_no,
            message: e.to_string(),
        })?;

    let latitude = coordinate(&raw.latitude, line_no, "latitude", MIN_LAT, MAX_LAT)?;
    let longitude = coordinate(&raw.longitude, line_no, "longitude", MIN_LON, MAX_LON)?;

    Ok(Customer {
        user_id: raw.user_id,
        name: raw.name,
        location: GeoPoint::new(latitude, longitude),
    })
}

fn coordinate(
    cell: &Coordinate,
    line_no: usize,
    field: &'static str,
    min: f64,
    max: f64,
) -> Result<f64> {
    cell.as_f64()
        .filter(|v| (min..=max).contains(v))
        .ok_or_else(|| GuestListError::Value {
            line: line_no,
            field,
            value: cell.to_string(),
        })
}
