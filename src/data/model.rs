use std::fmt;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// GeoPoint – a latitude / longitude pair in degrees
// ---------------------------------------------------------------------------

pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

// ---------------------------------------------------------------------------
// Coordinate – a raw latitude/longitude cell as it appears in the input
// ---------------------------------------------------------------------------

/// Coordinates arrive either as JSON numbers or as numeric strings
/// (`"latitude": "52.986375"`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Coordinate {
    Number(f64),
    Text(String),
}

impl Coordinate {
    /// Interpret the cell as a finite `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            Coordinate::Number(v) => *v,
            Coordinate::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coordinate::Number(v) => write!(f, "{v}"),
            Coordinate::Text(s) => write!(f, "{s}"),
        }
    }
}

/// One input line before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCustomer {
    pub user_id: i64,
    pub name: String,
    pub latitude: Coordinate,
    pub longitude: Coordinate,
}

// ---------------------------------------------------------------------------
// Customer – one validated input record
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    /// Sort key; assumed unique.
    pub user_id: i64,
    pub name: String,
    pub location: GeoPoint,
}

// ---------------------------------------------------------------------------
// Invitation – a customer that passed the distance filter
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Invitation {
    pub customer: Customer,
    /// Great-circle distance from the reference point.
    pub distance_km: f64,
}

impl Invitation {
    pub fn user_id(&self) -> i64 {
        self.customer.user_id
    }
}

/// Guest list line format: `<user_id> <name>`.
impl fmt::Display for Invitation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.customer.user_id, self.customer.name)
    }
}
