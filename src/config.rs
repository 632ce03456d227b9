use std::path::PathBuf;

use clap::Parser;

use crate::data::filter::{DEFAULT_THRESHOLD_KM, EARTH_RADIUS_KM};
use crate::data::model::GeoPoint;

pub const DEFAULT_INPUT: &str = "customers.txt";
pub const DEFAULT_OUTPUT: &str = "guestlist.txt";

/// Dublin office; every customer distance is measured from here.
pub const DEFAULT_REFERENCE: GeoPoint = GeoPoint {
    latitude: 53.3381985,
    longitude: -6.2592576,
};

// ---------------------------------------------------------------------------
// Run configuration
// ---------------------------------------------------------------------------

/// All values a run depends on. Nothing in the pipeline reads globals.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub reference: GeoPoint,
    pub earth_radius_km: f64,
    /// Inclusive radius around `reference`.
    pub threshold_km: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            reference: DEFAULT_REFERENCE,
            earth_radius_km: EARTH_RADIUS_KM,
            threshold_km: DEFAULT_THRESHOLD_KM,
        }
    }
}

/// Build an event guest list from customers within 100 km of Dublin.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Line-delimited JSON customer records
    #[arg(default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Guest list destination, overwritten on success
    #[arg(default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            input_path: args.input,
            output_path: args.output,
            ..Config::default()
        }
    }
}
