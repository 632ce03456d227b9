use anyhow::{Context, Result};
use log::{debug, info};

use crate::config::Config;
use crate::data::filter::{sort_by_identifier, DistanceFilter};
use crate::data::loader::load_customers;
use crate::data::writer::write_guestlist_file;

// ---------------------------------------------------------------------------
// Loader → Filter → Writer
// ---------------------------------------------------------------------------

/// Run the whole batch. Returns the number of invited customers.
///
/// The output file is only touched once loading and filtering have succeeded.
pub fn run(config: &Config) -> Result<usize> {
    let input = &config.input_path;
    let output = &config.output_path;

    let customers = load_customers(input)
        .with_context(|| format!("loading customers from '{}'", input.display()))?;
    info!("loaded {} customers from {}", customers.len(), input.display());

    let filter = DistanceFilter::from_config(config);
    let mut invitations = filter.select_within_radius(customers);
    sort_by_identifier(&mut invitations);
    for invitation in &invitations {
        debug!("invite {invitation} ({:.1} km)", invitation.distance_km);
    }
    info!(
        "{} customers within {} km of {}",
        invitations.len(),
        filter.threshold_km(),
        filter.reference()
    );

    write_guestlist_file(&invitations, output)
        .with_context(|| format!("writing guest list to '{}'", output.display()))?;
    info!("guest list written to {}", output.display());

    Ok(invitations.len())
}
