use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde_json::json;

const FIRST_NAMES: [&str; 8] = ["Alice", "Ian", "Nora", "Eoin", "Olive", "Michael", "Stephen", "Enid"];
const LAST_NAMES: [&str; 8] = ["Cahill", "Kehoe", "Dempsey", "Ahearn", "Byrne", "Ryan", "McArdle", "Enright"];

/// Write a deterministic sample customers file: mostly Ireland, a few abroad.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct GenerateArgs {
    /// Destination file
    #[arg(default_value = "customers.txt")]
    output: PathBuf,

    /// Number of customers to write
    #[arg(long, default_value_t = 32)]
    count: i64,

    /// RNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> Result<()> {
    let args = GenerateArgs::parse();
    let mut rng = StdRng::seed_from_u64(args.seed);

    let file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    let mut out = BufWriter::new(file);

    for user_id in 1..=args.count {
        // every eighth customer lives abroad
        let (lat, lon) = if user_id % 8 == 0 {
            (rng.gen_range(35.0..60.0), rng.gen_range(-80.0..20.0))
        } else {
            (rng.gen_range(51.4..55.4), rng.gen_range(-10.5..-5.5))
        };
        let name = format!(
            "{} {}",
            FIRST_NAMES.choose(&mut rng).copied().unwrap_or("Anon"),
            LAST_NAMES.choose(&mut rng).copied().unwrap_or("Customer")
        );

        // Real exports mix string and numeric coordinates.
        let record = if user_id % 3 == 0 {
            json!({ "latitude": lat, "user_id": user_id, "name": name, "longitude": lon })
        } else {
            json!({
                "latitude": format!("{lat:.7}"),
                "user_id": user_id,
                "name": name,
                "longitude": format!("{lon:.7}"),
            })
        };
        writeln!(out, "{record}")?;
    }
    out.flush()?;

    println!("Wrote {} customers to {}", args.count, args.output.display());
    Ok(())
}
