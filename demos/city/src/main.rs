//! `city` — load a city from CSV and plan one pickup.
//!
//! ```text
//! cargo run -p city -- [DATA_DIR] [START] [DESTINATION]
//! ```
//!
//! `DATA_DIR` holds `roads.csv`, `tracks.csv`, and `friends.csv` (see
//! `pickup_network::loader`).  Defaults: the bundled `data/` directory,
//! start 2, destination 5.  Set `RUST_LOG=debug` to see construction and
//! planning events.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use pickup_core::{LocationId, NetworkConfig};
use pickup_network::load_city_dir;
use pickup_planner::PickupPlanner;

const DEFAULT_START: u32 = 2;
const DEFAULT_DESTINATION: u32 = 5;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let dir = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data"));
    let start = parse_location(args.next(), DEFAULT_START, "START")?;
    let destination = parse_location(args.next(), DEFAULT_DESTINATION, "DESTINATION")?;

    let t0 = Instant::now();
    let map = load_city_dir(&dir, NetworkConfig::default())
        .with_context(|| format!("loading city from {}", dir.display()))?;
    println!("=== city — pickup planner ===");
    println!(
        "Locations: {}  |  Roads: {}  |  Tracks: {}  |  Friends: {}",
        map.location_count(),
        map.road_count(),
        map.track_count(),
        map.friend_count(),
    );

    let planner = PickupPlanner::new(&map);
    let pickup = planner
        .plan(start, destination)
        .with_context(|| format!("planning {start} -> {destination}"))?;
    let elapsed = t0.elapsed();

    println!("{}", serde_json::to_string_pretty(&pickup)?);
    println!();
    println!("{:<10} {:<8} {:<6} {:<8}", "Location", "Friend", "Hops", "Total");
    println!("{}", "-".repeat(34));
    for c in planner.rank(start, destination)? {
        println!(
            "{:<10} {:<8} {:<6} {:<8}",
            c.location.0,
            map.friend_name(c.friend),
            c.hops,
            c.total,
        );
    }
    println!();
    println!("Done in {:.3} ms", elapsed.as_secs_f64() * 1_000.0);
    Ok(())
}

fn parse_location(arg: Option<String>, default: u32, what: &str) -> Result<LocationId> {
    match arg {
        None => Ok(LocationId(default)),
        Some(s) => s
            .parse::<u32>()
            .map(LocationId)
            .with_context(|| format!("{what} must be a location id, got {s:?}")),
    }
}
