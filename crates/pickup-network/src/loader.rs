//! CSV loaders for city inputs.
//!
//! # CSV formats
//!
//! Roads and tracks share one layout (`weight` is travel time for roads and
//! ignored for tracks):
//!
//! ```csv
//! from,to,weight
//! 0,1,4
//! 0,3,2
//! ```
//!
//! Friends:
//!
//! ```csv
//! name,location
//! Grizz,1
//! Ice,3
//! ```
//!
//! [`load_city_dir`] reads `roads.csv`, `tracks.csv`, and `friends.csv` from
//! one directory.  `roads.csv` is required; the other two default to empty.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use pickup_core::{Cost, LocationId, NetworkConfig};

use crate::network::{CityMap, CityMapBuilder, Road, Track};
use crate::{NetworkError, NetworkResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RoadRecord {
    from:   u32,
    to:     u32,
    weight: Cost,
}

#[derive(Deserialize)]
struct TrackRecord {
    from:   u32,
    to:     u32,
    weight: i64,
}

#[derive(Deserialize)]
struct FriendRecord {
    name:     String,
    location: u32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Parse roads from any `Read` source.
pub fn load_roads_reader<R: Read>(reader: R) -> NetworkResult<Vec<Road>> {
    let rows = read_records::<RoadRecord, _>(reader)?;
    Ok(rows
        .into_iter()
        .map(|r| Road { from: LocationId(r.from), to: LocationId(r.to), weight: r.weight })
        .collect())
}

/// Parse tracks from any `Read` source.
pub fn load_tracks_reader<R: Read>(reader: R) -> NetworkResult<Vec<Track>> {
    let rows = read_records::<TrackRecord, _>(reader)?;
    Ok(rows
        .into_iter()
        .map(|r| Track { from: LocationId(r.from), to: LocationId(r.to), weight: r.weight })
        .collect())
}

/// Parse `(name, home)` pairs from any `Read` source.
pub fn load_friends_reader<R: Read>(reader: R) -> NetworkResult<Vec<(String, LocationId)>> {
    let rows = read_records::<FriendRecord, _>(reader)?;
    rows.into_iter()
        .map(|r| {
            let name = r.name.trim();
            if name.is_empty() {
                return Err(NetworkError::Parse(format!(
                    "friend at location {} has an empty name",
                    r.location
                )));
            }
            Ok((name.to_owned(), LocationId(r.location)))
        })
        .collect()
}

/// Load a complete [`CityMap`] from `dir/{roads,tracks,friends}.csv`.
pub fn load_city_dir(dir: &Path, config: NetworkConfig) -> NetworkResult<CityMap> {
    let roads = load_roads_reader(std::fs::File::open(dir.join("roads.csv"))?)?;
    let tracks = match open_optional(&dir.join("tracks.csv"))? {
        Some(f) => load_tracks_reader(f)?,
        None => Vec::new(),
    };
    let friends = match open_optional(&dir.join("friends.csv"))? {
        Some(f) => load_friends_reader(f)?,
        None => Vec::new(),
    };

    let mut b = CityMapBuilder::with_capacity(roads.len(), tracks.len(), friends.len())
        .config(config);
    for r in roads {
        b.add_road(r.from, r.to, r.weight);
    }
    for t in tracks {
        b.add_track(t.from, t.to, t.weight);
    }
    for (name, home) in friends {
        b.add_friend(name, home);
    }
    b.build()
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn read_records<T, R>(reader: R) -> NetworkResult<Vec<T>>
where
    T: for<'de> Deserialize<'de>,
    R: Read,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    csv_reader
        .deserialize::<T>()
        .map(|row| row.map_err(|e| NetworkError::Parse(e.to_string())))
        .collect()
}

fn open_optional(path: &Path) -> NetworkResult<Option<std::fs::File>> {
    match std::fs::File::open(path) {
        Ok(f) => Ok(Some(f)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(NetworkError::Io(e)),
    }
}
