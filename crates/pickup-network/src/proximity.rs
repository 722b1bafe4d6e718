//! Friend proximity: which friend can be picked up where.
//!
//! Every friend is available at home with hop count 0.  Following a directed
//! track from a location where a friend is available at `h` hops makes that
//! friend available at the track's far end with `h + 1` hops, as long as
//! `h < max_track_hops`.  Each location keeps only its nearest friend; on an
//! equal hop count the entry that got there first is kept.
//!
//! # Relaxation
//!
//! A single pass over the track list in input order misses chains whose
//! tracks appear "backwards" (B→C listed before A→B).  Passes are therefore
//! repeated: either until a pass changes nothing ([`Propagation::FixedPoint`])
//! or a fixed number of times.  After pass `k` every entry with `k` or fewer
//! hops is final, so a fixed point is reached within `max_track_hops + 1`
//! passes whatever the track order.

use rustc_hash::FxHashMap;

use pickup_core::{FriendId, LocationId, NetworkConfig, Propagation};

use crate::network::Track;

// ── Proximity ─────────────────────────────────────────────────────────────────

/// The nearest friend available at a location.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Proximity {
    pub friend: FriendId,
    /// Tracks followed from the friend's home; 0 means the friend lives here.
    pub hops: u8,
}

// ── ProximityTable ────────────────────────────────────────────────────────────

/// Per-location optional [`Proximity`], indexed by `LocationId`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProximityTable {
    entries: Vec<Option<Proximity>>,
    filled:  usize,
}

impl ProximityTable {
    /// Seed homes, then relax along `tracks`.
    ///
    /// Returns the table and the number of full passes made over `tracks`.
    /// Callers must have range-checked every location already.
    pub fn build(
        location_count: usize,
        homes:  &[(FriendId, LocationId)],
        tracks: &[Track],
        config: &NetworkConfig,
    ) -> (ProximityTable, u32) {
        let mut entries = vec![None; location_count];

        // Homes are authoritative: last declaration at a location wins.
        for &(friend, home) in homes {
            entries[home.index()] = Some(Proximity { friend, hops: 0 });
        }

        let mut table = ProximityTable { entries, filled: 0 };
        let mut passes = 0;
        if !tracks.is_empty() {
            match config.propagation {
                Propagation::FixedPoint => loop {
                    passes += 1;
                    if !table.relax(tracks, config.max_track_hops) {
                        break;
                    }
                },
                Propagation::Passes(n) => {
                    for _ in 0..n {
                        passes += 1;
                        table.relax(tracks, config.max_track_hops);
                    }
                }
            }
        }
        table.filled = table.entries.iter().filter(|e| e.is_some()).count();
        (table, passes)
    }

    /// One full pass over `tracks`.  Returns `true` if any entry changed.
    fn relax(&mut self, tracks: &[Track], max_hops: u8) -> bool {
        let mut changed = false;
        for t in tracks {
            let Some(src) = self.entries[t.from.index()] else { continue };
            if src.hops >= max_hops {
                continue;
            }
            let hops = src.hops + 1;
            let dst = &mut self.entries[t.to.index()];
            let improves = match dst {
                None => true,
                Some(cur) => cur.hops > hops,
            };
            if improves {
                *dst = Some(Proximity { friend: src.friend, hops });
                changed = true;
            }
        }
        changed
    }

    #[inline]
    pub fn get(&self, loc: LocationId) -> Option<Proximity> {
        self.entries.get(loc.index()).copied().flatten()
    }

    /// Locations with an entry, ascending.
    pub fn iter(&self) -> impl Iterator<Item = (LocationId, Proximity)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.map(|p| (LocationId(i as u32), p)))
    }

    /// Hop count per location, without friend identity.
    pub fn hop_layer(&self) -> Vec<Option<u8>> {
        self.entries.iter().map(|e| e.map(|p| p.hops)).collect()
    }

    /// Number of locations with an entry.
    pub fn len(&self) -> usize {
        self.filled
    }

    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }
}

// ── FriendRegistry ────────────────────────────────────────────────────────────

/// Interns friend names to dense [`FriendId`]s.
#[derive(Debug, Clone, Default)]
pub struct FriendRegistry {
    names:   Vec<String>,
    by_name: FxHashMap<String, FriendId>,
}

impl FriendRegistry {
    /// Return the id for `name`, allocating one on first sight.
    pub fn intern(&mut self, name: &str) -> FriendId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }
        let id = FriendId(self.names.len() as u32);
        self.names.push(name.to_owned());
        self.by_name.insert(name.to_owned(), id);
        id
    }

    pub fn id(&self, name: &str) -> Option<FriendId> {
        self.by_name.get(name).copied()
    }

    /// # Panics
    /// Panics if `id` was not issued by this registry.
    pub fn name(&self, id: FriendId) -> &str {
        &self.names[id.index()]
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
