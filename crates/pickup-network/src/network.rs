//! City map representation and builder.
//!
//! # Data layout
//!
//! Roads are undirected but stored as two directed adjacency entries in
//! **Compressed Sparse Row (CSR)** format.  Given a `LocationId n`, its
//! adjacency entries occupy the slice:
//!
//! ```text
//! adj_to[ loc_out_start[n] .. loc_out_start[n+1] ]
//! ```
//!
//! Entries keep the order in which roads were supplied, so the adjacency of
//! each location is deterministic for a given input.
//!
//! Tracks never enter the CSR arrays.  They only feed the friend
//! [`ProximityTable`], which is computed once at build time.
//!
//! # Location range
//!
//! The map covers locations `0..=L`, where `L` is the largest endpoint of any
//! road.  Locations inside that range that no road touches are valid but
//! isolated.  Track endpoints and friend homes must fall inside the range.

use tracing::debug;

use pickup_core::{Cost, FriendId, LocationId, NetworkConfig};

use crate::proximity::{FriendRegistry, Proximity, ProximityTable};
use crate::{NetworkError, NetworkResult};

// ── Input records ─────────────────────────────────────────────────────────────

/// An undirected road with a non-negative travel time.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Road {
    pub from:   LocationId,
    pub to:     LocationId,
    pub weight: Cost,
}

/// A directed track.  Only its direction matters; `weight` is carried for
/// symmetry with [`Road`] and never used as a distance.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Track {
    pub from:   LocationId,
    pub to:     LocationId,
    pub weight: i64,
}

// ── CityMap ───────────────────────────────────────────────────────────────────

/// Immutable road graph plus per-location friend proximity.
///
/// Built once by [`CityMapBuilder`] and only read afterwards, so a single
/// map can serve any number of queries, from any number of threads.
#[derive(Debug, Clone)]
pub struct CityMap {
    /// CSR row pointer.  Length = `location_count + 1`.
    loc_out_start: Vec<u32>,
    /// Neighbour of each directed adjacency entry.
    adj_to:        Vec<LocationId>,
    /// Travel time of each directed adjacency entry.
    adj_weight:    Vec<Cost>,

    proximity: ProximityTable,
    friends:   FriendRegistry,
    tracks:    usize,
}

impl CityMap {
    /// Build a map straight from raw tuples: roads `(u, v, w)`, tracks
    /// `(u, v, w)`, and friends `(name, home)`, using the default config.
    ///
    /// ```
    /// use pickup_core::LocationId;
    /// use pickup_network::CityMap;
    ///
    /// let map = CityMap::from_parts(&[(0, 1, 2)], &[(0, 1, 3)], &[("Sarah", 0)]).unwrap();
    /// assert_eq!(map.location_count(), 2);
    /// assert_eq!(map.proximity(LocationId(1)).unwrap().hops, 1);
    /// ```
    pub fn from_parts<S: AsRef<str>>(
        roads:   &[(u32, u32, Cost)],
        tracks:  &[(u32, u32, i64)],
        friends: &[(S, u32)],
    ) -> NetworkResult<CityMap> {
        let mut b = CityMapBuilder::with_capacity(roads.len(), tracks.len(), friends.len());
        for &(u, v, w) in roads {
            b.add_road(LocationId(u), LocationId(v), w);
        }
        for &(u, v, w) in tracks {
            b.add_track(LocationId(u), LocationId(v), w);
        }
        for (name, home) in friends {
            b.add_friend(name.as_ref(), LocationId(*home));
        }
        b.build()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    /// Number of locations, `L + 1`.
    pub fn location_count(&self) -> usize {
        self.loc_out_start.len() - 1
    }

    /// Largest valid location id, `L`.
    pub fn max_location(&self) -> LocationId {
        LocationId((self.location_count() - 1) as u32)
    }

    /// Number of undirected roads.
    pub fn road_count(&self) -> usize {
        self.adj_to.len() / 2
    }

    /// Number of directed adjacency entries (two per road).
    pub fn directed_edge_count(&self) -> usize {
        self.adj_to.len()
    }

    pub fn track_count(&self) -> usize {
        self.tracks
    }

    pub fn contains(&self, loc: LocationId) -> bool {
        loc.index() < self.location_count()
    }

    /// `Ok(())` if `loc` is inside the map.
    pub fn check(&self, loc: LocationId) -> NetworkResult<()> {
        if self.contains(loc) {
            Ok(())
        } else {
            Err(NetworkError::LocationOutOfRange { location: loc, max: self.max_location() })
        }
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// `(neighbour, travel time)` for every adjacency entry of `loc`.
    #[inline]
    pub fn neighbors(&self, loc: LocationId) -> impl Iterator<Item = (LocationId, Cost)> + '_ {
        let start = self.loc_out_start[loc.index()] as usize;
        let end   = self.loc_out_start[loc.index() + 1] as usize;
        self.adj_to[start..end]
            .iter()
            .copied()
            .zip(self.adj_weight[start..end].iter().copied())
    }

    /// Number of adjacency entries of `loc`.  A degree of 1 marks a dead end.
    #[inline]
    pub fn degree(&self, loc: LocationId) -> usize {
        let start = self.loc_out_start[loc.index()] as usize;
        let end   = self.loc_out_start[loc.index() + 1] as usize;
        end - start
    }

    // ── Friends ───────────────────────────────────────────────────────────

    /// Nearest friend available at `loc`, if any.
    #[inline]
    pub fn proximity(&self, loc: LocationId) -> Option<Proximity> {
        self.proximity.get(loc)
    }

    pub fn proximity_table(&self) -> &ProximityTable {
        &self.proximity
    }

    /// Every location with a friend available, in ascending location order.
    pub fn pickup_points(&self) -> impl Iterator<Item = (LocationId, Proximity)> + '_ {
        self.proximity.iter()
    }

    pub fn friend_name(&self, id: FriendId) -> &str {
        self.friends.name(id)
    }

    pub fn friend_id(&self, name: &str) -> Option<FriendId> {
        self.friends.id(name)
    }

    pub fn friend_count(&self) -> usize {
        self.friends.len()
    }
}

// ── CityMapBuilder ────────────────────────────────────────────────────────────

/// Construct a [`CityMap`] incrementally, then call [`build`](Self::build).
///
/// Roads, tracks, and friends may be added in any order; `build()` sizes the
/// map from the roads, lays out the CSR arrays, and computes friend
/// proximity.
///
/// # Example
///
/// ```
/// use pickup_core::LocationId;
/// use pickup_network::CityMapBuilder;
///
/// let mut b = CityMapBuilder::new();
/// b.add_road(LocationId(0), LocationId(1), 4);
/// b.add_road(LocationId(1), LocationId(2), 1);
/// b.add_track(LocationId(0), LocationId(2), 7);
/// b.add_friend("Ice", LocationId(0));
/// let map = b.build().unwrap();
/// assert_eq!(map.location_count(), 3);
/// assert_eq!(map.directed_edge_count(), 4); // bidirectional
/// ```
#[derive(Default)]
pub struct CityMapBuilder {
    config:  NetworkConfig,
    roads:   Vec<Road>,
    tracks:  Vec<Track>,
    friends: Vec<(String, LocationId)>,
}

impl CityMapBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for the expected input sizes.
    pub fn with_capacity(roads: usize, tracks: usize, friends: usize) -> Self {
        Self {
            config:  NetworkConfig::default(),
            roads:   Vec::with_capacity(roads),
            tracks:  Vec::with_capacity(tracks),
            friends: Vec::with_capacity(friends),
        }
    }

    pub fn config(mut self, config: NetworkConfig) -> Self {
        self.config = config;
        self
    }

    /// Add an undirected road between `a` and `b`.
    pub fn add_road(&mut self, a: LocationId, b: LocationId, weight: Cost) {
        self.roads.push(Road { from: a, to: b, weight });
    }

    /// Add a directed track from `from` to `to`.
    pub fn add_track(&mut self, from: LocationId, to: LocationId, weight: i64) {
        self.tracks.push(Track { from, to, weight });
    }

    /// Declare that `name` lives at `home`.  A later declaration at the same
    /// location replaces an earlier one.
    pub fn add_friend(&mut self, name: impl Into<String>, home: LocationId) {
        self.friends.push((name.into(), home));
    }

    pub fn road_count(&self) -> usize { self.roads.len() }
    pub fn track_count(&self) -> usize { self.tracks.len() }

    /// Consume the builder and produce a [`CityMap`].
    ///
    /// Time complexity: O(R log R) for the adjacency sort plus
    /// O(passes × T) for proximity, where R = roads and T = tracks.
    pub fn build(self) -> NetworkResult<CityMap> {
        self.config.validate()?;

        let max = self
            .roads
            .iter()
            .map(|r| r.from.0.max(r.to.0))
            .max()
            .ok_or(NetworkError::EmptyNetwork)?;
        let location_count = max as usize + 1;
        let max = LocationId(max);

        let out_of_range = |loc: LocationId| {
            if loc.index() < location_count {
                Ok(())
            } else {
                Err(NetworkError::LocationOutOfRange { location: loc, max })
            }
        };
        for t in &self.tracks {
            out_of_range(t.from)?;
            out_of_range(t.to)?;
        }
        for (_, home) in &self.friends {
            out_of_range(*home)?;
        }

        // Both directions of every road, then a stable sort by source so each
        // location's entries keep input order.
        let mut directed: Vec<(LocationId, LocationId, Cost)> =
            Vec::with_capacity(self.roads.len() * 2);
        for r in &self.roads {
            directed.push((r.from, r.to, r.weight));
            directed.push((r.to, r.from, r.weight));
        }
        directed.sort_by_key(|&(from, _, _)| from);

        let adj_to:     Vec<LocationId> = directed.iter().map(|&(_, to, _)| to).collect();
        let adj_weight: Vec<Cost>       = directed.iter().map(|&(_, _, w)| w).collect();

        let mut loc_out_start = vec![0u32; location_count + 1];
        for &(from, _, _) in &directed {
            loc_out_start[from.index() + 1] += 1;
        }
        for i in 1..=location_count {
            loc_out_start[i] += loc_out_start[i - 1];
        }
        debug_assert_eq!(loc_out_start[location_count] as usize, adj_to.len());

        let mut friends = FriendRegistry::default();
        let homes: Vec<(FriendId, LocationId)> = self
            .friends
            .iter()
            .map(|(name, home)| (friends.intern(name), *home))
            .collect();

        let (proximity, passes) =
            ProximityTable::build(location_count, &homes, &self.tracks, &self.config);

        debug!(
            locations = location_count,
            roads = self.roads.len(),
            tracks = self.tracks.len(),
            friends = friends.len(),
            pickup_points = proximity.len(),
            passes,
            "built city map"
        );

        Ok(CityMap {
            loc_out_start,
            adj_to,
            adj_weight,
            proximity,
            friends,
            tracks: self.tracks.len(),
        })
    }
}
