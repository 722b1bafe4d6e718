//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! The planner calls routing through the [`Router`] trait, so callers can
//! swap in another engine without touching the planner.  The default
//! [`DijkstraRouter`] is a lazy-deletion Dijkstra over the CSR road graph.
//!
//! # Cost units
//!
//! Costs are raw road weights summed as `u64`.  A location that was never
//! reached reads as [`UNREACHABLE`].

use tracing::trace;

use pickup_core::cost;
use pickup_core::{Cost, LocationId, MinHeap, RouterConfig, UNREACHABLE};

use crate::network::CityMap;
use crate::{NetworkError, NetworkResult};

// ── Results ───────────────────────────────────────────────────────────────────

/// Shortest travel time from one source to every location.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    pub source: LocationId,
    dist: Vec<Cost>,
}

impl ShortestPaths {
    /// Travel time from `source` to `loc`; [`UNREACHABLE`] if none.
    #[inline]
    pub fn distance(&self, loc: LocationId) -> Cost {
        self.dist[loc.index()]
    }

    pub fn is_reachable(&self, loc: LocationId) -> bool {
        cost::is_reachable(self.dist[loc.index()])
    }

    /// Distances indexed by `LocationId`.
    pub fn as_slice(&self) -> &[Cost] {
        &self.dist
    }
}

/// A shortest path between two locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Locations in travel order, both endpoints included.
    pub locations: Vec<LocationId>,
    pub total: Cost,
}

impl Route {
    /// `true` if the source and target are the same location.
    pub fn is_trivial(&self) -> bool {
        self.locations.len() == 1
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.
///
/// Implementations must be `Send + Sync`: a map and router are shared
/// read-only between queries.
pub trait Router: Send + Sync {
    /// Shortest travel time from `source` to every location.
    fn distances(&self, map: &CityMap, source: LocationId) -> NetworkResult<ShortestPaths>;

    /// One shortest path from `from` to `to`.
    ///
    /// `from == to` yields a single-location route with zero cost.
    fn route(&self, map: &CityMap, from: LocationId, to: LocationId) -> NetworkResult<Route>;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Standard Dijkstra's algorithm with lazy deletion.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraRouter {
    pub config: RouterConfig,
}

impl DijkstraRouter {
    pub fn new(config: RouterConfig) -> Self {
        Self { config }
    }
}

impl Router for DijkstraRouter {
    fn distances(&self, map: &CityMap, source: LocationId) -> NetworkResult<ShortestPaths> {
        let search = dijkstra(map, source, None, false)?;
        Ok(ShortestPaths { source, dist: search.dist })
    }

    fn route(&self, map: &CityMap, from: LocationId, to: LocationId) -> NetworkResult<Route> {
        map.check(to)?;
        let search = dijkstra(map, from, Some(to), self.config.early_exit_on_leaf)?;
        search.reconstruct(from, to)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

struct Search {
    dist: Vec<Cost>,
    /// Predecessor on the shortest-path tree; only tracked when a target is
    /// given.  `LocationId::INVALID` for the source and unreached locations.
    prev: Vec<LocationId>,
}

fn dijkstra(
    map: &CityMap,
    source: LocationId,
    target: Option<LocationId>,
    early_exit: bool,
) -> NetworkResult<Search> {
    map.check(source)?;

    let n = map.location_count();
    let mut dist = vec![UNREACHABLE; n];
    let mut prev = if target.is_some() { vec![LocationId::INVALID; n] } else { Vec::new() };

    dist[source.index()] = 0;

    // One push per strict improvement (bounded by the directed edge count)
    // plus the source.
    let mut heap: MinHeap<(Cost, LocationId)> =
        MinHeap::with_capacity(map.directed_edge_count() + 1);
    heap.push((0, source))?;

    while !heap.is_empty() {
        let (cost, loc) = heap.pop()?;

        // The first extraction of the target is at its final cost.
        if early_exit && Some(loc) == target && map.degree(loc) == 1 {
            trace!(location = %loc, cost, "early exit at dead-end target");
            break;
        }

        // Skip stale heap entries.
        if cost > dist[loc.index()] {
            continue;
        }

        for (next, weight) in map.neighbors(loc) {
            let new_cost = cost.saturating_add(weight);
            if new_cost < dist[next.index()] {
                dist[next.index()] = new_cost;
                if target.is_some() {
                    prev[next.index()] = loc;
                }
                heap.push((new_cost, next))?;
            }
        }
    }

    Ok(Search { dist, prev })
}

impl Search {
    fn reconstruct(self, from: LocationId, to: LocationId) -> NetworkResult<Route> {
        let total = self.dist[to.index()];
        if total == UNREACHABLE {
            return Err(NetworkError::NoRoute { from, to });
        }

        let mut locations = vec![to];
        let mut cur = to;
        while cur != from {
            cur = self.prev[cur.index()];
            if cur == LocationId::INVALID {
                return Err(NetworkError::NoRoute { from, to });
            }
            locations.push(cur);
        }
        locations.reverse();
        Ok(Route { locations, total })
    }
}
