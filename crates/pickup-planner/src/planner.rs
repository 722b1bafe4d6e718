//! Pickup selection and path assembly.
//!
//! # Query
//!
//! 1. Two full shortest-path runs, one rooted at `start` and one at
//!    `destination`.  Roads are undirected, so the second gives
//!    `time(p → destination)` for every `p`.
//! 2. A scan over every location with a friend available, in ascending
//!    location order.  A candidate replaces the current best only if its
//!    total is strictly lower, or equal with strictly fewer hops; the lowest
//!    location wins any remaining tie.
//! 3. Two targeted runs, `start → pickup` and `pickup → destination`, whose
//!    paths are joined without repeating the pickup location.  Each leg is
//!    shortest on its own, so the joined path may pass a location twice.

use std::cmp::Ordering;

use tracing::debug;

use pickup_core::{Cost, FriendId, LocationId};
use pickup_network::{CityMap, DijkstraRouter, Route, Router, ShortestPaths};

use crate::{PlanError, PlanResult};

// ── Results ───────────────────────────────────────────────────────────────────

/// The chosen pickup and the journey through it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pickup {
    /// `time(start → location) + time(location → destination)`.
    pub total_time: Cost,
    /// Start to destination via `location`, endpoints included.
    pub path: Vec<LocationId>,
    pub friend: String,
    pub location: LocationId,
    /// Tracks between the friend's home and `location`.
    pub hops: u8,
}

/// One location where a friend could be collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    pub location:       LocationId,
    pub friend:         FriendId,
    pub hops:           u8,
    pub from_start:     Cost,
    pub to_destination: Cost,
    pub total:          Cost,
}

impl Candidate {
    /// Strict preference: lower total, then fewer hops.
    fn beats(&self, other: &Candidate) -> bool {
        self.total < other.total || (self.total == other.total && self.hops < other.hops)
    }

    /// Total order used by [`PickupPlanner::rank`].
    fn rank_cmp(&self, other: &Candidate) -> Ordering {
        (self.total, self.hops, self.location).cmp(&(other.total, other.hops, other.location))
    }
}

// ── PickupPlanner ─────────────────────────────────────────────────────────────

/// Answers pickup queries against one immutable [`CityMap`].
///
/// Queries take `&self` and never mutate the map, so one planner can be
/// shared across threads.
pub struct PickupPlanner<'m, R: Router = DijkstraRouter> {
    map:    &'m CityMap,
    router: R,
}

impl<'m> PickupPlanner<'m, DijkstraRouter> {
    /// Planner using the default [`DijkstraRouter`].
    pub fn new(map: &'m CityMap) -> Self {
        Self { map, router: DijkstraRouter::default() }
    }
}

impl<'m, R: Router> PickupPlanner<'m, R> {
    pub fn with_router(map: &'m CityMap, router: R) -> Self {
        Self { map, router }
    }

    pub fn map(&self) -> &'m CityMap {
        self.map
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    /// Best pickup between `start` and `destination`, with the full path.
    pub fn plan(&self, start: LocationId, destination: LocationId) -> PlanResult<Pickup> {
        let from_start = self.router.distances(self.map, start)?;
        let from_dest  = self.router.distances(self.map, destination)?;

        let mut best: Option<Candidate> = None;
        for c in self.candidates(&from_start, &from_dest) {
            if best.as_ref().is_none_or(|b| c.beats(b)) {
                best = Some(c);
            }
        }
        let best = best.ok_or(PlanError::NoPickup { start, destination })?;

        let route = self.route_via(start, best.location, destination)?;
        debug_assert_eq!(route.total, best.total);

        let friend = self.map.friend_name(best.friend).to_owned();
        debug!(
            start = %start,
            destination = %destination,
            pickup = %best.location,
            friend = friend.as_str(),
            hops = best.hops,
            total = best.total,
            "planned pickup"
        );

        Ok(Pickup {
            total_time: best.total,
            path:       route.locations,
            friend,
            location:   best.location,
            hops:       best.hops,
        })
    }

    /// Every reachable candidate, best first.  The head of the list is the
    /// pickup [`plan`](Self::plan) would choose.
    pub fn rank(&self, start: LocationId, destination: LocationId) -> PlanResult<Vec<Candidate>> {
        let from_start = self.router.distances(self.map, start)?;
        let from_dest  = self.router.distances(self.map, destination)?;
        let mut all: Vec<Candidate> = self.candidates(&from_start, &from_dest).collect();
        all.sort_by(Candidate::rank_cmp);
        Ok(all)
    }

    /// Shortest path `start → stop → destination`, the stop listed once.
    pub fn route_via(
        &self,
        start: LocationId,
        stop: LocationId,
        destination: LocationId,
    ) -> PlanResult<Route> {
        let first  = self.router.route(self.map, start, stop)?;
        let second = self.router.route(self.map, stop, destination)?;

        let mut locations = first.locations;
        locations.pop();
        locations.extend(second.locations);
        Ok(Route { locations, total: first.total.saturating_add(second.total) })
    }

    /// Pickup points reachable from both ends, ascending by location.
    fn candidates<'a>(
        &'a self,
        from_start: &'a ShortestPaths,
        from_dest: &'a ShortestPaths,
    ) -> impl Iterator<Item = Candidate> + 'a {
        self.map.pickup_points().filter_map(move |(location, p)| {
            if !from_start.is_reachable(location) || !from_dest.is_reachable(location) {
                return None;
            }
            let a = from_start.distance(location);
            let b = from_dest.distance(location);
            Some(Candidate {
                location,
                friend: p.friend,
                hops: p.hops,
                from_start: a,
                to_destination: b,
                total: a.saturating_add(b),
            })
        })
    }
}

/// One-shot query with the default router.
pub fn plan(map: &CityMap, start: LocationId, destination: LocationId) -> PlanResult<Pickup> {
    PickupPlanner::new(map).plan(start, destination)
}
