//! Unit tests for pickup-planner.

#[cfg(test)]
mod helpers {
    use pickup_core::LocationId;
    use pickup_network::CityMap;

    pub fn ids(v: &[u32]) -> Vec<LocationId> {
        v.iter().copied().map(LocationId).collect()
    }

    /// Grizz at 1, Ice at 3; Ice reaches 4 (one hop) and 5 (two hops).
    pub fn town() -> CityMap {
        CityMap::from_parts(
            &[(0, 1, 4), (0, 3, 2), (2, 0, 3), (3, 1, 2), (2, 4, 2), (4, 5, 3)],
            &[(1, 3, 3), (3, 4, 2), (4, 3, 2), (4, 5, 4), (5, 1, 6)],
            &[("Grizz", 1), ("Ice", 3)],
        )
        .unwrap()
    }
}

// ── Reference queries ─────────────────────────────────────────────────────────

#[cfg(test)]
mod queries {
    use pickup_core::LocationId;
    use pickup_network::CityMap;

    use super::helpers::ids;
    use crate::{plan, Pickup, PickupPlanner};

    #[test]
    fn friend_one_track_away_is_free() {
        let map = CityMap::from_parts(&[(0, 1, 2)], &[(0, 1, 3)], &[("Sarah", 0)]).unwrap();
        let pickup = plan(&map, LocationId(1), LocationId(1)).unwrap();
        assert_eq!(
            pickup,
            Pickup {
                total_time: 0,
                path: ids(&[1]),
                friend: "Sarah".into(),
                location: LocationId(1),
                hops: 1,
            }
        );
    }

    #[test]
    fn round_trip_to_only_friend() {
        let map = CityMap::from_parts(
            &[(0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 4, 1), (4, 5, 1)],
            &[],
            &[("Jessica Hyde", 5)],
        )
        .unwrap();
        let pickup = plan(&map, LocationId(1), LocationId(1)).unwrap();
        assert_eq!(pickup.total_time, 8);
        assert_eq!(pickup.path, ids(&[1, 2, 3, 4, 5, 4, 3, 2, 1]));
        assert_eq!(pickup.friend, "Jessica Hyde");
        assert_eq!(pickup.location, LocationId(5));
        assert_eq!(pickup.hops, 0);
    }

    #[test]
    fn pickup_along_the_way() {
        let map = super::helpers::town();
        let pickup = PickupPlanner::new(&map).plan(LocationId(2), LocationId(5)).unwrap();
        assert_eq!(pickup.total_time, 5);
        assert_eq!(pickup.path, ids(&[2, 4, 5]));
        assert_eq!(pickup.friend, "Ice");
        assert_eq!(pickup.location, LocationId(4));
        assert_eq!(pickup.hops, 1);
    }

    #[test]
    fn start_equals_destination_at_a_friend() {
        let map = super::helpers::town();
        let pickup = plan(&map, LocationId(3), LocationId(3)).unwrap();
        assert_eq!(pickup.total_time, 0);
        assert_eq!(pickup.path, ids(&[3]));
        assert_eq!(pickup.friend, "Ice");
    }
}

// ── Tie-breaking ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod ties {
    use pickup_core::LocationId;
    use pickup_network::CityMap;

    use super::helpers::ids;
    use crate::plan;

    #[test]
    fn fewer_hops_wins_equal_time() {
        // Location 0 has B at one hop, location 2 has A at home.  Both are a
        // two-minute round trip from 1; A wins despite the higher index.
        let map = CityMap::from_parts(
            &[(0, 1, 1), (1, 2, 1), (2, 3, 5)],
            &[(3, 0, 1)],
            &[("B", 3), ("A", 2)],
        )
        .unwrap();
        let pickup = plan(&map, LocationId(1), LocationId(1)).unwrap();
        assert_eq!(pickup.location, LocationId(2));
        assert_eq!(pickup.friend, "A");
        assert_eq!(pickup.total_time, 2);
        assert_eq!(pickup.path, ids(&[1, 2, 1]));
    }

    #[test]
    fn lowest_location_wins_full_tie() {
        let map = CityMap::from_parts(&[(0, 1, 1), (1, 2, 1)], &[], &[("Y", 2), ("X", 0)]).unwrap();
        let pickup = plan(&map, LocationId(1), LocationId(1)).unwrap();
        assert_eq!(pickup.location, LocationId(0));
        assert_eq!(pickup.friend, "X");
        assert_eq!(pickup.path, ids(&[1, 0, 1]));
    }

    #[test]
    fn shorter_time_beats_fewer_hops() {
        // A lives at 3 (far), but has a track to 1 (on the way).
        let map = CityMap::from_parts(
            &[(0, 1, 1), (1, 2, 1), (2, 3, 10)],
            &[(3, 1, 0)],
            &[("A", 3)],
        )
        .unwrap();
        let pickup = plan(&map, LocationId(0), LocationId(2)).unwrap();
        assert_eq!(pickup.location, LocationId(1));
        assert_eq!(pickup.hops, 1);
        assert_eq!(pickup.path, ids(&[0, 1, 2]));
    }
}

// ── Ranking, routing, errors ──────────────────────────────────────────────────

#[cfg(test)]
mod planner {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use pickup_core::LocationId;
    use pickup_network::{CityMap, DijkstraRouter, NetworkError, NetworkResult, Route, Router, ShortestPaths};

    use super::helpers::ids;
    use crate::{PickupPlanner, PlanError};

    /// Delegates to Dijkstra and counts calls.
    #[derive(Default)]
    struct CountingRouter {
        full:     AtomicUsize,
        targeted: AtomicUsize,
    }

    impl Router for CountingRouter {
        fn distances(&self, map: &CityMap, source: LocationId) -> NetworkResult<ShortestPaths> {
            self.full.fetch_add(1, Ordering::Relaxed);
            DijkstraRouter::default().distances(map, source)
        }

        fn route(&self, map: &CityMap, from: LocationId, to: LocationId) -> NetworkResult<Route> {
            self.targeted.fetch_add(1, Ordering::Relaxed);
            DijkstraRouter::default().route(map, from, to)
        }
    }

    #[test]
    fn plan_runs_two_full_and_two_targeted_searches() {
        let map = super::helpers::town();
        let planner = PickupPlanner::with_router(&map, CountingRouter::default());
        planner.plan(LocationId(2), LocationId(5)).unwrap();
        assert_eq!(planner.router().full.load(Ordering::Relaxed), 2);
        assert_eq!(planner.router().targeted.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn rank_orders_candidates() {
        let map = super::helpers::town();
        let planner = PickupPlanner::new(&map);
        let ranked = planner.rank(LocationId(2), LocationId(5)).unwrap();

        let order: Vec<_> = ranked.iter().map(|c| (c.location.0, c.total, c.hops)).collect();
        assert_eq!(order, vec![(4, 5, 1), (5, 5, 2), (3, 15, 0), (1, 19, 0)]);

        let head = ranked[0];
        assert_eq!(head.from_start, 2);
        assert_eq!(head.to_destination, 3);
        let pickup = planner.plan(LocationId(2), LocationId(5)).unwrap();
        assert_eq!(head.location, pickup.location);
    }

    #[test]
    fn route_via_drops_the_duplicate_stop() {
        let map = super::helpers::town();
        let route = PickupPlanner::new(&map)
            .route_via(LocationId(4), LocationId(5), LocationId(2))
            .unwrap();
        assert_eq!(route.locations, ids(&[4, 5, 4, 2]));
        assert_eq!(route.total, 8);
    }

    #[test]
    fn no_friends_means_no_pickup() {
        let map = CityMap::from_parts::<&str>(&[(0, 1, 1)], &[], &[]).unwrap();
        let result = PickupPlanner::new(&map).plan(LocationId(0), LocationId(1));
        assert!(matches!(
            result,
            Err(PlanError::NoPickup { start: LocationId(0), destination: LocationId(1) })
        ));
    }

    #[test]
    fn unreachable_friend_is_skipped() {
        // Friend on a separate island; no candidate reachable from both ends.
        let map = CityMap::from_parts(&[(0, 1, 1), (2, 3, 1)], &[], &[("Far", 3)]).unwrap();
        let result = PickupPlanner::new(&map).plan(LocationId(0), LocationId(1));
        assert!(matches!(result, Err(PlanError::NoPickup { .. })));
        assert!(PickupPlanner::new(&map).rank(LocationId(0), LocationId(1)).unwrap().is_empty());
    }

    #[test]
    fn out_of_range_start() {
        let map = super::helpers::town();
        let result = PickupPlanner::new(&map).plan(LocationId(40), LocationId(1));
        assert!(matches!(
            result,
            Err(PlanError::Network(NetworkError::LocationOutOfRange { .. }))
        ));
    }

    #[test]
    fn planner_is_shareable_across_threads() {
        let map = super::helpers::town();
        let planner = PickupPlanner::new(&map);
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| planner.plan(LocationId(2), LocationId(5)).unwrap()))
                .collect();
            for h in handles {
                assert_eq!(h.join().unwrap().location, LocationId(4));
            }
        });
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod props {
    use proptest::prelude::*;

    use pickup_core::LocationId;
    use pickup_network::{CityMap, DijkstraRouter, Router};

    use crate::PickupPlanner;

    prop_compose! {
        fn city()(n in 2u32..12)(
            tree in (1..n).map(|i| (0..i, 0u64..15).prop_map(move |(j, w)| (i, j, w))).collect::<Vec<_>>(),
            extra in proptest::collection::vec((0..n, 0..n, 0u64..15), 0..12),
            tracks in proptest::collection::vec((0..n, 0..n), 0..12),
            homes in proptest::collection::vec(0..n, 1..4),
            start in 0..n,
            destination in 0..n,
        ) -> (CityMap, LocationId, LocationId) {
            let mut roads = tree;
            roads.extend(extra);
            let tracks: Vec<_> = tracks.into_iter().map(|(u, v)| (u, v, 0)).collect();
            let friends: Vec<_> = homes.iter().enumerate().map(|(i, &h)| (format!("f{i}"), h)).collect();
            let map = CityMap::from_parts(&roads, &tracks, &friends).unwrap();
            (map, LocationId(start), LocationId(destination))
        }
    }

    proptest! {
        /// The chosen pickup is optimal over every location with a friend,
        /// and the path is a real road walk costing exactly the total.
        #[test]
        fn plan_is_optimal_and_consistent((map, start, destination) in city()) {
            let router = DijkstraRouter::default();
            let pickup = PickupPlanner::new(&map).plan(start, destination).unwrap();

            let a = router.distances(&map, start).unwrap();
            let b = router.distances(&map, destination).unwrap();
            let best = map
                .pickup_points()
                .map(|(loc, p)| (a.distance(loc) + b.distance(loc), p.hops))
                .min()
                .unwrap();
            prop_assert_eq!((pickup.total_time, pickup.hops), best);

            let chosen = map.proximity(pickup.location).unwrap();
            prop_assert_eq!(map.friend_name(chosen.friend), pickup.friend.as_str());

            prop_assert_eq!(pickup.path.first(), Some(&start));
            prop_assert_eq!(pickup.path.last(), Some(&destination));
            prop_assert!(pickup.path.contains(&pickup.location));

            let mut walked = 0;
            for pair in pickup.path.windows(2) {
                let w = map.neighbors(pair[0]).filter(|&(n, _)| n == pair[1]).map(|(_, w)| w).min();
                prop_assert!(w.is_some(), "{} -> {} is not a road", pair[0], pair[1]);
                walked += w.unwrap_or_default();
            }
            prop_assert_eq!(walked, pickup.total_time);
        }

        /// Swapping start and destination keeps the optimal total.
        #[test]
        fn total_is_symmetric((map, start, destination) in city()) {
            let planner = PickupPlanner::new(&map);
            let there = planner.plan(start, destination).unwrap();
            let back = planner.plan(destination, start).unwrap();
            prop_assert_eq!(there.total_time, back.total_time);
        }
    }
}
