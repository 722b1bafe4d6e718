//! `pickup-planner` — pick the best friend to collect between two points.
//!
//! Given a [`CityMap`](pickup_network::CityMap), [`PickupPlanner::plan`]
//! finds the location with a friend available that minimises
//! `time(start → p) + time(p → destination)`, preferring the friend with the
//! fewest track hops on a tie, and returns the full road path through it.
//!
//! # Crate layout
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`planner`] | `PickupPlanner`, `Pickup`, `Candidate`, [`plan`]      |
//! | [`error`]   | `PlanError`, `PlanResult<T>`                          |
//!
//! # Example
//!
//! ```
//! use pickup_core::LocationId;
//! use pickup_network::CityMap;
//! use pickup_planner::PickupPlanner;
//!
//! let map = CityMap::from_parts(
//!     &[(0, 1, 4), (0, 3, 2), (2, 0, 3), (3, 1, 2), (2, 4, 2), (4, 5, 3)],
//!     &[(1, 3, 3), (3, 4, 2), (4, 3, 2), (4, 5, 4), (5, 1, 6)],
//!     &[("Grizz", 1), ("Ice", 3)],
//! )
//! .unwrap();
//!
//! let pickup = PickupPlanner::new(&map).plan(LocationId(2), LocationId(5)).unwrap();
//! assert_eq!(pickup.total_time, 5);
//! assert_eq!(pickup.friend, "Ice");
//! assert_eq!(pickup.location, LocationId(4));
//! ```

pub mod error;
pub mod planner;

#[cfg(test)]
mod tests;

pub use error::{PlanError, PlanResult};
pub use planner::{plan, Candidate, Pickup, PickupPlanner};
