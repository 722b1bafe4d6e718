//! `pickup-network` — city map, friend proximity, and routing.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`network`]   | `CityMap` (CSR roads + proximity), `CityMapBuilder`      |
//! | [`proximity`] | `ProximityTable`, `Proximity`, `FriendRegistry`          |
//! | [`router`]    | `Router` trait, `DijkstraRouter`, `ShortestPaths`, `Route` |
//! | [`loader`]    | CSV loading of roads, tracks, and friends                |
//! | [`error`]     | `NetworkError`, `NetworkResult<T>`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `pickup-core` types.    |

pub mod error;
pub mod loader;
pub mod network;
pub mod proximity;
pub mod router;


pub use error::{NetworkError, NetworkResult};
pub use loader::{load_city_dir, load_friends_reader, load_roads_reader, load_tracks_reader};
pub use network::{CityMap, CityMapBuilder, Road, Track};
pub use proximity::{FriendRegistry, Proximity, ProximityTable};
pub use router::{DijkstraRouter, Route, Router, ShortestPaths};
