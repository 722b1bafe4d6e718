//! `pickup-core` — foundational types for the pickup planner.
//!
//! This crate is a dependency of every other `pickup-*` crate.  It has no
//! `pickup-*` dependencies and minimal external ones (only `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`ids`]    | `LocationId`, `FriendId`                                  |
//! | [`cost`]   | `Cost`, `UNREACHABLE`                                     |
//! | [`heap`]   | `MinHeap`, the fixed-capacity binary heap used by routing |
//! | [`config`] | `NetworkConfig`, `Propagation`, `RouterConfig`            |
//! | [`error`]  | `CoreError`, `HeapError`, `CoreResult`                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids and config types.    |

pub mod config;
pub mod cost;
pub mod error;
pub mod heap;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{NetworkConfig, Propagation, RouterConfig};
pub use cost::{Cost, UNREACHABLE};
pub use error::{CoreError, CoreResult, HeapError};
pub use heap::MinHeap;
pub use ids::{FriendId, LocationId};
