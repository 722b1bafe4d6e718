//! Travel-time cost model.
//!
//! Road weights are non-negative integers, so costs are plain `u64`.  An
//! unreached location reads as [`UNREACHABLE`]; all additions on the routing
//! hot path saturate so `UNREACHABLE + w` stays `UNREACHABLE`.

/// Travel time along roads.
pub type Cost = u64;

/// Distance of a location that has not been reached.
pub const UNREACHABLE: Cost = Cost::MAX;

/// `true` if `cost` denotes a reached location.
#[inline]
pub fn is_reachable(cost: Cost) -> bool {
    cost != UNREACHABLE
}
