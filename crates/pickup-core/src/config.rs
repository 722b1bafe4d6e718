//! Construction and routing configuration.
//!
//! Plain structs with `Default` impls and by-value setters.  The defaults
//! give the standard behaviour: friends propagate up to two track hops, the
//! proximity table is relaxed to a fixed point, and shortest-path runs with a
//! target stop early at dead-end targets.

use crate::{CoreError, CoreResult};

// ── Propagation ───────────────────────────────────────────────────────────────

/// How friend proximity is relaxed over the track list.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Propagation {
    /// Repeat full passes over every track until no entry changes.
    #[default]
    FixedPoint,
    /// Exactly `n` full passes.  `Passes(max_track_hops + 1)` always reaches
    /// the same table as `FixedPoint`.
    Passes(u32),
}

// ── NetworkConfig ─────────────────────────────────────────────────────────────

/// Parameters for building a city map.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkConfig {
    /// A friend at this many hops never propagates further.  Default: 2.
    pub max_track_hops: u8,
    /// Track relaxation strategy.  Default: [`Propagation::FixedPoint`].
    pub propagation: Propagation,
}

impl NetworkConfig {
    pub fn with_max_track_hops(mut self, hops: u8) -> Self {
        self.max_track_hops = hops;
        self
    }

    pub fn with_propagation(mut self, propagation: Propagation) -> Self {
        self.propagation = propagation;
        self
    }

    /// Reject configurations that cannot produce a proximity table.
    pub fn validate(&self) -> CoreResult<()> {
        if self.propagation == Propagation::Passes(0) {
            return Err(CoreError::Config(
                "Propagation::Passes needs at least one pass".into(),
            ));
        }
        Ok(())
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self { max_track_hops: 2, propagation: Propagation::FixedPoint }
    }
}

// ── RouterConfig ──────────────────────────────────────────────────────────────

/// Parameters for shortest-path queries.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouterConfig {
    /// Stop draining the queue once the target is extracted, if the target
    /// is a dead end (exactly one adjacency entry).  Never changes the
    /// returned path or cost.  Default: `true`.
    pub early_exit_on_leaf: bool,
}

impl RouterConfig {
    pub fn with_early_exit_on_leaf(mut self, enabled: bool) -> Self {
        self.early_exit_on_leaf = enabled;
        self
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self { early_exit_on_leaf: true }
    }
}
