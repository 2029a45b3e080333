//! Run configuration and movement policies.
//!
//! `SimConfig` is a plain value: applications build it in code or load it
//! from JSON (with the `serde` feature) and hand it to the simulation runner.

use crate::{EvacError, EvacResult};

// ── Policies ──────────────────────────────────────────────────────────────────

/// What an agent does when its remaining route is no longer than its speed.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ArrivalPolicy {
    /// Hold position whenever `route.len() <= speed`.  Route-following never
    /// lands on an exit under this policy; agents reach exits only through a
    /// panic step.
    #[default]
    HoldShort,

    /// Move `min(speed, route.len())` cells, stepping onto the exit when it
    /// is within reach.
    WalkRemaining,
}

/// Which exit the path finder reconstructs its route from.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ExitTarget {
    /// Walk predecessors back from the exit cell that terminated the search.
    #[default]
    Reached,

    /// Walk predecessors back from `exits[0]` regardless of which exit
    /// terminated the search.  Yields an empty or non-shortest route when a
    /// different exit was dequeued first.
    FirstListed,
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Probability in `[0, 1]` that an agent attempts a random step instead
    /// of following its route on a given tick.
    pub panic_probability: f64,

    /// Hard cap on ticks executed by `Sim::run`.  Guards against scenarios
    /// in which some agent can never reach an exit.
    pub max_ticks: u64,

    /// Emit an observer snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,

    pub arrival: ArrivalPolicy,

    pub exit_target: ExitTarget,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed:                  42,
            panic_probability:     0.2,
            max_ticks:             10_000,
            output_interval_ticks: 1,
            arrival:               ArrivalPolicy::default(),
            exit_target:           ExitTarget::default(),
        }
    }
}

impl SimConfig {
    /// Reject values the step engine cannot work with.
    pub fn validate(&self) -> EvacResult<()> {
        if !(0.0..=1.0).contains(&self.panic_probability) {
            return Err(EvacError::Config(format!(
                "panic_probability must be within [0, 1], got {}",
                self.panic_probability
            )));
        }
        if self.max_ticks == 0 {
            return Err(EvacError::Config("max_ticks must be positive".into()));
        }
        Ok(())
    }
}
