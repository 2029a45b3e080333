//! Simulation observer trait for progress reporting and data collection.

use ev_core::Tick;

use crate::{EvacReport, SimulationState, TickReport};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — pause/quit gate
///
/// ```rust,ignore
/// struct StopAfter { limit: u64, seen: u64 }
///
/// impl SimObserver for StopAfter {
///     fn on_tick_end(&mut self, _tick: Tick, _report: &TickReport) {
///         self.seen += 1;
///     }
///     fn should_stop(&mut self) -> bool {
///         self.seen >= self.limit
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with every agent's outcome.
    fn on_tick_end(&mut self, _tick: Tick, _report: &TickReport) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks) with read-only access to the grid and agents.
    fn on_snapshot(&mut self, _tick: Tick, _state: &SimulationState) {}

    /// Polled before every tick.  Returning `true` ends the run early.
    fn should_stop(&mut self) -> bool {
        false
    }

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick, _report: &EvacReport) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
