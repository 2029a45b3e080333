//! The `Sim` struct and its tick loop.

use ev_core::{SimConfig, SimRng, Tick};
use ev_path::PathFinder;
use tracing::info;

use crate::{SimObserver, SimResult, SimulationState, StepEngine, TickReport};

// ── EvacReport ────────────────────────────────────────────────────────────────

/// Summary of a run (or of the run so far).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvacReport {
    /// Ticks executed.  This is the "total evacuation time" when `completed`.
    pub ticks: u64,
    pub evacuated: usize,
    pub remaining: usize,
    /// `true` when every agent stands on an exit.
    pub completed: bool,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation runner.
///
/// Owns the state, the engine, and the RNG, and drives `StepEngine::tick`
/// until every agent is out, `config.max_ticks` is reached, or an observer
/// asks to stop.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: PathFinder> {
    pub config: SimConfig,

    /// Next tick to execute; equals the number of ticks executed so far.
    pub clock: Tick,

    pub state: SimulationState,

    pub engine: StepEngine<P>,

    /// Source of every panic draw.  Seeded from `config.seed` unless the
    /// builder was given an explicit RNG.
    pub rng: SimRng,
}

impl<P: PathFinder> Sim<P> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until evacuation completes, `config.max_ticks` ticks have been
    /// executed in total, or `observer.should_stop()` returns `true`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<EvacReport> {
        while self.state.any_active()
            && self.clock.0 < self.config.max_ticks
            && !observer.should_stop()
        {
            self.run_one(observer)?;
        }

        let report = self.report();
        observer.on_sim_end(self.clock, &report);
        info!(
            ticks     = report.ticks,
            evacuated = report.evacuated,
            remaining = report.remaining,
            completed = report.completed,
            "simulation finished"
        );
        Ok(report)
    }

    /// Run up to `n` ticks from the current position, stopping early once
    /// every agent is out.  Ignores `max_ticks` and `should_stop`.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<EvacReport> {
        for _ in 0..n {
            if !self.state.any_active() {
                break;
            }
            self.run_one(observer)?;
        }
        Ok(self.report())
    }

    /// Snapshot of progress so far.
    pub fn report(&self) -> EvacReport {
        let remaining = self
            .state
            .agents
            .agents
            .iter()
            .filter(|a| !self.state.grid.is_exit(a.position))
            .count();
        EvacReport {
            ticks:     self.clock.0,
            evacuated: self.state.agents.len() - remaining,
            remaining,
            completed: remaining == 0,
        }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn run_one<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<TickReport> {
        let now = self.clock;

        observer.on_tick_start(now);
        let report = self.engine.tick(&mut self.state, &mut self.rng);
        if cfg!(debug_assertions) {
            self.state.verify_occupancy()?;
        }
        observer.on_tick_end(now, &report);

        let interval = self.config.output_interval_ticks;
        if interval > 0 && now.0.is_multiple_of(interval) {
            observer.on_snapshot(now, &self.state);
        }

        self.clock = now.next();
        Ok(report)
    }
}
