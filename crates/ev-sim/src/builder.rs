//! Fluent builder for constructing a [`Sim`].

use ev_agent::AgentStore;
use ev_core::{SimConfig, SimRng, Tick};
use ev_grid::Grid;
use ev_path::{AStarPathFinder, PathFinder};

use crate::{Sim, SimResult, SimulationState, StepEngine};

/// Fluent builder for [`Sim<P>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — seed, panic probability, tick cap, policies
/// - [`Grid`] with agents already placed (see [`ev_agent::AgentStoreBuilder`])
/// - [`AgentStore`]
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                                          |
/// |---------------------|--------------------------------------------------|
/// | `.path_finder(p)`   | `AStarPathFinder::new(config.exit_target)`       |
/// | `.rng(r)`           | `SimRng::new(config.seed)`                       |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, grid, agents)
///     .rng(root.child(1))
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<P: PathFinder = AStarPathFinder> {
    config: SimConfig,
    grid:   Grid,
    agents: AgentStore,
    finder: P,
    rng:    Option<SimRng>,
}

impl SimBuilder<AStarPathFinder> {
    /// Create a builder using the default A* path finder.
    pub fn new(config: SimConfig, grid: Grid, agents: AgentStore) -> Self {
        let finder = AStarPathFinder::new(config.exit_target);
        Self { config, grid, agents, finder, rng: None }
    }
}

impl<P: PathFinder> SimBuilder<P> {
    /// Replace the path finder.
    pub fn path_finder<Q: PathFinder>(self, finder: Q) -> SimBuilder<Q> {
        SimBuilder {
            config: self.config,
            grid:   self.grid,
            agents: self.agents,
            finder,
            rng:    self.rng,
        }
    }

    /// Supply the RNG used for panic draws.
    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Validate the configuration and the grid/agent occupancy, and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<P>> {
        self.config.validate()?;

        let state = SimulationState::new(self.grid, self.agents);
        state.verify_occupancy()?;

        let rng = self.rng.unwrap_or_else(|| SimRng::new(self.config.seed));
        let engine = StepEngine::new(
            self.finder,
            self.config.panic_probability,
            self.config.arrival,
        );

        Ok(Sim {
            config: self.config,
            clock:  Tick::ZERO,
            state,
            engine,
            rng,
        })
    }
}
