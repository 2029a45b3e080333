//! The step engine: what one tick does to the grid and the agents.

use ev_agent::Agent;
use ev_core::{AgentId, ArrivalPolicy, Cell, Direction, RandomSource};
use ev_grid::Grid;
use ev_path::PathFinder;
use tracing::{debug, trace, warn};

use crate::SimulationState;

// ── Per-agent outcomes ────────────────────────────────────────────────────────

/// Why an agent did not move this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldReason {
    /// The path finder returned an empty route.
    NoRoute,
    /// The route is no longer than the agent's speed and the arrival policy
    /// is [`ArrivalPolicy::HoldShort`].
    WithinReach,
    /// The grid refused the occupancy commit.
    Rejected,
}

/// What happened to one agent during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentOutcome {
    /// The agent was already standing on an exit and was skipped.
    OnExit,
    /// Random single step taken instead of routing.
    Panicked { from: Cell, to: Cell, direction: Direction },
    /// Moved along the computed route.
    Advanced { from: Cell, to: Cell, steps: usize },
    Held(HoldReason),
}

impl AgentOutcome {
    /// Destination cell for moves, `None` otherwise.
    pub fn moved_to(&self) -> Option<Cell> {
        match *self {
            AgentOutcome::Panicked { to, .. } | AgentOutcome::Advanced { to, .. } => Some(to),
            _ => None,
        }
    }
}

/// Everything the engine did during one tick.
#[derive(Debug, Clone, Default)]
pub struct TickReport {
    /// One entry per agent, in processing order.
    pub outcomes: Vec<(AgentId, AgentOutcome)>,
    /// Agents that stepped onto an exit this tick.
    pub newly_evacuated: Vec<AgentId>,
    /// `true` while some agent is still off the exits.
    pub any_active: bool,
}

impl TickReport {
    /// Number of agents that changed cell this tick.
    pub fn moved_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, o)| o.moved_to().is_some())
            .count()
    }

    /// Number of agents that took a panic step this tick.
    pub fn panic_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, AgentOutcome::Panicked { .. }))
            .count()
    }
}

// ── StepEngine ────────────────────────────────────────────────────────────────

/// Resolves one tick for every agent.
///
/// Holds only configuration; all mutable state arrives through
/// [`SimulationState`] and all randomness through a [`RandomSource`].
pub struct StepEngine<P: PathFinder> {
    pub finder: P,

    /// Probability that an agent attempts a panic step on a given tick.
    pub panic_probability: f64,

    pub arrival: ArrivalPolicy,
}

impl<P: PathFinder> StepEngine<P> {
    pub fn new(finder: P, panic_probability: f64, arrival: ArrivalPolicy) -> Self {
        Self { finder, panic_probability, arrival }
    }

    /// Advance every agent by one tick.  Returns whether any agent is still
    /// off the exits afterwards.
    pub fn step<R: RandomSource + ?Sized>(&self, state: &mut SimulationState, rng: &mut R) -> bool {
        self.tick(state, rng).any_active
    }

    /// Like [`step`](Self::step) but reports each agent's outcome.
    pub fn tick<R: RandomSource + ?Sized>(
        &self,
        state: &mut SimulationState,
        rng:   &mut R,
    ) -> TickReport {
        let SimulationState { grid, agents } = state;

        let mut outcomes        = Vec::with_capacity(agents.len());
        let mut newly_evacuated = Vec::new();

        for (i, agent) in agents.agents.iter_mut().enumerate() {
            let id = AgentId(i as u32);
            let outcome = self.advance_agent(id, grid, agent, rng);

            if agent.is_active() && grid.is_exit(agent.position) {
                agent.mark_evacuated();
                newly_evacuated.push(id);
                debug!(agent = %id, exit = %agent.position, "agent evacuated");
            }
            outcomes.push((id, outcome));
        }

        let any_active = agents.agents.iter().any(|a| !grid.is_exit(a.position));
        TickReport { outcomes, newly_evacuated, any_active }
    }

    fn advance_agent<R: RandomSource + ?Sized>(
        &self,
        id:    AgentId,
        grid:  &mut Grid,
        agent: &mut Agent,
        rng:   &mut R,
    ) -> AgentOutcome {
        let from = agent.position;
        if grid.is_exit(from) {
            return AgentOutcome::OnExit;
        }

        // ── Panic branch ──────────────────────────────────────────────────
        if rng.chance(self.panic_probability) {
            let direction = Direction::ALL[rng.pick(Direction::ALL.len())];
            if let Some(to) = from.step(direction).filter(|&c| grid.is_passable(c)) {
                if grid.relocate(from, to).is_ok() {
                    agent.advance_to(to);
                    trace!(agent = %id, %from, %to, ?direction, "panic step");
                    return AgentOutcome::Panicked { from, to, direction };
                }
            }
            // Rejected panic steps fall through to routing.
            trace!(agent = %id, %from, ?direction, "panic step rejected");
        }

        // ── Route branch ──────────────────────────────────────────────────
        let route = self.finder.find_route(from, grid, grid.exits());
        let speed = agent.speed as usize;
        let steps = match self.arrival {
            ArrivalPolicy::HoldShort if route.len() > speed => speed,
            ArrivalPolicy::HoldShort                        => 0,
            ArrivalPolicy::WalkRemaining                    => speed.min(route.len()),
        };

        let Some(to) = route.after(steps) else {
            let reason = if route.is_empty() { HoldReason::NoRoute } else { HoldReason::WithinReach };
            trace!(agent = %id, %from, route_len = route.len(), ?reason, "holding");
            return AgentOutcome::Held(reason);
        };

        if let Err(e) = grid.relocate(from, to) {
            warn!(agent = %id, %from, %to, error = %e, "route step rejected by grid");
            return AgentOutcome::Held(HoldReason::Rejected);
        }
        agent.advance_to(to);
        AgentOutcome::Advanced { from, to, steps }
    }
}
