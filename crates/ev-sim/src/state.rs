//! The mutable world of one run.

use ev_agent::AgentStore;
use ev_grid::{CellState, Grid, GridError};

use crate::{SimError, SimResult};

/// Grid plus agents, owned by the caller and lent to the step engine one
/// tick at a time.  There is no other mutable simulation state.
pub struct SimulationState {
    pub grid:   Grid,
    pub agents: AgentStore,
}

impl SimulationState {
    pub fn new(grid: Grid, agents: AgentStore) -> Self {
        Self { grid, agents }
    }

    /// `true` while at least one agent stands on a non-exit cell.
    pub fn any_active(&self) -> bool {
        self.agents
            .agents
            .iter()
            .any(|a| !self.grid.is_exit(a.position))
    }

    /// Check that every `Occupied` cell holds exactly one agent and every
    /// agent off the exits stands on an `Occupied` cell of its own.
    pub fn verify_occupancy(&self) -> SimResult<()> {
        let grid = &self.grid;
        let mut counts = vec![0usize; grid.len()];

        for agent in &self.agents.agents {
            if grid.is_exit(agent.position) {
                continue;
            }
            let i = grid.index_of(agent.position).ok_or(GridError::OutOfBounds {
                cell: agent.position,
                rows: grid.rows(),
                cols: grid.cols(),
            })?;
            counts[i] += 1;
        }

        for ((cell, state), &agents) in grid.iter().zip(&counts) {
            let consistent = match state {
                CellState::Occupied => agents == 1,
                CellState::Exit     => true,
                _                   => agents == 0,
            };
            if !consistent {
                return Err(SimError::Occupancy { cell, agents, state });
            }
        }
        Ok(())
    }
}
