//! Fluent builder for an [`AgentStore`] placed on a [`Grid`].
//!
//! # Usage
//!
//! ```rust
//! use ev_agent::AgentStoreBuilder;
//! use ev_core::{Cell, SimRng};
//! use ev_grid::GridBuilder;
//!
//! let mut b = GridBuilder::new(10, 10);
//! b.add_exit(Cell::new(9, 4)).unwrap();
//! let mut grid = b.build().unwrap();
//!
//! let mut rng = SimRng::new(42);
//! let store = AgentStoreBuilder::new()
//!     .with_agent(Cell::new(1, 1), 2)
//!     .random(5, &[1, 2])
//!     .build(&mut grid, &mut rng)
//!     .unwrap();
//!
//! assert_eq!(store.len(), 6);
//! ```

use ev_core::{Cell, SimRng};
use ev_grid::{CellState, Grid};

use crate::{Agent, AgentError, AgentResult, AgentStore};

/// Builder for [`AgentStore`].
///
/// Explicit agents are placed first, in call order, then the random
/// batches, also in call order.  Every placed agent marks its cell
/// `Occupied` on the grid.
#[derive(Default)]
pub struct AgentStoreBuilder {
    explicit: Vec<(Cell, u32)>,
    /// `(count, speeds)` per [`random`](Self::random) call.
    batches:  Vec<(usize, Vec<u32>)>,
}

impl AgentStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place one agent at `cell` with the given speed.
    pub fn with_agent(mut self, cell: Cell, speed: u32) -> Self {
        self.explicit.push((cell, speed));
        self
    }

    /// Add `count` agents on uniformly random open interior cells, each with
    /// a speed drawn uniformly from `speeds`.  Each call is a separate batch
    /// with its own speed list.
    pub fn random(mut self, count: usize, speeds: &[u32]) -> Self {
        if count > 0 {
            self.batches.push((count, speeds.to_vec()));
        }
        self
    }

    /// Validate, place every agent, and mark the grid.
    ///
    /// On error the grid may already hold some of the placed agents; callers
    /// are expected to discard it.
    pub fn build(self, grid: &mut Grid, rng: &mut SimRng) -> AgentResult<AgentStore> {
        let random_count: usize = self.batches.iter().map(|(n, _)| n).sum();
        let mut agents = Vec::with_capacity(self.explicit.len() + random_count);

        for (cell, speed) in self.explicit {
            if speed == 0 {
                return Err(AgentError::ZeroSpeed);
            }
            let state = grid.state(cell)?;
            if state != CellState::Open {
                return Err(AgentError::CellNotOpen { cell, state });
            }
            grid.set_occupied(cell)?;
            agents.push(Agent::new(cell, speed));
        }

        if random_count > 0 {
            for (_, speeds) in &self.batches {
                if speeds.is_empty() {
                    return Err(AgentError::NoSpeeds);
                }
                if speeds.contains(&0) {
                    return Err(AgentError::ZeroSpeed);
                }
            }

            let mut candidates = open_interior(grid);
            if candidates.len() < random_count {
                return Err(AgentError::NotEnoughOpenCells {
                    requested: random_count,
                    available: candidates.len(),
                });
            }

            for (count, speeds) in &self.batches {
                for _ in 0..*count {
                    let cell = candidates.swap_remove(rng.gen_range(0..candidates.len()));
                    let speed = rng.choose(speeds).copied().ok_or(AgentError::NoSpeeds)?;
                    grid.set_occupied(cell)?;
                    agents.push(Agent::new(cell, speed));
                }
            }
        }

        Ok(AgentStore::new(agents))
    }
}

/// Open cells strictly inside the border, in row-major order.
fn open_interior(grid: &Grid) -> Vec<Cell> {
    let (rows, cols) = (grid.rows(), grid.cols());
    grid.iter()
        .filter(|&(c, s)| {
            s == CellState::Open
                && c.row > 0 && c.col > 0
                && c.row + 1 < rows && c.col + 1 < cols
        })
        .map(|(c, _)| c)
        .collect()
}
