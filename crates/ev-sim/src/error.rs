use ev_agent::AgentError;
use ev_core::{Cell, EvacError};
use ev_grid::{CellState, GridError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] EvacError),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("agent error: {0}")]
    Agent(#[from] AgentError),

    #[error("occupancy mismatch at {cell}: {agents} active agent(s) on a {state:?} cell")]
    Occupancy {
        cell:   Cell,
        agents: usize,
        state:  CellState,
    },
}

pub type SimResult<T> = Result<T, SimError>;
