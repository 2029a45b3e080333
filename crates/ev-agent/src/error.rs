use ev_core::Cell;
use ev_grid::{CellState, GridError};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AgentError {
    #[error("agent speed must be positive")]
    ZeroSpeed,

    #[error("random placement needs at least one speed to choose from")]
    NoSpeeds,

    #[error("cannot place an agent on {cell}: cell is {state:?}")]
    CellNotOpen { cell: Cell, state: CellState },

    #[error("requested {requested} randomly placed agents but only {available} open interior cells remain")]
    NotEnoughOpenCells { requested: usize, available: usize },

    #[error("grid error: {0}")]
    Grid(#[from] GridError),
}

pub type AgentResult<T> = Result<T, AgentError>;
