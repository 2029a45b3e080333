//! Grid error type.

use thiserror::Error;

use ev_core::Cell;

/// Errors produced by `ev-grid`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("cell {cell} is outside the {rows}x{cols} grid")]
    OutOfBounds { cell: Cell, rows: u32, cols: u32 },

    #[error("cell {0} is blocked and cannot hold an agent")]
    Blocked(Cell),

    #[error("grid must be at least 3x3, got {rows}x{cols}")]
    TooSmall { rows: u32, cols: u32 },

    #[error("grid has no exit cell")]
    NoExit,

    #[error("obstacle band rows {rows:?} x cols {cols:?} is empty")]
    EmptyRange { rows: (u32, u32), cols: (u32, u32) },
}

pub type GridResult<T> = Result<T, GridError>;
