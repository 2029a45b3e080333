//! Grid representation.
//!
//! # Data layout
//!
//! Cell states are stored row-major in a flat `Vec<CellState>`:
//!
//! ```text
//! cells[ row * cols + col ]
//! ```
//!
//! The exit list is kept separately, in the order exits were added, because
//! the path finder's heuristic always targets `exits[0]`.
//!
//! # Occupancy
//!
//! `Occupied` overlays `Open` only.  Exit cells absorb agents: occupying an
//! exit leaves it `Exit`, so any number of evacuees can stand on it and it
//! stays passable for everyone else.

use std::fmt;

use ev_core::{Cell, Direction};

use crate::{GridError, GridResult};

// ── CellState ─────────────────────────────────────────────────────────────────

/// Classification of a single cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Open,
    Blocked,
    Exit,
    Occupied,
}

impl CellState {
    /// Glyph used by the text renderer.
    #[inline]
    pub fn glyph(self) -> char {
        match self {
            CellState::Open     => '.',
            CellState::Blocked  => '#',
            CellState::Exit     => 'E',
            CellState::Occupied => '@',
        }
    }
}

// ── Grid ──────────────────────────────────────────────────────────────────────

/// Fixed-size rectangular field of cell states.
///
/// Do not construct directly; use [`GridBuilder`][crate::GridBuilder], which
/// enforces the border and at-least-one-exit invariants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    pub(crate) rows:  u32,
    pub(crate) cols:  u32,
    pub(crate) cells: Vec<CellState>,
    pub(crate) exits: Vec<Cell>,
}

impl Grid {
    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells (`rows * cols`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Flat row-major index of `cell`, or `None` when out of bounds.
    #[inline]
    pub fn index_of(&self, cell: Cell) -> Option<usize> {
        self.in_bounds(cell)
            .then(|| cell.row as usize * self.cols as usize + cell.col as usize)
    }

    /// Inverse of [`index_of`](Self::index_of).
    #[inline]
    pub fn cell_at(&self, index: usize) -> Cell {
        let cols = self.cols as usize;
        Cell::new((index / cols) as u32, (index % cols) as u32)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// State of `cell`, or `OutOfBounds`.
    pub fn state(&self, cell: Cell) -> GridResult<CellState> {
        self.index_of(cell)
            .map(|i| self.cells[i])
            .ok_or_else(|| self.out_of_bounds(cell))
    }

    /// `true` iff `cell` is in bounds and `Open` or `Exit`.
    #[inline]
    pub fn is_passable(&self, cell: Cell) -> bool {
        matches!(
            self.index_of(cell).map(|i| self.cells[i]),
            Some(CellState::Open | CellState::Exit)
        )
    }

    #[inline]
    pub fn is_exit(&self, cell: Cell) -> bool {
        matches!(self.index_of(cell).map(|i| self.cells[i]), Some(CellState::Exit))
    }

    /// In-bounds orthogonal neighbours of `cell` in [`Direction::ALL`] order.
    ///
    /// No allocation; passability is not checked.
    pub fn neighbors4(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| cell.step(dir))
            .filter(|&n| self.in_bounds(n))
    }

    /// Exit cells in the order they were added.
    pub fn exits(&self) -> &[Cell] {
        &self.exits
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }

    /// Iterator over every `(Cell, CellState)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &s)| (self.cell_at(i), s))
    }

    // ── Occupancy mutation ────────────────────────────────────────────────

    /// Mark `cell` as holding an agent.
    ///
    /// `Open` becomes `Occupied`; `Exit` and `Occupied` are left unchanged.
    pub fn set_occupied(&mut self, cell: Cell) -> GridResult<()> {
        let i = self.index_of(cell).ok_or_else(|| self.out_of_bounds(cell))?;
        match self.cells[i] {
            CellState::Open => self.cells[i] = CellState::Occupied,
            CellState::Blocked => return Err(GridError::Blocked(cell)),
            CellState::Exit | CellState::Occupied => {}
        }
        Ok(())
    }

    /// Release `cell` after its agent moved away.
    ///
    /// `Occupied` becomes `Open`; every other state is left unchanged.
    pub fn clear_occupied(&mut self, cell: Cell) -> GridResult<()> {
        let i = self.index_of(cell).ok_or_else(|| self.out_of_bounds(cell))?;
        if self.cells[i] == CellState::Occupied {
            self.cells[i] = CellState::Open;
        }
        Ok(())
    }

    /// Move one agent's occupancy from `from` to `to`.
    ///
    /// Both cells are validated before anything is written, so a failed
    /// call leaves the grid untouched.
    pub fn relocate(&mut self, from: Cell, to: Cell) -> GridResult<()> {
        self.state(from)?;
        if self.state(to)? == CellState::Blocked {
            return Err(GridError::Blocked(to));
        }
        self.clear_occupied(from)?;
        self.set_occupied(to)
    }

    fn out_of_bounds(&self, cell: Cell) -> GridError {
        GridError::OutOfBounds { cell, rows: self.rows, cols: self.cols }
    }
}

impl fmt::Display for Grid {
    /// One text line per row: `#` blocked, `E` exit, `@` occupied, `.` open.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols as usize) {
            let line: String = row.iter().map(|s| s.glyph()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
