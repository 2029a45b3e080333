//! Fluent construction of a [`Grid`].
//!
//! # Usage
//!
//! ```rust
//! use ev_core::Cell;
//! use ev_grid::{CellState, GridBuilder};
//!
//! let mut b = GridBuilder::new(5, 5);
//! b.add_exit(Cell::new(4, 2)).unwrap();
//! b.add_obstacle(Cell::new(2, 2)).unwrap();
//! let grid = b.build().unwrap();
//!
//! assert_eq!(grid.state(Cell::new(0, 0)).unwrap(), CellState::Blocked);
//! assert!(grid.is_exit(Cell::new(4, 2)));
//! ```

use std::ops::RangeInclusive;

use ev_core::{Cell, SimRng};

use crate::{CellState, Grid, GridError, GridResult};

/// Builder for [`Grid`].
///
/// The outer border is laid as `Blocked` on construction.  Exits may be
/// punched through the border (or placed anywhere inside); obstacles never
/// overwrite an exit.
pub struct GridBuilder {
    rows:  u32,
    cols:  u32,
    cells: Vec<CellState>,
    exits: Vec<Cell>,
}

impl GridBuilder {
    /// Create a `rows × cols` grid with a blocked border and open interior.
    pub fn new(rows: u32, cols: u32) -> Self {
        let mut cells = vec![CellState::Open; rows as usize * cols as usize];
        for r in 0..rows {
            for c in 0..cols {
                if r == 0 || c == 0 || r + 1 == rows || c + 1 == cols {
                    cells[r as usize * cols as usize + c as usize] = CellState::Blocked;
                }
            }
        }
        Self { rows, cols, cells, exits: Vec::new() }
    }

    /// Designate `cell` as an exit.  Adding the same exit twice is a no-op;
    /// the first insertion fixes its position in the exit order.
    pub fn add_exit(&mut self, cell: Cell) -> GridResult<&mut Self> {
        let i = self.index_of(cell)?;
        if self.cells[i] != CellState::Exit {
            self.cells[i] = CellState::Exit;
            self.exits.push(cell);
        }
        Ok(self)
    }

    /// Block `cell`.  Returns whether the cell was changed (exits are kept).
    pub fn add_obstacle(&mut self, cell: Cell) -> GridResult<bool> {
        let i = self.index_of(cell)?;
        if self.cells[i] == CellState::Exit {
            return Ok(false);
        }
        self.cells[i] = CellState::Blocked;
        Ok(true)
    }

    /// Drop `count` obstacles at uniformly random cells within the given row
    /// and column ranges.  Repeated draws may land on the same cell.
    ///
    /// Returns the number of draws that changed a cell's state, or
    /// `EmptyRange` when either range is empty and `count > 0`.
    pub fn scatter_obstacles(
        &mut self,
        count: usize,
        rows:  RangeInclusive<u32>,
        cols:  RangeInclusive<u32>,
        rng:   &mut SimRng,
    ) -> GridResult<usize> {
        if count > 0 && (rows.is_empty() || cols.is_empty()) {
            return Err(GridError::EmptyRange {
                rows: (*rows.start(), *rows.end()),
                cols: (*cols.start(), *cols.end()),
            });
        }
        let mut placed = 0;
        for _ in 0..count {
            let cell = Cell::new(rng.gen_range(rows.clone()), rng.gen_range(cols.clone()));
            let i = self.index_of(cell)?;
            if self.cells[i] == CellState::Open {
                placed += 1;
            }
            self.add_obstacle(cell)?;
        }
        Ok(placed)
    }

    /// Validate and produce the grid.
    pub fn build(self) -> GridResult<Grid> {
        if self.rows < 3 || self.cols < 3 {
            return Err(GridError::TooSmall { rows: self.rows, cols: self.cols });
        }
        if self.exits.is_empty() {
            return Err(GridError::NoExit);
        }
        Ok(Grid {
            rows:  self.rows,
            cols:  self.cols,
            cells: self.cells,
            exits: self.exits,
        })
    }

    fn index_of(&self, cell: Cell) -> GridResult<usize> {
        if cell.row < self.rows && cell.col < self.cols {
            Ok(cell.row as usize * self.cols as usize + cell.col as usize)
        } else {
            Err(GridError::OutOfBounds { cell, rows: self.rows, cols: self.cols })
        }
    }
}
