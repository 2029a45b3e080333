//! Grid coordinates and orthogonal movement.
//!
//! A `Cell` is a `(row, col)` pair of unsigned integers.  Row 0 is the top
//! edge of the grid.  Moves that would take a coordinate below zero return
//! `None`; the upper bound is the grid's business, not the cell's.

use std::fmt;

// ── Direction ─────────────────────────────────────────────────────────────────

/// One of the four orthogonal moves.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    /// All directions in canonical order.  Neighbour enumeration and panic
    /// draws both index into this array, so the order is part of the
    /// simulation's reproducibility contract.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// `(d_row, d_col)` offset of this direction.
    #[inline]
    pub fn offset(self) -> (i64, i64) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::West  => (0, -1),
            Direction::East  => (0, 1),
        }
    }
}

// ── Cell ──────────────────────────────────────────────────────────────────────

/// A single addressable grid position.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: u32,
    pub col: u32,
}

impl Cell {
    #[inline]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Manhattan (L1) distance, the A* heuristic on a 4-connected grid.
    #[inline]
    pub fn manhattan(self, other: Cell) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// The cell one step away in `dir`, or `None` if that would leave the
    /// non-negative quadrant.
    #[inline]
    pub fn step(self, dir: Direction) -> Option<Cell> {
        let (dr, dc) = dir.offset();
        let row = u32::try_from(self.row as i64 + dr).ok()?;
        let col = u32::try_from(self.col as i64 + dc).ok()?;
        Some(Cell { row, col })
    }

    /// `true` if `other` is exactly one orthogonal step away.
    #[inline]
    pub fn is_adjacent(self, other: Cell) -> bool {
        self.manhattan(other) == 1
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
