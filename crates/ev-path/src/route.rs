//! The result of a path-finder query.

use ev_core::Cell;

/// Ordered cells from (but excluding) the start cell to an exit.
///
/// Consecutive cells are orthogonally adjacent and no cell repeats.  An
/// empty route means either the start already is an exit or no exit is
/// reachable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Route {
    pub cells: Vec<Cell>,
}

impl Route {
    pub fn empty() -> Self {
        Self { cells: Vec::new() }
    }

    /// Number of steps to the route's end.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cell reached after `steps` moves along the route (1-based), or
    /// `None` if the route is shorter than that or `steps == 0`.
    #[inline]
    pub fn after(&self, steps: usize) -> Option<Cell> {
        steps.checked_sub(1).and_then(|i| self.cells.get(i).copied())
    }

    /// Final cell of the route.
    #[inline]
    pub fn destination(&self) -> Option<Cell> {
        self.cells.last().copied()
    }
}
