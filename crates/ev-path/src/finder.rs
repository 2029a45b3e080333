//! Path finder trait and default A* implementation.
//!
//! # Pluggability
//!
//! The step engine calls search through the [`PathFinder`] trait, so
//! applications can swap in other strategies (flow fields, congestion-aware
//! search) without touching the engine.
//!
//! # Heuristic
//!
//! [`AStarPathFinder`] uses the Manhattan distance to the **first** exit in
//! the exit list, whatever the number of exits.  The search still stops at
//! whichever exit cell it dequeues first.  With several exits the heuristic
//! is therefore not admissible for the other exits, and the route found is
//! shortest only with respect to the exit that was reached.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ev_core::{Cell, ExitTarget};
use ev_grid::Grid;

use crate::Route;

/// Predecessor sentinel for cells not yet reached.
const NO_PREV: usize = usize::MAX;

// ── PathFinder trait ──────────────────────────────────────────────────────────

/// Pluggable route search.
///
/// Implementations must not mutate the grid and must hold no state across
/// calls that would change results.  `Send + Sync` so a finder can be shared
/// with worker threads doing read-only searches.
pub trait PathFinder: Send + Sync {
    /// Compute a route from `start` to an exit.
    ///
    /// Returns an empty route if `start` is an exit or no exit is reachable.
    fn find_route(&self, start: Cell, grid: &Grid, exits: &[Cell]) -> Route;
}

// ── AStarPathFinder ───────────────────────────────────────────────────────────

/// Best-first search with `f = g + manhattan(cell, exits[0])`.
///
/// Only cells for which [`Grid::is_passable`] holds are entered; the start
/// cell is always expanded even though the searching agent occupies it.
/// Ties on `f` are broken by insertion order, so results are deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStarPathFinder {
    pub exit_target: ExitTarget,
}

impl AStarPathFinder {
    pub fn new(exit_target: ExitTarget) -> Self {
        Self { exit_target }
    }
}

impl PathFinder for AStarPathFinder {
    fn find_route(&self, start: Cell, grid: &Grid, exits: &[Cell]) -> Route {
        astar(grid, start, exits, self.exit_target)
    }
}

// ── A* internals ──────────────────────────────────────────────────────────────

fn astar(grid: &Grid, start: Cell, exits: &[Cell], target: ExitTarget) -> Route {
    let Some(start_idx) = grid.index_of(start) else {
        return Route::empty();
    };

    let goal = exits.first().copied();
    let heuristic = |cell: Cell| goal.map_or(0, |g| cell.manhattan(g));

    let n = grid.len();
    // best[v] = fewest steps known to reach v.
    let mut best = vec![u32::MAX; n];
    // prev[v] = flat index of the cell v was reached from.
    let mut prev = vec![NO_PREV; n];
    best[start_idx] = 0;

    // Min-heap on (f, seq).  `seq` grows with every push, so equal-f entries
    // pop in insertion order.  `g` rides along to detect stale entries.
    let mut seq: u64 = 0;
    let mut heap: BinaryHeap<Reverse<(u32, u64, u32, usize)>> = BinaryHeap::new();
    heap.push(Reverse((heuristic(start), seq, 0, start_idx)));

    let mut reached = None;
    while let Some(Reverse((_f, _seq, g, idx))) = heap.pop() {
        if g > best[idx] {
            continue;
        }

        let cell = grid.cell_at(idx);
        if grid.is_exit(cell) {
            reached = Some(idx);
            break;
        }

        for neighbor in grid.neighbors4(cell) {
            if !grid.is_passable(neighbor) {
                continue;
            }
            let Some(ni) = grid.index_of(neighbor) else { continue };
            let new_g = g + 1;
            if new_g < best[ni] {
                best[ni] = new_g;
                prev[ni] = idx;
                seq += 1;
                heap.push(Reverse((new_g + heuristic(neighbor), seq, new_g, ni)));
            }
        }
    }

    let end = match target {
        ExitTarget::Reached     => reached,
        ExitTarget::FirstListed => goal.and_then(|g| grid.index_of(g)),
    };
    match end {
        Some(end) => reconstruct(grid, &prev, end),
        None      => Route::empty(),
    }
}

/// Walk predecessor links back from `end` and reverse.  An `end` that was
/// never reached (or is the start itself) yields an empty route.
fn reconstruct(grid: &Grid, prev: &[usize], end: usize) -> Route {
    let mut cells = Vec::new();
    let mut cur = end;
    while prev[cur] != NO_PREV {
        cells.push(grid.cell_at(cur));
        cur = prev[cur];
    }
    cells.reverse();
    Route { cells }
}
