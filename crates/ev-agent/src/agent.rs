//! Per-agent state.

use ev_core::Cell;

/// A single evacuee.
///
/// Agents carry no behaviour of their own: every transition is driven by
/// the step engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    /// Current cell.
    pub position: Cell,

    /// Cells advanced per tick when following a route.  Always positive.
    pub speed: u32,

    /// Set once the agent stands on an exit; never cleared.
    pub evacuated: bool,
}

impl Agent {
    #[inline]
    pub fn new(position: Cell, speed: u32) -> Self {
        Self { position, speed, evacuated: false }
    }

    #[inline]
    pub fn advance_to(&mut self, cell: Cell) {
        self.position = cell;
    }

    #[inline]
    pub fn mark_evacuated(&mut self) {
        self.evacuated = true;
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        !self.evacuated
    }
}
