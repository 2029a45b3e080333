//! Plain data row types written by output backends.

/// One agent's position at a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentSnapshotRow {
    pub agent_id:  u32,
    pub tick:      u64,
    pub row:       u32,
    pub col:       u32,
    pub speed:     u32,
    pub evacuated: bool,
}

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:             u64,
    /// Agents still off the exits after the tick.
    pub active_agents:    u64,
    /// Agents that reached an exit during the tick.
    pub evacuated_agents: u64,
    pub moved_agents:     u64,
    pub panicked_agents:  u64,
}
