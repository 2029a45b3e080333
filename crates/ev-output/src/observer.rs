//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use ev_core::Tick;
use ev_sim::{AgentOutcome, EvacReport, SimObserver, SimulationState, TickReport};

use crate::row::{AgentSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes agent snapshots and tick summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, report: &TickReport) {
        let already_out = report
            .outcomes
            .iter()
            .filter(|(_, o)| matches!(o, AgentOutcome::OnExit))
            .count();
        let active = report
            .outcomes
            .len()
            .saturating_sub(already_out + report.newly_evacuated.len());

        let row = TickSummaryRow {
            tick:             tick.0,
            active_agents:    active as u64,
            evacuated_agents: report.newly_evacuated.len() as u64,
            moved_agents:     report.moved_count() as u64,
            panicked_agents:  report.panic_count() as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, state: &SimulationState) {
        let rows: Vec<AgentSnapshotRow> = state
            .agents
            .iter()
            .map(|(id, agent)| AgentSnapshotRow {
                agent_id:  id.0,
                tick:      tick.0,
                row:       agent.position.row,
                col:       agent.position.col,
                speed:     agent.speed,
                evacuated: agent.evacuated,
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick, _report: &EvacReport) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
