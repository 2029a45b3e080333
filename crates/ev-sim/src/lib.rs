//! `ev-sim` — step engine and tick loop for the rust_evac simulator.
//!
//! # One tick
//!
//! ```text
//! for agent in ascending AgentId order:
//!   ① On an exit?  → skip (already evacuated).
//!   ② Panic draw   → random orthogonal step if the target is passable;
//!                    a rejected step falls through to ③.
//!   ③ Route        → A* to an exit; advance `speed` cells when the route
//!                    is longer than `speed`; shorter routes hold or are
//!                    walked to the end depending on `ArrivalPolicy`.
//!   ④ Commit       → clear old cell, occupy new cell, mark evacuees.
//! return any agent not yet on an exit
//! ```
//!
//! Agents are processed strictly in sequence.  A later agent sees every
//! occupancy change committed by earlier agents in the same tick, which is
//! what keeps two agents from entering the same cell.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ev_agent::AgentStoreBuilder;
//! use ev_core::{SimConfig, SimRng};
//! use ev_sim::{NoopObserver, SimBuilder};
//!
//! let store = AgentStoreBuilder::new().random(15, &[1, 2]).build(&mut grid, &mut rng)?;
//! let mut sim = SimBuilder::new(config, grid, store).build()?;
//! let report = sim.run(&mut NoopObserver)?;
//! println!("Total Evacuation Time: {} steps", report.ticks);
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod observer;
pub mod sim;
pub mod state;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use engine::{AgentOutcome, HoldReason, StepEngine, TickReport};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{EvacReport, Sim};
pub use state::SimulationState;
