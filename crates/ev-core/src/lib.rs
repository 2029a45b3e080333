//! `ev-core` — foundational types for the `rust_evac` evacuation simulator.
//!
//! This crate is a dependency of every other `ev-*` crate.  It intentionally
//! has no `ev-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`cell`]        | `Cell`, `Direction`, Manhattan distance               |
//! | [`time`]        | `Tick`                                                |
//! | [`config`]      | `SimConfig`, `ArrivalPolicy`, `ExitTarget`            |
//! | [`rng`]         | `RandomSource` trait, `SimRng`                        |
//! | [`error`]       | `EvacError`, `EvacResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                              |
//! |---------|---------------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types (JSON scenarios). |

pub mod cell;
pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::{Cell, Direction};
pub use config::{ArrivalPolicy, ExitTarget, SimConfig};
pub use error::{EvacError, EvacResult};
pub use ids::AgentId;
pub use rng::{RandomSource, SimRng};
pub use time::Tick;
