//! `ev-agent` — per-agent state and its storage.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`agent`]   | `Agent` (position, speed, evacuated flag)                 |
//! | [`store`]   | `AgentStore` — agents indexed by `AgentId`                |
//! | [`builder`] | `AgentStoreBuilder` — explicit and random placement       |
//! | [`error`]   | `AgentError`, `AgentResult<T>`                            |

pub mod agent;
pub mod builder;
pub mod error;
pub mod store;


pub use agent::Agent;
pub use builder::AgentStoreBuilder;
pub use error::{AgentError, AgentResult};
pub use store::AgentStore;
