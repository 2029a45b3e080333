//! `ev-grid` — the shared grid state model.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`grid`]    | `Grid`, `CellState`                                         |
//! | [`builder`] | `GridBuilder` (border walls, exits, obstacles)              |
//! | [`error`]   | `GridError`, `GridResult<T>`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod builder;
pub mod error;
pub mod grid;


pub use builder::GridBuilder;
pub use error::{GridError, GridResult};
pub use grid::{CellState, Grid};
