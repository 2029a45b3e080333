//! `ev-path` — shortest-route search from an agent's cell to an exit.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`route`]  | `Route`                                                     |
//! | [`finder`] | `PathFinder` trait, `AStarPathFinder`                       |
//!
//! Search never fails with an error: an unreachable exit is reported as an
//! empty [`Route`], which callers treat as "hold position this tick".

pub mod finder;
pub mod route;


pub use finder::{AStarPathFinder, PathFinder};
pub use route::Route;
