//! Base error type.
//!
//! Sub-crates define their own error enums and wrap `EvacError` via `From`
//! where configuration problems can surface.

use thiserror::Error;

/// The top-level error type for `ev-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum EvacError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `ev-core`.
pub type EvacResult<T> = Result<T, EvacError>;
