//! Error types for the sandbox engine.
//!
//! Nothing on the tick path fails. These cover host input that a caller may
//! want to tell apart from a successful mutation; all of them are
//! recoverable at the call site.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    /// Coordinate outside the grid; the operation did nothing.
    #[error("cell ({x}, {y}) is outside the grid")]
    OutOfBounds { x: i32, y: i32 },

    /// Unknown catalog key supplied by the host.
    #[error("unknown material: {0}")]
    InvalidMaterialKind(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
