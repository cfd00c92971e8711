//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`TileHubError`]
//! via `#[from]` (no `String` variants). Adapter-specific errors cross the
//! port boundary boxed inside [`TileHubError::Transport`].

use std::error::Error;

/// Top-level error for tilehub operations.
#[derive(Debug, thiserror::Error)]
pub enum TileHubError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// No tile is registered under the requested id.
    #[error("tile not found")]
    NotFound(#[from] TileNotFound),

    /// The hub transport failed (connection, status, or decode).
    #[error("transport error")]
    Transport(#[source] Box<dyn Error + Send + Sync>),
}

/// Violated domain invariants.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Tile ids double as device ids on the hub and must not be empty.
    #[error("tile id must not be empty")]
    EmptyTileId,

    /// A hub connection field was left empty.
    #[error("hub {0} must not be empty")]
    EmptyHubField(&'static str),
}

/// Lookup failure for a tile id.
#[derive(Debug, thiserror::Error)]
#[error("no tile registered with id {id}")]
pub struct TileNotFound {
    /// The id that missed.
    pub id: String,
}
