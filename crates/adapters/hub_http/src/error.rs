//! HTTP adapter error types.

use tilehub_domain::error::TileHubError;

/// Errors specific to the hub HTTP transport.
#[derive(Debug, thiserror::Error)]
pub enum HubHttpError {
    /// Connection, timeout, or body decode failure.
    #[error("hub request failed")]
    Request(#[from] reqwest::Error),

    /// The hub answered with a non-success status.
    #[error("hub responded with status {0}")]
    Status(u16),
}

impl From<HubHttpError> for TileHubError {
    fn from(err: HubHttpError) -> Self {
        Self::Transport(Box::new(err))
    }
}
