//! Switch toggler — fire-and-forget device toggle with transient busy styling.
//!
//! One GET to the hub per invocation: the tile takes the busy color and stops
//! accepting pointer input immediately, and a one-shot timer restores the
//! captured style after [`DEFAULT_BUSY_REVERT`]. The visual feedback never
//! observes the request outcome; the style reverts whether or not the hub
//! actually toggled the device.

use std::sync::Arc;
use std::time::Duration;

use tilehub_domain::color::Color;
use tilehub_domain::error::TileHubError;
use tilehub_domain::hub::{HubConfig, ToggleRequest};
use tilehub_domain::tile::TileId;

use crate::ports::{HubTransport, TileSurface};

/// How long a tile keeps the busy style before reverting.
pub const DEFAULT_BUSY_REVERT: Duration = Duration::from_millis(400);

type OnResult = Box<dyn FnOnce(serde_json::Value) + Send>;

/// Toggles remote switches and applies transient busy styling to their tiles.
pub struct SwitchToggler<T, S> {
    config: HubConfig,
    transport: Arc<T>,
    surface: Arc<S>,
    busy_revert: Duration,
}

impl<T, S> SwitchToggler<T, S>
where
    T: HubTransport + 'static,
    S: TileSurface + 'static,
{
    /// Create a toggler for the given hub, transport, and surface.
    pub fn new(config: HubConfig, transport: Arc<T>, surface: Arc<S>) -> Self {
        Self {
            config,
            transport,
            surface,
            busy_revert: DEFAULT_BUSY_REVERT,
        }
    }

    /// Override the busy-revert delay (demos and tests use shorter ones).
    #[must_use]
    pub fn with_busy_revert(mut self, delay: Duration) -> Self {
        self.busy_revert = delay;
        self
    }

    /// Toggle the device behind `tile`.
    ///
    /// Dispatches the request as a detached task, paints the tile with the
    /// busy color, disables interaction, and schedules the style restore.
    /// Returns before the request completes and before the delay elapses.
    ///
    /// Overlapping calls on the same tile are not serialized: a second call
    /// captures whatever color is current — busy included — so an overlapping
    /// pair can leave the tile in the busy color for good. Callers that need
    /// exclusion must gate on the tile's `interactive` flag.
    ///
    /// # Errors
    ///
    /// Returns [`TileHubError::NotFound`] when the surface has no tile with
    /// this id. Transport failures are logged at warn, never returned.
    ///
    /// # Panics
    ///
    /// Must be called from within a Tokio runtime.
    #[tracing::instrument(skip(self))]
    pub fn toggle(&self, tile: &TileId) -> Result<(), TileHubError> {
        self.dispatch(tile, None)
    }

    /// Like [`toggle`](Self::toggle), additionally invoking `on_result` with
    /// the hub's response payload once the request completes successfully.
    ///
    /// # Errors
    ///
    /// Same as [`toggle`](Self::toggle).
    #[tracing::instrument(skip(self, on_result))]
    pub fn toggle_then<F>(&self, tile: &TileId, on_result: F) -> Result<(), TileHubError>
    where
        F: FnOnce(serde_json::Value) + Send + 'static,
    {
        self.dispatch(tile, Some(Box::new(on_result)))
    }

    fn dispatch(&self, tile: &TileId, on_result: Option<OnResult>) -> Result<(), TileHubError> {
        let request = ToggleRequest::new(&self.config, tile);
        tracing::debug!(url = request.url(), "dispatching toggle");

        // The request goes out before the style is touched; a missing tile
        // fails the style mutation below but not the dispatch.
        let transport = Arc::clone(&self.transport);
        tokio::spawn(async move {
            match transport.send_toggle(&request).await {
                Ok(payload) => {
                    if let Some(callback) = on_result {
                        callback(payload);
                    }
                }
                Err(err) => {
                    tracing::warn!(device = %request.device(), error = %err, "toggle request failed");
                }
            }
        });

        let previous = self.surface.background(tile)?;
        self.surface.set_background(tile, Color::busy())?;
        self.surface.set_interactive(tile, false)?;

        let surface = Arc::clone(&self.surface);
        let tile = tile.clone();
        let delay = self.busy_revert;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Err(err) = restore(surface.as_ref(), &tile, previous) {
                tracing::warn!(tile = %tile, error = %err, "busy revert failed");
            }
        });

        Ok(())
    }
}

fn restore<S: TileSurface>(
    surface: &S,
    tile: &TileId,
    previous: Color,
) -> Result<(), TileHubError> {
    surface.set_background(tile, previous)?;
    surface.set_interactive(tile, true)
}
