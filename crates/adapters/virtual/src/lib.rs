//! # tilehub-adapter-virtual
//!
//! In-memory tile panel — the dashboard stand-in.
//!
//! Holds tiles in a map and implements
//! [`TileSurface`](tilehub_app::ports::TileSurface) over it. The binary uses
//! it as its display surface; integration tests use it as an observable fake.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tilehub_app::ports::TileSurface;
use tilehub_domain::color::Color;
use tilehub_domain::error::{TileHubError, TileNotFound};
use tilehub_domain::tile::{Tile, TileId};

/// An in-memory panel of tiles keyed by id.
#[derive(Debug, Default)]
pub struct VirtualPanel {
    tiles: Mutex<HashMap<TileId, Tile>>,
}

impl VirtualPanel {
    /// Create an empty panel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tile to the panel, replacing any previous tile with the same id.
    ///
    /// # Errors
    ///
    /// Returns [`TileHubError::Validation`] when the tile is invalid.
    pub fn register(&self, tile: Tile) -> Result<(), TileHubError> {
        tile.validate()?;
        self.lock().insert(tile.id.clone(), tile);
        Ok(())
    }

    /// A point-in-time copy of the tile, if present.
    #[must_use]
    pub fn snapshot(&self, id: &TileId) -> Option<Tile> {
        self.lock().get(id).cloned()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<TileId, Tile>> {
        self.tiles.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn update<R>(
        &self,
        id: &TileId,
        apply: impl FnOnce(&mut Tile) -> R,
    ) -> Result<R, TileHubError> {
        let mut tiles = self.lock();
        let Some(tile) = tiles.get_mut(id) else {
            return Err(TileNotFound { id: id.to_string() }.into());
        };
        Ok(apply(tile))
    }
}

impl TileSurface for VirtualPanel {
    fn background(&self, id: &TileId) -> Result<Color, TileHubError> {
        self.update(id, |tile| tile.background.clone())
    }

    fn set_background(&self, id: &TileId, color: Color) -> Result<(), TileHubError> {
        self.update(id, |tile| tile.background = color)
    }

    fn set_interactive(&self, id: &TileId, interactive: bool) -> Result<(), TileHubError> {
        self.update(id, |tile| tile.interactive = interactive)
    }

    fn set_label(&self, id: &TileId, label: String) -> Result<(), TileHubError> {
        self.update(id, |tile| tile.label = Some(label))
    }
}
