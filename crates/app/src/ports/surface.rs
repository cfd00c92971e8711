//! Tile surface port — presentation state of the dashboard tiles.

use tilehub_domain::color::Color;
use tilehub_domain::error::TileHubError;
use tilehub_domain::tile::TileId;

/// The dashboard surface holding the tiles.
///
/// This is a **port** — the application core reads and mutates tile styles
/// through it without knowing whether the surface is a rendered page or the
/// in-memory panel used in tests. Methods are synchronous: style mutation is
/// bookkeeping, not IO.
pub trait TileSurface: Send + Sync {
    /// Read the current background color of a tile.
    ///
    /// # Errors
    ///
    /// Returns [`TileHubError::NotFound`] when no tile with `id` exists.
    fn background(&self, id: &TileId) -> Result<Color, TileHubError>;

    /// Set the background color of a tile.
    ///
    /// # Errors
    ///
    /// Returns [`TileHubError::NotFound`] when no tile with `id` exists.
    fn set_background(&self, id: &TileId, color: Color) -> Result<(), TileHubError>;

    /// Enable or disable pointer interaction on a tile.
    ///
    /// # Errors
    ///
    /// Returns [`TileHubError::NotFound`] when no tile with `id` exists.
    fn set_interactive(&self, id: &TileId, interactive: bool) -> Result<(), TileHubError>;

    /// Replace the label text of a tile.
    ///
    /// # Errors
    ///
    /// Returns [`TileHubError::NotFound`] when no tile with `id` exists.
    fn set_label(&self, id: &TileId, label: String) -> Result<(), TileHubError>;
}
