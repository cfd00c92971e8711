//! Tile — a dashboard element representing one controllable device.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{TileHubError, ValidationError};

/// Identifier shared between a dashboard tile and the device it controls.
///
/// The hub addresses devices by this value, interpolated verbatim into the
/// request URL, so callers must supply ids that are already URL-safe.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileId(String);

impl TileId {
    /// Wrap an identifier.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Access the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A dashboard tile and its mutable presentation state.
///
/// Tiles are created and destroyed by the surrounding surface; the toggling
/// core only reads and writes `background` and `interactive` for the span of
/// one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    pub background: Color,
    pub interactive: bool,
    pub label: Option<String>,
}

impl Tile {
    /// Create a builder for constructing a [`Tile`].
    #[must_use]
    pub fn builder() -> TileBuilder {
        TileBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`TileHubError::Validation`] when the id is empty.
    pub fn validate(&self) -> Result<(), TileHubError> {
        if self.id.as_str().is_empty() {
            return Err(ValidationError::EmptyTileId.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Tile`].
#[derive(Debug, Default)]
pub struct TileBuilder {
    id: Option<TileId>,
    background: Option<Color>,
    interactive: Option<bool>,
    label: Option<String>,
}

impl TileBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(TileId::new(id));
        self
    }

    #[must_use]
    pub fn background(mut self, background: Color) -> Self {
        self.background = Some(background);
        self
    }

    #[must_use]
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = Some(interactive);
        self
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Consume the builder, validate, and return a [`Tile`].
    ///
    /// # Errors
    ///
    /// Returns [`TileHubError::Validation`] if the id is missing or empty.
    pub fn build(self) -> Result<Tile, TileHubError> {
        let tile = Tile {
            id: self.id.unwrap_or_else(|| TileId::new("")),
            background: self.background.unwrap_or_default(),
            interactive: self.interactive.unwrap_or(true),
            label: self.label,
        };
        tile.validate()?;
        Ok(tile)
    }
}
