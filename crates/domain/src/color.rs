//! Color values as carried by tile styles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A CSS color value (keyword, hex, or function form) stored on a tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(String);

impl Color {
    /// Wrap a CSS color value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The fixed color applied while a toggle request is presumed in flight.
    #[must_use]
    pub fn busy() -> Self {
        Self("yellow".to_string())
    }

    /// Access the raw CSS value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Color {
    /// An element with no background set reads back as `transparent`.
    fn default() -> Self {
        Self("transparent".to_string())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
