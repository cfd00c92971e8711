//! Hub connection values and the toggle endpoint they address.

use serde::Deserialize;

use crate::error::{TileHubError, ValidationError};
use crate::tile::TileId;

/// Connection values for the hub's device API.
///
/// These were ambient page-level globals on the original dashboard; here they
/// are an explicit value handed to whoever builds requests, so the toggling
/// core can be exercised with fakes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HubConfig {
    /// Host or IP (a `host:port` pair is accepted as-is).
    pub ip_address: String,
    /// Identifier of the API application installed on the hub.
    pub app_id: String,
    /// Opaque credential appended as a query parameter.
    pub access_token: String,
}

impl HubConfig {
    /// Create a builder for constructing a [`HubConfig`].
    #[must_use]
    pub fn builder() -> HubConfigBuilder {
        HubConfigBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`TileHubError::Validation`] when any field is empty.
    pub fn validate(&self) -> Result<(), TileHubError> {
        if self.ip_address.is_empty() {
            return Err(ValidationError::EmptyHubField("ip_address").into());
        }
        if self.app_id.is_empty() {
            return Err(ValidationError::EmptyHubField("app_id").into());
        }
        if self.access_token.is_empty() {
            return Err(ValidationError::EmptyHubField("access_token").into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`HubConfig`].
#[derive(Debug, Default)]
pub struct HubConfigBuilder {
    ip_address: Option<String>,
    app_id: Option<String>,
    access_token: Option<String>,
}

impl HubConfigBuilder {
    #[must_use]
    pub fn ip_address(mut self, ip_address: impl Into<String>) -> Self {
        self.ip_address = Some(ip_address.into());
        self
    }

    #[must_use]
    pub fn app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = Some(app_id.into());
        self
    }

    #[must_use]
    pub fn access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    /// Consume the builder, validate, and return a [`HubConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`TileHubError::Validation`] if any field is missing or empty.
    pub fn build(self) -> Result<HubConfig, TileHubError> {
        let config = HubConfig {
            ip_address: self.ip_address.unwrap_or_default(),
            app_id: self.app_id.unwrap_or_default(),
            access_token: self.access_token.unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }
}

/// One outstanding toggle call: the target device and the URL addressing it.
///
/// The request is fire-and-forget; nothing holds on to it once it is handed
/// to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleRequest {
    device: TileId,
    url: String,
}

impl ToggleRequest {
    /// Build the toggle endpoint for `device`.
    ///
    /// Values are interpolated verbatim, without URL-encoding; identifiers
    /// and tokens must already be URL-safe.
    #[must_use]
    pub fn new(config: &HubConfig, device: &TileId) -> Self {
        let url = format!(
            "http://{}/apps/api/{}/devices/{}/toggle?access_token={}",
            config.ip_address, config.app_id, device, config.access_token
        );
        Self {
            device: device.clone(),
            url,
        }
    }

    /// The device this request targets.
    #[must_use]
    pub fn device(&self) -> &TileId {
        &self.device
    }

    /// The full endpoint URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}
