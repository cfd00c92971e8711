//! # tilehub-adapter-hub-http
//!
//! Outbound HTTP transport to the hub's device API.
//!
//! One GET per toggle, at the URL built by
//! [`ToggleRequest`](tilehub_domain::hub::ToggleRequest). The response body
//! is decoded as JSON so an optional completion callback can consume it; the
//! default toggle path never looks at it.

mod error;

pub use error::HubHttpError;

use std::future::Future;

use tilehub_app::ports::HubTransport;
use tilehub_domain::error::TileHubError;
use tilehub_domain::hub::ToggleRequest;

/// [`HubTransport`] implementation backed by a shared [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct HubHttpClient {
    client: reqwest::Client,
}

impl HubHttpClient {
    /// Create a transport with a fresh connection pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl HubTransport for HubHttpClient {
    fn send_toggle(
        &self,
        request: &ToggleRequest,
    ) -> impl Future<Output = Result<serde_json::Value, TileHubError>> + Send {
        let client = self.client.clone();
        let url = request.url().to_owned();
        async move {
            tracing::debug!(url, "sending toggle request");
            let response = client
                .get(&url)
                .send()
                .await
                .map_err(HubHttpError::Request)?;
            let status = response.status();
            if !status.is_success() {
                return Err(HubHttpError::Status(status.as_u16()).into());
            }
            let payload = response.json().await.map_err(HubHttpError::Request)?;
            Ok(payload)
        }
    }
}
