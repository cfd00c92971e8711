//! Hub transport port — delivers toggle requests to the hub's device API.

use std::future::Future;

use tilehub_domain::error::TileHubError;
use tilehub_domain::hub::ToggleRequest;

/// Outbound transport to the hub's device API.
///
/// Implementations live in adapter crates (e.g. `adapter_hub_http`). The
/// toggling core dispatches through this port as a detached task and never
/// awaits the outcome itself; the returned payload only reaches an optional
/// completion callback.
pub trait HubTransport: Send + Sync {
    /// Deliver a toggle request and return the hub's JSON response payload.
    fn send_toggle(
        &self,
        request: &ToggleRequest,
    ) -> impl Future<Output = Result<serde_json::Value, TileHubError>> + Send;
}
