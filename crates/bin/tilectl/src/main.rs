//! # tilectl — toggle dashboard devices from the command line
//!
//! Composition root that wires the hub transport and the virtual panel.
//!
//! ## Responsibilities
//! - Parse configuration (`tilehub.toml`, env vars)
//! - Construct the reqwest transport and the in-memory panel (adapters)
//! - Construct the `SwitchToggler`, injecting adapters via port traits
//! - Register one tile per command-line device id, toggle each, and report
//!   the tile transitions once the busy style has reverted
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;
use std::time::Duration;

use tilehub_adapter_hub_http::HubHttpClient;
use tilehub_adapter_virtual::VirtualPanel;
use tilehub_app::ports::TileSurface;
use tilehub_app::services::switch_toggler::SwitchToggler;
use tilehub_domain::tile::{Tile, TileId};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let devices: Vec<String> = std::env::args().skip(1).collect();
    if devices.is_empty() {
        return Err("usage: tilectl <device-id>...".into());
    }

    // Adapters
    let panel = Arc::new(VirtualPanel::new());
    let transport = Arc::new(HubHttpClient::new());

    // Service
    let busy_revert = Duration::from_millis(config.toggle.busy_revert_ms);
    let toggler = SwitchToggler::new(config.hub, transport, Arc::clone(&panel))
        .with_busy_revert(busy_revert);

    for device in &devices {
        panel.register(Tile::builder().id(device.as_str()).build()?)?;
    }

    for device in &devices {
        let id = TileId::new(device.as_str());
        let label_panel = Arc::clone(&panel);
        let label_target = id.clone();
        toggler.toggle_then(&id, move |payload| {
            // The hub echoes the device back; its label lands on the tile.
            if let Some(label) = payload.get("label").and_then(|value| value.as_str()) {
                if let Err(err) = label_panel.set_label(&label_target, label.to_string()) {
                    tracing::warn!(tile = %label_target, error = %err, "label update failed");
                }
            }
        })?;

        if let Some(tile) = panel.snapshot(&id) {
            tracing::info!(
                tile = %id,
                background = tile.background.as_str(),
                interactive = tile.interactive,
                "toggle dispatched"
            );
        }
    }

    // Let the revert timers fire and any in-flight responses land.
    tokio::time::sleep(busy_revert + Duration::from_millis(100)).await;

    for device in &devices {
        let id = TileId::new(device.as_str());
        if let Some(tile) = panel.snapshot(&id) {
            tracing::info!(
                tile = %id,
                background = tile.background.as_str(),
                interactive = tile.interactive,
                label = tile.label.as_deref().unwrap_or(""),
                "reverted"
            );
        }
    }

    Ok(())
}
