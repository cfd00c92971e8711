//! # tilehub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `TileSurface` — readable/writable presentation state of dashboard tiles
//!   - `HubTransport` — delivery of toggle requests to the hub's device API
//! - Provide the **use-case layer**:
//!   - `SwitchToggler` — fire-and-forget device toggle with transient busy styling
//! - Orchestrate domain objects without knowing *how* the surface or the wire works
//!
//! ## Dependency rule
//! Depends on `tilehub-domain` only (plus `tokio` for task spawning and timers).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
