//! # tilehub-domain
//!
//! Pure domain model for the tilehub dashboard controller.
//!
//! ## Responsibilities
//! - Foundational types: tile identifiers, colors, error conventions
//! - Define **Tiles** (dashboard elements representing controllable devices)
//! - Define **Hub connection values** (address, app id, access token)
//! - Define **Toggle requests** (the endpoint addressing one device toggle)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod color;
pub mod error;
pub mod hub;
pub mod tile;
