//! API route modules
//!
//! # Structure
//!
//! - [`health`] - liveness check
//! - [`postcodes`] - postcode coordinate lookup
//! - [`zones`] - zone create/replace, fetch, delete
//! - [`containment`] - point-in-zone checks
//! - [`preview`] - static map preview URLs

pub mod containment;
pub mod health;
pub mod postcodes;
pub mod preview;
pub mod zones;

use axum::Router;

use crate::core::ServerState;

/// Assemble the full API router
pub fn router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(postcodes::router())
        .merge(zones::router())
        .merge(containment::router())
        .merge(preview::router())
}
