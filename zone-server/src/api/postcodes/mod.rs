//! Postcode API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/postcodes/{postcode}", get(handler::get_coordinate))
}
