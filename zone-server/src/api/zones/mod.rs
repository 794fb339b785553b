//! Zone API module

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/zones", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route(
        "/{store_id}",
        post(handler::upsert)
            .get(handler::get_by_store)
            .delete(handler::delete),
    )
}
