//! Zone API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;

use shared::models::{UpsertOutcome, Zone, ZoneUpsert};

use crate::core::ServerState;
use crate::db::repository::zone as zone_repo;
use crate::geo::containment::generate_circle_polygon;
use crate::utils::validation::{MAX_ID_LEN, validate_required_text, validate_ring};
use crate::utils::{AppError, AppResult};

/// Vertex count when deriving a circle zone from a radius
const CIRCLE_POINTS: usize = 20;

#[derive(Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

/// POST /api/zones/:store_id - create or replace a store's zone
///
/// Accepts a drawn ring, or `center` + `radius` to derive a circle zone
/// when no polygon has been drawn. 201 on create, 200 on replace.
pub async fn upsert(
    State(state): State<ServerState>,
    Path(store_id): Path<String>,
    Json(payload): Json<ZoneUpsert>,
) -> AppResult<(StatusCode, Json<Zone>)> {
    validate_required_text(&store_id, "store_id", MAX_ID_LEN)?;

    let ring = match payload.coordinates {
        Some(ring) => {
            validate_ring(&ring)?;
            ring
        }
        // Radius fallback: no polygon drawn, approximate a circle around
        // the store location.
        None => match (payload.center, payload.radius) {
            (Some(center), Some(radius)) if center.is_finite() && radius > 0.0 => {
                generate_circle_polygon(center, radius, CIRCLE_POINTS)
            }
            _ => {
                return Err(AppError::validation(
                    "Missing coordinates (or center and radius) parameter",
                ));
            }
        },
    };

    let (zone, outcome) = zone_repo::upsert(state.pool(), &store_id, &ring, payload.radius).await?;

    tracing::info!(store_id = %zone.store_id, ?outcome, vertices = zone.coordinates.len(), "zone saved");

    let status = match outcome {
        UpsertOutcome::Created => StatusCode::CREATED,
        UpsertOutcome::Updated => StatusCode::OK,
    };
    Ok((status, Json(zone)))
}

/// GET /api/zones/:store_id - fetch a store's zone
pub async fn get_by_store(
    State(state): State<ServerState>,
    Path(store_id): Path<String>,
) -> AppResult<Json<Zone>> {
    validate_required_text(&store_id, "store_id", MAX_ID_LEN)?;

    let zone = zone_repo::find_by_store(state.pool(), &store_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Zone for store {store_id} not found")))?;
    Ok(Json(zone))
}

/// DELETE /api/zones/:store_id - remove a store's zone
pub async fn delete(
    State(state): State<ServerState>,
    Path(store_id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    validate_required_text(&store_id, "store_id", MAX_ID_LEN)?;

    let deleted = zone_repo::delete(state.pool(), &store_id).await?;
    if !deleted {
        return Err(AppError::not_found(format!(
            "Zone for store {store_id} not found"
        )));
    }

    tracing::info!(store_id = %store_id, "zone deleted");
    Ok(Json(DeleteResponse { deleted: true }))
}
