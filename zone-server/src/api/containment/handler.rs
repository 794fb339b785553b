//! Point-in-zone API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};

use shared::models::CountryPrefix;

use crate::core::ServerState;
use crate::db::repository::{postcode as postcode_repo, zone as zone_repo};
use crate::geo::containment::is_inside;
use crate::utils::validation::{MAX_ID_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};

#[derive(Deserialize)]
pub struct PointInZoneQuery {
    pub store_id: String,
    pub postcode: String,
    pub country_prefix: CountryPrefix,
}

#[derive(Serialize)]
pub struct PointInZoneResponse {
    pub inside: bool,
}

/// GET /api/point-in-zone - does a postcode fall inside a store's zone?
pub async fn check(
    State(state): State<ServerState>,
    Query(query): Query<PointInZoneQuery>,
) -> AppResult<Json<PointInZoneResponse>> {
    validate_required_text(&query.store_id, "store_id", MAX_ID_LEN)?;
    validate_required_text(&query.postcode, "postcode", MAX_ID_LEN)?;

    let zone = zone_repo::find_by_store(state.pool(), &query.store_id)
        .await?
        .ok_or_else(|| {
            AppError::not_found(format!("Zone for store {} not found", query.store_id))
        })?;

    let point = postcode_repo::find_coordinate(state.pool(), query.country_prefix, &query.postcode)
        .await?
        .ok_or_else(|| AppError::not_found("Postcode not found"))?;

    let inside = is_inside(&zone.coordinates, point);

    tracing::debug!(
        store_id = %query.store_id,
        postcode = %query.postcode,
        inside,
        "containment check"
    );

    Ok(Json(PointInZoneResponse { inside }))
}
