//! Static map preview Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};

use shared::models::CountryPrefix;

use crate::core::ServerState;
use crate::db::repository::{postcode as postcode_repo, zone as zone_repo};
use crate::utils::validation::{MAX_ID_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};

#[derive(Deserialize)]
pub struct PreviewQuery {
    pub postcode: String,
    pub country_prefix: CountryPrefix,
    pub store_id: Option<String>,
}

#[derive(Serialize)]
pub struct PreviewResponse {
    pub maps_image_url: String,
}

/// GET /api/preview - static map URL for a postcode, framed by the store's
/// zone when one exists
pub async fn preview(
    State(state): State<ServerState>,
    Query(query): Query<PreviewQuery>,
) -> AppResult<Json<PreviewResponse>> {
    validate_required_text(&query.postcode, "postcode", MAX_ID_LEN)?;

    let zone = match &query.store_id {
        Some(store_id) => {
            validate_required_text(store_id, "store_id", MAX_ID_LEN)?;
            zone_repo::find_by_store(state.pool(), store_id).await?
        }
        None => None,
    };

    let marker =
        postcode_repo::find_coordinate(state.pool(), query.country_prefix, &query.postcode).await?;

    let maps_image_url = match (zone, marker) {
        (Some(zone), marker) => state.static_map.zone_preview(&zone.coordinates, marker),
        (None, Some(marker)) => state.static_map.marker_only(marker),
        (None, None) => return Err(AppError::not_found("Postcode not found")),
    };

    Ok(Json(PreviewResponse { maps_image_url }))
}
