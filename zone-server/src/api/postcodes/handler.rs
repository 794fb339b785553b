//! Postcode API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use shared::models::{CountryPrefix, PostcodeCoordinate};

use crate::core::ServerState;
use crate::db::repository::postcode as postcode_repo;
use crate::utils::validation::{MAX_ID_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};

#[derive(Deserialize)]
pub struct PostcodeQuery {
    pub country_prefix: CountryPrefix,
}

/// GET /api/postcodes/:postcode?country_prefix= - postcode to coordinate
pub async fn get_coordinate(
    State(state): State<ServerState>,
    Path(postcode): Path<String>,
    Query(query): Query<PostcodeQuery>,
) -> AppResult<Json<PostcodeCoordinate>> {
    validate_required_text(&postcode, "postcode", MAX_ID_LEN)?;

    let coord = postcode_repo::find_coordinate(state.pool(), query.country_prefix, &postcode)
        .await?
        .ok_or_else(|| AppError::not_found("Postcode not found"))?;

    Ok(Json(coord.into()))
}
