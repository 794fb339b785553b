//! Zone Model

use serde::{Deserialize, Serialize};

use super::LatLng;

/// A store's delivery zone: one closed polygon ring per store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    pub store_id: String,
    /// Closed ring (first vertex repeated at the end), lat/lng degrees
    pub coordinates: Vec<LatLng>,
    /// Radius hint in meters, kept for circle regeneration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    /// Last write time (Unix milliseconds)
    pub updated_at: i64,
}

/// Create-or-replace zone payload
///
/// Either a drawn `coordinates` ring, or `center` + `radius` to derive a
/// circle zone when no polygon has been drawn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneUpsert {
    pub coordinates: Option<Vec<LatLng>>,
    pub center: Option<LatLng>,
    pub radius: Option<f64>,
}

/// Whether an upsert created a new zone or replaced an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpsertOutcome {
    Created,
    Updated,
}
