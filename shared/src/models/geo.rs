//! Geographic value types

use serde::{Deserialize, Serialize};

/// A WGS84 coordinate in degrees, serialized as a `[lat, lng]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Both components are finite numbers (no NaN, no infinities).
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl TryFrom<[f64; 2]> for LatLng {
    type Error = NonFiniteCoordinate;

    fn try_from([lat, lng]: [f64; 2]) -> Result<Self, Self::Error> {
        let coord = Self { lat, lng };
        if coord.is_finite() {
            Ok(coord)
        } else {
            Err(NonFiniteCoordinate)
        }
    }
}

impl From<LatLng> for [f64; 2] {
    fn from(coord: LatLng) -> Self {
        [coord.lat, coord.lng]
    }
}

/// Coordinate pair containing NaN or infinity
#[derive(Debug, thiserror::Error)]
#[error("coordinate components must be finite numbers")]
pub struct NonFiniteCoordinate;

/// Axis-aligned bounding box of a polygon's vertices
///
/// Derived from a ring on demand, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}
