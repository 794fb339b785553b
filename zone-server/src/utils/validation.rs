//! Input validation helpers
//!
//! Ring and identifier validation shared by the CRUD handlers. SQLite TEXT
//! enforces no lengths of its own, so the limits live here.

use std::collections::HashSet;

use shared::models::LatLng;

use crate::utils::AppError;

// ── Limits ──────────────────────────────────────────────────────────

/// Store identifiers and postcodes arrive from external systems
pub const MAX_ID_LEN: usize = 100;

/// Vertex cap keeps rings well under the static-map URL length limit
pub const MAX_RING_VERTICES: usize = 1000;

/// Closed ring: 3 distinct vertices plus the closing one
pub const MIN_RING_VERTICES: usize = 4;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate a zone ring: closed, finite, at least 3 distinct vertices.
pub fn validate_ring(ring: &[LatLng]) -> Result<(), AppError> {
    if ring.len() < MIN_RING_VERTICES {
        return Err(AppError::validation(
            "Polygon must have at least 3 points and a closing vertex",
        ));
    }
    if ring.len() > MAX_RING_VERTICES {
        return Err(AppError::validation(format!(
            "Polygon has too many vertices ({}, max {MAX_RING_VERTICES})",
            ring.len()
        )));
    }

    for coord in ring {
        if !coord.is_finite() {
            return Err(AppError::validation("Coordinates must be finite numbers"));
        }
        if coord.lat.abs() > 90.0 || coord.lng.abs() > 180.0 {
            return Err(AppError::validation(format!(
                "Coordinate out of range: [{}, {}]",
                coord.lat, coord.lng
            )));
        }
    }

    if ring[0] != ring[ring.len() - 1] {
        return Err(AppError::validation(
            "Polygon ring must be closed (first point equal to last)",
        ));
    }

    let distinct: HashSet<(u64, u64)> = ring[..ring.len() - 1]
        .iter()
        .map(|c| (c.lat.to_bits(), c.lng.to_bits()))
        .collect();
    if distinct.len() < 3 {
        return Err(AppError::validation(
            "Polygon must have at least 3 distinct points",
        ));
    }

    Ok(())
}
