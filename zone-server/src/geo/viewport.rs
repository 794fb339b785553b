//! Map viewport fitting
//!
//! Computes the bounding box of a polygon and the tile zoom level that fits
//! it into a pixel canvas. Constants follow the provider's Mercator tile
//! pyramid: 256 px tiles, zoom capped at 21.

use std::f64::consts::PI;

use shared::models::{Bounds, LatLng};

/// Tile edge length in pixels
const WORLD_DIM: f64 = 256.0;
/// Deepest zoom level the tile pyramid serves
const ZOOM_MAX: u8 = 21;

/// Axis-aligned bounding box of a polygon's vertices
///
/// Accumulators start at the inverted world box (min 90/-90, 180/-180), so
/// an empty slice yields bounds containing nothing.
pub fn bounds(polygon: &[LatLng]) -> Bounds {
    let mut bounds = Bounds {
        min_lat: 90.0,
        max_lat: -90.0,
        min_lng: 180.0,
        max_lng: -180.0,
    };

    for coord in polygon {
        bounds.min_lat = bounds.min_lat.min(coord.lat);
        bounds.max_lat = bounds.max_lat.max(coord.lat);
        bounds.min_lng = bounds.min_lng.min(coord.lng);
        bounds.max_lng = bounds.max_lng.max(coord.lng);
    }

    bounds
}

/// Midpoint of a bounding box
///
/// Not exact for boxes crossing the antimeridian; the preview tolerates the
/// approximation.
pub fn center(bounds: &Bounds) -> LatLng {
    LatLng::new(
        (bounds.min_lat + bounds.max_lat) / 2.0,
        (bounds.min_lng + bounds.max_lng) / 2.0,
    )
}

/// Mercator-projected latitude, clamped to the projection's valid range
fn lat_rad(lat: f64) -> f64 {
    let sin = (lat * PI / 180.0).sin();
    let rad_x2 = ((1.0 + sin) / (1.0 - sin)).ln() / 2.0;
    rad_x2.clamp(-PI, PI) / 2.0
}

fn axis_zoom(map_px: f64, world_px: f64, fraction: f64) -> f64 {
    (map_px / world_px / fraction).log2().floor()
}

/// Zoom level fitting `bounds` into a `px_width` x `px_height` canvas
///
/// The longitude span wraps by +360 when the box crosses the antimeridian.
/// Result is the smaller of the two axis fits, clamped to `0..=21`.
pub fn calculate_zoom(bounds: &Bounds, px_width: u32, px_height: u32) -> u8 {
    let lat_fraction = (lat_rad(bounds.max_lat) - lat_rad(bounds.min_lat)) / PI;

    let lng_diff = bounds.max_lng - bounds.min_lng;
    let lng_fraction = (if lng_diff < 0.0 { lng_diff + 360.0 } else { lng_diff }) / 360.0;

    let lat_zoom = axis_zoom(px_height as f64, WORLD_DIM, lat_fraction);
    let lng_zoom = axis_zoom(px_width as f64, WORLD_DIM, lng_fraction);

    // Degenerate boxes produce non-finite axis fits; the saturating cast
    // lands on 0 (whole world) for NaN and on the cap for +inf.
    lat_zoom.min(lng_zoom).clamp(0.0, ZOOM_MAX as f64) as u8
}
