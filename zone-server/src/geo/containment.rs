//! Zone containment and circle generation
//!
//! Even-odd point-in-polygon over lat/lng rings, plus the great-circle
//! circle approximation used when a store has a radius configured but no
//! drawn polygon.

use shared::models::LatLng;

/// Mean Earth radius in meters (spherical model)
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Tolerance for the on-edge test, in degrees
const EDGE_EPSILON: f64 = 1e-12;

/// Point-in-polygon by the even-odd rule
///
/// Boundary rule: a point lying exactly on a ring edge or vertex counts as
/// inside. The explicit on-segment check below keeps that consistent on
/// every edge instead of depending on ray direction.
///
/// Rings shorter than 3 vertices contain nothing. A closing vertex equal to
/// the first is harmless: its zero-length edge never toggles the parity.
pub fn is_inside(ring: &[LatLng], point: LatLng) -> bool {
    if ring.len() < 3 {
        return false;
    }

    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        if on_segment(ring[j], ring[i], point) {
            return true;
        }
        j = i;
    }

    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let (a, b) = (ring[i], ring[j]);
        if (a.lat > point.lat) != (b.lat > point.lat) {
            let lng_at_lat = (b.lng - a.lng) * (point.lat - a.lat) / (b.lat - a.lat) + a.lng;
            if point.lng < lng_at_lat {
                inside = !inside;
            }
        }
        j = i;
    }

    inside
}

/// Whether `p` lies on the segment `a`-`b` (inclusive endpoints)
fn on_segment(a: LatLng, b: LatLng, p: LatLng) -> bool {
    let cross = (b.lat - a.lat) * (p.lng - a.lng) - (b.lng - a.lng) * (p.lat - a.lat);
    if cross.abs() > EDGE_EPSILON {
        return false;
    }
    p.lat >= a.lat.min(b.lat) - EDGE_EPSILON
        && p.lat <= a.lat.max(b.lat) + EDGE_EPSILON
        && p.lng >= a.lng.min(b.lng) - EDGE_EPSILON
        && p.lng <= a.lng.max(b.lng) + EDGE_EPSILON
}

/// Closed ring of `num_points` vertices approximating a circle
///
/// Walks `num_points` equally spaced bearings from `center` and solves the
/// forward geodesic on a spherical Earth for each. The first vertex is
/// repeated at the end, so the result holds `num_points + 1` entries and
/// satisfies the closed-ring invariant.
pub fn generate_circle_polygon(center: LatLng, radius_m: f64, num_points: usize) -> Vec<LatLng> {
    let lat = center.lat.to_radians();
    let lng = center.lng.to_radians();
    let d = radius_m / EARTH_RADIUS_M;

    let mut coordinates = Vec::with_capacity(num_points + 1);
    for i in 0..num_points {
        let theta = (i as f64 * 360.0 / num_points as f64).to_radians();

        let lat2 = (lat.sin() * d.cos() + lat.cos() * d.sin() * theta.cos()).asin();
        let lng2 = lng
            + (theta.sin() * d.sin() * lat.cos()).atan2(d.cos() - lat.sin() * lat2.sin());

        coordinates.push(LatLng::new(lat2.to_degrees(), lng2.to_degrees()));
    }

    if let Some(first) = coordinates.first().copied() {
        coordinates.push(first);
    }

    coordinates
}

/// Great-circle distance between two coordinates, in meters
pub fn haversine_distance_m(a: LatLng, b: LatLng) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_M * h.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Unit square around the origin, closed
    fn square() -> Vec<LatLng> {
        vec![
            LatLng::new(0.0, 0.0),
            LatLng::new(0.0, 1.0),
            LatLng::new(1.0, 1.0),
            LatLng::new(1.0, 0.0),
            LatLng::new(0.0, 0.0),
        ]
    }

    #[test]
    fn centroid_of_convex_ring_is_inside() {
        assert!(is_inside(&square(), LatLng::new(0.5, 0.5)));
    }

    #[test]
    fn far_point_is_outside() {
        assert!(!is_inside(&square(), LatLng::new(45.0, 120.0)));
        assert!(!is_inside(&square(), LatLng::new(-0.001, 0.5)));
    }

    #[test]
    fn edge_and_vertex_points_are_inside() {
        // Inclusive boundary rule
        assert!(is_inside(&square(), LatLng::new(0.0, 0.5)));
        assert!(is_inside(&square(), LatLng::new(0.5, 1.0)));
        assert!(is_inside(&square(), LatLng::new(1.0, 1.0)));
    }

    #[test]
    fn degenerate_ring_contains_nothing() {
        let segment = vec![LatLng::new(0.0, 0.0), LatLng::new(1.0, 1.0)];
        assert!(!is_inside(&segment, LatLng::new(0.5, 0.5)));
        assert!(!is_inside(&[], LatLng::new(0.0, 0.0)));
    }

    #[test]
    fn concave_ring_excludes_the_notch() {
        // U-shape opening north
        let ring = vec![
            LatLng::new(0.0, 0.0),
            LatLng::new(0.0, 3.0),
            LatLng::new(2.0, 3.0),
            LatLng::new(2.0, 2.0),
            LatLng::new(0.5, 2.0),
            LatLng::new(0.5, 1.0),
            LatLng::new(2.0, 1.0),
            LatLng::new(2.0, 0.0),
            LatLng::new(0.0, 0.0),
        ];
        assert!(is_inside(&ring, LatLng::new(0.25, 1.5)));
        assert!(!is_inside(&ring, LatLng::new(1.5, 1.5)));
        assert!(is_inside(&ring, LatLng::new(1.5, 0.5)));
        assert!(is_inside(&ring, LatLng::new(1.5, 2.5)));
    }

    #[test]
    fn circle_ring_is_closed_with_requested_points() {
        let circle = generate_circle_polygon(LatLng::new(51.5, -0.12), 2000.0, 20);
        assert_eq!(circle.len(), 21);
        assert_eq!(circle.first(), circle.last());
    }

    #[test]
    fn circle_vertices_lie_at_the_requested_radius() {
        let center = LatLng::new(35.9, 14.5);
        let radius = 5_000.0;
        let circle = generate_circle_polygon(center, radius, 24);

        // Skip the closing vertex; forward geodesic and haversine share the
        // same sphere, so the tolerance is purely floating-point.
        for coord in &circle[..24] {
            let d = haversine_distance_m(center, *coord);
            assert!(
                (d - radius).abs() < 1e-3,
                "vertex at {d} m, expected {radius} m"
            );
        }
    }

    #[test]
    fn circle_contains_its_center() {
        let center = LatLng::new(51.5, -0.12);
        let circle = generate_circle_polygon(center, 1_000.0, 20);
        assert!(is_inside(&circle, center));
    }

    #[test]
    fn haversine_matches_known_distance() {
        // London to Valletta, roughly 2088 km on the spherical model
        let d = haversine_distance_m(LatLng::new(51.5074, -0.1278), LatLng::new(35.8989, 14.5146));
        assert!((d - 2_088_000.0).abs() < 10_000.0, "got {d}");
    }
}
