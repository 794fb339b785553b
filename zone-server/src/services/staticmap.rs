//! Static map preview URLs
//!
//! Assembles provider URLs for support tooling. The image itself is fetched
//! by the caller; this service only builds the URL string.

use shared::models::LatLng;

use crate::geo::viewport;

/// Preview canvas matching the support tool's image slot
const CANVAS_WIDTH: u32 = 600;
const CANVAS_HEIGHT: u32 = 300;

/// Zoom for marker-only previews with no zone to fit
const MARKER_ZOOM: u8 = 13;

/// Static map URL builder
#[derive(Debug, Clone)]
pub struct StaticMapService {
    base_url: String,
    api_key: String,
}

impl StaticMapService {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// URL framing a zone ring, with an optional postcode marker
    ///
    /// Center and zoom are fitted to the ring's bounding box; the ring is
    /// rendered as a filled path.
    pub fn zone_preview(&self, ring: &[LatLng], marker: Option<LatLng>) -> String {
        let bounds = viewport::bounds(ring);
        let zoom = viewport::calculate_zoom(&bounds, CANVAS_WIDTH, CANVAS_HEIGHT);
        let center = viewport::center(&bounds);

        let encoded = ring
            .iter()
            .map(|c| format!("{},{}", c.lat, c.lng))
            .collect::<Vec<_>>()
            .join("|");
        let path = format!("color:blue|weight:3|fillcolor:rgba(0,0,255,0.4)|{encoded}");

        let mut url = format!(
            "{}?center={},{}&zoom={}&size={}x{}&maptype=roadmap",
            self.base_url, center.lat, center.lng, zoom, CANVAS_WIDTH, CANVAS_HEIGHT
        );
        if let Some(m) = marker {
            url.push_str(&format!("&markers=color:red%7C{},{}", m.lat, m.lng));
        }
        url.push_str(&format!("&key={}&path={}", self.api_key, path));
        url
    }

    /// Marker-only URL at a fixed zoom, for stores without a zone
    pub fn marker_only(&self, marker: LatLng) -> String {
        format!(
            "{}?center={},{}&zoom={}&size={}x{}&maptype=roadmap&markers=color:red%7C{},{}&key={}",
            self.base_url,
            marker.lat,
            marker.lng,
            MARKER_ZOOM,
            CANVAS_WIDTH,
            CANVAS_HEIGHT,
            marker.lat,
            marker.lng,
            self.api_key
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> StaticMapService {
        StaticMapService::new("https://maps.example.com/staticmap", "test-key")
    }

    fn square() -> Vec<LatLng> {
        vec![
            LatLng::new(51.0, -1.0),
            LatLng::new(51.0, 0.0),
            LatLng::new(52.0, 0.0),
            LatLng::new(52.0, -1.0),
            LatLng::new(51.0, -1.0),
        ]
    }

    #[test]
    fn zone_preview_fits_center_and_zoom() {
        let url = service().zone_preview(&square(), Some(LatLng::new(51.2, -0.3)));

        assert!(url.starts_with("https://maps.example.com/staticmap?center=51.5,-0.5&zoom=8"));
        assert!(url.contains("size=600x300"));
        assert!(url.contains("markers=color:red%7C51.2,-0.3"));
        assert!(url.contains("path=color:blue|weight:3|fillcolor:rgba(0,0,255,0.4)|51,-1|"));
        assert!(url.contains("key=test-key"));
    }

    #[test]
    fn marker_only_uses_fixed_zoom() {
        let url = service().marker_only(LatLng::new(35.9, 14.5));
        assert!(url.contains("center=35.9,14.5"));
        assert!(url.contains("zoom=13"));
        assert!(url.contains("markers=color:red%7C35.9,14.5"));
    }
}
