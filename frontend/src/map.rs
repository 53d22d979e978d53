use shared::{Coordinate, Property};

/// Windhoek, the backend's own fallback coordinate.
pub const DEFAULT_CENTER: Coordinate = Coordinate {
    lat: -22.559,
    lng: 17.083,
};
pub const DEFAULT_ZOOM: f64 = 13.0;

/// Zoom applied when centering on a geocoded location or the user position.
pub const FOCUS_ZOOM: f64 = 14.0;

/// Prices strictly above this render with the large marker tier.
pub const LARGE_MARKER_CUTOFF: f64 = 200_000.0;

pub type MarkerId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerSize {
    Standard,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseLayer {
    Streets,
    Satellite,
}

impl BaseLayer {
    pub fn toggled(self) -> Self {
        match self {
            BaseLayer::Streets => BaseLayer::Satellite,
            BaseLayer::Satellite => BaseLayer::Streets,
        }
    }
}

/// Everything the widget needs to draw one listing marker and its popup.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceMarker {
    pub at: Coordinate,
    pub label: String,
    pub size: MarkerSize,
    pub address: String,
    pub kind: String,
}

impl PriceMarker {
    pub fn for_property(property: &Property) -> Self {
        Self {
            at: Coordinate {
                lat: property.lat,
                lng: property.lng,
            },
            label: format_price(property.price),
            size: marker_size(property.price),
            address: property.address.clone(),
            kind: property.kind.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLngBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl LatLngBounds {
    pub fn around(points: &[Coordinate]) -> Option<Self> {
        let first = points.first()?;
        let mut bounds = Self {
            min_lat: first.lat,
            max_lat: first.lat,
            min_lng: first.lng,
            max_lng: first.lng,
        };
        for point in &points[1..] {
            bounds.min_lat = bounds.min_lat.min(point.lat);
            bounds.max_lat = bounds.max_lat.max(point.lat);
            bounds.min_lng = bounds.min_lng.min(point.lng);
            bounds.max_lng = bounds.max_lng.max(point.lng);
        }
        Some(bounds)
    }
}

pub fn marker_size(price: f64) -> MarkerSize {
    if price > LARGE_MARKER_CUTOFF {
        MarkerSize::Large
    } else {
        MarkerSize::Standard
    }
}

/// Currency-prefixed, thousands-separated label, e.g. `N$250,000`.
pub fn format_price(price: f64) -> String {
    let whole = price.round().abs() as u64;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("N${grouped}")
}

/// The overlay capabilities the controller consumes from the mapping widget.
/// The live implementation bridges to Leaflet; tests use a recording fake.
pub trait MapSurface {
    fn add_price_marker(&mut self, id: MarkerId, marker: &PriceMarker);
    fn remove_marker(&mut self, id: MarkerId);
    /// Creates the singleton user-position marker.
    fn place_user_marker(&mut self, at: Coordinate);
    /// Repositions the existing user-position marker in place.
    fn move_user_marker(&mut self, at: Coordinate);
    /// Drops an untracked labeled pin (geocoding results).
    fn drop_pin(&mut self, at: Coordinate, label: &str);
    fn draw_route(&mut self, points: &[Coordinate]);
    fn clear_route(&mut self);
    fn open_popup(&mut self, at: Coordinate, text: &str);
    fn fit_bounds(&mut self, bounds: LatLngBounds, padding_px: u32);
    fn center_on(&mut self, at: Coordinate, zoom: f64);
    fn set_base_layer(&mut self, layer: BaseLayer);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_tier_is_a_pure_function_of_price() {
        assert_eq!(marker_size(250_000.0), MarkerSize::Large);
        assert_eq!(marker_size(200_001.0), MarkerSize::Large);
        assert_eq!(marker_size(200_000.0), MarkerSize::Standard);
        assert_eq!(marker_size(85_000.0), MarkerSize::Standard);
    }

    #[test]
    fn price_label_is_prefixed_and_grouped() {
        assert_eq!(format_price(250_000.0), "N$250,000");
        assert_eq!(format_price(1_234_567.0), "N$1,234,567");
        assert_eq!(format_price(950.0), "N$950");
        assert_eq!(format_price(0.0), "N$0");
    }

    #[test]
    fn bounds_cover_every_point() {
        let points = [
            Coordinate { lat: -22.5, lng: 17.0 },
            Coordinate { lat: -22.9, lng: 14.5 },
            Coordinate { lat: -20.4, lng: 16.6 },
        ];
        let bounds = LatLngBounds::around(&points).unwrap();
        assert_eq!(bounds.min_lat, -22.9);
        assert_eq!(bounds.max_lat, -20.4);
        assert_eq!(bounds.min_lng, 14.5);
        assert_eq!(bounds.max_lng, 17.0);
    }

    #[test]
    fn bounds_of_empty_slice_are_none() {
        assert!(LatLngBounds::around(&[]).is_none());
    }

    #[test]
    fn base_layer_toggles_between_the_two_tile_sets() {
        assert_eq!(BaseLayer::Streets.toggled(), BaseLayer::Satellite);
        assert_eq!(BaseLayer::Satellite.toggled(), BaseLayer::Streets);
    }
}
