use serde_wasm_bindgen::to_value;
use shared::Coordinate;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsValue;

use crate::map::{
    BaseLayer, LatLngBounds, MapSurface, MarkerId, MarkerSize, PriceMarker, DEFAULT_CENTER,
    DEFAULT_ZOOM,
};

#[wasm_bindgen(module = "/leaflet_map.js")]
extern "C" {
    #[wasm_bindgen(js_name = initMap)]
    fn init_map_js(lat: f64, lng: f64, zoom: f64);
    #[wasm_bindgen(js_name = addPriceMarker)]
    fn add_price_marker_js(
        id: u32,
        lat: f64,
        lng: f64,
        label: &str,
        large: bool,
        address: &str,
        kind: &str,
    );
    #[wasm_bindgen(js_name = removeMarker)]
    fn remove_marker_js(id: u32);
    #[wasm_bindgen(js_name = setUserMarker)]
    fn set_user_marker_js(lat: f64, lng: f64);
    #[wasm_bindgen(js_name = dropPin)]
    fn drop_pin_js(lat: f64, lng: f64, label: &str);
    #[wasm_bindgen(js_name = drawRoute)]
    fn draw_route_js(points: JsValue);
    #[wasm_bindgen(js_name = clearRoute)]
    fn clear_route_js();
    #[wasm_bindgen(js_name = openPopup)]
    fn open_popup_js(lat: f64, lng: f64, html: &str);
    #[wasm_bindgen(js_name = fitBounds)]
    fn fit_bounds_js(min_lat: f64, min_lng: f64, max_lat: f64, max_lng: f64, padding: u32);
    #[wasm_bindgen(js_name = centerMap)]
    fn center_map_js(lat: f64, lng: f64, zoom: f64);
    #[wasm_bindgen(js_name = setSatellite)]
    fn set_satellite_js(enabled: bool);
}

/// The live `MapSurface`: every call crosses into the Leaflet glue module,
/// which owns the widget and its markup.
pub struct LeafletSurface;

impl LeafletSurface {
    /// Boots the widget with both base layers, the layer-switcher control,
    /// and the default view.
    pub fn init() -> Self {
        init_map_js(DEFAULT_CENTER.lat, DEFAULT_CENTER.lng, DEFAULT_ZOOM);
        Self
    }
}

impl MapSurface for LeafletSurface {
    fn add_price_marker(&mut self, id: MarkerId, marker: &PriceMarker) {
        add_price_marker_js(
            id,
            marker.at.lat,
            marker.at.lng,
            &marker.label,
            marker.size == MarkerSize::Large,
            &marker.address,
            &marker.kind,
        );
    }

    fn remove_marker(&mut self, id: MarkerId) {
        remove_marker_js(id);
    }

    fn place_user_marker(&mut self, at: Coordinate) {
        set_user_marker_js(at.lat, at.lng);
    }

    fn move_user_marker(&mut self, at: Coordinate) {
        set_user_marker_js(at.lat, at.lng);
    }

    fn drop_pin(&mut self, at: Coordinate, label: &str) {
        drop_pin_js(at.lat, at.lng, label);
    }

    fn draw_route(&mut self, points: &[Coordinate]) {
        if let Ok(value) = to_value(points) {
            draw_route_js(value);
        }
    }

    fn clear_route(&mut self) {
        clear_route_js();
    }

    fn open_popup(&mut self, at: Coordinate, text: &str) {
        open_popup_js(at.lat, at.lng, text);
    }

    fn fit_bounds(&mut self, bounds: LatLngBounds, padding_px: u32) {
        fit_bounds_js(
            bounds.min_lat,
            bounds.min_lng,
            bounds.max_lat,
            bounds.max_lng,
            padding_px,
        );
    }

    fn center_on(&mut self, at: Coordinate, zoom: f64) {
        center_map_js(at.lat, at.lng, zoom);
    }

    fn set_base_layer(&mut self, layer: BaseLayer) {
        set_satellite_js(layer == BaseLayer::Satellite);
    }
}
