use std::collections::BTreeSet;

use shared::Coordinate;

use crate::map::{BaseLayer, LatLngBounds, MapSurface, MarkerId, PriceMarker};

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    AddMarker(MarkerId, PriceMarker),
    RemoveMarker(MarkerId),
    PlaceUserMarker(Coordinate),
    MoveUserMarker(Coordinate),
    DropPin(Coordinate, String),
    DrawRoute(Vec<Coordinate>),
    ClearRoute,
    OpenPopup(Coordinate, String),
    FitBounds(LatLngBounds, u32),
    CenterOn(Coordinate, f64),
    SetBaseLayer(BaseLayer),
}

/// Records every widget call and mirrors the overlay state, so controller
/// rules are checked without a browser.
#[derive(Default)]
pub struct RecordingSurface {
    pub ops: Vec<SurfaceOp>,
    pub live_markers: BTreeSet<MarkerId>,
    pub route_layers: usize,
    pub user_marker: Option<Coordinate>,
}

impl MapSurface for RecordingSurface {
    fn add_price_marker(&mut self, id: MarkerId, marker: &PriceMarker) {
        self.live_markers.insert(id);
        self.ops.push(SurfaceOp::AddMarker(id, marker.clone()));
    }

    fn remove_marker(&mut self, id: MarkerId) {
        self.live_markers.remove(&id);
        self.ops.push(SurfaceOp::RemoveMarker(id));
    }

    fn place_user_marker(&mut self, at: Coordinate) {
        self.user_marker = Some(at);
        self.ops.push(SurfaceOp::PlaceUserMarker(at));
    }

    fn move_user_marker(&mut self, at: Coordinate) {
        self.user_marker = Some(at);
        self.ops.push(SurfaceOp::MoveUserMarker(at));
    }

    fn drop_pin(&mut self, at: Coordinate, label: &str) {
        self.ops.push(SurfaceOp::DropPin(at, label.to_string()));
    }

    fn draw_route(&mut self, points: &[Coordinate]) {
        self.route_layers += 1;
        self.ops.push(SurfaceOp::DrawRoute(points.to_vec()));
    }

    fn clear_route(&mut self) {
        self.route_layers = 0;
        self.ops.push(SurfaceOp::ClearRoute);
    }

    fn open_popup(&mut self, at: Coordinate, text: &str) {
        self.ops.push(SurfaceOp::OpenPopup(at, text.to_string()));
    }

    fn fit_bounds(&mut self, bounds: LatLngBounds, padding_px: u32) {
        self.ops.push(SurfaceOp::FitBounds(bounds, padding_px));
    }

    fn center_on(&mut self, at: Coordinate, zoom: f64) {
        self.ops.push(SurfaceOp::CenterOn(at, zoom));
    }

    fn set_base_layer(&mut self, layer: BaseLayer) {
        self.ops.push(SurfaceOp::SetBaseLayer(layer));
    }
}
