use shared::{Coordinate, RouteResponse};

use crate::map::{LatLngBounds, MapSurface};

pub const ROUTE_FIT_PADDING_PX: u32 = 48;

/// Fully resolved drawing instructions for one route response.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePlan {
    /// Start, then the waypoints in server order, then the end.
    pub points: Vec<Coordinate>,
    pub summary: String,
    /// Popup anchor: the point at index `len / 2`.
    pub anchor: Coordinate,
}

pub fn build_plan(response: &RouteResponse) -> Result<RoutePlan, String> {
    if !response.success {
        return Err(response
            .error
            .clone()
            .unwrap_or_else(|| "Failed to calculate route".to_string()));
    }
    let (start, end) = match (response.start, response.end) {
        (Some(start), Some(end)) => (start, end),
        _ => return Err("route response is missing its endpoints".to_string()),
    };

    let mut points = Vec::with_capacity(response.waypoints.len() + 2);
    points.push(Coordinate::from_pair(start));
    points.extend(response.waypoints.iter().copied().map(Coordinate::from_pair));
    points.push(Coordinate::from_pair(end));

    let anchor = points[points.len() / 2];
    Ok(RoutePlan {
        summary: summary_text(response),
        points,
        anchor,
    })
}

fn summary_text(response: &RouteResponse) -> String {
    let mut summary = format!(
        "Distance: {:.2} km<br>Duration: {} min",
        response.distance,
        response.duration.round() as i64
    );
    if let Some(note) = &response.note {
        summary.push_str("<br>");
        summary.push_str(note);
    }
    summary
}

/// Draws a successful response: the connected line, a viewport fit with fixed
/// padding, and the summary popup at the midpoint. The previous route layer
/// was already removed when the request went out.
pub fn present(surface: &mut dyn MapSurface, response: &RouteResponse) -> Result<(), String> {
    let plan = build_plan(response)?;
    surface.draw_route(&plan.points);
    if let Some(bounds) = LatLngBounds::around(&plan.points) {
        surface.fit_bounds(bounds, ROUTE_FIT_PADDING_PX);
    }
    surface.open_popup(plan.anchor, &plan.summary);
    Ok(())
}
