use shared::Property;

use crate::map::{MapSurface, MarkerId, PriceMarker};

/// Owner of the displayed result set: exactly one marker per property,
/// none surviving from a previous set.
#[derive(Default)]
pub struct Listings {
    properties: Vec<Property>,
    markers: Vec<MarkerId>,
    next_marker: MarkerId,
}

impl Listings {
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Cardinality of the last successfully rendered set, zero included.
    pub fn count(&self) -> usize {
        self.properties.len()
    }

    /// Replaces the whole display: clears the previous markers off the map,
    /// then renders one price marker per incoming property.
    pub fn replace(&mut self, surface: &mut dyn MapSurface, properties: Vec<Property>) {
        self.clear(surface);
        for property in &properties {
            let id = self.next_marker;
            self.next_marker = self.next_marker.wrapping_add(1);
            surface.add_price_marker(id, &PriceMarker::for_property(property));
            self.markers.push(id);
        }
        self.properties = properties;
    }

    /// Removes every tracked marker from the map before the ids are dropped,
    /// so no overlay dangles.
    pub fn clear(&mut self, surface: &mut dyn MapSurface) {
        for id in self.markers.drain(..) {
            surface.remove_marker(id);
        }
        self.properties.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::MarkerSize;
    use crate::testing::{RecordingSurface, SurfaceOp};

    fn property(price: f64, address: &str) -> Property {
        Property {
            id: None,
            lat: -22.56,
            lng: 17.08,
            price,
            bedrooms: 3,
            bathrooms: 2,
            area: 140.0,
            address: address.to_string(),
            image: String::new(),
            kind: "house".to_string(),
            deal_type: "sale".to_string(),
        }
    }

    #[test]
    fn second_render_leaves_no_marker_from_the_first() {
        let mut surface = RecordingSurface::default();
        let mut listings = Listings::default();

        listings.replace(
            &mut surface,
            vec![property(150_000.0, "12 Sam Nujoma Dr"), property(320_000.0, "4 Independence Ave")],
        );
        let first_ids: Vec<_> = surface.live_markers.iter().copied().collect();
        assert_eq!(first_ids.len(), 2);

        listings.replace(
            &mut surface,
            vec![
                property(95_000.0, "8 Mandume Ndemufayo Ave"),
                property(210_000.0, "22 Robert Mugabe Ave"),
                property(510_000.0, "1 Nelson Mandela Ave"),
            ],
        );

        assert_eq!(surface.live_markers.len(), 3);
        assert_eq!(listings.count(), 3);
        for id in first_ids {
            assert!(!surface.live_markers.contains(&id));
        }
    }

    #[test]
    fn empty_result_set_renders_zero_markers() {
        let mut surface = RecordingSurface::default();
        let mut listings = Listings::default();

        listings.replace(&mut surface, vec![property(150_000.0, "12 Sam Nujoma Dr")]);
        listings.replace(&mut surface, vec![]);

        assert_eq!(surface.live_markers.len(), 0);
        assert_eq!(listings.count(), 0);
        assert!(listings.properties().is_empty());
    }

    #[test]
    fn stale_markers_are_removed_before_new_ones_are_added() {
        let mut surface = RecordingSurface::default();
        let mut listings = Listings::default();

        listings.replace(&mut surface, vec![property(150_000.0, "12 Sam Nujoma Dr")]);
        listings.replace(&mut surface, vec![property(95_000.0, "8 Mandume Ndemufayo Ave")]);

        let last_remove = surface
            .ops
            .iter()
            .rposition(|op| matches!(op, SurfaceOp::RemoveMarker(_)))
            .unwrap();
        let last_add = surface
            .ops
            .iter()
            .rposition(|op| matches!(op, SurfaceOp::AddMarker(_, _)))
            .unwrap();
        assert!(last_remove < last_add);
    }

    #[test]
    fn single_expensive_property_renders_one_large_labeled_marker() {
        let mut surface = RecordingSurface::default();
        let mut listings = Listings::default();

        listings.replace(&mut surface, vec![property(250_000.0, "4 Independence Ave")]);

        let added: Vec<_> = surface
            .ops
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::AddMarker(_, marker) => Some(marker),
                _ => None,
            })
            .collect();
        assert_eq!(added.len(), 1);
        assert_eq!(added[0].size, MarkerSize::Large);
        assert_eq!(added[0].label, "N$250,000");
    }
}
