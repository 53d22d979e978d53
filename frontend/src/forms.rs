use std::collections::BTreeSet;

use shared::{EstimateRequest, SearchCriteria};

pub const PROPERTY_TYPES: [&str; 5] = ["apartment", "house", "townhouse", "villa", "commercial"];
pub const DEAL_TYPES: [&str; 2] = ["sale", "rent"];
pub const PROXIMITIES: [&str; 4] = ["school", "hospital", "shopping", "transport"];
pub const CONDITIONS: [&str; 4] = ["excellent", "good", "fair", "poor"];

/// Current values of the filter panel controls. Everything stays a string
/// until submission, when a criteria snapshot is assembled.
#[derive(Debug, Default, Clone)]
pub struct SearchForm {
    pub location: String,
    pub property_types: BTreeSet<String>,
    pub deal_types: BTreeSet<String>,
    pub min_price: String,
    pub max_price: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub proximities: BTreeSet<String>,
}

impl SearchForm {
    pub fn toggle_property_type(&mut self, value: &str) {
        toggle(&mut self.property_types, value);
    }

    pub fn toggle_deal_type(&mut self, value: &str) {
        toggle(&mut self.deal_types, value);
    }

    pub fn toggle_proximity(&mut self, value: &str) {
        toggle(&mut self.proximities, value);
    }

    /// Snapshot of the current control values. Blank bounds are omitted so
    /// the backend applies its own defaults; malformed numbers count as
    /// unset.
    pub fn to_criteria(&self) -> SearchCriteria {
        SearchCriteria {
            location: self.location.trim().to_string(),
            property_types: self.property_types.iter().cloned().collect(),
            deal_types: self.deal_types.iter().cloned().collect(),
            min_price: parse_bound(&self.min_price),
            max_price: parse_bound(&self.max_price),
            bedrooms: parse_count(&self.bedrooms),
            bathrooms: parse_count(&self.bathrooms),
            proximities: self.proximities.iter().cloned().collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Amenity {
    Garage,
    Pool,
    Garden,
    Security,
    Aircon,
    Furnished,
}

/// Current values of the price-estimate panel controls.
#[derive(Debug, Default, Clone)]
pub struct EstimateForm {
    pub property_type: String,
    pub location: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub area: String,
    pub age: String,
    pub condition: String,
    pub garage: bool,
    pub pool: bool,
    pub garden: bool,
    pub security: bool,
    pub aircon: bool,
    pub furnished: bool,
}

impl EstimateForm {
    pub fn toggle(&mut self, amenity: Amenity) {
        let flag = match amenity {
            Amenity::Garage => &mut self.garage,
            Amenity::Pool => &mut self.pool,
            Amenity::Garden => &mut self.garden,
            Amenity::Security => &mut self.security,
            Amenity::Aircon => &mut self.aircon,
            Amenity::Furnished => &mut self.furnished,
        };
        *flag = !*flag;
    }

    pub fn amenity(&self, amenity: Amenity) -> bool {
        match amenity {
            Amenity::Garage => self.garage,
            Amenity::Pool => self.pool,
            Amenity::Garden => self.garden,
            Amenity::Security => self.security,
            Amenity::Aircon => self.aircon,
            Amenity::Furnished => self.furnished,
        }
    }

    /// Validation gate: the backend is never contacted with an empty property
    /// type, an empty location, or a non-positive area.
    pub fn to_request(&self) -> Result<EstimateRequest, String> {
        if self.property_type.trim().is_empty() {
            return Err("Please select a property type".to_string());
        }
        if self.location.trim().is_empty() {
            return Err("Please enter a location".to_string());
        }
        let area = self
            .area
            .trim()
            .parse::<f64>()
            .map_err(|_| "Area must be a number".to_string())?;
        if area <= 0.0 {
            return Err("Area must be greater than zero".to_string());
        }
        Ok(EstimateRequest {
            property_type: self.property_type.trim().to_string(),
            location: self.location.trim().to_string(),
            bedrooms: parse_count(&self.bedrooms),
            bathrooms: parse_count(&self.bathrooms),
            area,
            age: parse_count(&self.age),
            condition: if self.condition.is_empty() {
                "good".to_string()
            } else {
                self.condition.clone()
            },
            garage: self.garage,
            pool: self.pool,
            garden: self.garden,
            security: self.security,
            aircon: self.aircon,
            furnished: self.furnished,
        })
    }
}

fn toggle(set: &mut BTreeSet<String>, value: &str) {
    if !set.remove(value) {
        set.insert(value.to_string());
    }
}

fn parse_bound(field: &str) -> Option<f64> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

fn parse_count(field: &str) -> u32 {
    field.trim().parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_estimate() -> EstimateForm {
        EstimateForm {
            property_type: "house".to_string(),
            location: "Windhoek".to_string(),
            bedrooms: "3".to_string(),
            bathrooms: "2".to_string(),
            area: "180".to_string(),
            age: "5".to_string(),
            condition: "good".to_string(),
            garage: true,
            pool: false,
            garden: true,
            security: false,
            aircon: false,
            furnished: false,
        }
    }

    #[test]
    fn estimate_request_carries_every_attribute() {
        let request = valid_estimate().to_request().unwrap();
        assert_eq!(request.property_type, "house");
        assert_eq!(request.location, "Windhoek");
        assert_eq!(request.bedrooms, 3);
        assert_eq!(request.bathrooms, 2);
        assert_eq!(request.area, 180.0);
        assert_eq!(request.age, 5);
        assert_eq!(request.condition, "good");
        assert!(request.garage && request.garden);
        assert!(!request.pool && !request.security && !request.aircon && !request.furnished);
    }

    #[test]
    fn missing_property_type_blocks_the_request() {
        let mut form = valid_estimate();
        form.property_type = "  ".to_string();
        assert!(form.to_request().is_err());
    }

    #[test]
    fn missing_location_blocks_the_request() {
        let mut form = valid_estimate();
        form.location = String::new();
        assert!(form.to_request().is_err());
    }

    #[test]
    fn non_positive_or_malformed_area_blocks_the_request() {
        for area in ["0", "-25", "plenty"] {
            let mut form = valid_estimate();
            form.area = area.to_string();
            assert!(form.to_request().is_err(), "area {area:?} must be rejected");
        }
    }

    #[test]
    fn blank_counts_default_to_zero() {
        let mut form = valid_estimate();
        form.bedrooms = String::new();
        form.age = "unknown".to_string();
        let request = form.to_request().unwrap();
        assert_eq!(request.bedrooms, 0);
        assert_eq!(request.age, 0);
    }

    #[test]
    fn criteria_snapshot_reflects_the_controls() {
        let mut form = SearchForm {
            location: " Swakopmund ".to_string(),
            min_price: "100000".to_string(),
            max_price: String::new(),
            bedrooms: "2".to_string(),
            bathrooms: String::new(),
            ..SearchForm::default()
        };
        form.toggle_property_type("house");
        form.toggle_property_type("apartment");
        form.toggle_deal_type("sale");
        form.toggle_proximity("school");

        let criteria = form.to_criteria();
        assert_eq!(criteria.location, "Swakopmund");
        assert_eq!(criteria.property_types, vec!["apartment", "house"]);
        assert_eq!(criteria.deal_types, vec!["sale"]);
        assert_eq!(criteria.min_price, Some(100_000.0));
        assert_eq!(criteria.max_price, None);
        assert_eq!(criteria.bedrooms, 2);
        assert_eq!(criteria.bathrooms, 0);
        assert_eq!(criteria.proximities, vec!["school"]);
    }

    #[test]
    fn toggling_twice_clears_the_selection() {
        let mut form = SearchForm::default();
        form.toggle_deal_type("rent");
        form.toggle_deal_type("rent");
        assert!(form.to_criteria().deal_types.is_empty());
    }

    #[test]
    fn amenity_toggle_flips_only_its_flag() {
        let mut form = EstimateForm::default();
        form.toggle(Amenity::Pool);
        assert!(form.amenity(Amenity::Pool));
        assert!(!form.amenity(Amenity::Garage));
        form.toggle(Amenity::Pool);
        assert!(!form.amenity(Amenity::Pool));
    }
}
