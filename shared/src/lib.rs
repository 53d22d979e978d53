use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    /// Backend route payloads carry points as `[lat, lng]` pairs.
    pub fn from_pair(pair: [f64; 2]) -> Self {
        Self {
            lat: pair[0],
            lng: pair[1],
        }
    }
}

/// One property listing as served by `GET /api/properties` and
/// `POST /api/search`. Never mutated client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub lat: f64,
    pub lng: f64,
    pub price: f64,
    #[serde(default)]
    pub bedrooms: u32,
    #[serde(default)]
    pub bathrooms: u32,
    #[serde(default)]
    pub area: f64,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub image: String,
    /// Opaque tag: apartment, house, townhouse, villa, commercial, …
    #[serde(rename = "type")]
    pub kind: String,
    /// sale or rent.
    #[serde(rename = "dealType", default)]
    pub deal_type: String,
}

/// Filter snapshot posted to `POST /api/search`. Price bounds are omitted
/// when unset so the backend applies its own defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub property_types: Vec<String>,
    #[serde(default)]
    pub deal_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(default)]
    pub bedrooms: u32,
    #[serde(default)]
    pub bathrooms: u32,
    #[serde(default)]
    pub proximities: Vec<String>,
}

/// `GET /api/geocode?location=…` result. On failure only `success` and
/// `error` are guaranteed, so everything else defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResponse {
    pub success: bool,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lng: f64,
    #[serde(default)]
    pub formatted_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// `GET /api/route?…` result. `start`, `end` and `waypoints` are
/// `[lat, lng]` pairs; `note` flags the backend's straight-line fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResponse {
    pub success: bool,
    /// Kilometers.
    #[serde(default)]
    pub distance: f64,
    /// Minutes.
    #[serde(default)]
    pub duration: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<[f64; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<[f64; 2]>,
    #[serde(default)]
    pub waypoints: Vec<[f64; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Body of `POST /api/estimate-price`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateRequest {
    pub property_type: String,
    pub location: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    /// Square meters, strictly positive.
    pub area: f64,
    /// Years.
    pub age: u32,
    pub condition: String,
    pub garage: bool,
    pub pool: bool,
    pub garden: bool,
    pub security: bool,
    pub aircon: bool,
    pub furnished: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimateResponse {
    pub estimated_price: f64,
}
