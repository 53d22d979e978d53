use seed::{prelude::*, *};
use serde::de::DeserializeOwned;
use shared::{Coordinate, EstimateRequest, EstimateResponse, GeocodeResponse, Property, RouteResponse, SearchCriteria};
use thiserror::Error;

/// Shown when geocoding fails without a server-provided message.
pub const GEOCODE_FALLBACK_MESSAGE: &str = "Unable to find that location";

pub fn api_root() -> String {
    if let Some(url) = option_env!("FRONTEND_API_ROOT") {
        return url.trim_end_matches('/').to_string();
    }
    String::new()
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected response: {0}")]
    Decode(String),
}

pub async fn fetch_properties() -> Result<Vec<Property>, ApiError> {
    let request = Request::new(format!("{}/api/properties", api_root())).method(Method::Get);
    decode_json(request).await
}

pub async fn search_properties(criteria: SearchCriteria) -> Result<Vec<Property>, ApiError> {
    let request = Request::new(format!("{}/api/search", api_root()))
        .method(Method::Post)
        .json(&criteria)
        .map_err(|err| ApiError::Transport(format!("{err:?}")))?;
    decode_json(request).await
}

pub async fn geocode(query: &str) -> Result<GeocodeResponse, ApiError> {
    let encoded = String::from(js_sys::encode_uri_component(query));
    let request =
        Request::new(format!("{}/api/geocode?location={encoded}", api_root())).method(Method::Get);
    decode_json(request).await
}

pub async fn fetch_route(start: Coordinate, end: Coordinate) -> Result<RouteResponse, ApiError> {
    let url = format!(
        "{}/api/route?start_lat={}&start_lng={}&end_lat={}&end_lng={}",
        api_root(),
        start.lat,
        start.lng,
        end.lat,
        end.lng
    );
    decode_json(Request::new(url).method(Method::Get)).await
}

pub async fn estimate_price(payload: EstimateRequest) -> Result<EstimateResponse, ApiError> {
    let request = Request::new(format!("{}/api/estimate-price", api_root()))
        .method(Method::Post)
        .json(&payload)
        .map_err(|err| ApiError::Transport(format!("{err:?}")))?;
    decode_json(request).await
}

/// The server-provided message when present, the generic fallback otherwise.
pub fn geocode_failure_message(response: &GeocodeResponse) -> String {
    response
        .error
        .clone()
        .unwrap_or_else(|| GEOCODE_FALLBACK_MESSAGE.to_string())
}

async fn decode_json<T: DeserializeOwned + 'static>(request: Request<'_>) -> Result<T, ApiError> {
    let raw = request
        .fetch()
        .await
        .map_err(|err| ApiError::Transport(format!("{err:?}")))?;
    let response = raw
        .check_status()
        .map_err(|err| ApiError::Transport(format!("{err:?}")))?;
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(format!("{err:?}")))
}
