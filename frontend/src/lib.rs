use seed::{prelude::*, virtual_dom::AtValue, *};
use serde::Deserialize;
use shared::{Coordinate, GeocodeResponse, Property, RouteResponse};
use wasm_bindgen::{JsCast, prelude::wasm_bindgen};

pub mod api;
pub mod forms;
pub mod geolocate;
pub mod leaflet;
pub mod listings;
pub mod map;
pub mod route;
#[cfg(test)]
pub(crate) mod testing;

use forms::{Amenity, EstimateForm, SearchForm, CONDITIONS, DEAL_TYPES, PROPERTY_TYPES, PROXIMITIES};
use leaflet::LeafletSurface;
use listings::Listings;
use map::{BaseLayer, MapSurface, FOCUS_ZOOM};

pub struct Model {
    surface: Box<dyn MapSurface>,
    listings: Listings,
    search: SearchForm,
    estimate: EstimateForm,
    filters_open: bool,
    estimate_open: bool,
    base_layer: BaseLayer,
    user_located: bool,
    route_target: Option<Coordinate>,
    searching: bool,
    notice: Option<String>,
    estimate_result: Option<f64>,
    estimate_error: Option<String>,
}

pub enum Msg {
    PropertiesFetched(Result<Vec<Property>, String>),
    SubmitSearch,
    SearchFetched {
        result: Result<Vec<Property>, String>,
        locate: Option<String>,
    },
    LocationChanged(String),
    MinPriceChanged(String),
    MaxPriceChanged(String),
    BedroomsChanged(String),
    BathroomsChanged(String),
    PropertyTypeToggled(String),
    DealTypeToggled(String),
    ProximityToggled(String),
    LocateUser,
    UserLocated(Result<Coordinate, String>),
    LocateByText,
    GeocodeFetched(Result<GeocodeResponse, String>),
    RouteToProperty { lat: f64, lng: f64 },
    RouteFetched(Result<RouteResponse, String>),
    EstimateTypeChanged(String),
    EstimateLocationChanged(String),
    EstimateBedroomsChanged(String),
    EstimateBathroomsChanged(String),
    EstimateAreaChanged(String),
    EstimateAgeChanged(String),
    EstimateConditionChanged(String),
    AmenityToggled(Amenity),
    SubmitEstimate,
    EstimateFetched(Result<f64, String>),
    ToggleFilters,
    ToggleEstimate,
    ToggleBaseLayer,
    DismissNotice,
}

#[derive(Deserialize)]
struct RouteRequestPayload {
    lat: f64,
    lng: f64,
}

pub fn init(_: Url, orders: &mut impl Orders<Msg>) -> Model {
    // Marker popups dispatch a `route-request` CustomEvent from the widget.
    orders.stream(streams::window_event(Ev::from("route-request"), |event| {
        let event = event
            .dyn_into::<web_sys::CustomEvent>()
            .expect("route-request event must be CustomEvent");
        let payload: RouteRequestPayload = serde_wasm_bindgen::from_value(event.detail())
            .unwrap_or(RouteRequestPayload { lat: 0.0, lng: 0.0 });
        Msg::RouteToProperty {
            lat: payload.lat,
            lng: payload.lng,
        }
    }));

    orders.perform_cmd(async {
        Msg::PropertiesFetched(api::fetch_properties().await.map_err(|err| err.to_string()))
    });

    Model {
        surface: Box::new(LeafletSurface::init()),
        listings: Listings::default(),
        search: SearchForm::default(),
        estimate: EstimateForm::default(),
        filters_open: true,
        estimate_open: false,
        base_layer: BaseLayer::Streets,
        user_located: false,
        route_target: None,
        searching: false,
        notice: None,
        estimate_result: None,
        estimate_error: None,
    }
}

pub fn update(msg: Msg, model: &mut Model, orders: &mut impl Orders<Msg>) {
    match msg {
        Msg::PropertiesFetched(Ok(properties)) => {
            model.listings.replace(model.surface.as_mut(), properties);
        }
        Msg::PropertiesFetched(Err(err)) => {
            web_sys::console::error_1(&format!("[frontend] property load failed: {err}").into());
        }
        Msg::SubmitSearch => {
            if model.searching {
                return;
            }
            let criteria = model.search.to_criteria();
            let locate = (!criteria.location.is_empty()).then(|| criteria.location.clone());
            model.searching = true;
            model.notice = None;
            orders.perform_cmd(async move {
                let result = api::search_properties(criteria)
                    .await
                    .map_err(|err| err.to_string());
                Msg::SearchFetched { result, locate }
            });
        }
        Msg::SearchFetched { result, locate } => {
            model.searching = false;
            match result {
                Ok(properties) => {
                    model.listings.replace(model.surface.as_mut(), properties);
                    if let Some(query) = locate {
                        orders.perform_cmd(async move {
                            Msg::GeocodeFetched(
                                api::geocode(&query).await.map_err(|err| err.to_string()),
                            )
                        });
                    }
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[frontend] property search failed: {err}").into(),
                    );
                }
            }
        }
        Msg::LocationChanged(val) => model.search.location = val,
        Msg::MinPriceChanged(val) => model.search.min_price = val,
        Msg::MaxPriceChanged(val) => model.search.max_price = val,
        Msg::BedroomsChanged(val) => model.search.bedrooms = val,
        Msg::BathroomsChanged(val) => model.search.bathrooms = val,
        Msg::PropertyTypeToggled(value) => model.search.toggle_property_type(&value),
        Msg::DealTypeToggled(value) => model.search.toggle_deal_type(&value),
        Msg::ProximityToggled(value) => model.search.toggle_proximity(&value),
        Msg::LocateUser => {
            model.notice = None;
            orders.perform_cmd(async {
                Msg::UserLocated(
                    geolocate::current_position()
                        .await
                        .map_err(|err| err.to_string()),
                )
            });
        }
        Msg::UserLocated(Ok(at)) => {
            if model.user_located {
                model.surface.move_user_marker(at);
            } else {
                model.surface.place_user_marker(at);
                model.user_located = true;
            }
            model.surface.center_on(at, FOCUS_ZOOM);
            if let Some(target) = model.route_target.take() {
                // At most one route layer: the old one goes before the
                // request does.
                model.surface.clear_route();
                web_sys::console::debug_1(
                    &format!(
                        "[frontend] requesting route ({:.5},{:.5}) -> ({:.5},{:.5})",
                        at.lat, at.lng, target.lat, target.lng
                    )
                    .into(),
                );
                orders.perform_cmd(async move {
                    Msg::RouteFetched(
                        api::fetch_route(at, target)
                            .await
                            .map_err(|err| err.to_string()),
                    )
                });
            }
        }
        Msg::UserLocated(Err(err)) => {
            model.route_target = None;
            model.notice = Some(err);
        }
        Msg::LocateByText => {
            let query = model.search.location.trim().to_string();
            if query.is_empty() {
                return;
            }
            model.notice = None;
            orders.perform_cmd(async move {
                Msg::GeocodeFetched(api::geocode(&query).await.map_err(|err| err.to_string()))
            });
        }
        Msg::GeocodeFetched(Ok(response)) => {
            if response.success {
                let at = Coordinate {
                    lat: response.lat,
                    lng: response.lng,
                };
                model.surface.center_on(at, FOCUS_ZOOM);
                model.surface.drop_pin(at, &response.formatted_address);
            } else {
                model.notice = Some(api::geocode_failure_message(&response));
            }
        }
        Msg::GeocodeFetched(Err(err)) => {
            web_sys::console::error_1(&format!("[frontend] geocoding failed: {err}").into());
            model.notice = Some(api::GEOCODE_FALLBACK_MESSAGE.to_string());
        }
        Msg::RouteToProperty { lat, lng } => {
            model.route_target = Some(Coordinate { lat, lng });
            orders.perform_cmd(async {
                Msg::UserLocated(
                    geolocate::current_position()
                        .await
                        .map_err(|err| err.to_string()),
                )
            });
        }
        Msg::RouteFetched(Ok(response)) => {
            if let Err(err) = route::present(model.surface.as_mut(), &response) {
                web_sys::console::error_1(&format!("[frontend] route failed: {err}").into());
            }
        }
        Msg::RouteFetched(Err(err)) => {
            web_sys::console::error_1(&format!("[frontend] route request failed: {err}").into());
        }
        Msg::EstimateTypeChanged(val) => model.estimate.property_type = val,
        Msg::EstimateLocationChanged(val) => model.estimate.location = val,
        Msg::EstimateBedroomsChanged(val) => model.estimate.bedrooms = val,
        Msg::EstimateBathroomsChanged(val) => model.estimate.bathrooms = val,
        Msg::EstimateAreaChanged(val) => model.estimate.area = val,
        Msg::EstimateAgeChanged(val) => model.estimate.age = val,
        Msg::EstimateConditionChanged(val) => model.estimate.condition = val,
        Msg::AmenityToggled(amenity) => model.estimate.toggle(amenity),
        Msg::SubmitEstimate => match model.estimate.to_request() {
            Ok(payload) => {
                model.estimate_error = None;
                model.estimate_result = None;
                orders.perform_cmd(async move {
                    Msg::EstimateFetched(
                        api::estimate_price(payload)
                            .await
                            .map(|response| response.estimated_price)
                            .map_err(|err| err.to_string()),
                    )
                });
            }
            Err(err) => model.estimate_error = Some(err),
        },
        Msg::EstimateFetched(Ok(price)) => {
            model.estimate_result = Some(price);
            model.estimate_error = None;
        }
        Msg::EstimateFetched(Err(err)) => {
            web_sys::console::error_1(&format!("[frontend] price estimate failed: {err}").into());
            model.estimate_error =
                Some("Could not estimate the price, please try again".to_string());
        }
        Msg::ToggleFilters => model.filters_open = !model.filters_open,
        Msg::ToggleEstimate => model.estimate_open = !model.estimate_open,
        Msg::ToggleBaseLayer => {
            model.base_layer = model.base_layer.toggled();
            model.surface.set_base_layer(model.base_layer);
        }
        Msg::DismissNotice => model.notice = None,
    }
}

pub fn view(model: &Model) -> Node<Msg> {
    div![
        C!["app-container"],
        view_toolbar(model),
        view_notice(model),
        view_filters(model),
        view_estimate(model),
        view_listings(model),
    ]
}

fn view_toolbar(model: &Model) -> Node<Msg> {
    header![
        C!["toolbar"],
        h1!["Namibia Property Finder"],
        button![
            if model.filters_open { "Hide filters" } else { "Filters" },
            ev(Ev::Click, |event| {
                event.prevent_default();
                Msg::ToggleFilters
            }),
        ],
        button![
            if model.estimate_open { "Hide estimate" } else { "Price estimate" },
            ev(Ev::Click, |event| {
                event.prevent_default();
                Msg::ToggleEstimate
            }),
        ],
        button![
            "Locate me",
            ev(Ev::Click, |event| {
                event.prevent_default();
                Msg::LocateUser
            }),
        ],
        button![
            match model.base_layer {
                BaseLayer::Streets => "Satellite view",
                BaseLayer::Satellite => "Street view",
            },
            ev(Ev::Click, |event| {
                event.prevent_default();
                Msg::ToggleBaseLayer
            }),
        ],
    ]
}

fn view_notice(model: &Model) -> Node<Msg> {
    if let Some(notice) = &model.notice {
        p![
            C!["notice"],
            span![notice],
            button![
                "Dismiss",
                ev(Ev::Click, |event| {
                    event.prevent_default();
                    Msg::DismissNotice
                }),
            ],
        ]
    } else {
        empty![]
    }
}

fn view_filters(model: &Model) -> Node<Msg> {
    let input_field = |label_text: &str, value: &str, msg: fn(String) -> Msg| {
        div![
            C!["input-field"],
            label![label_text],
            input![
                attrs! {
                    At::Value => value,
                    At::AutoComplete => "off",
                },
                input_ev(Ev::Input, msg),
            ]
        ]
    };
    let min_count_select = |label_text: &str, value: &str, msg: fn(String) -> Msg| {
        div![
            C!["input-field"],
            label![label_text],
            select![
                attrs! { At::Value => value },
                option![attrs! { At::Value => "0" }, "Any"],
                (1..=5).map(|n| option![attrs! { At::Value => n.to_string() }, format!("{n}+")]),
                input_ev(Ev::Change, msg),
            ]
        ]
    };
    let check_group = |legend_text: &str,
                       options: &[&'static str],
                       selected: &std::collections::BTreeSet<String>,
                       msg: fn(String) -> Msg| {
        fieldset![
            legend![legend_text],
            options.iter().map(|&value| {
                label![
                    C!["checkbox"],
                    input![
                        attrs! {
                            At::Type => "checkbox",
                            At::Checked => bool_attr(selected.contains(value)),
                        },
                        ev(Ev::Change, move |_| msg(value.to_string())),
                    ],
                    span![value],
                ]
            }),
        ]
    };

    form![
        C!["filters", IF!(!model.filters_open => "collapsed")],
        fieldset![
            legend!["Location"],
            input_field("Suburb or town", &model.search.location, Msg::LocationChanged),
            button![
                "Go to location",
                ev(Ev::Click, |event| {
                    event.prevent_default();
                    Msg::LocateByText
                }),
            ],
        ],
        check_group(
            "Property type",
            &PROPERTY_TYPES,
            &model.search.property_types,
            Msg::PropertyTypeToggled
        ),
        check_group(
            "Deal",
            &DEAL_TYPES,
            &model.search.deal_types,
            Msg::DealTypeToggled
        ),
        fieldset![
            legend!["Price (N$)"],
            input_field("Min", &model.search.min_price, Msg::MinPriceChanged),
            input_field("Max", &model.search.max_price, Msg::MaxPriceChanged),
        ],
        fieldset![
            legend!["Rooms"],
            min_count_select("Bedrooms", &model.search.bedrooms, Msg::BedroomsChanged),
            min_count_select("Bathrooms", &model.search.bathrooms, Msg::BathroomsChanged),
        ],
        check_group(
            "Close to",
            &PROXIMITIES,
            &model.search.proximities,
            Msg::ProximityToggled
        ),
        button![
            "Search",
            attrs! { At::Disabled => bool_attr(model.searching) },
        ],
        ev(Ev::Submit, |event| {
            event.prevent_default();
            Msg::SubmitSearch
        }),
    ]
}

fn view_estimate(model: &Model) -> Node<Msg> {
    let input_field = |label_text: &str, value: &str, msg: fn(String) -> Msg| {
        div![
            C!["input-field"],
            label![label_text],
            input![
                attrs! {
                    At::Value => value,
                    At::AutoComplete => "off",
                },
                input_ev(Ev::Input, msg),
            ]
        ]
    };
    let amenity_checkbox = |label_text: &str, amenity: Amenity| {
        label![
            C!["checkbox"],
            input![
                attrs! {
                    At::Type => "checkbox",
                    At::Checked => bool_attr(model.estimate.amenity(amenity)),
                },
                ev(Ev::Change, move |_| Msg::AmenityToggled(amenity)),
            ],
            span![label_text],
        ]
    };

    form![
        C!["estimate", IF!(!model.estimate_open => "collapsed")],
        fieldset![
            legend!["Property"],
            div![
                C!["input-field"],
                label!["Type"],
                select![
                    attrs! { At::Value => model.estimate.property_type.as_str() },
                    option![attrs! { At::Value => "" }, "Select a type"],
                    PROPERTY_TYPES
                        .iter()
                        .map(|&value| option![attrs! { At::Value => value }, value]),
                    input_ev(Ev::Change, Msg::EstimateTypeChanged),
                ]
            ],
            input_field("Location", &model.estimate.location, Msg::EstimateLocationChanged),
            input_field("Area (sqm)", &model.estimate.area, Msg::EstimateAreaChanged),
            input_field("Bedrooms", &model.estimate.bedrooms, Msg::EstimateBedroomsChanged),
            input_field("Bathrooms", &model.estimate.bathrooms, Msg::EstimateBathroomsChanged),
            input_field("Age (years)", &model.estimate.age, Msg::EstimateAgeChanged),
            div![
                C!["input-field"],
                label!["Condition"],
                select![
                    attrs! { At::Value => model.estimate.condition.as_str() },
                    CONDITIONS
                        .iter()
                        .map(|&value| option![attrs! { At::Value => value }, value]),
                    input_ev(Ev::Change, Msg::EstimateConditionChanged),
                ]
            ],
        ],
        fieldset![
            legend!["Extras"],
            amenity_checkbox("Garage", Amenity::Garage),
            amenity_checkbox("Pool", Amenity::Pool),
            amenity_checkbox("Garden", Amenity::Garden),
            amenity_checkbox("Security system", Amenity::Security),
            amenity_checkbox("Air conditioning", Amenity::Aircon),
            amenity_checkbox("Furnished", Amenity::Furnished),
        ],
        button!["Estimate price"],
        if let Some(error) = &model.estimate_error {
            p![C!["error"], error]
        } else {
            empty![]
        },
        if let Some(price) = model.estimate_result {
            p![
                C!["estimate-result"],
                format!("Estimated price: {}", map::format_price(price))
            ]
        } else {
            empty![]
        },
        ev(Ev::Submit, |event| {
            event.prevent_default();
            Msg::SubmitEstimate
        }),
    ]
}

fn view_listings(model: &Model) -> Node<Msg> {
    section![
        C!["results"],
        h2![format!("{} properties found", model.listings.count())],
        ul![
            C!["property-list"],
            model.listings.properties().iter().map(view_card),
        ],
    ]
}

fn view_card(property: &Property) -> Node<Msg> {
    li![
        C!["property-card"],
        IF!(!property.image.is_empty() => img![attrs! {
            At::Src => property.image.as_str(),
            At::Alt => property.address.as_str(),
        }]),
        strong![map::format_price(property.price)],
        p![format!(
            "{} bed / {} bath",
            property.bedrooms, property.bathrooms
        )],
        p![C!["address"], &property.address],
        small![format!("{} for {}", property.kind, property.deal_type)],
    ]
}

#[wasm_bindgen(start)]
pub fn start() {
    App::start("app", init, update, view);
}

fn bool_attr(value: bool) -> AtValue {
    if value {
        AtValue::Some("true".into())
    } else {
        AtValue::Ignored
    }
}
