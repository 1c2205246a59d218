use std::sync::Arc;

use axum::{
    extract::{OriginalUri, Path, Query, State},
    http::Method,
    routing::{get, on},
    Extension, Router,
};
use directory::{
    filter::{LocationFilter, StateFilter},
    sort::{annotate_with_distance, sort_by_distance, SortOrder},
};
use model::{location::Location, WithDistance};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::{
    geo::{calculate_bounding_box, format_distance},
    id::Id,
};

use crate::{
    common::{
        route_not_found, schema, HateoasResult, RouteErrorResponse, VecResponse,
        METHOD_FILTER_ALL,
    },
    hateoas,
    middleware::base_url::{base_url_middleware, BaseUrl},
    WebState,
};

macro_rules! resource {
    ($($arg:tt)*) => {
        crate::api::v1::resource!("/locations{}", format_args!($($arg)*))
    };
}
pub(crate) use resource;

pub(crate) fn routes(state: WebState) -> Router {
    Router::new()
        .route("/schema", get(schema::<Location>))
        .route("/states", get(get_states))
        .route("/nearby", get(nearby))
        .route("/:slug", get(get_location))
        .route("/", get(get_locations))
        .layer(axum::middleware::from_fn(base_url_middleware))
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

/// One directory entry on the wire. Distance fields only appear when the
/// caller supplied a reference coordinate; they are recomputed per request
/// and never stored.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
struct LocationEntry {
    distance_mi: Option<f64>,
    distance_label: Option<String>,
    #[serde(flatten)]
    location: Location,
}

impl LocationEntry {
    fn plain(location: Location) -> Self {
        Self {
            distance_mi: None,
            distance_label: None,
            location,
        }
    }

    fn annotated(entry: WithDistance<Location>) -> Self {
        Self {
            distance_mi: Some(entry.distance_mi),
            distance_label: Some(format_distance(entry.distance_mi)),
            location: entry.content,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LocationsQuery {
    q: Option<String>,
    state: Option<String>,
    sort: Option<SortOrder>,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

impl LocationsQuery {
    fn filter(&self) -> LocationFilter {
        let state = match self.state.as_deref() {
            None | Some("All") => StateFilter::All,
            Some(state) => StateFilter::Only(state.to_owned()),
        };
        LocationFilter {
            state,
            query: self.q.clone().unwrap_or_default(),
        }
    }
}

async fn get_locations(
    State(WebState { catalog }): State<WebState>,
    Query(params): Query<LocationsQuery>,
    Extension(base_url): Extension<Arc<BaseUrl>>,
) -> HateoasResult<VecResponse<hateoas::Response<LocationEntry>>> {
    let filtered = params.filter().apply(catalog.locations());
    let position = params.latitude.zip(params.longitude);

    let entries: Vec<LocationEntry> =
        match (params.sort.unwrap_or_default(), position) {
            // distance ordering needs a reference coordinate; without one the
            // default name ordering stands
            (SortOrder::Distance, Some((latitude, longitude))) => {
                sort_by_distance(&filtered, latitude, longitude)
                    .into_iter()
                    .map(LocationEntry::annotated)
                    .collect()
            }
            (_, Some((latitude, longitude))) => {
                annotate_with_distance(&filtered, latitude, longitude)
                    .into_iter()
                    .map(LocationEntry::annotated)
                    .collect()
            }
            (_, None) => filtered.into_iter().map(LocationEntry::plain).collect(),
        };

    let data = entries
        .into_iter()
        .map(|entry| location_hateoas(entry, base_url.clone()))
        .collect::<Vec<_>>();
    Ok(VecResponse::non_paginated(data).hateoas().json())
}

async fn get_location(
    OriginalUri(original_uri): OriginalUri,
    Path(slug): Path<String>,
    State(WebState { catalog }): State<WebState>,
    Extension(base_url): Extension<Arc<BaseUrl>>,
) -> HateoasResult<LocationEntry> {
    catalog
        .get(&Id::new(slug))
        .map(|location| {
            location_hateoas(LocationEntry::plain(location.clone()), base_url).json()
        })
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::GET)
                .with_uri(original_uri.path())
        })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NearbyQuery {
    latitude: f64,
    longitude: f64,
    radius: Option<f64>,
}

async fn nearby(
    State(WebState { catalog }): State<WebState>,
    Query(params): Query<NearbyQuery>,
    Extension(base_url): Extension<Arc<BaseUrl>>,
) -> HateoasResult<VecResponse<hateoas::Response<LocationEntry>>> {
    let radius = params.radius.unwrap_or(25.0);

    // cheap box first, exact haversine cut after
    let ((min_lat, min_lon), (max_lat, max_lon)) =
        calculate_bounding_box(params.latitude, params.longitude, radius);
    let candidates = catalog
        .locations()
        .filter(|location| {
            (min_lat..=max_lat).contains(&location.latitude)
                && (min_lon..=max_lon).contains(&location.longitude)
        })
        .cloned()
        .collect::<Vec<_>>();

    let data = sort_by_distance(&candidates, params.latitude, params.longitude)
        .into_iter()
        .filter(|entry| entry.distance_mi <= radius)
        .map(|entry| location_hateoas(LocationEntry::annotated(entry), base_url.clone()))
        .collect::<Vec<_>>();
    Ok(VecResponse::non_paginated(data).hateoas().json())
}

async fn get_states(
    State(WebState { catalog }): State<WebState>,
) -> HateoasResult<VecResponse<String>> {
    Ok(VecResponse::non_paginated(catalog.states())
        .hateoas()
        .json())
}

fn location_hateoas(
    entry: LocationEntry,
    base_url: Arc<BaseUrl>,
) -> hateoas::Response<LocationEntry> {
    let slug = entry.location.slug.raw();
    let latitude = entry.location.latitude;
    let longitude = entry.location.longitude;
    hateoas::Response::builder(entry, base_url)
        .link("self", resource!("/{}", slug))
        .link(
            "availability",
            super::availability::resource!("?location={}", slug),
        )
        .link("tour", super::tour::resource!(""))
        .link(
            "nearby",
            resource!(
                "/nearby?latitude={}&longitude={}&radius=25",
                latitude,
                longitude
            ),
        )
        .build()
}
