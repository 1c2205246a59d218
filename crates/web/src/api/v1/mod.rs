use axum::{
    routing::{get, on},
    Router,
};

use crate::{
    common::{route_not_found, METHOD_FILTER_ALL},
    WebState,
};

mod availability;
mod contact;
mod locations;
mod programs;
mod tour;
mod waitlist;

macro_rules! resource {
    ($($arg:tt)*) => {
        crate::api::resource!("/v1{}", format_args!($($arg)*))
    };
}
pub(crate) use resource;

pub(crate) fn routes(state: WebState) -> Router {
    Router::new()
        .route("/", get(route_index))
        .nest_service("/locations", locations::routes(state.clone()))
        .nest_service("/programs", programs::routes(state.clone()))
        .nest_service("/availability", availability::routes(state.clone()))
        .nest_service("/tour", tour::routes(state.clone()))
        .nest_service("/contact", contact::routes(state.clone()))
        .nest_service("/waitlist", waitlist::routes(state))
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

async fn route_index() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "resources": [
            resource!("/locations"),
            resource!("/programs"),
            resource!("/availability"),
            resource!("/tour"),
            resource!("/contact"),
            resource!("/waitlist"),
        ]
    }))
}
