use std::time::Duration;

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, on, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use model::lead::TourRequest;
use schemars::JsonSchema;
use serde::Serialize;
use serde_json::json;
use validator::Validate;

use crate::{
    common::{
        confirmation_code, route_not_found, schema_no_example, RouteErrorResponse,
        RouteResult, METHOD_FILTER_ALL,
    },
    WebState,
};

macro_rules! resource {
    ($($arg:tt)*) => {
        crate::api::v1::resource!("/tour{}", format_args!($($arg)*))
    };
}
pub(crate) use resource;

/// Mock processing latency for the scheduling backend that does not exist.
const PROCESSING_DELAY: Duration = Duration::from_millis(500);

pub(crate) fn routes(state: WebState) -> Router {
    Router::new()
        .route("/schema", get(schema_no_example::<TourRequest>))
        .route("/", post(schedule_tour).get(usage))
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
struct TourConfirmation {
    success: bool,
    confirmation_number: String,
    message: String,
    scheduled_at: DateTime<Utc>,
    request: TourRequest,
}

async fn schedule_tour(
    Json(payload): Json<TourRequest>,
) -> RouteResult<impl IntoResponse> {
    payload
        .validate()
        .map_err(RouteErrorResponse::validation)?;

    log::info!(
        "tour request for {} from {}",
        payload.location,
        payload.email
    );
    tokio::time::sleep(PROCESSING_DELAY).await;

    let confirmation = TourConfirmation {
        success: true,
        confirmation_number: confirmation_code("LH"),
        message: "Your tour request has been received. Our team will reach out \
                  within one business day to confirm the date and time."
            .to_owned(),
        scheduled_at: Utc::now(),
        request: payload,
    };
    Ok((StatusCode::CREATED, Json(confirmation)))
}

async fn usage() -> impl IntoResponse {
    Json(json!({
        "message": "POST a tour request to this resource to schedule a visit.",
        "schema": resource!("/schema"),
    }))
}
