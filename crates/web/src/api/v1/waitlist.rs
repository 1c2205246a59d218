use std::time::Duration;

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, on, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use model::lead::WaitlistSignup;
use rand::Rng;
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
        crate::api::v1::resource!("/waitlist{}", format_args!($($arg)*))
    };
}

const PROCESSING_DELAY: Duration = Duration::from_millis(500);

pub(crate) fn routes(state: WebState) -> Router {
    Router::new()
        .route("/schema", get(schema_no_example::<WaitlistSignup>))
        .route("/", post(join_waitlist).get(usage))
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
struct WaitlistConfirmation {
    success: bool,
    confirmation_number: String,
    message: String,
    position: u32,
    estimated_wait: String,
    signed_up_at: DateTime<Utc>,
    request: WaitlistSignup,
}

async fn join_waitlist(
    Json(payload): Json<WaitlistSignup>,
) -> RouteResult<impl IntoResponse> {
    payload
        .validate()
        .map_err(RouteErrorResponse::validation)?;

    log::info!(
        "waitlist signup for {} ({}) from {}",
        payload.location,
        payload.program,
        payload.email
    );
    tokio::time::sleep(PROCESSING_DELAY).await;

    // No enrollment backend, so the position is made up on the spot.
    let position: u32 = rand::rng().random_range(1..=5);
    let confirmation = WaitlistConfirmation {
        success: true,
        confirmation_number: confirmation_code("WL"),
        message: "You have been added to the waitlist. We will contact you as \
                  soon as a spot opens up."
            .to_owned(),
        position,
        estimated_wait: format!("{}-{} weeks", position * 2, position * 4),
        signed_up_at: Utc::now(),
        request: payload,
    };
    Ok((StatusCode::CREATED, Json(confirmation)))
}

async fn usage() -> impl IntoResponse {
    Json(json!({
        "message": "POST a signup to this resource to join a program's waitlist.",
        "schema": resource!("/schema"),
    }))
}
