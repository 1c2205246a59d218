use std::time::Duration;

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, on, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use model::lead::ContactMessage;
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
        crate::api::v1::resource!("/contact{}", format_args!($($arg)*))
    };
}

const PROCESSING_DELAY: Duration = Duration::from_millis(500);

pub(crate) fn routes(state: WebState) -> Router {
    Router::new()
        .route("/schema", get(schema_no_example::<ContactMessage>))
        .route("/", post(submit_message).get(usage))
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
struct ContactConfirmation {
    success: bool,
    confirmation_number: String,
    message: String,
    submitted_at: DateTime<Utc>,
    request: ContactMessage,
}

async fn submit_message(
    Json(payload): Json<ContactMessage>,
) -> RouteResult<impl IntoResponse> {
    payload
        .validate()
        .map_err(RouteErrorResponse::validation)?;

    log::info!(
        "contact message \"{}\" from {}",
        payload.subject,
        payload.email
    );
    tokio::time::sleep(PROCESSING_DELAY).await;

    let confirmation = ContactConfirmation {
        success: true,
        confirmation_number: confirmation_code("CT"),
        message: "Thank you for reaching out. We typically respond within one \
                  business day."
            .to_owned(),
        submitted_at: Utc::now(),
        request: payload,
    };
    Ok((StatusCode::CREATED, Json(confirmation)))
}

async fn usage() -> impl IntoResponse {
    Json(json!({
        "message": "POST a contact message to this resource to get in touch.",
        "schema": resource!("/schema"),
    }))
}
