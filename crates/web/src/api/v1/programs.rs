use axum::{
    routing::{get, on},
    Json, Router,
};
use model::program::{AgeGroup, ProgramInfo};

use crate::{
    common::{route_not_found, schema_no_example, VecResponse, METHOD_FILTER_ALL},
    WebState,
};

pub(crate) fn routes(state: WebState) -> Router {
    Router::new()
        .route("/schema", get(schema_no_example::<ProgramInfo>))
        .route("/", get(get_programs))
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

async fn get_programs() -> Json<VecResponse<ProgramInfo>> {
    let programs = AgeGroup::ALL
        .iter()
        .map(AgeGroup::info)
        .collect::<Vec<_>>();
    VecResponse::non_paginated(programs).json()
}
