pub use crate::common::RouteResult;

use std::sync::Arc;

use axum::{extract::FromRef, routing::get_service, Router};
use directory::catalog::LocationCatalog;
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};

pub mod api;
pub mod common;
pub mod hateoas;
pub mod middleware;

#[derive(Clone, FromRef)]
pub struct WebState {
    pub catalog: Arc<LocationCatalog>,
}

pub fn app(state: WebState) -> Router {
    Router::new()
        .nest_service("/api", api::routes(state))
        .fallback_service(static_content_router())
}

pub async fn start_web_server(state: WebState, listen_addr: &str) -> std::io::Result<()> {
    let listener = TcpListener::bind(listen_addr).await?;
    axum::serve(listener, app(state).into_make_service()).await?;

    Ok(())
}

fn static_content_router() -> Router {
    Router::new().nest_service(
        "/",
        get_service(
            ServeDir::new("./resources/www/")
                .not_found_service(ServeFile::new("./resources/www/error404.html")),
        ),
    )
}
