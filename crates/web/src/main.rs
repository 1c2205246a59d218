use std::sync::Arc;

use directory::catalog::LocationCatalog;
use web::{start_web_server, WebState};

#[tokio::main]
async fn main() {
    env_logger::init();

    // location catalog
    let catalog = match std::env::var("LOCATIONS_FILE") {
        Ok(path) => LocationCatalog::from_file(&path)
            .expect("could not load location catalog from LOCATIONS_FILE."),
        Err(_) => {
            LocationCatalog::builtin().expect("builtin location catalog is invalid.")
        }
    };

    // web server
    let listen_addr =
        std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_owned());
    log::info!("listening on {}", listen_addr);

    let web_future = start_web_server(
        WebState {
            catalog: Arc::new(catalog),
        },
        &listen_addr,
    );

    let _ = web_future.await;
}
