use std::sync::Arc;

use property_valuation::catalog::Catalog;
use property_valuation::config::AppConfig;
use property_valuation::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let config = AppConfig::load()?;
    log::info!("Loaded config: {:?}", config);

    let addr = config.socket_addr()?;

    // Missing or corrupt tables abort startup.
    let catalog = Catalog::from_dir(&config.data_dir)?;

    log::info!("Starting server on {}", addr);

    let state = AppState { config, catalog: Arc::new(catalog) };
    let app = build_router(state);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app.into_make_service()).await?;

    Ok(())
}
