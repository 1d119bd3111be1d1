//! Deterministic property synthesis and valuation.
//!
//! Two sources produce the same [`models::PropertyRecord`] shape: the
//! address [`generator`] and the table-backed [`catalog`]. Both are priced by
//! the single closed-form [`valuation`] function.

use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub mod catalog;
pub mod config;
pub mod error;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod reference;
pub mod valuation;

pub use error::{Error, Result};

#[derive(Clone)]
pub struct AppState {
    pub config: config::AppConfig,
    pub catalog: Arc<catalog::Catalog>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health))
        .route("/properties", get(handlers::list_properties))
        .route("/properties/:id", get(handlers::get_property))
        .route("/compare", post(handlers::compare_properties))
        .route("/compare-addresses", post(handlers::compare_addresses))
        .route("/lookup-address", get(handlers::lookup_address))
        .route("/predict", post(handlers::predict_price))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
