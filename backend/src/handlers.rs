use axum::extract::{Path, Query, State};
use axum::Json;
use serde_json::{json, Value};

use crate::error::{Error, Result};
use crate::generator;
use crate::models::{
    CompareAddressesRequest, CompareRequest, CompareResponse, LookupParams, PredictionResponse,
    PropertyRecord, SearchParams, ValuationRequest,
};
use crate::valuation;
use crate::AppState;

pub async fn health() -> Json<Value> {
    Json(json!({"status": "ok", "message": "Property Comparison API is running"}))
}

/// Lists catalog properties, optionally filtered by `q`, each with a
/// predicted price.
pub async fn list_properties(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<PropertyRecord>> {
    let records = state.catalog.search(&params.q);
    log::info!("Listing {} properties for query '{}'", records.len(), params.q);
    Json(records.into_iter().map(valuation::appraise).collect())
}

fn catalog_property(state: &AppState, id: i64) -> Result<PropertyRecord> {
    state
        .catalog
        .by_id(id)
        .map(valuation::appraise)
        .ok_or_else(|| Error::NotFound(format!("Property {} not found", id)))
}

pub async fn get_property(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PropertyRecord>> {
    log::info!("Fetching property with ID: {}", id);
    Ok(Json(catalog_property(&state, id)?))
}

pub async fn compare_properties(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> Result<Json<CompareResponse>> {
    log::info!("Comparing properties {} and {}", request.property_id_1, request.property_id_2);
    Ok(Json(CompareResponse {
        property_1: catalog_property(&state, request.property_id_1)?,
        property_2: catalog_property(&state, request.property_id_2)?,
    }))
}

pub async fn compare_addresses(
    Json(request): Json<CompareAddressesRequest>,
) -> Result<Json<CompareResponse>> {
    let property_1 = generator::generate(&request.address_1)?;
    let property_2 = generator::generate(&request.address_2)?;
    log::info!("Comparing generated properties {} and {}", property_1.id, property_2.id);
    Ok(Json(CompareResponse {
        property_1: valuation::appraise(property_1),
        property_2: valuation::appraise(property_2),
    }))
}

pub async fn lookup_address(Query(params): Query<LookupParams>) -> Result<Json<PropertyRecord>> {
    let property = generator::generate(&params.address)?;
    log::info!("Looked up address '{}' as property {}", params.address.trim(), property.id);
    Ok(Json(valuation::appraise(property)))
}

pub async fn predict_price(Json(request): Json<ValuationRequest>) -> Result<Json<PredictionResponse>> {
    let predicted_price = valuation::predict_request(request)?;
    Ok(Json(PredictionResponse { predicted_price }))
}
