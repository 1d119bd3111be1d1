//! Closed-form price estimate shared by generated and catalog properties.

use crate::error::Result;
use crate::models::{PropertyRecord, PropertyType, ValuationFeatures, ValuationRequest};

const BASE_PRICE: f64 = 75_000.0;
const BEDROOM_VALUE: f64 = 32_500.0;
const BATHROOM_VALUE: f64 = 27_500.0;
const SCHOOL_POINT_VALUE: f64 = 11_500.0;
const POOL_VALUE: f64 = 18_000.0;
const GARAGE_VALUE: f64 = 12_500.0;
const AGE_PENALTY_PER_YEAR: f64 = 900.0;
const REFERENCE_YEAR: i32 = 2025;
pub const PRICE_FLOOR: f64 = 25_000.0;

/// `(area, rate per sqft, type bias)` for the property type.
fn area_terms(features: &ValuationFeatures) -> (i64, f64, f64) {
    match features.property_type {
        PropertyType::Sfh => (features.lot_area, 12.0, 65_000.0),
        PropertyType::Condo => (features.building_area, 220.0, 35_000.0),
    }
}

pub fn predict(features: &ValuationFeatures) -> f64 {
    let (area, area_rate, type_bias) = area_terms(features);

    let mut price = BASE_PRICE
        + type_bias
        + area as f64 * area_rate
        + features.bedrooms as f64 * BEDROOM_VALUE
        + features.bathrooms as f64 * BATHROOM_VALUE
        + features.school_rating.clamp(1, 10) as f64 * SCHOOL_POINT_VALUE;
    if features.has_pool {
        price += POOL_VALUE;
    }
    if features.has_garage {
        price += GARAGE_VALUE;
    }

    let age = (REFERENCE_YEAR - features.year_built).max(0);
    price -= age as f64 * AGE_PENALTY_PER_YEAR;

    let rounded = (price * 100.0).round() / 100.0;
    rounded.max(PRICE_FLOOR)
}

/// Validates an external feature set, then prices it.
pub fn predict_request(request: ValuationRequest) -> Result<f64> {
    let features = ValuationFeatures::try_from(request)?;
    Ok(predict(&features))
}

/// Attaches the prediction to a record.
pub fn appraise(mut record: PropertyRecord) -> PropertyRecord {
    record.predicted_price = Some(predict(&record.features()));
    record
}
