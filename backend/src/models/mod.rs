use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::reference::{GARAGE_KEYWORDS, POOL_KEYWORDS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    #[serde(rename = "SFH")]
    Sfh,
    Condo,
}

impl PropertyType {
    pub fn as_str(self) -> &'static str {
        match self {
            PropertyType::Sfh => "SFH",
            PropertyType::Condo => "Condo",
        }
    }

    /// Returns `(lot_area, building_area)`: single family homes carry their
    /// size as lot area, condos as building area.
    pub fn split_area(self, size_sqft: i64) -> (i64, i64) {
        match self {
            PropertyType::Sfh => (size_sqft, 0),
            PropertyType::Condo => (0, size_sqft),
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "SFH" => Ok(PropertyType::Sfh),
            "Condo" => Ok(PropertyType::Condo),
            other => Err(Error::InvalidInput(format!(
                "property_type must be 'SFH' or 'Condo', got '{}'",
                other
            ))),
        }
    }
}

/// A fully populated property, produced either by the address generator or by
/// the catalog. `predicted_price` is only set once the record is appraised.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub id: i64,
    pub title: String,
    pub listed_price: i64,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub size_sqft: i64,
    pub amenities: Vec<String>,
    pub image_url: String,
    pub property_type: PropertyType,
    pub lot_area: i64,
    pub building_area: i64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub year_built: i32,
    pub has_pool: bool,
    pub has_garage: bool,
    pub school_rating: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_price: Option<f64>,
}

impl PropertyRecord {
    pub fn features(&self) -> ValuationFeatures {
        ValuationFeatures {
            property_type: self.property_type,
            lot_area: self.lot_area,
            building_area: self.building_area,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            year_built: self.year_built,
            has_pool: self.has_pool,
            has_garage: self.has_garage,
            school_rating: self.school_rating,
        }
    }
}

/// The inputs the valuation formula reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationFeatures {
    pub property_type: PropertyType,
    pub lot_area: i64,
    pub building_area: i64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub year_built: i32,
    pub has_pool: bool,
    pub has_garage: bool,
    pub school_rating: i32,
}

/// Feature set as an external caller sends it, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuationRequest {
    pub property_type: String,
    #[serde(default)]
    pub lot_area: i64,
    #[serde(default)]
    pub building_area: i64,
    pub bedrooms: i64,
    pub bathrooms: i64,
    pub year_built: i32,
    pub has_pool: bool,
    pub has_garage: bool,
    pub school_rating: i32,
}

fn non_negative(field: &str, value: i64) -> Result<i64> {
    if value < 0 {
        return Err(Error::InvalidInput(format!("{} must be >= 0, got {}", field, value)));
    }
    Ok(value)
}

fn room_count(field: &str, value: i64) -> Result<u32> {
    u32::try_from(non_negative(field, value)?)
        .map_err(|_| Error::InvalidInput(format!("{} is out of range: {}", field, value)))
}

impl TryFrom<ValuationRequest> for ValuationFeatures {
    type Error = Error;

    fn try_from(req: ValuationRequest) -> Result<Self> {
        let property_type = req.property_type.parse()?;
        if !(1600..=2100).contains(&req.year_built) {
            return Err(Error::InvalidInput(format!(
                "year_built must be within 1600..=2100, got {}",
                req.year_built
            )));
        }
        if !(1..=10).contains(&req.school_rating) {
            return Err(Error::InvalidInput(format!(
                "school_rating must be within 1..=10, got {}",
                req.school_rating
            )));
        }
        Ok(Self {
            property_type,
            lot_area: non_negative("lot_area", req.lot_area)?,
            building_area: non_negative("building_area", req.building_area)?,
            bedrooms: room_count("bedrooms", req.bedrooms)?,
            bathrooms: room_count("bathrooms", req.bathrooms)?,
            year_built: req.year_built,
            has_pool: req.has_pool,
            has_garage: req.has_garage,
            school_rating: req.school_rating,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub property_id_1: i64,
    pub property_id_2: i64,
}

#[derive(Debug, Deserialize)]
pub struct CompareAddressesRequest {
    pub address_1: String,
    pub address_2: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CompareResponse {
    pub property_1: PropertyRecord,
    pub property_2: PropertyRecord,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub predicted_price: f64,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct LookupParams {
    pub address: String,
}

/// Drops repeated amenities, keeping the first occurrence of each.
pub fn dedup_amenities<I, S>(amenities: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut out: Vec<String> = Vec::new();
    for amenity in amenities {
        let amenity = amenity.into();
        if !out.contains(&amenity) {
            out.push(amenity);
        }
    }
    out
}

fn mentions_any(amenities: &[String], keywords: &[&str]) -> bool {
    amenities.iter().any(|amenity| {
        let lower = amenity.to_lowercase();
        keywords.iter().any(|keyword| lower.contains(keyword))
    })
}

pub fn has_pool(amenities: &[String]) -> bool {
    mentions_any(amenities, POOL_KEYWORDS)
}

pub fn has_garage(amenities: &[String]) -> bool {
    mentions_any(amenities, GARAGE_KEYWORDS)
}
