use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::{self, PropertyRecord, PropertyType};
use crate::reference::{self, CONDO_KEYWORDS, SFH_KEYWORDS};

pub const BASIC_TABLE: &str = "properties_basic.json";
pub const FEATURES_TABLE: &str = "properties_features.json";
pub const IMAGES_TABLE: &str = "properties_images.json";

const DEFAULT_SIZE_SQFT: i64 = 1000;
const DEFAULT_BEDROOMS: u32 = 2;
const DEFAULT_BATHROOMS: u32 = 1;

#[derive(Debug, Clone, Deserialize)]
struct BasicRow {
    id: Option<i64>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    price: i64,
}

#[derive(Debug, Clone, Deserialize)]
struct FeatureRow {
    id: Option<i64>,
    size_sqft: Option<i64>,
    amenities: Option<Vec<String>>,
    bedrooms: Option<u32>,
    bathrooms: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
struct ImageRow {
    id: Option<i64>,
    image_url: Option<String>,
}

fn require_id(table: &str, index: usize, id: Option<i64>) -> Result<i64> {
    id.ok_or_else(|| Error::InvalidInput(format!("{} row {} is missing `id`", table, index)))
}

/// Indexes rows by id; a later duplicate replaces an earlier one.
fn index_by_id<T>(
    table: &str,
    rows: Vec<T>,
    id_of: impl Fn(&T) -> Option<i64>,
) -> Result<HashMap<i64, T>> {
    let mut by_id = HashMap::with_capacity(rows.len());
    for (index, row) in rows.into_iter().enumerate() {
        by_id.insert(require_id(table, index, id_of(&row))?, row);
    }
    Ok(by_id)
}

fn read_table<T: DeserializeOwned>(dir: &Path, name: &str) -> Result<Vec<T>> {
    let path = dir.join(name);
    let raw = fs::read_to_string(&path)
        .map_err(|source| Error::TableRead { path: path.clone(), source })?;
    serde_json::from_str(&raw).map_err(|source| Error::TableParse { path, source })
}

fn parse_table<T: DeserializeOwned>(name: &str, raw: &str) -> Result<Vec<T>> {
    serde_json::from_str(raw).map_err(|source| Error::TableParse { path: name.into(), source })
}

/// The three listing tables, joined on demand into property records.
#[derive(Debug, Clone)]
pub struct Catalog {
    basic: Vec<(i64, BasicRow)>,
    features: HashMap<i64, FeatureRow>,
    images: HashMap<i64, ImageRow>,
}

impl Catalog {
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        log::info!("Loading catalog tables from {}", dir.display());
        Self::from_rows(
            read_table(dir, BASIC_TABLE)?,
            read_table(dir, FEATURES_TABLE)?,
            read_table(dir, IMAGES_TABLE)?,
        )
    }

    pub fn from_json(basic: &str, features: &str, images: &str) -> Result<Self> {
        Self::from_rows(
            parse_table(BASIC_TABLE, basic)?,
            parse_table(FEATURES_TABLE, features)?,
            parse_table(IMAGES_TABLE, images)?,
        )
    }

    fn from_rows(basic: Vec<BasicRow>, features: Vec<FeatureRow>, images: Vec<ImageRow>) -> Result<Self> {
        let mut listings = Vec::with_capacity(basic.len());
        for (index, row) in basic.into_iter().enumerate() {
            listings.push((require_id(BASIC_TABLE, index, row.id)?, row));
        }
        let features = index_by_id(FEATURES_TABLE, features, |row| row.id)?;
        let images = index_by_id(IMAGES_TABLE, images, |row| row.id)?;
        log::info!(
            "Catalog ready: {} listings, {} feature rows, {} image rows",
            listings.len(),
            features.len(),
            images.len()
        );
        Ok(Self { basic: listings, features, images })
    }

    pub fn len(&self) -> usize {
        self.basic.len()
    }

    pub fn is_empty(&self) -> bool {
        self.basic.is_empty()
    }

    fn normalize(&self, id: i64, row: &BasicRow) -> PropertyRecord {
        let feature = self.features.get(&id);
        let size_sqft = feature.and_then(|f| f.size_sqft).unwrap_or(DEFAULT_SIZE_SQFT);
        let amenities = models::dedup_amenities(
            feature.and_then(|f| f.amenities.clone()).unwrap_or_default(),
        );
        let image_url = self
            .images
            .get(&id)
            .and_then(|img| img.image_url.clone())
            .unwrap_or_default();

        let property_type = infer_property_type(&row.title);
        let (lot_area, building_area) = property_type.split_area(size_sqft);

        PropertyRecord {
            id,
            title: row.title.clone(),
            listed_price: row.price,
            location: row.location.clone(),
            address: None,
            size_sqft,
            has_pool: models::has_pool(&amenities),
            has_garage: models::has_garage(&amenities),
            amenities,
            image_url,
            property_type,
            lot_area,
            building_area,
            bedrooms: feature.and_then(|f| f.bedrooms).unwrap_or(DEFAULT_BEDROOMS),
            bathrooms: feature.and_then(|f| f.bathrooms).unwrap_or(DEFAULT_BATHROOMS),
            year_built: synthesize_year_built(id, size_sqft, row.price),
            school_rating: school_rating(&row.location, id),
            predicted_price: None,
        }
    }

    /// Every listing, in basic-table order.
    pub fn load(&self) -> Vec<PropertyRecord> {
        self.basic.iter().map(|(id, row)| self.normalize(*id, row)).collect()
    }

    pub fn by_id(&self, id: i64) -> Option<PropertyRecord> {
        self.basic
            .iter()
            .find(|(row_id, _)| *row_id == id)
            .map(|(row_id, row)| self.normalize(*row_id, row))
    }

    /// Case-insensitive substring match on title and location. A blank
    /// query returns everything.
    pub fn search(&self, query: &str) -> Vec<PropertyRecord> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.load();
        }
        self.basic
            .iter()
            .filter(|(_, row)| format!("{} {}", row.title, row.location).to_lowercase().contains(&needle))
            .map(|(id, row)| self.normalize(*id, row))
            .collect()
    }
}

/// Condo keywords are checked before single family ones; ambiguous titles
/// fall back to condo.
pub fn infer_property_type(title: &str) -> PropertyType {
    let title = title.to_lowercase();
    if CONDO_KEYWORDS.iter().any(|k| title.contains(k)) {
        PropertyType::Condo
    } else if SFH_KEYWORDS.iter().any(|k| title.contains(k)) {
        PropertyType::Sfh
    } else {
        PropertyType::Condo
    }
}

/// Pricier and larger listings skew newer.
pub fn synthesize_year_built(id: i64, size_sqft: i64, price: i64) -> i32 {
    let mut year: i64 = 1970;
    year += match price {
        p if p > 1_000_000 => 35,
        p if p > 700_000 => 25,
        p if p > 400_000 => 15,
        _ => 0,
    };
    year += match size_sqft {
        s if s > 2500 => 10,
        s if s > 1500 => 5,
        _ => 0,
    };
    year += id.wrapping_mul(3).rem_euclid(15);
    year.clamp(1950, 2024) as i32
}

pub fn school_rating(location: &str, id: i64) -> i32 {
    let base = reference::catalog_school_base(&location.to_lowercase());
    let variance = id.rem_euclid(3) as i32 - 1;
    (base + variance).clamp(1, 10)
}
