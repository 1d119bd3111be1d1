//! Fabricates a complete property from nothing but an address string.
//!
//! Every attribute is derived from [`fingerprint`], so the same address always
//! produces the same property, across calls and across processes.

use crate::error::{Error, Result};
use crate::models::{self, PropertyRecord, PropertyType};
use crate::reference::{self, AMENITY_POOL, IMAGE_POOL};

/// Position-weighted code point sum of the lower-cased address. Must be
/// identical across processes, which rules out `std::hash`.
pub fn fingerprint(address: &str) -> u64 {
    address
        .to_lowercase()
        .chars()
        .enumerate()
        .fold(0u64, |acc, (i, c)| acc.wrapping_add((c as u64).wrapping_mul(i as u64 + 1)))
}

/// Market inputs resolved for one address.
struct Market {
    avg_price: i64,
    school_base: i32,
    property_type: PropertyType,
    sqft_min: i64,
    sqft_max: i64,
}

fn resolve_market(address_lower: &str, fp: u64) -> Market {
    match reference::market_profile(address_lower) {
        Some(profile) => {
            log::debug!("address matched market profile '{}'", profile.city);
            Market {
                avg_price: profile.avg_price,
                school_base: profile.school_base,
                property_type: profile.default_type,
                sqft_min: profile.sqft_range.0,
                sqft_max: profile.sqft_range.1,
            }
        }
        None => Market {
            avg_price: reference::DEFAULT_AVG_PRICE,
            school_base: reference::DEFAULT_SCHOOL_BASE,
            property_type: if fp % 2 == 0 { PropertyType::Sfh } else { PropertyType::Condo },
            sqft_min: reference::DEFAULT_SQFT_RANGE.0,
            sqft_max: reference::DEFAULT_SQFT_RANGE.1,
        },
    }
}

fn pick<T: Copy>(pool: &[T], fp: u64) -> T {
    pool[(fp % pool.len() as u64) as usize]
}

/// Last two comma-separated segments, or the whole address without commas.
fn display_location(address: &str) -> String {
    if !address.contains(',') {
        return address.to_string();
    }
    let parts: Vec<&str> = address.split(',').collect();
    parts[parts.len().saturating_sub(2)..]
        .iter()
        .map(|part| part.trim())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn generate(address: &str) -> Result<PropertyRecord> {
    let address = address.trim();
    if address.is_empty() {
        return Err(Error::InvalidInput("Address cannot be empty".to_string()));
    }

    let fp = fingerprint(address);
    let market = resolve_market(&address.to_lowercase(), fp);

    let size_sqft = market.sqft_min + (fp % (market.sqft_max - market.sqft_min) as u64) as i64;
    let bedrooms = 1 + (fp % 5) as u32;
    let bathrooms = 1 + (fp % 4) as u32;
    let year_built = (1960 + (fp % 60) as i32).min(2024);

    let multiplier = 0.8 + (fp % 40) as f64 / 100.0;
    let listed_price =
        (market.avg_price as f64 * multiplier * (size_sqft as f64 / 1500.0)).floor() as i64;

    let first = pick(AMENITY_POOL, fp);
    let second = pick(AMENITY_POOL, fp.wrapping_add(3));
    let amenities = models::dedup_amenities(
        first.iter().take(2).chain(second.iter().take(2)).copied(),
    );

    let school_rating = (market.school_base + (fp % 3) as i32 - 1).clamp(1, 10);
    let title = pick(reference::title_templates(market.property_type), fp)
        .replace("{bedrooms}", &bedrooms.to_string());
    let (lot_area, building_area) = market.property_type.split_area(size_sqft);

    log::debug!("generated property {} for '{}'", fp % 100_000, address);

    Ok(PropertyRecord {
        id: (fp % 100_000) as i64,
        title,
        listed_price,
        location: display_location(address),
        address: Some(address.to_string()),
        size_sqft,
        has_pool: models::has_pool(&amenities),
        has_garage: models::has_garage(&amenities),
        amenities,
        image_url: pick(IMAGE_POOL, fp).to_string(),
        property_type: market.property_type,
        lot_area,
        building_area,
        bedrooms,
        bathrooms,
        year_built,
        school_rating,
        predicted_price: None,
    })
}
