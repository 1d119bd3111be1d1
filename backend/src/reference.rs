//! Static reference data shared by the generator and the catalog.
//!
//! Every lookup table here is a slice scanned front to back, so the first
//! matching entry always wins regardless of platform or hashing.

use crate::models::PropertyType;

/// Per-city market data used when fabricating a property from an address.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketProfile {
    pub city: &'static str,
    pub avg_price: i64,
    pub school_base: i32,
    pub default_type: PropertyType,
    pub sqft_range: (i64, i64),
}

const fn profile(
    city: &'static str,
    avg_price: i64,
    school_base: i32,
    default_type: PropertyType,
    sqft_range: (i64, i64),
) -> MarketProfile {
    MarketProfile { city, avg_price, school_base, default_type, sqft_range }
}

/// Scan order matters: "new york" precedes "manhattan" and "brooklyn".
pub static MARKET_PROFILES: &[MarketProfile] = &[
    profile("new york", 850_000, 8, PropertyType::Condo, (800, 2000)),
    profile("manhattan", 1_200_000, 9, PropertyType::Condo, (600, 1800)),
    profile("brooklyn", 750_000, 7, PropertyType::Condo, (900, 2200)),
    profile("los angeles", 950_000, 7, PropertyType::Sfh, (1500, 3500)),
    profile("san francisco", 1_400_000, 9, PropertyType::Condo, (800, 2000)),
    profile("miami", 550_000, 6, PropertyType::Condo, (1000, 2500)),
    profile("chicago", 450_000, 7, PropertyType::Condo, (1000, 2200)),
    profile("boston", 750_000, 9, PropertyType::Condo, (800, 1800)),
    profile("seattle", 800_000, 8, PropertyType::Sfh, (1200, 2800)),
    profile("austin", 550_000, 8, PropertyType::Sfh, (1500, 3000)),
    profile("dallas", 450_000, 7, PropertyType::Sfh, (1800, 3500)),
    profile("denver", 600_000, 8, PropertyType::Sfh, (1400, 2800)),
    profile("phoenix", 450_000, 6, PropertyType::Sfh, (1600, 3200)),
    profile("atlanta", 400_000, 7, PropertyType::Sfh, (1500, 3000)),
];

pub const DEFAULT_AVG_PRICE: i64 = 500_000;
pub const DEFAULT_SCHOOL_BASE: i32 = 7;
pub const DEFAULT_SQFT_RANGE: (i64, i64) = (1000, 2500);

pub static IMAGE_POOL: &[&str] = &[
    "https://images.pexels.com/photos/106399/pexels-photo-106399.jpeg",
    "https://images.pexels.com/photos/259588/pexels-photo-259588.jpeg",
    "https://images.pexels.com/photos/323780/pexels-photo-323780.jpeg",
    "https://images.pexels.com/photos/271624/pexels-photo-271624.jpeg",
    "https://images.pexels.com/photos/534151/pexels-photo-534151.jpeg",
    "https://images.pexels.com/photos/1396122/pexels-photo-1396122.jpeg",
    "https://images.pexels.com/photos/1029599/pexels-photo-1029599.jpeg",
    "https://images.pexels.com/photos/2102587/pexels-photo-2102587.jpeg",
];

pub static AMENITY_POOL: &[&[&str]] = &[
    &["Gym", "Swimming Pool", "Parking", "Doorman"],
    &["Garden", "Garage", "Central AC", "Fireplace"],
    &["Rooftop Terrace", "Smart Home", "Security System"],
    &["Beach Access", "Balcony", "In-Unit Laundry"],
    &["Private Dock", "BBQ Area", "Pet Friendly"],
    &["Home Office", "Solar Panels", "EV Charging"],
    &["Community Pool", "Tennis Court", "Clubhouse"],
    &["Park View", "Concierge", "Fitness Center"],
];

/// Title templates; `{bedrooms}` is replaced with the bedroom count.
pub static CONDO_TITLES: &[&str] = &[
    "{bedrooms} BR Condo",
    "Modern {bedrooms} Bedroom Apartment",
    "Luxury {bedrooms}BR Unit",
    "Stylish {bedrooms} Bed Condo",
];

pub static SFH_TITLES: &[&str] = &[
    "{bedrooms} BR Single Family Home",
    "Beautiful {bedrooms} Bedroom House",
    "Spacious {bedrooms}BR Home",
    "Charming {bedrooms} Bed House",
];

pub static CONDO_KEYWORDS: &[&str] = &["apartment", "condo", "studio", "penthouse", "flat", "unit"];
pub static SFH_KEYWORDS: &[&str] =
    &["villa", "house", "townhouse", "duplex", "home", "cottage", "bungalow"];
pub static POOL_KEYWORDS: &[&str] = &["pool", "swimming"];
pub static GARAGE_KEYWORDS: &[&str] = &["garage", "parking", "carport"];

/// School baselines for catalog listings. Separate from the market profiles:
/// it covers fewer cities and falls back to a different default.
pub static CATALOG_SCHOOL_RATINGS: &[(&str, i32)] = &[
    ("new york", 8),
    ("san francisco", 9),
    ("boston", 9),
    ("seattle", 8),
    ("los angeles", 7),
    ("chicago", 7),
    ("miami", 6),
    ("dallas", 7),
    ("austin", 8),
];

pub const CATALOG_DEFAULT_SCHOOL_RATING: i32 = 6;

/// First market profile whose city occurs in `haystack`, which must already
/// be lower-cased.
pub fn market_profile(haystack: &str) -> Option<&'static MarketProfile> {
    MARKET_PROFILES.iter().find(|p| haystack.contains(p.city))
}

/// Catalog school baseline for a lower-cased location string.
pub fn catalog_school_base(haystack: &str) -> i32 {
    CATALOG_SCHOOL_RATINGS
        .iter()
        .find(|(city, _)| haystack.contains(city))
        .map(|&(_, rating)| rating)
        .unwrap_or(CATALOG_DEFAULT_SCHOOL_RATING)
}

pub fn title_templates(property_type: PropertyType) -> &'static [&'static str] {
    match property_type {
        PropertyType::Condo => CONDO_TITLES,
        PropertyType::Sfh => SFH_TITLES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_scan_is_ordered() {
        let hit = market_profile("1 manhattan ave, new york").unwrap();
        assert_eq!(hit.city, "new york");
        assert_eq!(market_profile("brooklyn heights").unwrap().avg_price, 750_000);
        assert!(market_profile("springfield").is_none());
    }

    #[test]
    fn profiles_have_usable_ranges() {
        for p in MARKET_PROFILES {
            assert!(p.sqft_range.1 > p.sqft_range.0, "{}", p.city);
            assert_eq!(p.city, p.city.to_lowercase());
        }
    }

    #[test]
    fn catalog_school_base_defaults() {
        assert_eq!(catalog_school_base("boston, ma"), 9);
        assert_eq!(catalog_school_base("burlington, vt"), CATALOG_DEFAULT_SCHOOL_RATING);
    }
}
