// src/models/property.rs
// DOCUMENTATION: Core data structures for rental properties
// PURPOSE: Row mappings for the properties table and listing filters

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Represents a complete property record from the database
/// DOCUMENTATION: Maps directly to the properties table in PostgreSQL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Property {
    pub id: i32,

    /// User who lists the property
    pub owner_id: i32,

    pub title: String,

    pub description: Option<String>,

    pub thumbnail_photo_url: String,

    pub cover_photo_url: String,

    /// Nightly price in minor currency units (cents)
    pub cost_per_night: i32,

    pub street: String,

    pub city: String,

    pub province: String,

    pub post_code: String,

    pub country: String,

    pub parking_spaces: i32,

    pub number_of_bathrooms: i32,

    pub number_of_bedrooms: i32,
}

/// Property listing row with its aggregated review score
/// DOCUMENTATION: average_rating is None for properties without reviews
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct PropertyWithRating {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub property: Property,

    pub average_rating: Option<f64>,
}

/// Input for PropertyRepository::add_property
/// DOCUMENTATION: The fourteen insertable columns of the properties table.
/// Older clients send the singular `parking_space` key; it is accepted as an
/// alias so the value lands in parking_spaces instead of being dropped
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProperty {
    pub owner_id: i32,

    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    pub thumbnail_photo_url: String,

    pub cover_photo_url: String,

    /// Nightly price in minor currency units (cents)
    pub cost_per_night: i32,

    pub street: String,

    pub city: String,

    pub province: String,

    pub post_code: String,

    pub country: String,

    #[serde(alias = "parking_space", default)]
    pub parking_spaces: i32,

    #[serde(default)]
    pub number_of_bathrooms: i32,

    #[serde(default)]
    pub number_of_bedrooms: i32,
}

/// Optional filters for PropertyRepository::get_all_properties
/// DOCUMENTATION: All filters are optional and combined with AND.
/// Prices are given in major units and compared against cost_per_night * 100
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropertyFilter {
    /// Case-insensitive substring of the city name
    #[serde(default)]
    pub city: Option<String>,

    #[serde(default)]
    pub owner_id: Option<i32>,

    #[serde(default)]
    pub minimum_price_per_night: Option<i64>,

    #[serde(default)]
    pub maximum_price_per_night: Option<i64>,
}

impl PropertyFilter {
    /// City filter with blank input treated as absent
    pub fn city_term(&self) -> Option<&str> {
        self.city
            .as_deref()
            .map(str::trim)
            .filter(|city| !city.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.city_term().is_none()
            && self.owner_id.is_none()
            && self.minimum_price_per_night.is_none()
            && self.maximum_price_per_night.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_property_accepts_legacy_parking_space_key() {
        let property: NewProperty = serde_json::from_value(json!({
            "owner_id": 3,
            "title": "Cabin",
            "thumbnail_photo_url": "https://img.example/t.jpg",
            "cover_photo_url": "https://img.example/c.jpg",
            "cost_per_night": 12500,
            "street": "1 Lake Rd",
            "city": "Edmonton",
            "province": "AB",
            "post_code": "T5J 0N3",
            "country": "Canada",
            "parking_space": 2,
            "number_of_bathrooms": 1,
            "number_of_bedrooms": 3
        }))
        .unwrap();

        assert_eq!(property.parking_spaces, 2);
        assert_eq!(property.description, None);
    }

    #[test]
    fn test_blank_city_is_not_a_filter() {
        let filter = PropertyFilter {
            city: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(filter.city_term(), None);
        assert!(filter.is_empty());

        let filter = PropertyFilter {
            city: Some(" van ".into()),
            ..Default::default()
        };
        assert_eq!(filter.city_term(), Some("van"));
        assert!(!filter.is_empty());
    }

    #[test]
    fn test_listing_row_serializes_flat() {
        let row = PropertyWithRating {
            property: Property {
                id: 1,
                owner_id: 2,
                title: "Loft".into(),
                description: None,
                thumbnail_photo_url: "t".into(),
                cover_photo_url: "c".into(),
                cost_per_night: 9900,
                street: "s".into(),
                city: "Vancouver".into(),
                province: "BC".into(),
                post_code: "V5K".into(),
                country: "Canada".into(),
                parking_spaces: 0,
                number_of_bathrooms: 1,
                number_of_bedrooms: 1,
            },
            average_rating: Some(4.5),
        };

        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["city"], "Vancouver");
        assert_eq!(value["average_rating"], 4.5);
    }
}
