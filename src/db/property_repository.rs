// src/db/property_repository.rs
// DOCUMENTATION: Property database operations
// PURPOSE: Filtered property listing and property creation

use crate::db::effective_limit;
use crate::errors::BnbError;
use crate::models::{NewProperty, Property, PropertyFilter, PropertyWithRating};
use sqlx::PgPool;

/// Minor currency units per major unit
const CENTS_PER_UNIT: i64 = 100;

/// A value bound to one `$n` placeholder of the listing query
#[derive(Debug, Clone, PartialEq)]
pub enum ListingParam {
    Text(String),
    Int(i32),
    BigInt(i64),
}

/// Listing SQL together with its ordered parameters
/// DOCUMENTATION: params[i] is bound to placeholder $(i + 1). Clauses are
/// only added for filters that are present, and each clause takes the next
/// placeholder number, so the two always stay in sync
#[derive(Debug, Clone)]
pub struct PropertyListingQuery {
    pub sql: String,
    pub params: Vec<ListingParam>,
}

impl PropertyListingQuery {
    /// Build the listing query for the given filters and row limit
    pub fn build(filter: &PropertyFilter, limit: Option<i64>) -> Result<Self, BnbError> {
        let mut query = PropertyListingQuery {
            sql: String::from(
                r#"
            SELECT properties.*,
                AVG(property_reviews.rating)::float8 AS average_rating
            FROM properties
            LEFT JOIN property_reviews ON properties.id = property_reviews.property_id
            "#,
            ),
            params: Vec::new(),
        };

        let mut clauses: Vec<String> = Vec::new();

        // City: case-insensitive literal substring
        if let Some(city) = filter.city_term() {
            let n = query.push(ListingParam::Text(format!("%{}%", escape_like(city))));
            clauses.push(format!("properties.city ILIKE ${}", n));
        }

        if let Some(owner_id) = filter.owner_id {
            let n = query.push(ListingParam::Int(owner_id));
            clauses.push(format!("properties.owner_id = ${}", n));
        }

        if let Some(minimum) = filter.minimum_price_per_night {
            let n = query.push(ListingParam::BigInt(to_cents(minimum)?));
            clauses.push(format!("properties.cost_per_night >= ${}", n));
        }

        if let Some(maximum) = filter.maximum_price_per_night {
            let n = query.push(ListingParam::BigInt(to_cents(maximum)?));
            clauses.push(format!("properties.cost_per_night <= ${}", n));
        }

        if !clauses.is_empty() {
            query.sql.push_str("WHERE ");
            query.sql.push_str(&clauses.join(" AND "));
        }

        let n = query.push(ListingParam::BigInt(effective_limit(limit)));
        query.sql.push_str(&format!(
            "
            GROUP BY properties.id
            ORDER BY properties.cost_per_night ASC
            LIMIT ${}
            ",
            n
        ));

        Ok(query)
    }

    /// Append a parameter and return its placeholder number
    fn push(&mut self, param: ListingParam) -> usize {
        self.params.push(param);
        self.params.len()
    }
}

/// Escape LIKE wildcards so user input matches literally
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn to_cents(major_units: i64) -> Result<i64, BnbError> {
    major_units.checked_mul(CENTS_PER_UNIT).ok_or_else(|| {
        BnbError::InvalidInput(format!("price per night out of range: {}", major_units))
    })
}

/// PropertyRepository: listing and creation of properties
pub struct PropertyRepository;

impl PropertyRepository {
    /// List properties with their average rating
    /// DOCUMENTATION: Properties without reviews are included (left join).
    /// Ordered by cost_per_night ascending, at most `limit` rows (default 10)
    pub async fn get_all_properties(
        pool: &PgPool,
        filter: &PropertyFilter,
        limit: Option<i64>,
    ) -> Result<Vec<PropertyWithRating>, BnbError> {
        let listing = PropertyListingQuery::build(filter, limit).map_err(|e| {
            log::error!("Rejected property filter: {}", e);
            e
        })?;

        log::debug!("Executing property listing query: {}", listing.sql);

        let mut query = sqlx::query_as::<_, PropertyWithRating>(&listing.sql);
        for param in &listing.params {
            query = match param {
                ListingParam::Text(value) => query.bind(value.as_str()),
                ListingParam::Int(value) => query.bind(*value),
                ListingParam::BigInt(value) => query.bind(*value),
            };
        }

        let properties = query.fetch_all(pool).await.map_err(|e| {
            log::error!("Property listing query error: {}", e);
            BnbError::from(e)
        })?;

        log::debug!("Property listing returned {} rows", properties.len());
        Ok(properties)
    }

    /// Add a property
    /// DOCUMENTATION: Inserts the fourteen listing fields and returns the
    /// stored row
    pub async fn add_property(
        pool: &PgPool,
        property: &NewProperty,
    ) -> Result<Property, BnbError> {
        let created = sqlx::query_as::<_, Property>(
            r#"
            INSERT INTO properties (
                owner_id, title, description,
                thumbnail_photo_url, cover_photo_url, cost_per_night,
                street, city, province, post_code, country,
                parking_spaces, number_of_bathrooms, number_of_bedrooms
            )
            VALUES (
                $1, $2, $3,
                $4, $5, $6,
                $7, $8, $9, $10, $11,
                $12, $13, $14
            )
            RETURNING *
            "#,
        )
        .bind(property.owner_id) // $1
        .bind(&property.title) // $2
        .bind(&property.description) // $3
        .bind(&property.thumbnail_photo_url) // $4
        .bind(&property.cover_photo_url) // $5
        .bind(property.cost_per_night) // $6
        .bind(&property.street) // $7
        .bind(&property.city) // $8
        .bind(&property.province) // $9
        .bind(&property.post_code) // $10
        .bind(&property.country) // $11
        .bind(property.parking_spaces) // $12
        .bind(property.number_of_bathrooms) // $13
        .bind(property.number_of_bedrooms) // $14
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create property: {}", e);
            BnbError::from(e)
        })?;

        log::info!("Created property with id: {}", created.id);
        Ok(created)
    }
}
