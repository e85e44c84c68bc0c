// src/db/reservation_repository.rs
// DOCUMENTATION: Reservation database operations
// PURPOSE: Read a guest's reservation history

use crate::db::effective_limit;
use crate::errors::BnbError;
use crate::models::ReservationSummary;
use sqlx::PgPool;

pub struct ReservationRepository;

impl ReservationRepository {
    /// Get all reservations for a single guest
    /// DOCUMENTATION: Each row carries the reserved property's average review
    /// score. Reservations on properties without any review are not listed
    /// (inner join on property_reviews). Ordered by start_date ascending
    pub async fn get_all_reservations(
        pool: &PgPool,
        guest_id: i32,
        limit: Option<i64>,
    ) -> Result<Vec<ReservationSummary>, BnbError> {
        let limit = effective_limit(limit);

        let reservations = sqlx::query_as::<_, ReservationSummary>(
            r#"
            SELECT
                reservations.id,
                reservations.property_id,
                properties.title,
                reservations.start_date,
                reservations.end_date,
                properties.cost_per_night,
                AVG(property_reviews.rating)::float8 AS average_rating
            FROM reservations
            JOIN properties ON reservations.property_id = properties.id
            JOIN property_reviews ON properties.id = property_reviews.property_id
            WHERE reservations.guest_id = $1
            GROUP BY properties.id, reservations.id
            ORDER BY reservations.start_date
            LIMIT $2
            "#,
        )
        .bind(guest_id)
        .bind(limit)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch reservations for guest {}: {}", guest_id, e);
            BnbError::from(e)
        })?;

        log::debug!(
            "Fetched {} reservations for guest {}",
            reservations.len(),
            guest_id
        );
        Ok(reservations)
    }
}
