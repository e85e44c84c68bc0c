// src/models/review.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Guest review of a property, left after a reservation
/// DOCUMENTATION: Only read in aggregate (AVG(rating)) by the listing and
/// reservation queries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct PropertyReview {
    pub id: i32,
    pub guest_id: i32,
    pub property_id: i32,
    pub reservation_id: i32,
    /// 1 to 5
    pub rating: i16,
    pub message: Option<String>,
}
