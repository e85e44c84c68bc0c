// src/models/reservation.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stay booked by a guest, as stored in the reservations table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Reservation {
    pub id: i32,
    pub guest_id: i32,
    pub property_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// One row of a guest's reservation history
/// DOCUMENTATION: Reservation joined with its property and the property's
/// average review score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ReservationSummary {
    pub id: i32,
    pub property_id: i32,
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Nightly price in minor currency units (cents)
    pub cost_per_night: i32,
    pub average_rating: f64,
}
