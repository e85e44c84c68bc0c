// src/lib.rs
// DOCUMENTATION: LightBnB data access layer
// PURPOSE: Parameterized queries over users, properties, reservations and
// reviews, each a single round-trip against a PostgreSQL pool

pub mod config;
pub mod db;
pub mod errors;
pub mod models;

pub use config::Config;
pub use db::{PropertyRepository, ReservationRepository, UserRepository, DEFAULT_LIMIT};
pub use errors::BnbError;
