// src/db/mod.rs
// DOCUMENTATION: Database module organization
// PURPOSE: Re-export database components

pub mod property_repository;
pub mod reservation_repository;
pub mod user_repository;

pub use property_repository::*;
pub use reservation_repository::*;
pub use user_repository::*;

/// Row limit used by the list operations when the caller gives none
pub const DEFAULT_LIMIT: i64 = 10;

/// Resolve an optional row limit; negative values select nothing
pub(crate) fn effective_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIMIT).max(0)
}
