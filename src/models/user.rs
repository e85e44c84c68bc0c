// src/models/user.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered user, as stored in the users table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    /// Unique across users (enforced by the store)
    pub email: String,
    /// Stored as given; hashing belongs to the caller
    pub password: String,
}

/// Input for UserRepository::add_user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}
