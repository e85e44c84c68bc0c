// src/db/user_repository.rs
// DOCUMENTATION: User database operations
// PURPOSE: Lookup and registration of users

use crate::errors::BnbError;
use crate::models::{NewUser, User};
use sqlx::PgPool;

pub struct UserRepository;

impl UserRepository {
    /// Get a single user given their email
    /// DOCUMENTATION: Exact match, no case folding. Ok(None) when no user has
    /// that email
    pub async fn get_user_with_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<User>, BnbError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE users.email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch user by email: {}", e);
            BnbError::from(e)
        })?;

        Ok(user)
    }

    /// Get a single user given their id
    pub async fn get_user_with_id(pool: &PgPool, id: i32) -> Result<Option<User>, BnbError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE users.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch user {}: {}", id, e);
            BnbError::from(e)
        })?;

        Ok(user)
    }

    /// Add a new user
    /// DOCUMENTATION: Returns the generated id. A taken email surfaces as
    /// BnbError::ConstraintViolation
    pub async fn add_user(pool: &PgPool, user: &NewUser) -> Result<i32, BnbError> {
        let inserted: (i32,) = sqlx::query_as(
            r#"
            INSERT INTO users (name, email, password)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&user.name) // $1
        .bind(&user.email) // $2
        .bind(&user.password) // $3
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create user: {}", e);
            BnbError::from(e)
        })?;

        log::info!("Created user with id: {}", inserted.0);
        Ok(inserted.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::unreachable_pool;
    use tokio_test::assert_err;

    #[tokio::test]
    async fn test_lookups_report_unreachable_store() {
        let pool = unreachable_pool();

        let by_email = UserRepository::get_user_with_email(&pool, "a@b.c").await;
        assert!(matches!(by_email, Err(BnbError::ConnectionError(_))));

        let by_id = UserRepository::get_user_with_id(&pool, 1).await;
        assert!(matches!(by_id, Err(BnbError::ConnectionError(_))));
    }

    #[tokio::test]
    async fn test_add_user_reports_unreachable_store() {
        let pool = unreachable_pool();
        let user = NewUser {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            password: "secret".into(),
        };

        let err = assert_err!(UserRepository::add_user(&pool, &user).await);
        assert!(matches!(err, BnbError::ConnectionError(_)));
    }
}
