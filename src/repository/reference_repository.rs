// src/repository/reference_repository.rs
use anyhow::{Context, Result};
use serde::Serialize;
use sqlx::SqlitePool;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    pub user_id: i64,
    pub username: String,
    pub full_name: String,
    pub email: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Customer {
    pub customer_id: i64,
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
}

/// Read access to the users and customers lookup tables
pub struct ReferenceRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ReferenceRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn users(&self) -> Result<Vec<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, username, full_name, email, role
            FROM users
            WHERE is_active = TRUE
            ORDER BY user_id ASC
            "#,
        )
        .fetch_all(self.pool)
        .await
        .context("Failed to load users")
    }

    pub async fn customers(&self) -> Result<Vec<Customer>> {
        sqlx::query_as::<_, Customer>(
            r#"
            SELECT customer_id, customer_name, customer_email, customer_phone
            FROM customers
            ORDER BY customer_name ASC
            "#,
        )
        .fetch_all(self.pool)
        .await
        .context("Failed to load customers")
    }
}
