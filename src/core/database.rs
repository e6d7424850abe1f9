// src/core/database.rs
//! SQLite connection management, schema migrations and reference seed data

use anyhow::{Context, Result};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::path::Path;
use tracing::info;

use crate::types::{EngagementMode, ReferenceCode, SkillsetCategory};

pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (creating if needed) the database file and run migrations
    pub async fn new(database_path: &Path) -> Result<Self> {
        if let Some(parent) = database_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .context("Failed to create database directory")?;
            }
        }

        let database_url = format!("sqlite:{}?mode=rwc", database_path.display());
        let pool = SqlitePool::connect(&database_url).await.with_context(|| {
            format!("Failed to connect to database: {}", database_path.display())
        })?;

        info!("Database connection established: {}", database_path.display());

        let db = Self { pool };
        db.migrate().await?;
        Ok(db)
    }

    /// Private in-memory database, migrated and seeded. A single connection
    /// that never expires keeps the data alive for the pool's lifetime.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .context("Failed to open in-memory database")?;

        let db = Self { pool };
        db.migrate().await?;
        Ok(db)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create tables and indexes, then insert reference rows that are missing
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS job_descriptions (
                jd_id INTEGER PRIMARY KEY AUTOINCREMENT,
                jd_title TEXT NOT NULL,
                jd_customer_id INTEGER,
                jd_consumer TEXT,
                jd_original TEXT NOT NULL,
                jd_skillset_cat INTEGER,
                jd_skillset TEXT,
                jd_mode INTEGER,
                jd_tenure INTEGER,
                jd_op_exp_min REAL,
                jd_op_exp_max REAL,
                jd_op_budget_min REAL,
                jd_op_budget_max REAL,
                jd_open_position INTEGER,
                jd_available_pos INTEGER,
                jd_revenue_potential TEXT,
                jd_currency TEXT NOT NULL DEFAULT 'USD',
                jd_keywords TEXT,
                jd_source TEXT,
                jd_special_instruction TEXT,
                jd_created_by TEXT,
                jd_status INTEGER NOT NULL DEFAULT 1,
                jd_aging INTEGER NOT NULL DEFAULT 0,
                jd_created_date TEXT NOT NULL,
                jd_updated_date TEXT NOT NULL,
                jd_is_active BOOLEAN NOT NULL DEFAULT TRUE
            );
            "#,
        )
        .execute(&self.pool)
        .await
        .context("Failed to create job_descriptions table")?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS customers (
                customer_id INTEGER PRIMARY KEY AUTOINCREMENT,
                customer_name TEXT NOT NULL,
                customer_email TEXT,
                customer_phone TEXT,
                created_date TEXT NOT NULL DEFAULT (datetime('now'))
            );
            "#,
        )
        .execute(&self.pool)
        .await
        .context("Failed to create customers table")?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS skillset_categories (
                category_id INTEGER PRIMARY KEY,
                category_name TEXT NOT NULL,
                description TEXT
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS engagement_modes (
                mode_id INTEGER PRIMARY KEY,
                mode_name TEXT NOT NULL,
                description TEXT
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                user_id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT NOT NULL,
                full_name TEXT NOT NULL,
                email TEXT,
                role TEXT,
                is_active BOOLEAN NOT NULL DEFAULT TRUE,
                created_date TEXT NOT NULL DEFAULT (datetime('now'))
            );
            "#,
        )
        .execute(&self.pool)
        .await
        .context("Failed to create users table")?;

        for index in [
            "CREATE INDEX IF NOT EXISTS idx_jd_status ON job_descriptions(jd_status);",
            "CREATE INDEX IF NOT EXISTS idx_jd_mode ON job_descriptions(jd_mode);",
            "CREATE INDEX IF NOT EXISTS idx_jd_created_date ON job_descriptions(jd_created_date);",
            "CREATE INDEX IF NOT EXISTS idx_jd_is_active ON job_descriptions(jd_is_active);",
        ] {
            sqlx::query(index).execute(&self.pool).await?;
        }

        self.seed_reference_data().await?;

        info!("Database migrations completed");
        Ok(())
    }

    async fn seed_reference_data(&self) -> Result<()> {
        sqlx::query(
            r#"
            INSERT OR IGNORE INTO customers (customer_id, customer_name, customer_email)
            VALUES (1, 'Sample Company', 'hr@samplecompany.com')
            "#,
        )
        .execute(&self.pool)
        .await?;

        for category in SkillsetCategory::ALL {
            sqlx::query(
                "INSERT OR IGNORE INTO skillset_categories (category_id, category_name, description) VALUES (?, ?, ?)",
            )
            .bind(category.code())
            .bind(category.name())
            .bind(category.description())
            .execute(&self.pool)
            .await?;
        }

        for mode in EngagementMode::ALL {
            sqlx::query(
                "INSERT OR IGNORE INTO engagement_modes (mode_id, mode_name, description) VALUES (?, ?, ?)",
            )
            .bind(mode.code())
            .bind(mode.name())
            .bind(mode.description())
            .execute(&self.pool)
            .await?;
        }

        sqlx::query(
            r#"
            INSERT OR IGNORE INTO users (user_id, username, full_name, email, role) VALUES
            (1, 'nikitha', 'Nikitha', 'nikitha@company.com', 'HR'),
            (2, 'gauthami', 'Gauthami', 'gauthami@company.com', 'HR')
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Check database health
    pub async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .context("Database health check failed")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_migrate_seeds_reference_rows_once() {
        let db = Database::in_memory().await.unwrap();
        db.migrate().await.unwrap();

        let (categories,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM skillset_categories")
            .fetch_one(db.pool())
            .await
            .unwrap();
        let (modes,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM engagement_modes")
            .fetch_one(db.pool())
            .await
            .unwrap();
        let (users,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(db.pool())
            .await
            .unwrap();
        let (customer,): (String,) =
            sqlx::query_as("SELECT customer_name FROM customers WHERE customer_id = 1")
                .fetch_one(db.pool())
                .await
                .unwrap();

        assert_eq!(categories, 6);
        assert_eq!(modes, 5);
        assert_eq!(users, 2);
        assert_eq!(customer, "Sample Company");
    }

    #[tokio::test]
    async fn test_file_database_is_created_with_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("jd.db");

        let db = Database::new(&path).await.unwrap();
        db.health_check().await.unwrap();

        assert!(path.exists());
    }
}
