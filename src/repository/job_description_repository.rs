// src/repository/job_description_repository.rs
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::info;

use crate::types::{
    EngagementMode, JdFields, JdPage, JdStatistics, JdStatus, JobDescription, JobDescriptionRow,
    Pagination, ReferenceCode, SearchFilters, StatusCount,
};
use crate::utils::{aging_days, round1};

const SELECT_JD: &str = r#"
    SELECT jd.*, c.customer_name
    FROM job_descriptions jd
    LEFT JOIN customers c ON jd.jd_customer_id = c.customer_id
    WHERE jd.jd_is_active = TRUE"#;

const NEWEST_FIRST: &str = " ORDER BY jd.jd_created_date DESC, jd.jd_id DESC";

pub struct JobDescriptionRepository<'a> {
    pool: &'a SqlitePool,
}

#[derive(sqlx::FromRow)]
struct StatisticsRow {
    total_jobs: i64,
    remote_jobs: i64,
    onsite_jobs: i64,
    hybrid_jobs: i64,
    contract_jobs: i64,
    part_time_jobs: i64,
    total_open_positions: i64,
    total_available_positions: i64,
    avg_tenure: Option<f64>,
}

impl<'a> JobDescriptionRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a validated record and return its id
    pub async fn create(&self, fields: &JdFields) -> Result<i64> {
        let now = Utc::now();
        let skillset = encode_list(fields.skillset.as_deref().unwrap_or_default())?;
        let keywords = encode_list(fields.keywords.as_deref().unwrap_or_default())?;

        let result = sqlx::query(
            r#"
            INSERT INTO job_descriptions (
                jd_title, jd_customer_id, jd_consumer, jd_original, jd_skillset_cat,
                jd_skillset, jd_mode, jd_tenure, jd_op_exp_min, jd_op_exp_max,
                jd_op_budget_min, jd_op_budget_max, jd_open_position, jd_available_pos,
                jd_revenue_potential, jd_currency, jd_keywords, jd_source,
                jd_special_instruction, jd_created_by, jd_status, jd_aging,
                jd_created_date, jd_updated_date, jd_is_active
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 0, ?, ?, TRUE)
            "#,
        )
        .bind(&fields.title)
        .bind(fields.customer_id)
        .bind(&fields.consumer)
        .bind(&fields.original)
        .bind(fields.skillset_cat.map(|c| c.code()))
        .bind(skillset)
        .bind(fields.mode.map(|m| m.code()))
        .bind(fields.tenure)
        .bind(fields.exp_min)
        .bind(fields.exp_max)
        .bind(fields.budget_min)
        .bind(fields.budget_max)
        .bind(fields.open_position)
        .bind(fields.available_pos)
        .bind(fields.revenue_potential.map(|r| r.as_str()))
        .bind(fields.currency.unwrap_or_default().code())
        .bind(keywords)
        .bind(&fields.source)
        .bind(&fields.special_instruction)
        .bind(&fields.created_by)
        .bind(fields.status.unwrap_or_default().code())
        .bind(now)
        .bind(now)
        .execute(self.pool)
        .await
        .context("Failed to insert job description")?;

        let jd_id = result.last_insert_rowid();
        info!("Created job description {}", jd_id);
        Ok(jd_id)
    }

    pub async fn find_by_id(&self, jd_id: i64) -> Result<Option<JobDescription>> {
        let row = sqlx::query_as::<_, JobDescriptionRow>(&format!("{} AND jd.jd_id = ?", SELECT_JD))
            .bind(jd_id)
            .fetch_optional(self.pool)
            .await
            .with_context(|| format!("Failed to load job description {}", jd_id))?;

        Ok(row.map(|row| hydrate(row, Utc::now())))
    }

    /// One page of active records, newest first, optionally narrowed by a free-text term
    pub async fn list(&self, page: i64, per_page: i64, search: Option<&str>) -> Result<JdPage> {
        let mut count = QueryBuilder::<Sqlite>::new(
            "SELECT COUNT(*) FROM job_descriptions jd WHERE jd.jd_is_active = TRUE",
        );
        if let Some(term) = search {
            push_text_match(&mut count, term, &["jd_title", "jd_skillset", "jd_keywords", "jd_original"]);
        }
        let total: i64 = count
            .build_query_scalar()
            .fetch_one(self.pool)
            .await
            .context("Failed to count job descriptions")?;

        let mut select = QueryBuilder::<Sqlite>::new(SELECT_JD);
        if let Some(term) = search {
            push_text_match(&mut select, term, &["jd_title", "jd_skillset", "jd_keywords", "jd_original"]);
        }
        select.push(NEWEST_FIRST);
        select.push(" LIMIT ").push_bind(per_page);
        select.push(" OFFSET ").push_bind((page - 1).saturating_mul(per_page));

        let rows = select
            .build_query_as::<JobDescriptionRow>()
            .fetch_all(self.pool)
            .await
            .context("Failed to list job descriptions")?;

        let now = Utc::now();
        Ok(JdPage {
            items: rows.into_iter().map(|row| hydrate(row, now)).collect(),
            pagination: Pagination::new(page, per_page, total),
        })
    }

    /// Every active record, newest first
    pub async fn list_all(&self) -> Result<Vec<JobDescription>> {
        let rows = sqlx::query_as::<_, JobDescriptionRow>(&format!("{}{}", SELECT_JD, NEWEST_FIRST))
            .fetch_all(self.pool)
            .await
            .context("Failed to list job descriptions")?;

        let now = Utc::now();
        Ok(rows.into_iter().map(|row| hydrate(row, now)).collect())
    }

    /// Apply the provided fields. Returns false when no active record has this id.
    pub async fn update(&self, jd_id: i64, fields: &JdFields) -> Result<bool> {
        let skillset = fields.skillset.as_deref().map(encode_list).transpose()?;
        let keywords = fields.keywords.as_deref().map(encode_list).transpose()?;

        let mut builder = QueryBuilder::<Sqlite>::new("UPDATE job_descriptions SET ");
        let mut set = builder.separated(", ");

        macro_rules! assign {
            ($column:literal, $value:expr) => {
                if let Some(value) = $value {
                    set.push(concat!($column, " = ")).push_bind_unseparated(value);
                }
            };
        }

        assign!("jd_title", fields.title.clone());
        assign!("jd_customer_id", fields.customer_id);
        assign!("jd_consumer", fields.consumer.clone());
        assign!("jd_original", fields.original.clone());
        assign!("jd_skillset_cat", fields.skillset_cat.map(|c| c.code()));
        assign!("jd_skillset", skillset);
        assign!("jd_mode", fields.mode.map(|m| m.code()));
        assign!("jd_tenure", fields.tenure);
        assign!("jd_op_exp_min", fields.exp_min);
        assign!("jd_op_exp_max", fields.exp_max);
        assign!("jd_op_budget_min", fields.budget_min);
        assign!("jd_op_budget_max", fields.budget_max);
        assign!("jd_open_position", fields.open_position);
        assign!("jd_available_pos", fields.available_pos);
        assign!("jd_revenue_potential", fields.revenue_potential.map(|r| r.as_str()));
        assign!("jd_currency", fields.currency.map(|c| c.code()));
        assign!("jd_keywords", keywords);
        assign!("jd_source", fields.source.clone());
        assign!("jd_special_instruction", fields.special_instruction.clone());
        assign!("jd_created_by", fields.created_by.clone());
        assign!("jd_status", fields.status.map(|s| s.code()));
        assign!("jd_updated_date", Some(Utc::now()));

        builder.push(" WHERE jd_id = ").push_bind(jd_id);
        builder.push(" AND jd_is_active = TRUE");

        let result = builder
            .build()
            .execute(self.pool)
            .await
            .with_context(|| format!("Failed to update job description {}", jd_id))?;

        let updated = result.rows_affected() > 0;
        if updated {
            info!("Updated job description {}", jd_id);
        }
        Ok(updated)
    }

    /// Mark a record inactive. Returns false when it is missing or already deleted.
    pub async fn soft_delete(&self, jd_id: i64) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE job_descriptions
            SET jd_is_active = FALSE, jd_updated_date = ?
            WHERE jd_id = ? AND jd_is_active = TRUE
            "#,
        )
        .bind(Utc::now())
        .bind(jd_id)
        .execute(self.pool)
        .await
        .with_context(|| format!("Failed to delete job description {}", jd_id))?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            info!("Deactivated job description {}", jd_id);
        }
        Ok(deleted)
    }

    /// Filtered search. Experience and budget filters match overlapping ranges.
    pub async fn search(&self, filters: &SearchFilters) -> Result<Vec<JobDescription>> {
        let mut query = QueryBuilder::<Sqlite>::new(SELECT_JD);

        if let Some(mode) = filters.mode {
            query.push(" AND jd.jd_mode = ").push_bind(mode.code());
        }
        if let Some(category) = filters.category {
            query.push(" AND jd.jd_skillset_cat = ").push_bind(category.code());
        }
        if let Some(status) = filters.status {
            query.push(" AND jd.jd_status = ").push_bind(status.code());
        }
        if let Some(skill) = &filters.skill {
            query
                .push(" AND jd.jd_skillset LIKE ")
                .push_bind(format!("%{}%", skill));
        }
        if let Some(min) = filters.experience_min {
            query.push(" AND jd.jd_op_exp_max >= ").push_bind(min);
        }
        if let Some(max) = filters.experience_max {
            query.push(" AND jd.jd_op_exp_min <= ").push_bind(max);
        }
        if let Some(min) = filters.budget_min {
            query.push(" AND jd.jd_op_budget_max >= ").push_bind(min);
        }
        if let Some(max) = filters.budget_max {
            query.push(" AND jd.jd_op_budget_min <= ").push_bind(max);
        }
        if let Some(min) = filters.tenure_min {
            query.push(" AND jd.jd_tenure >= ").push_bind(min);
        }
        if let Some(max) = filters.tenure_max {
            query.push(" AND jd.jd_tenure <= ").push_bind(max);
        }
        if let Some(text) = &filters.search_text {
            push_text_match(&mut query, text, &["jd_title", "jd_keywords", "jd_original"]);
        }
        query.push(NEWEST_FIRST);

        let rows = query
            .build_query_as::<JobDescriptionRow>()
            .fetch_all(self.pool)
            .await
            .context("Failed to search job descriptions")?;

        let now = Utc::now();
        Ok(rows.into_iter().map(|row| hydrate(row, now)).collect())
    }

    pub async fn statistics(&self) -> Result<JdStatistics> {
        let row = sqlx::query_as::<_, StatisticsRow>(
            r#"
            SELECT
                COUNT(*) AS total_jobs,
                COALESCE(SUM(CASE WHEN jd_mode = ? THEN 1 ELSE 0 END), 0) AS remote_jobs,
                COALESCE(SUM(CASE WHEN jd_mode = ? THEN 1 ELSE 0 END), 0) AS onsite_jobs,
                COALESCE(SUM(CASE WHEN jd_mode = ? THEN 1 ELSE 0 END), 0) AS hybrid_jobs,
                COALESCE(SUM(CASE WHEN jd_mode = ? THEN 1 ELSE 0 END), 0) AS contract_jobs,
                COALESCE(SUM(CASE WHEN jd_mode = ? THEN 1 ELSE 0 END), 0) AS part_time_jobs,
                COALESCE(SUM(jd_open_position), 0) AS total_open_positions,
                COALESCE(SUM(jd_available_pos), 0) AS total_available_positions,
                AVG(jd_tenure) AS avg_tenure
            FROM job_descriptions
            WHERE jd_is_active = TRUE
            "#,
        )
        .bind(EngagementMode::Remote.code())
        .bind(EngagementMode::Onsite.code())
        .bind(EngagementMode::Hybrid.code())
        .bind(EngagementMode::Contract.code())
        .bind(EngagementMode::PartTime.code())
        .fetch_one(self.pool)
        .await
        .context("Failed to compute job description statistics")?;

        let status_counts: Vec<(i64, i64)> = sqlx::query_as(
            r#"
            SELECT jd_status, COUNT(*)
            FROM job_descriptions
            WHERE jd_is_active = TRUE
            GROUP BY jd_status
            "#,
        )
        .fetch_all(self.pool)
        .await
        .context("Failed to count job descriptions by status")?;

        let jobs_by_status = JdStatus::ALL
            .iter()
            .map(|status| StatusCount {
                status_id: status.code(),
                status_name: status.name(),
                count: status_counts
                    .iter()
                    .find(|(code, _)| *code == status.code())
                    .map(|(_, count)| *count)
                    .unwrap_or(0),
            })
            .collect();

        Ok(JdStatistics {
            total_jobs: row.total_jobs,
            remote_jobs: row.remote_jobs,
            onsite_jobs: row.onsite_jobs,
            hybrid_jobs: row.hybrid_jobs,
            contract_jobs: row.contract_jobs,
            part_time_jobs: row.part_time_jobs,
            total_open_positions: row.total_open_positions,
            total_available_positions: row.total_available_positions,
            avg_tenure_months: row.avg_tenure.map(round1).unwrap_or(0.0),
            jobs_by_status,
        })
    }

    /// Recompute `jd_aging` for every active record. Returns the number of rows touched.
    pub async fn update_aging(&self) -> Result<u64> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        let jobs: Vec<(i64, DateTime<Utc>)> = sqlx::query_as(
            "SELECT jd_id, jd_created_date FROM job_descriptions WHERE jd_is_active = TRUE",
        )
        .fetch_all(&mut *tx)
        .await
        .context("Failed to load job descriptions for aging")?;

        let mut updated_count = 0;
        for (jd_id, created) in jobs {
            let result = sqlx::query(
                "UPDATE job_descriptions SET jd_aging = ?, jd_updated_date = ? WHERE jd_id = ?",
            )
            .bind(aging_days(created, now))
            .bind(now)
            .bind(jd_id)
            .execute(&mut *tx)
            .await
            .with_context(|| format!("Failed to update aging for job description {}", jd_id))?;
            updated_count += result.rows_affected();
        }

        tx.commit().await?;
        info!("Aging updated for {} job descriptions", updated_count);
        Ok(updated_count)
    }
}

/// Map a row, filling in aging from the creation date when it was never computed
fn hydrate(row: JobDescriptionRow, now: DateTime<Utc>) -> JobDescription {
    let mut jd = JobDescription::from(row);
    if jd.jd_aging == 0 {
        jd.jd_aging = aging_days(jd.jd_created_date, now);
    }
    jd
}

fn encode_list(items: &[String]) -> Result<String> {
    serde_json::to_string(items).context("Failed to encode list column")
}

fn push_text_match(query: &mut QueryBuilder<'_, Sqlite>, term: &str, columns: &[&str]) {
    let pattern = format!("%{}%", term);
    query.push(" AND (");
    for (i, column) in columns.iter().enumerate() {
        if i > 0 {
            query.push(" OR ");
        }
        query
            .push(format!("jd.{} LIKE ", column))
            .push_bind(pattern.clone());
    }
    query.push(")");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Database;
    use crate::types::{Currency, RevenuePotential, SkillsetCategory};
    use chrono::Duration;

    fn fields(title: &str, original: &str) -> JdFields {
        JdFields {
            title: Some(title.to_string()),
            original: Some(original.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_and_find_with_defaults() {
        let db = Database::in_memory().await.unwrap();
        let repo = JobDescriptionRepository::new(db.pool());

        let mut new = fields("Rust Developer", "We need a rust developer");
        new.customer_id = Some(1);
        new.skillset = Some(vec!["rust".to_string(), "sql".to_string()]);
        new.mode = Some(EngagementMode::Remote);
        let id = repo.create(&new).await.unwrap();

        let jd = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(jd.jd_title, "Rust Developer");
        assert_eq!(jd.jd_skillset, vec!["rust", "sql"]);
        assert!(jd.jd_keywords.is_empty());
        assert_eq!(jd.jd_currency, Currency::Usd);
        assert_eq!(jd.jd_status, JdStatus::Active);
        assert_eq!(jd.customer_name.as_deref(), Some("Sample Company"));
        assert_eq!(jd.job_mode_name, Some("Remote"));
        assert_eq!(jd.job_status_name, "Active");
        assert_eq!(jd.jd_aging, 0);

        assert!(repo.find_by_id(id + 100).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_partial_update_keeps_other_fields() {
        let db = Database::in_memory().await.unwrap();
        let repo = JobDescriptionRepository::new(db.pool());
        let mut new = fields("Analyst", "Data analyst role");
        new.tenure = Some(6);
        let id = repo.create(&new).await.unwrap();

        let patch = JdFields {
            title: Some("Senior Analyst".to_string()),
            skillset_cat: Some(SkillsetCategory::DataScience),
            revenue_potential: Some(RevenuePotential::Medium),
            ..Default::default()
        };
        assert!(repo.update(id, &patch).await.unwrap());

        let jd = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(jd.jd_title, "Senior Analyst");
        assert_eq!(jd.jd_tenure, Some(6));
        assert_eq!(jd.skillset_category_name, Some("Data Science"));
        assert_eq!(jd.jd_revenue_potential, Some(RevenuePotential::Medium));

        assert!(!repo.update(id + 1, &patch).await.unwrap());
    }

    #[tokio::test]
    async fn test_soft_delete_hides_record() {
        let db = Database::in_memory().await.unwrap();
        let repo = JobDescriptionRepository::new(db.pool());
        let id = repo.create(&fields("Tester", "QA role")).await.unwrap();

        assert!(repo.soft_delete(id).await.unwrap());
        assert!(!repo.soft_delete(id).await.unwrap());
        assert!(repo.find_by_id(id).await.unwrap().is_none());
        assert!(!repo.update(id, &fields("x", "y")).await.unwrap());
        assert_eq!(repo.list(1, 10, None).await.unwrap().pagination.total, 0);
        assert_eq!(repo.statistics().await.unwrap().total_jobs, 0);
    }

    #[tokio::test]
    async fn test_list_paginates_newest_first_and_searches() {
        let db = Database::in_memory().await.unwrap();
        let repo = JobDescriptionRepository::new(db.pool());
        for i in 1..=5 {
            repo.create(&fields(&format!("Role {}", i), "generic text"))
                .await
                .unwrap();
        }
        let mut kotlin = fields("Mobile Engineer", "android work");
        kotlin.skillset = Some(vec!["kotlin".to_string()]);
        repo.create(&kotlin).await.unwrap();

        let first = repo.list(1, 4, None).await.unwrap();
        assert_eq!(first.items.len(), 4);
        assert_eq!(first.items[0].jd_title, "Mobile Engineer");
        assert_eq!(first.pagination.total, 6);
        assert_eq!(first.pagination.pages, 2);
        assert!(first.pagination.has_next);

        let second = repo.list(2, 4, None).await.unwrap();
        assert_eq!(second.items.len(), 2);
        assert_eq!(second.items[1].jd_title, "Role 1");

        let found = repo.list(1, 10, Some("KOTLIN")).await.unwrap();
        assert_eq!(found.pagination.total, 1);
        assert_eq!(found.items[0].jd_title, "Mobile Engineer");

        let beyond = repo.list(5, 10, None).await.unwrap();
        assert!(beyond.items.is_empty());
        assert_eq!(beyond.pagination.total, 6);
    }

    #[tokio::test]
    async fn test_search_uses_range_overlap() {
        let db = Database::in_memory().await.unwrap();
        let repo = JobDescriptionRepository::new(db.pool());

        let mut junior = fields("Junior Dev", "entry level");
        junior.exp_min = Some(0.0);
        junior.exp_max = Some(2.0);
        junior.mode = Some(EngagementMode::Remote);
        junior.tenure = Some(3);
        repo.create(&junior).await.unwrap();

        let mut senior = fields("Senior Dev", "lead the platform team");
        senior.exp_min = Some(5.0);
        senior.exp_max = Some(8.0);
        senior.budget_min = Some(90_000.0);
        senior.budget_max = Some(120_000.0);
        senior.mode = Some(EngagementMode::Onsite);
        senior.skillset = Some(vec!["react".to_string()]);
        senior.tenure = Some(12);
        repo.create(&senior).await.unwrap();

        let overlap = SearchFilters {
            experience_min: Some(1.0),
            experience_max: Some(6.0),
            ..Default::default()
        };
        assert_eq!(repo.search(&overlap).await.unwrap().len(), 2);

        let seniors = SearchFilters {
            experience_min: Some(3.0),
            ..Default::default()
        };
        let found = repo.search(&seniors).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].jd_title, "Senior Dev");

        let budget = SearchFilters {
            budget_max: Some(100_000.0),
            ..Default::default()
        };
        assert_eq!(repo.search(&budget).await.unwrap().len(), 1);

        let combined = SearchFilters {
            mode: Some(EngagementMode::Remote),
            tenure_max: Some(6),
            search_text: Some("entry".to_string()),
            ..Default::default()
        };
        let found = repo.search(&combined).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].jd_title, "Junior Dev");

        let skill = SearchFilters {
            skill: Some("react".to_string()),
            ..Default::default()
        };
        assert_eq!(repo.search(&skill).await.unwrap()[0].jd_title, "Senior Dev");

        assert_eq!(repo.search(&SearchFilters::default()).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_statistics_aggregates_active_rows() {
        let db = Database::in_memory().await.unwrap();
        let repo = JobDescriptionRepository::new(db.pool());

        let mut a = fields("A", "a");
        a.mode = Some(EngagementMode::Remote);
        a.open_position = Some(3);
        a.available_pos = Some(2);
        a.tenure = Some(6);
        repo.create(&a).await.unwrap();

        let mut b = fields("B", "b");
        b.mode = Some(EngagementMode::Hybrid);
        b.open_position = Some(1);
        b.tenure = Some(7);
        b.status = Some(JdStatus::Draft);
        repo.create(&b).await.unwrap();

        let mut c = fields("C", "c");
        c.mode = Some(EngagementMode::Remote);
        c.tenure = Some(8);
        repo.create(&c).await.unwrap();

        let stats = repo.statistics().await.unwrap();
        assert_eq!(stats.total_jobs, 3);
        assert_eq!(stats.remote_jobs, 2);
        assert_eq!(stats.hybrid_jobs, 1);
        assert_eq!(stats.onsite_jobs, 0);
        assert_eq!(stats.total_open_positions, 4);
        assert_eq!(stats.total_available_positions, 2);
        assert_eq!(stats.avg_tenure_months, 7.0);
        assert_eq!(stats.jobs_by_status[0].count, 2);
        assert_eq!(stats.jobs_by_status[1].count, 1);
        assert_eq!(stats.jobs_by_status[2].count, 0);
    }

    #[tokio::test]
    async fn test_statistics_on_empty_table() {
        let db = Database::in_memory().await.unwrap();
        let stats = JobDescriptionRepository::new(db.pool())
            .statistics()
            .await
            .unwrap();
        assert_eq!(stats.total_jobs, 0);
        assert_eq!(stats.avg_tenure_months, 0.0);
        assert_eq!(stats.jobs_by_status.len(), 3);
    }

    #[tokio::test]
    async fn test_update_aging_counts_whole_days() {
        let db = Database::in_memory().await.unwrap();
        let repo = JobDescriptionRepository::new(db.pool());
        let old = repo.create(&fields("Old", "old posting")).await.unwrap();
        let gone = repo.create(&fields("Gone", "deleted posting")).await.unwrap();
        repo.soft_delete(gone).await.unwrap();

        sqlx::query("UPDATE job_descriptions SET jd_created_date = ? WHERE jd_id = ?")
            .bind(Utc::now() - Duration::days(5) - Duration::hours(1))
            .bind(old)
            .execute(db.pool())
            .await
            .unwrap();

        assert_eq!(repo.update_aging().await.unwrap(), 1);
        assert_eq!(repo.find_by_id(old).await.unwrap().unwrap().jd_aging, 5);
    }

    #[tokio::test]
    async fn test_legacy_comma_separated_lists_are_read() {
        let db = Database::in_memory().await.unwrap();
        let repo = JobDescriptionRepository::new(db.pool());
        let id = repo.create(&fields("Legacy", "imported row")).await.unwrap();

        sqlx::query("UPDATE job_descriptions SET jd_skillset = 'NodeJS, MySQL' WHERE jd_id = ?")
            .bind(id)
            .execute(db.pool())
            .await
            .unwrap();

        let jd = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(jd.jd_skillset, vec!["NodeJS", "MySQL"]);
    }
}
