// src/cli.rs
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;
use tracing::info;

use crate::core::{ConfigManager, Database};
use crate::repository::JobDescriptionRepository;
use crate::scanner;
use crate::types::JobDescription;
use crate::web::start_web_server;

#[derive(Parser)]
#[command(name = "jd-registry")]
#[command(about = "Job description registry: HTTP API and maintenance commands")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Override the configured SQLite database file
    #[arg(long, global = true)]
    pub database_path: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server (default)
    Serve,
    /// Create tables and seed reference data
    Init,
    /// Extract fields from a job posting and print them as JSON
    Scan {
        /// Posting text file; stdin when omitted
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Recompute aging for every active job description
    UpdateAging,
    /// Write active job descriptions to a CSV file
    Export {
        #[arg(long)]
        output: PathBuf,
    },
}

/// Header row of the export, in `ExportRow` field order
const EXPORT_COLUMNS: [&str; 22] = [
    "jd_id",
    "jd_title",
    "customer_name",
    "jd_consumer",
    "skillset_category",
    "jd_skillset",
    "job_mode",
    "jd_tenure",
    "jd_op_exp_min",
    "jd_op_exp_max",
    "jd_op_budget_min",
    "jd_op_budget_max",
    "jd_currency",
    "jd_open_position",
    "jd_available_pos",
    "jd_revenue_potential",
    "jd_keywords",
    "jd_source",
    "jd_created_by",
    "job_status",
    "jd_aging",
    "jd_created_date",
];

/// One CSV line of the export
#[derive(Serialize)]
struct ExportRow<'a> {
    jd_id: i64,
    jd_title: &'a str,
    customer_name: Option<&'a str>,
    jd_consumer: Option<&'a str>,
    skillset_category: Option<&'a str>,
    jd_skillset: String,
    job_mode: Option<&'a str>,
    jd_tenure: Option<i64>,
    jd_op_exp_min: Option<f64>,
    jd_op_exp_max: Option<f64>,
    jd_op_budget_min: Option<f64>,
    jd_op_budget_max: Option<f64>,
    jd_currency: &'a str,
    jd_open_position: Option<i64>,
    jd_available_pos: Option<i64>,
    jd_revenue_potential: Option<&'a str>,
    jd_keywords: String,
    jd_source: Option<&'a str>,
    jd_created_by: Option<&'a str>,
    job_status: &'a str,
    jd_aging: i64,
    jd_created_date: String,
}

impl<'a> From<&'a JobDescription> for ExportRow<'a> {
    fn from(jd: &'a JobDescription) -> Self {
        Self {
            jd_id: jd.jd_id,
            jd_title: &jd.jd_title,
            customer_name: jd.customer_name.as_deref(),
            jd_consumer: jd.jd_consumer.as_deref(),
            skillset_category: jd.skillset_category_name,
            jd_skillset: jd.jd_skillset.join("; "),
            job_mode: jd.job_mode_name,
            jd_tenure: jd.jd_tenure,
            jd_op_exp_min: jd.jd_op_exp_min,
            jd_op_exp_max: jd.jd_op_exp_max,
            jd_op_budget_min: jd.jd_op_budget_min,
            jd_op_budget_max: jd.jd_op_budget_max,
            jd_currency: jd.jd_currency.code(),
            jd_open_position: jd.jd_open_position,
            jd_available_pos: jd.jd_available_pos,
            jd_revenue_potential: jd.jd_revenue_potential.map(|r| r.as_str()),
            jd_keywords: jd.jd_keywords.join("; "),
            jd_source: jd.jd_source.as_deref(),
            jd_created_by: jd.jd_created_by.as_deref(),
            job_status: jd.job_status_name,
            jd_aging: jd.jd_aging,
            jd_created_date: jd.jd_created_date.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

pub async fn handle_command(cli: Cli, config: ConfigManager) -> Result<()> {
    let config = match cli.database_path {
        Some(path) => config.with_database_path(path)?,
        None => config,
    };

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => start_web_server(config).await,

        Command::Init => {
            config.ensure_directories().await?;
            Database::new(&config.server.database_path).await?;
            info!(
                "Database initialized at: {}",
                config.server.database_path.display()
            );
            info!("Tables: job_descriptions, customers, skillset_categories, engagement_modes, users");
            Ok(())
        }

        Command::Scan { file } => {
            let text = match file {
                Some(path) => tokio::fs::read_to_string(&path)
                    .await
                    .with_context(|| format!("Failed to read {}", path.display()))?,
                None => {
                    let mut text = String::new();
                    tokio::io::stdin()
                        .read_to_string(&mut text)
                        .await
                        .context("Failed to read posting from stdin")?;
                    text
                }
            };

            if text.trim().is_empty() {
                bail!("JD text is required");
            }

            let result = scanner::scan(&text);
            let json = serde_json::to_string_pretty(&result).context("Failed to encode scan result")?;
            println!("{}", json);
            Ok(())
        }

        Command::UpdateAging => {
            let db = Database::new(&config.server.database_path).await?;
            let updated = JobDescriptionRepository::new(db.pool())
                .update_aging()
                .await?;
            info!("Aging updated for {} job descriptions", updated);
            Ok(())
        }

        Command::Export { output } => {
            let db = Database::new(&config.server.database_path).await?;
            let jds = JobDescriptionRepository::new(db.pool()).list_all().await?;

            let file = std::fs::File::create(&output)
                .with_context(|| format!("Failed to create {}", output.display()))?;
            let written = write_csv(&jds, file)?;
            info!("Exported {} job descriptions to {}", written, output.display());
            Ok(())
        }
    }
}

/// Write a header row, then one CSV line per record
pub fn write_csv<W: Write>(jds: &[JobDescription], writer: W) -> Result<usize> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer
        .write_record(EXPORT_COLUMNS)
        .context("Failed to write CSV header")?;
    for jd in jds {
        csv_writer
            .serialize(ExportRow::from(jd))
            .with_context(|| format!("Failed to write job description {}", jd.jd_id))?;
    }
    csv_writer.flush().context("Failed to flush CSV output")?;
    Ok(jds.len())
}
