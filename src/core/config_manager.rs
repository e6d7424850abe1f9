// src/core/config_manager.rs
//! Configuration loading: `config.yaml` sections selected by `ENVIRONMENT`,
//! then environment variable overrides.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATABASE_FILE: &str = "jd_database.db";
pub const PRODUCTION_DATABASE_PATH: &str = "/app/data/jd_database.db";
pub const DEFAULT_ADDRESS: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigManager {
    pub environment: String,
    pub server: ServerSettings,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerSettings {
    pub database_path: PathBuf,
    pub address: String,
    pub port: u16,
    pub log_file: Option<PathBuf>,
}

/// One environment section of `config.yaml`. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SettingsSection {
    database_path: Option<PathBuf>,
    address: Option<String>,
    port: Option<u16>,
    log_file: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    local: SettingsSection,
    production: SettingsSection,
}

impl ConfigManager {
    /// Load configuration from `./config.yaml` (when present) and the process environment
    pub fn load() -> Result<Self> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "local".to_string());

        let config_path = PathBuf::from("config.yaml");
        let file_content = if config_path.exists() {
            Some(std::fs::read_to_string(&config_path).context("Failed to read config.yaml")?)
        } else {
            None
        };

        let base_dir = std::env::current_dir().context("Failed to get current directory")?;
        Self::from_sources(&environment, file_content.as_deref(), &base_dir, |key| {
            std::env::var(key).ok()
        })
    }

    /// Build the configuration from explicit sources
    pub fn from_sources<F>(
        environment: &str,
        file_content: Option<&str>,
        base_dir: &Path,
        env: F,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file: ConfigFile = match file_content {
            Some(content) => {
                serde_yaml::from_str(content).context("Failed to parse config.yaml")?
            }
            None => ConfigFile::default(),
        };

        let section = match environment {
            "production" => file.production,
            _ => file.local,
        };

        let default_database = if environment == "production" {
            PathBuf::from(PRODUCTION_DATABASE_PATH)
        } else {
            PathBuf::from(DEFAULT_DATABASE_FILE)
        };

        let database_path = env("JD_DATABASE_PATH")
            .map(PathBuf::from)
            .or(section.database_path)
            .unwrap_or(default_database);

        let address = env("JD_ADDRESS")
            .or(section.address)
            .unwrap_or_else(|| DEFAULT_ADDRESS.to_string());

        let port = match env("ROCKET_PORT").or_else(|| env("JD_PORT")) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("Port must be a valid port number, got '{}'", raw))?,
            None => section.port.unwrap_or(DEFAULT_PORT),
        };

        let log_file = env("JD_LOG_FILE").map(PathBuf::from).or(section.log_file);

        Ok(Self {
            environment: environment.to_string(),
            server: ServerSettings {
                database_path: resolve_path(base_dir, &database_path),
                address,
                port,
                log_file: log_file.map(|p| resolve_path(base_dir, &p)),
            },
        })
    }

    /// Replace the database location, e.g. from a command line flag
    pub fn with_database_path(mut self, path: PathBuf) -> Result<Self> {
        let base_dir = std::env::current_dir().context("Failed to get current directory")?;
        self.server.database_path = resolve_path(&base_dir, &path);
        Ok(self)
    }

    /// Ensure the directories holding the database and log file exist
    pub async fn ensure_directories(&self) -> Result<()> {
        let parents = [
            self.server.database_path.parent(),
            self.server.log_file.as_deref().and_then(Path::parent),
        ];

        for parent in parents.into_iter().flatten() {
            if parent.as_os_str().is_empty() {
                continue;
            }
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        Ok(())
    }
}

fn resolve_path(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}
