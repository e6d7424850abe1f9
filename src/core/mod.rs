// src/core/mod.rs
//! Configuration and storage shared by the HTTP server and the CLI

pub mod config_manager;
pub mod database;

pub use config_manager::{ConfigManager, ServerSettings};
pub use database::Database;
