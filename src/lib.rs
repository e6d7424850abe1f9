pub mod cli;
pub mod core;
pub mod repository;
pub mod scanner;
pub mod types;
pub mod utils;
pub mod validation;
pub mod web;

pub use scanner::{scan, ScanResult};
pub use web::{build_rocket, start_web_server};
