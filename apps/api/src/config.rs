use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default, so a bare `cargo run` works out of the box.
#[derive(Debug, Clone)]
pub struct Config {
    pub placements_csv: PathBuf,
    pub eligible_export_csv: PathBuf,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            placements_csv: env_or("PLACEMENTS_CSV", "placements.csv").into(),
            eligible_export_csv: env_or("ELIGIBLE_EXPORT_CSV", "eligible_companies.csv").into(),
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
