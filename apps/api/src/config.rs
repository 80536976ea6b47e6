use anyhow::{Context, Result};

/// Number of catalog skills fetched as extraction candidates.
pub const EXTRACTION_CANDIDATE_CAP: i64 = 10;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    /// How many of the fetched candidate skills an analysis assigns.
    pub skill_extraction_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            skill_extraction_limit: std::env::var("SKILL_EXTRACTION_LIMIT")
                .unwrap_or_else(|_| "6".to_string())
                .parse::<usize>()
                .context("SKILL_EXTRACTION_LIMIT must be a non-negative integer")?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
