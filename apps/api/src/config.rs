use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Everything has a standalone-friendly default; the chat API key is the
/// only secret and stays optional.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Where the single-record profile JSON lives.
    pub profile_store_path: PathBuf,
    /// Optional directory overriding the bundled datasets.
    pub dataset_dir: Option<PathBuf>,
    pub chat_base_url: String,
    pub chat_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            profile_store_path: std::env::var("PROFILE_STORE_PATH")
                .unwrap_or_else(|_| "data/profile.json".to_string())
                .into(),
            dataset_dir: std::env::var("DATASET_DIR").ok().map(PathBuf::from),
            chat_base_url: std::env::var("CHAT_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3080".to_string()),
            chat_api_key: std::env::var("CHAT_API_KEY").ok(),
        })
    }
}
