use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::llm_client;
use crate::upskill::videos;

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable is optional; API keys left unset disable the matching
/// integration and its fallback path is used instead.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub ai_timeout: Duration,
    pub youtube_api_key: Option<String>,
    pub youtube_base_url: String,
    pub video_timeout: Duration,
    pub upskill_db_path: PathBuf,
    pub max_upload_bytes: usize,
    pub audit_webhook_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            gemini_api_key: var("GEMINI_API_KEY"),
            gemini_model: var("GEMINI_MODEL")
                .unwrap_or_else(|| llm_client::DEFAULT_MODEL.to_string()),
            gemini_base_url: var("GEMINI_BASE_URL")
                .unwrap_or_else(|| llm_client::DEFAULT_BASE_URL.to_string()),
            ai_timeout: Duration::from_secs(parse_or(var("AI_TIMEOUT_SECS"), "AI_TIMEOUT_SECS", 10)?),
            youtube_api_key: var("YOUTUBE_API_KEY"),
            youtube_base_url: var("YOUTUBE_BASE_URL")
                .unwrap_or_else(|| videos::DEFAULT_BASE_URL.to_string()),
            video_timeout: Duration::from_secs(parse_or(
                var("VIDEO_TIMEOUT_SECS"),
                "VIDEO_TIMEOUT_SECS",
                5,
            )?),
            upskill_db_path: var("UPSKILL_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("data/upskill_db.json")),
            max_upload_bytes: parse_or(
                var("MAX_UPLOAD_BYTES"),
                "MAX_UPLOAD_BYTES",
                DEFAULT_MAX_UPLOAD_BYTES,
            )?,
            audit_webhook_url: var("AUDIT_WEBHOOK_URL"),
            port: parse_or(var("PORT"), "PORT", 5050)?,
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn parse_or<T>(value: Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(v) => v
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{v}'")),
        None => Ok(default),
    }
}
