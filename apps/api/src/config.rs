use anyhow::{Context, Result};

use crate::llm_client;

const DEFAULT_MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub s3_bucket: String,
    pub s3_endpoint: String,
    pub aws_access_key_id: String,
    pub aws_secret_access_key: String,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub jwt_secret: String,
    pub jwt_refresh_secret: String,
    pub jwt_expire_days: i64,
    pub jwt_refresh_expire_days: i64,
    pub max_file_size: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            s3_bucket: require_env("S3_BUCKET")?,
            s3_endpoint: require_env("S3_ENDPOINT")?,
            aws_access_key_id: require_env("AWS_ACCESS_KEY_ID")?,
            aws_secret_access_key: require_env("AWS_SECRET_ACCESS_KEY")?,
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            gemini_model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| llm_client::DEFAULT_MODEL.to_string()),
            gemini_base_url: std::env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| llm_client::DEFAULT_BASE_URL.to_string()),
            jwt_secret: require_env("JWT_SECRET")?,
            jwt_refresh_secret: require_env("JWT_REFRESH_SECRET")?,
            jwt_expire_days: std::env::var("JWT_EXPIRE_DAYS")
                .unwrap_or_else(|_| "7".to_string())
                .parse::<i64>()
                .context("JWT_EXPIRE_DAYS must be a number of days")?,
            jwt_refresh_expire_days: std::env::var("JWT_REFRESH_EXPIRE_DAYS")
                .unwrap_or_else(|_| "30".to_string())
                .parse::<i64>()
                .context("JWT_REFRESH_EXPIRE_DAYS must be a number of days")?,
            max_file_size: std::env::var("MAX_FILE_SIZE")
                .unwrap_or_else(|_| DEFAULT_MAX_FILE_SIZE.to_string())
                .parse::<u64>()
                .context("MAX_FILE_SIZE must be a size in bytes")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
