use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_HTTP_HOST: &str = "127.0.0.1";
pub const DEFAULT_BACKGROUNDS_DIR: &str = "./backgrounds";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has invalid value '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Console only when unset.
    pub file_path: Option<PathBuf>,
    pub archive_pattern: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub http_host: String,
    pub http_port: u16,
    pub backgrounds_dir: PathBuf,
    pub public_base_url: String,
    pub admin_token: Option<String>,
    pub max_upload_bytes: usize,
    pub log: LogConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let database_url = require("POOL_DATABASE_URL")?;
        let http_host = get("POOL_HTTP_HOST").unwrap_or_else(|| DEFAULT_HTTP_HOST.to_string());
        let http_port = parse("POOL_HTTP_PORT", require("POOL_HTTP_PORT")?)?;
        let backgrounds_dir = PathBuf::from(
            get("POOL_BACKGROUNDS_DIR").unwrap_or_else(|| DEFAULT_BACKGROUNDS_DIR.to_string()),
        );
        let public_base_url = get("POOL_PUBLIC_BASE_URL")
            .unwrap_or_else(|| format!("http://{}:{}", http_host, http_port));
        let max_upload_bytes = match get("POOL_MAX_UPLOAD_BYTES") {
            Some(value) => parse("POOL_MAX_UPLOAD_BYTES", value)?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        let file_path = get("LOG_FILE_PATH").map(PathBuf::from);
        let archive_pattern = get("LOG_ARCHIVE_PATTERN");
        if file_path.is_some() && archive_pattern.is_none() {
            return Err(ConfigError::Missing("LOG_ARCHIVE_PATTERN"));
        }

        Ok(Self {
            database_url,
            http_host,
            http_port,
            backgrounds_dir,
            public_base_url,
            admin_token: get("POOL_ADMIN_TOKEN"),
            max_upload_bytes,
            log: LogConfig {
                file_path,
                archive_pattern,
            },
        })
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { key, value })
}
