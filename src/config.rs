use std::env;
use std::path::PathBuf;

use crate::shared::domain::{InvalidLanguage, Language};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid {key} value '{value}': {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("Data directory '{0}' does not exist or is not a directory")]
    MissingDataDir(PathBuf),

    #[error("Invalid DEFAULT_LANGUAGE: {0}")]
    DefaultLanguage(#[from] InvalidLanguage),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
    pub default_language: Language,
    pub log_format: LogFormat,
}

impl AppConfig {
    pub const DEFAULT_HOST: &'static str = "127.0.0.1";
    pub const DEFAULT_PORT: u16 = 8080;
    pub const DEFAULT_DATA_DIR: &'static str = "data";

    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the
    /// process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        if dotenvy::from_filename(format!(".env.{rust_env}")).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source. Blank values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = var("HOST").unwrap_or_else(|| Self::DEFAULT_HOST.to_string());

        let port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidValue {
                    key: "PORT",
                    value: raw.clone(),
                    reason: e.to_string(),
                })?,
            None => Self::DEFAULT_PORT,
        };

        let data_dir = PathBuf::from(
            var("CV_DATA_DIR").unwrap_or_else(|| Self::DEFAULT_DATA_DIR.to_string()),
        );
        if !data_dir.is_dir() {
            return Err(ConfigError::MissingDataDir(data_dir));
        }

        let default_language = match var("DEFAULT_LANGUAGE") {
            Some(code) => Language::resolve(code.trim())?,
            None => Language::default(),
        };

        let log_format = match var("LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    key: "LOG_FORMAT",
                    value: other.to_string(),
                    reason: "expected 'json' or 'pretty'".to_string(),
                })
            }
        };

        Ok(Self {
            host,
            port,
            data_dir,
            default_language,
            log_format,
        })
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}
