use crate::errors::ConfigError;

pub const DEFAULT_MODEL: &str = "gemini-1.5-pro-latest";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Startup fails if the API key is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub google_api_key: String,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub port: u16,
    pub max_upload_bytes: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            google_api_key: get("GOOGLE_API_KEY").ok_or(ConfigError::MissingEnv("GOOGLE_API_KEY"))?,
            gemini_model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            gemini_api_base: get("GEMINI_API_BASE")
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            port: match get("PORT") {
                Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::Invalid {
                    key: "PORT",
                    reason: e.to_string(),
                })?,
                None => 8080,
            },
            max_upload_bytes: match get("MAX_UPLOAD_BYTES") {
                Some(raw) => raw.parse::<usize>().map_err(|e| ConfigError::Invalid {
                    key: "MAX_UPLOAD_BYTES",
                    reason: e.to_string(),
                })?,
                None => DEFAULT_MAX_UPLOAD_BYTES,
            },
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
