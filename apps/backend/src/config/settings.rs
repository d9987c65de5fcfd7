//! Application settings loaded once from environment variables.

use std::env;
use std::time::Duration;

use crate::error::AppError;

const DEFAULT_CORS_ORIGINS: [&str; 3] = [
    "http://localhost:5174",
    "http://localhost:5173",
    "http://localhost:3000",
];

pub const DEFAULT_VISION_API_URL: &str = "https://api.anthropic.com/v1/messages";
pub const DEFAULT_VISION_MODEL: &str = "claude-sonnet-4-20250514";
const DEFAULT_VISION_TIMEOUT_SECS: u64 = 60;

/// Scorecard images are capped at 10 MiB decoded; base64 and the JSON
/// envelope add roughly a third on top.
const DEFAULT_MAX_JSON_PAYLOAD_SIZE: usize = 16 * 1024 * 1024;

/// Vision model endpoint used for scorecard import.
#[derive(Debug, Clone, PartialEq)]
pub struct VisionSettings {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub max_json_payload_size: usize,
    /// `None` when no API key is configured; import endpoints then answer 503.
    pub vision: Option<VisionSettings>,
}

impl Settings {
    /// Load and validate all settings from the process environment
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Load settings through an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let host = var("BACKEND_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port_str = var("BACKEND_PORT").unwrap_or_else(|| "3001".to_string());
        let port = port_str.trim().parse::<u16>().map_err(|_| {
            AppError::config(format!(
                "BACKEND_PORT must be a valid port number, got '{port_str}'"
            ))
        })?;

        let cors_origins = var("CORS_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .filter(|origins| !origins.is_empty())
            .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect());

        let max_json_payload_size = match var("MAX_JSON_PAYLOAD_SIZE") {
            Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
                AppError::config(format!(
                    "MAX_JSON_PAYLOAD_SIZE must be a byte count, got '{raw}'"
                ))
            })?,
            None => DEFAULT_MAX_JSON_PAYLOAD_SIZE,
        };

        let vision = match var("VISION_API_KEY") {
            Some(api_key) => {
                let timeout_secs = match var("VISION_TIMEOUT_SECS") {
                    Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                        AppError::config(format!(
                            "VISION_TIMEOUT_SECS must be a number of seconds, got '{raw}'"
                        ))
                    })?,
                    None => DEFAULT_VISION_TIMEOUT_SECS,
                };
                Some(VisionSettings {
                    api_key,
                    api_url: var("VISION_API_URL")
                        .unwrap_or_else(|| DEFAULT_VISION_API_URL.to_string()),
                    model: var("VISION_MODEL").unwrap_or_else(|| DEFAULT_VISION_MODEL.to_string()),
                    timeout: Duration::from_secs(timeout_secs),
                })
            }
            None => None,
        };

        Ok(Settings {
            host,
            port,
            cors_origins,
            max_json_payload_size,
            vision,
        })
    }

    /// Settings for tests: defaults everywhere, no vision model.
    pub fn for_tests() -> Self {
        Settings {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect(),
            max_json_payload_size: DEFAULT_MAX_JSON_PAYLOAD_SIZE,
            vision: None,
        }
    }
}

/// Comma-separated origins; empty entries, "null" and non-http(s) values are dropped.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(str::to_string)
        .collect()
}
