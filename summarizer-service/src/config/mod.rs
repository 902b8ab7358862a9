use secrecy::Secret;
use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Gemini REST API base URL.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Upper bound for a single model call, in seconds.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, Deserialize)]
pub struct SummarizerConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub google: GoogleConfig,
    pub model: ModelConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleConfig {
    pub api_key: Secret<String>,
    pub api_base: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Text model used for every summary (e.g., gemini-2.0-flash)
    pub name: String,
    pub request_timeout_secs: u64,
}

impl SummarizerConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        Self::from_lookup(common_config, |key| env::var(key).ok())
    }

    /// Build the service settings from an arbitrary variable source.
    pub fn from_lookup<F>(common: core_config::Config, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let is_prod = lookup("ENVIRONMENT").unwrap_or_else(|| "dev".to_string()) == "prod";
        let get = |key: &str, default: Option<&str>| get_var(&lookup, key, default, is_prod);

        let default_timeout = DEFAULT_REQUEST_TIMEOUT_SECS.to_string();
        let timeout = get("SUMMARIZER_REQUEST_TIMEOUT_SECS", Some(default_timeout.as_str()))?;

        Ok(SummarizerConfig {
            common,
            google: GoogleConfig {
                api_key: Secret::new(get("GOOGLE_API_KEY", None)?),
                api_base: get("SUMMARIZER_API_BASE", Some(DEFAULT_API_BASE))?,
            },
            model: ModelConfig {
                name: get("SUMMARIZER_MODEL", Some(DEFAULT_MODEL))?,
                request_timeout_secs: timeout.parse().map_err(|e| {
                    AppError::ConfigError(anyhow::anyhow!(
                        "SUMMARIZER_REQUEST_TIMEOUT_SECS must be a whole number of seconds: {}",
                        e
                    ))
                })?,
            },
        })
    }
}

fn get_var<F>(lookup: &F, key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(val) => Ok(val),
        None => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
