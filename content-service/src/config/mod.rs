use crate::services::providers::gemini::{GeminiConfig, GEMINI_API_BASE};
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::time::Duration;

const DEFAULT_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_TIMEOUT_SECS: u64 = 120;
const DEFAULT_TITLE_COUNT: usize = 3;
/// Upper bound on titles per request; mirrored by the request validator.
pub const MAX_TITLE_COUNT: usize = 10;
/// 20 MiB, the same ceiling the upload path enforces on the body.
const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct ContentConfig {
    pub common: core_config::Config,
    pub gemini: GeminiSettings,
    pub titles: TitleSettings,
    pub transcription: TranscriptionSettings,
}

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct TitleSettings {
    /// Used when a request does not name a count.
    pub default_count: usize,
}

#[derive(Debug, Clone)]
pub struct TranscriptionSettings {
    pub max_upload_bytes: usize,
}

impl Default for TitleSettings {
    fn default() -> Self {
        Self {
            default_count: DEFAULT_TITLE_COUNT,
        }
    }
}

impl Default for TranscriptionSettings {
    fn default() -> Self {
        Self {
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl ContentConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        let config = ContentConfig {
            common: common_config,
            gemini: GeminiSettings {
                api_key: get_env("GEMINI_API_KEY", None, is_prod)?,
                model: get_env("GEMINI_MODEL", Some(DEFAULT_MODEL), is_prod)?,
                api_base: get_env("GEMINI_API_BASE", Some(GEMINI_API_BASE), false)?,
                timeout_secs: parse_env("GEMINI_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?,
            },
            titles: TitleSettings {
                default_count: parse_env("TITLES_DEFAULT_COUNT", DEFAULT_TITLE_COUNT)?,
            },
            transcription: TranscriptionSettings {
                max_upload_bytes: parse_env(
                    "TRANSCRIBE_MAX_UPLOAD_BYTES",
                    DEFAULT_MAX_UPLOAD_BYTES,
                )?,
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would make every request fail.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.gemini.api_key.trim().is_empty() {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "GEMINI_API_KEY is required but empty"
            )));
        }
        if !(1..=MAX_TITLE_COUNT).contains(&self.titles.default_count) {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "TITLES_DEFAULT_COUNT must be between 1 and {}",
                MAX_TITLE_COUNT
            )));
        }
        Ok(())
    }

    pub fn gemini_config(&self) -> GeminiConfig {
        GeminiConfig {
            api_key: self.gemini.api_key.clone(),
            model: self.gemini.model.clone(),
            api_base: self.gemini.api_base.clone(),
            timeout: Duration::from_secs(self.gemini.timeout_secs),
        }
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod && default.is_none() {
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

fn parse_env<T>(key: &str, default: T) -> Result<T, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(val) => val.trim().parse().map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!("{} has an invalid value '{}': {}", key, val, e))
        }),
        Err(_) => Ok(default),
    }
}
