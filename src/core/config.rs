use std::env;
use std::fmt;
use std::str::FromStr;

use tracing::level_filters::LevelFilter;

use crate::errors::ImageGenError;

pub const S3_BUCKET_NAME_VAR: &str = "S3_BUCKET_NAME";
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";
pub const BEDROCK_MODEL_ID_VAR: &str = "BEDROCK_MODEL_ID";
pub const S3_REGION_VAR: &str = "S3_REGION";

pub const DEFAULT_MODEL_ID: &str = "stability.stable-diffusion-xl-v1";
/// Region the S3 client signs for when `S3_REGION` is unset.
pub const DEFAULT_S3_REGION: &str = "us-east-1";

pub const MISSING_BUCKET_MESSAGE: &str = "S3 bucket name was not specified.";

/// Log verbosity accepted in `LOG_LEVEL`.
///
/// Names are matched case-insensitively. `WARNING`, `CRITICAL`, `FATAL` and
/// `NOTSET` are accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    #[must_use]
    pub fn as_filter(self) -> LevelFilter {
        match self {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
        }
    }
}

impl FromStr for LogLevel {
    type Err = ImageGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TRACE" | "NOTSET" => Ok(LogLevel::Trace),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" | "CRITICAL" | "FATAL" => Ok(LogLevel::Error),
            other => Err(ImageGenError::ConfigurationError(format!(
                "Unknown level: '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        };
        f.write_str(name)
    }
}

/// Settings read from the environment at the start of every invocation.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub s3_bucket_name: String,
    pub log_level: LogLevel,
    pub model_id: String,
}

impl AppConfig {
    /// Builds the config from a variable source, usually `std::env::var`.
    ///
    /// The log level is resolved before the bucket so a bad `LOG_LEVEL` is
    /// reported even when the bucket is also missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ImageGenError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = resolve_log_level(&lookup)?;

        let s3_bucket_name = lookup(S3_BUCKET_NAME_VAR)
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| ImageGenError::ConfigurationError(MISSING_BUCKET_MESSAGE.to_string()))?;

        let model_id = lookup(BEDROCK_MODEL_ID_VAR)
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL_ID.to_string());

        Ok(Self {
            s3_bucket_name,
            log_level,
            model_id,
        })
    }
}

/// Reads `LOG_LEVEL`, falling back to `INFO` when unset.
pub fn resolve_log_level<F>(lookup: &F) -> Result<LogLevel, ImageGenError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(LOG_LEVEL_VAR) {
        Some(raw) => raw.parse(),
        None => Ok(LogLevel::default()),
    }
}

/// Region for the S3 client, read once at cold start.
#[must_use]
pub fn s3_region_from_env() -> String {
    env::var(S3_REGION_VAR)
        .ok()
        .filter(|r| !r.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_S3_REGION.to_string())
}
