use std::env;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level configuration for the report generator.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub out_dir: PathBuf,
    pub preview_rows: usize,
    pub telemetry: TelemetryConfig,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("STATE_REPORT_PREVIEW_ROWS must be a non-negative integer, got '{0}'")]
    InvalidPreviewRows(String),
}

impl AppConfig {
    /// Reads `.env` (if present) and then the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_dir = lookup("STATE_REPORT_DATA_DIR").unwrap_or_else(|| "data".to_string());
        let out_dir = lookup("STATE_REPORT_OUT_DIR").unwrap_or_else(|| ".".to_string());
        let log_level = lookup("STATE_REPORT_LOG_LEVEL").unwrap_or_else(|| "info".to_string());
        let preview_rows = match lookup("STATE_REPORT_PREVIEW_ROWS") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidPreviewRows(raw.clone()))?,
            None => 5,
        };

        Ok(Self {
            data_dir: PathBuf::from(data_dir),
            out_dir: PathBuf::from(out_dir),
            preview_rows,
            telemetry: TelemetryConfig { log_level },
        })
    }
}
