//! Configuration structures.

use serde::{Deserialize, Serialize};

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub analysis: AnalysisSettings,
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "stock-insight".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Data source locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSettings {
    /// Directory searched for `{symbol}.csv` bar files
    pub bars_dir: String,
    /// Optional fundamentals JSON file
    pub fundamentals_file: Option<String>,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            bars_dir: "data".to_string(),
            fundamentals_file: None,
        }
    }
}

/// Analysis parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSettings {
    /// Default projection horizon in days
    pub projection_horizon_days: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            projection_horizon_days: 30,
        }
    }
}
