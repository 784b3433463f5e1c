//! Configuration management.

mod settings;

pub use settings::{AnalysisSettings, AppConfig, AppSettings, DataSettings, LoggingConfig};

use config::{Config, ConfigError, Environment, File};
use std::path::Path;

/// Load configuration from file and environment.
///
/// The file is optional; defaults apply when it is absent. Environment
/// variables with the `INSIGHT` prefix override file values, e.g.
/// `INSIGHT_ANALYSIS__PROJECTION_HORIZON_DAYS=14`.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(
            Environment::with_prefix("INSIGHT")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    config.try_deserialize()
}
