//! Validate configuration command.

use anyhow::Result;
use insight_config::load_config;
use std::path::Path;

pub fn run(config_path: &Path) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);

    match load_config(config_path) {
        Ok(config) => {
            println!("Configuration is valid!");
            println!();
            println!("App: {}", config.app.name);
            println!("Environment: {}", config.app.environment);
            println!("Log level: {}", config.logging.level);
            println!("Bars directory: {}", config.data.bars_dir);
            println!(
                "Fundamentals file: {}",
                config.data.fundamentals_file.as_deref().unwrap_or("(none)")
            );
            println!(
                "Projection horizon: {} days",
                config.analysis.projection_horizon_days
            );
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
