//! CLI command implementations.

pub mod analyze;
pub mod indicators;
pub mod validate;

use anyhow::{Context, Result};
use insight_config::AppConfig;
use insight_core::types::BarSeries;
use insight_data::CsvBarSource;
use std::path::{Path, PathBuf};

/// Resolve the bar file for a symbol and load its series.
///
/// An explicit `--data` path wins; otherwise `{bars_dir}/{symbol}.csv`
/// (upper- or lowercase) is searched.
pub(crate) fn load_series(
    symbol: &str,
    data: Option<&Path>,
    config: &AppConfig,
) -> Result<BarSeries> {
    let path = match data {
        Some(path) => path.to_path_buf(),
        None => {
            let dir = PathBuf::from(&config.data.bars_dir);
            let candidates = [
                dir.join(format!("{}.csv", symbol)),
                dir.join(format!("{}.csv", symbol.to_lowercase())),
            ];
            candidates
                .iter()
                .find(|p| p.exists())
                .cloned()
                .with_context(|| {
                    format!(
                        "No bar file for '{}' under '{}'. Provide one with --data",
                        symbol, config.data.bars_dir
                    )
                })?
        }
    };

    let source = CsvBarSource::new(path.to_str().context("non-UTF8 data path")?)?;
    let series = source
        .load(symbol)
        .with_context(|| format!("Failed to load bars from {}", path.display()))?;

    Ok(series)
}
