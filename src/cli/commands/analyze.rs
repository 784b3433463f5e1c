//! Analyze command implementation.

use anyhow::{Context, Result};
use insight_analysis::{AnalysisReport, ProjectionEngine, ScoreEngine};
use insight_config::load_config;
use insight_core::types::FundamentalSnapshot;
use insight_data::FundamentalsSource;
use insight_indicators::IndicatorEngine;
use std::path::Path;
use tracing::{info, warn};

use crate::cli::AnalyzeArgs;

pub fn run(args: AnalyzeArgs, config_path: &Path) -> Result<()> {
    let config = load_config(config_path).context("Failed to load configuration")?;

    info!(symbol = %args.symbol, "starting analysis");

    let series = super::load_series(&args.symbol, args.data.as_deref(), &config)?;

    // Fundamentals are optional; analysis proceeds on technicals alone
    let fundamentals_path = args
        .fundamentals
        .as_deref()
        .map(|p| p.to_path_buf())
        .or_else(|| config.data.fundamentals_file.as_ref().map(Into::into));

    let fundamentals = match fundamentals_path {
        Some(path) => match FundamentalsSource::new(&path).and_then(|s| s.get(&args.symbol)) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(symbol = %args.symbol, error = %e, "fundamentals unavailable, scoring on technicals only");
                FundamentalSnapshot::empty(args.symbol.clone())
            }
        },
        None => FundamentalSnapshot::empty(args.symbol.clone()),
    };

    let horizon = args
        .horizon
        .unwrap_or(config.analysis.projection_horizon_days);

    let indicators = IndicatorEngine::new().compute(&series);
    let latest = indicators.latest();

    let score = latest
        .as_ref()
        .map(|snapshot| ScoreEngine::new().compute(snapshot, &fundamentals));
    let projection = ProjectionEngine::new().project(&series, horizon);

    let report = AnalysisReport {
        symbol: args.symbol.clone(),
        bars: series.len(),
        latest,
        score,
        projection,
    };

    match args.output.as_str() {
        "json" => println!("{}", report.to_json()?),
        _ => print!("{}", report.summary()),
    }

    if let Some(save_path) = &args.save {
        std::fs::write(save_path, report.to_json()?)?;
        info!("Report saved to {:?}", save_path);
    }

    Ok(())
}
