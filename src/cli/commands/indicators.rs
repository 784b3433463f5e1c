//! Indicator table dump command.

use anyhow::{Context, Result};
use insight_config::load_config;
use insight_indicators::IndicatorEngine;
use std::path::Path;

use crate::cli::IndicatorsArgs;

fn fmt_opt(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:>10.3}", v),
        None => format!("{:>10}", "-"),
    }
}

pub fn run(args: IndicatorsArgs, config_path: &Path) -> Result<()> {
    let config = load_config(config_path).context("Failed to load configuration")?;

    let series = super::load_series(&args.symbol, args.data.as_deref(), &config)?;
    let set = IndicatorEngine::new().compute(&series);

    println!(
        "{:>12} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "date", "close", "rsi", "macd_hist", "bb_upper", "bb_lower", "sma50", "atr", "vol_ratio"
    );

    let start = set.len().saturating_sub(args.tail);
    for i in start..set.len() {
        let snapshot = set.snapshot(i).context("index within bounds")?;
        let date = series
            .get(i)
            .map(|b| b.datetime().format("%Y-%m-%d").to_string())
            .unwrap_or_default();

        println!(
            "{:>12} {:>10.2} {} {} {} {} {} {} {}",
            date,
            snapshot.close,
            fmt_opt(snapshot.rsi),
            fmt_opt(snapshot.macd_histogram),
            fmt_opt(snapshot.bb_upper),
            fmt_opt(snapshot.bb_lower),
            fmt_opt(snapshot.sma50),
            fmt_opt(snapshot.atr),
            fmt_opt(snapshot.volume_ratio),
        );
    }

    Ok(())
}
