//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "insight")]
#[command(author, version, about = "Stock analysis: indicators, health score, price projection")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level
    #[arg(short, long, default_value = "info")]
    pub log_level: LogLevel,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a symbol: indicators, health score, and projection
    Analyze(AnalyzeArgs),
    /// Dump the trailing indicator table for a symbol
    Indicators(IndicatorsArgs),
    /// Validate configuration
    ValidateConfig,
}

#[derive(clap::Args)]
pub struct AnalyzeArgs {
    /// Symbol to analyze
    #[arg(short, long)]
    pub symbol: String,

    /// Bar history CSV file (defaults to {bars_dir}/{symbol}.csv)
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Fundamentals JSON file (overrides configuration)
    #[arg(long)]
    pub fundamentals: Option<PathBuf>,

    /// Projection horizon in days (overrides configuration)
    #[arg(long)]
    pub horizon: Option<usize>,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub output: String,

    /// Save the JSON report to a file
    #[arg(long)]
    pub save: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct IndicatorsArgs {
    /// Symbol to compute indicators for
    #[arg(short, long)]
    pub symbol: String,

    /// Bar history CSV file (defaults to {bars_dir}/{symbol}.csv)
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Number of trailing bars to print
    #[arg(long, default_value = "10")]
    pub tail: usize,
}
