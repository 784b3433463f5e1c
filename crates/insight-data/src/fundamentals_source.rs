//! Fundamentals JSON source.
//!
//! Reads a JSON file mapping symbols to fundamental metrics, standing in
//! for the external market-data provider's fundamentals endpoint:
//!
//! ```json
//! {
//!   "AAPL": { "pe_ratio": 28.3, "profit_margin": 0.25, "return_on_equity": 1.47 },
//!   "F":    { "pe_ratio": 11.2 }
//! }
//! ```
//!
//! Any metric may be absent; absent metrics simply disable the
//! corresponding scoring rules downstream.

use chrono::Utc;
use insight_core::error::DataError;
use insight_core::types::FundamentalSnapshot;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct FundamentalsRecord {
    #[serde(default)]
    pe_ratio: Option<f64>,
    #[serde(default)]
    profit_margin: Option<f64>,
    #[serde(default)]
    return_on_equity: Option<f64>,
}

/// JSON-file fundamentals source.
pub struct FundamentalsSource {
    records: HashMap<String, FundamentalsRecord>,
}

impl FundamentalsSource {
    /// Load the fundamentals file.
    pub fn new(path: &Path) -> Result<Self, DataError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|_| DataError::NoDataAvailable(path.display().to_string()))?;

        let records: HashMap<String, FundamentalsRecord> =
            serde_json::from_str(&contents).map_err(|e| DataError::ParseError(e.to_string()))?;

        debug!(symbols = records.len(), path = %path.display(), "loaded fundamentals");

        Ok(Self { records })
    }

    /// Get the snapshot for one symbol.
    pub fn get(&self, symbol: &str) -> Result<FundamentalSnapshot, DataError> {
        let record = self
            .records
            .get(symbol)
            .ok_or_else(|| DataError::SymbolNotFound(symbol.to_string()))?;

        Ok(FundamentalSnapshot {
            symbol: symbol.to_string(),
            retrieved_at: Utc::now(),
            pe_ratio: record.pe_ratio,
            profit_margin: record.profit_margin,
            return_on_equity: record.return_on_equity,
        })
    }
}
