//! Fundamental metrics for one instrument.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A bag of fundamental metrics retrieved for one instrument at one point
/// in time. Every metric may be absent; an absent metric disables the
/// corresponding scoring rule rather than failing the analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundamentalSnapshot {
    /// Symbol identifier
    pub symbol: String,
    /// When the metrics were retrieved
    pub retrieved_at: DateTime<Utc>,
    /// Trailing price/earnings ratio
    #[serde(default)]
    pub pe_ratio: Option<f64>,
    /// Profit margin as a fraction (0.20 = 20%)
    #[serde(default)]
    pub profit_margin: Option<f64>,
    /// Return on equity as a fraction
    #[serde(default)]
    pub return_on_equity: Option<f64>,
}

impl FundamentalSnapshot {
    /// Create an empty snapshot with no metrics.
    pub fn empty(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            retrieved_at: Utc::now(),
            pe_ratio: None,
            profit_margin: None,
            return_on_equity: None,
        }
    }

    /// Set the trailing P/E ratio.
    pub fn with_pe_ratio(mut self, pe: f64) -> Self {
        self.pe_ratio = Some(pe);
        self
    }

    /// Set the profit margin.
    pub fn with_profit_margin(mut self, margin: f64) -> Self {
        self.profit_margin = Some(margin);
        self
    }

    /// Set the return on equity.
    pub fn with_return_on_equity(mut self, roe: f64) -> Self {
        self.return_on_equity = Some(roe);
        self
    }
}
