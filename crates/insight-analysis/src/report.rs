//! Aggregated analysis report for presentation.

use insight_core::error::{InsightError, InsightResult};
use insight_indicators::IndicatorSnapshot;
use serde::{Deserialize, Serialize};

use crate::projection::ProjectionResult;
use crate::scoring::{Polarity, ScoreResult};

/// Everything the presentation layer needs for one instrument.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Symbol identifier
    pub symbol: String,
    /// Number of bars analyzed
    pub bars: usize,
    /// Latest indicator snapshot, if the series was non-empty
    pub latest: Option<IndicatorSnapshot>,
    /// Composite health score
    pub score: Option<ScoreResult>,
    /// Price projection, absent when history is insufficient
    pub projection: Option<ProjectionResult>,
}

impl AnalysisReport {
    /// Serialize the report to pretty JSON.
    pub fn to_json(&self) -> InsightResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| InsightError::Serialization(e.to_string()))
    }

    /// Human-readable multi-line summary.
    pub fn summary(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!("Analysis: {} ({} bars)\n", self.symbol, self.bars));

        if let Some(latest) = &self.latest {
            out.push_str(&format!("  Close: {:.2}\n", latest.close));
            if let Some(rsi) = latest.rsi {
                out.push_str(&format!("  RSI(14): {:.1}\n", rsi));
            }
            if let Some(atr) = latest.atr {
                out.push_str(&format!("  ATR(14): {:.3}\n", atr));
            }
        }

        if let Some(score) = &self.score {
            out.push_str(&format!("  Score: {}/100 ({})\n", score.score, score.rating));
            for signal in &score.signals {
                let marker = match signal.polarity {
                    Polarity::Positive => '+',
                    Polarity::Neutral => '=',
                    Polarity::Negative => '-',
                };
                out.push_str(&format!("    [{}] {}\n", marker, signal.message));
            }
        }

        match &self.projection {
            Some(p) => {
                out.push_str(&format!(
                    "  Projection: {:.2} -> {:.2} ({:+.2}%, {}, confidence {:.0})\n",
                    p.current_price, p.projected_price, p.change_pct, p.trend, p.confidence
                ));
            }
            None => out.push_str("  Projection: insufficient history\n"),
        }

        out
    }
}
