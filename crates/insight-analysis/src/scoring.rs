//! Composite health score.
//!
//! Combines the latest bar's technical indicators with fundamental
//! metrics into a single bounded 0-100 score, a categorical rating, and
//! an ordered list of human-readable signals. Every rule is independently
//! skippable: an undefined indicator or absent fundamental contributes
//! zero points and no signal, it never subtracts or fails.

use insight_core::types::FundamentalSnapshot;
use insight_indicators::IndicatorSnapshot;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorical rating derived from the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    StrongSell,
    Sell,
    Hold,
    Buy,
    StrongBuy,
}

impl Rating {
    /// Map a clamped 0-100 score onto a rating.
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=100 => Rating::StrongBuy,
            70..=79 => Rating::Buy,
            50..=69 => Rating::Hold,
            40..=49 => Rating::Sell,
            _ => Rating::StrongSell,
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Rating::StrongBuy => "Strong Buy",
            Rating::Buy => "Buy",
            Rating::Hold => "Hold",
            Rating::Sell => "Sell",
            Rating::StrongSell => "Strong Sell",
        };
        f.write_str(label)
    }
}

/// Direction a signal leans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Positive,
    Neutral,
    Negative,
}

/// One human-readable scoring signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSignal {
    pub message: String,
    pub polarity: Polarity,
}

/// Composite score result. Produced fresh per invocation, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Bounded composite score, 0-100
    pub score: u8,
    /// Categorical rating derived from the score
    pub rating: Rating,
    /// Signals in rule evaluation order:
    /// oscillator, momentum, trend, valuation, profitability, efficiency
    pub signals: Vec<ScoreSignal>,
}

/// Stateless scoring engine.
#[derive(Debug, Clone, Default)]
pub struct ScoreEngine;

impl ScoreEngine {
    pub fn new() -> Self {
        Self
    }

    /// Score the latest bar's indicators plus fundamentals.
    ///
    /// Starts from a base of 50 and adds bounded increments per rule;
    /// the final score is clamped to [0, 100].
    pub fn compute(
        &self,
        latest: &IndicatorSnapshot,
        fundamentals: &FundamentalSnapshot,
    ) -> ScoreResult {
        let mut score: i32 = 50;
        let mut signals = Vec::new();

        let mut apply = |points: i32, message: &str, polarity: Polarity| {
            score += points;
            signals.push(ScoreSignal {
                message: message.to_string(),
                polarity,
            });
        };

        // Oscillator
        if let Some(rsi) = latest.rsi {
            if (40.0..=60.0).contains(&rsi) {
                apply(15, "RSI in healthy range", Polarity::Positive);
            } else if rsi < 30.0 {
                apply(10, "RSI oversold, potential rebound", Polarity::Positive);
            } else if rsi > 70.0 {
                apply(5, "RSI overbought", Polarity::Negative);
            }
        }

        // Momentum
        if let (Some(macd), Some(signal)) = (latest.macd, latest.macd_signal) {
            if macd > signal {
                apply(15, "MACD above signal line", Polarity::Positive);
            } else {
                apply(5, "MACD below signal line", Polarity::Negative);
            }
        }

        // Trend
        if let Some(sma50) = latest.sma50 {
            let price = latest.close;
            match latest.sma200 {
                Some(sma200) if price > sma50 && sma50 > sma200 => {
                    apply(
                        20,
                        "Price above 50-day and 200-day averages (uptrend)",
                        Polarity::Positive,
                    );
                }
                _ if price > sma50 => {
                    apply(12, "Price above 50-day average", Polarity::Positive);
                }
                _ => {
                    apply(4, "Price below 50-day average", Polarity::Negative);
                }
            }
        }

        // Valuation
        if let Some(pe) = fundamentals.pe_ratio {
            if (10.0..=25.0).contains(&pe) {
                apply(15, "P/E in fair-value range", Polarity::Positive);
            } else if pe > 35.0 {
                apply(5, "P/E elevated", Polarity::Negative);
            }
        }

        // Profitability
        if let Some(margin) = fundamentals.profit_margin {
            if margin > 0.20 {
                apply(15, "Strong profit margin", Polarity::Positive);
            } else if margin > 0.10 {
                apply(10, "Decent profit margin", Polarity::Neutral);
            }
        }

        // Efficiency
        if let Some(roe) = fundamentals.return_on_equity {
            if roe > 0.20 {
                apply(20, "Strong return on equity", Polarity::Positive);
            } else if roe > 0.10 {
                apply(12, "Decent return on equity", Polarity::Neutral);
            }
        }

        let score = score.clamp(0, 100) as u8;

        ScoreResult {
            score,
            rating: Rating::from_score(score),
            signals,
        }
    }
}
