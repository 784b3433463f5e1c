//! Short-horizon linear price projection.
//!
//! Fits an ordinary-least-squares line through the trailing closes,
//! nudges the slope by recent momentum, and extrapolates a fixed number
//! of days ahead. Confidence is a bounded heuristic inversely related to
//! recent volatility, not a statistical confidence interval.

use insight_core::types::BarSeries;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of the projected trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Bullish,
    Bearish,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Trend::Bullish => "Bullish",
            Trend::Bearish => "Bearish",
        })
    }
}

/// Price projection result. Produced fresh per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Last close in the series
    pub current_price: f64,
    /// Projected price at the horizon, clamped to >= 0
    pub projected_price: f64,
    /// Percentage change from current to projected
    pub change_pct: f64,
    /// Trend direction of the adjusted slope
    pub trend: Trend,
    /// Bounded 0-100 heuristic, high when recent volatility is low
    pub confidence: f64,
}

/// Stateless projection engine.
///
/// Returns `None` when the series is too short; that is a normal
/// insufficient-data outcome, not an error.
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    /// Minimum series length before any projection is attempted
    min_bars: usize,
    /// Regression window (trailing bars)
    lookback: usize,
    /// Bars back for the momentum measurement
    momentum_lookback: usize,
    /// Fraction of momentum folded into the slope
    momentum_weight: f64,
    /// Trailing closes used for the volatility/confidence estimate
    volatility_window: usize,
}

impl ProjectionEngine {
    /// Create an engine with default parameters (60 min bars, 90-bar
    /// regression, 30-bar momentum at weight 0.3, 30-bar volatility).
    pub fn new() -> Self {
        Self {
            min_bars: 60,
            lookback: 90,
            momentum_lookback: 30,
            momentum_weight: 0.3,
            volatility_window: 30,
        }
    }

    /// Project the close price `horizon_days` ahead.
    pub fn project(&self, series: &BarSeries, horizon_days: usize) -> Option<ProjectionResult> {
        if series.len() < self.min_bars {
            return None;
        }

        let closes = series.closes();
        let start = closes.len().saturating_sub(self.lookback);
        let window = &closes[start..];
        let n = window.len();

        let (slope, intercept) = ols_fit(window)?;

        // Fractional change over the trailing momentum window; zero when
        // the window cannot be indexed.
        let momentum = if n > self.momentum_lookback {
            let base = window[n - 1 - self.momentum_lookback];
            if base != 0.0 {
                (window[n - 1] - base) / base
            } else {
                0.0
            }
        } else {
            0.0
        };

        let adjusted_slope = slope * (1.0 + momentum * self.momentum_weight);

        let projected = intercept + adjusted_slope * (n + horizon_days) as f64;
        let projected_price = projected.max(0.0);

        let current_price = window[n - 1];
        let change_pct = (projected_price - current_price) / current_price * 100.0;

        // Zero slope counts as bullish
        let trend = if adjusted_slope >= 0.0 {
            Trend::Bullish
        } else {
            Trend::Bearish
        };

        let confidence = self.confidence(&closes);

        Some(ProjectionResult {
            current_price,
            projected_price,
            change_pct,
            trend,
            confidence,
        })
    }

    /// Confidence from the volatility of daily fractional returns over
    /// the trailing window: `clamp(100 - stdev * 1000, 0, 100)`.
    fn confidence(&self, closes: &[f64]) -> f64 {
        let start = closes.len().saturating_sub(self.volatility_window);
        let tail = &closes[start..];

        let returns: Vec<f64> = tail
            .windows(2)
            .filter(|w| w[0] != 0.0)
            .map(|w| (w[1] - w[0]) / w[0])
            .collect();

        if returns.is_empty() {
            return 100.0;
        }

        let mean = returns.iter().sum::<f64>() / returns.len() as f64;
        let variance =
            returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / returns.len() as f64;
        let stdev = variance.sqrt();

        (100.0 - stdev * 1000.0).clamp(0.0, 100.0)
    }
}

impl Default for ProjectionEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordinary least squares of `y` against its 0-based index.
///
/// Returns `(slope, intercept)`, or `None` when the index variance is
/// zero (cannot happen for two or more points, but guarded anyway).
fn ols_fit(y: &[f64]) -> Option<(f64, f64)> {
    let n = y.len() as f64;
    if y.len() < 2 {
        return None;
    }

    let sum_x: f64 = (0..y.len()).map(|i| i as f64).sum();
    let sum_y: f64 = y.iter().sum();
    let sum_xy: f64 = y.iter().enumerate().map(|(i, &v)| i as f64 * v).sum();
    let sum_x2: f64 = (0..y.len()).map(|i| (i as f64) * (i as f64)).sum();

    let denom = n * sum_x2 - sum_x * sum_x;
    if denom == 0.0 {
        return None;
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denom;
    let intercept = (sum_y - slope * sum_x) / n;

    Some((slope, intercept))
}

#[cfg(test)]
mod tests {
    use super::*;
    use insight_core::types::Bar;

    fn series_from_closes(closes: &[f64]) -> BarSeries {
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| {
                Bar::new(
                    i as i64 * 86_400_000,
                    close,
                    close + 0.5,
                    close - 0.5,
                    close,
                    1000.0,
                )
            })
            .collect()
    }

    #[test]
    fn test_ols_fit_exact_line() {
        let y: Vec<f64> = (0..10).map(|i| 5.0 + 2.0 * i as f64).collect();
        let (slope, intercept) = ols_fit(&y).unwrap();

        assert!((slope - 2.0).abs() < 1e-10);
        assert!((intercept - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_ols_fit_degenerate() {
        assert!(ols_fit(&[]).is_none());
        assert!(ols_fit(&[100.0]).is_none());
    }

    #[test]
    fn test_short_series_returns_none() {
        let closes: Vec<f64> = (0..59).map(|i| 100.0 + i as f64).collect();
        let series = series_from_closes(&closes);

        assert!(ProjectionEngine::new().project(&series, 30).is_none());
    }

    #[test]
    fn test_sixty_bars_is_enough() {
        let closes: Vec<f64> = (0..60).map(|i| 100.0 + i as f64).collect();
        let series = series_from_closes(&closes);

        assert!(ProjectionEngine::new().project(&series, 30).is_some());
    }

    #[test]
    fn test_constant_series_projection() {
        let closes = vec![100.0; 200];
        let series = series_from_closes(&closes);

        let result = ProjectionEngine::new().project(&series, 30).unwrap();

        assert!((result.current_price - 100.0).abs() < 1e-9);
        assert!((result.projected_price - 100.0).abs() < 1e-9);
        assert!(result.change_pct.abs() < 1e-9);
        // Zero slope pins to Bullish
        assert_eq!(result.trend, Trend::Bullish);
        // Zero volatility pins confidence to the upper bound
        assert!((result.confidence - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_uptrend_is_bullish_with_positive_change() {
        let closes: Vec<f64> = (0..120).map(|i| 100.0 + i as f64 * 0.5).collect();
        let series = series_from_closes(&closes);

        let result = ProjectionEngine::new().project(&series, 30).unwrap();

        assert_eq!(result.trend, Trend::Bullish);
        assert!(result.change_pct > 0.0);
        assert!(result.projected_price > result.current_price);
    }

    #[test]
    fn test_downtrend_is_bearish_and_clamped_at_zero() {
        // Steep decline that extrapolates below zero
        let closes: Vec<f64> = (0..100).map(|i| 500.0 - i as f64 * 5.0).collect();
        let series = series_from_closes(&closes);

        let result = ProjectionEngine::new().project(&series, 60).unwrap();

        assert_eq!(result.trend, Trend::Bearish);
        assert!(result.projected_price >= 0.0);
    }

    #[test]
    fn test_confidence_clamped_for_extreme_volatility() {
        // Wild alternation: stdev of returns far exceeds 0.1
        let closes: Vec<f64> = (0..100)
            .map(|i| if i % 2 == 0 { 100.0 } else { 150.0 })
            .collect();
        let series = series_from_closes(&closes);

        let result = ProjectionEngine::new().project(&series, 30).unwrap();

        assert!(result.confidence >= 0.0);
        assert!(result.confidence <= 100.0);
        assert!((result.confidence - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_idempotent() {
        let closes: Vec<f64> = (0..150)
            .map(|i| 100.0 + (i as f64 * 0.2).sin() * 10.0 + i as f64 * 0.1)
            .collect();
        let series = series_from_closes(&closes);
        let engine = ProjectionEngine::new();

        let a = engine.project(&series, 30).unwrap();
        let b = engine.project(&series, 30).unwrap();

        assert_eq!(a, b);
    }
}
