//! Volatility indicators.

use insight_core::traits::MultiOutputIndicator;
use insight_core::types::Bar;
use serde::{Deserialize, Serialize};

/// Bollinger band output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerOutput {
    /// Upper band
    pub upper: f64,
    /// Middle band (SMA)
    pub middle: f64,
    /// Lower band
    pub lower: f64,
}

/// Bollinger bands.
///
/// A middle band (SMA of close) with upper and lower bands offset by a
/// multiple of the population standard deviation over the same window.
/// Output is `None` until the window is filled.
#[derive(Debug, Clone)]
pub struct BollingerBands {
    period: usize,
    std_dev_multiplier: f64,
}

impl BollingerBands {
    /// Create new Bollinger bands with default parameters (20, 2.0).
    pub fn new() -> Self {
        Self::with_params(20, 2.0)
    }

    /// Create Bollinger bands with custom parameters.
    pub fn with_params(period: usize, std_dev_multiplier: f64) -> Self {
        assert!(period > 1, "Period must be greater than 1");
        assert!(
            std_dev_multiplier > 0.0,
            "Std dev multiplier must be positive"
        );
        Self {
            period,
            std_dev_multiplier,
        }
    }
}

impl Default for BollingerBands {
    fn default() -> Self {
        Self::new()
    }
}

impl MultiOutputIndicator for BollingerBands {
    type Outputs = BollingerOutput;

    fn calculate(&self, data: &[f64]) -> Vec<Option<BollingerOutput>> {
        let mut result = vec![None; data.len()];
        if data.len() < self.period {
            return result;
        }

        let period_f64 = self.period as f64;

        // Sliding sum and sum of squares, O(1) per bar
        let mut sum: f64 = data[..self.period].iter().sum();
        let mut sum_sq: f64 = data[..self.period].iter().map(|x| x * x).sum();

        for i in (self.period - 1)..data.len() {
            if i >= self.period {
                let old = data[i - self.period];
                sum = sum - old + data[i];
                sum_sq = sum_sq - old * old + data[i] * data[i];
            }

            let mean = sum / period_f64;
            // Guard against tiny negative variance from float cancellation
            let variance = (sum_sq / period_f64 - mean * mean).max(0.0);
            let offset = self.std_dev_multiplier * variance.sqrt();

            result[i] = Some(BollingerOutput {
                upper: mean + offset,
                middle: mean,
                lower: mean - offset,
            });
        }

        result
    }

    fn window(&self) -> usize {
        self.period
    }

    fn name(&self) -> &str {
        "Bollinger Bands"
    }
}

/// Average True Range (ATR).
///
/// Measures volatility as the trailing simple average of the true range,
/// which accounts for gaps against the previous close. The first bar's
/// true range is its high-low span. Output is `None` until `period` true
/// ranges exist.
#[derive(Debug, Clone)]
pub struct Atr {
    period: usize,
}

impl Atr {
    /// Create a new ATR indicator.
    ///
    /// Common period is 14.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        Self { period }
    }

    /// Calculate ATR over a bar slice, aligned with input.
    pub fn calculate_bars(&self, bars: &[Bar]) -> Vec<Option<f64>> {
        let mut result = vec![None; bars.len()];
        if bars.len() < self.period {
            return result;
        }

        let period_f64 = self.period as f64;

        // True range per bar; sliding sum over the trailing window
        let mut tr = Vec::with_capacity(bars.len());
        for (i, bar) in bars.iter().enumerate() {
            let prev_close = if i > 0 { Some(bars[i - 1].close) } else { None };
            tr.push(bar.true_range(prev_close));
        }

        let mut sum: f64 = tr[..self.period].iter().sum();
        result[self.period - 1] = Some(sum / period_f64);

        for i in self.period..tr.len() {
            sum = sum - tr[i - self.period] + tr[i];
            result[i] = Some(sum / period_f64);
        }

        result
    }

    /// Number of bars needed before the first defined output.
    pub fn window(&self) -> usize {
        self.period
    }
}
