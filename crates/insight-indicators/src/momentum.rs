//! Momentum indicators.

use insight_core::traits::{Indicator, MultiOutputIndicator};
use serde::{Deserialize, Serialize};

use crate::moving_average::Ema;

/// Relative Strength Index (RSI).
///
/// Measures the speed and magnitude of recent price changes to evaluate
/// overbought or oversold conditions. This implementation averages gains
/// and losses over a plain trailing window (Cutler's variant), so the
/// value at index `i` depends only on the `period` close-to-close changes
/// ending at `i`. Output is `None` until `period` prior bars exist.
///
/// Degenerate windows resolve to pinned limiting values instead of
/// dividing by zero: no losses in the window yields 100, and a window
/// with neither gains nor losses (flat prices) yields a neutral 50.
#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
}

impl Rsi {
    /// Create a new RSI indicator.
    ///
    /// Common periods are 14 (default) or 9.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        Self { period }
    }
}

impl Indicator for Rsi {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> Vec<Option<f64>> {
        let mut result = vec![None; data.len()];
        if data.len() <= self.period {
            return result;
        }

        let period_f64 = self.period as f64;

        // Sliding sums of gains and losses over the trailing window
        let mut gain_sum = 0.0;
        let mut loss_sum = 0.0;

        for i in 1..data.len() {
            let change = data[i] - data[i - 1];
            if change > 0.0 {
                gain_sum += change;
            } else {
                loss_sum += -change;
            }

            // Drop the change that left the window
            if i > self.period {
                let old = data[i - self.period] - data[i - self.period - 1];
                if old > 0.0 {
                    gain_sum -= old;
                } else {
                    loss_sum -= -old;
                }
            }

            if i >= self.period {
                let avg_gain = gain_sum / period_f64;
                let avg_loss = loss_sum / period_f64;

                result[i] = Some(if avg_loss == 0.0 && avg_gain == 0.0 {
                    50.0
                } else if avg_loss == 0.0 {
                    100.0
                } else {
                    100.0 - (100.0 / (1.0 + avg_gain / avg_loss))
                });
            }
        }

        result
    }

    fn window(&self) -> usize {
        self.period + 1 // period changes require period+1 closes
    }

    fn name(&self) -> &str {
        "RSI"
    }
}

/// MACD (Moving Average Convergence Divergence) output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdOutput {
    /// MACD line (fast EMA - slow EMA)
    pub macd: f64,
    /// Signal line (EMA of MACD)
    pub signal: f64,
    /// Histogram (MACD - Signal)
    pub histogram: f64,
}

/// MACD indicator.
///
/// Uses two EMAs to identify trend direction and momentum. Both EMAs are
/// seeded with the first close, so every bar carries a defined output;
/// early values are dominated by the seed and settle as the spans fill.
#[derive(Debug, Clone)]
pub struct Macd {
    fast: Ema,
    slow: Ema,
    signal: Ema,
}

impl Macd {
    /// Create a new MACD with default spans (12, 26, 9).
    pub fn new() -> Self {
        Self::with_spans(12, 26, 9)
    }

    /// Create a MACD with custom spans.
    pub fn with_spans(fast: usize, slow: usize, signal: usize) -> Self {
        assert!(fast > 0 && slow > 0 && signal > 0);
        assert!(fast < slow, "Fast span must be less than slow span");
        Self {
            fast: Ema::new(fast),
            slow: Ema::new(slow),
            signal: Ema::new(signal),
        }
    }
}

impl Default for Macd {
    fn default() -> Self {
        Self::new()
    }
}

impl MultiOutputIndicator for Macd {
    type Outputs = MacdOutput;

    fn calculate(&self, data: &[f64]) -> Vec<Option<MacdOutput>> {
        let fast_ema = self.fast.calculate_raw(data);
        let slow_ema = self.slow.calculate_raw(data);

        let macd_line: Vec<f64> = fast_ema
            .iter()
            .zip(slow_ema.iter())
            .map(|(f, s)| f - s)
            .collect();

        let signal_line = self.signal.calculate_raw(&macd_line);

        macd_line
            .iter()
            .zip(signal_line.iter())
            .map(|(&macd, &signal)| {
                Some(MacdOutput {
                    macd,
                    signal,
                    histogram: macd - signal,
                })
            })
            .collect()
    }

    fn window(&self) -> usize {
        1
    }

    fn name(&self) -> &str {
        "MACD"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rsi_undefined_for_short_series() {
        let rsi = Rsi::new(14);
        // 14 bars: only 13 changes available, every output undefined
        let data: Vec<f64> = (0..14).map(|i| 100.0 + i as f64).collect();
        let result = rsi.calculate(&data);

        assert_eq!(result.len(), 14);
        assert!(result.iter().all(Option::is_none));
    }

    #[test]
    fn test_rsi_bounds() {
        let rsi = Rsi::new(14);
        let data: Vec<f64> = (0..60)
            .map(|i| 100.0 + (i as f64 * 0.5).sin() * 5.0)
            .collect();

        let result = rsi.calculate(&data);
        assert!(result[..14].iter().all(Option::is_none));
        for value in result[14..].iter() {
            let v = value.unwrap();
            assert!((0.0..=100.0).contains(&v));
        }
    }

    #[test]
    fn test_rsi_all_gains() {
        let rsi = Rsi::new(5);
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        let result = rsi.calculate(&data);

        // No losing day in the trailing window: exactly 100
        assert!((result[5].unwrap() - 100.0).abs() < 1e-10);
        assert!((result[6].unwrap() - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_rsi_all_losses() {
        let rsi = Rsi::new(5);
        let data = vec![7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0];
        let result = rsi.calculate(&data);

        assert!(result[5].unwrap().abs() < 1e-10);
    }

    #[test]
    fn test_rsi_flat_window_is_neutral() {
        let rsi = Rsi::new(5);
        let data = vec![100.0; 10];
        let result = rsi.calculate(&data);

        // Zero gains and zero losses pins to 50, not NaN
        assert!((result[5].unwrap() - 50.0).abs() < 1e-10);
        assert!((result[9].unwrap() - 50.0).abs() < 1e-10);
    }

    #[test]
    fn test_macd_aligned_and_defined() {
        let macd = Macd::new();
        let data: Vec<f64> = (0..50).map(|i| 100.0 + i as f64).collect();
        let result = macd.calculate(&data);

        assert_eq!(result.len(), data.len());
        assert!(result.iter().all(Option::is_some));
        // In an uptrend, the MACD line ends positive
        assert!(result.last().unwrap().unwrap().macd > 0.0);
    }

    #[test]
    fn test_macd_histogram_is_exact_difference() {
        let macd = Macd::new();
        let data: Vec<f64> = (0..80)
            .map(|i| 100.0 + (i as f64 * 0.3).sin() * 8.0)
            .collect();

        for out in macd.calculate(&data).into_iter().flatten() {
            assert!((out.histogram - (out.macd - out.signal)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_macd_flat_series_is_zero() {
        let macd = Macd::new();
        let data = vec![100.0; 40];
        let result = macd.calculate(&data);

        let last = result.last().unwrap().unwrap();
        assert!(last.macd.abs() < 1e-12);
        assert!(last.signal.abs() < 1e-12);
        assert!(last.histogram.abs() < 1e-12);
    }
}
