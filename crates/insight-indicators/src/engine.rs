//! Indicator engine: computes every indicator column for a bar series.

use insight_core::traits::{Indicator, MultiOutputIndicator};
use insight_core::types::BarSeries;
use serde::{Deserialize, Serialize};

use crate::momentum::{Macd, Rsi};
use crate::moving_average::Sma;
use crate::volatility::{Atr, BollingerBands};
use crate::volume::VolumeRatio;

/// Indicator windows and spans.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorConfig {
    /// RSI period
    pub rsi_period: usize,
    /// MACD fast EMA span
    pub macd_fast: usize,
    /// MACD slow EMA span
    pub macd_slow: usize,
    /// MACD signal EMA span
    pub macd_signal: usize,
    /// Bollinger band window
    pub bollinger_period: usize,
    /// Bollinger band width in standard deviations
    pub bollinger_std_dev: f64,
    /// Short/medium/long simple moving average windows
    pub sma_periods: [usize; 3],
    /// ATR period
    pub atr_period: usize,
    /// Volume averaging window
    pub volume_period: usize,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            bollinger_period: 20,
            bollinger_std_dev: 2.0,
            sma_periods: [20, 50, 200],
            atr_period: 14,
            volume_period: 20,
        }
    }
}

/// Indicator columns aligned index-for-index with the input series.
///
/// `None` in any column means the window at that bar was not yet filled
/// (or the value is degenerate, e.g. a volume ratio over a zero average).
/// Consumers must treat `None` as "insufficient history", never as zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndicatorSet {
    /// Bar timestamps (unix ms), copied from the input series
    pub timestamps: Vec<i64>,
    /// Close prices, copied from the input series
    pub close: Vec<f64>,
    /// RSI oscillator, 0-100
    pub rsi: Vec<Option<f64>>,
    /// MACD line (fast EMA - slow EMA)
    pub macd: Vec<Option<f64>>,
    /// MACD signal line
    pub macd_signal: Vec<Option<f64>>,
    /// MACD histogram (line - signal)
    pub macd_histogram: Vec<Option<f64>>,
    /// Upper Bollinger band
    pub bb_upper: Vec<Option<f64>>,
    /// Middle Bollinger band (SMA)
    pub bb_middle: Vec<Option<f64>>,
    /// Lower Bollinger band
    pub bb_lower: Vec<Option<f64>>,
    /// 20-bar simple moving average
    pub sma20: Vec<Option<f64>>,
    /// 50-bar simple moving average
    pub sma50: Vec<Option<f64>>,
    /// 200-bar simple moving average
    pub sma200: Vec<Option<f64>>,
    /// Average true range
    pub atr: Vec<Option<f64>>,
    /// Trailing average volume
    pub volume_sma: Vec<Option<f64>>,
    /// Current volume / trailing average volume
    pub volume_ratio: Vec<Option<f64>>,
}

impl IndicatorSet {
    /// Number of bars covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.close.len()
    }

    /// Check if the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }

    /// Snapshot of every column at one bar index.
    pub fn snapshot(&self, index: usize) -> Option<IndicatorSnapshot> {
        if index >= self.len() {
            return None;
        }
        Some(IndicatorSnapshot {
            timestamp: self.timestamps[index],
            close: self.close[index],
            rsi: self.rsi[index],
            macd: self.macd[index],
            macd_signal: self.macd_signal[index],
            macd_histogram: self.macd_histogram[index],
            bb_upper: self.bb_upper[index],
            bb_middle: self.bb_middle[index],
            bb_lower: self.bb_lower[index],
            sma20: self.sma20[index],
            sma50: self.sma50[index],
            sma200: self.sma200[index],
            atr: self.atr[index],
            volume_sma: self.volume_sma[index],
            volume_ratio: self.volume_ratio[index],
        })
    }

    /// Snapshot at the latest bar.
    pub fn latest(&self) -> Option<IndicatorSnapshot> {
        self.len().checked_sub(1).and_then(|i| self.snapshot(i))
    }
}

/// All indicator values at one bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub timestamp: i64,
    pub close: f64,
    pub rsi: Option<f64>,
    pub macd: Option<f64>,
    pub macd_signal: Option<f64>,
    pub macd_histogram: Option<f64>,
    pub bb_upper: Option<f64>,
    pub bb_middle: Option<f64>,
    pub bb_lower: Option<f64>,
    pub sma20: Option<f64>,
    pub sma50: Option<f64>,
    pub sma200: Option<f64>,
    pub atr: Option<f64>,
    pub volume_sma: Option<f64>,
    pub volume_ratio: Option<f64>,
}

/// Stateless engine computing the full indicator table for a series.
///
/// Every output at index `i` depends only on bars at indices `<= i`.
/// Never fails: short or degenerate series simply carry more `None`s.
#[derive(Debug, Clone)]
pub struct IndicatorEngine {
    config: IndicatorConfig,
}

impl IndicatorEngine {
    /// Create an engine with default windows.
    pub fn new() -> Self {
        Self::with_config(IndicatorConfig::default())
    }

    /// Create an engine with custom windows.
    pub fn with_config(config: IndicatorConfig) -> Self {
        Self { config }
    }

    /// Compute the full indicator table for a series.
    pub fn compute(&self, series: &BarSeries) -> IndicatorSet {
        let closes = series.closes();
        let volumes = series.volumes();
        let bars: Vec<_> = series.iter().copied().collect();
        let cfg = &self.config;

        let rsi = Rsi::new(cfg.rsi_period).calculate(&closes);

        let macd_outputs =
            Macd::with_spans(cfg.macd_fast, cfg.macd_slow, cfg.macd_signal).calculate(&closes);
        let macd = macd_outputs.iter().map(|o| o.map(|m| m.macd)).collect();
        let macd_signal = macd_outputs.iter().map(|o| o.map(|m| m.signal)).collect();
        let macd_histogram = macd_outputs
            .iter()
            .map(|o| o.map(|m| m.histogram))
            .collect();

        let bb_outputs = BollingerBands::with_params(cfg.bollinger_period, cfg.bollinger_std_dev)
            .calculate(&closes);
        let bb_upper = bb_outputs.iter().map(|o| o.map(|b| b.upper)).collect();
        let bb_middle = bb_outputs.iter().map(|o| o.map(|b| b.middle)).collect();
        let bb_lower = bb_outputs.iter().map(|o| o.map(|b| b.lower)).collect();

        let [short, mid, long] = cfg.sma_periods;
        let sma20 = Sma::new(short).calculate(&closes);
        let sma50 = Sma::new(mid).calculate(&closes);
        let sma200 = Sma::new(long).calculate(&closes);

        let atr = Atr::new(cfg.atr_period).calculate_bars(&bars);

        let volume_outputs = VolumeRatio::new(cfg.volume_period).calculate(&volumes);
        let volume_sma = volume_outputs.iter().map(|o| o.map(|v| v.average)).collect();
        let volume_ratio = volume_outputs
            .iter()
            .map(|o| o.and_then(|v| v.ratio))
            .collect();

        IndicatorSet {
            timestamps: series.iter().map(|b| b.timestamp).collect(),
            close: closes,
            rsi,
            macd,
            macd_signal,
            macd_histogram,
            bb_upper,
            bb_middle,
            bb_lower,
            sma20,
            sma50,
            sma200,
            atr,
            volume_sma,
            volume_ratio,
        }
    }
}

impl Default for IndicatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insight_core::types::Bar;

    fn constant_series(len: usize, price: f64, volume: f64) -> BarSeries {
        (0..len)
            .map(|i| Bar::new(i as i64 * 86_400_000, price, price, price, price, volume))
            .collect()
    }

    fn trending_series(len: usize) -> BarSeries {
        (0..len)
            .map(|i| {
                let close = 100.0 + i as f64 * 0.5;
                Bar::new(
                    i as i64 * 86_400_000,
                    close - 0.2,
                    close + 0.5,
                    close - 0.5,
                    close,
                    1000.0 + i as f64,
                )
            })
            .collect()
    }

    #[test]
    fn test_columns_aligned_with_input() {
        let set = IndicatorEngine::new().compute(&trending_series(250));

        assert_eq!(set.len(), 250);
        assert_eq!(set.rsi.len(), 250);
        assert_eq!(set.macd.len(), 250);
        assert_eq!(set.sma200.len(), 250);
        assert_eq!(set.volume_ratio.len(), 250);
    }

    #[test]
    fn test_leading_bars_undefined() {
        let set = IndicatorEngine::new().compute(&trending_series(250));

        assert!(set.rsi[..14].iter().all(Option::is_none));
        assert!(set.rsi[14].is_some());
        assert!(set.sma20[..19].iter().all(Option::is_none));
        assert!(set.sma50[..49].iter().all(Option::is_none));
        assert!(set.sma200[..199].iter().all(Option::is_none));
        assert!(set.sma200[199].is_some());
        assert!(set.atr[..13].iter().all(Option::is_none));
        assert!(set.bb_middle[..19].iter().all(Option::is_none));
        assert!(set.volume_ratio[..19].iter().all(Option::is_none));
    }

    #[test]
    fn test_short_series_does_not_fail() {
        let set = IndicatorEngine::new().compute(&trending_series(5));

        assert_eq!(set.len(), 5);
        assert!(set.rsi.iter().all(Option::is_none));
        assert!(set.sma200.iter().all(Option::is_none));
        // MACD is seeded from the first close, so it is defined
        assert!(set.macd.iter().all(Option::is_some));
    }

    #[test]
    fn test_empty_series() {
        let set = IndicatorEngine::new().compute(&BarSeries::new("EMPTY".into()));
        assert!(set.is_empty());
        assert!(set.latest().is_none());
    }

    #[test]
    fn test_constant_series_end_to_end() {
        // 200 bars of $100 close, volume 1000
        let set = IndicatorEngine::new().compute(&constant_series(200, 100.0, 1000.0));
        let last = set.latest().unwrap();

        // Flat window pins the oscillator to neutral 50
        assert!((last.rsi.unwrap() - 50.0).abs() < 1e-10);
        assert!((last.sma20.unwrap() - 100.0).abs() < 1e-10);
        assert!((last.sma50.unwrap() - 100.0).abs() < 1e-10);
        assert!((last.sma200.unwrap() - 100.0).abs() < 1e-10);
        assert!(last.atr.unwrap().abs() < 1e-12);
        assert!((last.volume_ratio.unwrap() - 1.0).abs() < 1e-10);
        assert!(last.macd.unwrap().abs() < 1e-12);
    }

    #[test]
    fn test_idempotent() {
        let series = trending_series(120);
        let engine = IndicatorEngine::new();

        let a = engine.compute(&series);
        let b = engine.compute(&series);

        assert_eq!(a.rsi, b.rsi);
        assert_eq!(a.macd_histogram, b.macd_histogram);
        assert_eq!(a.bb_upper, b.bb_upper);
        assert_eq!(a.atr, b.atr);
    }
}
