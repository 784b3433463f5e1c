//! Technical indicators over OHLCV bar series.
//!
//! This crate provides the indicator layer of the toolkit:
//! - Moving averages (SMA, EMA)
//! - Momentum indicators (RSI, MACD)
//! - Volatility indicators (Bollinger bands, ATR)
//! - Volume ratio
//!
//! All indicators produce output aligned index-for-index with their
//! input; leading bars where a window is not yet filled are `None`.
//! The [`IndicatorEngine`] assembles every column into an [`IndicatorSet`]
//! in one pass over a series.

pub mod engine;
pub mod momentum;
pub mod moving_average;
pub mod volatility;
pub mod volume;

pub use engine::{IndicatorConfig, IndicatorEngine, IndicatorSet, IndicatorSnapshot};
pub use momentum::{Macd, MacdOutput, Rsi};
pub use moving_average::{Ema, Sma};
pub use volatility::{Atr, BollingerBands, BollingerOutput};
pub use volume::{VolumeRatio, VolumeRatioOutput};
