//! Indicator trait definitions.
//!
//! All indicators in this workspace produce output aligned index-for-index
//! with their input: the result has exactly the same length as the input,
//! and positions where the indicator's window is not yet filled hold `None`.
//! Consumers must treat `None` as "insufficient history", never as zero.

/// Trait for technical indicators with a single output value per bar.
pub trait Indicator: Send + Sync {
    /// The output type of the indicator.
    type Output;

    /// Calculate indicator values for the given data.
    ///
    /// Returns one entry per input element. Leading entries are `None`
    /// until the indicator's window is filled; degenerate inputs that
    /// cannot produce a meaningful value are also `None`.
    fn calculate(&self, data: &[f64]) -> Vec<Option<Self::Output>>;

    /// Number of data points needed before the first defined output.
    fn window(&self) -> usize;

    /// Get the name of the indicator.
    fn name(&self) -> &str;
}

/// Multi-output indicator (e.g., Bollinger bands, MACD).
///
/// Some indicators produce multiple related values per bar.
pub trait MultiOutputIndicator: Send + Sync {
    /// The output type containing multiple values.
    type Outputs;

    /// Calculate indicator values for the given data, aligned with input.
    fn calculate(&self, data: &[f64]) -> Vec<Option<Self::Outputs>>;

    /// Number of data points needed before the first defined output.
    fn window(&self) -> usize;

    /// Get the name of the indicator.
    fn name(&self) -> &str;
}
