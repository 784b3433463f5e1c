//! Moving average indicators.

use insight_core::traits::Indicator;

/// Simple Moving Average (SMA).
///
/// Calculates the arithmetic mean of the last N values. Output is aligned
/// with the input; the first `period - 1` entries are `None`.
#[derive(Debug, Clone)]
pub struct Sma {
    period: usize,
}

impl Sma {
    /// Create a new SMA with the specified period.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        Self { period }
    }
}

impl Indicator for Sma {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> Vec<Option<f64>> {
        let mut result = vec![None; data.len()];
        if data.len() < self.period {
            return result;
        }

        let period_f64 = self.period as f64;

        // Sliding window sum, O(1) per bar
        let mut sum: f64 = data[..self.period].iter().sum();
        result[self.period - 1] = Some(sum / period_f64);

        for i in self.period..data.len() {
            sum = sum - data[i - self.period] + data[i];
            result[i] = Some(sum / period_f64);
        }

        result
    }

    fn window(&self) -> usize {
        self.period
    }

    fn name(&self) -> &str {
        "SMA"
    }
}

/// Exponential Moving Average (EMA).
///
/// Gives more weight to recent prices using an exponential decay.
/// Seeded with the first input value, so output is defined from the first
/// bar onward: `ema[i] = ema[i-1] + (2 / (span + 1)) * (x[i] - ema[i-1])`.
#[derive(Debug, Clone)]
pub struct Ema {
    span: usize,
    multiplier: f64,
}

impl Ema {
    /// Create a new EMA with the specified smoothing span.
    pub fn new(span: usize) -> Self {
        assert!(span > 0, "Span must be greater than 0");
        let multiplier = 2.0 / (span as f64 + 1.0);
        Self { span, multiplier }
    }

    /// Get the smoothing span.
    pub fn span(&self) -> usize {
        self.span
    }

    /// Calculate the raw EMA series, one value per input element.
    ///
    /// Empty input yields an empty result.
    pub fn calculate_raw(&self, data: &[f64]) -> Vec<f64> {
        let mut result = Vec::with_capacity(data.len());
        let Some(&first) = data.first() else {
            return result;
        };

        let mut ema = first;
        result.push(ema);

        for &value in &data[1..] {
            ema += self.multiplier * (value - ema);
            result.push(ema);
        }

        result
    }
}

impl Indicator for Ema {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> Vec<Option<f64>> {
        self.calculate_raw(data).into_iter().map(Some).collect()
    }

    fn window(&self) -> usize {
        1 // seeded with the first value, defined from the first bar
    }

    fn name(&self) -> &str {
        "EMA"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sma() {
        let sma = Sma::new(3);
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = sma.calculate(&data);

        assert_eq!(result.len(), 5);
        assert!(result[0].is_none());
        assert!(result[1].is_none());
        assert!((result[2].unwrap() - 2.0).abs() < 1e-10); // (1+2+3)/3
        assert!((result[3].unwrap() - 3.0).abs() < 1e-10); // (2+3+4)/3
        assert!((result[4].unwrap() - 4.0).abs() < 1e-10); // (3+4+5)/3
    }

    #[test]
    fn test_sma_insufficient_data() {
        let sma = Sma::new(5);
        let data = vec![1.0, 2.0, 3.0];
        let result = sma.calculate(&data);

        assert_eq!(result.len(), 3);
        assert!(result.iter().all(Option::is_none));
    }

    #[test]
    fn test_sma_window_mean_property() {
        // SMA at index i >= w-1 equals the mean of the w closes ending at i
        let sma = Sma::new(4);
        let data: Vec<f64> = (0..20).map(|i| 100.0 + (i as f64 * 0.7).sin()).collect();
        let result = sma.calculate(&data);

        for i in 3..data.len() {
            let mean: f64 = data[i - 3..=i].iter().sum::<f64>() / 4.0;
            assert!((result[i].unwrap() - mean).abs() < 1e-10);
        }
    }

    #[test]
    fn test_ema_seeded_with_first_value() {
        let ema = Ema::new(3);
        let data = vec![2.0, 4.0, 6.0];
        let result = ema.calculate_raw(&data);

        // multiplier = 2/(3+1) = 0.5
        assert!((result[0] - 2.0).abs() < 1e-10);
        assert!((result[1] - 3.0).abs() < 1e-10); // 2 + 0.5*(4-2)
        assert!((result[2] - 4.5).abs() < 1e-10); // 3 + 0.5*(6-3)
    }

    #[test]
    fn test_ema_empty_input() {
        let ema = Ema::new(12);
        assert!(ema.calculate_raw(&[]).is_empty());
    }
}
