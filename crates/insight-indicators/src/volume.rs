//! Volume indicators.

use insight_core::traits::{Indicator, MultiOutputIndicator};
use serde::{Deserialize, Serialize};

use crate::moving_average::Sma;

/// Volume ratio output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeRatioOutput {
    /// Trailing simple average of volume
    pub average: f64,
    /// Current volume relative to the average; `None` if the average is zero
    pub ratio: Option<f64>,
}

/// Volume relative to its trailing average.
///
/// A ratio above 1 means the bar traded heavier than its recent average.
/// The outer `Option` is `None` until the averaging window is filled; the
/// inner ratio is `None` when the average itself is zero (a dead market,
/// where the ratio has no meaningful limit).
#[derive(Debug, Clone)]
pub struct VolumeRatio {
    sma: Sma,
    period: usize,
}

impl VolumeRatio {
    /// Create a new volume ratio with the specified averaging period.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        Self {
            sma: Sma::new(period),
            period,
        }
    }
}

impl MultiOutputIndicator for VolumeRatio {
    type Outputs = VolumeRatioOutput;

    fn calculate(&self, volumes: &[f64]) -> Vec<Option<VolumeRatioOutput>> {
        let averages = self.sma.calculate(volumes);

        averages
            .into_iter()
            .enumerate()
            .map(|(i, avg)| {
                avg.map(|average| VolumeRatioOutput {
                    average,
                    ratio: if average > 0.0 {
                        Some(volumes[i] / average)
                    } else {
                        None
                    },
                })
            })
            .collect()
    }

    fn window(&self) -> usize {
        self.period
    }

    fn name(&self) -> &str {
        "Volume Ratio"
    }
}
