//! Core traits for the analysis toolkit.

mod indicator;

pub use indicator::{Indicator, MultiOutputIndicator};
