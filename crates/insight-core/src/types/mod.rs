//! Core data types for the analysis toolkit.

mod bar;
mod fundamentals;

pub use bar::{Bar, BarSeries};
pub use fundamentals::FundamentalSnapshot;
