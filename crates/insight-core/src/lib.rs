//! Core types and traits for the stock analysis toolkit.
//!
//! This crate provides the foundational building blocks including:
//! - Market data types (Bar, BarSeries)
//! - Fundamental metrics (FundamentalSnapshot)
//! - Indicator trait seams
//! - Error types shared across the workspace

pub mod error;
pub mod traits;
pub mod types;

pub use error::{DataError, InsightError, InsightResult};
pub use traits::*;
pub use types::*;
