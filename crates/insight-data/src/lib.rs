//! Local data sources for the analysis toolkit.
//!
//! These are in-process stand-ins for the external market-data provider:
//! CSV files for bar history and a JSON file for fundamentals. The core
//! engines are agnostic to how a series was obtained.

mod csv_source;
mod fundamentals_source;

pub use csv_source::CsvBarSource;
pub use fundamentals_source::FundamentalsSource;
