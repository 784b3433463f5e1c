//! CSV bar history source.

use chrono::{NaiveDate, NaiveDateTime};
use csv::ReaderBuilder;
use insight_core::error::DataError;
use insight_core::types::{Bar, BarSeries};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// CSV record format.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(alias = "Date", alias = "date", alias = "timestamp", alias = "Timestamp")]
    date: String,
    #[serde(alias = "Open", alias = "open")]
    open: f64,
    #[serde(alias = "High", alias = "high")]
    high: f64,
    #[serde(alias = "Low", alias = "low")]
    low: f64,
    #[serde(alias = "Close", alias = "close", alias = "Adj Close")]
    close: f64,
    #[serde(alias = "Volume", alias = "volume", default)]
    volume: f64,
}

/// CSV data source for historical bars.
///
/// Bars are sorted ascending by timestamp after loading. Duplicate
/// timestamps are rejected because the engines assume strictly
/// monotonic series as a precondition.
pub struct CsvBarSource {
    path: String,
}

impl CsvBarSource {
    /// Create a new CSV bar source.
    pub fn new(path: &str) -> Result<Self, DataError> {
        if !Path::new(path).exists() {
            return Err(DataError::NoDataAvailable(path.to_string()));
        }
        Ok(Self {
            path: path.to_string(),
        })
    }

    /// Load the full series for a symbol.
    pub fn load(&self, symbol: &str) -> Result<BarSeries, DataError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| DataError::ParseError(e.to_string()))?;

        let mut bars = Vec::new();

        for result in reader.deserialize() {
            let record: CsvRecord = result.map_err(|e| DataError::ParseError(e.to_string()))?;
            let timestamp = parse_timestamp(&record.date)?;

            bars.push(Bar::new(
                timestamp,
                record.open,
                record.high,
                record.low,
                record.close,
                record.volume,
            ));
        }

        bars.sort_by_key(|b| b.timestamp);

        for pair in bars.windows(2) {
            if pair[0].timestamp == pair[1].timestamp {
                return Err(DataError::DuplicateTimestamp(pair[0].timestamp));
            }
        }

        debug!(symbol, bars = bars.len(), path = %self.path, "loaded bar history");

        let mut series = BarSeries::new(symbol.to_string());
        series.extend(bars);
        Ok(series)
    }
}

/// Parse various timestamp formats into unix milliseconds.
fn parse_timestamp(date_str: &str) -> Result<i64, DataError> {
    let formats = [
        "%Y-%m-%d",
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d",
        "%m/%d/%Y",
        "%d-%m-%Y",
    ];

    for format in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, format) {
            return Ok(dt.and_utc().timestamp_millis());
        }
        if let Ok(d) = NaiveDate::parse_from_str(date_str, format) {
            let dt = d.and_hms_opt(0, 0, 0).unwrap();
            return Ok(dt.and_utc().timestamp_millis());
        }
    }

    // Try parsing as a unix timestamp; assume milliseconds if > 10 digits
    if let Ok(ts) = date_str.parse::<i64>() {
        if ts > 10_000_000_000 {
            return Ok(ts);
        } else {
            return Ok(ts * 1000);
        }
    }

    Err(DataError::ParseError(format!(
        "Could not parse date: {}",
        date_str
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_parse_timestamp_formats() {
        assert!(parse_timestamp("2024-01-15").is_ok());
        assert!(parse_timestamp("2024-01-15 10:30:00").is_ok());
        assert!(parse_timestamp("1705312800000").is_ok()); // unix ms
        assert!(parse_timestamp("1705312800").is_ok()); // unix sec
        assert!(parse_timestamp("yesterday").is_err());
    }

    #[test]
    fn test_load_sorts_and_parses() {
        let file = csv_file(
            "Date,Open,High,Low,Close,Volume\n\
             2024-01-03,102,104,101,103,1200\n\
             2024-01-01,100,102,99,101,1000\n\
             2024-01-02,101,103,100,102,1100\n",
        );

        let source = CsvBarSource::new(file.path().to_str().unwrap()).unwrap();
        let series = source.load("TEST").unwrap();

        assert_eq!(series.len(), 3);
        assert_eq!(series.closes(), vec![101.0, 102.0, 103.0]);
    }

    #[test]
    fn test_duplicate_timestamp_rejected() {
        let file = csv_file(
            "Date,Open,High,Low,Close,Volume\n\
             2024-01-01,100,102,99,101,1000\n\
             2024-01-01,101,103,100,102,1100\n",
        );

        let source = CsvBarSource::new(file.path().to_str().unwrap()).unwrap();
        assert!(matches!(
            source.load("TEST"),
            Err(DataError::DuplicateTimestamp(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            CsvBarSource::new("/nonexistent/bars.csv"),
            Err(DataError::NoDataAvailable(_))
        ));
    }
}
