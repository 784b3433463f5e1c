//! Composite health scoring and price projection engines.
//!
//! Both engines are pure, synchronous, and stateless: each invocation
//! reads only its arguments and returns a fresh value, so they are safe
//! to call concurrently on independent inputs. Insufficient history is a
//! normal `None` outcome, never an error.

pub mod projection;
pub mod report;
pub mod scoring;

pub use projection::{ProjectionEngine, ProjectionResult, Trend};
pub use report::AnalysisReport;
pub use scoring::{Polarity, Rating, ScoreEngine, ScoreResult, ScoreSignal};
