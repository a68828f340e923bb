//! Data models for test reports
//!
//! Per-test records, failure kinds, and run summaries.

mod failure;
pub mod names;
mod summary;
mod test_result;

pub use failure::FailureKind;
pub use summary::Summary;
pub use test_result::{
    Failure, Outcome, TestResult, SLOW_THRESHOLD_SECS, SUCCESS_GLYPH, VERY_SLOW_THRESHOLD_SECS,
};
