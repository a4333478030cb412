//! Error types for the scoring core.

use thiserror::Error;

/// Errors raised by the score aggregator.
///
/// Only caller mistakes are errors. A city that is not in the collection
/// is reported as `None` by the lookup functions instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// The requested score key is neither a known category nor `overall_score`.
    #[error("unknown score category '{0}'")]
    InvalidCategory(String),
}
