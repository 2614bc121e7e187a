//! Error types for the simulation engine.

use thiserror::Error;

/// Result type alias using [`SimError`].
pub type Result<T> = std::result::Result<T, SimError>;

/// Errors raised at the call boundary before any simulation work begins.
///
/// Randomness-dependent outcomes (a miss, an empty loot roll) are never
/// errors; they come back as ordinary results.
#[derive(Debug, Error)]
pub enum SimError {
    /// An out-of-range scalar input (story length, trial count, weight...).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A settings combination that would make progression unsound.
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    /// Failed to read a scenario or write a report.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Scenario or report JSON could not be parsed or produced.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SimError {
    /// True for the validation errors a host should show inline next to
    /// the offending control.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidArgument(_) | Self::InvalidSettings(_))
    }
}
