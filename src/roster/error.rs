//! Roster loading error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// Roster loading error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Roster error: {} at {}:{}", message, file, line)]
pub struct RosterError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl RosterError {
    /// Creates a new roster error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<reqwest::Error> for RosterError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        Self::new(format!("Request error: {}", err))
    }
}

impl From<std::io::Error> for RosterError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

impl From<serde_json::Error> for RosterError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("Decode error: {}", err))
    }
}
