//! Error types for the attended check-in action.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheckInError {
    #[error("Check-in state unavailable: {0}")]
    StateUnavailable(String),
    #[error("Attendance store error: {0}")]
    AttendanceStore(String),
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<config::ConfigError> for CheckInError {
    fn from(error: config::ConfigError) -> Self {
        CheckInError::Configuration(error.to_string())
    }
}

impl From<serde_json::Error> for CheckInError {
    fn from(error: serde_json::Error) -> Self {
        CheckInError::Serialization(format!("JSON serialization error: {error}"))
    }
}

pub type Result<T> = std::result::Result<T, CheckInError>;
