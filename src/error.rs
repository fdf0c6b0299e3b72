//! Error handling module for gradeplan
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Input that is merely incomplete or out of range is never an error here; it is
//! reported through field status and a blocked Continue instead.

use thiserror::Error;

/// Main error type for gradeplan
#[derive(Error, Debug)]
pub enum GradePlanError {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Curriculum dataset is malformed or inconsistent
    #[error("Curriculum error: {0}")]
    Curriculum(String),

    /// A semester key the application depends on is absent from the dataset
    #[error("Semester {key} not found in curriculum data")]
    MissingSemester { key: String },

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// General errors (catch-all for edge cases)
    #[error("{0}")]
    General(String),
}

/// Result type alias for gradeplan operations
pub type Result<T> = std::result::Result<T, GradePlanError>;

impl GradePlanError {
    /// Create a curriculum error
    pub fn curriculum(msg: impl Into<String>) -> Self {
        Self::Curriculum(msg.into())
    }

    /// Create a missing semester error
    pub fn missing_semester(key: impl Into<String>) -> Self {
        Self::MissingSemester { key: key.into() }
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create a general error
    pub fn general(msg: impl Into<String>) -> Self {
        Self::General(msg.into())
    }
}
