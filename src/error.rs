use thiserror::Error;

/// Errors surfaced at the input boundary of a session
///
/// The filter engine itself never fails; everything here comes from
/// configuration, user edits or navigation.
#[derive(Debug, Error)]
pub enum QuickstayError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid budget: minimum {min} exceeds maximum {max}")]
    InvalidBudget { min: u32, max: u32 },

    #[error("Invalid dates: {end} precedes {start}")]
    InvalidDates {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },

    #[error("Invalid field: {0}")]
    InvalidField(String),

    #[error("No field is being edited")]
    NotEditing,

    #[error("Not Found: {0}")]
    RouteNotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, QuickstayError>;
