//! Application Errors
//!
//! Both kinds are recoverable and end up as a blocking notice.

use thiserror::Error;

use crate::config::{INPUT_PARSE_NOTICE, PERSISTED_STATE_NOTICE};

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// The raw JSON typed by the user could not be parsed
    #[error("Invalid list input: {0}")]
    InputParse(String),
    /// The `#data=` fragment could not be decoded
    #[error("Corrupt persisted list: {0}")]
    PersistedState(String),
}

impl AppError {
    /// Text shown to the user
    pub fn notice(&self) -> &'static str {
        match self {
            AppError::InputParse(_) => INPUT_PARSE_NOTICE,
            AppError::PersistedState(_) => PERSISTED_STATE_NOTICE,
        }
    }
}
