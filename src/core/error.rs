use thiserror::Error;

/// Failures of the scoring engine. Everything else it does is total.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AssessmentError {
    #[error("assessment incomplete: {0}")]
    InvalidInput(String),
}

impl AssessmentError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
