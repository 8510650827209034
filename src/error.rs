use thiserror::Error;

/// Programmer errors raised by the assessment pipeline.
///
/// Missing or unknown domain data never ends up here; those cases degrade to
/// empty results instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    #[error("invalid level {0}: levels range from 1 to 5")]
    InvalidLevel(u8),
    #[error("invalid option index {0}: questions have options 0 to 3")]
    InvalidOption(u8),
    #[error("session error: {0}")]
    SessionState(String),
}

impl AssessmentError {
    pub(crate) fn session(message: impl Into<String>) -> Self {
        Self::SessionState(message.into())
    }
}
