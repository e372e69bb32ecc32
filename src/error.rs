use thiserror::Error;

/// Contract violations raised by the summarizer core.
///
/// Degenerate text (empty, whitespace-only, a single sentence) is never an error;
/// it produces a terminal-state result instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SummarizerError {
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },
}

impl SummarizerError {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        SummarizerError::InvalidArgument { name, reason: reason.into() }
    }
}

/// Caller-side input policy failures. See [`crate::validation`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("text cannot be empty")]
    EmptyText,

    #[error("text exceeds maximum length of {max} characters (got {actual})")]
    TextTooLong { max: usize, actual: usize },

    #[error("text must contain at least {min} words (current: {actual})")]
    TooFewWords { min: usize, actual: usize },

    #[error("language code is required")]
    MissingLanguage,

    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("max_keywords must be between {min} and {max} (got {actual})")]
    KeywordCountOutOfRange { min: usize, max: usize, actual: usize },
}

pub type Result<T, E = SummarizerError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SummarizerError::invalid("length", "unknown value `tiny`");
        assert_eq!(err.to_string(), "invalid argument `length`: unknown value `tiny`");

        let err = ValidationError::TooFewWords { min: 10, actual: 3 };
        assert_eq!(err.to_string(), "text must contain at least 10 words (current: 3)");
    }
}
