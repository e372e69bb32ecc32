// Input policy applied by callers before handing text to the summarizer.
// The core itself accepts any text; these checks reject requests a front end
// should not forward (too short, too long, unknown language). The number of
// files in a directory batch is bounded by `Config::batch_limit` instead.
use crate::error::ValidationError;
use crate::nlp::language::is_supported;

pub const DEFAULT_MIN_WORDS: usize = 10;
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 50_000;
pub const MIN_KEYWORDS: usize = 1;
pub const MAX_KEYWORDS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationPolicy {
    pub min_words: usize,
    /// Maximum length in characters.
    pub max_text_length: usize,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            min_words: DEFAULT_MIN_WORDS,
            max_text_length: DEFAULT_MAX_TEXT_LENGTH,
        }
    }
}

impl ValidationPolicy {
    pub fn validate_text(&self, text: &str) -> Result<(), ValidationError> {
        if text.trim().is_empty() {
            return Err(ValidationError::EmptyText);
        }
        let length = text.chars().count();
        if length > self.max_text_length {
            return Err(ValidationError::TextTooLong { max: self.max_text_length, actual: length });
        }
        let words = text.split_whitespace().count();
        if words < self.min_words {
            return Err(ValidationError::TooFewWords { min: self.min_words, actual: words });
        }
        Ok(())
    }
}

pub fn validate_language_code(code: &str) -> Result<(), ValidationError> {
    if code.trim().is_empty() {
        return Err(ValidationError::MissingLanguage);
    }
    if !is_supported(code) {
        return Err(ValidationError::UnsupportedLanguage(code.to_string()));
    }
    Ok(())
}

pub fn validate_max_keywords(count: usize) -> Result<(), ValidationError> {
    if !(MIN_KEYWORDS..=MAX_KEYWORDS).contains(&count) {
        return Err(ValidationError::KeywordCountOutOfRange {
            min: MIN_KEYWORDS,
            max: MAX_KEYWORDS,
            actual: count,
        });
    }
    Ok(())
}
