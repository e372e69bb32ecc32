// Tokenizer and stop-word filter shared by frequency counting and sentence scoring.
use once_cell::sync::Lazy;
use regex::Regex;

use super::stopwords::{StopwordLookup, StopwordRegistry};

// Anything that is not a word character, whitespace, or inside one of the
// tokenizer's script ranges (Devanagari, Bengali, Telugu, Tamil, Arabic).
static STRIP_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"[^\w\s\x{0900}-\x{097F}\x{0980}-\x{09FF}\x{0C00}-\x{0C7F}\x{0B80}-\x{0BFF}\x{0600}-\x{06FF}]",
    )
    .unwrap()
});

/// Lowercases and replaces punctuation with spaces.
pub fn normalize(text: &str) -> String {
    STRIP_PATTERN
        .replace_all(&text.to_lowercase(), " ")
        .into_owned()
}

/// Tokenizes with the built-in stop-word lists.
pub fn tokenize(text: &str, language: &str) -> Vec<String> {
    tokenize_with(text, &StopwordRegistry::shared().resolve(language))
}

pub fn tokenize_with(text: &str, stopwords: &StopwordLookup<'_>) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .filter(|word| !stopwords.contains(word))
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_basic() {
        let tokens = tokenize("Hello World! This is a test.", "en");
        assert_eq!(tokens, vec!["hello", "world", "this", "test"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert_eq!(tokenize("", "en"), Vec::<String>::new());
        assert_eq!(tokenize("   \n\t ", "en"), Vec::<String>::new());
    }

    #[test]
    fn test_tokenize_strips_punctuation() {
        let tokens = tokenize("hello@world #test $money, don't", "en");
        assert_eq!(tokens, vec!["hello", "world", "test", "money", "don", "t"]);
    }

    #[test]
    fn test_tokenize_keeps_numbers_and_underscores() {
        let tokens = tokenize("buy 10 apples_now", "en");
        assert_eq!(tokens, vec!["buy", "10", "apples_now"]);
    }

    #[test]
    fn test_tokenize_hindi_stopwords() {
        let tokens = tokenize("भारत एक विशाल देश है", "hi");
        assert_eq!(tokens, vec!["भारत", "विशाल", "देश"]);
    }

    #[test]
    fn test_danda_stays_attached_to_token() {
        // U+0964 is inside the Devanagari block, so it is not stripped.
        let tokens = tokenize("भारत एक देश है। वह बड़ा है", "hi");
        assert_eq!(tokens, vec!["भारत", "देश", "है।", "बड़ा"]);
    }

    #[test]
    fn test_unlisted_language_uses_english_stopwords() {
        let tokens = tokenize("the river and the hills", "kn");
        assert_eq!(tokens, vec!["river", "hills"]);
    }

    #[test]
    fn test_tokenize_with_custom_lookup() {
        let mut registry = StopwordRegistry::default();
        registry.insert("en", ["river"]);
        let tokens = tokenize_with("The river flows", &registry.resolve("en"));
        assert_eq!(tokens, vec!["the", "flows"]);
    }
}
