// Text statistics and a simplified readability estimate.
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const WORDS_PER_MINUTE: usize = 200;

// Stats always count Devanagari terminators, whatever the language.
static STATS_SENTENCE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?।॥]+").unwrap());

static PARAGRAPH_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());

const VOWELS: &str = "aeiouाेिीुूैौअआइईउऊएऐओऔ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStatistics {
    /// Unicode scalar values, not bytes.
    pub characters: usize,
    pub words: usize,
    pub sentences: usize,
    pub paragraphs: usize,
    pub reading_time_minutes: usize,
}

pub fn get_text_stats(text: &str) -> TextStatistics {
    if text.trim().is_empty() {
        return TextStatistics {
            characters: text.chars().count(),
            ..TextStatistics::default()
        };
    }
    let words = text.split_whitespace().count();
    let sentences = STATS_SENTENCE_PATTERN
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .count();
    let paragraphs = PARAGRAPH_PATTERN
        .split(text)
        .filter(|p| !p.trim().is_empty())
        .count();
    TextStatistics {
        characters: text.chars().count(),
        words,
        sentences,
        paragraphs,
        reading_time_minutes: words.div_ceil(WORDS_PER_MINUTE),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Easy,
    Moderate,
    Difficult,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Readability {
    pub flesch_score: f64,
    pub avg_words_per_sentence: f64,
    pub avg_syllables_per_word: f64,
    pub complexity: Complexity,
}

/// Vowel groups in `word`, at least one.
pub fn count_syllables(word: &str) -> usize {
    let mut count = 0;
    let mut prev_vowel = false;
    for c in word.to_lowercase().chars() {
        let is_vowel = VOWELS.contains(c);
        if is_vowel && !prev_vowel {
            count += 1;
        }
        prev_vowel = is_vowel;
    }
    count.max(1)
}

/// Simplified Flesch reading ease, clamped to 0..=100.
pub fn readability(text: &str) -> Readability {
    let words: Vec<&str> = text.split_whitespace().collect();
    let sentences = get_text_stats(text).sentences;
    if words.is_empty() || sentences == 0 {
        return Readability {
            flesch_score: 0.0,
            avg_words_per_sentence: 0.0,
            avg_syllables_per_word: 0.0,
            complexity: Complexity::Unknown,
        };
    }

    let avg_words = words.len() as f64 / sentences as f64;
    let syllables: usize = words.iter().map(|w| count_syllables(w)).sum();
    let avg_syllables = syllables as f64 / words.len() as f64;
    let flesch = (206.835 - 1.015 * avg_words - 84.6 * avg_syllables).clamp(0.0, 100.0);
    let complexity = if flesch >= 70.0 {
        Complexity::Easy
    } else if flesch >= 50.0 {
        Complexity::Moderate
    } else {
        Complexity::Difficult
    };

    Readability {
        flesch_score: round2(flesch),
        avg_words_per_sentence: round2(avg_words),
        avg_syllables_per_word: round2(avg_syllables),
        complexity,
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_basic() {
        let stats = get_text_stats("One two three. Four five!\n\nSix seven?");
        assert_eq!(stats.words, 7);
        assert_eq!(stats.sentences, 3);
        assert_eq!(stats.paragraphs, 2);
        assert_eq!(stats.reading_time_minutes, 1);
        assert_eq!(stats.characters, 37);
    }

    #[test]
    fn test_stats_empty_and_whitespace() {
        assert_eq!(get_text_stats(""), TextStatistics::default());
        let ws = get_text_stats("   \n ");
        assert_eq!(ws.words, 0);
        assert_eq!(ws.sentences, 0);
        assert_eq!(ws.paragraphs, 0);
        assert_eq!(ws.reading_time_minutes, 0);
    }

    #[test]
    fn test_stats_counts_chars_not_bytes() {
        let stats = get_text_stats("नमस्ते");
        assert_eq!(stats.characters, 6);
        assert_eq!(stats.words, 1);
        assert_eq!(stats.sentences, 1);
    }

    #[test]
    fn test_stats_danda_sentences() {
        assert_eq!(get_text_stats("एक। दो॥ तीन").sentences, 3);
    }

    #[test]
    fn test_reading_time_rounds_up() {
        let text = vec!["word"; 201].join(" ");
        assert_eq!(get_text_stats(&text).reading_time_minutes, 2);
    }

    #[test]
    fn test_stats_idempotent() {
        let text = "Alpha beta. Gamma delta epsilon.";
        assert_eq!(get_text_stats(text), get_text_stats(text));
    }

    #[test]
    fn test_count_syllables() {
        assert_eq!(count_syllables("banana"), 3);
        assert_eq!(count_syllables("rhythm"), 1);
        assert_eq!(count_syllables("queue"), 1);
    }

    #[test]
    fn test_readability_simple_text() {
        let r = readability("The cat sat. The dog ran.");
        assert_eq!(r.complexity, Complexity::Easy);
        assert!(r.flesch_score <= 100.0);
        assert_eq!(r.avg_words_per_sentence, 3.0);
    }

    #[test]
    fn test_readability_empty() {
        assert_eq!(readability("").complexity, Complexity::Unknown);
    }
}
