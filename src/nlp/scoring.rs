// Sentence splitting and frequency-based sentence scoring.
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::frequency::WordFrequencyTable;
use super::language::is_devanagari_family;
use super::stopwords::{StopwordLookup, StopwordRegistry};
use super::tokenizer::tokenize_with;

static SENTENCE_DELIMITERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

static DEVANAGARI_DELIMITERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?।॥]+").unwrap());

static DIGIT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());

static CAPITALIZED_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z][a-z]+").unwrap());

/// Words whose presence marks a sentence as important.
pub const IMPORTANCE_MARKERS: &[&str] = &[
    "important",
    "significant",
    "महत्वपूर्ण",
    "গুরুত্বপূর্ণ",
    "ముఖ్యమైన",
    "முக்கியமான",
    "महत्त्वाचे",
    "મહત્વપૂર્ણ",
];

pub const NUMERIC_BOOST: f64 = 0.1;
pub const PROPER_NOUN_BOOST: f64 = 0.1;
pub const IMPORTANCE_BOOST: f64 = 0.2;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredSentence {
    pub text: String,
    pub score: f64,
    pub original_index: usize,
}

/// Splits on `.`, `!` and `?`; Devanagari-script languages also split on `।` and `॥`.
/// Fragments are trimmed and empty ones dropped.
pub fn split_sentences<'t>(text: &'t str, language: &str) -> Vec<&'t str> {
    let delimiters: &Regex = if is_devanagari_family(language) {
        &DEVANAGARI_DELIMITERS
    } else {
        &SENTENCE_DELIMITERS
    };
    delimiters
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Additive boost multiplier, always >= 1.0.
pub fn boost_multiplier(sentence: &str) -> f64 {
    let mut boost = 1.0;
    if DIGIT_PATTERN.is_match(sentence) {
        boost += NUMERIC_BOOST;
    }
    if CAPITALIZED_PATTERN.is_match(sentence) {
        boost += PROPER_NOUN_BOOST;
    }
    if IMPORTANCE_MARKERS.iter().any(|m| sentence.contains(m)) {
        boost += IMPORTANCE_BOOST;
    }
    boost
}

pub fn score_sentence(
    sentence: &str,
    index: usize,
    frequency: &WordFrequencyTable,
    stopwords: &StopwordLookup<'_>,
) -> ScoredSentence {
    let tokens = tokenize_with(sentence, stopwords);
    let total: usize = tokens.iter().map(|t| frequency.get(t)).sum();
    // Mean over content words keeps long sentences from winning on length alone.
    let raw = total as f64 / tokens.len().max(1) as f64;
    ScoredSentence {
        text: sentence.trim().to_string(),
        score: raw * boost_multiplier(sentence),
        original_index: index,
    }
}

pub fn score_sentences<S: AsRef<str>>(
    sentences: &[S],
    frequency: &WordFrequencyTable,
    language: &str,
) -> Vec<ScoredSentence> {
    let stopwords = StopwordRegistry::shared().resolve(language);
    score_sentences_with(sentences, frequency, &stopwords)
}

pub fn score_sentences_with<S: AsRef<str>>(
    sentences: &[S],
    frequency: &WordFrequencyTable,
    stopwords: &StopwordLookup<'_>,
) -> Vec<ScoredSentence> {
    sentences
        .iter()
        .enumerate()
        .map(|(idx, s)| score_sentence(s.as_ref(), idx, frequency, stopwords))
        .collect()
}
