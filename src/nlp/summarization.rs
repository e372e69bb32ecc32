// Text Summarization module using extractive approach
// Sentences are scored by the mean frequency of their content words and the
// best ones are stitched back together in their original order.
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use rayon::prelude::*;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::frequency::{WordFrequencyTable, DEFAULT_KEYWORD_COUNT};
use super::language::detect_language;
use super::scoring::{score_sentences_with, split_sentences, ScoredSentence};
use super::stats::{get_text_stats, TextStatistics};
use super::stopwords::StopwordRegistry;
use super::tokenizer::tokenize_with;
use crate::error::{Result, SummarizerError};

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

pub const SINGLE_SENTENCE_CONFIDENCE: f64 = 0.5;
pub const MIN_CONFIDENCE: f64 = 0.3;
pub const MAX_CONFIDENCE: f64 = 0.95;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl SummaryLength {
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryLength::Short => "short",
            SummaryLength::Medium => "medium",
            SummaryLength::Long => "long",
        }
    }
}

impl fmt::Display for SummaryLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SummaryLength {
    type Err = SummarizerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "short" => Ok(SummaryLength::Short),
            "medium" => Ok(SummaryLength::Medium),
            "long" => Ok(SummaryLength::Long),
            other => Err(SummarizerError::invalid(
                "length",
                format!("expected short, medium or long, got `{other}`"),
            )),
        }
    }
}

/// Fraction of sentences kept for each [`SummaryLength`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LengthFractions {
    pub short: f64,
    pub medium: f64,
    pub long: f64,
}

impl LengthFractions {
    /// Canonical mapping.
    pub const MULTILINGUAL: LengthFractions = LengthFractions { short: 0.25, medium: 0.4, long: 0.6 };
    /// Alternative mapping used by the English-only path. Opt-in through configuration.
    pub const PLAIN: LengthFractions = LengthFractions { short: 0.3, medium: 0.5, long: 0.7 };

    pub fn fraction(&self, length: SummaryLength) -> f64 {
        match length {
            SummaryLength::Short => self.short,
            SummaryLength::Medium => self.medium,
            SummaryLength::Long => self.long,
        }
    }

    /// `max(1, floor(sentences * fraction))`.
    pub fn target_count(&self, sentences: usize, length: SummaryLength) -> usize {
        ((sentences as f64 * self.fraction(length)).floor() as usize).max(1)
    }
}

impl Default for LengthFractions {
    fn default() -> Self {
        Self::MULTILINGUAL
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryOptions {
    pub length: SummaryLength,
    /// Forces the language instead of detecting it.
    pub language: Option<String>,
    /// Keep line breaks and whitespace runs inside selected sentences.
    pub preserve_formatting: bool,
    pub include_keywords: bool,
    pub max_keywords: usize,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            length: SummaryLength::Medium,
            language: None,
            preserve_formatting: false,
            include_keywords: true,
            max_keywords: DEFAULT_KEYWORD_COUNT,
        }
    }
}

impl SummaryOptions {
    pub fn with_length(mut self, length: SummaryLength) -> Self {
        self.length = length;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    fn check(&self) -> Result<()> {
        if let Some(code) = &self.language {
            let well_formed = (2..=3).contains(&code.len()) && code.bytes().all(|b| b.is_ascii_lowercase());
            if !well_formed {
                return Err(SummarizerError::invalid(
                    "language",
                    format!("`{code}` is not a lowercase language code"),
                ));
            }
        }
        if self.max_keywords == 0 {
            return Err(SummarizerError::invalid("max_keywords", "must be at least 1"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub id: String,
    pub summary: String,
    pub original_text: String,
    pub detected_language: String,
    pub original_stats: TextStatistics,
    pub summary_stats: TextStatistics,
    pub compression_ratio: f64,
    pub keywords: Vec<String>,
    /// Heuristic quality indicator, not a probability.
    pub confidence: f64,
    pub created_at: DateTime<Utc>,
}

/// Source of result identifiers.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Outcome of one text in [`Summarizer::summarize_batch`].
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BatchEntry {
    Summarized { index: usize, result: SummaryResult },
    Failed { index: usize, error: String },
}

impl BatchEntry {
    pub fn index(&self) -> usize {
        match self {
            BatchEntry::Summarized { index, .. } | BatchEntry::Failed { index, .. } => *index,
        }
    }
}

pub struct Summarizer {
    fractions: LengthFractions,
    stopwords: StopwordRegistry,
    ids: Box<dyn IdGenerator>,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Summarizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Summarizer")
            .field("fractions", &self.fractions)
            .field("stopwords", &self.stopwords.languages())
            .finish()
    }
}

impl Summarizer {
    pub fn new() -> Self {
        Self {
            fractions: LengthFractions::MULTILINGUAL,
            stopwords: StopwordRegistry::builtin(),
            ids: Box::new(UuidGenerator),
        }
    }

    pub fn with_fractions(mut self, fractions: LengthFractions) -> Self {
        self.fractions = fractions;
        self
    }

    pub fn with_stopwords(mut self, stopwords: StopwordRegistry) -> Self {
        self.stopwords = stopwords;
        self
    }

    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn fractions(&self) -> LengthFractions {
        self.fractions
    }

    pub fn stopwords(&self) -> &StopwordRegistry {
        &self.stopwords
    }

    pub fn tokenize(&self, text: &str, language: &str) -> Vec<String> {
        let lookup = self.stopwords.resolve(language);
        if lookup.fell_back {
            debug!(language, "no curated stop words, filtering with English list");
        }
        tokenize_with(text, &lookup)
    }

    pub fn build_frequency(&self, text: &str, language: &str) -> WordFrequencyTable {
        WordFrequencyTable::from_tokens(self.tokenize(text, language))
    }

    pub fn extract_keywords(&self, text: &str, language: &str, count: usize) -> Vec<String> {
        self.build_frequency(text, language).top(count)
    }

    /// Summarizes `text`.
    ///
    /// Empty or whitespace-only input yields an empty summary with zeroed statistics
    /// and confidence 0. Input with at most one sentence is returned verbatim with
    /// a compression ratio of 1 and confidence 0.5. Errors only on malformed options.
    pub fn summarize(&self, text: &str, options: &SummaryOptions) -> Result<SummaryResult> {
        options.check()?;

        let language = options
            .language
            .clone()
            .unwrap_or_else(|| detect_language(text));

        if text.trim().is_empty() {
            debug!("empty input");
            return Ok(self.result(
                text,
                String::new(),
                language,
                TextStatistics::default(),
                0.0,
                Vec::new(),
                0.0,
            ));
        }

        let original_stats = get_text_stats(text);
        let sentences = split_sentences(text, &language);

        if sentences.len() <= 1 {
            debug!(%language, "single sentence, returning input verbatim");
            let keywords = self.keywords_for(text, &language, options);
            return Ok(self.result(
                text,
                text.to_string(),
                language,
                original_stats,
                1.0,
                keywords,
                SINGLE_SENTENCE_CONFIDENCE,
            ));
        }

        let frequency = self.build_frequency(text, &language);
        let keywords = frequency.top(options.max_keywords);
        let scored = score_sentences_with(&sentences, &frequency, &self.stopwords.resolve(&language));

        let target = self.fractions.target_count(sentences.len(), options.length);
        let selected = select_top(scored, target);
        let mean_score = selected.iter().map(|s| s.score).sum::<f64>() / selected.len() as f64;

        debug!(
            %language,
            sentences = sentences.len(),
            target,
            mean_score,
            "selected sentences"
        );

        let summary = assemble(&selected, options.preserve_formatting);
        let summary_stats = get_text_stats(&summary);
        // Rejoining with ". " can split words the original ran together.
        let compression_ratio = if original_stats.words > 0 {
            (summary_stats.words as f64 / original_stats.words as f64).min(1.0)
        } else {
            0.0
        };
        let confidence = confidence(mean_score, original_stats.words, keywords.len());
        let keywords = if options.include_keywords { keywords } else { Vec::new() };

        Ok(SummaryResult {
            id: self.ids.next_id(),
            summary,
            original_text: text.to_string(),
            detected_language: language,
            original_stats,
            summary_stats,
            compression_ratio,
            keywords,
            confidence,
            created_at: Utc::now(),
        })
    }

    /// Summarizes independent texts in parallel. Blank texts are skipped; a failing
    /// text is reported in its entry and does not abort the batch.
    pub fn summarize_batch<S>(&self, texts: &[S], options: &SummaryOptions) -> Vec<BatchEntry>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| text.as_ref())
            .enumerate()
            .filter(|(_, text)| !text.trim().is_empty())
            .map(|(index, text)| match self.summarize(text, options) {
                Ok(result) => BatchEntry::Summarized { index, result },
                Err(e) => BatchEntry::Failed { index, error: e.to_string() },
            })
            .collect()
    }

    fn keywords_for(&self, text: &str, language: &str, options: &SummaryOptions) -> Vec<String> {
        if options.include_keywords {
            self.extract_keywords(text, language, options.max_keywords)
        } else {
            Vec::new()
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn result(
        &self,
        text: &str,
        summary: String,
        language: String,
        stats: TextStatistics,
        compression_ratio: f64,
        keywords: Vec<String>,
        confidence: f64,
    ) -> SummaryResult {
        SummaryResult {
            id: self.ids.next_id(),
            summary,
            original_text: text.to_string(),
            detected_language: language,
            original_stats: stats,
            summary_stats: stats,
            compression_ratio,
            keywords,
            confidence,
            created_at: Utc::now(),
        }
    }
}

/// Keeps the `target` best-scoring sentences, then restores document order.
/// Exact score ties keep their original relative order.
pub fn select_top(mut scored: Vec<ScoredSentence>, target: usize) -> Vec<ScoredSentence> {
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(target);
    scored.sort_by_key(|s| s.original_index);
    scored
}

fn assemble(selected: &[ScoredSentence], preserve_formatting: bool) -> String {
    let parts: Vec<String> = selected
        .iter()
        .map(|s| {
            if preserve_formatting {
                s.text.clone()
            } else {
                WHITESPACE_RUN.replace_all(&s.text, " ").into_owned()
            }
        })
        .collect();
    if parts.is_empty() {
        return String::new();
    }
    format!("{}.", parts.join(". "))
}

pub fn confidence(mean_score: f64, original_words: usize, keyword_count: usize) -> f64 {
    let length_term = if original_words > 100 { 0.3 } else { 0.1 };
    let keyword_term = if keyword_count > 5 { 0.2 } else { 0.1 };
    (mean_score * 0.1 + length_term + keyword_term + 0.4).clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
}

static DEFAULT_SUMMARIZER: Lazy<Summarizer> = Lazy::new(Summarizer::new);

/// Summarizes with the default [`Summarizer`].
pub fn summarize(text: &str, options: &SummaryOptions) -> Result<SummaryResult> {
    DEFAULT_SUMMARIZER.summarize(text, options)
}
