//! Multilingual extractive text summarizer for English and Indian languages.
//!
//! The core ([`nlp`]) is pure and synchronous: detect the language from its script,
//! tokenize and drop stop words, count word frequencies, score sentences by mean
//! frequency plus a few boosts, and keep the best ones in their original order.
//!
//! ```
//! use sankshep::{summarize, SummaryLength, SummaryOptions};
//!
//! let text = "The cat sat. The cat ate fish. The dog ran far away. Fish are tasty and cats love fish.";
//! let options = SummaryOptions::default().with_length(SummaryLength::Short);
//! let result = summarize(text, &options).unwrap();
//! assert_eq!(result.summary, "The cat ate fish.");
//! ```
pub mod batch;
pub mod config;
pub mod document;
pub mod error;
pub mod logging;
pub mod nlp;
pub mod validation;

pub use config::Config;
pub use error::{SummarizerError, ValidationError};
pub use logging::setup_logging;
pub use nlp::{
    build_frequency, detect_language, extract_keywords, get_text_stats, summarize, tokenize,
    BatchEntry, IdGenerator, LengthFractions, StopwordRegistry, Summarizer, SummaryLength,
    SummaryOptions, SummaryResult, TextStatistics, WordFrequencyTable,
};
