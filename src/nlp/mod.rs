// NLP module for sankshep
pub mod frequency;
pub mod language;
pub mod scoring;
pub mod stats;
pub mod stopwords;
pub mod summarization;
pub mod tokenizer;

pub use frequency::{build_frequency, extract_keywords, WordFrequencyTable, DEFAULT_KEYWORD_COUNT};
pub use language::{detect_language, language_info, script_profile, LanguageInfo, LANGUAGES};
pub use scoring::{score_sentences, split_sentences, ScoredSentence};
pub use stats::{get_text_stats, readability, Readability, TextStatistics};
pub use stopwords::StopwordRegistry;
pub use summarization::{
    summarize, BatchEntry, IdGenerator, LengthFractions, SummaryLength, SummaryOptions,
    SummaryResult, Summarizer, UuidGenerator,
};
pub use tokenizer::tokenize;
