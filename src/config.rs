// Runtime configuration read from the environment. Command-line flags override it.
use std::env;
use std::str::FromStr;

use tracing::warn;

use crate::nlp::frequency::DEFAULT_KEYWORD_COUNT;
use crate::nlp::summarization::{LengthFractions, Summarizer, SummaryLength, SummaryOptions};
use crate::validation::{ValidationPolicy, DEFAULT_MAX_TEXT_LENGTH, DEFAULT_MIN_WORDS};

pub const ENV_LENGTH: &str = "SANKSHEP_LENGTH";
pub const ENV_MAX_KEYWORDS: &str = "SANKSHEP_MAX_KEYWORDS";
pub const ENV_FRACTIONS: &str = "SANKSHEP_FRACTIONS";
pub const ENV_MIN_WORDS: &str = "SANKSHEP_MIN_WORDS";
pub const ENV_MAX_TEXT_LENGTH: &str = "SANKSHEP_MAX_TEXT_LENGTH";
pub const ENV_BATCH_LIMIT: &str = "SANKSHEP_BATCH_LIMIT";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub default_length: SummaryLength,
    pub max_keywords: usize,
    pub fractions: LengthFractions,
    pub min_words: usize,
    pub max_text_length: usize,
    /// Zero means no limit on files per batch run.
    pub batch_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_length: SummaryLength::Medium,
            max_keywords: DEFAULT_KEYWORD_COUNT,
            fractions: LengthFractions::MULTILINGUAL,
            min_words: DEFAULT_MIN_WORDS,
            max_text_length: DEFAULT_MAX_TEXT_LENGTH,
            batch_limit: 0,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup. Unparseable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let fractions = match lookup(ENV_FRACTIONS).as_deref().map(str::trim) {
            None | Some("multilingual") => LengthFractions::MULTILINGUAL,
            Some("plain") => LengthFractions::PLAIN,
            Some(other) => {
                warn!(key = ENV_FRACTIONS, value = other, "unknown fraction set, using multilingual");
                LengthFractions::MULTILINGUAL
            }
        };

        Self {
            default_length: parse_or(&lookup, ENV_LENGTH, defaults.default_length),
            max_keywords: parse_or(&lookup, ENV_MAX_KEYWORDS, defaults.max_keywords),
            fractions,
            min_words: parse_or(&lookup, ENV_MIN_WORDS, defaults.min_words),
            max_text_length: parse_or(&lookup, ENV_MAX_TEXT_LENGTH, defaults.max_text_length),
            batch_limit: parse_or(&lookup, ENV_BATCH_LIMIT, defaults.batch_limit),
        }
    }

    pub fn summarizer(&self) -> Summarizer {
        Summarizer::new().with_fractions(self.fractions)
    }

    pub fn summary_options(&self) -> SummaryOptions {
        SummaryOptions {
            length: self.default_length,
            max_keywords: self.max_keywords,
            ..SummaryOptions::default()
        }
    }

    pub fn validation_policy(&self) -> ValidationPolicy {
        ValidationPolicy {
            min_words: self.min_words,
            max_text_length: self.max_text_length,
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, "ignoring unparseable setting");
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_env() {
        assert_eq!(config_from(&[]), Config::default());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            (ENV_LENGTH, "long"),
            (ENV_MAX_KEYWORDS, "5"),
            (ENV_FRACTIONS, "plain"),
            (ENV_MIN_WORDS, "3"),
            (ENV_BATCH_LIMIT, "25"),
        ]);
        assert_eq!(config.default_length, SummaryLength::Long);
        assert_eq!(config.max_keywords, 5);
        assert_eq!(config.fractions, LengthFractions::PLAIN);
        assert_eq!(config.min_words, 3);
        assert_eq!(config.batch_limit, 25);
        assert_eq!(config.summary_options().length, SummaryLength::Long);
        assert_eq!(config.validation_policy().min_words, 3);
        assert_eq!(config.summarizer().fractions(), LengthFractions::PLAIN);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = config_from(&[
            (ENV_LENGTH, "gigantic"),
            (ENV_MAX_KEYWORDS, "many"),
            (ENV_FRACTIONS, "average"),
        ]);
        assert_eq!(config.default_length, SummaryLength::Medium);
        assert_eq!(config.max_keywords, DEFAULT_KEYWORD_COUNT);
        assert_eq!(config.fractions, LengthFractions::MULTILINGUAL);
    }
}
