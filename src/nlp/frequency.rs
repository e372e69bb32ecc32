// Word-frequency table and keyword extraction.
use std::collections::HashMap;

use super::tokenizer::tokenize;

pub const DEFAULT_KEYWORD_COUNT: usize = 10;

/// Token counts for one text. Remembers the order tokens were first seen so that
/// ranking ties resolve to the earlier token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequencyTable {
    counts: HashMap<String, usize>,
    order: Vec<String>,
}

impl WordFrequencyTable {
    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        tokens.into_iter().fold(Self::default(), |mut table, token| {
            match table.counts.get_mut(&token) {
                Some(count) => *count += 1,
                None => {
                    table.counts.insert(token.clone(), 1);
                    table.order.push(token);
                }
            }
            table
        })
    }

    /// Count for `token`, zero when absent.
    pub fn get(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.order.iter().map(|t| (t.as_str(), self.counts[t]))
    }

    /// Entries sorted by count descending; the sort is stable over first-seen order.
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }

    pub fn top(&self, count: usize) -> Vec<String> {
        self.ranked()
            .into_iter()
            .take(count)
            .map(|(t, _)| t.to_string())
            .collect()
    }
}

pub fn build_frequency(text: &str, language: &str) -> WordFrequencyTable {
    WordFrequencyTable::from_tokens(tokenize(text, language))
}

pub fn extract_keywords(text: &str, language: &str, count: usize) -> Vec<String> {
    build_frequency(text, language).top(count)
}
