// Stop-word sets keyed by language code.
// Only a handful of languages have curated lists; everything else is filtered with
// the English list, and the registry reports when that happens.
use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

pub const FALLBACK_LANGUAGE: &str = "en";

const EN: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is",
    "it", "its", "of", "on", "that", "the", "to", "was", "will", "with",
];

const HI: &[&str] = &[
    "और", "का", "के", "की", "को", "में", "से", "पर", "है", "हैं", "था", "थे", "यह", "वह", "इस",
    "उस", "एक", "दो", "तीन",
];

const BN: &[&str] = &[
    "এবং", "বা", "কিন্তু", "যে", "যা", "এই", "সেই", "একটি", "একটা", "হয়", "হয়েছে", "করা", "করে",
    "থেকে", "সাথে",
];

const TE: &[&str] = &[
    "మరియు", "లేదా", "కానీ", "అని", "ఇది", "అది", "ఒక", "రెండు", "మూడు", "నాలుగు", "అయిన",
    "అయినది", "చేసిన", "చేసింది",
];

const TA: &[&str] = &[
    "மற்றும்", "அல்லது", "ஆனால்", "என்று", "இது", "அது", "ஒரு", "இரண்டு", "மூன்று", "நான்கு",
    "ஆகும்", "செய்த", "செய்யும்",
];

const MR: &[&str] = &[
    "आणि", "किंवा", "पण", "म्हणून", "हे", "ते", "एक", "दोन", "तीन", "चार", "आहे", "होते", "केले",
    "करणे", "मध्ये", "सोबत",
];

const GU: &[&str] = &[
    "અને", "અથવા", "પણ", "કે", "આ", "તે", "એક", "બે", "ત્રણ", "ચાર", "છે", "હતું", "કર્યું", "કરવું",
    "માં", "સાથે",
];

static BUILTIN: Lazy<StopwordRegistry> = Lazy::new(StopwordRegistry::builtin);

/// Outcome of looking up the stop-word set for a language.
#[derive(Debug, Clone, Copy)]
pub struct StopwordLookup<'a> {
    pub words: &'a HashSet<String>,
    /// The language the set actually belongs to.
    pub language: &'a str,
    /// True when the requested language had no set and English was used instead.
    pub fell_back: bool,
}

impl StopwordLookup<'_> {
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }
}

#[derive(Debug, Clone, Default)]
pub struct StopwordRegistry {
    sets: HashMap<String, HashSet<String>>,
}

impl StopwordRegistry {
    /// Registry holding the curated lists: en, hi, bn, te, ta, mr, gu.
    pub fn builtin() -> Self {
        let mut registry = Self::default();
        for (code, words) in [
            ("en", EN),
            ("hi", HI),
            ("bn", BN),
            ("te", TE),
            ("ta", TA),
            ("mr", MR),
            ("gu", GU),
        ] {
            registry.insert(code, words.iter().copied());
        }
        registry
    }

    /// Shared copy of [`StopwordRegistry::builtin`].
    pub fn shared() -> &'static StopwordRegistry {
        &BUILTIN
    }

    /// Replaces the set for `language`. Words are lowercased on the way in.
    pub fn insert<'w>(&mut self, language: &str, words: impl IntoIterator<Item = &'w str>) {
        let set = words.into_iter().map(|w| w.to_lowercase()).collect();
        self.sets.insert(language.to_string(), set);
    }

    pub fn has_language(&self, language: &str) -> bool {
        self.sets.contains_key(language)
    }

    pub fn languages(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.sets.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// Resolves the set for `language`.
    ///
    /// Unlisted languages get the English set with `fell_back` set, rather than no
    /// filtering at all. A registry without an English set yields an empty set.
    pub fn resolve(&self, language: &str) -> StopwordLookup<'_> {
        static EMPTY: Lazy<HashSet<String>> = Lazy::new(HashSet::new);

        if let Some((code, words)) = self.sets.get_key_value(language) {
            return StopwordLookup { words, language: code, fell_back: false };
        }
        match self.sets.get_key_value(FALLBACK_LANGUAGE) {
            Some((code, words)) => StopwordLookup { words, language: code, fell_back: true },
            None => StopwordLookup { words: &EMPTY, language: FALLBACK_LANGUAGE, fell_back: true },
        }
    }

    pub fn is_stopword(&self, language: &str, token: &str) -> bool {
        self.resolve(language).contains(token)
    }
}
