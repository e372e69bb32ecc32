// Language detection and the catalog of supported languages.
// Detection is a fixed-priority Unicode script-range test, not a statistical model.
use serde::{Deserialize, Serialize};

/// Code returned when no Indic or Arabic script character is present.
pub const DEFAULT_LANGUAGE: &str = "en";

/// An inclusive block of Unicode code points belonging to one writing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptRange {
    pub script: &'static str,
    pub start: u32,
    pub end: u32,
}

impl ScriptRange {
    const fn new(script: &'static str, start: u32, end: u32) -> Self {
        Self { script, start, end }
    }

    pub fn contains(&self, c: char) -> bool {
        let cp = c as u32;
        cp >= self.start && cp <= self.end
    }
}

pub const DEVANAGARI: ScriptRange = ScriptRange::new("Devanagari", 0x0900, 0x097F);
pub const BENGALI: ScriptRange = ScriptRange::new("Bengali", 0x0980, 0x09FF);
pub const TELUGU: ScriptRange = ScriptRange::new("Telugu", 0x0C00, 0x0C7F);
pub const TAMIL: ScriptRange = ScriptRange::new("Tamil", 0x0B80, 0x0BFF);
pub const ARABIC: ScriptRange = ScriptRange::new("Arabic", 0x0600, 0x06FF);
pub const GUJARATI: ScriptRange = ScriptRange::new("Gujarati", 0x0A80, 0x0AFF);
pub const KANNADA: ScriptRange = ScriptRange::new("Kannada", 0x0C80, 0x0CFF);
pub const MALAYALAM: ScriptRange = ScriptRange::new("Malayalam", 0x0D00, 0x0D7F);
pub const ODIA: ScriptRange = ScriptRange::new("Odia", 0x0B00, 0x0B7F);
pub const GURMUKHI: ScriptRange = ScriptRange::new("Gurmukhi", 0x0A00, 0x0A7F);

/// Detection order. The first range with any matching character decides the language,
/// so mixed-script text reports the earliest range here, not the dominant one.
pub const DETECTION_ORDER: [(ScriptRange, &str); 5] = [
    (DEVANAGARI, "hi"),
    (BENGALI, "bn"),
    (TELUGU, "te"),
    (TAMIL, "ta"),
    (ARABIC, "ur"),
];

/// Ranges kept intact by the tokenizer. Matches the detection ranges.
pub const TOKEN_SCRIPTS: [ScriptRange; 5] = [DEVANAGARI, BENGALI, TELUGU, TAMIL, ARABIC];

const PROFILE_SCRIPTS: [ScriptRange; 10] = [
    DEVANAGARI, BENGALI, TELUGU, TAMIL, GUJARATI, KANNADA, MALAYALAM, ODIA, GURMUKHI, ARABIC,
];

pub fn detect_language(text: &str) -> String {
    DETECTION_ORDER
        .iter()
        .find(|(range, _)| text.chars().any(|c| range.contains(c)))
        .map(|(_, code)| (*code).to_string())
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
}

/// Per-script character counts, in a fixed script order.
///
/// Diagnostic only: it reveals the dominant script of mixed text but never feeds
/// back into [`detect_language`].
pub fn script_profile(text: &str) -> Vec<(&'static str, usize)> {
    let mut counts: Vec<(&'static str, usize)> =
        PROFILE_SCRIPTS.iter().map(|r| (r.script, 0)).collect();
    for c in text.chars() {
        if let Some(pos) = PROFILE_SCRIPTS.iter().position(|r| r.contains(c)) {
            counts[pos].1 += 1;
        }
    }
    counts
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

#[derive(Debug, Clone, Serialize)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
    pub script: &'static str,
    pub family: &'static str,
    pub direction: TextDirection,
}

const fn lang(
    code: &'static str,
    name: &'static str,
    native_name: &'static str,
    script: &'static str,
    family: &'static str,
) -> LanguageInfo {
    LanguageInfo { code, name, native_name, script, family, direction: TextDirection::Ltr }
}

// Arabic-script entries.
const fn rtl(
    code: &'static str,
    name: &'static str,
    native_name: &'static str,
    family: &'static str,
) -> LanguageInfo {
    LanguageInfo {
        code,
        name,
        native_name,
        script: "Arabic",
        family,
        direction: TextDirection::Rtl,
    }
}

pub static LANGUAGES: [LanguageInfo; 23] = [
    lang("hi", "Hindi", "हिन्दी", "Devanagari", "Indo-Aryan"),
    lang("en", "English", "English", "Latin", "Germanic"),
    lang("bn", "Bengali", "বাংলা", "Bengali", "Indo-Aryan"),
    lang("te", "Telugu", "తెలుగు", "Telugu", "Dravidian"),
    lang("mr", "Marathi", "मराठी", "Devanagari", "Indo-Aryan"),
    lang("ta", "Tamil", "தமிழ்", "Tamil", "Dravidian"),
    rtl("ur", "Urdu", "اردو", "Indo-Aryan"),
    lang("gu", "Gujarati", "ગુજરાતી", "Gujarati", "Indo-Aryan"),
    lang("kn", "Kannada", "ಕನ್ನಡ", "Kannada", "Dravidian"),
    lang("ml", "Malayalam", "മലയാളം", "Malayalam", "Dravidian"),
    lang("or", "Odia", "ଓଡ଼ିଆ", "Odia", "Indo-Aryan"),
    lang("pa", "Punjabi", "ਪੰਜਾਬੀ", "Gurmukhi", "Indo-Aryan"),
    lang("as", "Assamese", "অসমীয়া", "Bengali", "Indo-Aryan"),
    lang("mai", "Maithili", "मैथिली", "Devanagari", "Indo-Aryan"),
    lang("sa", "Sanskrit", "संस्कृतम्", "Devanagari", "Indo-Aryan"),
    lang("ne", "Nepali", "नेपाली", "Devanagari", "Indo-Aryan"),
    lang("ks", "Kashmiri", "कॉशुर", "Devanagari", "Indo-Aryan"),
    rtl("sd", "Sindhi", "سنڌي", "Indo-Aryan"),
    lang("doi", "Dogri", "डोगरी", "Devanagari", "Indo-Aryan"),
    lang("mni", "Manipuri", "মৈতৈলোন্", "Bengali", "Sino-Tibetan"),
    lang("sat", "Santali", "ᱥᱟᱱᱛᱟᱲᱤ", "Ol Chiki", "Austroasiatic"),
    lang("kok", "Konkani", "कोंकणी", "Devanagari", "Indo-Aryan"),
    lang("bo", "Tibetan", "བོད་ཡིག", "Tibetan", "Sino-Tibetan"),
];

pub fn language_info(code: &str) -> Option<&'static LanguageInfo> {
    LANGUAGES.iter().find(|l| l.code == code)
}

pub fn is_supported(code: &str) -> bool {
    language_info(code).is_some()
}

pub fn is_rtl(code: &str) -> bool {
    language_info(code)
        .map(|l| l.direction == TextDirection::Rtl)
        .unwrap_or(false)
}

/// Languages written in Devanagari get the `।`/`॥` sentence terminators.
pub fn is_devanagari_family(code: &str) -> bool {
    language_info(code)
        .map(|l| l.script == DEVANAGARI.script)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_english_default() {
        assert_eq!(detect_language("The quick brown fox."), "en");
        assert_eq!(detect_language(""), "en");
    }

    #[test]
    fn test_detect_each_script() {
        assert_eq!(detect_language("यह एक परीक्षण है।"), "hi");
        assert_eq!(detect_language("এটি একটি পরীক্ষা"), "bn");
        assert_eq!(detect_language("ఇది ఒక పరీక్ష"), "te");
        assert_eq!(detect_language("இது ஒரு சோதனை"), "ta");
        assert_eq!(detect_language("یہ ایک امتحان ہے"), "ur");
    }

    #[test]
    fn test_mixed_script_uses_priority_order() {
        // Mostly Tamil with a single Devanagari character still reports Hindi.
        let text = "இது ஒரு சோதனை மற்றும் இன்னும் க";
        assert_eq!(detect_language(&format!("{} क", text)), "hi");
    }

    #[test]
    fn test_script_profile_counts() {
        let profile = script_profile("abc कख ગ");
        let get = |name: &str| profile.iter().find(|(s, _)| *s == name).map(|(_, n)| *n);
        assert_eq!(get("Devanagari"), Some(2));
        assert_eq!(get("Gujarati"), Some(1));
        assert_eq!(get("Tamil"), Some(0));
    }

    #[test]
    fn test_catalog_lookups() {
        assert_eq!(LANGUAGES.len(), 23);
        assert_eq!(language_info("ta").map(|l| l.native_name), Some("தமிழ்"));
        assert!(is_supported("kok"));
        assert!(!is_supported("fr"));
        assert!(is_rtl("ur"));
        assert!(is_rtl("sd"));
        assert!(!is_rtl("hi"));
    }

    #[test]
    fn test_devanagari_family() {
        for code in ["hi", "mr", "mai", "sa", "ne", "ks", "doi", "kok"] {
            assert!(is_devanagari_family(code), "{code}");
        }
        assert!(!is_devanagari_family("bn"));
        assert!(!is_devanagari_family("en"));
        assert!(!is_devanagari_family("xx"));
    }
}
