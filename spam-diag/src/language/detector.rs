//! Rule-based language detection
//!
//! Classifies text from Unicode script ratios first, then from Spanish and
//! French indicator words. Every input maps to a [`Language`]; there is no
//! error path.

use regex::Regex;
use std::sync::LazyLock;

use super::types::Language;

/// Minimum share of a script before the text is attributed to it
const SCRIPT_THRESHOLD: f64 = 0.1;

/// Minimum share of accented Latin characters for the Spanish/French branch
const ACCENT_THRESHOLD: f64 = 0.01;

/// What is left after stripping whitespace, decimal digits and punctuation:
/// letters, non-decimal numerics (`²`, `Ⅻ`) and `_`. Combining marks such as
/// Bengali vowel signs and the virama are not counted.
static LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{Nl}\p{No}_]").expect("letter pattern is valid"));

const SPANISH_INDICATORS: [&str; 21] = [
    "gratis",
    "ganar",
    "dinero",
    "premio",
    "oferta",
    "urgente",
    "garantía",
    "descuento",
    "felicitaciones",
    "euros",
    "dólares",
    "hola",
    "cómo",
    "qué",
    "sí",
    "muy",
    "bien",
    "gracias",
    "usted",
    "señor",
    "ahora",
];

const FRENCH_INDICATORS: [&str; 9] = [
    "bonjour", "merci", "français", "avec", "mais", "être", "avoir", "aller", "pouvoir",
];

fn is_bengali(c: char) -> bool {
    matches!(c, '\u{0980}'..='\u{09FF}')
}

fn is_chinese(c: char) -> bool {
    matches!(c, '\u{4E00}'..='\u{9FFF}')
}

fn is_arabic(c: char) -> bool {
    matches!(c, '\u{0600}'..='\u{06FF}')
}

fn is_cyrillic(c: char) -> bool {
    matches!(c, '\u{0400}'..='\u{04FF}')
}

fn is_greek(c: char) -> bool {
    matches!(c, '\u{0370}'..='\u{03FF}')
}

fn is_accented_latin(c: char) -> bool {
    matches!(
        c,
        'á' | 'é' | 'í' | 'ó' | 'ú' | 'ñ' | 'ü'
            | 'Á' | 'É' | 'Í' | 'Ó' | 'Ú' | 'Ñ' | 'Ü'
            | '¿' | '¡'
            | 'à' | 'è' | 'ì' | 'ò' | 'ù'
    )
}

fn is_spanish_punctuation(c: char) -> bool {
    matches!(c, '¿' | '¡')
}

/// Per-script character counts for a piece of text
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScriptProfile {
    pub bengali: usize,
    pub chinese: usize,
    pub arabic: usize,
    pub cyrillic: usize,
    pub greek: usize,
    pub accented: usize,
    /// Letters left after removing whitespace, digits and punctuation
    pub total_chars: usize,
}

impl ScriptProfile {
    /// Count script characters in the raw (not lower-cased) text
    pub fn analyze(text: &str) -> Self {
        let mut profile = Self {
            total_chars: LETTER.find_iter(text).count(),
            ..Self::default()
        };

        for c in text.chars() {
            if is_bengali(c) {
                profile.bengali += 1;
            }
            if is_chinese(c) {
                profile.chinese += 1;
            }
            if is_arabic(c) {
                profile.arabic += 1;
            }
            if is_cyrillic(c) {
                profile.cyrillic += 1;
            }
            if is_greek(c) {
                profile.greek += 1;
            }
            if is_accented_latin(c) {
                profile.accented += 1;
            }
        }

        profile
    }

    /// Share of `count` relative to the letter total
    pub fn ratio(&self, count: usize) -> f64 {
        count as f64 / self.total_chars.max(1) as f64
    }

    /// First non-Latin script above threshold, checked in fixed order
    fn dominant_unsupported_script(&self) -> Option<Language> {
        if self.ratio(self.chinese) > SCRIPT_THRESHOLD {
            Some(Language::Chinese)
        } else if self.ratio(self.arabic) > SCRIPT_THRESHOLD {
            Some(Language::Arabic)
        } else if self.ratio(self.cyrillic) > SCRIPT_THRESHOLD {
            Some(Language::Russian)
        } else if self.ratio(self.greek) > SCRIPT_THRESHOLD {
            Some(Language::Greek)
        } else {
            None
        }
    }
}

/// Number of Spanish indicator words occurring as substrings
fn spanish_word_count(text_lower: &str) -> usize {
    SPANISH_INDICATORS
        .iter()
        .filter(|word| text_lower.contains(*word))
        .count()
}

fn has_french_word(text_lower: &str) -> bool {
    FRENCH_INDICATORS.iter().any(|word| text_lower.contains(word))
}

/// Classify `text` into a language bucket.
///
/// Precedence: empty/symbolic input, then Chinese, Arabic, Cyrillic and Greek
/// script share, then Bengali, then Spanish punctuation or two Spanish
/// indicator words, then the accented-Latin branch. Everything else is
/// English.
///
/// Accented text with no recognised indicator word falls back to French.
/// This is a weak tie-break and misfiles e.g. Portuguese or Italian.
pub fn detect_language(text: &str) -> Language {
    let text_lower = text.to_lowercase();
    let profile = ScriptProfile::analyze(text);

    if profile.total_chars == 0 {
        return Language::English;
    }

    if let Some(language) = profile.dominant_unsupported_script() {
        return language;
    }

    if profile.ratio(profile.bengali) > SCRIPT_THRESHOLD {
        return Language::Bangla;
    }

    let spanish_words = spanish_word_count(&text_lower);
    if text.chars().any(is_spanish_punctuation) || spanish_words >= 2 {
        return Language::Spanish;
    }

    if profile.ratio(profile.accented) > ACCENT_THRESHOLD {
        if has_french_word(&text_lower) {
            return Language::French;
        }
        if spanish_words >= 1 {
            return Language::Spanish;
        }
        return Language::French;
    }

    Language::English
}

/// Stateless detector handle for callers that want a value to pass around
#[derive(Debug, Clone, Copy, Default)]
pub struct LanguageDetector;

impl LanguageDetector {
    pub fn new() -> Self {
        Self
    }

    pub fn detect(&self, text: &str) -> Language {
        detect_language(text)
    }
}
