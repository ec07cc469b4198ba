//! Language labels produced by the detector

use serde::{Deserialize, Serialize};
use std::fmt;

/// Languages the prediction backend accepts
pub const SUPPORTED_LANGUAGES: [Language; 3] =
    [Language::Bangla, Language::English, Language::Spanish];

/// Best-guess language bucket for a piece of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Bangla,
    Spanish,
    /// Unsupported
    French,
    /// Unsupported
    Chinese,
    /// Unsupported
    Arabic,
    /// Unsupported
    Russian,
    /// Unsupported
    Greek,
}

impl Language {
    /// Parse a lower-case label
    pub fn from_label(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "english" => Some(Self::English),
            "bangla" => Some(Self::Bangla),
            "spanish" => Some(Self::Spanish),
            "french" => Some(Self::French),
            "chinese" => Some(Self::Chinese),
            "arabic" => Some(Self::Arabic),
            "russian" => Some(Self::Russian),
            "greek" => Some(Self::Greek),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Bangla => "bangla",
            Self::Spanish => "spanish",
            Self::French => "french",
            Self::Chinese => "chinese",
            Self::Arabic => "arabic",
            Self::Russian => "russian",
            Self::Greek => "greek",
        }
    }

    /// Whether the prediction backend will classify this language
    pub fn is_supported(&self) -> bool {
        SUPPORTED_LANGUAGES.contains(self)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
