//! Language detection module
//!
//! Heuristic classification of message text into the language buckets the
//! prediction backend distinguishes.

pub mod detector;
pub mod types;

pub use detector::{detect_language, LanguageDetector, ScriptProfile};
pub use types::{Language, SUPPORTED_LANGUAGES};
