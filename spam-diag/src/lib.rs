//! spam-diag: diagnostics for the spam-detection service
//!
//! Library behind three standalone tools:
//!
//! - `check-db`: verifies the Postgres database is reachable and prints
//!   table names, row counts and sample users
//! - `api-smoke`: logs in to the HTTP API and submits multilingual sample
//!   messages to the prediction endpoint
//! - `language-check`: runs the rule-based language detector over the
//!   fixed samples and reports pass/fail and backend support
//!
//! # Example
//!
//! ```
//! use spam_diag::language::{detect_language, Language};
//!
//! assert_eq!(detect_language("¡Felicitaciones! Has ganado"), Language::Spanish);
//! assert!(!detect_language("你好，你赢了1000元").is_supported());
//! ```
//!
//! # Modules
//!
//! - [`api`]: prediction API client
//! - [`config`]: configuration management
//! - [`db`]: database inspection
//! - [`error`]: error types
//! - [`language`]: language detection heuristic
//! - [`logging`]: tracing setup
//! - [`samples`]: sample messages

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod language;
pub mod logging;
pub mod samples;

// Re-export commonly used types
pub use config::DiagConfig;
pub use error::{DiagError, Result};
pub use language::{detect_language, Language};
