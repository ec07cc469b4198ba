//! Prediction API client
//!
//! Logs in against the auth endpoint and submits messages to the
//! prediction endpoint with the bearer token.

pub mod client;
pub mod types;

pub use client::{run_smoke_test, ApiClient};
pub use types::*;
