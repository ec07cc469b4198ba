use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiagError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Login failed with status {0}")]
    LoginFailed(u16),

    #[error("Login response did not contain a token")]
    MissingToken,
}

pub type Result<T> = std::result::Result<T, DiagError>;
