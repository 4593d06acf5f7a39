//! Error types for Ghostwriter.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Load error: {0}")]
    Load(String),

    #[error("Invalid length bucket: {0} (expected Short, Medium or Long)")]
    InvalidLength(String),

    #[error("Invalid language: {0} (expected English or Urduish)")]
    InvalidLanguage(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Classification error: {0}")]
    Classification(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(String),
}

pub type Result<T> = std::result::Result<T, Error>;
