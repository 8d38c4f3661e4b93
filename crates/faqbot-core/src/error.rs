//! Error types shared across the faqbot crates.

use thiserror::Error;

/// Errors surfaced by faqbot components.
#[derive(Debug, Error)]
pub enum FaqbotError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Notion error: {0}")]
    Notion(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FaqbotError>;
