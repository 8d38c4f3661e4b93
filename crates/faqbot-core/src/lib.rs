//! # Faqbot Core
//! Shared configuration and error types.

pub mod config;
pub mod error;

pub use config::FaqbotConfig;
pub use error::{FaqbotError, Result};
