//! # Faqbot Notion
//! Typed client for the Notion REST API — the system of record for both
//! knowledge entries and leads.
//!
//! Pages expose their properties as a `type`-tagged union; only the kinds
//! this system reads are modeled, everything else degrades to empty text.

pub mod client;
pub mod types;

pub use client::NotionClient;
pub use types::{Page, Property};
