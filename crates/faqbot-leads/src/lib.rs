//! # Faqbot Leads
//! Contact-form capture — one Notion page per submission, written once
//! and never read back.

pub mod capture;

pub use capture::{Lead, LeadBook, LeadReceipt};
