//! # Faqbot Gateway
//! HTTP boundary: one method-routed chat endpoint plus a health probe.

pub mod routes;
pub mod server;

pub use server::{AppState, build_router, start};
