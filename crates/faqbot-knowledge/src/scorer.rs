//! Relevance scoring — the handwritten keyword/token heuristic.

use crate::record::Record;

/// Added once per keyword contained in the query.
pub const KEYWORD_WEIGHT: f32 = 0.3;
/// Added once per question token (longer than 3 chars) contained in some
/// query token.
pub const TOKEN_WEIGHT: f32 = 0.2;
/// A best match at or below this score falls back to the canned reply.
/// The weights and threshold are behavioral contracts, not tunables.
pub const MATCH_THRESHOLD: f32 = 0.1;

/// Score one record against a lowercased query string.
/// Non-negative and uncapped; heavy overlap can exceed 1.0.
pub fn relevance(record: &Record, query: &str) -> f32 {
    let mut score = 0.0;

    for keyword in &record.keywords {
        if query.contains(&keyword.to_lowercase()) {
            score += KEYWORD_WEIGHT;
        }
    }

    let query_tokens: Vec<&str> = query.split_whitespace().collect();
    for word in record.question.to_lowercase().split_whitespace() {
        if word.chars().count() > 3 && query_tokens.iter().any(|t| t.contains(word)) {
            score += TOKEN_WEIGHT;
        }
    }

    score
}
