//! Knowledge search orchestration — fetch, score, select, format.

use faqbot_core::error::Result;
use faqbot_notion::NotionClient;

use crate::formatter;
use crate::record::{PROP_ACTIVE, Record};
use crate::scorer::{MATCH_THRESHOLD, relevance};

/// Reply when the database holds no active records at all.
pub const NO_ACTIVE_RECORDS: &str = "No hay registros activos en la base de datos. Verifica que tengas registros con el checkbox 'Activo' marcado.";

/// Reply when nothing scores above the match threshold.
pub const NO_MATCH_FALLBACK: &str = "No he encontrado información específica sobre tu consulta. Te recomiendo que contactes directamente con nuestro equipo de consultores para una asesoría personalizada sobre financiación ENISA.";

/// The curated FAQ corpus, scored in full on every request.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    client: NotionClient,
    database_id: String,
}

impl KnowledgeBase {
    pub fn new(client: NotionClient, database_id: impl Into<String>) -> Self {
        Self {
            client,
            database_id: database_id.into(),
        }
    }

    /// Answer a free-text message: the best active record's formatted
    /// answer serialized as JSON, or a canned fallback string. Query
    /// failures propagate; the request handler owns the error envelope.
    pub async fn answer(&self, message: &str) -> Result<String> {
        let pages = self
            .client
            .query_checked(&self.database_id, PROP_ACTIVE)
            .await?;
        tracing::info!("Knowledge query: {} active record(s)", pages.len());

        if pages.is_empty() {
            return Ok(NO_ACTIVE_RECORDS.to_string());
        }

        let records: Vec<Record> = pages.iter().map(Record::from_page).collect();
        let query = message.to_lowercase();

        match select_best(&records, &query) {
            Some((record, score)) => {
                tracing::info!(score, question = %record.question, "best match");
                let formatted = formatter::format_answer(record);
                Ok(serde_json::to_string(&formatted)
                    .unwrap_or_else(|_| formatter::EXTRACTION_ERROR.to_string()))
            }
            None => Ok(NO_MATCH_FALLBACK.to_string()),
        }
    }
}

/// Scan every candidate tracking the strict maximum; ties keep the
/// first-seen record. None unless the best score clears the threshold.
pub fn select_best<'a>(records: &'a [Record], query: &str) -> Option<(&'a Record, f32)> {
    let mut best: Option<(&Record, f32)> = None;
    let mut max_score = 0.0_f32;

    for record in records {
        let score = relevance(record, query);
        if score > max_score {
            max_score = score;
            best = Some((record, score));
        }
    }

    best.filter(|(_, score)| *score > MATCH_THRESHOLD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use faqbot_core::error::FaqbotError;

    fn record(question: &str, keywords: &[&str]) -> Record {
        Record {
            question: question.into(),
            answer: format!("respuesta a {question}"),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            ..Record::default()
        }
    }

    #[test]
    fn test_select_best_picks_strict_maximum() {
        let records = vec![
            record("plazos de amortización", &["amortización"]),
            record("cómo solicito financiación", &["financiación", "solicitud"]),
        ];
        let (best, score) =
            select_best(&records, "cómo solicito financiación").unwrap();
        assert_eq!(best.question, "cómo solicito financiación");
        assert!(score > 0.1);
    }

    #[test]
    fn test_select_best_ties_keep_first_seen() {
        let records = vec![record("primera", &["consulta"]), record("segunda", &["consulta"])];
        // Both score exactly 0.3 from the keyword branch.
        let (best, _) = select_best(&records, "una consulta").unwrap();
        assert_eq!(best.question, "primera");
    }

    #[test]
    fn test_scores_at_threshold_fall_back() {
        // No candidate can land in (0, 0.1] with 0.3/0.2 weights, so the
        // observable boundary is zero overlap vs one hit.
        let records = vec![record("tema ajeno", &[])];
        assert!(select_best(&records, "sin relación alguna").is_none());
    }

    #[test]
    fn test_empty_candidate_list_has_no_best() {
        assert!(select_best(&[], "cualquier cosa").is_none());
    }

    #[test]
    fn test_fallback_messages_are_distinct() {
        assert_ne!(NO_ACTIVE_RECORDS, NO_MATCH_FALLBACK);
    }

    #[tokio::test]
    async fn test_answer_propagates_query_failure() {
        let client = NotionClient::new("secret").with_api_base("http://127.0.0.1:9/v1");
        let kb = KnowledgeBase::new(client, "db-unreachable");
        match kb.answer("¿cómo solicito financiación?").await {
            Err(FaqbotError::Notion(_)) => {}
            other => panic!("expected propagated Notion error, got {other:?}"),
        }
    }
}
