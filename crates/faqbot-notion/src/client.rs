//! Notion REST client — database query + page creation.

use faqbot_core::error::{FaqbotError, Result};
use serde::Deserialize;

use crate::types::Page;

const NOTION_API_BASE: &str = "https://api.notion.com/v1";
const NOTION_VERSION: &str = "2022-06-28";

/// Thin client over the Notion REST API.
#[derive(Debug, Clone)]
pub struct NotionClient {
    client: reqwest::Client,
    token: String,
    api_base: String,
}

impl NotionClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            token: token.into(),
            api_base: NOTION_API_BASE.into(),
        }
    }

    /// Point the client at a different API base (tests).
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path)
    }

    /// Query a database, returning every page matching `filter`. Follows
    /// the cursor until the service reports no more results.
    pub async fn query_database(
        &self,
        database_id: &str,
        filter: serde_json::Value,
    ) -> Result<Vec<Page>> {
        let mut pages = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let mut body = serde_json::json!({
                "filter": filter,
                "page_size": 100,
            });
            if let Some(ref c) = cursor {
                body["start_cursor"] = serde_json::json!(c);
            }

            let response = self
                .client
                .post(self.api_url(&format!("databases/{database_id}/query")))
                .header("Authorization", format!("Bearer {}", self.token))
                .header("Notion-Version", NOTION_VERSION)
                .json(&body)
                .send()
                .await
                .map_err(|e| FaqbotError::Notion(format!("Database query failed: {e}")))?;

            if !response.status().is_success() {
                let status = response.status();
                let error_text = response.text().await.unwrap_or_default();
                return Err(FaqbotError::Notion(format!(
                    "Database query error {status}: {error_text}"
                )));
            }

            let batch: QueryResponse = response
                .json()
                .await
                .map_err(|e| FaqbotError::Notion(format!("Invalid query response: {e}")))?;

            pages.extend(batch.results);
            match (batch.has_more, batch.next_cursor) {
                (true, Some(next)) => cursor = Some(next),
                _ => break,
            }
        }

        Ok(pages)
    }

    /// Query a database for pages whose named checkbox property is set.
    pub async fn query_checked(&self, database_id: &str, property: &str) -> Result<Vec<Page>> {
        self.query_database(
            database_id,
            serde_json::json!({
                "property": property,
                "checkbox": { "equals": true }
            }),
        )
        .await
    }

    /// Create one page in a database with the given property bag.
    pub async fn create_page(
        &self,
        database_id: &str,
        properties: serde_json::Value,
    ) -> Result<()> {
        let body = serde_json::json!({
            "parent": { "database_id": database_id },
            "properties": properties,
        });

        let response = self
            .client
            .post(self.api_url("pages"))
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Notion-Version", NOTION_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| FaqbotError::Notion(format!("Page create failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(FaqbotError::Notion(format!(
                "Page create error {status}: {error_text}"
            )));
        }

        tracing::debug!("Notion page created in {database_id}");
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    results: Vec<Page>,
    #[serde(default)]
    has_more: bool,
    #[serde(default)]
    next_cursor: Option<String>,
}
