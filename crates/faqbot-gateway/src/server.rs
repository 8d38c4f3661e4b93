//! HTTP server implementation using Axum.

use axum::http::Method;
use axum::http::header::CONTENT_TYPE;
use axum::{
    Router,
    routing::{get, post},
};
use faqbot_core::FaqbotConfig;
use faqbot_knowledge::KnowledgeBase;
use faqbot_leads::LeadBook;
use faqbot_notion::NotionClient;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared state for the gateway server. Nothing here is mutable; every
/// request goes straight to the Notion collaborator.
pub struct AppState {
    pub knowledge: KnowledgeBase,
    pub leads: LeadBook,
    pub start_time: std::time::Instant,
}

/// Build the Axum router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route(
            "/api/chat",
            post(super::routes::chat)
                .options(super::routes::preflight)
                .fallback(super::routes::method_not_allowed),
        )
        .route("/health", get(super::routes::health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
pub async fn start(config: &FaqbotConfig) -> anyhow::Result<()> {
    let client = NotionClient::new(config.notion.token.clone());
    let state = Arc::new(AppState {
        knowledge: KnowledgeBase::new(client.clone(), config.notion.knowledge_db.clone()),
        leads: LeadBook::new(client, config.notion.leads_db.clone()),
        start_time: std::time::Instant::now(),
    });

    let app = build_router(state);
    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("🌐 Chat gateway listening on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
