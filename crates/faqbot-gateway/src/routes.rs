//! Route handlers for the chat gateway.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::server::AppState;
use faqbot_leads::Lead;

/// Shown when a knowledge search fails server-side. The detail goes to
/// the log only.
pub const TECHNICAL_ERROR: &str = "Lo siento, ha ocurrido un error técnico. Por favor, contacta con nuestro equipo para una consulta personalizada sobre financiación ENISA.";

/// Health check endpoint.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "faqbot-gateway",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_secs": state.start_time.elapsed().as_secs(),
    }))
}

/// Plain OPTIONS probe on the chat endpoint: 200, empty body. Preflights
/// are answered by the CORS layer before they reach here.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Any verb other than POST/OPTIONS on the chat endpoint.
pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(serde_json::json!({ "error": "Method not allowed" })),
    )
        .into_response()
}

/// The chat endpoint: either a lead capture or a knowledge query. The
/// body is parsed from the raw string so malformed JSON stays a bad
/// request instead of a framework rejection.
pub async fn chat(State(state): State<Arc<AppState>>, body: String) -> Response {
    let payload: serde_json::Value = match serde_json::from_str(&body) {
        Ok(v) => v,
        Err(_) => return bad_request(),
    };

    // Lead capture branch: { action: "capture_lead", leadData: {...} }.
    // Failures come back as success=false receipts with a 200, not as
    // HTTP errors.
    if payload["action"].as_str() == Some("capture_lead") {
        let Some(data) = payload.get("leadData").filter(|d| d.is_object()) else {
            return bad_request();
        };
        let lead: Lead = match serde_json::from_value(data.clone()) {
            Ok(l) => l,
            Err(_) => return bad_request(),
        };

        let receipt = state.leads.capture(&lead).await;
        return (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": receipt.success,
                "message": receipt.message,
            })),
        )
            .into_response();
    }

    // Knowledge query branch: { message: "..." }.
    let Some(message) = payload["message"].as_str().filter(|m| !m.is_empty()) else {
        return bad_request();
    };

    tracing::info!(query = %message, "chat query");
    match state.knowledge.answer(message).await {
        Ok(answer) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "answer": answer,
                "timestamp": chrono::Utc::now().to_rfc3339(),
            })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Chat query failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "success": false,
                    "answer": TECHNICAL_ERROR,
                })),
            )
                .into_response()
        }
    }
}

fn bad_request() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({ "error": "Message is required" })),
    )
        .into_response()
}
