//! Lead capture — validates nothing beyond what Notion enforces and
//! always answers with a user-facing receipt, never an HTTP error.

use chrono::Utc;
use faqbot_notion::NotionClient;
use serde::{Deserialize, Serialize};

// Property names of the leads database schema.
const PROP_NAME: &str = "Nombre";
const PROP_COMPANY: &str = "Empresa";
const PROP_EMAIL: &str = "Email";
const PROP_PHONE: &str = "Teléfono";
const PROP_DATE: &str = "Fecha";
const PROP_TRANSCRIPT: &str = "Conversación";
const PROP_STATUS: &str = "Estado";

/// Every lead starts in this state; the sales pipeline moves it later.
const INITIAL_STATUS: &str = "New";

/// Stored when the form carried no conversation transcript.
pub const TRANSCRIPT_PLACEHOLDER: &str = "Sin conversación registrada";

/// Receipt message on a successful write.
pub const LEAD_THANKS: &str = "¡Gracias por tu interés! Hemos recibido tus datos y nuestro equipo se pondrá en contacto contigo muy pronto.";

/// Receipt message on any failure. The underlying error goes to the log
/// only, never to the end user.
pub const LEAD_APOLOGY: &str = "Lo sentimos, no hemos podido registrar tus datos en este momento. Por favor, inténtalo de nuevo más tarde o escríbenos directamente.";

/// One contact-form submission, as posted by the widget.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Lead {
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub empresa: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub telefono: String,
    #[serde(default)]
    pub conversacion: Option<String>,
}

/// Outcome reported back to the widget.
#[derive(Debug, Clone, Serialize)]
pub struct LeadReceipt {
    pub success: bool,
    pub message: String,
}

/// Writer for the leads database.
#[derive(Debug, Clone)]
pub struct LeadBook {
    client: NotionClient,
    database_id: String,
}

impl LeadBook {
    pub fn new(client: NotionClient, database_id: impl Into<String>) -> Self {
        Self {
            client,
            database_id: database_id.into(),
        }
    }

    /// Write one lead page. Fields pass through unchecked; an empty name
    /// may be rejected at the service boundary, which lands in the
    /// failure receipt rather than propagating.
    pub async fn capture(&self, lead: &Lead) -> LeadReceipt {
        let today = Utc::now().date_naive();
        let properties = build_properties(lead, &today.to_string());

        match self.client.create_page(&self.database_id, properties).await {
            Ok(()) => {
                tracing::info!(nombre = %lead.nombre, "lead captured");
                LeadReceipt {
                    success: true,
                    message: LEAD_THANKS.into(),
                }
            }
            Err(e) => {
                tracing::error!("Lead capture failed: {e}");
                LeadReceipt {
                    success: false,
                    message: LEAD_APOLOGY.into(),
                }
            }
        }
    }
}

/// Property bag for one lead page. `date` is date-only (YYYY-MM-DD),
/// no time component.
fn build_properties(lead: &Lead, date: &str) -> serde_json::Value {
    let transcript = lead
        .conversacion
        .as_deref()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or(TRANSCRIPT_PLACEHOLDER);

    serde_json::json!({
        PROP_NAME: { "title": [{ "text": { "content": lead.nombre } }] },
        PROP_COMPANY: { "rich_text": [{ "text": { "content": lead.empresa } }] },
        PROP_EMAIL: { "email": lead.email },
        PROP_PHONE: { "phone_number": lead.telefono },
        PROP_DATE: { "date": { "start": date } },
        PROP_TRANSCRIPT: { "rich_text": [{ "text": { "content": transcript } }] },
        PROP_STATUS: { "select": { "name": INITIAL_STATUS } },
    })
}
