//! Knowledge-base record — a read-only view of one Notion page.

use faqbot_notion::Page;

// Property names of the knowledge database schema.
pub const PROP_QUESTION: &str = "Pregunta";
pub const PROP_ANSWER: &str = "Respuesta";
pub const PROP_KEYWORDS: &str = "Keywords";
pub const PROP_LINKS: &str = "Enlaces";
pub const PROP_ACTIVE: &str = "Activo";

/// One knowledge entry. Extraction degrades silently: a malformed page
/// yields empty fields and therefore a zero relevance score, never an
/// aborted search.
#[derive(Debug, Clone, Default)]
pub struct Record {
    pub question: String,
    pub answer: String,
    pub keywords: Vec<String>,
    /// Comma-separated `title|url` pairs, parsed by the formatter.
    pub links_raw: String,
}

impl Record {
    pub fn from_page(page: &Page) -> Self {
        Self {
            question: page.plain_text(PROP_QUESTION),
            answer: page.plain_text(PROP_ANSWER),
            keywords: page.tag_names(PROP_KEYWORDS),
            links_raw: page.plain_text(PROP_LINKS),
        }
    }
}
