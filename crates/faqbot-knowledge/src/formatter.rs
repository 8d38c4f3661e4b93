//! Answer formatting — lightweight markup to display HTML, plus the
//! `title|url` link list.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

use crate::record::Record;

/// Shown when a matched answer cannot be rendered.
pub const EXTRACTION_ERROR: &str = "Error al procesar la respuesta.";

const H4_STYLE: &str = "margin:10px 0 5px 0;font-weight:600;color:#2c5f2d";
const H3_STYLE: &str = "margin:12px 0 6px 0;font-weight:700;color:#1b3a5c";

/// Display-ready answer content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedAnswer {
    pub text: String,
    pub links: Vec<AnswerLink>,
}

/// One outbound link attached to an answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerLink {
    pub title: String,
    pub url: String,
}

/// Build the display structure for a matched record.
pub fn format_answer(record: &Record) -> FormattedAnswer {
    FormattedAnswer {
        text: render_text(&record.answer),
        links: parse_links(&record.links_raw),
    }
}

/// Translate raw answer markup into display HTML.
///
/// Rule order is load-bearing: every line-anchored rule (bullets,
/// headings) runs before the newline collapse, and `###` before `##`.
pub fn render_text(raw: &str) -> String {
    static BOLD: OnceLock<Regex> = OnceLock::new();
    static ITALIC: OnceLock<Regex> = OnceLock::new();
    static BULLET: OnceLock<Regex> = OnceLock::new();
    static H4: OnceLock<Regex> = OnceLock::new();
    static H3: OnceLock<Regex> = OnceLock::new();

    let bold = BOLD.get_or_init(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
    let italic = ITALIC.get_or_init(|| Regex::new(r"\*(.+?)\*").unwrap());
    let bullet = BULLET.get_or_init(|| Regex::new(r"(?m)^- ").unwrap());
    let h4 = H4.get_or_init(|| Regex::new(r"(?m)^### (.*)").unwrap());
    let h3 = H3.get_or_init(|| Regex::new(r"(?m)^## (.*)").unwrap());

    let text = bold.replace_all(raw, "<strong>$1</strong>");
    let text = italic.replace_all(&text, "<em>$1</em>");
    let text = bullet.replace_all(&text, "• ");
    let text = h4.replace_all(&text, format!("<h4 style=\"{H4_STYLE}\">$1</h4>").as_str());
    let text = h3.replace_all(&text, format!("<h3 style=\"{H3_STYLE}\">$1</h3>").as_str());
    text.replace('\n', "<br>")
}

/// Parse the comma-separated `title|url` pair list. Pairs missing either
/// half (after trimming) are dropped; order is preserved.
pub fn parse_links(raw: &str) -> Vec<AnswerLink> {
    raw.split(',')
        .filter_map(|pair| {
            let (title, url) = pair.split_once('|')?;
            let title = title.trim();
            let url = url.trim();
            if title.is_empty() || url.is_empty() {
                return None;
            }
            Some(AnswerLink {
                title: title.into(),
                url: url.into(),
            })
        })
        .collect()
}
