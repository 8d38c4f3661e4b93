//! Notion page and property-value model.

use serde::Deserialize;
use std::collections::HashMap;

/// One page returned by a database query.
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    pub id: String,
    #[serde(default)]
    pub properties: HashMap<String, Property>,
}

impl Page {
    /// Plain-text content of a named property. Absent properties and
    /// kinds without a text form extract as the empty string.
    pub fn plain_text(&self, name: &str) -> String {
        self.properties
            .get(name)
            .map(Property::plain_text)
            .unwrap_or_default()
    }

    /// Multi-select tag names of a named property, in order. Absent or
    /// non-multi-select properties extract as an empty list.
    pub fn tag_names(&self, name: &str) -> Vec<String> {
        self.properties
            .get(name)
            .map(Property::tag_names)
            .unwrap_or_default()
    }
}

/// A typed property value. Notion tags each property with a `type` field;
/// kinds this system never reads fall into `Other`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Property {
    Title { title: Vec<RichTextRun> },
    RichText { rich_text: Vec<RichTextRun> },
    MultiSelect { multi_select: Vec<SelectOption> },
    Checkbox { checkbox: bool },
    #[serde(other)]
    Other,
}

impl Property {
    /// Concatenate the plain-text segments of a title or rich-text run
    /// sequence, in order, with no separator. Other kinds yield "".
    pub fn plain_text(&self) -> String {
        match self {
            Property::Title { title } => concat_runs(title),
            Property::RichText { rich_text } => concat_runs(rich_text),
            _ => String::new(),
        }
    }

    /// Multi-select option names in order; empty for every other kind.
    pub fn tag_names(&self) -> Vec<String> {
        match self {
            Property::MultiSelect { multi_select } => {
                multi_select.iter().map(|o| o.name.clone()).collect()
            }
            _ => Vec::new(),
        }
    }
}

fn concat_runs(runs: &[RichTextRun]) -> String {
    runs.iter().map(|r| r.plain_text.as_str()).collect()
}

/// One text run inside a title or rich-text property.
#[derive(Debug, Clone, Deserialize)]
pub struct RichTextRun {
    #[serde(default)]
    pub plain_text: String,
}

/// One multi-select option.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectOption {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_from(json: serde_json::Value) -> Page {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_title_segments_concatenate_in_order() {
        let page = page_from(serde_json::json!({
            "id": "p1",
            "properties": {
                "Pregunta": {
                    "type": "title",
                    "title": [
                        {"plain_text": "¿Cómo "},
                        {"plain_text": "solicito "},
                        {"plain_text": "financiación?"}
                    ]
                }
            }
        }));
        assert_eq!(page.plain_text("Pregunta"), "¿Cómo solicito financiación?");
    }

    #[test]
    fn test_rich_text_extracts_plain_text() {
        let page = page_from(serde_json::json!({
            "id": "p2",
            "properties": {
                "Respuesta": {
                    "type": "rich_text",
                    "rich_text": [{"plain_text": "Respuesta breve."}]
                }
            }
        }));
        assert_eq!(page.plain_text("Respuesta"), "Respuesta breve.");
    }

    #[test]
    fn test_multi_select_names_in_order() {
        let page = page_from(serde_json::json!({
            "id": "p3",
            "properties": {
                "Keywords": {
                    "type": "multi_select",
                    "multi_select": [{"name": "financiación"}, {"name": "enisa"}]
                }
            }
        }));
        assert_eq!(page.tag_names("Keywords"), vec!["financiación", "enisa"]);
        // A multi-select has no plain-text form.
        assert_eq!(page.plain_text("Keywords"), "");
    }

    #[test]
    fn test_unknown_kind_degrades_to_empty() {
        let page = page_from(serde_json::json!({
            "id": "p4",
            "properties": {
                "Web": {"type": "url", "url": "https://example.com"}
            }
        }));
        assert_eq!(page.plain_text("Web"), "");
        assert!(page.tag_names("Web").is_empty());
    }

    #[test]
    fn test_absent_property_is_empty() {
        let page = page_from(serde_json::json!({"id": "p5", "properties": {}}));
        assert_eq!(page.plain_text("Pregunta"), "");
        assert!(page.tag_names("Keywords").is_empty());
    }

    #[test]
    fn test_checkbox_deserializes() {
        let page = page_from(serde_json::json!({
            "id": "p6",
            "properties": {
                "Activo": {"type": "checkbox", "checkbox": true}
            }
        }));
        match page.properties.get("Activo") {
            Some(Property::Checkbox { checkbox }) => assert!(*checkbox),
            other => panic!("unexpected property: {other:?}"),
        }
    }
}
