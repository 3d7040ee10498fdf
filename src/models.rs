//! Frontend Models
//!
//! Data structures matching remote store documents.

use serde::{Deserialize, Serialize};

/// One directory entry as persisted in the remote store.
///
/// `id` is assigned by the store on creation and is `None` only for
/// not-yet-persisted drafts. Field values are unvalidated display strings;
/// documents missing a field deserialize with that field empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
}

impl Tool {
    /// A record is complete when all three display fields are filled in.
    /// Incomplete records cannot be opened for editing.
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.description.is_empty() && !self.url.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_document_fields_deserialize_empty() {
        let tool: Tool = serde_json::from_str(r#"{"id":"a1","title":"Grep"}"#).unwrap();
        assert_eq!(tool.id.as_deref(), Some("a1"));
        assert_eq!(tool.title, "Grep");
        assert_eq!(tool.description, "");
        assert_eq!(tool.url, "");
    }

    #[test]
    fn completeness_requires_all_three_fields() {
        let mut tool = Tool {
            id: Some("a1".into()),
            title: "Grep".into(),
            description: "Searches text".into(),
            url: "https://example.com/grep".into(),
        };
        assert!(tool.is_complete());

        tool.url.clear();
        assert!(!tool.is_complete());
    }
}
