//! Tool Drafts
//!
//! A draft is the locally-owned working copy of one tool's editable fields.
//! Each card (and the create form) owns exactly one; drafts never cross
//! component boundaries. Committing a draft sends all three fields, so the
//! only decision made here is whether anything differs at all.

use crate::models::Tool;

/// Working copy of a tool's editable fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolDraft {
    pub title: String,
    pub description: String,
    pub url: String,
}

impl ToolDraft {
    /// Copy the current field values out of a persisted tool.
    pub fn from_tool(tool: &Tool) -> Self {
        Self {
            title: tool.title.clone(),
            description: tool.description.clone(),
            url: tool.url.clone(),
        }
    }

    /// True when at least one field no longer matches the source tool.
    /// A commit with no difference must not issue a remote call.
    pub fn differs_from(&self, tool: &Tool) -> bool {
        self.title != tool.title || self.description != tool.description || self.url != tool.url
    }

    /// Promote a committed draft into the persisted representation.
    pub fn into_tool(self, id: Option<String>) -> Tool {
        Tool {
            id,
            title: self.title,
            description: self.description,
            url: self.url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tool() -> Tool {
        Tool {
            id: Some("a".into()),
            title: "X".into(),
            description: "Y".into(),
            url: "u".into(),
        }
    }

    #[test]
    fn fresh_draft_matches_its_source() {
        let tool = sample_tool();
        let draft = ToolDraft::from_tool(&tool);
        assert!(!draft.differs_from(&tool));
    }

    #[test]
    fn any_single_field_change_counts_as_a_difference() {
        let tool = sample_tool();

        let mut draft = ToolDraft::from_tool(&tool);
        draft.title = "X2".into();
        assert!(draft.differs_from(&tool));

        let mut draft = ToolDraft::from_tool(&tool);
        draft.description = "Y2".into();
        assert!(draft.differs_from(&tool));

        let mut draft = ToolDraft::from_tool(&tool);
        draft.url = "u2".into();
        assert!(draft.differs_from(&tool));
    }

    #[test]
    fn cancel_restores_the_source_values_exactly() {
        let tool = sample_tool();
        let mut draft = ToolDraft::from_tool(&tool);
        draft.title = "scratch".into();
        draft.url = "somewhere else".into();
        assert!(draft.differs_from(&tool));

        // Cancel is a reset back to the source tool.
        draft = ToolDraft::from_tool(&tool);
        assert!(!draft.differs_from(&tool));
        assert_eq!(draft.title, tool.title);
        assert_eq!(draft.description, tool.description);
        assert_eq!(draft.url, tool.url);
    }

    #[test]
    fn committed_draft_promotes_with_the_remote_id() {
        let draft = ToolDraft {
            title: "Grep".into(),
            description: "Searches text".into(),
            url: "https://example.com/grep".into(),
        };
        let tool = draft.clone().into_tool(Some("new-id".into()));
        assert_eq!(tool.id.as_deref(), Some("new-id"));
        assert_eq!(tool.title, draft.title);
        assert_eq!(tool.description, draft.description);
        assert_eq!(tool.url, draft.url);
    }
}
