//! Collection Reconciliation
//!
//! Pure helpers that keep the in-memory tool list converged with completed
//! remote mutations. Every mutation is applied exactly once: appends replace
//! an existing entry with the same id instead of duplicating it, patches and
//! removals match by id and touch nothing else. Display order is insertion
//! order and is preserved by all three.

use crate::draft::ToolDraft;
use crate::models::Tool;

/// Append a newly persisted tool. If the id is somehow already present the
/// existing entry is replaced in place, keeping the no-duplicates invariant.
pub fn append_tool(tools: &mut Vec<Tool>, tool: Tool) {
    if let Some(existing) = tools
        .iter_mut()
        .find(|t| t.id.is_some() && t.id == tool.id)
    {
        *existing = tool;
    } else {
        tools.push(tool);
    }
}

/// Merge a successfully written draft into the entry with the given id.
/// Unknown ids are ignored; the write already succeeded remotely and a
/// future full load will pick the entry up.
pub fn patch_tool(tools: &mut [Tool], id: &str, draft: &ToolDraft) {
    if let Some(tool) = tools.iter_mut().find(|t| t.id.as_deref() == Some(id)) {
        tool.title = draft.title.clone();
        tool.description = draft.description.clone();
        tool.url = draft.url.clone();
    }
}

/// Drop the entry with the given id after a confirmed remote delete.
pub fn remove_tool(tools: &mut Vec<Tool>, id: &str) {
    tools.retain(|t| t.id.as_deref() != Some(id));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool(id: &str, title: &str) -> Tool {
        Tool {
            id: Some(id.into()),
            title: title.into(),
            description: format!("{title} description"),
            url: format!("https://example.com/{id}"),
        }
    }

    #[test]
    fn append_keeps_insertion_order() {
        let mut tools = vec![tool("a", "Grep"), tool("b", "Sed")];
        append_tool(&mut tools, tool("c", "Awk"));

        assert_eq!(tools.len(), 3);
        assert_eq!(tools[2].id.as_deref(), Some("c"));
    }

    #[test]
    fn append_never_duplicates_an_id() {
        let mut tools = vec![tool("a", "Grep")];
        append_tool(&mut tools, tool("a", "Grep v2"));

        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].title, "Grep v2");
    }

    #[test]
    fn patch_merges_all_fields_into_the_matching_entry() {
        let mut tools = vec![tool("a", "X"), tool("b", "Sed")];
        tools[0].description = "Y".into();
        tools[0].url = "u".into();

        let draft = ToolDraft {
            title: "X2".into(),
            description: "Y".into(),
            url: "u".into(),
        };
        patch_tool(&mut tools, "a", &draft);

        assert_eq!(tools[0].title, "X2");
        assert_eq!(tools[0].description, "Y");
        assert_eq!(tools[0].url, "u");
        // The other entry is untouched.
        assert_eq!(tools[1].title, "Sed");
    }

    #[test]
    fn patch_with_unknown_id_is_a_no_op() {
        let mut tools = vec![tool("a", "Grep")];
        let before = tools.clone();

        patch_tool(&mut tools, "missing", &ToolDraft::default());
        assert_eq!(tools, before);
    }

    #[test]
    fn remove_drops_exactly_the_matching_id() {
        let mut tools = vec![tool("a", "Grep"), tool("b", "Sed")];
        remove_tool(&mut tools, "a");

        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].id.as_deref(), Some("b"));
    }

    #[test]
    fn remove_with_unknown_id_leaves_the_list_intact() {
        let mut tools = vec![tool("a", "Grep")];
        remove_tool(&mut tools, "b");
        assert_eq!(tools.len(), 1);
    }
}
