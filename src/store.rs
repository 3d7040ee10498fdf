//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store owns
//! the authoritative in-memory tool list; all mutations go through the
//! helpers below, which apply the reconciliation rules from `collection`.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::collection;
use crate::draft::ToolDraft;
use crate::models::Tool;

/// Global application state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All known tools, in display order
    pub tools: Vec<Tool>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole list from a full load
pub fn store_replace_tools(store: &AppStore, tools: Vec<Tool>) {
    *store.tools().write() = tools;
}

/// Append a newly persisted tool
pub fn store_append_tool(store: &AppStore, tool: Tool) {
    collection::append_tool(&mut store.tools().write(), tool);
}

/// Merge a successfully written draft into the entry with this id
pub fn store_patch_tool(store: &AppStore, id: &str, draft: &ToolDraft) {
    collection::patch_tool(&mut store.tools().write(), id, draft);
}

/// Remove a tool from the store by id
pub fn store_remove_tool(store: &AppStore, id: &str) {
    collection::remove_tool(&mut store.tools().write(), id);
}
