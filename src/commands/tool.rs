//! Tool Commands
//!
//! Frontend bindings for the four store operations. Each call is
//! fire-and-forget beyond its single Result: no retry, no timeout.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{describe_error, invoke};
use crate::draft::ToolDraft;
use crate::models::Tool;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct CreateToolArgs<'a> {
    title: &'a str,
    description: &'a str,
    url: &'a str,
}

#[derive(Serialize)]
struct UpdateToolArgs<'a> {
    id: &'a str,
    title: &'a str,
    description: &'a str,
    url: &'a str,
}

#[derive(Serialize)]
struct IdArgs<'a> {
    id: &'a str,
}

// ========================
// Commands
// ========================

pub async fn list_tools() -> Result<Vec<Tool>, String> {
    let result = invoke("list_tools", JsValue::NULL)
        .await
        .map_err(describe_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Persist a new tool; the store assigns and returns its id.
pub async fn create_tool(draft: &ToolDraft) -> Result<String, String> {
    let args = CreateToolArgs {
        title: &draft.title,
        description: &draft.description,
        url: &draft.url,
    };
    let js_args = serde_wasm_bindgen::to_value(&args).map_err(|e| e.to_string())?;
    let result = invoke("create_tool", js_args).await.map_err(describe_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Overwrite the editable fields of an existing tool. Always carries all
/// three fields; the caller decides whether a call is warranted at all.
pub async fn update_tool(id: &str, draft: &ToolDraft) -> Result<(), String> {
    let args = UpdateToolArgs {
        id,
        title: &draft.title,
        description: &draft.description,
        url: &draft.url,
    };
    let js_args = serde_wasm_bindgen::to_value(&args).map_err(|e| e.to_string())?;
    invoke("update_tool", js_args).await.map_err(describe_error)?;
    Ok(())
}

pub async fn delete_tool(id: &str) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    invoke("delete_tool", js_args).await.map_err(describe_error)?;
    Ok(())
}
