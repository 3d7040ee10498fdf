//! Host Bridge Command Wrappers
//!
//! Frontend bindings to the remote document store, reached through the host
//! bridge. The store itself is opaque to this crate: four commands, no
//! schema validation, errors surface as rejected promises.

mod tool;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Render a rejected bridge value as a plain error string.
fn describe_error(err: JsValue) -> String {
    err.as_string()
        .or_else(|| {
            js_sys::JSON::stringify(&err)
                .ok()
                .and_then(|s| s.as_string())
        })
        .unwrap_or_else(|| format!("{err:?}"))
}

// Re-export all public items
pub use tool::*;
