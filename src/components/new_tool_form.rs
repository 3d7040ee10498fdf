//! New Tool Form Component
//!
//! Form for adding a new tool to the directory. Submission is not
//! validated client-side; the store accepts whatever fields are present.
//! The form draft is cleared only after the store confirms the write,
//! so a failed submit keeps the typed values for another attempt.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::commands;
use crate::draft::ToolDraft;
use crate::store::{store_append_tool, use_app_store};

/// Form for creating new tools
#[component]
pub fn NewToolForm() -> impl IntoView {
    let store = use_app_store();

    let (draft, set_draft) = signal(ToolDraft::default());
    let (save_failed, set_save_failed) = signal(false);

    let create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let submitted = draft.get();
        set_save_failed.set(false);

        spawn_local(async move {
            match commands::create_tool(&submitted).await {
                Ok(id) => {
                    store_append_tool(&store, submitted.into_tool(Some(id)));
                    set_draft.set(ToolDraft::default());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[TOOL] create failed: {}", e).into());
                    set_save_failed.set(true);
                }
            }
        });
    };

    view! {
        <form class="new-tool-form" on:submit=create>
            <div class="new-tool-row">
                <input
                    type="text"
                    placeholder="Title..."
                    prop:value=move || draft.get().title
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_draft.update(|d| d.title = input.value());
                    }
                />
                <input
                    type="text"
                    placeholder="Description..."
                    prop:value=move || draft.get().description
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_draft.update(|d| d.description = input.value());
                    }
                />
                <input
                    type="text"
                    placeholder="https://..."
                    prop:value=move || draft.get().url
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_draft.update(|d| d.url = input.value());
                    }
                />
                <button type="submit">"Add"</button>
            </div>

            <Show when=move || save_failed.get()>
                <p class="form-error">"Could not save the tool. Try again."</p>
            </Show>
        </form>
    }
}
