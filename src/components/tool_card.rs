//! Tool Card Component
//!
//! One card per tool, read-only until the user toggles edit mode. The card
//! exclusively owns its draft: entering edit mode (re)copies the persisted
//! values, cancel throws the draft away, commit sends one update carrying
//! all three fields when anything actually changed. A commit that changed
//! nothing goes back to read-only without touching the store.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::AppContext;
use crate::draft::ToolDraft;
use crate::models::Tool;
use crate::store::{store_patch_tool, store_remove_tool, use_app_store};

/// A single tool card with inline editing
#[component]
pub fn ToolCard(tool: Tool) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(ToolDraft::from_tool(&tool));

    // Incomplete records stay read-only; the persisted record is the single
    // source of truth for this check.
    let can_edit = tool.is_complete();

    let edit_source = tool.clone();
    let start_edit = move || {
        set_draft.set(ToolDraft::from_tool(&edit_source));
        set_editing.set(true);
    };

    let cancel_source = tool.clone();
    let cancel = move || {
        set_draft.set(ToolDraft::from_tool(&cancel_source));
        set_editing.set(false);
    };

    let commit_source = tool.clone();
    let commit = move || {
        set_editing.set(false);

        let submitted = draft.get();
        if !submitted.differs_from(&commit_source) {
            return;
        }
        let Some(id) = commit_source.id.clone() else {
            return;
        };
        if !ctx.begin_write(&id) {
            return;
        }

        spawn_local(async move {
            match commands::update_tool(&id, &submitted).await {
                Ok(()) => {
                    store_patch_tool(&store, &id, &submitted);
                    ctx.notify_success("Tool updated");
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[TOOL] update {} failed: {}", id, e).into(),
                    );
                }
            }
            ctx.end_write(&id);
        });
    };

    let delete_id = tool.id.clone();
    let delete = move || {
        let Some(id) = delete_id.clone() else {
            return;
        };
        if !ctx.begin_write(&id) {
            return;
        }

        spawn_local(async move {
            match commands::delete_tool(&id).await {
                Ok(()) => {
                    store_remove_tool(&store, &id);
                    ctx.notify_success("Tool removed");
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[TOOL] delete {} failed: {}", id, e).into(),
                    );
                }
            }
            ctx.end_write(&id);
        });
    };

    let display = tool.clone();
    view! {
        <div class="tool-card">
            {move || if editing.get() {
                let commit = commit.clone();
                let commit_on_enter = commit.clone();
                let cancel = cancel.clone();
                view! {
                    <div class="tool-card-edit">
                        <input
                            type="text"
                            class="card-edit-input"
                            prop:value=move || draft.get().title
                            on:input=move |ev| set_draft.update(|d| d.title = event_target_value(&ev))
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    commit_on_enter();
                                }
                            }
                        />
                        <textarea
                            class="card-edit-description"
                            prop:value=move || draft.get().description
                            on:input=move |ev| set_draft.update(|d| d.description = event_target_value(&ev))
                        ></textarea>
                        <input
                            type="text"
                            class="card-edit-input"
                            prop:value=move || draft.get().url
                            on:input=move |ev| set_draft.update(|d| d.url = event_target_value(&ev))
                        />
                        <div class="card-edit-actions">
                            <button class="save-btn" on:click=move |_| commit()>"Save"</button>
                            <button class="cancel-btn" on:click=move |_| cancel()>"Cancel"</button>
                        </div>
                    </div>
                }.into_any()
            } else {
                let display = display.clone();
                let start_edit = start_edit.clone();
                let delete = delete.clone();
                view! {
                    <div class="tool-card-body">
                        <a class="tool-title" href=display.url.clone() target="_blank">
                            {display.title.clone()}
                        </a>
                        <p class="tool-description">{display.description.clone()}</p>
                        <div class="card-actions">
                            <button
                                class="edit-btn"
                                disabled=!can_edit
                                on:click=move |_| start_edit()
                            >
                                "Edit"
                            </button>
                            <button class="delete-btn" on:click=move |_| delete()>"×"</button>
                        </div>
                    </div>
                }.into_any()
            }}
        </div>
    }
}
