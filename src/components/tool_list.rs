//! Tool List Component
//!
//! Renders one card per tool in display order.

use leptos::prelude::*;

use crate::components::ToolCard;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ToolList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="tool-list">
            <For
                each=move || store.tools().get()
                key=|tool| {
                    // Key on every mutable field so a patched entry
                    // re-renders its card
                    (
                        tool.id.clone(),
                        tool.title.clone(),
                        tool.description.clone(),
                        tool.url.clone(),
                    )
                }
                children=move |tool| view! { <ToolCard tool=tool/> }
            />

            <Show when=move || store.tools().get().is_empty()>
                <p class="empty-note">"No tools yet. Add the first one above."</p>
            </Show>
        </div>
    }
}
