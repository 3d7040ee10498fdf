//! Tool Shelf Frontend App
//!
//! Page-level component: owns the store, loads the collection once on
//! mount, and lays out the create form, the card list, and the toast.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{NewToolForm, Toast, ToolList};
use crate::context::AppContext;
use crate::store::{store_replace_tools, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());

    // Provide state to all children
    provide_context(store);
    provide_context(AppContext::new());

    // Load the full collection once on mount. A failure leaves the list
    // empty; there is no retry beyond reloading the page.
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::list_tools().await {
                Ok(tools) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} tools", tools.len()).into());
                    store_replace_tools(&store, tools);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[APP] initial load failed: {}", e).into());
                }
            }
        });
    });

    view! {
        <main class="app-layout">
            <h1>"Tool Shelf"</h1>

            <NewToolForm/>

            <ToolList/>

            <p class="tool-count">{move || format!("{} tools", store.tools().get().len())}</p>

            <Toast/>
        </main>
    }
}
