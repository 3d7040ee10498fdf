//! Toast Component
//!
//! Renders the current success notification from the app context.
//! The context owns the auto-dismiss timer; this is display only.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn Toast() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        {move || ctx.toast.get().map(|message| view! {
            <div class="toast success">{message}</div>
        })}
    }
}
