//! Application Context
//!
//! Shared state provided via Leptos Context API: the success toast and the
//! per-id in-flight write guard.

use std::collections::HashSet;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::inflight;

/// How long a success toast stays visible.
const TOAST_DISMISS_MS: u32 = 2500;

/// App-wide state provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current success notification, if any - read by the Toast component
    pub toast: RwSignal<Option<String>>,
    /// Monotonic toast counter, so an old timer never clears a newer toast
    toast_seq: RwSignal<u32>,
    /// Ids with an unsettled update/delete
    inflight: RwSignal<HashSet<String>>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            toast: RwSignal::new(None),
            toast_seq: RwSignal::new(0),
            inflight: RwSignal::new(HashSet::new()),
        }
    }

    /// Show a transient success notification, replacing any current one.
    pub fn notify_success(&self, message: &str) {
        self.toast.set(Some(message.to_string()));
        let seq = self.toast_seq.get_untracked() + 1;
        self.toast_seq.set(seq);

        let toast = self.toast;
        let toast_seq = self.toast_seq;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DISMISS_MS).await;
            if toast_seq.get_untracked() == seq {
                toast.set(None);
            }
        });
    }

    /// Claim an id for a write. False means a write for that id is still
    /// in flight and this one must be skipped.
    pub fn begin_write(&self, id: &str) -> bool {
        let mut claimed = false;
        self.inflight
            .update(|set| claimed = inflight::claim(set, id));
        claimed
    }

    /// Release an id once its write has settled.
    pub fn end_write(&self, id: &str) {
        self.inflight.update(|set| inflight::release(set, id));
    }
}
