//! Snackbar notifications
//!
//! Queues the transient messages emitted by the sign-up flow and renders
//! them in a fixed stack. Messages auto-dismiss on the client and can
//! always be dismissed by hand.

use std::collections::VecDeque;

use leptos::prelude::*;

use crate::core::{Notification, Notifier, Severity};

/// Maximum number of messages kept on screen at once
const MAX_SNACKBARS: usize = 4;

/// How long a message stays up before dismissing itself
#[cfg(not(feature = "ssr"))]
const AUTO_DISMISS_MS: u32 = 6_000;

/// Queued message with a unique id for dismissal tracking.
#[derive(Clone, Debug)]
pub struct SnackbarItem {
    pub id: u64,
    pub notification: Notification,
}

/// Reactive snackbar queue, shareable by copy.
#[derive(Clone, Copy)]
pub struct SnackbarContext {
    queue: RwSignal<VecDeque<SnackbarItem>>,
    next_id: RwSignal<u64>,
}

impl SnackbarContext {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(VecDeque::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// Get the queue signal for the host component
    pub fn queue(&self) -> RwSignal<VecDeque<SnackbarItem>> {
        self.queue
    }

    /// Queue a message, dropping the oldest past the cap.
    pub fn push(&self, notification: Notification) {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        self.queue.update(|q| {
            q.push_back(SnackbarItem { id, notification });

            while q.len() > MAX_SNACKBARS {
                q.pop_front();
            }
        });
    }

    /// Remove a single message
    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.retain(|item| item.id != id));
    }

    /// Remove everything
    pub fn clear(&self) {
        self.queue.set(VecDeque::new());
    }
}

impl Default for SnackbarContext {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for SnackbarContext {
    fn notify(&self, notification: Notification) {
        self.push(notification);
    }
}

/// Provide the snackbar context to the component tree.
pub fn provide_snackbar_context() -> SnackbarContext {
    let ctx = SnackbarContext::new();
    provide_context(ctx);
    ctx
}

/// Get the snackbar context. Panics if no ancestor provided it.
pub fn use_snackbar() -> SnackbarContext {
    expect_context::<SnackbarContext>()
}

/// Fixed stack rendering the queued messages.
#[component]
pub fn SnackbarHost() -> impl IntoView {
    let snackbar = use_snackbar();

    view! {
        <div class="snackbar-stack">
            {move || {
                snackbar.queue().get().into_iter().map(|item| {
                    view! { <SnackbarToast item=item /> }
                }).collect_view()
            }}
        </div>
    }
}

/// Single message with a dismiss button and client-side auto-dismiss.
#[component]
fn SnackbarToast(item: SnackbarItem) -> impl IntoView {
    let snackbar = use_snackbar();
    let id = item.id;

    #[cfg(not(feature = "ssr"))]
    {
        use gloo_timers::future::TimeoutFuture;
        use leptos::task::spawn_local;

        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            snackbar.dismiss(id);
        });
    }

    let severity_class = match item.notification.severity {
        Severity::Success => "snackbar-success",
        Severity::Error => "snackbar-error",
    };

    view! {
        <div class=format!("snackbar {}", severity_class)>
            <p class="snackbar-message">{item.notification.message.clone()}</p>
            <button
                type="button"
                class="snackbar-dismiss"
                on:click=move |_| snackbar.dismiss(id)
            >
                "✕"
            </button>
        </div>
    }
}
