//! Top-right toast container plus push helpers.
//!
//! Pushing schedules the toast's own dismissal after
//! [`TOAST_DURATION_MS`]; clicking a toast dismisses it early.

use leptos::prelude::*;

use crate::state::toast::{TOAST_DURATION_MS, Toast, ToastKind, ToastState};

/// Push a success toast and schedule its auto-dismissal.
pub fn success(toasts: RwSignal<ToastState>, message: impl Into<String>) {
    push(toasts, ToastKind::Success, message.into());
}

/// Push an error toast and schedule its auto-dismissal.
pub fn error(toasts: RwSignal<ToastState>, message: impl Into<String>) {
    push(toasts, ToastKind::Error, message.into());
}

fn push(toasts: RwSignal<ToastState>, kind: ToastKind, message: String) {
    let mut id = 0;
    toasts.update(|state| id = state.push(kind, message));
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
        toasts.update(|state| state.dismiss(id));
    });
}

/// Fixed top-right container rendering the toast queue, newest last.
#[component]
pub fn ToastContainer() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-container">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                    };
                    view! {
                        <div class=class on:click=move |_| toasts.update(|state| state.dismiss(id))>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
