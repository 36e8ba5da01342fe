//! Transient notifications.
//!
//! Pages call [`notify`] / [`notify_error`]; [`ToastStack`] renders the queue
//! held in `UiState` and each toast removes itself after `TOAST_TTL_MS`.

use api_client::ApiError;
use leptos::prelude::*;

use crate::state::ui::{ToastKind, UiState};

/// Queue a toast and schedule its dismissal.
pub fn notify(ui: RwSignal<UiState>, kind: ToastKind, message: impl Into<String>) {
    let message = message.into();
    let Some(id) = ui.try_update(|u| u.push_toast(kind, message)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(crate::state::ui::TOAST_TTL_MS).await;
        ui.try_update(|u| u.dismiss_toast(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

/// Report a failed call. Expired sessions already raised their own toast.
pub fn notify_error(ui: RwSignal<UiState>, error: &ApiError) {
    if !error.is_unauthorized() {
        notify(ui, ToastKind::Error, error.to_string());
    }
}

#[component]
pub fn ToastStack() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="toast-stack" aria-live="polite">
            {move || {
                ui.get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div class=toast.kind.css_class() role="status">
                                <span class="toast__message">{toast.message}</span>
                                <button
                                    class="toast__close"
                                    aria-label="Cerrar"
                                    on:click=move |_| ui.update(|u| u.dismiss_toast(id))
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
