//! Email + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use api_client::types::Credentials;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::app::{SessionHandle, use_deferred_navigate};
use crate::components::toast_stack::notify;
use crate::state::auth::AuthState;
use crate::state::ui::{ToastKind, UiState};
use crate::util::auth::{home_route_for, safe_redirect};

fn validate_credentials(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Ingresa tu email y contraseña.");
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let query = use_query_map();
    let go_to = use_deferred_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    // Signed in (now or already): leave for the requested page or the role's home.
    Effect::new(move || {
        let Some(role) = auth.with(AuthState::role) else {
            return;
        };
        let target = query
            .with(|q| q.get("redirect"))
            .and_then(|raw| safe_redirect(Some(&raw)).map(str::to_owned))
            .unwrap_or_else(|| home_route_for(role).to_owned());
        go_to.set(Some(target));
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_credentials(&email.get(), &password.get()) {
            Ok(c) => c,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let session = session.get_value();
            leptos::task::spawn_local(async move {
                match session.sign_in(&credentials).await {
                    Ok(response) => {
                        notify(ui, ToastKind::Success, format!("¡Hola, {}!", response.user.display_name()));
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (credentials, session, ui);
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Ingresar"</h1>
                <label>
                    "Email"
                    <input
                        type="email"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Contraseña"
                    <input
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Ingresando..." } else { "Ingresar" }}
                </button>
                <p class="auth-card__links">
                    <a href="/recuperar">"¿Olvidaste tu contraseña?"</a>
                    " · "
                    <a href="/registro">"Crear una cuenta"</a>
                </p>
            </form>
        </div>
    }
}
