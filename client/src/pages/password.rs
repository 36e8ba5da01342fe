//! Forgot-password and reset-password screens.
//!
//! The backend emails a link to `/restablecer?token=...`; the reset screen
//! reads the token from the query string.

use api_client::types::PasswordReset;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::app::{SessionHandle, use_deferred_navigate};
use crate::components::toast_stack::notify;
use crate::state::registration::password_errors;
use crate::state::ui::{ToastKind, UiState};

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(None::<(bool, String)>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let address = email.get().trim().to_owned();
        if address.is_empty() {
            message.set(Some((false, "Ingresa tu email.".to_owned())));
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            let session = session.get_value();
            leptos::task::spawn_local(async move {
                let outcome = match session.api().forgot_password(&address).await {
                    Ok(()) => (true, "Si el email está registrado, recibirás un enlace para restablecer tu contraseña.".to_owned()),
                    Err(e) => (false, e.to_string()),
                };
                message.set(Some(outcome));
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (address, session);
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Recuperar contraseña"</h1>
                <label>
                    "Email"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                {move || {
                    message
                        .get()
                        .map(|(ok, text)| {
                            view! { <p class=if ok { "form-info" } else { "form-error" }>{text}</p> }
                        })
                }}
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Enviar enlace"
                </button>
                <p class="auth-card__links">
                    <a href="/login">"Volver a ingresar"</a>
                </p>
            </form>
        </div>
    }
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let ui = expect_context::<RwSignal<UiState>>();
    let query = use_query_map();
    let go_to = use_deferred_navigate();

    let token = move || query.with(|q| q.get("token")).unwrap_or_default();
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let errors = RwSignal::new(Vec::<String>::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let token = token();
        let mut found: Vec<String> = password_errors(&password.get(), &confirm.get())
            .into_iter()
            .map(str::to_owned)
            .collect();
        if token.trim().is_empty() {
            found.push("El enlace de recuperación no es válido.".to_owned());
        }
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        let reset = PasswordReset { token, new_password: password.get() };
        busy.set(true);
        errors.set(Vec::new());
        #[cfg(feature = "hydrate")]
        {
            let session = session.get_value();
            leptos::task::spawn_local(async move {
                match session.api().reset_password(&reset).await {
                    Ok(()) => {
                        notify(ui, ToastKind::Success, "Contraseña actualizada. Ya puedes ingresar.");
                        go_to.set(Some("/login".to_owned()));
                    }
                    Err(e) => errors.set(vec![e.to_string()]),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (reset, session, ui, go_to);
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Nueva contraseña"</h1>
                <label>
                    "Contraseña"
                    <input
                        type="password"
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Repite la contraseña"
                    <input
                        type="password"
                        autocomplete="new-password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || !errors.get().is_empty()>
                    <ul class="form-error">
                        {move || errors.get().into_iter().map(|e| view! { <li>{e}</li> }).collect::<Vec<_>>()}
                    </ul>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Guardar contraseña"
                </button>
            </form>
        </div>
    }
}
