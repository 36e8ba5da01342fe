//! Account profile and password change.

use leptos::prelude::*;

use crate::app::SessionHandle;
use crate::components::auth_gate::AuthGate;
use crate::components::toast_stack::notify;
use crate::state::auth::AuthState;
use crate::state::profile::{PasswordForm, ProfileForm};
use crate::state::ui::{ToastKind, UiState};

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <AuthGate>
            <section class="page profile">
                <h1>"Mi perfil"</h1>
                <ProfileSection/>
                <PasswordSection/>
            </section>
        </AuthGate>
    }
}

#[component]
fn ProfileSection() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let form = RwSignal::new(auth.with_untracked(|a| a.user.as_ref().map(ProfileForm::from).unwrap_or_default()));
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(current) = auth.with_untracked(|a| a.user.clone()) else {
            return;
        };
        let update = match form.with(|f| f.to_update(&current)) {
            Ok(update) => update,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            let session = session.get_value();
            leptos::task::spawn_local(async move {
                match session.update_profile(&update).await {
                    Ok(user) => {
                        form.set(ProfileForm::from(&user));
                        notify(ui, ToastKind::Success, "Perfil actualizado.");
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (update, session, ui);
    };

    let email = move || auth.with(|a| a.user.as_ref().map(|u| u.email.clone()).unwrap_or_default());
    let role = move || auth.with(|a| a.role().map(|r| r.label()).unwrap_or_default());

    view! {
        <form class="card form" on:submit=on_submit>
            <h2>"Datos personales"</h2>
            <p class="profile__identity">{email} " · " {role}</p>
            <label>
                "Nombre"
                <input
                    type="text"
                    autocomplete="name"
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
            </label>
            <label>
                "Teléfono"
                <input
                    type="tel"
                    autocomplete="tel"
                    prop:value=move || form.with(|f| f.phone.clone())
                    on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                />
            </label>
            <Show when=move || error.get().is_some()>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Guardando..." } else { "Guardar cambios" }}
            </button>
        </form>
    }
}

#[component]
fn PasswordSection() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let ui = expect_context::<RwSignal<UiState>>();
    let form = RwSignal::new(PasswordForm::default());
    let errors = RwSignal::new(Vec::<String>::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let change = match form.with(PasswordForm::validate) {
            Ok(change) => change,
            Err(messages) => {
                errors.set(messages.into_iter().map(str::to_owned).collect());
                return;
            }
        };
        errors.set(Vec::new());
        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            let session = session.get_value();
            leptos::task::spawn_local(async move {
                match session.api().change_password(&change).await {
                    Ok(()) => {
                        form.set(PasswordForm::default());
                        notify(ui, ToastKind::Success, "Contraseña actualizada.");
                    }
                    Err(e) => errors.set(vec![e.to_string()]),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (change, session, ui);
    };

    view! {
        <form class="card form" on:submit=on_submit>
            <h2>"Cambiar contraseña"</h2>
            <label>
                "Contraseña actual"
                <input
                    type="password"
                    autocomplete="current-password"
                    prop:value=move || form.with(|f| f.current.clone())
                    on:input=move |ev| form.update(|f| f.current = event_target_value(&ev))
                />
            </label>
            <label>
                "Nueva contraseña"
                <input
                    type="password"
                    autocomplete="new-password"
                    prop:value=move || form.with(|f| f.new_password.clone())
                    on:input=move |ev| form.update(|f| f.new_password = event_target_value(&ev))
                />
            </label>
            <label>
                "Confirmar nueva contraseña"
                <input
                    type="password"
                    autocomplete="new-password"
                    prop:value=move || form.with(|f| f.confirm.clone())
                    on:input=move |ev| form.update(|f| f.confirm = event_target_value(&ev))
                />
            </label>
            <Show when=move || !errors.with(Vec::is_empty)>
                <ul class="form-error">
                    {move || errors.get().into_iter().map(|e| view! { <li>{e}</li> }).collect::<Vec<_>>()}
                </ul>
            </Show>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Actualizando..." } else { "Cambiar contraseña" }}
            </button>
        </form>
    }
}
