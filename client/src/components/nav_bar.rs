//! Top navigation with role-aware links and the sign-out button.

use api_client::UserType;
use leptos::prelude::*;

use crate::app::{SessionHandle, use_deferred_navigate};
use crate::components::toast_stack::notify;
use crate::state::auth::AuthState;
use crate::state::ui::{ToastKind, UiState};

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let session = expect_context::<SessionHandle>();

    let signed_in = move || auth.with(|a| a.user.is_some());
    let has_role = move |role: UserType| auth.with(|a| a.has_role(role));
    let display_name = move || {
        auth.with(|a| a.user.as_ref().map(|u| u.display_name().to_owned()).unwrap_or_default())
    };

    let go_to = use_deferred_navigate();

    let on_sign_out = move |_| {
        session.with_value(|s| s.sign_out());
        ui.update(|u| u.menu_open = false);
        notify(ui, ToastKind::Info, "Sesión cerrada.");
        go_to.set(Some("/".to_owned()));
    };

    view! {
        <header class="nav">
            <a class="nav__brand" href="/">
                "🐾 Huellitas"
            </a>
            <button
                class="nav__toggle"
                aria-label="Menú"
                on:click=move |_| ui.update(|u| u.menu_open = !u.menu_open)
            >
                "☰"
            </button>
            <nav class="nav__links" class:nav__links--open=move || ui.with(|u| u.menu_open)>
                <a href="/">"Adoptar"</a>
                <a href="/perdidas">"Mascotas perdidas"</a>
                <Show
                    when=signed_in
                    fallback=|| {
                        view! {
                            <a href="/login">"Ingresar"</a>
                            <a class="btn btn--primary" href="/registro">
                                "Registrarse"
                            </a>
                        }
                    }
                >
                    <a href="/favoritos">"Favoritos"</a>
                    <a href="/solicitudes">"Solicitudes"</a>
                    <a href="/citas">"Citas"</a>
                    <Show when=move || has_role(UserType::Refugio)>
                        <a href="/panel">"Mi refugio"</a>
                    </Show>
                    <Show when=move || has_role(UserType::Admin)>
                        <a href="/admin">"Administración"</a>
                    </Show>
                    <a class="nav__user" href="/perfil">
                        {display_name}
                    </a>
                    <button class="btn btn--ghost" on:click=on_sign_out>
                        "Salir"
                    </button>
                </Show>
            </nav>
        </header>
    }
}
