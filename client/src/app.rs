//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds the one `SessionController` for the tab and bridges its
//! `watch` value into an `RwSignal<AuthState>`. In the browser it also
//! restores the persisted session and runs the background revalidation.
//! During SSR the session stays unresolved, so gated routes render their
//! loading placeholder until hydration takes over.

use std::sync::Arc;

use api_client::error::SESSION_EXPIRED_MESSAGE;
use api_client::{ClientConfig, SessionController};
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::hooks::use_navigate;
use leptos_router::{
    NavigateOptions, ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::components::toast_stack::{ToastStack, notify};
use crate::pages::{
    admin::AdminPage, appointments::AppointmentsPage, favorites::FavoritesPage, login::LoginPage,
    lost_pets::LostPetsPage, password::ForgotPasswordPage, password::ResetPasswordPage, pet_detail::PetDetailPage,
    pets::PetsPage, profile::ProfilePage, register::RegisterPage, requests::RequestsPage,
    shelter_panel::ShelterPanelPage,
};
use crate::state::auth::AuthState;
use crate::state::ui::{ToastKind, UiState};
use crate::util::auth::LOGIN_ROUTE;

/// Context handle for the session controller. `Copy`, so event handlers can
/// capture it without cloning the `Arc` up front.
pub type SessionHandle = StoredValue<Arc<SessionController>>;

/// Navigation trigger that can be captured by `Send` closures and async tasks:
/// set it to a path and an effect performs the navigation.
pub fn use_deferred_navigate() -> RwSignal<Option<String>> {
    let target = RwSignal::new(None::<String>);
    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(path) = target.get() {
            target.set(None);
            navigate(&path, NavigateOptions::default());
        }
    });
    target
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = crate::net::api::client_config();
    let session = crate::net::api::build_session(&config);
    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());

    session.api().on_unauthorized(Arc::new(move || {
        ui.try_update(UiState::mark_session_expired);
        notify(ui, ToastKind::Error, SESSION_EXPIRED_MESSAGE);
    }));

    #[cfg(feature = "hydrate")]
    {
        let bridge = Arc::clone(&session);
        leptos::task::spawn_local(async move {
            let mut rx = bridge.subscribe();
            loop {
                let next = AuthState::from(&*rx.borrow_and_update());
                auth.set(next);
                if rx.changed().await.is_err() {
                    break;
                }
            }
        });

        let restore = Arc::clone(&session);
        leptos::task::spawn_local(async move {
            if let Some(revalidation) = restore.initialize().await {
                let outcome = revalidation.run().await;
                log::debug!("session revalidation finished: {outcome:?}");
            }
        });
    }

    provide_context::<SessionHandle>(StoredValue::new(session));
    provide_context::<ClientConfig>(config);
    provide_context(auth);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/huellitas.css"/>
        <Title text="Huellitas"/>

        <Router>
            <NavBar/>
            <SessionExpiryRedirect/>
            <main class="content">
                <Routes fallback=|| view! { <p class="page__empty">"Página no encontrada."</p> }>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("registro") view=RegisterPage/>
                    <Route path=StaticSegment("recuperar") view=ForgotPasswordPage/>
                    <Route path=StaticSegment("restablecer") view=ResetPasswordPage/>
                    <Route path=StaticSegment("") view=PetsPage/>
                    <Route path=(StaticSegment("mascotas"), ParamSegment("id")) view=PetDetailPage/>
                    <Route path=StaticSegment("solicitudes") view=RequestsPage/>
                    <Route path=StaticSegment("citas") view=AppointmentsPage/>
                    <Route path=StaticSegment("favoritos") view=FavoritesPage/>
                    <Route path=StaticSegment("perdidas") view=LostPetsPage/>
                    <Route path=StaticSegment("perfil") view=ProfilePage/>
                    <Route path=StaticSegment("panel") view=ShelterPanelPage/>
                    <Route path=StaticSegment("admin") view=AdminPage/>
                </Routes>
            </main>
            <ToastStack/>
        </Router>
    }
}

/// Sends the user to `/login` whenever the backend rejects the session.
#[component]
fn SessionExpiryRedirect() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    let seen = StoredValue::new(ui.with_untracked(|u| u.session_expired_seq));

    Effect::new(move || {
        let seq = ui.with(|u| u.session_expired_seq);
        if seq != seen.get_value() {
            seen.set_value(seq);
            navigate(LOGIN_ROUTE, NavigateOptions::default());
        }
    });
}
