//! Route gate wrapping every page that needs a signed-in user.
//!
//! DESIGN
//! ======
//! One component parameterized by an optional role. The decision itself lives
//! in `util::auth::gate_decision`; this file only renders it and performs the
//! login redirect.

use api_client::UserType;
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::AuthState;
use crate::util::auth::{GateDecision, gate_decision, home_route_for, login_url};

/// Render `children` only for a signed-in user (with `role`, when given).
#[component]
pub fn AuthGate(#[prop(optional)] role: Option<UserType>, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let location = use_location();
    let decision = Memo::new(move |_| gate_decision(&auth.get(), role));

    Effect::new(move || {
        if decision.get() == GateDecision::RedirectToLogin {
            let from = location.pathname.get_untracked();
            navigate(&login_url(&from), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || match decision.get() {
        GateDecision::Loading => view! {
            <div class="gate gate--loading">
                <p>"Cargando..."</p>
            </div>
        }
        .into_any(),
        GateDecision::RedirectToLogin => ().into_any(),
        GateDecision::Denied { role } => view! { <AccessDenied role=role/> }.into_any(),
        GateDecision::Allow => children().into_any(),
    }
}

/// Shown to a signed-in user whose role may not open the page.
#[component]
pub fn AccessDenied(role: UserType) -> impl IntoView {
    view! {
        <section class="access-denied">
            <h2>"Acceso denegado"</h2>
            <p>
                {format!("Tu cuenta de tipo {} no tiene permiso para ver esta página.", role.label())}
            </p>
            <a class="btn btn--primary" href=home_route_for(role)>
                "Ir a mi inicio"
            </a>
        </section>
    }
}
