//! Admin dashboard: platform stats and the user directory.

use api_client::types::DashboardStats;
use api_client::{User, UserType};
use leptos::prelude::*;

use crate::app::SessionHandle;
use crate::components::auth_gate::AuthGate;
use crate::components::toast_stack::notify_error;
use crate::pages::shelter_panel::StatsGrid;
use crate::state::ui::UiState;

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <AuthGate role=UserType::Admin>
            <AdminDashboard/>
        </AuthGate>
    }
}

#[component]
fn AdminDashboard() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let ui = expect_context::<RwSignal<UiState>>();
    let stats = RwSignal::new(None::<DashboardStats>);
    let users = RwSignal::new(Vec::<User>::new());
    let filter = RwSignal::new(None::<UserType>);

    #[cfg(feature = "hydrate")]
    {
        let session = session.get_value();
        leptos::task::spawn_local(async move {
            match session.api().dashboard_stats().await {
                Ok(found) => stats.set(Some(found)),
                Err(e) => notify_error(ui, &e),
            }
            match session.api().list_users().await {
                Ok(list) => users.set(list),
                Err(e) => notify_error(ui, &e),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (session, ui);

    let visible = move || {
        let role = filter.get();
        users.with(|list| list.iter().filter(|u| role.is_none_or(|r| u.user_type == r)).cloned().collect::<Vec<_>>())
    };

    view! {
        <section class="page admin">
            <h1>"Administración"</h1>
            {move || stats.get().map(|s| view! { <StatsGrid stats=s/> })}
            <header class="admin__users-header">
                <h2>"Usuarios"</h2>
                <select on:change=move |ev| filter.set(UserType::parse(&event_target_value(&ev)))>
                    <option value="">"Todos los tipos"</option>
                    {UserType::REGISTRABLE
                        .into_iter()
                        .chain([UserType::Admin])
                        .map(|t| view! { <option value=t.as_str()>{t.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </header>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Nombre"</th>
                        <th>"Email"</th>
                        <th>"Teléfono"</th>
                        <th>"Tipo"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        visible()
                            .into_iter()
                            .map(|user| {
                                view! {
                                    <tr>
                                        <td>{user.display_name().to_owned()}</td>
                                        <td>{user.email.clone()}</td>
                                        <td>{user.phone.clone().unwrap_or_default()}</td>
                                        <td>{user.user_type.label()}</td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
        </section>
    }
}
