//! Shelter dashboard: stats and CRUD over the shelter's own pets.

use api_client::UserType;
use api_client::types::{DashboardStats, ImageUpload, Pet, PetDraft};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::app::SessionHandle;
use crate::components::auth_gate::AuthGate;
use crate::components::pet_form_modal::PetFormModal;
use crate::components::toast_stack::{notify, notify_error};
use crate::state::ui::{ToastKind, UiState};
use crate::util::format::format_age;

#[derive(Clone, Debug, PartialEq)]
enum Editor {
    Closed,
    New,
    Edit(Pet),
}

#[component]
pub fn ShelterPanelPage() -> impl IntoView {
    view! {
        <AuthGate role=UserType::Refugio>
            <ShelterPanel/>
        </AuthGate>
    }
}

#[component]
fn ShelterPanel() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let ui = expect_context::<RwSignal<UiState>>();
    let stats = RwSignal::new(None::<DashboardStats>);
    let pets = RwSignal::new(Vec::<Pet>::new());
    let editor = RwSignal::new(Editor::Closed);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let session = session.get_value();
        leptos::task::spawn_local(async move {
            match session.api().dashboard_stats().await {
                Ok(found) => stats.set(Some(found)),
                Err(e) => log::warn!("dashboard stats unavailable: {e}"),
            }
            match session.api().my_pets().await {
                Ok(list) => pets.set(list),
                Err(e) => notify_error(ui, &e),
            }
        });
    }

    let on_save = Callback::new(move |(draft, image): (PetDraft, Option<ImageUpload>)| {
        let editing = match editor.get_untracked() {
            Editor::Closed => return,
            Editor::New => None,
            Editor::Edit(pet) => Some(pet.id),
        };
        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            let session = session.get_value();
            leptos::task::spawn_local(async move {
                let result = match &editing {
                    Some(id) => session.api().update_pet(id, &draft, image.as_ref()).await,
                    None => session.api().create_pet(&draft, image.as_ref()).await,
                };
                match result {
                    Ok(saved) => {
                        pets.update(|list| match list.iter_mut().find(|p| p.id == saved.id) {
                            Some(slot) => *slot = saved,
                            None => list.insert(0, saved),
                        });
                        editor.set(Editor::Closed);
                        let message = if editing.is_some() { "Mascota actualizada." } else { "Mascota publicada." };
                        notify(ui, ToastKind::Success, message);
                    }
                    Err(e) => notify_error(ui, &e),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (editing, draft, image);
    });

    let on_delete = move |pet: Pet| {
        #[cfg(feature = "hydrate")]
        {
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message(&format!("¿Eliminar a {}?", pet.name)).ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let session = session.get_value();
            leptos::task::spawn_local(async move {
                match session.api().delete_pet(&pet.id).await {
                    Ok(()) => {
                        pets.update(|list| list.retain(|p| p.id != pet.id));
                        notify(ui, ToastKind::Info, "Mascota eliminada.");
                    }
                    Err(e) => notify_error(ui, &e),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (pet, session, ui);
    };

    view! {
        <section class="page panel">
            <header class="panel__header">
                <h1>"Panel del refugio"</h1>
                <button class="btn btn--primary" on:click=move |_| editor.set(Editor::New)>
                    "Nueva mascota"
                </button>
            </header>
            {move || stats.get().map(|s| view! { <StatsGrid stats=s/> })}
            <Show
                when=move || pets.with(|p| !p.is_empty())
                fallback=|| view! { <p class="page__empty">"Todavía no publicaste mascotas."</p> }
            >
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Nombre"</th>
                            <th>"Especie"</th>
                            <th>"Edad"</th>
                            <th>"Estado"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            pets.get()
                                .into_iter()
                                .map(|pet| {
                                    let edit_pet = pet.clone();
                                    let delete_pet = pet.clone();
                                    view! {
                                        <tr>
                                            <td><a href=format!("/mascotas/{}", pet.id)>{pet.name.clone()}</a></td>
                                            <td>{pet.species.label()}</td>
                                            <td>{format_age(pet.age_months)}</td>
                                            <td>{if pet.available { "Disponible" } else { "No disponible" }}</td>
                                            <td class="table__actions">
                                                <button
                                                    class="btn btn--ghost"
                                                    on:click=move |_| editor.set(Editor::Edit(edit_pet.clone()))
                                                >
                                                    "Editar"
                                                </button>
                                                <button
                                                    class="btn btn--danger"
                                                    on:click=move |_| on_delete(delete_pet.clone())
                                                >
                                                    "Eliminar"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </Show>
            {move || {
                let initial = match editor.get() {
                    Editor::Closed => return ().into_any(),
                    Editor::New => None,
                    Editor::Edit(pet) => Some(pet),
                };
                let on_cancel = Callback::new(move |()| editor.set(Editor::Closed));
                match initial {
                    Some(pet) => view! {
                        <PetFormModal initial=pet on_save=on_save on_cancel=on_cancel busy=busy/>
                    }
                    .into_any(),
                    None => view! { <PetFormModal on_save=on_save on_cancel=on_cancel busy=busy/> }.into_any(),
                }
            }}
        </section>
    }
}

/// Headline counters shared by the shelter and admin dashboards.
#[component]
pub fn StatsGrid(stats: DashboardStats) -> impl IntoView {
    let mut tiles = vec![
        ("Mascotas", stats.total_pets),
        ("Disponibles", stats.available_pets),
        ("Solicitudes pendientes", stats.pending_requests),
        ("Adopciones aprobadas", stats.approved_requests),
    ];
    // Only the admin variant of the endpoint counts users.
    if stats.total_users > 0 {
        tiles.push(("Usuarios", stats.total_users));
    }
    view! {
        <div class="stats-grid">
            {tiles
                .into_iter()
                .map(|(label, value)| {
                    view! {
                        <div class="stats-grid__tile">
                            <span class="stats-grid__value">{value}</span>
                            <span class="stats-grid__label">{label}</span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
