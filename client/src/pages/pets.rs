//! Pet catalogue with in-memory filters and favorite toggles.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public landing route. Pets are fetched once on mount; favorites are fetched
//! whenever a user signs in so the hearts reflect the current account.

use std::collections::HashSet;

use api_client::types::{Pet, PetQuery, PetSize, Sex, Species};
use leptos::prelude::*;

use crate::app::{SessionHandle, use_deferred_navigate};
use crate::components::pet_card::PetCard;
use crate::components::toast_stack::notify_error;
use crate::state::auth::AuthState;
use crate::state::pets::{PetFilters, PetSort};
use crate::state::ui::UiState;
use crate::util::auth::login_url;

#[component]
pub fn PetsPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let go_to = use_deferred_navigate();

    let pets = RwSignal::new(Vec::<Pet>::new());
    let favorites = RwSignal::new(HashSet::<String>::new());
    let filters = RwSignal::new(PetFilters::default());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        let session = session.get_value();
        leptos::task::spawn_local(async move {
            match session.api().list_pets(&PetQuery::default()).await {
                Ok(list) => pets.set(list),
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        });
    }

    Effect::new(move || {
        let signed_in = auth.with(|a| a.user.is_some());
        if !signed_in {
            favorites.set(HashSet::new());
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let session = session.get_value();
            leptos::task::spawn_local(async move {
                match session.api().favorites().await {
                    Ok(list) => favorites.set(list.into_iter().map(|p| p.id).collect()),
                    Err(e) => log::warn!("favorites unavailable: {e}"),
                }
            });
        }
    });

    let on_toggle_favorite = Callback::new(move |pet_id: String| {
        if auth.with_untracked(|a| a.user.is_none()) {
            go_to.set(Some(login_url("/")));
            return;
        }
        let was_favorite = favorites.with_untracked(|f| f.contains(&pet_id));
        favorites.update(|f| {
            if was_favorite {
                f.remove(&pet_id);
            } else {
                f.insert(pet_id.clone());
            }
        });
        #[cfg(feature = "hydrate")]
        {
            let session = session.get_value();
            leptos::task::spawn_local(async move {
                let result = if was_favorite {
                    session.api().remove_favorite(&pet_id).await
                } else {
                    session.api().add_favorite(&pet_id).await
                };
                if let Err(e) = result {
                    favorites.update(|f| {
                        if was_favorite {
                            f.insert(pet_id.clone());
                        } else {
                            f.remove(&pet_id);
                        }
                    });
                    notify_error(ui, &e);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (session, ui);
    });

    let visible = Memo::new(move |_| pets.with(|list| filters.with(|f| f.apply(list))));

    view! {
        <section class="catalogue">
            <header class="catalogue__header">
                <h1>"Encuentra a tu nuevo compañero"</h1>
                <input
                    class="catalogue__search"
                    type="search"
                    placeholder="Buscar por nombre, raza o descripción"
                    prop:value=move || filters.with(|f| f.search.clone())
                    on:input=move |ev| filters.update(|f| f.search = event_target_value(&ev))
                />
            </header>
            <div class="catalogue__filters">
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    filters.update(|f| f.species = Species::parse(&value));
                }>
                    <option value="">"Todas las especies"</option>
                    {Species::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    filters.update(|f| f.sex = Sex::parse(&value));
                }>
                    <option value="">"Cualquier sexo"</option>
                    {Sex::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    filters.update(|f| f.size = PetSize::parse(&value));
                }>
                    <option value="">"Cualquier tamaño"</option>
                    {PetSize::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    filters.update(|f| f.sort = PetSort::parse(&value));
                }>
                    {PetSort::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || filters.with(|f| f.only_available)
                        on:change=move |ev| filters.update(|f| f.only_available = event_target_checked(&ev))
                    />
                    "Solo disponibles"
                </label>
                <Show when=move || !filters.with(PetFilters::is_empty)>
                    <button class="btn btn--ghost" on:click=move |_| filters.set(PetFilters::default())>
                        "Limpiar filtros"
                    </button>
                </Show>
            </div>
            <Show when=move || error.get().is_some()>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Cargando mascotas..."</p> }>
                <Show
                    when=move || visible.with(|v| !v.is_empty())
                    fallback=|| view! { <p class="page__empty">"No hay mascotas que coincidan con tu búsqueda."</p> }
                >
                    <div class="pet-grid">
                        {move || {
                            let favorite_ids = favorites.get();
                            visible
                                .get()
                                .into_iter()
                                .map(|pet| {
                                    let is_favorite = favorite_ids.contains(&pet.id);
                                    view! { <PetCard pet=pet is_favorite=is_favorite on_toggle_favorite=on_toggle_favorite/> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>
        </section>
    }
}
