//! Saved pets.

use api_client::types::Pet;
use leptos::prelude::*;

use crate::app::SessionHandle;
use crate::components::auth_gate::AuthGate;
use crate::components::pet_card::PetCard;
use crate::components::toast_stack::notify_error;
use crate::state::ui::UiState;

#[component]
pub fn FavoritesPage() -> impl IntoView {
    view! {
        <AuthGate>
            <FavoritesView/>
        </AuthGate>
    }
}

#[component]
fn FavoritesView() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let ui = expect_context::<RwSignal<UiState>>();
    let favorites = RwSignal::new(Vec::<Pet>::new());
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    {
        let session = session.get_value();
        leptos::task::spawn_local(async move {
            match session.api().favorites().await {
                Ok(list) => favorites.set(list),
                Err(e) => notify_error(ui, &e),
            }
            loading.set(false);
        });
    }

    // Every card here is a favorite, so toggling always removes.
    let on_toggle_favorite = Callback::new(move |pet_id: String| {
        #[cfg(feature = "hydrate")]
        {
            let session = session.get_value();
            leptos::task::spawn_local(async move {
                match session.api().remove_favorite(&pet_id).await {
                    Ok(()) => favorites.update(|list| list.retain(|p| p.id != pet_id)),
                    Err(e) => notify_error(ui, &e),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (pet_id, session, ui);
    });

    view! {
        <section class="page">
            <h1>"Mis favoritos"</h1>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Cargando..."</p> }>
                <Show
                    when=move || favorites.with(|f| !f.is_empty())
                    fallback=|| view! {
                        <p class="page__empty">
                            "Todavía no guardaste mascotas. " <a href="/">"Explorar el catálogo"</a>
                        </p>
                    }
                >
                    <div class="pet-grid">
                        {move || {
                            favorites
                                .get()
                                .into_iter()
                                .map(|pet| view! { <PetCard pet=pet is_favorite=true on_toggle_favorite=on_toggle_favorite/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>
        </section>
    }
}
