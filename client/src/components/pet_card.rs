//! Catalogue card for a single pet.

use api_client::types::Pet;
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::util::format::format_age;

/// A clickable card linking to the pet's detail page, with an optional
/// favorite toggle.
#[component]
pub fn PetCard(
    pet: Pet,
    #[prop(optional)] is_favorite: bool,
    #[prop(optional)] on_toggle_favorite: Option<Callback<String>>,
) -> impl IntoView {
    let href = format!("/mascotas/{}", pet.id);
    let id = pet.id.clone();
    let subtitle = [Some(pet.species.label()), pet.breed.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" · ");
    let age = format_age(pet.age_months);
    let available = pet.available;
    let alt = pet.name.clone();
    let image = pet.image_url.clone();

    view! {
        <article class="pet-card">
            <a class="pet-card__link" href=href>
                {match image {
                    Some(src) => view! { <img class="pet-card__image" src=src alt=alt loading="lazy"/> }.into_any(),
                    None => view! { <div class="pet-card__image pet-card__image--empty">"🐾"</div> }.into_any(),
                }}
                <div class="pet-card__body">
                    <h3 class="pet-card__name">{pet.name}</h3>
                    <p class="pet-card__meta">{subtitle}</p>
                    <p class="pet-card__meta">{age}</p>
                    <span class="badge" class:badge--aprobada=available class:badge--cancelada=!available>
                        {if available { "Disponible" } else { "No disponible" }}
                    </span>
                </div>
            </a>
            {on_toggle_favorite
                .map(|toggle| {
                    view! {
                        <button
                            class="pet-card__favorite"
                            class:pet-card__favorite--on=is_favorite
                            aria-label=if is_favorite { "Quitar de favoritos" } else { "Agregar a favoritos" }
                            on:click=move |_| toggle.run(id.clone())
                        >
                            {if is_favorite { "♥" } else { "♡" }}
                        </button>
                    }
                })}
        </article>
    }
}
