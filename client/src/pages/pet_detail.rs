//! Pet detail page with the adoption request wizard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Anyone may view a pet. Applying requires a signed-in account; anonymous
//! visitors get a login link that returns here. The wizard draft is saved to
//! `localStorage` on every change and dropped once the request is accepted.

use api_client::types::Pet;
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_params_map;

use crate::app::SessionHandle;
use crate::components::toast_stack::{notify, notify_error};
use crate::state::adoption_form::{AdoptionDraft, AdoptionStep, HOME_TYPES, draft_key};
use crate::state::auth::AuthState;
use crate::state::ui::{ToastKind, UiState};
use crate::util::auth::login_url;
use crate::util::format::format_age;
use crate::util::storage::{load_json, remove_key, save_json};

#[component]
pub fn PetDetailPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let params = use_params_map();
    let pet_id = move || params.with(|p| p.get("id").unwrap_or_default());

    let pet = RwSignal::new(None::<Pet>);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let id = pet_id();
        pet.set(None);
        error.set(None);
        #[cfg(feature = "hydrate")]
        {
            let session = session.get_value();
            leptos::task::spawn_local(async move {
                match session.api().get_pet(&id).await {
                    Ok(found) => pet.set(Some(found)),
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, session);
    });

    move || {
        if let Some(message) = error.get() {
            return view! {
                <section class="page">
                    <p class="form-error">{message}</p>
                    <a class="btn" href="/">"Volver al catálogo"</a>
                </section>
            }
            .into_any();
        }
        match pet.get() {
            None => view! { <section class="page"><p>"Cargando..."</p></section> }.into_any(),
            Some(pet) => view! { <PetProfile pet=pet/> }.into_any(),
        }
    }
}

#[component]
fn PetProfile(pet: Pet) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let pet_id = pet.id.clone();
    let available = pet.available;
    let here = format!("/mascotas/{}", pet.id);
    let facts = [
        ("Especie", Some(pet.species.label().to_owned())),
        ("Raza", pet.breed.clone()),
        ("Sexo", pet.sex.map(|s| s.label().to_owned())),
        ("Edad", Some(format_age(pet.age_months))),
        ("Tamaño", pet.size.map(|s| s.label().to_owned())),
        ("Salud", pet.health_status.clone()),
    ];

    view! {
        <section class="page pet-detail">
            <div class="pet-detail__hero">
                {match pet.image_url.clone() {
                    Some(src) => view! { <img class="pet-detail__image" src=src alt=pet.name.clone()/> }.into_any(),
                    None => view! { <div class="pet-detail__image pet-card__image--empty">"🐾"</div> }.into_any(),
                }}
                <div>
                    <h1>{pet.name.clone()}</h1>
                    <dl class="pet-detail__facts">
                        {facts
                            .into_iter()
                            .filter_map(|(label, value)| value.map(|v| view! { <dt>{label}</dt><dd>{v}</dd> }))
                            .collect::<Vec<_>>()}
                    </dl>
                    <p>{pet.description.clone().unwrap_or_default()}</p>
                </div>
            </div>
            {move || {
                if !available {
                    return view! { <p class="page__empty">"Esta mascota ya no está disponible para adopción."</p> }
                        .into_any();
                }
                match auth.with(|a| (a.loading, a.user.is_some())) {
                    (true, _) => ().into_any(),
                    (false, false) => view! {
                        <p class="pet-detail__cta">
                            <a class="btn btn--primary" href=login_url(&here)>"Ingresa para adoptar"</a>
                        </p>
                    }
                    .into_any(),
                    (false, true) => view! { <AdoptionWizard pet_id=pet_id.clone()/> }.into_any(),
                }
            }}
        </section>
    }
}

#[component]
fn AdoptionWizard(pet_id: String) -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let ui = expect_context::<RwSignal<UiState>>();
    let key = draft_key(&pet_id);
    let draft = RwSignal::new(load_json::<AdoptionDraft>(&key).unwrap_or_default());
    let errors = RwSignal::new(Vec::<&'static str>::new());
    let busy = RwSignal::new(false);
    let submitted = RwSignal::new(false);

    let save_key = key.clone();
    Effect::new(move || {
        if !submitted.get() {
            draft.with(|d| save_json(&save_key, d));
        }
    });

    let on_next = move |_| {
        let mut result = Ok(());
        draft.update(|d| result = d.advance());
        errors.set(result.err().unwrap_or_default());
    };
    let on_back = move |_| {
        errors.set(Vec::new());
        draft.update(AdoptionDraft::back);
    };
    let on_submit = move |_| {
        if busy.get() {
            return;
        }
        let application = match draft.with(|d| d.to_application(&pet_id)) {
            Ok(application) => application,
            Err((step, messages)) => {
                draft.update(|d| d.step = step);
                errors.set(messages);
                return;
            }
        };
        errors.set(Vec::new());
        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            let session = session.get_value();
            let key = key.clone();
            leptos::task::spawn_local(async move {
                match session.api().create_adoption_request(&application).await {
                    Ok(_) => {
                        submitted.set(true);
                        remove_key(&key);
                        notify(ui, ToastKind::Success, "¡Solicitud enviada! El refugio te contactará pronto.");
                    }
                    Err(e) => notify_error(ui, &e),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (application, session, ui, &key, remove_key);
    };

    let step = move || draft.with(|d| d.step);

    view! {
        <section class="wizard">
            <Show
                clone:on_submit
                when=move || !submitted.get()
                fallback=|| view! {
                    <p class="wizard__done">
                        "Tu solicitud fue enviada. Puedes seguir su estado en "
                        <a href="/solicitudes">"Mis solicitudes"</a>"."
                    </p>
                }
            >
                <h2>"Solicitud de adopción"</h2>
                <ol class="wizard__steps">
                    {AdoptionStep::ALL
                        .into_iter()
                        .map(|s| view! {
                            <li class:wizard__step--active=move || step() == s>
                                {format!("{}. {}", s.number(), s.title())}
                            </li>
                        })
                        .collect::<Vec<_>>()}
                </ol>
                {move || match step() {
                    AdoptionStep::Housing => view! { <HousingStep draft=draft/> }.into_any(),
                    AdoptionStep::Household => view! { <HouseholdStep draft=draft/> }.into_any(),
                    AdoptionStep::Motivation => view! { <MotivationStep draft=draft/> }.into_any(),
                }}
                <Show when=move || !errors.with(Vec::is_empty)>
                    <ul class="form-error">
                        {move || errors.get().into_iter().map(|e| view! { <li>{e}</li> }).collect::<Vec<_>>()}
                    </ul>
                </Show>
                <div class="wizard__actions">
                    <Show when=move || step() != AdoptionStep::Housing>
                        <button class="btn" type="button" on:click=on_back>"Atrás"</button>
                    </Show>
                    <Show
                        clone:on_submit
                        when=move || draft.with(AdoptionDraft::is_last_step)
                        fallback=move || view! {
                            <button class="btn btn--primary" type="button" on:click=on_next>"Siguiente"</button>
                        }
                    >
                        <button
                            class="btn btn--primary"
                            type="button"
                            disabled=move || busy.get()
                            on:click=on_submit.clone()
                        >
                            {move || if busy.get() { "Enviando..." } else { "Enviar solicitud" }}
                        </button>
                    </Show>
                </div>
            </Show>
        </section>
    }
}

#[component]
fn HousingStep(draft: RwSignal<AdoptionDraft>) -> impl IntoView {
    view! {
        <fieldset class="wizard__fieldset">
            <label>
                "Tipo de vivienda"
                <select
                    prop:value=move || draft.with(|d| d.housing.home_type.clone())
                    on:change=move |ev| draft.update(|d| d.housing.home_type = event_target_value(&ev))
                >
                    <option value="">"Selecciona..."</option>
                    {HOME_TYPES
                        .into_iter()
                        .map(|(value, label)| view! { <option value=value>{label}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <label class="checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || draft.with(|d| d.housing.owns_home)
                    on:change=move |ev| draft.update(|d| d.housing.owns_home = event_target_checked(&ev))
                />
                "La vivienda es propia"
            </label>
            <label class="checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || draft.with(|d| d.housing.has_yard)
                    on:change=move |ev| draft.update(|d| d.housing.has_yard = event_target_checked(&ev))
                />
                "Tiene patio o jardín"
            </label>
        </fieldset>
    }
}

#[component]
fn HouseholdStep(draft: RwSignal<AdoptionDraft>) -> impl IntoView {
    view! {
        <fieldset class="wizard__fieldset">
            <label>
                "Adultos en el hogar"
                <input
                    type="number"
                    min="0"
                    prop:value=move || draft.with(|d| d.household.adults.to_string())
                    on:input=move |ev| {
                        let adults = event_target_value(&ev).parse().unwrap_or(0);
                        draft.update(|d| d.household.adults = adults);
                    }
                />
            </label>
            <label>
                "Niños en el hogar"
                <input
                    type="number"
                    min="0"
                    prop:value=move || draft.with(|d| d.household.children.to_string())
                    on:input=move |ev| {
                        let children = event_target_value(&ev).parse().unwrap_or(0);
                        draft.update(|d| d.household.children = children);
                    }
                />
            </label>
            <label>
                "Otras mascotas"
                <input
                    type="text"
                    placeholder="Ej. un gato de 3 años"
                    prop:value=move || draft.with(|d| d.household.other_pets.clone())
                    on:input=move |ev| draft.update(|d| d.household.other_pets = event_target_value(&ev))
                />
            </label>
        </fieldset>
    }
}

#[component]
fn MotivationStep(draft: RwSignal<AdoptionDraft>) -> impl IntoView {
    view! {
        <fieldset class="wizard__fieldset">
            <label>
                "Experiencia previa con mascotas"
                <textarea
                    rows="3"
                    prop:value=move || draft.with(|d| d.experience.clone())
                    on:input=move |ev| draft.update(|d| d.experience = event_target_value(&ev))
                ></textarea>
            </label>
            <label>
                "¿Por qué quieres adoptar?"
                <textarea
                    rows="4"
                    prop:value=move || draft.with(|d| d.motivation.clone())
                    on:input=move |ev| draft.update(|d| d.motivation = event_target_value(&ev))
                ></textarea>
            </label>
            <label>
                "Teléfono de contacto"
                <input
                    type="tel"
                    prop:value=move || draft.with(|d| d.contact_phone.clone())
                    on:input=move |ev| draft.update(|d| d.contact_phone = event_target_value(&ev))
                />
            </label>
        </fieldset>
    }
}
