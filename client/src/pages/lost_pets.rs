//! Lost pets near an address, plus reporting and "found" marking.
//!
//! SYSTEM CONTEXT
//! ==============
//! Searching is public. Reporting and marking found need an account. Every
//! address is geocoded through Mapbox first; without a configured token the
//! page explains that the map is unavailable instead of failing per action.

use api_client::ClientConfig;
use api_client::types::{GeoPoint, LostPetReport, Species};
use leptos::prelude::*;

use crate::app::SessionHandle;
use crate::components::toast_stack::{notify, notify_error};
use crate::state::auth::AuthState;
use crate::state::lost_pets::{LostPetForm, RADIUS_OPTIONS_KM};
use crate::state::ui::{ToastKind, UiState};
use crate::util::auth::login_url;
use crate::util::format::format_date;

const DEFAULT_RADIUS_KM: f64 = 5.0;
const MAP_ZOOM: u8 = 13;
const MAP_SIZE: (u32, u32) = (600, 300);

#[component]
pub fn LostPetsPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let config = expect_context::<ClientConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let map_enabled = config.mapbox_token.is_some();
    let token = StoredValue::new(config.mapbox_token);

    let address = RwSignal::new(String::new());
    let radius_km = RwSignal::new(DEFAULT_RADIUS_KM);
    let center = RwSignal::new(None::<(String, GeoPoint)>);
    let reports = RwSignal::new(Vec::<LostPetReport>::new());
    let map_url = RwSignal::new(None::<String>);
    let searching = RwSignal::new(false);
    let search_error = RwSignal::new(None::<String>);

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if searching.get() {
            return;
        }
        let query = address.get();
        let radius = radius_km.get();
        searching.set(true);
        search_error.set(None);
        #[cfg(feature = "hydrate")]
        {
            let session = session.get_value();
            let geocoder = session.api().geocoder(token.get_value());
            leptos::task::spawn_local(async move {
                match geocoder.locate(&query).await {
                    Ok(place) => match session.api().lost_pets_near(place.point, radius).await {
                        Ok(found) => {
                            let markers = found.iter().map(|r| r.location).collect::<Vec<_>>();
                            map_url.set(geocoder.static_map_url(place.point, &markers, MAP_ZOOM, MAP_SIZE).ok());
                            reports.set(found);
                            center.set(Some((place.name, place.point)));
                        }
                        Err(e) => search_error.set(Some(e.to_string())),
                    },
                    Err(e) => search_error.set(Some(e.to_string())),
                }
                searching.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (query, radius, token);
    };

    let on_found = move |id: String| {
        #[cfg(feature = "hydrate")]
        {
            let session = session.get_value();
            leptos::task::spawn_local(async move {
                match session.api().mark_lost_pet_found(&id).await {
                    Ok(updated) => {
                        reports.update(|list| {
                            if let Some(slot) = list.iter_mut().find(|r| r.id == updated.id) {
                                *slot = updated;
                            }
                        });
                        notify(ui, ToastKind::Success, "¡Qué alegría! Marcada como encontrada.");
                    }
                    Err(e) => notify_error(ui, &e),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, session, ui);
    };

    let signed_in = move || auth.with(|a| a.user.is_some());

    view! {
        <section class="page lost-pets">
            <h1>"Mascotas perdidas"</h1>
            <Show when=move || !map_enabled>
                <p class="notice">"El mapa no está disponible en este momento."</p>
            </Show>
            <form class="card form form--inline" on:submit=on_search>
                <input
                    type="text"
                    placeholder="Dirección, barrio o ciudad"
                    prop:value=move || address.get()
                    on:input=move |ev| address.set(event_target_value(&ev))
                />
                <select on:change=move |ev| {
                    if let Ok(km) = event_target_value(&ev).parse() {
                        radius_km.set(km);
                    }
                }>
                    {RADIUS_OPTIONS_KM
                        .into_iter()
                        .map(|km| {
                            view! {
                                <option value=km.to_string() selected={(km - DEFAULT_RADIUS_KM).abs() < f64::EPSILON}>
                                    {format!("{km} km")}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
                <button class="btn btn--primary" type="submit" disabled={move || searching.get() || !map_enabled}>
                    {move || if searching.get() { "Buscando..." } else { "Buscar" }}
                </button>
            </form>
            <Show when=move || search_error.get().is_some()>
                <p class="form-error">{move || search_error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || center.with(Option::is_some)>
                <p class="lost-pets__center">
                    {move || center.with(|c| c.as_ref().map(|(name, _)| format!("Resultados cerca de {name}")))}
                </p>
                {move || map_url.get().map(|src| view! { <img class="lost-pets__map" src=src alt="Mapa de reportes"/> })}
                <Show
                    when=move || reports.with(|r| !r.is_empty())
                    fallback=|| view! { <p class="page__empty">"No hay reportes en esta zona."</p> }
                >
                    <ul class="lost-list">
                        {move || {
                            reports
                                .get()
                                .into_iter()
                                .map(|report| {
                                    let id = report.id.clone();
                                    let found = report.found;
                                    view! {
                                        <li class="lost-list__item" class:lost-list__item--found=found>
                                            <h3>{report.pet_name.clone()} " · " {report.species.label()}</h3>
                                            <p>{report.description.clone().unwrap_or_default()}</p>
                                            <p class="lost-list__meta">
                                                {report.last_seen_address.clone().unwrap_or_default()}
                                                " · "
                                                {report.reported_at.as_deref().map(format_date).unwrap_or_default()}
                                            </p>
                                            <p class="lost-list__meta">
                                                {report.contact_phone.clone().map(|p| format!("Contacto: {p}"))}
                                            </p>
                                            {if found {
                                                Some(view! { <span class="badge badge--aprobada">"Encontrada"</span> })
                                            } else {
                                                None
                                            }}
                                            <Show when={move || !found && signed_in()}>
                                                {
                                                    let id = id.clone();
                                                    view! {
                                                        <button class="btn" on:click=move |_| on_found(id.clone())>
                                                            "Marcar como encontrada"
                                                        </button>
                                                    }
                                                }
                                            </Show>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>
            </Show>
            <Show
                when=signed_in
                fallback=|| view! {
                    <p class="lost-pets__cta">
                        <a href=login_url("/perdidas")>"Ingresa para reportar una mascota perdida"</a>
                    </p>
                }
            >
                <ReportForm
                    token=token
                    enabled=map_enabled
                    on_reported=Callback::new(move |report: LostPetReport| {
                        reports.update(|list| list.insert(0, report));
                    })
                />
            </Show>
        </section>
    }
}

#[component]
fn ReportForm(token: StoredValue<Option<String>>, enabled: bool, on_reported: Callback<LostPetReport>) -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let ui = expect_context::<RwSignal<UiState>>();
    let form = RwSignal::new(LostPetForm::default());
    let errors = RwSignal::new(Vec::<String>::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let draft = form.get();
        if let Err(messages) = draft.validate() {
            errors.set(messages.into_iter().map(str::to_owned).collect());
            return;
        }
        errors.set(Vec::new());
        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            let session = session.get_value();
            let geocoder = session.api().geocoder(token.get_value());
            leptos::task::spawn_local(async move {
                let located = geocoder.locate(&draft.last_seen_address).await;
                match located {
                    Ok(place) => match session.api().report_lost_pet(&draft.into_report(place.point)).await {
                        Ok(report) => {
                            form.set(LostPetForm::default());
                            on_reported.run(report);
                            notify(ui, ToastKind::Success, "Reporte publicado. ¡Ojalá vuelva pronto a casa!");
                        }
                        Err(e) => notify_error(ui, &e),
                    },
                    Err(e) => errors.set(vec![e.to_string()]),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (draft, session, ui, token, on_reported);
    };

    view! {
        <form class="card form" on:submit=on_submit>
            <h2>"Reportar una mascota perdida"</h2>
            <label>
                "Nombre"
                <input
                    type="text"
                    prop:value=move || form.with(|f| f.pet_name.clone())
                    on:input=move |ev| form.update(|f| f.pet_name = event_target_value(&ev))
                />
            </label>
            <label>
                "Especie"
                <select
                    prop:value=move || form.with(|f| f.species.as_str())
                    on:change=move |ev| {
                        let species = Species::parse(&event_target_value(&ev)).unwrap_or_default();
                        form.update(|f| f.species = species);
                    }
                >
                    {Species::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <label>
                "Descripción"
                <textarea
                    rows="3"
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                ></textarea>
            </label>
            <label>
                "Última vez vista en"
                <input
                    type="text"
                    prop:value=move || form.with(|f| f.last_seen_address.clone())
                    on:input=move |ev| form.update(|f| f.last_seen_address = event_target_value(&ev))
                />
            </label>
            <label>
                "Teléfono de contacto"
                <input
                    type="tel"
                    prop:value=move || form.with(|f| f.contact_phone.clone())
                    on:input=move |ev| form.update(|f| f.contact_phone = event_target_value(&ev))
                />
            </label>
            <Show when=move || !errors.with(Vec::is_empty)>
                <ul class="form-error">
                    {move || errors.get().into_iter().map(|e| view! { <li>{e}</li> }).collect::<Vec<_>>()}
                </ul>
            </Show>
            <button class="btn btn--primary" type="submit" disabled={move || busy.get() || !enabled}>
                {move || if busy.get() { "Publicando..." } else { "Publicar reporte" }}
            </button>
        </form>
    }
}
