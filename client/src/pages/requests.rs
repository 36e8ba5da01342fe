//! Adoption requests: the applicant's own and, for shelters, the ones received.

use api_client::UserType;
use api_client::types::{AdoptionRequest, RequestStatus};
use leptos::prelude::*;

use crate::app::SessionHandle;
use crate::components::auth_gate::AuthGate;
use crate::components::status_badge::RequestStatusBadge;
use crate::components::toast_stack::{notify, notify_error};
use crate::state::auth::AuthState;
use crate::state::ui::{ToastKind, UiState};
use crate::util::format::format_date;

#[component]
pub fn RequestsPage() -> impl IntoView {
    view! {
        <AuthGate>
            <RequestsView/>
        </AuthGate>
    }
}

fn replace_request(list: &mut [AdoptionRequest], updated: AdoptionRequest) {
    if let Some(slot) = list.iter_mut().find(|r| r.id == updated.id) {
        *slot = updated;
    }
}

#[component]
fn RequestsView() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let is_shelter = move || auth.with(|a| a.has_role(UserType::Refugio));

    let mine = RwSignal::new(Vec::<AdoptionRequest>::new());
    let received = RwSignal::new(Vec::<AdoptionRequest>::new());
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    {
        let session = session.get_value();
        let shelter = is_shelter();
        leptos::task::spawn_local(async move {
            match session.api().my_adoption_requests().await {
                Ok(list) => mine.set(list),
                Err(e) => notify_error(ui, &e),
            }
            if shelter {
                match session.api().received_adoption_requests().await {
                    Ok(list) => received.set(list),
                    Err(e) => notify_error(ui, &e),
                }
            }
            loading.set(false);
        });
    }

    let on_cancel = move |id: String| {
        #[cfg(feature = "hydrate")]
        {
            let session = session.get_value();
            leptos::task::spawn_local(async move {
                match session.api().cancel_adoption_request(&id).await {
                    Ok(()) => {
                        mine.update(|list| {
                            if let Some(r) = list.iter_mut().find(|r| r.id == id) {
                                r.status = RequestStatus::Cancelled;
                            }
                        });
                        notify(ui, ToastKind::Info, "Solicitud cancelada.");
                    }
                    Err(e) => notify_error(ui, &e),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, session, ui);
    };

    let on_decide = move |id: String, status: RequestStatus| {
        #[cfg(feature = "hydrate")]
        {
            let session = session.get_value();
            leptos::task::spawn_local(async move {
                match session.api().set_adoption_status(&id, status).await {
                    Ok(updated) => {
                        received.update(|list| replace_request(list, updated));
                        notify(ui, ToastKind::Success, format!("Solicitud {}.", status.label().to_lowercase()));
                    }
                    Err(e) => notify_error(ui, &e),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, status);
    };

    view! {
        <section class="page">
            <h1>"Mis solicitudes"</h1>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Cargando..."</p> }>
                <Show
                    when=move || mine.with(|m| !m.is_empty())
                    fallback=|| view! {
                        <p class="page__empty">
                            "Aún no enviaste solicitudes. " <a href="/">"Ver mascotas"</a>
                        </p>
                    }
                >
                    <ul class="request-list">
                        {move || {
                            mine.get()
                                .into_iter()
                                .map(|request| {
                                    let id = request.id.clone();
                                    let open = request.status.is_open();
                                    view! {
                                        <li class="request-list__item">
                                            <RequestSummary request=request/>
                                            <Show when=move || open>
                                                {
                                                    let id = id.clone();
                                                    view! {
                                                        <button
                                                            class="btn btn--ghost"
                                                            on:click=move |_| on_cancel(id.clone())
                                                        >
                                                            "Cancelar"
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
                <Show when=is_shelter>
                    <h2>"Solicitudes recibidas"</h2>
                    <Show
                        when=move || received.with(|r| !r.is_empty())
                        fallback=|| view! { <p class="page__empty">"No hay solicitudes para tus mascotas."</p> }
                    >
                        <ul class="request-list">
                            {move || {
                                received
                                    .get()
                                    .into_iter()
                                    .map(|request| {
                                        let approve_id = request.id.clone();
                                        let reject_id = request.id.clone();
                                        let open = request.status.is_open();
                                        let applicant = request
                                            .applicant
                                            .as_ref()
                                            .map(|u| format!("{} ({})", u.display_name(), u.email))
                                            .unwrap_or_default();
                                        view! {
                                            <li class="request-list__item">
                                                <RequestSummary request=request/>
                                                <p class="request-list__applicant">{applicant}</p>
                                                <Show when=move || open>
                                                    {
                                                        let approve_id = approve_id.clone();
                                                        let reject_id = reject_id.clone();
                                                        view! {
                                                            <button
                                                                class="btn btn--primary"
                                                                on:click=move |_| on_decide(approve_id.clone(), RequestStatus::Approved)
                                                            >
                                                                "Aprobar"
                                                            </button>
                                                            <button
                                                                class="btn btn--danger"
                                                                on:click=move |_| on_decide(reject_id.clone(), RequestStatus::Rejected)
                                                            >
                                                                "Rechazar"
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
            </Show>
        </section>
    }
}

#[component]
fn RequestSummary(request: AdoptionRequest) -> impl IntoView {
    let pet_name = request.pet.as_ref().map_or_else(|| "Mascota".to_owned(), |p| p.name.clone());
    let href = format!("/mascotas/{}", request.pet_id);
    let date = request.created_at.as_deref().map(format_date).unwrap_or_default();
    view! {
        <div class="request-summary">
            <a href=href>{pet_name}</a>
            <span class="request-summary__date">{date}</span>
            <RequestStatusBadge status=request.status/>
        </div>
    }
}
