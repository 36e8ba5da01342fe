//! Veterinary appointments: list, schedule, cancel.

use api_client::types::{Appointment, AppointmentStatus};
use leptos::prelude::*;

use crate::app::SessionHandle;
use crate::components::auth_gate::AuthGate;
use crate::components::status_badge::AppointmentStatusBadge;
use crate::components::toast_stack::{notify, notify_error};
use crate::state::appointments::{AppointmentForm, can_cancel};
use crate::state::ui::{ToastKind, UiState};
use crate::util::format::{format_date, today_iso};

#[component]
pub fn AppointmentsPage() -> impl IntoView {
    view! {
        <AuthGate>
            <AppointmentsView/>
        </AuthGate>
    }
}

#[component]
fn AppointmentsView() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let ui = expect_context::<RwSignal<UiState>>();

    let appointments = RwSignal::new(Vec::<Appointment>::new());
    let loading = RwSignal::new(true);
    let form = RwSignal::new(AppointmentForm::default());
    let errors = RwSignal::new(Vec::<&'static str>::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let session = session.get_value();
        leptos::task::spawn_local(async move {
            match session.api().list_appointments().await {
                Ok(list) => appointments.set(list),
                Err(e) => notify_error(ui, &e),
            }
            loading.set(false);
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let today = today_iso();
        let appointment = match form.with(|f| f.validate(today.as_deref())) {
            Ok(a) => a,
            Err(messages) => {
                errors.set(messages);
                return;
            }
        };
        errors.set(Vec::new());
        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            let session = session.get_value();
            leptos::task::spawn_local(async move {
                match session.api().create_appointment(&appointment).await {
                    Ok(created) => {
                        appointments.update(|list| list.insert(0, created));
                        form.set(AppointmentForm::default());
                        notify(ui, ToastKind::Success, "Cita agendada.");
                    }
                    Err(e) => notify_error(ui, &e),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = appointment;
    };

    let on_cancel = move |id: String| {
        #[cfg(feature = "hydrate")]
        {
            let session = session.get_value();
            leptos::task::spawn_local(async move {
                match session.api().set_appointment_status(&id, AppointmentStatus::Cancelled).await {
                    Ok(updated) => {
                        appointments.update(|list| {
                            if let Some(slot) = list.iter_mut().find(|a| a.id == updated.id) {
                                *slot = updated;
                            }
                        });
                        notify(ui, ToastKind::Info, "Cita cancelada.");
                    }
                    Err(e) => notify_error(ui, &e),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, session, ui);
    };

    view! {
        <section class="page appointments">
            <h1>"Mis citas"</h1>
            <form class="card form" on:submit=on_submit>
                <h2>"Agendar una cita"</h2>
                <div class="form__row">
                    <label>
                        "Fecha"
                        <input
                            type="date"
                            min=today_iso().unwrap_or_default()
                            prop:value=move || form.with(|f| f.date.clone())
                            on:input=move |ev| form.update(|f| f.date = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Hora"
                        <input
                            type="time"
                            prop:value=move || form.with(|f| f.time.clone())
                            on:input=move |ev| form.update(|f| f.time = event_target_value(&ev))
                        />
                    </label>
                </div>
                <label>
                    "Motivo"
                    <textarea
                        rows="2"
                        prop:value=move || form.with(|f| f.reason.clone())
                        on:input=move |ev| form.update(|f| f.reason = event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="form__row">
                    <label>
                        "Mascota (opcional)"
                        <input
                            type="text"
                            placeholder="ID de la mascota"
                            prop:value=move || form.with(|f| f.pet_id.clone())
                            on:input=move |ev| form.update(|f| f.pet_id = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Veterinaria (opcional)"
                        <input
                            type="text"
                            placeholder="ID de la veterinaria"
                            prop:value=move || form.with(|f| f.vet_id.clone())
                            on:input=move |ev| form.update(|f| f.vet_id = event_target_value(&ev))
                        />
                    </label>
                </div>
                <Show when=move || !errors.with(Vec::is_empty)>
                    <ul class="form-error">
                        {move || errors.get().into_iter().map(|e| view! { <li>{e}</li> }).collect::<Vec<_>>()}
                    </ul>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Agendando..." } else { "Agendar" }}
                </button>
            </form>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Cargando..."</p> }>
                <Show
                    when=move || appointments.with(|a| !a.is_empty())
                    fallback=|| view! { <p class="page__empty">"No tienes citas agendadas."</p> }
                >
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Fecha"</th>
                                <th>"Hora"</th>
                                <th>"Motivo"</th>
                                <th>"Estado"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                appointments
                                    .get()
                                    .into_iter()
                                    .map(|appointment| {
                                        let id = appointment.id.clone();
                                        let cancellable = can_cancel(appointment.status);
                                        view! {
                                            <tr>
                                                <td>{format_date(&appointment.date)}</td>
                                                <td>{appointment.time.clone().unwrap_or_default()}</td>
                                                <td>{appointment.reason.clone()}</td>
                                                <td><AppointmentStatusBadge status=appointment.status/></td>
                                                <td>
                                                    <Show when=move || cancellable>
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
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </Show>
            </Show>
        </section>
    }
}
