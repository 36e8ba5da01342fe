//! Account creation with a role picker.

use api_client::UserType;
use leptos::prelude::*;

use crate::app::{SessionHandle, use_deferred_navigate};
use crate::components::toast_stack::notify;
use crate::state::auth::AuthState;
use crate::state::registration::RegistrationForm;
use crate::state::ui::{ToastKind, UiState};
use crate::util::auth::home_route_for;

/// Text input bound to one field of the registration form.
#[component]
fn Field(
    label: &'static str,
    form: RwSignal<RegistrationForm>,
    get: fn(&RegistrationForm) -> &String,
    set: fn(&mut RegistrationForm, String),
    #[prop(default = "text")] kind: &'static str,
) -> impl IntoView {
    view! {
        <label>
            {label}
            <input
                type=kind
                prop:value=move || form.with(|f| get(f).clone())
                on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
            />
        </label>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let go_to = use_deferred_navigate();

    let form = RwSignal::new(RegistrationForm::default());
    let errors = RwSignal::new(Vec::<String>::new());
    let busy = RwSignal::new(false);
    let role = move || form.with(|f| f.role);

    Effect::new(move || {
        if let Some(role) = auth.with(AuthState::role) {
            go_to.set(Some(home_route_for(role).to_owned()));
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (role, registration) = match form.with(RegistrationForm::validate) {
            Ok(valid) => valid,
            Err(found) => {
                errors.set(found.into_iter().map(str::to_owned).collect());
                return;
            }
        };
        busy.set(true);
        errors.set(Vec::new());

        #[cfg(feature = "hydrate")]
        {
            let session = session.get_value();
            leptos::task::spawn_local(async move {
                let result = if role == UserType::Usuario {
                    session.register(&registration).await
                } else {
                    session.register_by_type(role, &registration).await
                };
                match result {
                    Ok(_) => notify(ui, ToastKind::Success, "¡Cuenta creada! Bienvenido a Huellitas."),
                    Err(e) => errors.set(vec![e.to_string()]),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (role, registration, session, ui);
    };

    view! {
        <div class="auth-page">
            <form class="auth-card auth-card--wide" on:submit=on_submit>
                <h1>"Crear cuenta"</h1>
                <fieldset class="role-picker">
                    <legend>"Tipo de cuenta"</legend>
                    {UserType::REGISTRABLE
                        .into_iter()
                        .map(|option| {
                            view! {
                                <label class="role-picker__option" class:role-picker__option--active=move || role() == option>
                                    <input
                                        type="radio"
                                        name="role"
                                        value=option.as_str()
                                        prop:checked=move || role() == option
                                        on:change=move |_| form.update(|f| f.role = option)
                                    />
                                    {option.label()}
                                </label>
                            }
                        })
                        .collect::<Vec<_>>()}
                </fieldset>
                <Field label="Nombre" form=form get=|f| &f.name set=|f, v| f.name = v/>
                <Field label="Email" kind="email" form=form get=|f| &f.email set=|f, v| f.email = v/>
                <Field label="Teléfono" kind="tel" form=form get=|f| &f.phone set=|f, v| f.phone = v/>
                <Field label="Contraseña" kind="password" form=form get=|f| &f.password set=|f, v| f.password = v/>
                <Field
                    label="Repite la contraseña"
                    kind="password"
                    form=form
                    get=|f| &f.confirm_password
                    set=|f, v| f.confirm_password = v
                />
                <Show when=move || role() == UserType::Refugio>
                    <Field
                        label="Capacidad (animales)"
                        kind="number"
                        form=form
                        get=|f| &f.shelter_capacity
                        set=|f, v| f.shelter_capacity = v
                    />
                    <Field
                        label="Dirección del refugio"
                        form=form
                        get=|f| &f.shelter_address
                        set=|f, v| f.shelter_address = v
                    />
                </Show>
                <Show when=move || role() == UserType::Veterinaria>
                    <Field label="Nombre de la clínica" form=form get=|f| &f.clinic_name set=|f, v| f.clinic_name = v/>
                    <Field
                        label="Especialidades (separadas por coma)"
                        form=form
                        get=|f| &f.specialties
                        set=|f, v| f.specialties = v
                    />
                </Show>
                <Show when=move || role() == UserType::Medico>
                    <Field label="Matrícula profesional" form=form get=|f| &f.license set=|f, v| f.license = v/>
                </Show>
                <Show when=move || !errors.get().is_empty()>
                    <ul class="form-error">
                        {move || errors.get().into_iter().map(|e| view! { <li>{e}</li> }).collect::<Vec<_>>()}
                    </ul>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creando cuenta..." } else { "Crear cuenta" }}
                </button>
                <p class="auth-card__links">
                    "¿Ya tienes cuenta? "
                    <a href="/login">"Ingresar"</a>
                </p>
            </form>
        </div>
    }
}
