//! Create/edit pet dialog used by the shelter panel.
//!
//! The image is read into memory when picked so the save callback receives a
//! complete `ImageUpload`; validation runs before the callback fires.

use api_client::types::{ImageUpload, Pet, PetDraft, PetSize, Sex, Species};
use leptos::prelude::*;

use crate::state::pets::validate_pet_draft;

#[component]
pub fn PetFormModal(
    #[prop(optional)] initial: Option<Pet>,
    on_save: Callback<(PetDraft, Option<ImageUpload>)>,
    on_cancel: Callback<()>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    let editing = initial.is_some();
    let draft = RwSignal::new(initial.as_ref().map(PetDraft::from).unwrap_or_else(|| PetDraft {
        available: true,
        ..PetDraft::default()
    }));
    let image = RwSignal::new(None::<ImageUpload>);
    let errors = RwSignal::new(Vec::<&'static str>::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get();
        let upload = image.get();
        match validate_pet_draft(&current, upload.as_ref()) {
            Ok(()) => {
                errors.set(Vec::new());
                on_save.run((current, upload));
            }
            Err(found) => errors.set(found),
        }
    };

    let on_file = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                image.set(None);
                return;
            };
            leptos::task::spawn_local(async move {
                match read_image(file).await {
                    Ok(upload) => image.set(Some(upload)),
                    Err(e) => {
                        log::warn!("could not read selected image: {e}");
                        errors.set(vec!["No se pudo leer la foto seleccionada."]);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    view! {
        <div class="modal-backdrop">
            <form class="modal" on:submit=on_submit>
                <h2>{if editing { "Editar mascota" } else { "Nueva mascota" }}</h2>
                <label>
                    "Nombre"
                    <input
                        type="text"
                        required
                        prop:value=move || draft.with(|d| d.name.clone())
                        on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Especie"
                    <select on:change=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.species = Species::parse(&value).unwrap_or_default());
                    }>
                        {Species::ALL
                            .into_iter()
                            .map(|s| {
                                view! {
                                    <option value=s.as_str() selected=move || draft.with(|d| d.species == s)>
                                        {s.label()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label>
                    "Raza"
                    <input
                        type="text"
                        prop:value=move || draft.with(|d| d.breed.clone())
                        on:input=move |ev| draft.update(|d| d.breed = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Sexo"
                    <select on:change=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.sex = Sex::parse(&value));
                    }>
                        <option value="">"Sin especificar"</option>
                        {Sex::ALL
                            .into_iter()
                            .map(|s| {
                                view! {
                                    <option value=s.as_str() selected=move || draft.with(|d| d.sex == Some(s))>
                                        {s.label()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label>
                    "Tamaño"
                    <select on:change=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.size = PetSize::parse(&value));
                    }>
                        <option value="">"Sin especificar"</option>
                        {PetSize::ALL
                            .into_iter()
                            .map(|s| {
                                view! {
                                    <option value=s.as_str() selected=move || draft.with(|d| d.size == Some(s))>
                                        {s.label()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label>
                    "Edad (meses)"
                    <input
                        type="number"
                        min="0"
                        prop:value=move || draft.with(|d| d.age_months.map(|m| m.to_string()).unwrap_or_default())
                        on:input=move |ev| draft.update(|d| d.age_months = event_target_value(&ev).trim().parse().ok())
                    />
                </label>
                <label>
                    "Estado de salud"
                    <input
                        type="text"
                        prop:value=move || draft.with(|d| d.health_status.clone())
                        on:input=move |ev| draft.update(|d| d.health_status = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Descripción"
                    <textarea
                        prop:value=move || draft.with(|d| d.description.clone())
                        on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || draft.with(|d| d.available)
                        on:change=move |ev| draft.update(|d| d.available = event_target_checked(&ev))
                    />
                    "Disponible para adopción"
                </label>
                <label>
                    "Foto"
                    <input type="file" accept="image/*" on:change=on_file/>
                </label>
                <Show when=move || !errors.get().is_empty()>
                    <ul class="form-error">
                        {move || errors.get().into_iter().map(|e| view! { <li>{e}</li> }).collect::<Vec<_>>()}
                    </ul>
                </Show>
                <div class="modal__actions">
                    <button type="button" class="btn btn--ghost" on:click=move |_| on_cancel.run(())>
                        "Cancelar"
                    </button>
                    <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                        {move || if busy.get() { "Guardando..." } else { "Guardar" }}
                    </button>
                </div>
            </form>
        </div>
    }
}

#[cfg(feature = "hydrate")]
async fn read_image(file: web_sys::File) -> Result<ImageUpload, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{e:?}"))?;
    Ok(ImageUpload {
        file_name: file.name(),
        content_type: file.type_(),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}
