//! `/mascotas/*` endpoints. Create and update go out as multipart so the
//! optional image travels with the text fields.

#[cfg(test)]
#[path = "pets_test.rs"]
mod pets_test;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::{FormValue, Method};
use crate::types::{ImageUpload, Pet, PetDraft, PetQuery};

impl PetQuery {
    /// Query-string pairs understood by `GET /mascotas`.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(species) = self.species {
            pairs.push(("especie", species.as_str().to_owned()));
        }
        if let Some(sex) = self.sex {
            pairs.push(("sexo", sex.as_str().to_owned()));
        }
        if let Some(size) = self.size {
            pairs.push(("tamano", size.as_str().to_owned()));
        }
        if let Some(available) = self.available {
            pairs.push(("disponible", available.to_string()));
        }
        if let Some(search) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            pairs.push(("busqueda", search.to_owned()));
        }
        pairs
    }
}

impl PetDraft {
    /// Multipart fields for create/update, with the image under `imagen`.
    #[must_use]
    pub fn to_form(&self, image: Option<&ImageUpload>) -> Vec<(String, FormValue)> {
        let mut fields = vec![
            text("name", self.name.trim()),
            text("species", self.species.as_str()),
            text("available", if self.available { "true" } else { "false" }),
        ];
        if !self.breed.trim().is_empty() {
            fields.push(text("breed", self.breed.trim()));
        }
        if let Some(sex) = self.sex {
            fields.push(text("sex", sex.as_str()));
        }
        if let Some(age) = self.age_months {
            fields.push(text("ageMonths", &age.to_string()));
        }
        if let Some(size) = self.size {
            fields.push(text("size", size.as_str()));
        }
        if !self.health_status.trim().is_empty() {
            fields.push(text("healthStatus", self.health_status.trim()));
        }
        if !self.description.trim().is_empty() {
            fields.push(text("description", self.description.trim()));
        }
        if let Some(image) = image {
            fields.push((
                "imagen".to_owned(),
                FormValue::File {
                    file_name: image.file_name.clone(),
                    content_type: image.content_type.clone(),
                    bytes: image.bytes.clone(),
                },
            ));
        }
        fields
    }
}

fn text(name: &str, value: &str) -> (String, FormValue) {
    (name.to_owned(), FormValue::Text(value.to_owned()))
}

impl ApiClient {
    /// `GET /mascotas` with optional filters.
    ///
    /// # Errors
    ///
    /// Returns a status or transport error.
    pub async fn list_pets(&self, query: &PetQuery) -> Result<Vec<Pet>, ApiError> {
        self.get_with_query(&["mascotas"], &query.to_pairs()).await
    }

    /// `GET /mascotas/mis-mascotas`: pets owned by the signed-in account.
    ///
    /// # Errors
    ///
    /// Returns a status or transport error.
    pub async fn my_pets(&self) -> Result<Vec<Pet>, ApiError> {
        self.get(&["mascotas", "mis-mascotas"]).await
    }

    /// `GET /mascotas/:id`.
    ///
    /// # Errors
    ///
    /// Returns a status error (404 for unknown ids) or a transport error.
    pub async fn get_pet(&self, id: &str) -> Result<Pet, ApiError> {
        self.get(&["mascotas", id]).await
    }

    /// `POST /mascotas` (multipart).
    ///
    /// # Errors
    ///
    /// Returns the backend's validation error or a transport error.
    pub async fn create_pet(&self, draft: &PetDraft, image: Option<&ImageUpload>) -> Result<Pet, ApiError> {
        self.send_multipart(Method::Post, &["mascotas"], draft.to_form(image)).await
    }

    /// `PUT /mascotas/:id` (multipart). Omitting the image keeps the old one.
    ///
    /// # Errors
    ///
    /// Returns the backend's validation error or a transport error.
    pub async fn update_pet(&self, id: &str, draft: &PetDraft, image: Option<&ImageUpload>) -> Result<Pet, ApiError> {
        self.send_multipart(Method::Put, &["mascotas", id], draft.to_form(image)).await
    }

    /// `DELETE /mascotas/:id`.
    ///
    /// # Errors
    ///
    /// Returns a status or transport error.
    pub async fn delete_pet(&self, id: &str) -> Result<(), ApiError> {
        let _: serde_json::Value = self.send_empty(Method::Delete, &["mascotas", id]).await?;
        Ok(())
    }
}
