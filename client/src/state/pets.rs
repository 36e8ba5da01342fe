//! Catalogue filtering and sorting.
//!
//! DESIGN
//! ======
//! The catalogue fetches the full list once and narrows it in memory, so every
//! keystroke in the search box re-filters without a round trip. The backend
//! still accepts the same filters as query parameters for the CLI.

#[cfg(test)]
#[path = "pets_test.rs"]
mod pets_test;

use api_client::types::{ImageUpload, Pet, PetDraft, PetSize, Sex, Species};

pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PetSort {
    #[default]
    Newest,
    Name,
    Youngest,
}

impl PetSort {
    pub const ALL: [Self; 3] = [Self::Newest, Self::Name, Self::Youngest];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "recientes",
            Self::Name => "nombre",
            Self::Youngest => "edad",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Newest => "Más recientes",
            Self::Name => "Nombre (A-Z)",
            Self::Youngest => "Más jóvenes",
        }
    }

    pub fn parse(raw: &str) -> Self {
        Self::ALL.into_iter().find(|s| s.as_str() == raw).unwrap_or_default()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PetFilters {
    pub species: Option<Species>,
    pub sex: Option<Sex>,
    pub size: Option<PetSize>,
    pub only_available: bool,
    pub search: String,
    pub sort: PetSort,
}

impl PetFilters {
    pub fn is_empty(&self) -> bool {
        self.species.is_none()
            && self.sex.is_none()
            && self.size.is_none()
            && !self.only_available
            && self.search.trim().is_empty()
    }

    pub fn matches(&self, pet: &Pet) -> bool {
        if self.species.is_some_and(|s| s != pet.species) {
            return false;
        }
        if self.sex.is_some() && self.sex != pet.sex {
            return false;
        }
        if self.size.is_some() && self.size != pet.size {
            return false;
        }
        if self.only_available && !pet.available {
            return false;
        }
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [Some(pet.name.as_str()), pet.breed.as_deref(), pet.description.as_deref()]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Filtered, sorted copy of `pets`.
    pub fn apply(&self, pets: &[Pet]) -> Vec<Pet> {
        let mut out: Vec<Pet> = pets.iter().filter(|p| self.matches(p)).cloned().collect();
        match self.sort {
            // RFC 3339 strings order chronologically; undated pets sink.
            PetSort::Newest => out.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            PetSort::Name => out.sort_by_key(|p| p.name.to_lowercase()),
            PetSort::Youngest => out.sort_by_key(|p| p.age_months.unwrap_or(u32::MAX)),
        }
        out
    }
}

/// Checks run before a pet is created or updated from the shelter panel.
///
/// # Errors
///
/// Returns every validation message that applies.
pub fn validate_pet_draft(draft: &PetDraft, image: Option<&ImageUpload>) -> Result<(), Vec<&'static str>> {
    let mut errors = Vec::new();
    if draft.name.trim().is_empty() {
        errors.push("El nombre es obligatorio.");
    }
    if let Some(image) = image {
        if !image.content_type.starts_with("image/") {
            errors.push("La foto debe ser una imagen.");
        }
        if image.bytes.len() > MAX_IMAGE_BYTES {
            errors.push("La foto no puede superar los 5 MB.");
        }
    }
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
