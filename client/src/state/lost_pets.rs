//! Lost-pet report form and search radius options.
//!
//! The address typed by the user is geocoded before the report is sent; the
//! form only checks that the fields needed for that are present.

#[cfg(test)]
#[path = "lost_pets_test.rs"]
mod lost_pets_test;

use api_client::types::{GeoPoint, NewLostPetReport, Species};

pub const RADIUS_OPTIONS_KM: [f64; 4] = [2.0, 5.0, 10.0, 25.0];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LostPetForm {
    pub pet_name: String,
    pub species: Species,
    pub description: String,
    pub last_seen_address: String,
    pub contact_phone: String,
}

impl LostPetForm {
    /// # Errors
    ///
    /// Returns every validation message that applies.
    pub fn validate(&self) -> Result<(), Vec<&'static str>> {
        let mut errors = Vec::new();
        if self.pet_name.trim().is_empty() {
            errors.push("Indica el nombre de la mascota.");
        }
        if self.last_seen_address.trim().is_empty() {
            errors.push("Indica dónde fue vista por última vez.");
        }
        if self.contact_phone.trim().is_empty() {
            errors.push("Indica un teléfono de contacto.");
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Report body once the address resolved to `location`.
    pub fn into_report(self, location: GeoPoint) -> NewLostPetReport {
        NewLostPetReport {
            pet_name: self.pet_name.trim().to_owned(),
            species: self.species,
            description: self.description.trim().to_owned(),
            last_seen_address: self.last_seen_address.trim().to_owned(),
            location,
            contact_phone: self.contact_phone.trim().to_owned(),
        }
    }
}
