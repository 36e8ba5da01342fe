//! Sign-up form with role-specific extensions.
//!
//! The role picker decides which extension block is sent: shelters send
//! capacity and address, clinics their name and specialties, doctors their
//! license. Other blocks are dropped even if the user filled them before
//! switching roles.

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use api_client::UserType;
use api_client::types::{DoctorProfile, Registration, ShelterProfile, VetProfile};

pub const MIN_PASSWORD_CHARS: usize = 6;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub role: UserType,
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone: String,
    pub shelter_capacity: String,
    pub shelter_address: String,
    pub clinic_name: String,
    /// Comma-separated.
    pub specialties: String,
    pub license: String,
}

fn non_empty(raw: &str) -> Option<String> {
    Some(raw.trim()).filter(|v| !v.is_empty()).map(str::to_owned)
}

/// Shared password rules for sign-up, reset and change.
pub fn password_errors(password: &str, confirm: &str) -> Vec<&'static str> {
    let mut errors = Vec::new();
    if password.chars().count() < MIN_PASSWORD_CHARS {
        errors.push("La contraseña debe tener al menos 6 caracteres.");
    }
    if password != confirm {
        errors.push("Las contraseñas no coinciden.");
    }
    errors
}

impl RegistrationForm {
    /// # Errors
    ///
    /// Returns every validation message that applies.
    pub fn validate(&self) -> Result<(UserType, Registration), Vec<&'static str>> {
        let mut errors = Vec::new();
        if !UserType::REGISTRABLE.contains(&self.role) {
            errors.push("Selecciona un tipo de cuenta.");
        }
        if self.name.trim().is_empty() {
            errors.push("El nombre es obligatorio.");
        }
        let email = self.email.trim();
        if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
            errors.push("Ingresa un email válido.");
        }
        errors.extend(password_errors(&self.password, &self.confirm_password));

        let mut registration = Registration {
            name: self.name.trim().to_owned(),
            email: email.to_owned(),
            password: self.password.clone(),
            phone: non_empty(&self.phone),
            ..Registration::default()
        };
        match self.role {
            UserType::Refugio => {
                let capacity = match self.shelter_capacity.trim() {
                    "" => None,
                    raw => match raw.parse::<u32>() {
                        Ok(n) => Some(n),
                        Err(_) => {
                            errors.push("La capacidad debe ser un número.");
                            None
                        }
                    },
                };
                let address = non_empty(&self.shelter_address);
                if address.is_none() {
                    errors.push("La dirección del refugio es obligatoria.");
                }
                registration.shelter = Some(ShelterProfile { capacity, address });
            }
            UserType::Veterinaria => {
                let clinic_name = non_empty(&self.clinic_name);
                if clinic_name.is_none() {
                    errors.push("El nombre de la clínica es obligatorio.");
                }
                let specialties = self.specialties.split(',').filter_map(non_empty).collect();
                registration.vet = Some(VetProfile { specialties, clinic_name });
            }
            UserType::Medico => {
                let license = non_empty(&self.license);
                if license.is_none() {
                    errors.push("La matrícula profesional es obligatoria.");
                }
                registration.doctor = Some(DoctorProfile { license });
            }
            UserType::Usuario | UserType::Admin | UserType::Unknown => {}
        }

        if errors.is_empty() { Ok((self.role, registration)) } else { Err(errors) }
    }
}
