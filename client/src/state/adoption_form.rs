//! Three-step adoption request wizard.
//!
//! DESIGN
//! ======
//! Housing, then household, then motivation. Each step validates only its own
//! required fields before the wizard advances; the final step also re-checks
//! the earlier ones so a draft restored from `localStorage` cannot skip them.
//! The whole draft is serializable and keyed by pet id.

#[cfg(test)]
#[path = "adoption_form_test.rs"]
mod adoption_form_test;

use api_client::types::{AdoptionApplication, Household, Housing};
use serde::{Deserialize, Serialize};

pub const MIN_MOTIVATION_CHARS: usize = 20;
pub const MIN_PHONE_DIGITS: usize = 7;

pub const HOME_TYPES: [(&str, &str); 3] = [("casa", "Casa"), ("departamento", "Departamento"), ("otro", "Otro")];

/// `localStorage` key for the draft of `pet_id`.
pub fn draft_key(pet_id: &str) -> String {
    format!("huellitas:adopcion:{pet_id}")
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdoptionStep {
    #[default]
    Housing,
    Household,
    Motivation,
}

impl AdoptionStep {
    pub const ALL: [Self; 3] = [Self::Housing, Self::Household, Self::Motivation];

    pub fn number(self) -> usize {
        match self {
            Self::Housing => 1,
            Self::Household => 2,
            Self::Motivation => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Housing => "Vivienda",
            Self::Household => "Hogar",
            Self::Motivation => "Motivación",
        }
    }

    fn next(self) -> Option<Self> {
        match self {
            Self::Housing => Some(Self::Household),
            Self::Household => Some(Self::Motivation),
            Self::Motivation => None,
        }
    }

    fn previous(self) -> Option<Self> {
        match self {
            Self::Housing => None,
            Self::Household => Some(Self::Housing),
            Self::Motivation => Some(Self::Household),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdoptionDraft {
    pub step: AdoptionStep,
    pub housing: Housing,
    pub household: Household,
    pub experience: String,
    pub motivation: String,
    pub contact_phone: String,
}

impl AdoptionDraft {
    /// Validation messages for `step`; empty when the step is complete.
    pub fn errors_for(&self, step: AdoptionStep) -> Vec<&'static str> {
        let mut errors = Vec::new();
        match step {
            AdoptionStep::Housing => {
                if !HOME_TYPES.iter().any(|(value, _)| *value == self.housing.home_type) {
                    errors.push("Indica el tipo de vivienda.");
                }
            }
            AdoptionStep::Household => {
                if self.household.adults == 0 {
                    errors.push("Debe haber al menos un adulto en el hogar.");
                }
            }
            AdoptionStep::Motivation => {
                if self.motivation.trim().chars().count() < MIN_MOTIVATION_CHARS {
                    errors.push("Cuéntanos por qué quieres adoptar (mínimo 20 caracteres).");
                }
                let digits = self.contact_phone.chars().filter(char::is_ascii_digit).count();
                if digits < MIN_PHONE_DIGITS {
                    errors.push("Ingresa un teléfono de contacto válido.");
                }
            }
        }
        errors
    }

    /// Move forward if the current step is valid; returns its errors otherwise.
    ///
    /// # Errors
    ///
    /// Returns the current step's validation messages.
    pub fn advance(&mut self) -> Result<(), Vec<&'static str>> {
        let errors = self.errors_for(self.step);
        if !errors.is_empty() {
            return Err(errors);
        }
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(())
    }

    pub fn back(&mut self) {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
    }

    pub fn is_last_step(&self) -> bool {
        self.step.next().is_none()
    }

    /// Build the request body, validating every step.
    ///
    /// # Errors
    ///
    /// Returns the first failing step and its messages; the caller should jump
    /// the wizard there.
    pub fn to_application(&self, pet_id: &str) -> Result<AdoptionApplication, (AdoptionStep, Vec<&'static str>)> {
        for step in AdoptionStep::ALL {
            let errors = self.errors_for(step);
            if !errors.is_empty() {
                return Err((step, errors));
            }
        }
        Ok(AdoptionApplication {
            pet_id: pet_id.to_owned(),
            housing: self.housing.clone(),
            household: Household { other_pets: self.household.other_pets.trim().to_owned(), ..self.household.clone() },
            experience: self.experience.trim().to_owned(),
            motivation: self.motivation.trim().to_owned(),
            contact_phone: self.contact_phone.trim().to_owned(),
        })
    }
}
