//! Profile edit and password change forms.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use api_client::User;
use api_client::types::{PasswordChange, ProfileUpdate};

use super::registration::password_errors;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub phone: String,
}

impl From<&User> for ProfileForm {
    fn from(user: &User) -> Self {
        Self { name: user.name.clone(), phone: user.phone.clone().unwrap_or_default() }
    }
}

impl ProfileForm {
    /// Only changed fields are sent.
    ///
    /// # Errors
    ///
    /// Returns a message when the name was cleared or nothing changed.
    pub fn to_update(&self, current: &User) -> Result<ProfileUpdate, &'static str> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("El nombre es obligatorio.");
        }
        let phone = self.phone.trim();
        let update = ProfileUpdate {
            name: (name != current.name).then(|| name.to_owned()),
            phone: (Some(phone) != current.phone.as_deref() && !(phone.is_empty() && current.phone.is_none()))
                .then(|| phone.to_owned()),
            ..ProfileUpdate::default()
        };
        if update == ProfileUpdate::default() {
            return Err("No hay cambios para guardar.");
        }
        Ok(update)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PasswordForm {
    pub current: String,
    pub new_password: String,
    pub confirm: String,
}

impl PasswordForm {
    /// # Errors
    ///
    /// Returns every validation message that applies.
    pub fn validate(&self) -> Result<PasswordChange, Vec<&'static str>> {
        let mut errors = Vec::new();
        if self.current.is_empty() {
            errors.push("Ingresa tu contraseña actual.");
        }
        errors.extend(password_errors(&self.new_password, &self.confirm));
        if !self.current.is_empty() && self.current == self.new_password {
            errors.push("La nueva contraseña debe ser distinta de la actual.");
        }
        if errors.is_empty() {
            Ok(PasswordChange { current_password: self.current.clone(), new_password: self.new_password.clone() })
        } else {
            Err(errors)
        }
    }
}
