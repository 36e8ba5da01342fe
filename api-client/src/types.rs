//! Wire DTOs for the Huellitas backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Aliases cover the Spanish
//! spellings some endpoints still emit (`nombre`, `disponible`, `_id`).
//! Unknown enum values deserialize to an `Unknown`/`Otro` variant instead of
//! failing the whole payload.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// USERS
// =============================================================================

/// Account role. Drives route gating and which dashboard a user lands on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    #[default]
    Usuario,
    Refugio,
    Veterinaria,
    Medico,
    Admin,
    #[serde(other)]
    Unknown,
}

impl UserType {
    pub const REGISTRABLE: [Self; 4] = [Self::Usuario, Self::Refugio, Self::Veterinaria, Self::Medico];

    /// Wire value, also used as the `:userType` path segment.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Usuario => "usuario",
            Self::Refugio => "refugio",
            Self::Veterinaria => "veterinaria",
            Self::Medico => "medico",
            Self::Admin => "admin",
            Self::Unknown => "desconocido",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Usuario => "Adoptante",
            Self::Refugio => "Refugio",
            Self::Veterinaria => "Veterinaria",
            Self::Medico => "Médico veterinario",
            Self::Admin => "Administrador",
            Self::Unknown => "Desconocido",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "usuario" => Some(Self::Usuario),
            "refugio" => Some(Self::Refugio),
            "veterinaria" => Some(Self::Veterinaria),
            "medico" => Some(Self::Medico),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelterProfile {
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VetProfile {
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub clinic_name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorProfile {
    #[serde(default)]
    pub license: Option<String>,
}

/// An account as returned by `/auth/login` and `/auth/profile`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default, alias = "nombre")]
    pub name: String,
    pub email: String,
    #[serde(default, alias = "telefono")]
    pub phone: Option<String>,
    #[serde(default, alias = "role")]
    pub user_type: UserType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shelter: Option<ShelterProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vet: Option<VetProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctor: Option<DoctorProfile>,
}

impl User {
    /// Name to show in chrome; falls back to the email.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() { &self.email } else { &self.name }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration form payload. Role extensions are sent only when filled.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shelter: Option<ShelterProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vet: Option<VetProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor: Option<DoctorProfile>,
}

/// Partial profile update; `None` fields are left untouched server-side.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shelter: Option<ShelterProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vet: Option<VetProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor: Option<DoctorProfile>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordReset {
    pub token: String,
    pub new_password: String,
}

/// Body returned by login and registration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// `/auth/profile` answers either with the user or with `{ "user": ... }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ProfileEnvelope {
    Wrapped { user: User },
    Bare(User),
}

impl From<ProfileEnvelope> for User {
    fn from(envelope: ProfileEnvelope) -> Self {
        match envelope {
            ProfileEnvelope::Wrapped { user } | ProfileEnvelope::Bare(user) => user,
        }
    }
}

// =============================================================================
// PETS
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Perro,
    Gato,
    Ave,
    Conejo,
    #[default]
    #[serde(other)]
    Otro,
}

impl Species {
    pub const ALL: [Self; 5] = [Self::Perro, Self::Gato, Self::Ave, Self::Conejo, Self::Otro];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Perro => "perro",
            Self::Gato => "gato",
            Self::Ave => "ave",
            Self::Conejo => "conejo",
            Self::Otro => "otro",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Perro => "Perro",
            Self::Gato => "Gato",
            Self::Ave => "Ave",
            Self::Conejo => "Conejo",
            Self::Otro => "Otro",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw.trim().to_ascii_lowercase())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Macho,
    Hembra,
}

impl Sex {
    pub const ALL: [Self; 2] = [Self::Macho, Self::Hembra];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Macho => "macho",
            Self::Hembra => "hembra",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Macho => "Macho",
            Self::Hembra => "Hembra",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "macho" => Some(Self::Macho),
            "hembra" => Some(Self::Hembra),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetSize {
    #[serde(alias = "pequeño")]
    Pequeno,
    Mediano,
    Grande,
}

impl PetSize {
    pub const ALL: [Self; 3] = [Self::Pequeno, Self::Mediano, Self::Grande];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pequeno => "pequeno",
            Self::Mediano => "mediano",
            Self::Grande => "grande",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pequeno => "Pequeño",
            Self::Mediano => "Mediano",
            Self::Grande => "Grande",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pequeno" => Some(Self::Pequeno),
            "mediano" => Some(Self::Mediano),
            "grande" => Some(Self::Grande),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(default, alias = "especie")]
    pub species: Species,
    #[serde(default, alias = "raza")]
    pub breed: Option<String>,
    #[serde(default, alias = "sexo")]
    pub sex: Option<Sex>,
    #[serde(default)]
    pub age_months: Option<u32>,
    #[serde(default, alias = "tamano")]
    pub size: Option<PetSize>,
    #[serde(default)]
    pub health_status: Option<String>,
    #[serde(default, alias = "disponible")]
    pub available: bool,
    #[serde(default, alias = "descripcion")]
    pub description: Option<String>,
    #[serde(default, alias = "imagen")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub owner_id: Option<String>,
    /// RFC 3339 timestamp; compared lexicographically for "newest" sorting.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Create/update payload. Sent as multipart text fields next to the image.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PetDraft {
    pub name: String,
    pub species: Species,
    pub breed: String,
    pub sex: Option<Sex>,
    pub age_months: Option<u32>,
    pub size: Option<PetSize>,
    pub health_status: String,
    pub available: bool,
    pub description: String,
}

impl From<&Pet> for PetDraft {
    /// Prefill an edit form from the stored pet.
    fn from(pet: &Pet) -> Self {
        Self {
            name: pet.name.clone(),
            species: pet.species,
            breed: pet.breed.clone().unwrap_or_default(),
            sex: pet.sex,
            age_months: pet.age_months,
            size: pet.size,
            health_status: pet.health_status.clone().unwrap_or_default(),
            available: pet.available,
            description: pet.description.clone().unwrap_or_default(),
        }
    }
}

/// Image attached to a pet draft.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Server-side filters for `GET /mascotas`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PetQuery {
    pub species: Option<Species>,
    pub sex: Option<Sex>,
    pub size: Option<PetSize>,
    pub available: Option<bool>,
    pub search: Option<String>,
}

// =============================================================================
// ADOPTION REQUESTS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestStatus {
    #[serde(rename = "pendiente")]
    Pending,
    #[serde(rename = "enviada")]
    Sent,
    #[serde(rename = "aprobada")]
    Approved,
    #[serde(rename = "rechazada")]
    Rejected,
    #[serde(rename = "cancelada")]
    Cancelled,
}

impl RequestStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pendiente",
            Self::Sent => "enviada",
            Self::Approved => "aprobada",
            Self::Rejected => "rechazada",
            Self::Cancelled => "cancelada",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pendiente",
            Self::Sent => "Enviada",
            Self::Approved => "Aprobada",
            Self::Rejected => "Rechazada",
            Self::Cancelled => "Cancelada",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pendiente" | "pending" => Some(Self::Pending),
            "enviada" | "sent" => Some(Self::Sent),
            "aprobada" | "approved" => Some(Self::Approved),
            "rechazada" | "rejected" => Some(Self::Rejected),
            "cancelada" | "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Whether the request is still open for the applicant to cancel or the
    /// shelter to decide. The backend enforces the real transition rules.
    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, Self::Pending | Self::Sent)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdoptionRequest {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(alias = "mascotaId")]
    pub pet_id: String,
    #[serde(default, alias = "mascota")]
    pub pet: Option<Pet>,
    #[serde(default)]
    pub applicant_id: Option<String>,
    #[serde(default, alias = "solicitante")]
    pub applicant: Option<User>,
    #[serde(alias = "estado")]
    pub status: RequestStatus,
    #[serde(default)]
    pub motivation: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Housing {
    pub home_type: String,
    pub owns_home: bool,
    pub has_yard: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Household {
    pub adults: u32,
    pub children: u32,
    pub other_pets: String,
}

/// Body of `POST /solicitudes`, assembled by the multi-step adoption form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdoptionApplication {
    pub pet_id: String,
    pub housing: Housing,
    pub household: Household,
    pub experience: String,
    pub motivation: String,
    pub contact_phone: String,
}

// =============================================================================
// APPOINTMENTS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppointmentStatus {
    #[serde(rename = "programada")]
    Scheduled,
    #[serde(rename = "confirmada")]
    Confirmed,
    #[serde(rename = "completada")]
    Completed,
    #[serde(rename = "cancelada")]
    Cancelled,
}

impl AppointmentStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "programada",
            Self::Confirmed => "confirmada",
            Self::Completed => "completada",
            Self::Cancelled => "cancelada",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Scheduled => "Programada",
            Self::Confirmed => "Confirmada",
            Self::Completed => "Completada",
            Self::Cancelled => "Cancelada",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default, alias = "mascotaId")]
    pub pet_id: Option<String>,
    #[serde(default)]
    pub vet_id: Option<String>,
    #[serde(alias = "fecha")]
    pub date: String,
    #[serde(default, alias = "hora")]
    pub time: Option<String>,
    #[serde(default, alias = "motivo")]
    pub reason: String,
    #[serde(alias = "estado")]
    pub status: AppointmentStatus,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vet_id: Option<String>,
    pub date: String,
    pub time: String,
    pub reason: String,
}

// =============================================================================
// LOST PETS
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LostPetReport {
    #[serde(alias = "_id")]
    pub id: String,
    pub pet_name: String,
    #[serde(default)]
    pub species: Species,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub last_seen_address: Option<String>,
    pub location: GeoPoint,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub found: bool,
    #[serde(default)]
    pub reported_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLostPetReport {
    pub pet_name: String,
    pub species: Species,
    pub description: String,
    pub last_seen_address: String,
    pub location: GeoPoint,
    pub contact_phone: String,
}

// =============================================================================
// DASHBOARD
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub total_pets: u32,
    pub available_pets: u32,
    pub pending_requests: u32,
    pub approved_requests: u32,
    pub total_users: u32,
}
