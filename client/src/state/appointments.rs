//! Appointment scheduling form.

#[cfg(test)]
#[path = "appointments_test.rs"]
mod appointments_test;

use api_client::types::{AppointmentStatus, NewAppointment};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppointmentForm {
    pub pet_id: String,
    pub vet_id: String,
    /// `YYYY-MM-DD` as produced by `<input type="date">`.
    pub date: String,
    /// `HH:MM` as produced by `<input type="time">`.
    pub time: String,
    pub reason: String,
}

impl AppointmentForm {
    /// Validate against `today` (`YYYY-MM-DD`, skipped when unknown) and build
    /// the request body.
    ///
    /// # Errors
    ///
    /// Returns every validation message that applies.
    pub fn validate(&self, today: Option<&str>) -> Result<NewAppointment, Vec<&'static str>> {
        let mut errors = Vec::new();
        let date = self.date.trim();
        if !is_iso_date(date) {
            errors.push("Selecciona una fecha válida.");
        } else if today.is_some_and(|today| date < today) {
            errors.push("La fecha no puede estar en el pasado.");
        }
        if !is_clock_time(self.time.trim()) {
            errors.push("Selecciona una hora válida (HH:MM).");
        }
        if self.reason.trim().is_empty() {
            errors.push("Indica el motivo de la cita.");
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        let optional = |raw: &str| Some(raw.trim()).filter(|v| !v.is_empty()).map(str::to_owned);
        Ok(NewAppointment {
            pet_id: optional(&self.pet_id),
            vet_id: optional(&self.vet_id),
            date: date.to_owned(),
            time: self.time.trim().to_owned(),
            reason: self.reason.trim().to_owned(),
        })
    }
}

/// Whether the user may still cancel an appointment in `status`.
pub fn can_cancel(status: AppointmentStatus) -> bool {
    matches!(status, AppointmentStatus::Scheduled | AppointmentStatus::Confirmed)
}

fn two_digits(raw: &str, max: u32) -> Option<u32> {
    if raw.len() != 2 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok().filter(|n| *n <= max)
}

fn is_clock_time(raw: &str) -> bool {
    matches!(raw.split_once(':'), Some((h, m)) if two_digits(h, 23).is_some() && two_digits(m, 59).is_some())
}

fn is_iso_date(raw: &str) -> bool {
    let mut parts = raw.split('-');
    let (Some(year), Some(month), Some(day), None) = (parts.next(), parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    year.len() == 4
        && year.bytes().all(|b| b.is_ascii_digit())
        && two_digits(month, 12).is_some_and(|m| m >= 1)
        && two_digits(day, 31).is_some_and(|d| d >= 1)
}
