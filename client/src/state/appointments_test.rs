use super::*;

fn form() -> AppointmentForm {
    AppointmentForm {
        pet_id: "p1".to_owned(),
        vet_id: String::new(),
        date: "2030-05-10".to_owned(),
        time: "09:30".to_owned(),
        reason: " Vacunación anual ".to_owned(),
    }
}

#[test]
fn valid_form_builds_trimmed_request() {
    let appointment = form().validate(Some("2030-05-01")).unwrap();
    assert_eq!(appointment.pet_id.as_deref(), Some("p1"));
    assert_eq!(appointment.vet_id, None);
    assert_eq!(appointment.reason, "Vacunación anual");
}

#[test]
fn today_is_allowed_but_yesterday_is_not() {
    assert!(form().validate(Some("2030-05-10")).is_ok());
    let err = form().validate(Some("2030-05-11")).unwrap_err();
    assert_eq!(err, vec!["La fecha no puede estar en el pasado."]);
}

#[test]
fn unknown_today_skips_past_check() {
    let old = AppointmentForm { date: "2001-01-01".to_owned(), ..form() };
    assert!(old.validate(None).is_ok());
}

#[test]
fn malformed_time_and_date_are_rejected() {
    for time in ["9:30", "24:00", "12:60", "1230", ""] {
        let bad = AppointmentForm { time: time.to_owned(), ..form() };
        assert!(bad.validate(None).is_err(), "{time}");
    }
    for date in ["2030-13-01", "2030-00-10", "30-05-10", "2030/05/10", ""] {
        let bad = AppointmentForm { date: date.to_owned(), ..form() };
        assert!(bad.validate(None).is_err(), "{date}");
    }
}

#[test]
fn all_errors_are_reported_together() {
    let empty = AppointmentForm::default();
    assert_eq!(empty.validate(None).unwrap_err().len(), 3);
}

#[test]
fn only_open_appointments_can_be_cancelled() {
    assert!(can_cancel(AppointmentStatus::Scheduled));
    assert!(can_cancel(AppointmentStatus::Confirmed));
    assert!(!can_cancel(AppointmentStatus::Completed));
    assert!(!can_cancel(AppointmentStatus::Cancelled));
}
