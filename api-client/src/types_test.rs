use super::*;

#[test]
fn user_deserializes_spanish_aliases() {
    let user: User = serde_json::from_str(
        r#"{"_id":"u1","nombre":"Ana","email":"ana@example.org","telefono":"555","role":"refugio",
            "shelter":{"capacity":40,"address":"Calle 1"}}"#,
    )
    .unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.name, "Ana");
    assert_eq!(user.phone.as_deref(), Some("555"));
    assert_eq!(user.user_type, UserType::Refugio);
    assert_eq!(user.shelter.unwrap().capacity, Some(40));
}

#[test]
fn user_minimal_payload_defaults_to_usuario() {
    let user: User = serde_json::from_str(r#"{"email":"a@b.com"}"#).unwrap();
    assert_eq!(user.user_type, UserType::Usuario);
    assert_eq!(user.display_name(), "a@b.com");
}

#[test]
fn unknown_user_type_does_not_fail() {
    let user: User = serde_json::from_str(r#"{"email":"a@b.com","userType":"voluntario"}"#).unwrap();
    assert_eq!(user.user_type, UserType::Unknown);
}

#[test]
fn user_serializes_camel_case_without_empty_extensions() {
    let user = User {
        id: "u1".to_owned(),
        name: "Ana".to_owned(),
        email: "a@b.com".to_owned(),
        user_type: UserType::Usuario,
        ..User::default()
    };
    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json["userType"], "usuario");
    assert!(json.get("shelter").is_none());
    assert!(json.get("vet").is_none());
}

#[test]
fn user_type_parse_accepts_known_roles_only() {
    assert_eq!(UserType::parse(" Refugio "), Some(UserType::Refugio));
    assert_eq!(UserType::parse("medico"), Some(UserType::Medico));
    assert_eq!(UserType::parse("root"), None);
}

#[test]
fn profile_envelope_accepts_wrapped_and_bare() {
    let wrapped: ProfileEnvelope = serde_json::from_str(r#"{"user":{"email":"a@b.com"}}"#).unwrap();
    assert_eq!(User::from(wrapped).email, "a@b.com");
    let bare: ProfileEnvelope = serde_json::from_str(r#"{"email":"c@d.com"}"#).unwrap();
    assert_eq!(User::from(bare).email, "c@d.com");
}

#[test]
fn pet_deserializes_with_aliases_and_unknown_species() {
    let pet: Pet = serde_json::from_str(
        r#"{"_id":"p1","nombre":"Firulais","especie":"hurón","sexo":"macho","disponible":true}"#,
    )
    .unwrap();
    assert_eq!(pet.id, "p1");
    assert_eq!(pet.species, Species::Otro);
    assert_eq!(pet.sex, Some(Sex::Macho));
    assert!(pet.available);
    assert_eq!(pet.size, None);
}

#[test]
fn request_status_wire_values_are_spanish() {
    let status: RequestStatus = serde_json::from_str(r#""aprobada""#).unwrap();
    assert_eq!(status, RequestStatus::Approved);
    assert_eq!(serde_json::to_string(&RequestStatus::Cancelled).unwrap(), r#""cancelada""#);
}

#[test]
fn request_status_open_states() {
    assert!(RequestStatus::Pending.is_open());
    assert!(RequestStatus::Sent.is_open());
    assert!(!RequestStatus::Approved.is_open());
    assert!(!RequestStatus::Rejected.is_open());
    assert!(!RequestStatus::Cancelled.is_open());
}

#[test]
fn request_status_parse_accepts_both_languages() {
    assert_eq!(RequestStatus::parse("rechazada"), Some(RequestStatus::Rejected));
    assert_eq!(RequestStatus::parse("approved"), Some(RequestStatus::Approved));
    assert_eq!(RequestStatus::parse("maybe"), None);
}

#[test]
fn adoption_request_embeds_pet() {
    let request: AdoptionRequest = serde_json::from_str(
        r#"{"id":"s1","mascotaId":"p1","estado":"pendiente","mascota":{"id":"p1","name":"Luna"}}"#,
    )
    .unwrap();
    assert_eq!(request.status, RequestStatus::Pending);
    assert_eq!(request.pet.unwrap().name, "Luna");
}

#[test]
fn dashboard_stats_missing_fields_default_to_zero() {
    let stats: DashboardStats = serde_json::from_str(r#"{"totalPets":12}"#).unwrap();
    assert_eq!(stats.total_pets, 12);
    assert_eq!(stats.pending_requests, 0);
}

#[test]
fn appointment_status_round_trips_through_wire_names() {
    let appt: Appointment = serde_json::from_str(
        r#"{"id":"c1","fecha":"2026-11-02","hora":"10:30","motivo":"vacuna","estado":"confirmada"}"#,
    )
    .unwrap();
    assert_eq!(appt.status, AppointmentStatus::Confirmed);
    assert_eq!(appt.time.as_deref(), Some("10:30"));
    assert_eq!(appt.status.as_str(), "confirmada");
}

#[test]
fn edit_draft_is_prefilled_from_pet() {
    let pet: Pet = serde_json::from_str(
        r#"{"_id":"p1","nombre":"Toby","especie":"perro","tamano":"pequeño","disponible":true,"raza":"Beagle"}"#,
    )
    .unwrap();
    let draft = PetDraft::from(&pet);
    assert_eq!(draft.name, "Toby");
    assert_eq!(draft.species, Species::Perro);
    assert_eq!(draft.size, Some(PetSize::Pequeno));
    assert_eq!(draft.breed, "Beagle");
    assert_eq!(draft.description, "");
    assert!(draft.available);
}
