use super::*;

#[test]
fn empty_form_lists_required_fields() {
    assert_eq!(LostPetForm::default().validate().unwrap_err().len(), 3);
}

#[test]
fn description_is_optional() {
    let form = LostPetForm {
        pet_name: "Toby".to_owned(),
        last_seen_address: "Av. Corrientes 1234".to_owned(),
        contact_phone: "555".to_owned(),
        ..LostPetForm::default()
    };
    assert!(form.validate().is_ok());
}

#[test]
fn report_carries_geocoded_point() {
    let form = LostPetForm {
        pet_name: " Toby ".to_owned(),
        species: Species::Perro,
        last_seen_address: "Plaza Mayor".to_owned(),
        contact_phone: "555".to_owned(),
        ..LostPetForm::default()
    };
    let report = form.into_report(GeoPoint { lat: 40.4, lng: -3.7 });
    assert_eq!(report.pet_name, "Toby");
    assert_eq!(report.species, Species::Perro);
    assert!((report.location.lng + 3.7).abs() < f64::EPSILON);
}
