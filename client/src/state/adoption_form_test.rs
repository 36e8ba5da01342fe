use super::*;

fn complete() -> AdoptionDraft {
    AdoptionDraft {
        step: AdoptionStep::Motivation,
        housing: Housing { home_type: "casa".to_owned(), owns_home: true, has_yard: true },
        household: Household { adults: 2, children: 1, other_pets: " un gato ".to_owned() },
        experience: "Tuve perros toda mi vida".to_owned(),
        motivation: "  Queremos darle un hogar con jardín y mucho cariño  ".to_owned(),
        contact_phone: "+54 11 5555-1234".to_owned(),
    }
}

#[test]
fn housing_step_requires_a_known_home_type() {
    let mut draft = AdoptionDraft::default();
    assert_eq!(draft.advance(), Err(vec!["Indica el tipo de vivienda."]));
    assert_eq!(draft.step, AdoptionStep::Housing);

    draft.housing.home_type = "departamento".to_owned();
    assert_eq!(draft.advance(), Ok(()));
    assert_eq!(draft.step, AdoptionStep::Household);
}

#[test]
fn household_step_requires_an_adult() {
    let mut draft = AdoptionDraft { step: AdoptionStep::Household, ..AdoptionDraft::default() };
    assert!(draft.advance().is_err());
    draft.household.adults = 1;
    assert!(draft.advance().is_ok());
    assert_eq!(draft.step, AdoptionStep::Motivation);
    assert!(draft.is_last_step());
}

#[test]
fn motivation_step_reports_every_missing_field() {
    let draft = AdoptionDraft { step: AdoptionStep::Motivation, motivation: "corto".to_owned(), ..AdoptionDraft::default() };
    assert_eq!(draft.errors_for(AdoptionStep::Motivation).len(), 2);
}

#[test]
fn back_stops_at_first_step() {
    let mut draft = AdoptionDraft { step: AdoptionStep::Motivation, ..AdoptionDraft::default() };
    draft.back();
    assert_eq!(draft.step, AdoptionStep::Household);
    draft.back();
    draft.back();
    assert_eq!(draft.step, AdoptionStep::Housing);
}

#[test]
fn application_is_trimmed_and_tagged_with_pet() {
    let application = complete().to_application("p1").unwrap();
    assert_eq!(application.pet_id, "p1");
    assert_eq!(application.household.other_pets, "un gato");
    assert_eq!(application.household.adults, 2);
    assert_eq!(application.motivation, "Queremos darle un hogar con jardín y mucho cariño");
}

#[test]
fn restored_draft_cannot_skip_earlier_steps() {
    let mut draft = complete();
    draft.household.adults = 0;
    let (step, errors) = draft.to_application("p1").unwrap_err();
    assert_eq!(step, AdoptionStep::Household);
    assert_eq!(errors.len(), 1);
}

#[test]
fn drafts_survive_a_json_round_trip_with_missing_fields() {
    let draft: AdoptionDraft = serde_json::from_str(r#"{"step":"Household","motivation":"hola"}"#).unwrap();
    assert_eq!(draft.step, AdoptionStep::Household);
    assert_eq!(draft.motivation, "hola");
    assert_eq!(draft_key("p1"), "huellitas:adopcion:p1");
}
