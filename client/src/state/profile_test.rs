use super::*;

fn user() -> User {
    User { name: "Ana".to_owned(), email: "ana@example.com".to_owned(), phone: Some("555".to_owned()), ..User::default() }
}

#[test]
fn unchanged_profile_is_rejected() {
    let form = ProfileForm::from(&user());
    assert_eq!(form.to_update(&user()), Err("No hay cambios para guardar."));
}

#[test]
fn only_changed_fields_are_sent() {
    let form = ProfileForm { name: "Ana María".to_owned(), phone: "555".to_owned() };
    let update = form.to_update(&user()).unwrap();
    assert_eq!(update.name.as_deref(), Some("Ana María"));
    assert_eq!(update.phone, None);
}

#[test]
fn blank_name_is_rejected() {
    let form = ProfileForm { name: "  ".to_owned(), phone: String::new() };
    assert_eq!(form.to_update(&user()), Err("El nombre es obligatorio."));
}

#[test]
fn empty_phone_for_user_without_phone_is_no_change() {
    let current = User { phone: None, ..user() };
    let form = ProfileForm { name: "Ana".to_owned(), phone: " ".to_owned() };
    assert!(form.to_update(&current).is_err());
}

#[test]
fn password_change_rules() {
    let ok = PasswordForm { current: "viejo1".to_owned(), new_password: "nuevo12".to_owned(), confirm: "nuevo12".to_owned() };
    assert_eq!(ok.validate().unwrap().new_password, "nuevo12");

    let same = PasswordForm { current: "igual12".to_owned(), new_password: "igual12".to_owned(), confirm: "igual12".to_owned() };
    assert_eq!(same.validate().unwrap_err(), vec!["La nueva contraseña debe ser distinta de la actual."]);

    assert_eq!(PasswordForm::default().validate().unwrap_err().len(), 2);
}
