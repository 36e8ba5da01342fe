use super::*;

#[test]
fn validate_credentials_trims_email_and_requires_both_fields() {
    assert_eq!(
        validate_credentials("  ana@example.com  ", "secreto"),
        Ok(Credentials { email: "ana@example.com".to_owned(), password: "secreto".to_owned() })
    );
    assert_eq!(validate_credentials("   ", "secreto"), Err("Ingresa tu email y contraseña."));
    assert_eq!(validate_credentials("ana@example.com", ""), Err("Ingresa tu email y contraseña."));
}

#[test]
fn validate_credentials_keeps_password_whitespace() {
    let credentials = validate_credentials("a@b.com", " clave ").unwrap();
    assert_eq!(credentials.password, " clave ");
}
