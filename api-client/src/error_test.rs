use super::*;

#[test]
fn from_status_uses_backend_message() {
    let err = ApiError::from_status(400, r#"{"message":"El email ya está registrado"}"#);
    assert_eq!(
        err,
        ApiError::Status { status: 400, message: "El email ya está registrado".to_owned() }
    );
    assert_eq!(err.to_string(), "El email ya está registrado");
}

#[test]
fn from_status_falls_back_to_error_field() {
    let err = ApiError::from_status(422, r#"{"error":"nombre requerido"}"#);
    assert_eq!(err.to_string(), "nombre requerido");
}

#[test]
fn from_status_generic_when_body_is_not_json() {
    let err = ApiError::from_status(502, "<html>Bad Gateway</html>");
    assert_eq!(err.to_string(), "Error HTTP 502");
}

#[test]
fn from_status_generic_when_message_blank() {
    let err = ApiError::from_status(500, r#"{"message":"   "}"#);
    assert_eq!(err.to_string(), "Error HTTP 500");
}

#[test]
fn unauthorized_is_localized_and_typed() {
    let err = ApiError::Unauthorized;
    assert!(err.is_unauthorized());
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.to_string(), SESSION_EXPIRED_MESSAGE);
}

#[test]
fn network_errors_have_no_status() {
    let err = ApiError::Network("connection refused".to_owned());
    assert!(!err.is_unauthorized());
    assert_eq!(err.status(), None);
}

#[test]
fn timeout_reports_seconds() {
    let err = ApiError::Timeout(Duration::from_secs(15));
    assert_eq!(err.to_string(), "la solicitud excedió el tiempo límite (15s)");
}
