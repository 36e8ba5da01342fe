use super::*;
use api_client::SessionState;
use api_client::transport::{Body, Method};

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    futures::executor::block_on(future)
}

#[test]
fn server_transport_reports_unavailable() {
    let request = HttpRequest {
        method: Method::Get,
        url: "http://localhost:4000/api/mascotas".to_owned(),
        headers: Vec::new(),
        body: Body::Empty,
        timeout: std::time::Duration::from_secs(1),
    };
    let err = block_on(ServerTransport.send(request)).unwrap_err();
    assert_eq!(err, ApiError::Unavailable);
    assert_eq!(err.to_string(), "no disponible en el servidor");
}

#[test]
fn client_config_always_has_a_timeout() {
    assert!(!client_config().request_timeout.is_zero());
}

#[test]
fn server_session_resolves_anonymous() {
    let session = build_session(&ClientConfig::default());
    assert_eq!(session.state(), SessionState::Uninitialized);
    assert!(block_on(session.initialize()).is_none());
    assert_eq!(session.state(), SessionState::Anonymous);
}
