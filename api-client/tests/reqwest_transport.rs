//! End-to-end checks of the native transport against a local mock backend.

use std::sync::Arc;
use std::time::Duration;

use api_client::storage::{KeyValueStore, MemoryStore, TOKEN_KEY, USER_KEY};
use api_client::types::{Credentials, ImageUpload, PetDraft, Species};
use api_client::{ApiClient, ApiError, ClientConfig, ReqwestTransport, SessionController, SessionState};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

fn client_for(server: &MockServer, timeout: Duration) -> (ApiClient, Arc<MemoryStore>) {
    let config = ClientConfig::new(&format!("{}/api", server.uri())).unwrap().with_timeout(timeout);
    let store = Arc::new(MemoryStore::new());
    let transport = Arc::new(ReqwestTransport::new().unwrap());
    (ApiClient::new(&config, transport, store.clone()), store)
}

#[tokio::test]
async fn login_sends_json_and_later_calls_carry_bearer() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({ "email": "a@b.com", "password": "secreto" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "t1",
            "user": { "_id": "u1", "nombre": "Ana", "email": "a@b.com", "userType": "refugio" }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/favoritos"))
        .and(header("authorization", "Bearer t1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let (client, store) = client_for(&server, Duration::from_secs(5));
    let session = SessionController::new(client);
    let credentials = Credentials { email: "a@b.com".to_owned(), password: "secreto".to_owned() };
    session.sign_in(&credentials).await.unwrap();

    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("t1"));
    assert_eq!(session.current_user().unwrap().name, "Ana");
    assert!(session.api().favorites().await.unwrap().is_empty());
}

#[tokio::test]
async fn expired_token_clears_session_over_http() {
    if !can_bind_localhost() {
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/profile"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "jwt expired" })))
        .mount(&server)
        .await;

    let (client, store) = client_for(&server, Duration::from_secs(5));
    store.set(TOKEN_KEY, "abc");
    store.set(USER_KEY, r#"{"email":"a@b.com","userType":"usuario"}"#);
    let session = SessionController::new(client);

    let revalidation = session.initialize().await.unwrap();
    assert!(session.current_user().is_some());
    revalidation.run().await;

    assert_eq!(session.state(), SessionState::Anonymous);
    assert!(store.is_empty());
}

#[tokio::test]
async fn slow_backend_times_out() {
    if !can_bind_localhost() {
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/mascotas/p1"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let (client, _) = client_for(&server, Duration::from_millis(200));
    let err = client.get_pet("p1").await.unwrap_err();
    assert_eq!(err, ApiError::Timeout(Duration::from_millis(200)));
}

#[tokio::test]
async fn backend_validation_message_is_surfaced() {
    if !can_bind_localhost() {
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/forgot-password"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "Usuario no encontrado" })))
        .mount(&server)
        .await;

    let (client, _) = client_for(&server, Duration::from_secs(5));
    let err = client.forgot_password("nadie@b.com").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "Usuario no encontrado");
}

#[tokio::test]
async fn pet_image_is_uploaded_as_multipart() {
    if !can_bind_localhost() {
        return;
    }
    let server = MockServer::start().await;
    let captured = Arc::new(std::sync::Mutex::new(Vec::new()));
    let sink = captured.clone();
    Mock::given(method("POST"))
        .and(path("/api/mascotas"))
        .respond_with(move |req: &Request| {
            *sink.lock().unwrap() = req.body.clone();
            ResponseTemplate::new(201).set_body_json(json!({ "_id": "p9", "nombre": "Luna", "especie": "gato" }))
        })
        .mount(&server)
        .await;

    let (client, store) = client_for(&server, Duration::from_secs(5));
    store.set(TOKEN_KEY, "abc");
    let draft = PetDraft { name: "Luna".to_owned(), species: Species::Gato, available: true, ..PetDraft::default() };
    let image = ImageUpload {
        file_name: "luna.png".to_owned(),
        content_type: "image/png".to_owned(),
        bytes: vec![0x89, b'P', b'N', b'G'],
    };

    let pet = client.create_pet(&draft, Some(&image)).await.unwrap();
    assert_eq!(pet.id, "p9");
    assert_eq!(pet.species, Species::Gato);

    let body = String::from_utf8_lossy(&captured.lock().unwrap()).into_owned();
    assert!(body.contains(r#"name="imagen"; filename="luna.png""#));
    assert!(body.to_lowercase().contains("content-type: image/png"));
    assert!(body.contains("Luna"));
}
