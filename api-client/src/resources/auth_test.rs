use crate::error::ApiError;
use crate::storage::{TOKEN_KEY, USER_KEY};
use crate::storage::KeyValueStore as _;
use crate::test_support::{BASE_URL, StubTransport, client_with, user_json};
use crate::transport::{Body, Method};
use crate::types::{Credentials, PasswordChange, ProfileUpdate, Registration, UserType};

fn credentials() -> Credentials {
    Credentials { email: "a@b.com".to_owned(), password: "secreto".to_owned() }
}

#[tokio::test]
async fn login_persists_token_and_user() {
    let stub = StubTransport::new();
    let (client, store) = client_with(&stub);
    stub.respond(200, serde_json::json!({ "token": "t1", "user": user_json("a@b.com", "refugio") }));

    let response = client.login(&credentials()).await.unwrap();
    assert_eq!(response.token, "t1");
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("t1"));
    let cached = client.session_store().user().unwrap();
    assert_eq!(cached.user_type, UserType::Refugio);

    let request = stub.last_request();
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.url, format!("{BASE_URL}/auth/login"));
    assert_eq!(request.body, Body::Json(r#"{"email":"a@b.com","password":"secreto"}"#.to_owned()));
}

#[tokio::test]
async fn failed_login_persists_nothing() {
    let stub = StubTransport::new();
    let (client, store) = client_with(&stub);
    stub.respond(401, serde_json::json!({ "message": "Credenciales inválidas" }));

    let err = client.login(&credentials()).await.unwrap_err();
    assert_eq!(err.to_string(), "Credenciales inválidas");
    assert!(store.is_empty());
}

#[tokio::test]
async fn register_by_type_uses_role_segment() {
    let stub = StubTransport::new();
    let (client, store) = client_with(&stub);
    stub.respond(201, serde_json::json!({ "token": "t2", "user": user_json("vet@b.com", "veterinaria") }));

    let registration = Registration {
        name: "Clínica".to_owned(),
        email: "vet@b.com".to_owned(),
        password: "secreto".to_owned(),
        ..Registration::default()
    };
    client.register_by_type(UserType::Veterinaria, &registration).await.unwrap();
    assert_eq!(stub.last_request().url, format!("{BASE_URL}/auth/register/veterinaria"));
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("t2"));
}

#[tokio::test]
async fn register_posts_to_plain_endpoint() {
    let stub = StubTransport::new();
    let (client, _) = client_with(&stub);
    stub.respond(201, serde_json::json!({ "token": "t3", "user": user_json("u@b.com", "usuario") }));

    client.register(&Registration::default()).await.unwrap();
    assert_eq!(stub.last_request().url, format!("{BASE_URL}/auth/register"));
}

#[tokio::test]
async fn profile_accepts_wrapped_user() {
    let stub = StubTransport::new();
    let (client, _) = client_with(&stub);
    stub.respond(200, serde_json::json!({ "user": user_json("a@b.com", "usuario") }));

    let user = client.profile().await.unwrap();
    assert_eq!(user.email, "a@b.com");
    assert_eq!(stub.last_request().url, format!("{BASE_URL}/auth/profile"));
}

#[tokio::test]
async fn update_profile_leaves_cached_user_to_the_session() {
    let stub = StubTransport::new();
    let (client, store) = client_with(&stub);
    client.session_store().save_token("t1");
    store.set(USER_KEY, r#"{"email":"a@b.com","name":"Viejo"}"#);
    let mut updated = user_json("a@b.com", "usuario");
    updated["name"] = serde_json::json!("Nuevo Nombre");
    stub.respond(200, updated);

    let update = ProfileUpdate { name: Some("Nuevo Nombre".to_owned()), ..ProfileUpdate::default() };
    let user = client.update_profile(&update).await.unwrap();
    assert_eq!(user.name, "Nuevo Nombre");
    assert!(store.get(USER_KEY).unwrap().contains("Viejo"));
    assert_eq!(stub.last_request().method, Method::Put);
}

#[tokio::test]
async fn change_password_accepts_empty_response() {
    let stub = StubTransport::new();
    let (client, _) = client_with(&stub);
    client.session_store().save_token("t1");
    stub.respond_raw(204, "");

    let change = PasswordChange { current_password: "a".to_owned(), new_password: "b".to_owned() };
    client.change_password(&change).await.unwrap();
    assert_eq!(
        stub.last_request().body,
        Body::Json(r#"{"currentPassword":"a","newPassword":"b"}"#.to_owned())
    );
}

#[tokio::test]
async fn refresh_token_returns_rotated_token() {
    let stub = StubTransport::new();
    let (client, store) = client_with(&stub);
    client.session_store().save_token("old");
    stub.respond(200, serde_json::json!({ "token": "new" }));

    assert_eq!(client.refresh_token().await.unwrap(), "new");
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("old"));
    assert_eq!(stub.last_request().url, format!("{BASE_URL}/auth/refresh"));
}

#[tokio::test]
async fn rejected_refresh_is_unauthorized() {
    let stub = StubTransport::new();
    let (client, store) = client_with(&stub);
    client.session_store().save_token("old");
    stub.respond(401, serde_json::json!({}));

    assert_eq!(client.refresh_token().await.unwrap_err(), ApiError::Unauthorized);
    assert!(store.get(TOKEN_KEY).is_none());
}
