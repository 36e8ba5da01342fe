use crate::test_support::{BASE_URL, StubTransport, client_with};
use crate::transport::{Body, Method};
use crate::types::{AdoptionApplication, RequestStatus};

fn request_json(id: &str, status: &str) -> serde_json::Value {
    serde_json::json!({ "id": id, "petId": "p1", "status": status })
}

#[tokio::test]
async fn set_status_puts_spanish_state() {
    let stub = StubTransport::new();
    let (client, _) = client_with(&stub);
    stub.respond(200, request_json("s1", "aprobada"));

    let updated = client.set_adoption_status("s1", RequestStatus::Approved).await.unwrap();
    assert_eq!(updated.status, RequestStatus::Approved);
    let request = stub.last_request();
    assert_eq!(request.method, Method::Put);
    assert_eq!(request.url, format!("{BASE_URL}/solicitudes/s1/estado"));
    assert_eq!(request.body, Body::Json(r#"{"estado":"aprobada"}"#.to_owned()));
}

#[tokio::test]
async fn returned_state_wins_over_requested_state() {
    let stub = StubTransport::new();
    let (client, _) = client_with(&stub);
    stub.respond(200, request_json("s1", "enviada"));

    let updated = client.set_adoption_status("s1", RequestStatus::Approved).await.unwrap();
    assert_eq!(updated.status, RequestStatus::Sent);
}

#[tokio::test]
async fn listing_endpoints() {
    let stub = StubTransport::new();
    let (client, _) = client_with(&stub);
    stub.respond(200, serde_json::json!([request_json("s1", "pendiente")]));
    stub.respond(200, serde_json::json!([]));

    assert_eq!(client.my_adoption_requests().await.unwrap().len(), 1);
    assert!(client.received_adoption_requests().await.unwrap().is_empty());
    let urls: Vec<String> = stub.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(urls, vec![format!("{BASE_URL}/solicitudes"), format!("{BASE_URL}/solicitudes/recibidas")]);
}

#[tokio::test]
async fn create_and_cancel() {
    let stub = StubTransport::new();
    let (client, _) = client_with(&stub);
    stub.respond(201, request_json("s2", "pendiente"));
    stub.respond_raw(204, "");

    let application = AdoptionApplication { pet_id: "p1".to_owned(), ..AdoptionApplication::default() };
    let created = client.create_adoption_request(&application).await.unwrap();
    client.cancel_adoption_request(&created.id).await.unwrap();

    let requests = stub.requests();
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(requests[1].method, Method::Delete);
    assert_eq!(requests[1].url, format!("{BASE_URL}/solicitudes/s2"));
}

#[tokio::test]
async fn duplicate_request_surfaces_backend_message() {
    let stub = StubTransport::new();
    let (client, _) = client_with(&stub);
    stub.respond(409, serde_json::json!({ "message": "Ya enviaste una solicitud para esta mascota" }));

    let err = client.create_adoption_request(&AdoptionApplication::default()).await.unwrap_err();
    assert_eq!(err.to_string(), "Ya enviaste una solicitud para esta mascota");
}
