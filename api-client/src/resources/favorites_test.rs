use crate::test_support::{BASE_URL, StubTransport, client_with};
use crate::transport::Method;

#[tokio::test]
async fn add_and_remove_use_pet_segment() {
    let stub = StubTransport::new();
    let (client, _) = client_with(&stub);
    stub.respond(201, serde_json::json!({ "ok": true }));
    stub.respond_raw(204, "");

    client.add_favorite("p1").await.unwrap();
    client.remove_favorite("p1").await.unwrap();
    let requests = stub.requests();
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(requests[0].url, format!("{BASE_URL}/favoritos/p1"));
    assert_eq!(requests[1].method, Method::Delete);
    assert_eq!(requests[1].url, format!("{BASE_URL}/favoritos/p1"));
}

#[tokio::test]
async fn favorites_lists_pets() {
    let stub = StubTransport::new();
    let (client, _) = client_with(&stub);
    stub.respond(200, serde_json::json!([{ "id": "p1", "name": "Luna" }]));

    let pets = client.favorites().await.unwrap();
    assert_eq!(pets[0].name, "Luna");
}
