use crate::test_support::{BASE_URL, StubTransport, client_with, user_json};

#[tokio::test]
async fn stats_and_users() {
    let stub = StubTransport::new();
    let (client, _) = client_with(&stub);
    stub.respond(200, serde_json::json!({ "totalPets": 5, "pendingRequests": 2 }));
    stub.respond(200, serde_json::json!([user_json("a@b.com", "admin")]));

    let stats = client.dashboard_stats().await.unwrap();
    assert_eq!(stats.total_pets, 5);
    assert_eq!(stats.pending_requests, 2);
    let users = client.list_users().await.unwrap();
    assert_eq!(users.len(), 1);

    let urls: Vec<String> = stub.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(urls, vec![format!("{BASE_URL}/admin/estadisticas"), format!("{BASE_URL}/admin/usuarios")]);
}

#[tokio::test]
async fn forbidden_surfaces_status() {
    let stub = StubTransport::new();
    let (client, _) = client_with(&stub);
    stub.respond(403, serde_json::json!({ "message": "Acceso denegado" }));

    let err = client.dashboard_stats().await.unwrap_err();
    assert_eq!(err.status(), Some(403));
    assert_eq!(err.to_string(), "Acceso denegado");
}
