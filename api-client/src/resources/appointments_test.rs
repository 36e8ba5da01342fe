use crate::test_support::{BASE_URL, StubTransport, client_with};
use crate::transport::{Body, Method};
use crate::types::{AppointmentStatus, NewAppointment};

#[tokio::test]
async fn create_appointment_posts_payload() {
    let stub = StubTransport::new();
    let (client, _) = client_with(&stub);
    stub.respond(
        201,
        serde_json::json!({ "id": "c1", "date": "2026-11-02", "time": "10:30", "reason": "vacuna", "status": "programada" }),
    );

    let new = NewAppointment {
        pet_id: Some("p1".to_owned()),
        vet_id: None,
        date: "2026-11-02".to_owned(),
        time: "10:30".to_owned(),
        reason: "vacuna".to_owned(),
    };
    let created = client.create_appointment(&new).await.unwrap();
    assert_eq!(created.status, AppointmentStatus::Scheduled);
    let request = stub.last_request();
    assert_eq!(request.url, format!("{BASE_URL}/citas"));
    assert_eq!(
        request.body,
        Body::Json(r#"{"petId":"p1","date":"2026-11-02","time":"10:30","reason":"vacuna"}"#.to_owned())
    );
}

#[tokio::test]
async fn cancel_goes_through_status_endpoint() {
    let stub = StubTransport::new();
    let (client, _) = client_with(&stub);
    stub.respond(200, serde_json::json!({ "id": "c1", "date": "2026-11-02", "status": "cancelada" }));

    let updated = client.set_appointment_status("c1", AppointmentStatus::Cancelled).await.unwrap();
    assert_eq!(updated.status, AppointmentStatus::Cancelled);
    let request = stub.last_request();
    assert_eq!(request.method, Method::Put);
    assert_eq!(request.url, format!("{BASE_URL}/citas/c1/estado"));
}
