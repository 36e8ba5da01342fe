use crate::test_support::{BASE_URL, StubTransport, client_with};
use crate::transport::{Body, FormValue, Method};
use crate::types::{ImageUpload, PetDraft, PetQuery, PetSize, Sex, Species};

fn pet_json(id: &str, name: &str) -> serde_json::Value {
    serde_json::json!({ "id": id, "name": name, "species": "perro", "available": true })
}

#[test]
fn query_pairs_skip_unset_and_blank_fields() {
    let query = PetQuery { search: Some("   ".to_owned()), ..PetQuery::default() };
    assert!(query.to_pairs().is_empty());

    let query = PetQuery {
        species: Some(Species::Gato),
        sex: Some(Sex::Hembra),
        size: Some(PetSize::Pequeno),
        available: Some(true),
        search: Some(" siamés ".to_owned()),
    };
    assert_eq!(
        query.to_pairs(),
        vec![
            ("especie", "gato".to_owned()),
            ("sexo", "hembra".to_owned()),
            ("tamano", "pequeno".to_owned()),
            ("disponible", "true".to_owned()),
            ("busqueda", "siamés".to_owned()),
        ]
    );
}

#[test]
fn draft_form_includes_image_and_trims_text() {
    let draft = PetDraft {
        name: " Luna ".to_owned(),
        species: Species::Gato,
        age_months: Some(8),
        available: true,
        ..PetDraft::default()
    };
    let image = ImageUpload {
        file_name: "luna.jpg".to_owned(),
        content_type: "image/jpeg".to_owned(),
        bytes: vec![1, 2, 3],
    };
    let form = draft.to_form(Some(&image));
    assert!(form.contains(&("name".to_owned(), FormValue::Text("Luna".to_owned()))));
    assert!(form.contains(&("ageMonths".to_owned(), FormValue::Text("8".to_owned()))));
    assert!(!form.iter().any(|(name, _)| name == "breed"));
    let (name, value) = form.last().unwrap();
    assert_eq!(name, "imagen");
    assert!(matches!(value, FormValue::File { bytes, .. } if bytes == &vec![1, 2, 3]));
}

#[tokio::test]
async fn list_pets_sends_filters_as_query() {
    let stub = StubTransport::new();
    let (client, _) = client_with(&stub);
    stub.respond(200, serde_json::json!([pet_json("p1", "Firulais")]));

    let query = PetQuery { species: Some(Species::Perro), ..PetQuery::default() };
    let pets = client.list_pets(&query).await.unwrap();
    assert_eq!(pets.len(), 1);
    assert_eq!(stub.last_request().url, format!("{BASE_URL}/mascotas?especie=perro"));
}

#[tokio::test]
async fn get_pet_uses_id_segment() {
    let stub = StubTransport::new();
    let (client, _) = client_with(&stub);
    stub.respond(200, pet_json("p9", "Toby"));

    let pet = client.get_pet("p9").await.unwrap();
    assert_eq!(pet.name, "Toby");
    assert_eq!(stub.last_request().url, format!("{BASE_URL}/mascotas/p9"));
}

#[tokio::test]
async fn my_pets_hits_owner_endpoint() {
    let stub = StubTransport::new();
    let (client, _) = client_with(&stub);
    stub.respond(200, serde_json::json!([]));

    client.my_pets().await.unwrap();
    assert_eq!(stub.last_request().url, format!("{BASE_URL}/mascotas/mis-mascotas"));
}

#[tokio::test]
async fn create_pet_is_multipart_post() {
    let stub = StubTransport::new();
    let (client, _) = client_with(&stub);
    stub.respond(201, pet_json("p2", "Luna"));

    let draft = PetDraft { name: "Luna".to_owned(), ..PetDraft::default() };
    client.create_pet(&draft, None).await.unwrap();
    let request = stub.last_request();
    assert_eq!(request.method, Method::Post);
    assert!(matches!(request.body, Body::Multipart(_)));
}

#[tokio::test]
async fn update_and_delete_target_the_pet() {
    let stub = StubTransport::new();
    let (client, _) = client_with(&stub);
    stub.respond(200, pet_json("p2", "Luna"));
    stub.respond_raw(204, "");

    client.update_pet("p2", &PetDraft::default(), None).await.unwrap();
    client.delete_pet("p2").await.unwrap();
    let requests = stub.requests();
    assert_eq!(requests[0].method, Method::Put);
    assert_eq!(requests[0].url, format!("{BASE_URL}/mascotas/p2"));
    assert_eq!(requests[1].method, Method::Delete);
    assert_eq!(requests[1].url, format!("{BASE_URL}/mascotas/p2"));
}
