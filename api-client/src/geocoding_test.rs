use super::*;
use crate::test_support::{StubTransport, client_with};

fn geocoder(stub: &Arc<StubTransport>) -> Geocoder {
    let (client, _) = client_with(stub);
    client.geocoder(Some("pk.test".to_owned()))
}

#[tokio::test]
async fn search_parses_features_as_lat_lng() {
    let stub = StubTransport::new();
    stub.respond(
        200,
        serde_json::json!({ "features": [
            { "place_name": "Plaza de Mayo, Buenos Aires", "center": [-58.3722, -34.6083] },
            { "place_name": "Otra", "center": [1.0, 2.0] }
        ]}),
    );

    let places = geocoder(&stub).search("Plaza de Mayo").await.unwrap();
    assert_eq!(places.len(), 2);
    assert_eq!(places[0].name, "Plaza de Mayo, Buenos Aires");
    assert_eq!(places[0].point, GeoPoint { lat: -34.6083, lng: -58.3722 });

    let request = stub.last_request();
    assert_eq!(
        request.url,
        "https://api.mapbox.com/geocoding/v5/mapbox.places/Plaza%20de%20Mayo.json?access_token=pk.test&limit=5&language=es"
    );
    assert_eq!(request.header("Authorization"), None);
}

#[tokio::test]
async fn bearer_token_is_never_forwarded_to_mapbox() {
    let stub = StubTransport::new();
    let (client, _) = client_with(&stub);
    client.session_store().save_token("secret");
    stub.respond(200, serde_json::json!({ "features": [] }));

    let _ = client.geocoder(Some("pk.test".to_owned())).search("Lima").await;
    assert_eq!(stub.last_request().header("Authorization"), None);
}

#[tokio::test]
async fn locate_without_matches_is_not_found() {
    let stub = StubTransport::new();
    stub.respond(200, serde_json::json!({ "features": [] }));

    assert_eq!(geocoder(&stub).locate("xyz").await.unwrap_err(), GeocodeError::NotFound);
}

#[tokio::test]
async fn reverse_uses_lng_lat_order() {
    let stub = StubTransport::new();
    stub.respond(200, serde_json::json!({ "features": [{ "place_name": "Centro", "center": [-58.4, -34.6] }] }));

    let place = geocoder(&stub).reverse(GeoPoint { lat: -34.6, lng: -58.4 }).await.unwrap();
    assert_eq!(place.name, "Centro");
    assert!(stub.last_request().url.contains("/mapbox.places/-58.4,-34.6.json?"));
}

#[tokio::test]
async fn blank_query_and_missing_token_short_circuit() {
    let stub = StubTransport::new();
    assert_eq!(geocoder(&stub).search("   ").await.unwrap_err(), GeocodeError::EmptyQuery);

    let (client, _) = client_with(&stub);
    let unconfigured = client.geocoder(None);
    assert!(!unconfigured.is_configured());
    assert_eq!(unconfigured.search("Lima").await.unwrap_err(), GeocodeError::MissingToken);
    assert!(stub.requests().is_empty());
}

#[tokio::test]
async fn rejected_token_surfaces_status() {
    let stub = StubTransport::new();
    stub.respond(401, serde_json::json!({ "message": "Not Authorized - Invalid Token" }));

    let err = geocoder(&stub).search("Lima").await.unwrap_err();
    assert_eq!(
        err,
        GeocodeError::Api(ApiError::Status { status: 401, message: "Not Authorized - Invalid Token".to_owned() })
    );
}

#[test]
fn static_map_url_places_pins() {
    let stub = StubTransport::new();
    let url = geocoder(&stub)
        .static_map_url(
            GeoPoint { lat: -34.6, lng: -58.4 },
            &[GeoPoint { lat: -34.61, lng: -58.41 }],
            13,
            (600, 300),
        )
        .unwrap();
    assert_eq!(
        url,
        "https://api.mapbox.com/styles/v1/mapbox/streets-v12/static/pin-s+e4572e(-58.41,-34.61)/-58.4,-34.6,13/600x300?access_token=pk.test"
    );
}

#[test]
fn static_map_url_without_markers_or_token() {
    let stub = StubTransport::new();
    let url = geocoder(&stub)
        .static_map_url(GeoPoint { lat: 1.5, lng: 2.5 }, &[], 10, (300, 200))
        .unwrap();
    assert!(url.contains("/static/2.5,1.5,10/300x200?"));

    let (client, _) = client_with(&stub);
    let err = client.geocoder(None).static_map_url(GeoPoint::default(), &[], 10, (1, 1)).unwrap_err();
    assert_eq!(err, GeocodeError::MissingToken);
}
