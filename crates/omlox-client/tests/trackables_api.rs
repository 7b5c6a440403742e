//! Trackables facade against a mock hub.

use std::time::{Duration, Instant};

use omlox_client::{CancellationToken, Client, ClientError, StatusCode};
use omlox_core::entities::{Properties, Trackable};
use omlox_core::enums::{LocationProviderType, TrackableType};
use omlox_core::geometry::{Coord, Geometry, Point, Polygon, Ring};
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEST_ID: &str = "9b59961e-2a6a-4712-86e7-aba5a3e8be1f";

fn test_id() -> Uuid {
    Uuid::parse_str(TEST_ID).unwrap()
}

async fn setup() -> (MockServer, Client) {
    let server = MockServer::start().await;
    let client = Client::new(&server.uri()).expect("failed to create client");
    (server, client)
}

fn mock_trackable() -> Trackable {
    Trackable {
        geometry: Some(Geometry::Polygon(Polygon::new(
            Ring::new(vec![
                Coord::new(7.815694, 48.13021599999995),
                Coord::new(7.815724999999997, 48.13031),
                Coord::new(7.816582, 48.13018799999995),
                Coord::new(7.816551, 48.13009399999996),
                Coord::new(7.815694, 48.13021599999995),
            ])
            .unwrap(),
            vec![],
        ))),
        location_providers: vec!["ac:23:3f:ac:a3:55".into()],
        properties: Some(Properties::from_json(&json!({"test": "value"})).unwrap()),
        ..Trackable::new(test_id(), TrackableType::Omlox, "Test Trackable")
    }
}

fn minimal_body() -> serde_json::Value {
    json!({"id": TEST_ID, "type": "omlox", "name": "Test Trackable"})
}

// ── list / ids ─────────────────────────────────────────────────────

#[tokio::test]
async fn list_returns_trackables() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/trackables/summary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([minimal_body()])))
        .expect(1)
        .mount(&server)
        .await;

    let result = client
        .trackables()
        .list(&CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(
        result,
        vec![Trackable::new(test_id(), TrackableType::Omlox, "Test Trackable")]
    );
}

#[tokio::test]
async fn list_of_empty_collection_is_empty() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/trackables/summary"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&server)
        .await;

    let result = client
        .trackables()
        .list(&CancellationToken::new())
        .await
        .unwrap();
    assert!(result.is_empty());
}

#[tokio::test]
async fn list_server_error_is_status_error() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/trackables/summary"))
        .respond_with(
            ResponseTemplate::new(500).set_body_string(r#"{"error": "internal server error"}"#),
        )
        .mount(&server)
        .await;

    let err = client
        .trackables()
        .list(&CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Status(_)));
    assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    assert!(err.to_string().contains("500"), "{err}");
}

#[tokio::test]
async fn ids_returns_identities_in_order() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/trackables"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            TEST_ID,
            "550e8400-e29b-41d4-a716-446655440000"
        ])))
        .mount(&server)
        .await;

    let result = client
        .trackables()
        .ids(&CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(
        result,
        vec![
            test_id(),
            Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap()
        ]
    );
}

#[tokio::test]
async fn ids_of_empty_or_null_collection_is_empty() {
    for body in ["[]", "null"] {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path("/trackables"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&server)
            .await;

        let result = client
            .trackables()
            .ids(&CancellationToken::new())
            .await
            .unwrap();
        assert!(result.is_empty(), "body {body} should decode as empty");
    }
}

#[tokio::test]
async fn undecodable_body_is_decode_error() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/trackables"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"["not-a-uuid"]"#))
        .mount(&server)
        .await;

    let err = client
        .trackables()
        .ids(&CancellationToken::new())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
    assert!(err.status().is_none());
}

// ── create ─────────────────────────────────────────────────────────

#[tokio::test]
async fn create_echoes_identity_type_and_name() {
    let (server, client) = setup().await;
    let input = mock_trackable();
    Mock::given(method("POST"))
        .and(path("/trackables"))
        .and(header("content-type", "application/json"))
        .and(body_json(&input))
        .respond_with(ResponseTemplate::new(201).set_body_json(minimal_body()))
        .expect(1)
        .mount(&server)
        .await;

    let result = client
        .trackables()
        .create(&CancellationToken::new(), &input)
        .await
        .unwrap();

    assert_eq!(result.id, input.id);
    assert_eq!(result.kind, input.kind);
    assert_eq!(result.name, input.name);
}

#[tokio::test]
async fn create_validation_failure_is_invalid() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/trackables"))
        .respond_with(
            ResponseTemplate::new(400).set_body_string(r#"{"error": "validation failed"}"#),
        )
        .mount(&server)
        .await;

    let err = client
        .trackables()
        .create(&CancellationToken::new(), &mock_trackable())
        .await
        .unwrap_err();

    assert!(err.is_invalid());
    let ClientError::Invalid(status) = &err else {
        unreachable!()
    };
    assert_eq!(status.message(), Some("validation failed"));
}

#[tokio::test]
async fn create_with_malformed_geometry_in_response_is_decode_error() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/trackables"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": TEST_ID,
            "type": "omlox",
            "geometry": {"type": "Polygon", "coordinates": [[[0.0, 0.0], [1.0, 1.0]]]}
        })))
        .mount(&server)
        .await;

    let err = client
        .trackables()
        .create(&CancellationToken::new(), &mock_trackable())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}

// ── get ────────────────────────────────────────────────────────────

#[tokio::test]
async fn get_returns_trackable() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path(format!("/trackables/{TEST_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(minimal_body()))
        .mount(&server)
        .await;

    let result = client
        .trackables()
        .get(&CancellationToken::new(), test_id())
        .await
        .unwrap();

    assert_eq!(
        result,
        Trackable::new(test_id(), TrackableType::Omlox, "Test Trackable")
    );
}

#[tokio::test]
async fn get_unknown_is_not_found() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path(format!("/trackables/{TEST_ID}")))
        .respond_with(
            ResponseTemplate::new(404).set_body_string(r#"{"error": "trackable not found"}"#),
        )
        .mount(&server)
        .await;

    let err = client
        .trackables()
        .get(&CancellationToken::new(), test_id())
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("404"), "{err}");
}

// ── update ─────────────────────────────────────────────────────────

#[tokio::test]
async fn update_sends_put_with_body() {
    let (server, client) = setup().await;
    let input = mock_trackable();
    Mock::given(method("PUT"))
        .and(path(format!("/trackables/{TEST_ID}")))
        .and(header("content-type", "application/json"))
        .and(body_json(&input))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client
        .trackables()
        .update(&CancellationToken::new(), &input, test_id())
        .await
        .unwrap();
}

#[tokio::test]
async fn update_error_statuses_map_to_kinds() {
    for (code, not_found) in [(404_u16, true), (400, false)] {
        let (server, client) = setup().await;
        Mock::given(method("PUT"))
            .and(path(format!("/trackables/{TEST_ID}")))
            .respond_with(ResponseTemplate::new(code))
            .mount(&server)
            .await;

        let err = client
            .trackables()
            .update(&CancellationToken::new(), &mock_trackable(), test_id())
            .await
            .unwrap_err();
        assert_eq!(err.is_not_found(), not_found, "status {code}");
        assert_eq!(err.is_invalid(), !not_found, "status {code}");
    }
}

#[tokio::test]
async fn update_omits_unset_fields() {
    let (server, client) = setup().await;
    Mock::given(method("PUT"))
        .and(path(format!("/trackables/{TEST_ID}")))
        .and(body_json(json!({"id": TEST_ID, "type": "virtual", "name": "renamed"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let partial = Trackable::new(test_id(), TrackableType::Virtual, "renamed");
    client
        .trackables()
        .update(&CancellationToken::new(), &partial, test_id())
        .await
        .unwrap();
}

// ── delete ─────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_removes_one() {
    let (server, client) = setup().await;
    Mock::given(method("DELETE"))
        .and(path(format!("/trackables/{TEST_ID}")))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client
        .trackables()
        .delete(&CancellationToken::new(), test_id())
        .await
        .unwrap();
}

#[tokio::test]
async fn delete_unknown_is_not_found() {
    let (server, client) = setup().await;
    Mock::given(method("DELETE"))
        .and(path(format!("/trackables/{TEST_ID}")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client
        .trackables()
        .delete(&CancellationToken::new(), test_id())
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn delete_all_hits_collection() {
    let (server, client) = setup().await;
    Mock::given(method("DELETE"))
        .and(path("/trackables"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client
        .trackables()
        .delete_all(&CancellationToken::new())
        .await
        .unwrap();
}

#[tokio::test]
async fn delete_all_server_error_is_reported() {
    let (server, client) = setup().await;
    Mock::given(method("DELETE"))
        .and(path("/trackables"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client
        .trackables()
        .delete_all(&CancellationToken::new())
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
}

// ── location ───────────────────────────────────────────────────────

#[tokio::test]
async fn get_location_decodes_3d_position() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path(format!("/trackables/{TEST_ID}/location")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "position": {"type": "Point", "coordinates": [7.815694, 48.130216, 1.5]},
            "source": "test-source",
            "provider_type": "uwb",
            "provider_id": "ac:23:3f:ac:a3:55",
            "trackables": [TEST_ID]
        })))
        .mount(&server)
        .await;

    let location = client
        .trackables()
        .get_location(&CancellationToken::new(), test_id())
        .await
        .unwrap();

    assert_eq!(location.source, "test-source");
    assert_eq!(location.provider_id, "ac:23:3f:ac:a3:55");
    assert_eq!(location.provider_type, LocationProviderType::Uwb);
    assert_eq!(location.position, Point::with_z(7.815694, 48.130216, 1.5));
    assert_eq!(location.trackables, vec![test_id()]);
}

#[tokio::test]
async fn get_location_404_is_not_found_whatever_the_cause() {
    // Unknown trackable and "no location yet" look the same on the wire.
    for body in [r#"{"error": "trackable not found"}"#, ""] {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path(format!("/trackables/{TEST_ID}/location")))
            .respond_with(ResponseTemplate::new(404).set_body_string(body))
            .mount(&server)
            .await;

        let err = client
            .trackables()
            .get_location(&CancellationToken::new(), test_id())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}

// ── cancellation / headers ─────────────────────────────────────────

#[tokio::test]
async fn cancelled_token_sends_nothing() {
    let (server, client) = setup().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(0)
        .mount(&server)
        .await;

    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = client.trackables().list(&cancel).await.unwrap_err();
    assert!(err.is_cancelled());
    assert_eq!(err.to_string(), "request cancelled");

    let err = client.trackables().delete_all(&cancel).await.unwrap_err();
    assert!(err.is_cancelled());

    let received = server.received_requests().await.unwrap_or_default();
    assert!(received.is_empty());
}

#[tokio::test]
async fn cancellation_aborts_in_flight_request() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/trackables/summary"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("[]")
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        trigger.cancel();
    });

    let started = Instant::now();
    let err = client.trackables().list(&cancel).await.unwrap_err();

    assert!(err.is_cancelled());
    assert!(started.elapsed() < Duration::from_secs(1));
}

#[tokio::test]
async fn credentials_and_headers_are_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/trackables"))
        .and(header("authorization", "Bearer hub-token"))
        .and(header("x-tenant", "acme"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::builder(server.uri())
        .bearer_token("hub-token")
        .header("x-tenant", "acme")
        .build()
        .unwrap();
    client
        .trackables()
        .ids(&CancellationToken::new())
        .await
        .unwrap();
}

#[tokio::test]
async fn configured_content_type_does_not_duplicate_json_header() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(format!("/trackables/{TEST_ID}")))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::builder(server.uri())
        .header("content-type", "text/plain")
        .build()
        .unwrap();
    let trackable = Trackable::new(test_id(), TrackableType::Omlox, "tag");
    client
        .trackables()
        .update(&CancellationToken::new(), &trackable, trackable.id)
        .await
        .unwrap();

    let received = server.received_requests().await.unwrap_or_default();
    let values: Vec<_> = received[0]
        .headers
        .get_all("content-type")
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect();
    assert_eq!(values, vec!["application/json".to_string()]);
}

#[tokio::test]
async fn concurrent_requests_share_one_client() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path(format!("/trackables/{TEST_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(minimal_body()))
        .expect(3)
        .mount(&server)
        .await;

    let cancel = CancellationToken::new();
    let api = client.trackables();
    let (a, b, c) = tokio::join!(
        api.get(&cancel, test_id()),
        api.get(&cancel, test_id()),
        api.get(&cancel, test_id()),
    );
    for result in [a, b, c] {
        assert_eq!(result.unwrap().id, test_id());
    }
}
