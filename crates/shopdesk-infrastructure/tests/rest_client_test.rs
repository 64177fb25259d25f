use serde::{Deserialize, Serialize};
use serde_json::json;
use shopdesk_core::config::ApiConfig;
use shopdesk_core::error::ShopdeskError;
use shopdesk_infrastructure::RestClient;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Item {
    id: i64,
    name: String,
}

fn client(server: &MockServer, token: Option<&str>) -> RestClient {
    let config = ApiConfig {
        base_url: format!("{}/api/", server.uri()),
        token: token.map(str::to_string),
        timeout_secs: 5,
    };
    RestClient::new(&config).unwrap()
}

#[tokio::test]
async fn test_get_unwraps_envelope_and_sends_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/items/1"))
        .and(header("authorization", "Bearer secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "id": 1, "name": "Mug" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let item: Item = client(&server, Some("secret")).get("/items/1").await.unwrap();
    assert_eq!(
        item,
        Item {
            id: 1,
            name: "Mug".to_string()
        }
    );
}

#[tokio::test]
async fn test_get_page_returns_meta() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/items"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [],
            "meta": { "page": 2, "limit": 20, "total": 21, "totalPages": 2 }
        })))
        .mount(&server)
        .await;

    let (items, meta): (Vec<Item>, _) = client(&server, None)
        .get_page("/items", &[("page", "2")])
        .await
        .unwrap();
    assert!(items.is_empty());
    assert_eq!(meta.unwrap().total, 21);
}

#[tokio::test]
async fn test_server_error_message_passes_through() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/items/1"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "success": false,
            "error": "Database connection lost"
        })))
        .mount(&server)
        .await;

    let err = client(&server, None)
        .put::<Item, _>("/items/1", &json!({ "name": "Mug" }))
        .await
        .unwrap_err();
    assert_eq!(err, ShopdeskError::http(500, "Database connection lost"));
    assert!(err.is_server_error());
    assert_eq!(err.user_message(), "Database connection lost");
}

#[tokio::test]
async fn test_plain_text_and_empty_error_bodies() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/text"))
        .respond_with(ResponseTemplate::new(502).set_body_string("upstream down"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/empty"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let client = client(&server, None);
    let err = client.get::<Item>("/text").await.unwrap_err();
    assert_eq!(err, ShopdeskError::http(502, "upstream down"));

    let err = client.get::<Item>("/empty").await.unwrap_err();
    assert_eq!(err, ShopdeskError::http(403, "Forbidden"));
    assert!(err.is_client_error());
}

#[tokio::test]
async fn test_success_false_on_200_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/items"))
        .and(body_json(json!({ "id": 0, "name": "" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "Name is required"
        })))
        .mount(&server)
        .await;

    let err = client(&server, None)
        .post::<Item, _>(
            "/items",
            &Item {
                id: 0,
                name: String::new(),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err, ShopdeskError::http(200, "Name is required"));
}

#[tokio::test]
async fn test_get_optional_maps_404_to_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/items/404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "success": false,
            "error": "Not found"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/items/500"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client(&server, None);
    assert_eq!(client.get_optional::<Item>("/items/404").await.unwrap(), None);
    assert!(client.get_optional::<Item>("/items/500").await.is_err());
}

#[tokio::test]
async fn test_delete_accepts_no_content_and_envelopes() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/items/1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/items/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Deleted"
        })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/items/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "Item is referenced by an order"
        })))
        .mount(&server)
        .await;

    let client = client(&server, None);
    client.delete("/items/1").await.unwrap();
    client.delete("/items/2").await.unwrap();
    let err = client.delete("/items/3").await.unwrap_err();
    assert_eq!(err.user_message(), "Item is referenced by an order");
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let config = ApiConfig {
        base_url: "http://127.0.0.1:9/api".to_string(),
        token: None,
        timeout_secs: 2,
    };
    let err = RestClient::new(&config)
        .unwrap()
        .get::<Item>("/items")
        .await
        .unwrap_err();
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_undecodable_body_is_serialization_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/items/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let err = client(&server, None).get::<Item>("/items/1").await.unwrap_err();
    assert!(matches!(err, ShopdeskError::Serialization { .. }));
}
