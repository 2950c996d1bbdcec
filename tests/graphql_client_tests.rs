//! Integration tests for GraphQL query execution.
//!
//! These tests verify request shape (headers, body, variables handling) and
//! the mapping of transport-level versus GraphQL-level failures.

use nexar_api::{ApiEndpoint, GraphqlClient, GraphqlError};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn graphql_endpoint(server: &MockServer) -> ApiEndpoint {
    ApiEndpoint::new(format!("{}/graphql", server.uri())).unwrap()
}

// ============================================================================
// Request Shape
// ============================================================================

#[tokio::test]
async fn test_request_carries_bearer_and_json_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("Authorization", "Bearer test-token"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": {} })))
        .expect(1)
        .mount(&server)
        .await;

    let client = GraphqlClient::new(graphql_endpoint(&server), "test-token");
    client.execute("query { supAttributes { id } }", None).await.unwrap();
}

#[tokio::test]
async fn test_absent_variables_serialize_as_empty_object() {
    let query = "query ListAttributes { supAttributes { id } }";
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_json(json!({ "query": query, "variables": {} })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": {} })))
        .expect(2)
        .mount(&server)
        .await;

    let client = GraphqlClient::new(graphql_endpoint(&server), "test-token");

    // None and explicit null both normalize to {} on the wire.
    client.execute(query, None).await.unwrap();
    client.execute(query, Some(Value::Null)).await.unwrap();
}

#[tokio::test]
async fn test_supplied_variables_are_sent_verbatim() {
    let query = "query ($ids: [String!]) { supManufacturers(ids: $ids) { name } }";
    let variables = json!({ "ids": ["123", "456"] });
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_json(json!({ "query": query, "variables": variables })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": {} })))
        .expect(1)
        .mount(&server)
        .await;

    let client = GraphqlClient::new(graphql_endpoint(&server), "test-token");
    client.execute(query, Some(variables)).await.unwrap();
}

// ============================================================================
// Response Decoding
// ============================================================================

#[tokio::test]
async fn test_successful_response_returns_decoded_data() {
    let data = json!({ "supAttributes": [{ "id": "1", "name": "Capacitance" }] });
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": data })))
        .mount(&server)
        .await;

    let client = GraphqlClient::new(graphql_endpoint(&server), "test-token");
    let result = client
        .execute("query { supAttributes { id name } }", None)
        .await
        .unwrap();

    assert_eq!(result, data);
}

#[tokio::test]
async fn test_errors_array_in_2xx_surfaces_graphql_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [{ "message": "bad field" }],
        })))
        .mount(&server)
        .await;

    let client = GraphqlClient::new(graphql_endpoint(&server), "test-token");
    let result = client.execute("query { nope }", None).await;

    match result {
        Err(GraphqlError::Graphql { errors, data }) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].message, "bad field");
            assert!(data.is_none());
        }
        other => panic!("expected GraphqlError::Graphql, got {other:?}"),
    }
}

#[tokio::test]
async fn test_partial_data_is_preserved_alongside_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "supSearch": null },
            "errors": [{ "message": "timeout resolving supSearch" }],
        })))
        .mount(&server)
        .await;

    let client = GraphqlClient::new(graphql_endpoint(&server), "test-token");
    let result = client.execute("query { supSearch { hits } }", None).await;

    match result {
        Err(GraphqlError::Graphql { errors, data }) => {
            assert!(errors[0].message.contains("timeout"));
            assert_eq!(data, Some(json!({ "supSearch": null })));
        }
        other => panic!("expected GraphqlError::Graphql, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_errors_array_is_not_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "supAttributes": [] },
            "errors": [],
        })))
        .mount(&server)
        .await;

    let client = GraphqlClient::new(graphql_endpoint(&server), "test-token");
    let result = client
        .execute("query { supAttributes { id } }", None)
        .await
        .unwrap();

    assert_eq!(result, json!({ "supAttributes": [] }));
}

#[tokio::test]
async fn test_missing_data_decodes_to_null() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = GraphqlClient::new(graphql_endpoint(&server), "test-token");
    let result = client.execute("query { supAttributes { id } }", None).await;

    assert_eq!(result.unwrap(), Value::Null);
}

// ============================================================================
// Failure Planes
// ============================================================================

#[tokio::test]
async fn test_non_2xx_maps_to_response_error_not_graphql_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let client = GraphqlClient::new(graphql_endpoint(&server), "test-token");
    let result = client.execute("query { supAttributes { id } }", None).await;

    match result {
        Err(GraphqlError::Response { status, message }) => {
            assert_eq!(status, 502);
            assert!(message.contains("bad gateway"));
        }
        other => panic!("expected GraphqlError::Response, got {other:?}"),
    }
}

#[tokio::test]
async fn test_connection_failure_maps_to_transport_error() {
    let endpoint = ApiEndpoint::new("http://127.0.0.1:9/graphql").unwrap();
    let client = GraphqlClient::new(endpoint, "test-token");

    let result = client.execute("query { supAttributes { id } }", None).await;

    assert!(matches!(result, Err(GraphqlError::Transport(_))));
}

#[tokio::test]
async fn test_non_json_2xx_body_maps_to_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy page</html>"))
        .mount(&server)
        .await;

    let client = GraphqlClient::new(graphql_endpoint(&server), "test-token");
    let result = client.execute("query { supAttributes { id } }", None).await;

    assert!(matches!(result, Err(GraphqlError::Decode(_))));
}
