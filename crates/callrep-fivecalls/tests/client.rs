//! Integration tests for `FiveCallsClient` using wiremock HTTP mocks.

use callrep_fivecalls::{FiveCallsClient, LookupError, LookupWarning};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> FiveCallsClient {
    FiveCallsClient::with_base_url(Some("test-key"), "callrep-test", base_url)
        .expect("client construction should not fail")
}

fn representatives_body() -> serde_json::Value {
    serde_json::json!({
        "location": "San Francisco",
        "lowAccuracy": false,
        "representatives": [
            {
                "id": "P000197",
                "name": "Nancy Pelosi",
                "phone": "202-225-4965",
                "url": "https://pelosi.house.gov",
                "party": "Democrat",
                "state": "CA",
                "district": "11",
                "reason": "This is your representative in the House.",
                "area": "US House",
                "field_offices": [
                    { "phone": "415-556-4862", "city": "San Francisco" }
                ]
            },
            {
                "id": "P000145",
                "name": "Alex Padilla",
                "phone": "202-224-3553",
                "party": "Democrat",
                "state": "CA",
                "district": "",
                "area": "US Senate",
                "field_offices": []
            }
        ]
    })
}

#[tokio::test]
async fn lookup_returns_parsed_representatives() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/representatives"))
        .and(query_param("location", "94110"))
        .and(query_param("areas", "US House,US Senate"))
        .and(header("X-5Calls-Token", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(representatives_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&format!("{}/v1", server.uri()));
    let outcome = client.lookup("94110").await.expect("should parse reps");

    assert_eq!(outcome.representatives.len(), 2);
    assert_eq!(outcome.representatives[0].name, "Nancy Pelosi");
    assert_eq!(outcome.representatives[0].title(), "Representative");
    assert_eq!(outcome.representatives[1].title(), "Senator");
    assert!(outcome.warning.is_none());
    assert_eq!(outcome.location.as_deref(), Some("San Francisco"));
}

#[tokio::test]
async fn low_accuracy_returns_list_with_warning() {
    let server = MockServer::start().await;

    let mut body = representatives_body();
    body["lowAccuracy"] = serde_json::json!(true);

    Mock::given(method("GET"))
        .and(path("/representatives"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let outcome = client.lookup("10001").await.expect("should succeed");

    assert_eq!(outcome.representatives.len(), 2);
    assert_eq!(outcome.warning, Some(LookupWarning::LowAccuracy));
    assert!(outcome
        .warning
        .unwrap()
        .to_string()
        .contains("may map to multiple districts"));
}

#[tokio::test]
async fn missing_representatives_key_is_empty_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/representatives"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let outcome = client.lookup("00000").await.expect("should succeed");

    assert!(outcome.representatives.is_empty());
    assert!(outcome.warning.is_none());
}

#[tokio::test]
async fn null_values_in_records_do_not_fail_the_lookup() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "lowAccuracy": null,
        "representatives": [
            {
                "name": "Alex Padilla",
                "area": "US Senate",
                "state": null,
                "district": null,
                "phone": null,
                "field_offices": null
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/representatives"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let outcome = client.lookup("95814").await.expect("nulls should not fail");

    assert_eq!(outcome.representatives.len(), 1);
    assert!(outcome.representatives[0].field_offices.is_empty());
    assert!(outcome.representatives[0].state.is_empty());
    assert!(outcome.warning.is_none());
}

#[tokio::test]
async fn null_representatives_is_empty_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/representatives"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "representatives": null })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let outcome = client.lookup("00000").await.expect("should succeed");

    assert!(outcome.representatives.is_empty());
}

#[tokio::test]
async fn api_error_response_surfaces_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/representatives"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(serde_json::json!({ "error": "bad zip" })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.lookup("abc").await.unwrap_err();

    assert!(
        matches!(err, LookupError::Api { status: 400, ref message } if message.as_deref() == Some("bad zip")),
        "unexpected error: {err:?}"
    );
    assert_eq!(err.api_message(), Some("bad zip"));
    let msg = err.to_string();
    assert!(msg.contains("400"), "{msg}");
    assert!(msg.contains("bad zip"), "{msg}");
    assert!(!err.is_transport());
}

#[tokio::test]
async fn api_error_without_body_has_no_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/representatives"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.lookup("94110").await.unwrap_err();

    assert!(matches!(
        err,
        LookupError::Api {
            status: 503,
            message: None
        }
    ));
    assert_eq!(err.to_string(), "Error fetching representatives: 503");
}

#[tokio::test]
async fn non_200_success_status_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/representatives"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.lookup("94110").await.unwrap_err();
    assert!(matches!(err, LookupError::Api { status: 204, .. }));
}

#[tokio::test]
async fn malformed_body_is_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/representatives"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.lookup("94110").await.unwrap_err();

    assert!(matches!(err, LookupError::Deserialize { .. }));
    assert!(err.is_transport());
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    // Bind then release a port so nothing is listening on it.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let client = test_client(&format!("http://{addr}"));
    let err = client.lookup("94110").await.unwrap_err();

    assert!(matches!(err, LookupError::Http(_)), "unexpected: {err:?}");
    assert!(err.is_transport());
}

#[tokio::test]
async fn missing_key_sends_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = FiveCallsClient::with_base_url(None, "callrep-test", &server.uri())
        .expect("client construction should not fail");
    let err = client.lookup("94110").await.unwrap_err();

    assert!(matches!(err, LookupError::MissingApiKey));
}
