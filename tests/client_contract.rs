//! HTTP contract tests for the zero-click client.
//!
//! A wiremock server stands in for the API to verify the request format,
//! the transport error policy and end-to-end rendering. The live API test
//! is marked `#[ignore]`.

use std::collections::BTreeMap;

use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zeroclick::{
    render, search_html, ClientConfig, ParsePolicy, RenderConfig, ResponseKind, SearchError,
    ZeroClickClient, NO_RESULTS,
};

const RUST_LANGUAGE: &str = include_str!("../test-data/rust_language.json");

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("zeroclick=trace"))
        .with_test_writer()
        .try_init();
}

fn client_for(server: &MockServer, policy: ParsePolicy) -> ZeroClickClient {
    let config = ClientConfig {
        endpoint: format!("{}/", server.uri()),
        user_agent: "TestBot/1.0".into(),
        parse_policy: policy,
    };
    ZeroClickClient::new(config).expect("valid config")
}

fn javascript_body(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("content-type", "application/x-javascript")
        .set_body_string(body)
}

#[tokio::test]
async fn request_carries_fixed_params_and_user_agent() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("q", "rust language"))
        .and(query_param("format", "json"))
        .and(query_param("pretty", "1"))
        .and(query_param("no_redirect", "1"))
        .and(query_param("no_html", "1"))
        .and(query_param("skip_disambig", "1"))
        .and(header("user-agent", "TestBot/1.0"))
        .respond_with(javascript_body(RUST_LANGUAGE))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, ParsePolicy::Strict);
    let result = client
        .search("rust language", &BTreeMap::new())
        .await
        .expect("request should succeed")
        .expect("should have a result");

    assert_eq!(result.kind, ResponseKind::Article);
    assert_eq!(result.results.len(), 1);
}

#[tokio::test]
async fn extra_params_override_fixed_ones() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("skip_disambig", "1"))
        .and(query_param("t", "zeroclick-tests"))
        .respond_with(javascript_body("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, ParsePolicy::Lenient);
    let extra = BTreeMap::from([
        ("skip_disambig".to_owned(), "1".to_owned()),
        ("t".to_owned(), "zeroclick-tests".to_owned()),
    ]);
    let result = client.search("x", &extra).await.expect("should succeed");
    assert!(result.is_some());
}

#[tokio::test]
async fn http_status_error_is_no_result() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, ParsePolicy::Lenient);
    let result = client.search("rust", &BTreeMap::new()).await;
    assert!(matches!(result, Ok(None)));
}

#[tokio::test]
async fn rate_limit_status_is_no_result() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let client = client_for(&server, ParsePolicy::Strict);
    let html = search_html(&client, "rust", &RenderConfig::default())
        .await
        .expect("transport failures are absorbed");
    assert_eq!(html, NO_RESULTS);
}

#[tokio::test]
async fn non_json_body_is_unexpected_error() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html")
                .set_body_string("<html>captcha</html>"),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, ParsePolicy::Lenient);
    let result = client.search("rust", &BTreeMap::new()).await;
    assert!(matches!(result, Err(SearchError::Unexpected(_))));
}

#[tokio::test]
async fn undecodable_body_is_unexpected_error() {
    init_tracing();
    let server = MockServer::start().await;

    // Claims gzip but sends plain JSON, so decompression fails mid-read.
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/x-javascript")
                .insert_header("content-encoding", "gzip")
                .set_body_string(RUST_LANGUAGE),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, ParsePolicy::Lenient);
    let result = client.search("rust", &BTreeMap::new()).await;
    assert!(
        matches!(result, Err(SearchError::Unexpected(_))),
        "unexpected outcome: {result:?}"
    );
}

#[tokio::test]
async fn strict_policy_surfaces_unknown_type() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(javascript_body(r#"{"Type": "X"}"#))
        .mount(&server)
        .await;

    let strict = client_for(&server, ParsePolicy::Strict);
    let result = strict.search("rust", &BTreeMap::new()).await;
    assert!(matches!(result, Err(SearchError::MalformedResponse(_))));

    let lenient = client_for(&server, ParsePolicy::Lenient);
    let result = lenient
        .search("rust", &BTreeMap::new())
        .await
        .expect("lenient never rejects the type code")
        .expect("should have a result");
    assert_eq!(result.type_code(), "X");
}

#[tokio::test]
async fn search_html_renders_fixture() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(javascript_body(RUST_LANGUAGE))
        .mount(&server)
        .await;

    let client = client_for(&server, ParsePolicy::Strict);
    let config = RenderConfig {
        header_start_level: 2,
        hide_signature: true,
        ..Default::default()
    };
    let html = search_html(&client, "rust language", &config)
        .await
        .expect("should succeed");

    assert!(html.starts_with("<h2>Abstract</h2><p><b>Rust (programming language)</b>"));
    assert!(html.contains("<h2>Results</h2>"));
    assert!(!html.contains("<footer>"));
}

#[tokio::test]
async fn unreachable_endpoint_is_no_result() {
    let config = ClientConfig {
        endpoint: "http://127.0.0.1:9/".into(),
        ..Default::default()
    };
    let client = ZeroClickClient::new(config).expect("valid config");
    let result = client.search("rust", &BTreeMap::new()).await;
    assert!(matches!(result, Ok(None)));
}

#[tokio::test]
#[ignore] // Live test — run with `cargo test -- --ignored`
async fn live_zero_click_search() {
    init_tracing();
    let result = zeroclick::search("rust programming language", "zeroclick-tests", &BTreeMap::new())
        .await
        .expect("live search should not error");
    let html = render(result.as_ref(), &RenderConfig::default());
    assert!(!html.is_empty());
}
