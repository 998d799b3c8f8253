use std::time::Duration;

use crawler_engine::{DiscoveryError, EndpointSettings, HttpLinkDiscovery, LinkDiscovery};
use pretty_assertions::assert_eq;
use url::Url;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings_for(server: &MockServer) -> EndpointSettings {
    EndpointSettings {
        discovery_url: Url::parse(&format!("{}/api/checker", server.uri())).unwrap(),
        crawl_url: Url::parse(&format!("{}/api/crawl", server.uri())).unwrap(),
        connect_timeout: Duration::from_secs(5),
        request_timeout: Duration::from_secs(5),
    }
}

#[tokio::test]
async fn discovery_posts_seed_and_extracts_links() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/checker"))
        .and(body_json(serde_json::json!({ "url": "https://seed.example.com" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "links": "http://a" },
            { "links": "http://b" },
            { "links": "http://a" },
        ])))
        .mount(&server)
        .await;

    let client = HttpLinkDiscovery::new(settings_for(&server));
    let urls = client.discover("https://seed.example.com").await.unwrap();

    // The client does not deduplicate; that is the selection store's call.
    assert_eq!(urls, vec!["http://a", "http://b", "http://a"]);
}

#[tokio::test]
async fn discovery_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/checker"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = HttpLinkDiscovery::new(settings_for(&server));
    let err = client.discover("https://seed.example.com").await.unwrap_err();
    assert_eq!(err, DiscoveryError::HttpStatus(503));
}

#[tokio::test]
async fn malformed_body_means_no_links_found() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/checker"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "unexpected": true })),
        )
        .mount(&server)
        .await;

    let client = HttpLinkDiscovery::new(settings_for(&server));
    let urls = client.discover("https://seed.example.com").await.unwrap();
    assert!(urls.is_empty());
}

#[tokio::test]
async fn non_json_body_means_no_links_found() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/checker"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = HttpLinkDiscovery::new(settings_for(&server));
    let urls = client.discover("https://seed.example.com").await.unwrap();
    assert!(urls.is_empty());
}

#[tokio::test]
async fn slow_endpoint_surfaces_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/checker"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(serde_json::json!([])),
        )
        .mount(&server)
        .await;

    let mut settings = settings_for(&server);
    settings.request_timeout = Duration::from_millis(50);
    let client = HttpLinkDiscovery::new(settings);

    let err = client.discover("https://seed.example.com").await.unwrap_err();
    assert!(matches!(err, DiscoveryError::Transport(_)));
}
