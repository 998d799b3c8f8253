use std::time::Duration;

use crawler_engine::{Crawler, EndpointSettings, HttpCrawler};
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
async fn crawl_returns_output_and_html() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/crawl"))
        .and(body_json(serde_json::json!({ "url": "http://a" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "output": "summary text",
            "html": "<p>fragment</p>",
        })))
        .mount(&server)
        .await;

    let crawler = HttpCrawler::new(settings_for(&server));
    let outcome = crawler.crawl("http://a").await;

    assert_eq!(outcome.status, 200);
    assert_eq!(outcome.data, Some(serde_json::json!("summary text")));
    assert_eq!(outcome.html.as_deref(), Some("<p>fragment</p>"));
}

#[tokio::test]
async fn non_success_status_is_preserved() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/crawl"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(serde_json::json!({ "output": null })),
        )
        .mount(&server)
        .await;

    let crawler = HttpCrawler::new(settings_for(&server));
    let outcome = crawler.crawl("http://missing").await;

    assert_eq!(outcome.status, 404);
    assert_eq!(outcome.html, None);
}

#[tokio::test]
async fn empty_html_counts_as_absent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/crawl"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "output": { "words": 12 },
            "html": "",
        })))
        .mount(&server)
        .await;

    let crawler = HttpCrawler::new(settings_for(&server));
    let outcome = crawler.crawl("http://a").await;

    assert_eq!(outcome.html, None);
    assert_eq!(outcome.data, Some(serde_json::json!({ "words": 12 })));
}

#[tokio::test]
async fn missing_fields_default_to_absent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/crawl"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let crawler = HttpCrawler::new(settings_for(&server));
    let outcome = crawler.crawl("http://a").await;

    assert_eq!(outcome.status, 200);
    assert_eq!(outcome.data, None);
    assert_eq!(outcome.html, None);
}

#[tokio::test]
async fn transport_failure_becomes_synthetic_500() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/crawl"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(serde_json::json!({ "output": "late" })),
        )
        .mount(&server)
        .await;

    let mut settings = settings_for(&server);
    settings.request_timeout = Duration::from_millis(50);
    let crawler = HttpCrawler::new(settings);

    let outcome = crawler.crawl("http://slow").await;
    assert_eq!(outcome.status, 500);
    assert_eq!(outcome.data, None);
    assert_eq!(outcome.html, None);
}

#[tokio::test]
async fn unparsable_body_becomes_synthetic_500() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/crawl"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let crawler = HttpCrawler::new(settings_for(&server));
    let outcome = crawler.crawl("http://a").await;
    assert_eq!(outcome.status, 500);
}
