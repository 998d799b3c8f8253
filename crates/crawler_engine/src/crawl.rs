use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::discovery::UrlRequest;
use crate::{CrawlOutcome, EndpointSettings};

#[derive(Debug, Deserialize)]
struct CrawlResponseBody {
    #[serde(default)]
    output: Option<Value>,
    #[serde(default)]
    html: Option<String>,
}

#[async_trait::async_trait]
pub trait Crawler: Send + Sync {
    async fn crawl(&self, url: &str) -> CrawlOutcome;
}

/// POSTs one URL to the crawl endpoint. Never fails past its boundary: a
/// transport failure or unparsable body becomes a synthetic `status = 500`
/// outcome, so the processing loop cannot abort mid-run on one bad URL.
#[derive(Debug, Clone)]
pub struct HttpCrawler {
    endpoint: Url,
    settings: EndpointSettings,
}

impl HttpCrawler {
    pub fn new(settings: EndpointSettings) -> Self {
        Self {
            endpoint: settings.crawl_url.clone(),
            settings,
        }
    }
}

#[async_trait::async_trait]
impl Crawler for HttpCrawler {
    async fn crawl(&self, url: &str) -> CrawlOutcome {
        let client = match self.settings.build_client() {
            Ok(client) => client,
            Err(err) => {
                log::warn!("crawl client build failed for {url}: {err}");
                return CrawlOutcome::transport_failure();
            }
        };

        let response = match client
            .post(self.endpoint.clone())
            .json(&UrlRequest { url })
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                log::warn!("crawl request for {url} failed: {err}");
                return CrawlOutcome::transport_failure();
            }
        };

        // The HTTP status is preserved into the outcome, 2xx or not.
        let status = response.status().as_u16();
        match response.json::<CrawlResponseBody>().await {
            Ok(body) => CrawlOutcome {
                status,
                data: body.output,
                // An empty fragment counts as absent.
                html: body.html.filter(|html| !html.is_empty()),
            },
            Err(err) => {
                log::warn!("crawl response for {url} was not json: {err}");
                CrawlOutcome::transport_failure()
            }
        }
    }
}
