use std::time::Duration;

use url::Url;

const DEFAULT_DISCOVERY_URL: &str = "https://automator.server.wonderit.io/webhook/api/checker";
const DEFAULT_CRAWL_URL: &str = "https://automator.server.wonderit.io/webhook/api/crawl";

/// The two remote endpoints plus transport timeouts. Injectable everywhere
/// the engine is constructed; `Default` carries the production endpoints.
#[derive(Debug, Clone)]
pub struct EndpointSettings {
    pub discovery_url: Url,
    pub crawl_url: Url,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for EndpointSettings {
    fn default() -> Self {
        Self {
            discovery_url: Url::parse(DEFAULT_DISCOVERY_URL).expect("valid default endpoint"),
            crawl_url: Url::parse(DEFAULT_CRAWL_URL).expect("valid default endpoint"),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl EndpointSettings {
    pub(crate) fn build_client(&self) -> Result<reqwest::Client, reqwest::Error> {
        reqwest::Client::builder()
            .connect_timeout(self.connect_timeout)
            .timeout(self.request_timeout)
            .build()
    }
}
