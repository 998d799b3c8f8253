use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::{DiscoveryError, EndpointSettings};

#[derive(Debug, Serialize)]
pub(crate) struct UrlRequest<'a> {
    pub url: &'a str,
}

#[async_trait::async_trait]
pub trait LinkDiscovery: Send + Sync {
    async fn discover(&self, seed: &str) -> Result<Vec<String>, DiscoveryError>;
}

/// POSTs the seed URL to the discovery endpoint and extracts the link list
/// from its JSON body.
#[derive(Debug, Clone)]
pub struct HttpLinkDiscovery {
    endpoint: Url,
    settings: EndpointSettings,
}

impl HttpLinkDiscovery {
    pub fn new(settings: EndpointSettings) -> Self {
        Self {
            endpoint: settings.discovery_url.clone(),
            settings,
        }
    }
}

#[async_trait::async_trait]
impl LinkDiscovery for HttpLinkDiscovery {
    async fn discover(&self, seed: &str) -> Result<Vec<String>, DiscoveryError> {
        let client = self
            .settings
            .build_client()
            .map_err(|err| DiscoveryError::Transport(err.to_string()))?;

        let response = client
            .post(self.endpoint.clone())
            .json(&UrlRequest { url: seed })
            .send()
            .await
            .map_err(|err| DiscoveryError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DiscoveryError::HttpStatus(status.as_u16()));
        }

        // A body that is not the expected shape means "no links found",
        // not an error.
        let body = match response.json::<Value>().await {
            Ok(body) => body,
            Err(err) => {
                log::warn!("discovery response for {seed} was not json: {err}");
                return Ok(Vec::new());
            }
        };
        Ok(extract_links(&body))
    }
}

/// Expected shape: an array of objects each carrying a string `links` field.
/// Elements without one are skipped; any other shape yields no links.
fn extract_links(body: &Value) -> Vec<String> {
    let Some(items) = body.as_array() else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| item.get("links").and_then(Value::as_str))
        .map(ToOwned::to_owned)
        .collect()
}
