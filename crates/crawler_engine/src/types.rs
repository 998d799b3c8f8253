/// Outcome of crawling one URL. The crawl client always produces one of
/// these; HTTP-level failures never escape as errors (see `crawl.rs`).
#[derive(Debug, Clone, PartialEq)]
pub struct CrawlOutcome {
    pub status: u16,
    pub data: Option<serde_json::Value>,
    pub html: Option<String>,
}

impl CrawlOutcome {
    /// Synthetic outcome for transport failures and unparsable bodies.
    pub fn transport_failure() -> Self {
        Self {
            status: 500,
            data: None,
            html: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// Discovery finished; `urls` is empty for malformed response bodies.
    DiscoveryCompleted { seed: String, urls: Vec<String> },
    DiscoveryFailed { seed: String, error: DiscoveryError },
    /// One URL of the active run finished, in run order.
    UrlCrawled { url: String, outcome: CrawlOutcome },
    /// The run crawled every snapshotted URL.
    RunCompleted { processed: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiscoveryError {
    #[error("discovery endpoint returned http status {0}")]
    HttpStatus(u16),
    #[error("discovery request failed: {0}")]
    Transport(String),
}
