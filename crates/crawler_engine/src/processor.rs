use std::sync::mpsc;

use crate::{Crawler, CrawlOutcome, EngineEvent};

pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

/// Crawls the snapshot strictly in order, one URL at a time. Emits one
/// `UrlCrawled` event per URL as soon as its outcome is recorded, then a
/// final `RunCompleted`; observers see a monotonically growing result list.
///
/// Per-URL failures arrive as converted outcomes (`crawl` never fails), so
/// the loop always runs the snapshot to exhaustion.
pub async fn process_sequentially(
    urls: &[String],
    crawler: &dyn Crawler,
    sink: &dyn EventSink,
) -> usize {
    for url in urls {
        let outcome: CrawlOutcome = crawler.crawl(url).await;
        log::debug!("crawled {url}: status {}", outcome.status);
        sink.emit(EngineEvent::UrlCrawled {
            url: url.clone(),
            outcome,
        });
    }
    sink.emit(EngineEvent::RunCompleted {
        processed: urls.len(),
    });
    urls.len()
}
