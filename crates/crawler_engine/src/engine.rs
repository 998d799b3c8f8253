use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use crate::crawl::HttpCrawler;
use crate::discovery::HttpLinkDiscovery;
use crate::processor::{process_sequentially, ChannelEventSink, EventSink};
use crate::{Crawler, EndpointSettings, EngineEvent, LinkDiscovery};

enum EngineCommand {
    Discover { seed: String },
    Process { urls: Vec<String> },
}

/// Handle to the engine worker thread. Commands execute strictly one at a
/// time: a processing run finishes before any later command starts.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(settings: EndpointSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let discovery = HttpLinkDiscovery::new(settings.clone());
        let crawler = HttpCrawler::new(settings);

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let sink = ChannelEventSink::new(event_tx.clone());
                // block_on keeps commands serialized on this thread.
                runtime.block_on(handle_command(&discovery, &crawler, command, &sink));
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    pub fn discover(&self, seed: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Discover { seed: seed.into() });
    }

    pub fn process(&self, urls: Vec<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Process { urls });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

async fn handle_command(
    discovery: &dyn LinkDiscovery,
    crawler: &dyn Crawler,
    command: EngineCommand,
    sink: &dyn EventSink,
) {
    match command {
        EngineCommand::Discover { seed } => match discovery.discover(&seed).await {
            Ok(urls) => {
                log::info!("discovery for {seed} found {} links", urls.len());
                sink.emit(EngineEvent::DiscoveryCompleted { seed, urls });
            }
            Err(error) => {
                log::warn!("discovery for {seed} failed: {error}");
                sink.emit(EngineEvent::DiscoveryFailed { seed, error });
            }
        },
        EngineCommand::Process { urls } => {
            let processed = process_sequentially(&urls, crawler, sink).await;
            log::info!("run completed: {processed} urls crawled");
        }
    }
}
