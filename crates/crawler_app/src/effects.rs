use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crawler_core::{Effect, Msg, ProcessedResult};
use crawler_engine::{CrawlOutcome, EndpointSettings, EngineEvent, EngineHandle};

use crate::app::Input;

pub(crate) struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub(crate) fn new(settings: EndpointSettings, input_tx: mpsc::Sender<Input>) -> Self {
        let engine = EngineHandle::new(settings);
        spawn_event_loop(engine.clone(), input_tx);
        Self { engine }
    }

    pub(crate) fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Discover { seed } => {
                    log::info!("Discover seed={seed}");
                    self.engine.discover(seed);
                }
                Effect::ProcessUrls { urls } => {
                    log::info!("ProcessUrls count={}", urls.len());
                    self.engine.process(urls);
                }
            }
        }
    }
}

fn spawn_event_loop(engine: EngineHandle, input_tx: mpsc::Sender<Input>) {
    thread::spawn(move || loop {
        if let Some(event) = engine.try_recv() {
            let msg = match event {
                EngineEvent::DiscoveryCompleted { urls, .. } => {
                    Some(Msg::DiscoveryCompleted { urls })
                }
                EngineEvent::DiscoveryFailed { error, .. } => Some(Msg::DiscoveryFailed {
                    message: error.to_string(),
                }),
                EngineEvent::UrlCrawled { url, outcome } => Some(Msg::UrlProcessed {
                    result: map_outcome(url, outcome),
                }),
                EngineEvent::RunCompleted { processed } => {
                    log::info!("run completed: {processed} urls");
                    None
                }
            };
            if let Some(msg) = msg {
                if input_tx.send(Input::Core(msg)).is_err() {
                    break;
                }
            }
        } else {
            thread::sleep(Duration::from_millis(20));
        }
    });
}

fn map_outcome(url: String, outcome: CrawlOutcome) -> ProcessedResult {
    ProcessedResult {
        url,
        status: outcome.status,
        data: outcome.data,
        html: outcome.html,
    }
}
