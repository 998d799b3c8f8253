//! Crawler core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod selection;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use selection::{DiscoveredUrl, UrlSelection};
pub use state::{AppState, Phase, ProcessedResult};
pub use update::update;
pub use view_model::{AppViewModel, ResultRowView, UrlRowView, MAX_SUMMARY_CHARS};
