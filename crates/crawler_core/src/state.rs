use crate::selection::UrlSelection;
use crate::view_model::AppViewModel;

/// Outcome of crawling one URL, in arrival order within a run.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedResult {
    pub url: String,
    pub status: u16,
    pub data: Option<serde_json::Value>,
    pub html: Option<String>,
}

/// Discovery, selection and processing are mutually exclusive phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Discovering,
    Processing,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    seed_input: String,
    search_input: String,
    selection: UrlSelection,
    results: Vec<ProcessedResult>,
    total_to_process: usize,
    phase: Phase,
    discovery_error: Option<String>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn results(&self) -> &[ProcessedResult] {
        &self.results
    }

    pub fn total_to_process(&self) -> usize {
        self.total_to_process
    }

    /// A run is complete when every snapshotted URL has a result.
    pub fn run_complete(&self) -> bool {
        self.total_to_process > 0 && self.results.len() == self.total_to_process
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel::from_state(
            self.phase,
            &self.seed_input,
            &self.search_input,
            &self.selection,
            &self.results,
            self.total_to_process,
            self.discovery_error.as_deref(),
            self.dirty,
        )
    }

    /// Returns the dirty flag and clears it. Renderers call this to coalesce
    /// redraws across a burst of messages.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_seed_input(&mut self, input: String) {
        if self.seed_input != input {
            self.seed_input = input;
            self.dirty = true;
        }
    }

    pub(crate) fn seed_input(&self) -> &str {
        &self.seed_input
    }

    pub(crate) fn set_search_input(&mut self, input: String) {
        if self.search_input != input {
            self.search_input = input;
            self.dirty = true;
        }
    }

    pub(crate) fn begin_discovery(&mut self) {
        self.phase = Phase::Discovering;
        self.dirty = true;
    }

    /// Replaces the URL set wholesale and clears any previous discovery error.
    pub(crate) fn apply_discovery(&mut self, urls: Vec<String>) {
        self.selection.load(urls);
        self.discovery_error = None;
        self.phase = Phase::Idle;
        self.dirty = true;
    }

    /// Records a user-visible discovery failure; the previous list stays.
    pub(crate) fn fail_discovery(&mut self, message: String) {
        self.discovery_error = Some(message);
        self.phase = Phase::Idle;
        self.dirty = true;
    }

    pub(crate) fn toggle_url(&mut self, url: &str) {
        if self.selection.toggle(url) {
            self.dirty = true;
        }
    }

    pub(crate) fn toggle_all(&mut self) {
        if !self.selection.is_empty() {
            self.selection.toggle_all();
            self.dirty = true;
        }
    }

    pub(crate) fn selection(&self) -> &UrlSelection {
        &self.selection
    }

    /// Snapshots the selection, resets the result set and enters the
    /// processing phase. Returns the snapshot the engine must crawl.
    pub(crate) fn begin_run(&mut self) -> Vec<String> {
        let snapshot = self.selection.selected_urls();
        self.total_to_process = snapshot.len();
        self.results.clear();
        self.phase = Phase::Processing;
        self.dirty = true;
        snapshot
    }

    /// Appends one result. The result list never exceeds the snapshot count;
    /// the final append returns the phase to idle.
    pub(crate) fn apply_result(&mut self, result: ProcessedResult) {
        if self.phase != Phase::Processing || self.results.len() >= self.total_to_process {
            return;
        }
        self.results.push(result);
        if self.results.len() == self.total_to_process {
            self.phase = Phase::Idle;
        }
        self.dirty = true;
    }
}
