use crate::selection::UrlSelection;
use crate::state::{Phase, ProcessedResult};

/// Upper bound on the plain-text result summary shown in the UI.
pub const MAX_SUMMARY_CHARS: usize = 120;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub phase: Phase,
    pub seed_input: String,
    pub search_input: String,
    /// Discovered URLs, filtered by the search input (case-insensitive).
    pub urls: Vec<UrlRowView>,
    /// Size of the full discovered set, ignoring the search filter.
    pub url_count: usize,
    pub selected_count: usize,
    pub all_selected: bool,
    pub results: Vec<ResultRowView>,
    pub processed_count: usize,
    pub total_to_process: usize,
    /// True once a run has fully completed; gates the CSV export.
    pub export_ready: bool,
    pub discovery_error: Option<String>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRowView {
    pub url: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRowView {
    pub url: String,
    pub status: u16,
    pub succeeded: bool,
    /// Bounded plain text; crawl-returned HTML is never rendered raw.
    pub summary: String,
}

impl AppViewModel {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_state(
        phase: Phase,
        seed_input: &str,
        search_input: &str,
        selection: &UrlSelection,
        results: &[ProcessedResult],
        total_to_process: usize,
        discovery_error: Option<&str>,
        dirty: bool,
    ) -> Self {
        let needle = search_input.to_lowercase();
        let urls = selection
            .entries()
            .iter()
            .filter(|entry| needle.is_empty() || entry.url.to_lowercase().contains(&needle))
            .map(|entry| UrlRowView {
                url: entry.url.clone(),
                selected: entry.selected,
            })
            .collect();

        let result_rows: Vec<_> = results
            .iter()
            .map(|result| ResultRowView {
                url: result.url.clone(),
                status: result.status,
                succeeded: result.status == 200,
                summary: summarize(result),
            })
            .collect();

        Self {
            phase,
            seed_input: seed_input.to_owned(),
            search_input: search_input.to_owned(),
            urls,
            url_count: selection.len(),
            selected_count: selection.selected_count(),
            all_selected: selection.all_selected(),
            processed_count: result_rows.len(),
            results: result_rows,
            total_to_process,
            export_ready: total_to_process > 0 && results.len() == total_to_process,
            discovery_error: discovery_error.map(ToOwned::to_owned),
            dirty,
        }
    }
}

/// Plain-text rendering of one result. HTML fragments are reduced to a size
/// marker; structured data is truncated on a char boundary.
fn summarize(result: &ProcessedResult) -> String {
    if let Some(html) = &result.html {
        return format!("[html fragment, {} bytes]", html.len());
    }
    let text = match &result.data {
        None => String::new(),
        Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    };
    truncate_chars(&text, MAX_SUMMARY_CHARS)
}

fn truncate_chars(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_owned();
    }
    let truncated: String = text.chars().take(limit).collect();
    format!("{truncated}…")
}
