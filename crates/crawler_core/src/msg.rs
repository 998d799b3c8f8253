#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the seed URL input box.
    SeedInputChanged(String),
    /// User submitted the current seed URL for link discovery.
    SeedSubmitted,
    /// Discovery endpoint returned candidate links.
    DiscoveryCompleted { urls: Vec<String> },
    /// Discovery failed; the message is shown to the user.
    DiscoveryFailed { message: String },
    /// User toggled one discovered URL.
    UrlToggled { url: String },
    /// User clicked Select All / Deselect All.
    ToggleAllClicked,
    /// User edited the URL-list search filter.
    SearchChanged(String),
    /// User started processing the selected URLs.
    ProcessClicked,
    /// Engine finished crawling one URL of the active run.
    UrlProcessed { result: crate::ProcessedResult },
}
