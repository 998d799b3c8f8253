#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the engine to discover links within the seed URL.
    Discover { seed: String },
    /// Ask the engine to crawl the snapshot, one URL at a time, in order.
    ProcessUrls { urls: Vec<String> },
}
