use std::collections::HashSet;

/// One link returned by discovery, with its selection flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredUrl {
    pub url: String,
    pub selected: bool,
}

/// The discovered-URL set. Entries keep discovery order; `url` is the
/// natural key within one discovery session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UrlSelection {
    entries: Vec<DiscoveredUrl>,
}

impl UrlSelection {
    /// Replaces the entire set with fresh, unselected entries.
    ///
    /// Duplicate URLs collapse to the first occurrence (exact string match),
    /// so every entry has a distinct key.
    pub fn load<I>(&mut self, urls: I)
    where
        I: IntoIterator<Item = String>,
    {
        let mut seen = HashSet::new();
        self.entries = urls
            .into_iter()
            .filter(|url| seen.insert(url.clone()))
            .map(|url| DiscoveredUrl {
                url,
                selected: false,
            })
            .collect();
    }

    /// Flips `selected` on the matching entry. Returns `false` (and changes
    /// nothing) when the URL is not in the set.
    pub fn toggle(&mut self, url: &str) -> bool {
        match self.entries.iter_mut().find(|entry| entry.url == url) {
            Some(entry) => {
                entry.selected = !entry.selected;
                true
            }
            None => false,
        }
    }

    /// Select-all toggle: if any entry is unselected, selects everything;
    /// otherwise deselects everything.
    pub fn toggle_all(&mut self) {
        let any_unselected = self.entries.iter().any(|entry| !entry.selected);
        for entry in &mut self.entries {
            entry.selected = any_unselected;
        }
    }

    /// Selected URLs in discovery order.
    pub fn selected_urls(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|entry| entry.selected)
            .map(|entry| entry.url.clone())
            .collect()
    }

    pub fn entries(&self) -> &[DiscoveredUrl] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn selected_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.selected).count()
    }

    pub fn all_selected(&self) -> bool {
        !self.entries.is_empty() && self.entries.iter().all(|entry| entry.selected)
    }
}
