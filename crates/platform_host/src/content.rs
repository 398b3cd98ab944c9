//! Content store contracts for file bodies referenced by VFS nodes.
//!
//! Bodies are preloaded at startup (bundled assets), so lookups are synchronous.

use std::collections::HashMap;

/// Read-only store of text bodies keyed by content reference.
pub trait ContentStore {
    /// Returns the body stored under `content_ref`.
    fn text(&self, content_ref: &str) -> Option<&str>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Empty content store for trees without file bodies.
pub struct NoopContentStore;

impl ContentStore for NoopContentStore {
    fn text(&self, _content_ref: &str) -> Option<&str> {
        None
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// In-memory content store.
pub struct MemoryContentStore {
    entries: HashMap<String, String>,
}

impl MemoryContentStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from `(content_ref, body)` pairs.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut store = Self::new();
        for (key, body) in entries {
            store.insert(key, body);
        }
        store
    }

    /// Builds a store from asset-keyed pairs, stripping `prefix` from each key.
    ///
    /// Bundlers key assets by their source path (`/src/data/content/about.txt`) while node
    /// content references are relative (`content/about.txt`).
    pub fn from_asset_entries<I, K, V>(prefix: &str, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        Self::from_entries(
            entries
                .into_iter()
                .map(|(key, body)| (content_key_from_asset(prefix, key.as_ref()), body)),
        )
    }

    /// Stores `body` under `content_ref`, replacing any previous body.
    pub fn insert(&mut self, content_ref: impl Into<String>, body: impl Into<String>) {
        self.entries.insert(content_ref.into(), body.into());
    }

    /// Number of stored bodies.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no bodies are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ContentStore for MemoryContentStore {
    fn text(&self, content_ref: &str) -> Option<&str> {
        self.entries.get(content_ref).map(String::as_str)
    }
}

/// Converts an asset key into the content reference used by VFS nodes.
pub fn content_key_from_asset(prefix: &str, key: &str) -> String {
    key.strip_prefix(prefix).unwrap_or(key).to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_content_store_strips_asset_prefix() {
        let store = MemoryContentStore::from_asset_entries(
            "/src/data/",
            [
                ("/src/data/content/about.txt", "hello"),
                ("content/already-relative.md", "# hi"),
            ],
        );

        assert_eq!(store.len(), 2);
        assert_eq!(store.text("content/about.txt"), Some("hello"));
        assert_eq!(store.text("content/already-relative.md"), Some("# hi"));
        assert_eq!(store.text("/src/data/content/about.txt"), None);
    }

    #[test]
    fn noop_content_store_is_always_empty() {
        let store: &dyn ContentStore = &NoopContentStore;
        assert_eq!(store.text("content/about.txt"), None);
    }
}
