/// Remote image module
///
/// This module handles:
/// - Downloading catalog images over HTTPS (loader.rs)
/// - Decoding and downsizing them for display (loader.rs)
/// - Tracking per-URI load state for the views (this file)

pub mod loader;

use iced::widget::image::Handle;
use std::collections::HashMap;
use tracing::warn;

/// Load state of one image URI
#[derive(Debug, Clone)]
pub enum RemoteImage {
    Loading,
    Ready(Handle),
    /// Fetch or decode failed; shown like a broken image
    Broken,
}

/// Every image the views may ask for, keyed by URI
#[derive(Debug, Default)]
pub struct ImageStore {
    entries: HashMap<String, RemoteImage>,
}

impl ImageStore {
    /// Mark URIs as loading. Returns the ones not seen before, which are
    /// the only ones that need fetching.
    pub fn request<I>(&mut self, uris: I) -> Vec<String>
    where
        I: IntoIterator<Item = String>,
    {
        uris.into_iter()
            .filter(|uri| {
                if self.entries.contains_key(uri) {
                    false
                } else {
                    self.entries.insert(uri.clone(), RemoteImage::Loading);
                    true
                }
            })
            .collect()
    }

    /// Record the outcome of a fetch. Failures are not retried.
    pub fn finish(&mut self, uri: String, result: Result<Handle, String>) {
        let entry = match result {
            Ok(handle) => RemoteImage::Ready(handle),
            Err(e) => {
                warn!("⚠️  Image unavailable ({}): {}", e, uri);
                RemoteImage::Broken
            }
        };
        self.entries.insert(uri, entry);
    }

    /// State of a URI, None if it was never requested
    pub fn get(&self, uri: &str) -> Option<&RemoteImage> {
        self.entries.get(uri)
    }

    pub fn pending(&self) -> usize {
        self.entries
            .values()
            .filter(|e| matches!(e, RemoteImage::Loading))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle() -> Handle {
        Handle::from_rgba(1, 1, vec![0u8, 0, 0, 255])
    }

    #[test]
    fn test_request_skips_known_uris() {
        let mut store = ImageStore::default();

        let first = store.request(vec!["a".to_string(), "b".to_string()]);
        let second = store.request(vec!["b".to_string(), "c".to_string()]);

        assert_eq!(first, vec!["a", "b"]);
        assert_eq!(second, vec!["c"]);
        assert_eq!(store.pending(), 3);
    }

    #[test]
    fn test_finish_records_outcome() {
        let mut store = ImageStore::default();
        store.request(vec!["ok".to_string(), "bad".to_string()]);

        store.finish("ok".to_string(), Ok(handle()));
        store.finish("bad".to_string(), Err("404".to_string()));

        assert!(matches!(store.get("ok"), Some(RemoteImage::Ready(_))));
        assert!(matches!(store.get("bad"), Some(RemoteImage::Broken)));
        assert_eq!(store.pending(), 0);
    }

    #[test]
    fn test_unknown_uri_is_absent() {
        let store = ImageStore::default();
        assert!(store.get("never-requested").is_none());
    }
}
