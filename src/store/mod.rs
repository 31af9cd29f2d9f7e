//! Custom layout store: one user-editable layout per family, persisted locally.
//!
//! The store keeps an in-memory snapshot of all three custom layouts and
//! round-trips it through a [`Storage`] backend under a single key as a
//! JSON object `{ flex: {html, css}, grid: {html, css}, media: {html, css} }`.
//!
//! Loading never fails: absent or malformed data falls back to three empty
//! entries. Saving overwrites the persisted value wholesale; if the backend
//! rejects the write, the in-memory snapshot keeps the new value and the
//! caller gets a recoverable [`StoreError`].

mod storage;

pub use storage::{FileStorage, MemoryStorage, Storage};

use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, warn};

use crate::constants::CUSTOM_LAYOUTS_KEY;
use crate::models::{CustomLayout, CustomLayouts, LayoutFamily};

/// Recoverable storage failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem error while reading or writing a value
    #[error("storage I/O error at {path}: {source}")]
    Io {
        /// File or directory involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
    /// The backend refused the operation (disabled, full, read-only)
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// The key cannot be mapped to the backend
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),
    /// The snapshot could not be serialized
    #[error("failed to serialize custom layouts: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Per-session access to the persisted custom layouts.
pub struct CustomLayoutStore {
    storage: Box<dyn Storage>,
    snapshot: Option<CustomLayouts>,
}

impl std::fmt::Debug for CustomLayoutStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomLayoutStore")
            .field("snapshot", &self.snapshot)
            .finish_non_exhaustive()
    }
}

impl CustomLayoutStore {
    /// Creates a store over a storage backend. Nothing is read until [`load`](Self::load).
    #[must_use]
    pub fn new(storage: impl Storage + 'static) -> Self {
        Self {
            storage: Box::new(storage),
            snapshot: None,
        }
    }

    /// Store backed by in-memory storage.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::new())
    }

    /// Returns the snapshot, reading durable storage on the first call.
    ///
    /// Absent, unreadable or malformed data yields three empty entries.
    pub fn load(&mut self) -> &CustomLayouts {
        if self.snapshot.is_none() {
            self.snapshot = Some(self.read_persisted());
        }
        self.snapshot.get_or_insert_with(CustomLayouts::default)
    }

    /// Custom layout of one family.
    pub fn get(&mut self, family: LayoutFamily) -> &CustomLayout {
        self.load().get(family)
    }

    /// Replaces the whole snapshot and persists it.
    ///
    /// The in-memory snapshot is updated even when persisting fails.
    pub fn save(&mut self, snapshot: CustomLayouts) -> Result<(), StoreError> {
        let json = serde_json::to_string(&snapshot)?;
        self.snapshot = Some(snapshot);
        self.storage.set(CUSTOM_LAYOUTS_KEY, &json)?;
        debug!("Persisted custom layouts ({} bytes)", json.len());
        Ok(())
    }

    /// Replaces one family's entry and persists the full snapshot.
    pub fn save_family(
        &mut self,
        family: LayoutFamily,
        layout: CustomLayout,
    ) -> Result<(), StoreError> {
        let snapshot = self.load().clone().with(family, layout);
        self.save(snapshot)
    }

    /// Updates only the markup of one family and persists.
    pub fn save_markup(&mut self, family: LayoutFamily, html: String) -> Result<(), StoreError> {
        let mut layout = self.get(family).clone();
        layout.html = html;
        self.save_family(family, layout)
    }

    /// Updates only the stylesheet of one family and persists.
    pub fn save_stylesheet(&mut self, family: LayoutFamily, css: String) -> Result<(), StoreError> {
        let mut layout = self.get(family).clone();
        layout.css = css;
        self.save_family(family, layout)
    }

    /// Resets one family (or all, with `None`) to empty strings and persists.
    pub fn reset(&mut self, family: Option<LayoutFamily>) -> Result<(), StoreError> {
        let snapshot = match family {
            Some(family) => self.load().clone().with(family, CustomLayout::default()),
            None => CustomLayouts::default(),
        };
        self.save(snapshot)
    }

    /// Consumes the store, returning the last in-memory snapshot.
    #[cfg(test)]
    pub(crate) fn into_snapshot(mut self) -> CustomLayouts {
        self.load();
        self.snapshot.unwrap_or_default()
    }

    fn read_persisted(&self) -> CustomLayouts {
        let raw = match self.storage.get(CUSTOM_LAYOUTS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return CustomLayouts::default(),
            Err(e) => {
                warn!("Failed to read custom layouts, using defaults: {e}");
                return CustomLayouts::default();
            }
        };

        match serde_json::from_str::<CustomLayouts>(&raw) {
            Ok(layouts) => layouts,
            Err(e) => {
                warn!("Ignoring malformed custom layouts: {e}");
                CustomLayouts::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_without_prior_save_is_empty() {
        let mut store = CustomLayoutStore::in_memory();
        for family in LayoutFamily::ALL {
            let layout = store.get(family);
            assert_eq!(layout.html, "");
            assert_eq!(layout.css, "");
        }
    }

    #[test]
    fn test_malformed_json_falls_back_to_defaults() {
        for raw in ["not json", "[1,2,3]", "{\"flex\": 5}", ""] {
            let mut store =
                CustomLayoutStore::new(MemoryStorage::with_value(CUSTOM_LAYOUTS_KEY, raw));
            assert_eq!(store.load(), &CustomLayouts::default(), "input {raw:?}");
        }
    }

    #[test]
    fn test_save_overwrites_wholesale() {
        let mut store = CustomLayoutStore::in_memory();
        store
            .save(CustomLayouts::default().with(LayoutFamily::Flex, CustomLayout::new("a", "b")))
            .unwrap();
        store
            .save(CustomLayouts::default().with(LayoutFamily::Grid, CustomLayout::new("c", "d")))
            .unwrap();

        let snapshot = store.load();
        assert!(snapshot.flex.is_empty());
        assert_eq!(snapshot.grid, CustomLayout::new("c", "d"));
    }

    #[test]
    fn test_save_family_keeps_other_families() {
        let mut store = CustomLayoutStore::in_memory();
        store
            .save_family(LayoutFamily::Media, CustomLayout::new("<p/>", "p{}"))
            .unwrap();
        store.save_markup(LayoutFamily::Flex, "<nav/>".into()).unwrap();
        store.save_stylesheet(LayoutFamily::Flex, "nav{}".into()).unwrap();

        let snapshot = store.load();
        assert_eq!(snapshot.media, CustomLayout::new("<p/>", "p{}"));
        assert_eq!(snapshot.flex, CustomLayout::new("<nav/>", "nav{}"));
        assert!(snapshot.grid.is_empty());
    }

    #[test]
    fn test_failed_save_keeps_in_memory_snapshot() {
        let mut store = CustomLayoutStore::new(MemoryStorage::read_only());
        let snapshot = CustomLayouts::default().with(LayoutFamily::Grid, CustomLayout::new("x", ""));

        let result = store.save(snapshot.clone());

        assert!(matches!(result, Err(StoreError::Unavailable(_))));
        assert_eq!(store.load(), &snapshot);
    }

    #[test]
    fn test_reset_single_family_and_all() {
        let mut store = CustomLayoutStore::in_memory();
        let full = CustomLayouts {
            flex: CustomLayout::new("f", "f"),
            grid: CustomLayout::new("g", "g"),
            media: CustomLayout::new("m", "m"),
        };
        store.save(full).unwrap();

        store.reset(Some(LayoutFamily::Grid)).unwrap();
        assert!(store.get(LayoutFamily::Grid).is_empty());
        assert!(!store.get(LayoutFamily::Flex).is_empty());

        store.reset(None).unwrap();
        assert_eq!(store.load(), &CustomLayouts::default());
    }

    #[test]
    fn test_into_snapshot() {
        let mut store = CustomLayoutStore::in_memory();
        store.save_markup(LayoutFamily::Flex, "<b/>".into()).unwrap();
        assert_eq!(store.into_snapshot().flex.html, "<b/>");
    }
}
