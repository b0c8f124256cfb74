//! In-memory place store - the read API over the parsed dataset.
//!
//! The whole collection is built once from the CSV and is immutable
//! afterwards; there is no update or delete path. A changed source file is
//! only observed by building a new store (or restarting the process when
//! using [`PlaceStore::global`]).
//!
//! Prefer constructing a store explicitly and passing it to consumers. The
//! process-wide [`PlaceStore::global`] accessor exists for hosts that want
//! the original's lazy singleton; it is guarded so at most one thread ever
//! runs the parse.

use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;

use crate::error::{StoreError, StoreResult};
use crate::models::Place;
use crate::parser::{parse_bytes, parse_places, read_places_file};

/// Immutable collection of places with facet indexes.
#[derive(Debug, Clone)]
pub struct PlaceStore {
    places: Vec<Place>,
    governorates: Vec<String>,
    place_types: Vec<String>,
}

impl PlaceStore {
    /// Build a store from already-parsed places.
    ///
    /// Facet lists are computed here, once: non-empty values, first-seen
    /// order, deduplicated.
    pub fn from_places(places: Vec<Place>) -> Self {
        let governorates = distinct(places.iter().map(|p| p.governorate.as_str()));
        let place_types = distinct(places.iter().map(|p| p.place_type.as_str()));
        Self {
            places,
            governorates,
            place_types,
        }
    }

    /// Build a store from CSV text.
    pub fn from_csv_text(content: &str) -> Self {
        Self::from_places(parse_places(content))
    }

    /// Build a store from raw CSV bytes (encoding auto-detected).
    pub fn from_bytes(bytes: &[u8]) -> StoreResult<Self> {
        let report = parse_bytes(bytes)?;
        Ok(Self::from_places(report.places))
    }

    /// Build a store from a CSV file.
    ///
    /// A missing file propagates as an error: startup should fail loudly,
    /// not serve an empty directory.
    pub fn load<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let report = read_places_file(path)?;
        Ok(Self::from_places(report.places))
    }

    /// Process-wide store, built on first call and cached for the process
    /// lifetime.
    ///
    /// Concurrent first calls are safe: one caller parses, the rest block
    /// until the store is ready. Later calls must pass the same path;
    /// there is no invalidation, only a restart.
    pub fn global<P: AsRef<Path>>(path: P) -> StoreResult<&'static PlaceStore> {
        static GLOBAL: OnceCell<(PathBuf, PlaceStore)> = OnceCell::new();

        let path = path.as_ref();
        let (init_path, store) = GLOBAL.get_or_try_init(|| -> StoreResult<_> {
            Ok((path.to_path_buf(), Self::load(path)?))
        })?;
        if init_path.as_path() != path {
            return Err(StoreError::AlreadyInitialized(
                init_path.display().to_string(),
            ));
        }
        Ok(store)
    }

    /// All places, in source row order.
    pub fn all(&self) -> &[Place] {
        &self.places
    }

    /// Look up a place by its slug.
    pub fn by_slug(&self, slug: &str) -> Option<&Place> {
        self.places.iter().find(|place| place.slug == slug)
    }

    /// Distinct non-empty governorates, first-seen order.
    pub fn governorates(&self) -> &[String] {
        &self.governorates
    }

    /// Distinct non-empty place types, first-seen order.
    pub fn place_types(&self) -> &[String] {
        &self.place_types
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

/// Non-empty values in first-seen order, deduplicated.
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for value in values {
        if !value.is_empty() && seen.insert(value) {
            out.push(value.to_string());
        }
    }
    out
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const CSV: &str = "\
اسم المكان بالعربي,اسم المكان بالانجليزيه,المحافظه,نوع المكان
النادي,The Club,القاهره,نادي
الحديقه,Green Park,الجيزه,حديقه
المطعم,River Cafe,القاهره,كافيه
مجهول,No Region,,كافيه
";

    #[test]
    fn test_all_keeps_source_order() {
        let store = PlaceStore::from_csv_text(CSV);
        let names: Vec<_> = store.all().iter().map(|p| p.name_en.as_str()).collect();
        assert_eq!(names, vec!["The Club", "Green Park", "River Cafe", "No Region"]);
    }

    #[test]
    fn test_by_slug_finds_each_place() {
        let store = PlaceStore::from_csv_text(CSV);
        for place in store.all() {
            let found = store.by_slug(&place.slug).expect("slug should resolve");
            assert_eq!(found, place);
        }
    }

    #[test]
    fn test_by_slug_unknown_is_none() {
        let store = PlaceStore::from_csv_text(CSV);
        assert!(store.by_slug("no-such-place").is_none());
    }

    #[test]
    fn test_governorates_first_seen_dedup() {
        let store = PlaceStore::from_csv_text(CSV);
        assert_eq!(store.governorates(), ["القاهره", "الجيزه"]);
    }

    #[test]
    fn test_facets_exclude_empty_values() {
        let store = PlaceStore::from_csv_text(CSV);
        // "No Region" has an empty governorate; it must not appear
        assert!(!store.governorates().iter().any(|g| g.is_empty()));
        assert_eq!(store.place_types(), ["نادي", "حديقه", "كافيه"]);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let err = PlaceStore::load("/nope/places.csv").unwrap_err();
        assert!(matches!(err, StoreError::Csv(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("places.csv");
        fs::write(&path, CSV).unwrap();

        let store = PlaceStore::load(&path).unwrap();
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_global_is_cached_across_calls() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("places.csv");
        fs::write(&path, CSV).unwrap();

        let first = PlaceStore::global(&path).unwrap();
        assert_eq!(first.len(), 4);

        // Mutate the backing file: the cached store must not notice
        fs::write(&path, "اسم المكان بالانجليزيه\nOnly One\n").unwrap();
        let second = PlaceStore::global(&path).unwrap();
        assert_eq!(second.len(), 4);
        assert!(std::ptr::eq(first, second));

        // A different path after init is refused, not silently honored
        let other = dir.path().join("other.csv");
        fs::write(&other, CSV).unwrap();
        assert!(matches!(
            PlaceStore::global(&other),
            Err(StoreError::AlreadyInitialized(_))
        ));
    }
}
