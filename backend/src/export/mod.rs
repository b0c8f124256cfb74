//! Static dataset export - the deploy-time build artifact.
//!
//! The site has no server API: the CSV is parsed at deploy time and the
//! whole collection is written out as one JSON document the frontend
//! fetches as a static file. Re-running the export is the only way the
//! published dataset ever changes.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ExportResult;
use crate::models::Place;
use crate::store::PlaceStore;

/// The exported dataset document.
///
/// Field names are camelCase; this is the contract the frontend
/// deserializes against.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Export timestamp, RFC 3339.
    pub generated_at: String,

    /// Number of places.
    pub count: usize,

    /// Distinct non-empty governorates, first-seen order.
    pub governorates: Vec<String>,

    /// Distinct non-empty place types, first-seen order.
    pub place_types: Vec<String>,

    /// All places, in source row order.
    pub places: Vec<Place>,
}

impl Dataset {
    /// Snapshot a store into an export document.
    pub fn from_store(store: &PlaceStore) -> Self {
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            count: store.len(),
            governorates: store.governorates().to_vec(),
            place_types: store.place_types().to_vec(),
            places: store.all().to_vec(),
        }
    }
}

/// Serialize a store to pretty-printed dataset JSON.
pub fn dataset_json(store: &PlaceStore) -> ExportResult<String> {
    let dataset = Dataset::from_store(store);
    Ok(serde_json::to_string_pretty(&dataset)?)
}

/// Write the dataset JSON next to the other static site assets.
pub fn write_dataset<P: AsRef<Path>>(store: &PlaceStore, path: P) -> ExportResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, dataset_json(store)?)?;
    Ok(())
}
