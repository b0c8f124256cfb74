//! # Khoroga - bilingual places directory, CSV ingestion core
//!
//! Khoroga turns a hand-maintained spreadsheet export (Arabic headers,
//! free-text cells, quoted multiline fields) into the immutable dataset
//! behind a bilingual Arabic/English directory of family-friendly outing
//! places.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  places.csv │────▶│   Parser    │────▶│ PlaceStore  │────▶│ places.json │
//! │ (ar headers)│     │ (lenient)   │     │ (read API)  │     │  (static)   │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use khoroga::PlaceStore;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = PlaceStore::load("data/places.csv")?;
//!     println!("{} places", store.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`models`] - Domain models (Place, Field)
//! - [`parser`] - Lenient CSV tokenizing and record building
//! - [`slug`] - Slug derivation and deduplication
//! - [`store`] - In-memory read API with facet indexes
//! - [`filter`] - Listing filter rules
//! - [`i18n`] - Language handling and render-time interpretation
//! - [`export`] - Static dataset artifact

// Core modules
pub mod error;
pub mod models;

// Parsing
pub mod parser;
pub mod slug;

// Read API
pub mod store;
pub mod filter;

// Presentation support
pub mod i18n;

// Static export
pub mod export;

// =============================================================================
// Re-exports - Errors
// =============================================================================

pub use error::{CsvError, CsvResult, ExportError, ExportResult, StoreError, StoreResult};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{Field, Place};

// =============================================================================
// Re-exports - Parsing
// =============================================================================

pub use parser::{
    decode_content, detect_encoding, parse_bytes, parse_places, parse_report, read_places_file,
    tokenize, ParseReport, HEADER_FIELDS,
};

pub use slug::{slugify, SlugSet};

// =============================================================================
// Re-exports - Read API
// =============================================================================

pub use filter::{filter_places, FilterParams};
pub use store::PlaceStore;

// =============================================================================
// Re-exports - Presentation support
// =============================================================================

pub use i18n::{is_affirmative, split_links, Language};

// =============================================================================
// Re-exports - Export
// =============================================================================

pub use export::{dataset_json, write_dataset, Dataset};
