//! Application configuration.
//!
//! Centralized configuration for the Khoroga frontend. The dataset URL
//! points at the static artifact `khoroga export` writes next to the site
//! assets at deploy time.

/// URL of the exported places dataset.
///
/// Served as a plain static file alongside the site bundle.
pub const DATA_URL: &str = "/places.json";

/// Site name, Latin spelling.
pub const APP_NAME: &str = "Khoroga";

/// Site name, Arabic spelling.
pub const APP_NAME_AR: &str = "خروجة";

/// localStorage key for the visitor's language choice.
pub const LANG_STORAGE_KEY: &str = "lang";
