//! Common types used across the frontend application.
//!
//! [`Place`] and [`Dataset`] mirror the JSON contract of the exported
//! dataset (`khoroga export`). The frontend keeps its own deserialization
//! twins rather than linking the backend crate into the WASM bundle.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Dataset Types
// =============================================================================

/// One directory entry, as exported.
///
/// Every field is a string; empty means the spreadsheet left it blank and
/// the UI omits that section.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Place {
    pub timestamp: String,
    pub name_ar: String,
    pub name_en: String,
    pub description_ar: String,
    pub description_en: String,
    pub address_ar: String,
    pub address_en: String,
    pub governorate: String,
    pub area: String,
    pub map_location: String,
    pub place_type: String,
    pub price: String,
    pub price_unit: String,
    pub suitable_age: String,
    pub place_nature: String,
    pub website_link: String,
    pub working_hours: String,
    pub family_friendly: String,
    pub kids_friendly: String,
    pub parking: String,
    pub reservation_needed: String,
    pub social_media_links: String,
    pub phone_number: String,
    pub place_photos: String,
    pub menu_photos: String,
    pub notes: String,
    pub slug: String,
}

/// The exported dataset document.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
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

// =============================================================================
// Render-time interpretation
// =============================================================================

/// Classify a boolean-like cell as affirmative.
///
/// The yes/no columns are answered in free text, in either language.
/// Anything not in the accepted token set, including the empty string,
/// counts as "no".
pub fn is_affirmative(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "yes" | "true" | "1" | "نعم" | "أيوه" | "ايوه" | "اه"
    )
}

/// Split a cell holding several values (social links, phone numbers) on
/// commas and newlines, dropping empty entries.
pub fn split_links(value: &str) -> Vec<&str> {
    value
        .split([',', '\n'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug)]
pub enum AppError {
    /// Dataset fetch failed.
    Network(String),
    /// Dataset could not be decoded.
    Decode(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Decode(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_deserialization() {
        let json = r#"{
            "generatedAt": "2026-01-15T10:00:00+00:00",
            "count": 1,
            "governorates": ["القاهره"],
            "placeTypes": ["حديقه"],
            "places": [
                {
                    "nameAr": "حديقة الأزهر",
                    "nameEn": "Al-Azhar Park",
                    "governorate": "القاهره",
                    "placeType": "حديقه",
                    "familyFriendly": "نعم",
                    "slug": "al-azhar-park"
                }
            ]
        }"#;

        let dataset: Dataset = serde_json::from_str(json).unwrap();
        assert_eq!(dataset.count, 1);
        assert_eq!(dataset.places[0].name_en, "Al-Azhar Park");
        assert_eq!(dataset.places[0].slug, "al-azhar-park");
        // Unlisted fields default to empty
        assert_eq!(dataset.places[0].notes, "");
    }

    #[test]
    fn test_affirmative_tokens() {
        assert!(is_affirmative("نعم"));
        assert!(is_affirmative("Yes"));
        assert!(is_affirmative("1"));
        assert!(!is_affirmative("لا"));
        assert!(!is_affirmative(""));
    }

    #[test]
    fn test_split_links() {
        let links = split_links("https://fb.com/a, https://ig.com/a\n");
        assert_eq!(links, vec!["https://fb.com/a", "https://ig.com/a"]);
    }
}
