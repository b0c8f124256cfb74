//! Language handling and render-time field interpretation.
//!
//! The store keeps every cell as raw text; the functions here interpret that
//! text at the presentation boundary:
//!
//! - [`Language`] - Which half of each bilingual pair to display
//! - [`is_affirmative`] - Classify boolean-like free text ("yes", "نعم", "1")
//! - [`split_links`] - Split delimiter-packed link/phone cells

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// =============================================================================
// Language
// =============================================================================

/// Display language for the bilingual fields.
///
/// Arabic is the source language of the dataset and the site default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Arabic (right-to-left).
    #[default]
    Ar,
    /// English (left-to-right).
    En,
}

impl Language {
    /// Parse a language code ("ar"/"en"), case-insensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "ar" | "arabic" => Some(Self::Ar),
            "en" | "english" => Some(Self::En),
            _ => None,
        }
    }

    /// BCP 47 code for `<html lang>`.
    pub fn code(self) -> &'static str {
        match self {
            Self::Ar => "ar",
            Self::En => "en",
        }
    }

    /// Text direction for `<html dir>`.
    pub fn dir(self) -> &'static str {
        match self {
            Self::Ar => "rtl",
            Self::En => "ltr",
        }
    }

    /// The other language.
    pub fn toggled(self) -> Self {
        match self {
            Self::Ar => Self::En,
            Self::En => Self::Ar,
        }
    }
}

// =============================================================================
// Boolean-like free text
// =============================================================================

/// Classify a boolean-like cell as affirmative.
///
/// The spreadsheet authors answer the yes/no columns in whichever language
/// they happen to be typing, so the accepted tokens cover English, Modern
/// Standard Arabic and Egyptian colloquial spellings. Anything else,
/// including the empty string, counts as "no".
pub fn is_affirmative(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "yes" | "true" | "1" | "نعم" | "أيوه" | "ايوه" | "اه"
    )
}

// =============================================================================
// Packed list cells
// =============================================================================

static LINK_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,\n]+").unwrap());

/// Split a cell holding several values (social links, phone numbers) on
/// commas and newlines, dropping empty entries.
pub fn split_links(value: &str) -> Vec<&str> {
    LINK_SPLIT
        .split(value)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_code() {
        assert_eq!(Language::from_code("ar"), Some(Language::Ar));
        assert_eq!(Language::from_code(" EN "), Some(Language::En));
        assert_eq!(Language::from_code("fr"), None);
    }

    #[test]
    fn test_language_dir() {
        assert_eq!(Language::Ar.dir(), "rtl");
        assert_eq!(Language::En.dir(), "ltr");
        assert_eq!(Language::Ar.toggled(), Language::En);
    }

    #[test]
    fn test_affirmative_english_tokens() {
        assert!(is_affirmative("yes"));
        assert!(is_affirmative("Yes "));
        assert!(is_affirmative("TRUE"));
        assert!(is_affirmative("1"));
    }

    #[test]
    fn test_affirmative_arabic_tokens() {
        assert!(is_affirmative("نعم"));
        assert!(is_affirmative("أيوه"));
        assert!(is_affirmative("ايوه"));
        assert!(is_affirmative("اه"));
    }

    #[test]
    fn test_negative_and_unknown_tokens() {
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("no"));
        assert!(!is_affirmative("لا"));
        assert!(!is_affirmative("maybe"));
    }

    #[test]
    fn test_split_links_commas_and_newlines() {
        let cell = "https://facebook.com/x, https://instagram.com/x\nhttps://tiktok.com/@x";
        let links = split_links(cell);
        assert_eq!(
            links,
            vec![
                "https://facebook.com/x",
                "https://instagram.com/x",
                "https://tiktok.com/@x"
            ]
        );
    }

    #[test]
    fn test_split_links_skips_empties() {
        assert!(split_links("").is_empty());
        assert_eq!(split_links(",,01001234567,\n"), vec!["01001234567"]);
    }
}
