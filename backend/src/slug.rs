//! Slug derivation and deduplication.
//!
//! Every place gets a URL-safe identifier derived from its English name.
//! Slugs are assigned in row order during a build and are only stable for
//! that build: renaming a place or reordering rows in the source spreadsheet
//! may hand the same logical entry a different slug on the next export. That
//! is accepted behavior: the spreadsheet has no stable identifier column to
//! anchor on.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

static NON_SLUG_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9\s-]").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static HYPHEN_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").unwrap());

/// Derive a slug candidate from an English name.
///
/// Lowercases, strips everything outside `[a-z0-9\s-]`, collapses
/// whitespace runs and repeated hyphens to single hyphens, and trims
/// hyphens at the edges. Returns the empty string when nothing survives
/// (missing or entirely non-Latin names).
pub fn slugify(name_en: &str) -> String {
    let lowered = name_en.to_lowercase();
    let stripped = NON_SLUG_CHARS.replace_all(&lowered, "");
    let hyphenated = WHITESPACE_RUN.replace_all(&stripped, "-");
    let collapsed = HYPHEN_RUN.replace_all(&hyphenated, "-");
    collapsed.trim_matches('-').to_string()
}

/// Tracks slugs already handed out during one build.
#[derive(Debug, Default)]
pub struct SlugSet {
    used: HashSet<String>,
}

impl SlugSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a unique slug for a record.
    ///
    /// `row` is the record's 1-based position among the data rows and doubles
    /// as the fallback identifier (`place-{row}`) when the English name
    /// yields no candidate. Collisions are resolved by suffixing the row
    /// number, repeatedly if needed. Row positions are unique across the
    /// file, so one suffix settles it in practice.
    pub fn assign(&mut self, name_en: &str, row: usize) -> String {
        let candidate = slugify(name_en);
        let mut slug = if candidate.is_empty() {
            format!("place-{}", row)
        } else {
            candidate
        };
        while self.used.contains(&slug) {
            slug = format!("{}-{}", slug, row);
        }
        self.used.insert(slug.clone());
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_strips_punctuation() {
        assert_eq!(slugify("Al-Azhar Park!!"), "al-azhar-park");
    }

    #[test]
    fn test_slugify_collapses_whitespace_and_hyphens() {
        assert_eq!(slugify("  Nile   --  Corniche  "), "nile-corniche");
        assert_eq!(slugify("Kids' Area (VIP)"), "kids-area-vip");
    }

    #[test]
    fn test_slugify_non_latin_is_empty() {
        assert_eq!(slugify("حديقة الأزهر"), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_fallback_uses_row_position() {
        let mut slugs = SlugSet::new();
        assert_eq!(slugs.assign("", 3), "place-3");
        assert_eq!(slugs.assign("حديقة", 7), "place-7");
    }

    #[test]
    fn test_collision_appends_row() {
        let mut slugs = SlugSet::new();
        assert_eq!(slugs.assign("Cairo Tower", 1), "cairo-tower");
        assert_eq!(slugs.assign("Cairo Tower", 5), "cairo-tower-5");
        // Same name again on a later row still resolves
        assert_eq!(slugs.assign("Cairo Tower", 9), "cairo-tower-9");
    }

    #[test]
    fn test_assigned_slugs_are_unique() {
        let mut slugs = SlugSet::new();
        let a = slugs.assign("Fun Land", 1);
        let b = slugs.assign("Fun Land", 2);
        let c = slugs.assign("", 3);
        assert_ne!(a, b);
        assert_ne!(b, c);
    }
}
