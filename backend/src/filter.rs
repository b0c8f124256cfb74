//! Client-side listing filter, shared with the CLI `list` command.
//!
//! Matching rules are the ones the site applies while typing: free-text
//! query is a case-insensitive substring match against both name fields;
//! governorate and place type are exact matches against the facet values.
//! Empty parameters match everything.

use crate::models::Place;

/// Filter parameters for the listing view.
#[derive(Debug, Clone, Default)]
pub struct FilterParams {
    /// Free-text query matched against both names.
    pub query: String,
    /// Exact governorate, or empty for all.
    pub governorate: String,
    /// Exact place type, or empty for all.
    pub place_type: String,
}

impl FilterParams {
    /// Whether a single place passes this filter.
    pub fn matches(&self, place: &Place) -> bool {
        if !self.query.is_empty() {
            let query = self.query.to_lowercase();
            let name_ar = place.name_ar.to_lowercase();
            let name_en = place.name_en.to_lowercase();
            if !name_ar.contains(&query) && !name_en.contains(&query) {
                return false;
            }
        }

        if !self.governorate.is_empty() && place.governorate != self.governorate {
            return false;
        }

        if !self.place_type.is_empty() && place.place_type != self.place_type {
            return false;
        }

        true
    }
}

/// Filter a slice of places, preserving order.
pub fn filter_places<'a>(places: &'a [Place], params: &FilterParams) -> Vec<&'a Place> {
    places.iter().filter(|place| params.matches(place)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(name_ar: &str, name_en: &str, governorate: &str, place_type: &str) -> Place {
        let mut p = Place::default();
        p.name_ar = name_ar.to_string();
        p.name_en = name_en.to_string();
        p.governorate = governorate.to_string();
        p.place_type = place_type.to_string();
        p
    }

    fn sample() -> Vec<Place> {
        vec![
            place("النادي", "The Club", "القاهره", "نادي"),
            place("الحديقه", "Green Park", "الجيزه", "حديقه"),
            place("كافيه النيل", "Nile Cafe", "القاهره", "كافيه"),
        ]
    }

    #[test]
    fn test_empty_params_match_all() {
        let places = sample();
        let found = filter_places(&places, &FilterParams::default());
        assert_eq!(found.len(), 3);
    }

    #[test]
    fn test_query_matches_english_name() {
        let places = sample();
        let params = FilterParams {
            query: "park".to_string(),
            ..Default::default()
        };
        let found = filter_places(&places, &params);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name_en, "Green Park");
    }

    #[test]
    fn test_query_matches_arabic_name() {
        let places = sample();
        let params = FilterParams {
            query: "النيل".to_string(),
            ..Default::default()
        };
        let found = filter_places(&places, &params);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name_en, "Nile Cafe");
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let places = sample();
        let params = FilterParams {
            query: "CLUB".to_string(),
            ..Default::default()
        };
        assert_eq!(filter_places(&places, &params).len(), 1);
    }

    #[test]
    fn test_governorate_is_exact_match() {
        let places = sample();
        let params = FilterParams {
            governorate: "القاهره".to_string(),
            ..Default::default()
        };
        assert_eq!(filter_places(&places, &params).len(), 2);

        let params = FilterParams {
            governorate: "القاه".to_string(),
            ..Default::default()
        };
        assert!(filter_places(&places, &params).is_empty());
    }

    #[test]
    fn test_filters_combine() {
        let places = sample();
        let params = FilterParams {
            query: "nile".to_string(),
            governorate: "القاهره".to_string(),
            place_type: "كافيه".to_string(),
        };
        assert_eq!(filter_places(&places, &params).len(), 1);

        let params = FilterParams {
            query: "nile".to_string(),
            governorate: "الجيزه".to_string(),
            place_type: String::new(),
        };
        assert!(filter_places(&places, &params).is_empty());
    }
}
