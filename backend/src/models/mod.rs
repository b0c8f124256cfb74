//! Domain models for the Khoroga directory.
//!
//! This module contains the core data structures:
//!
//! - [`Place`] - One outing-location entry, derived from a single CSV data row
//! - [`Field`] - Closed enumeration of the canonical CSV-mapped fields
//!
//! Every attribute of a [`Place`] is a `String` and the empty string is the
//! "absent" value (never `None`, never null). Values are stored exactly as
//! the trimmed CSV cell text; yes/no interpretation of the boolean-like
//! fields happens at the presentation boundary (see [`crate::i18n`]), not
//! here.

use serde::{Deserialize, Serialize};

use crate::i18n::Language;

// =============================================================================
// Place
// =============================================================================

/// One directory entry.
///
/// JSON field names are camelCase to match the exported dataset contract
/// (`nameAr`, `mapLocation`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    /// Submission time from the spreadsheet, kept as an opaque string.
    pub timestamp: String,
    /// Arabic name.
    pub name_ar: String,
    /// English name. Also the source of the slug.
    pub name_en: String,
    /// Arabic description.
    pub description_ar: String,
    /// English description.
    pub description_en: String,
    /// Arabic street address.
    pub address_ar: String,
    /// English street address.
    pub address_en: String,
    /// Governorate (facet).
    pub governorate: String,
    /// Area/district within the governorate.
    pub area: String,
    /// Map URL.
    pub map_location: String,
    /// Place type (facet): restaurant, park, museum, ...
    pub place_type: String,
    /// Price as free text.
    pub price: String,
    /// Unit the price applies to (per person, per hour, ...).
    pub price_unit: String,
    /// Suitable age range as free text.
    pub suitable_age: String,
    /// Indoor/outdoor nature of the place.
    pub place_nature: String,
    /// Website URL.
    pub website_link: String,
    /// Working hours as free text.
    pub working_hours: String,
    /// Boolean-like free text: family friendly?
    pub family_friendly: String,
    /// Boolean-like free text: kids friendly?
    pub kids_friendly: String,
    /// Boolean-like free text: parking available?
    pub parking: String,
    /// Boolean-like free text: reservation needed?
    pub reservation_needed: String,
    /// Delimiter-separated list of social media URLs in one cell.
    pub social_media_links: String,
    /// Delimiter-separated list of phone numbers in one cell.
    pub phone_number: String,
    /// Photo references (preserved, unused by rendering logic).
    pub place_photos: String,
    /// Menu photo references (preserved, unused by rendering logic).
    pub menu_photos: String,
    /// Freeform notes.
    pub notes: String,
    /// Unique URL-safe identifier, derived from the English name at build
    /// time. Never authored in the spreadsheet.
    pub slug: String,
}

impl Place {
    /// Whether the row carried a name in at least one language.
    ///
    /// Rows failing this check are dropped by the record builder. This is
    /// the only content-based validation in the whole pipeline.
    pub fn has_name(&self) -> bool {
        !self.name_ar.is_empty() || !self.name_en.is_empty()
    }

    /// Localized name.
    ///
    /// Returns exactly the requested half of the bilingual pair, with no
    /// cross-language fallback. Empty means the spreadsheet left it blank.
    pub fn name(&self, lang: Language) -> &str {
        match lang {
            Language::Ar => &self.name_ar,
            Language::En => &self.name_en,
        }
    }

    /// Localized description (empty means "omit this section").
    pub fn description(&self, lang: Language) -> &str {
        match lang {
            Language::Ar => &self.description_ar,
            Language::En => &self.description_en,
        }
    }

    /// Localized address.
    pub fn address(&self, lang: Language) -> &str {
        match lang {
            Language::Ar => &self.address_ar,
            Language::En => &self.address_en,
        }
    }
}

// =============================================================================
// Canonical Fields
// =============================================================================

/// The canonical fields a CSV column can map to.
///
/// This is a closed set: columns whose header is not in the mapping table
/// (see [`crate::parser::HEADER_FIELDS`]) are ignored. `slug` is absent on
/// purpose: it is derived, not authored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Timestamp,
    NameAr,
    NameEn,
    DescriptionAr,
    DescriptionEn,
    AddressAr,
    AddressEn,
    Governorate,
    Area,
    MapLocation,
    PlaceType,
    Price,
    PriceUnit,
    SuitableAge,
    PlaceNature,
    WebsiteLink,
    WorkingHours,
    FamilyFriendly,
    KidsFriendly,
    Parking,
    ReservationNeeded,
    SocialMediaLinks,
    PhoneNumber,
    PlacePhotos,
    MenuPhotos,
    Notes,
}

impl Field {
    /// Assign a cell value to this field on a record.
    ///
    /// Explicit per-field dispatch instead of any reflective assignment, so
    /// the compiler guarantees every canonical field has exactly one slot.
    pub fn set(self, place: &mut Place, value: String) {
        match self {
            Field::Timestamp => place.timestamp = value,
            Field::NameAr => place.name_ar = value,
            Field::NameEn => place.name_en = value,
            Field::DescriptionAr => place.description_ar = value,
            Field::DescriptionEn => place.description_en = value,
            Field::AddressAr => place.address_ar = value,
            Field::AddressEn => place.address_en = value,
            Field::Governorate => place.governorate = value,
            Field::Area => place.area = value,
            Field::MapLocation => place.map_location = value,
            Field::PlaceType => place.place_type = value,
            Field::Price => place.price = value,
            Field::PriceUnit => place.price_unit = value,
            Field::SuitableAge => place.suitable_age = value,
            Field::PlaceNature => place.place_nature = value,
            Field::WebsiteLink => place.website_link = value,
            Field::WorkingHours => place.working_hours = value,
            Field::FamilyFriendly => place.family_friendly = value,
            Field::KidsFriendly => place.kids_friendly = value,
            Field::Parking => place.parking = value,
            Field::ReservationNeeded => place.reservation_needed = value,
            Field::SocialMediaLinks => place.social_media_links = value,
            Field::PhoneNumber => place.phone_number = value,
            Field::PlacePhotos => place.place_photos = value,
            Field::MenuPhotos => place.menu_photos = value,
            Field::Notes => place.notes = value,
        }
    }

    /// camelCase name, matching the serialized JSON key.
    pub fn json_name(self) -> &'static str {
        match self {
            Field::Timestamp => "timestamp",
            Field::NameAr => "nameAr",
            Field::NameEn => "nameEn",
            Field::DescriptionAr => "descriptionAr",
            Field::DescriptionEn => "descriptionEn",
            Field::AddressAr => "addressAr",
            Field::AddressEn => "addressEn",
            Field::Governorate => "governorate",
            Field::Area => "area",
            Field::MapLocation => "mapLocation",
            Field::PlaceType => "placeType",
            Field::Price => "price",
            Field::PriceUnit => "priceUnit",
            Field::SuitableAge => "suitableAge",
            Field::PlaceNature => "placeNature",
            Field::WebsiteLink => "websiteLink",
            Field::WorkingHours => "workingHours",
            Field::FamilyFriendly => "familyFriendly",
            Field::KidsFriendly => "kidsFriendly",
            Field::Parking => "parking",
            Field::ReservationNeeded => "reservationNeeded",
            Field::SocialMediaLinks => "socialMediaLinks",
            Field::PhoneNumber => "phoneNumber",
            Field::PlacePhotos => "placePhotos",
            Field::MenuPhotos => "menuPhotos",
            Field::Notes => "notes",
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_place_has_no_name() {
        let place = Place::default();
        assert!(!place.has_name());
    }

    #[test]
    fn test_has_name_either_language() {
        let mut place = Place::default();
        place.name_ar = "حديقة الأزهر".to_string();
        assert!(place.has_name());

        let mut place = Place::default();
        place.name_en = "Al-Azhar Park".to_string();
        assert!(place.has_name());
    }

    #[test]
    fn test_field_set() {
        let mut place = Place::default();
        Field::Governorate.set(&mut place, "القاهره".to_string());
        Field::NameEn.set(&mut place, "Nile Corniche".to_string());
        assert_eq!(place.governorate, "القاهره");
        assert_eq!(place.name_en, "Nile Corniche");
    }

    #[test]
    fn test_localized_name() {
        let mut place = Place::default();
        place.name_ar = "فاميلي بارك".to_string();
        place.name_en = "Family Park".to_string();
        assert_eq!(place.name(Language::Ar), "فاميلي بارك");
        assert_eq!(place.name(Language::En), "Family Park");
    }

    #[test]
    fn test_description_no_fallback() {
        let mut place = Place::default();
        place.description_en = "A quiet riverside spot".to_string();
        assert_eq!(place.description(Language::Ar), "");
        assert_eq!(place.description(Language::En), "A quiet riverside spot");
    }

    #[test]
    fn test_place_serializes_camel_case() {
        let mut place = Place::default();
        place.name_ar = "مكان".to_string();
        place.map_location = "https://maps.example.com/x".to_string();
        let json = serde_json::to_string(&place).unwrap();
        assert!(json.contains("\"nameAr\""));
        assert!(json.contains("\"mapLocation\""));
        assert!(!json.contains("name_ar"));
    }
}
