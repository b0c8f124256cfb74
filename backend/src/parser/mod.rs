//! Lenient CSV ingestion for the hand-maintained places spreadsheet.
//!
//! The source file is a human-authored export: Arabic column titles, free
//! text cells with embedded commas and newlines, quoted fields, the
//! occasional blank separator row. Parsing is deliberately lenient: an
//! unterminated quote or an unknown column is never an error.
//!
//! Pipeline: raw bytes → [`decode_content`] → [`tokenize`] rows of fields →
//! header mapping against [`HEADER_FIELDS`] → one [`Place`] per data row →
//! slug assignment. Rows missing a name in both languages are dropped.

use std::fs;
use std::path::Path;

use crate::error::{CsvError, CsvResult};
use crate::models::{Field, Place};
use crate::slug::{slugify, SlugSet};

// =============================================================================
// Encoding detection
// =============================================================================

/// Detect the encoding of raw bytes using chardet.
pub fn detect_encoding(bytes: &[u8]) -> String {
    let (charset, _, _) = chardet::detect(bytes);

    // Normalize charset names to the labels decode_content understands
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "windows-1256" | "cp1256" => "windows-1256".to_string(),
        "iso-8859-6" | "arabic" => "iso-8859-6".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        other => other.to_string(),
    }
}

/// Decode bytes to a string using the specified encoding.
///
/// UTF-8 input passes through unchanged; the Arabic legacy encodings some
/// spreadsheet tools still emit are decoded via encoding_rs. An unknown
/// label falls back to lossy UTF-8 rather than failing. Lenient mode all
/// the way down.
pub fn decode_content(bytes: &[u8], encoding: &str) -> CsvResult<String> {
    match encoding.to_lowercase().as_str() {
        "utf-8" | "utf8" | "ascii" => match String::from_utf8(bytes.to_vec()) {
            Ok(text) => Ok(text),
            Err(_) => Ok(String::from_utf8_lossy(bytes).to_string()),
        },
        "windows-1256" | "cp1256" => Ok(encoding_rs::WINDOWS_1256.decode(bytes).0.to_string()),
        "iso-8859-6" | "arabic" => Ok(encoding_rs::ISO_8859_6.decode(bytes).0.to_string()),
        "windows-1252" | "cp1252" => Ok(encoding_rs::WINDOWS_1252.decode(bytes).0.to_string()),
        label => match encoding_rs::Encoding::for_label(label.as_bytes()) {
            Some(encoding) => Ok(encoding.decode(bytes).0.to_string()),
            None => Ok(String::from_utf8_lossy(bytes).to_string()),
        },
    }
}

// =============================================================================
// Tokenizer
// =============================================================================

/// Tokenize CSV text into rows of trimmed fields.
///
/// Single left-to-right scan with one character of lookahead and two states
/// (inside/outside quotes):
///
/// - Inside quotes, `""` emits a literal quote, a lone `"` closes the field,
///   and everything else is kept, commas and line breaks included.
/// - Outside quotes, `,` ends the field and `\n`/`\r`/`\r\n` ends the row.
/// - Rows whose every field trims to empty are skipped entirely.
/// - EOF flushes the pending field and row; an unterminated quote is
///   tolerated and simply ends with the input.
pub fn tokenize(content: &str) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    let mut chars = content.chars().peekable();
    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    // Escaped quote ("")
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(ch);
            }
        } else {
            match ch {
                '"' => in_quotes = true,
                ',' => {
                    fields.push(current.trim().to_string());
                    current.clear();
                }
                '\n' | '\r' => {
                    // \r\n counts as a single row terminator
                    if ch == '\r' && chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    fields.push(current.trim().to_string());
                    current.clear();
                    flush_row(&mut rows, &mut fields);
                }
                _ => current.push(ch),
            }
        }
    }

    // EOF acts as a final row terminator
    fields.push(current.trim().to_string());
    flush_row(&mut rows, &mut fields);

    rows
}

/// Keep the pending row unless every field is empty (blank-line skipping).
fn flush_row(rows: &mut Vec<Vec<String>>, fields: &mut Vec<String>) {
    if fields.iter().any(|f| !f.is_empty()) {
        rows.push(std::mem::take(fields));
    } else {
        fields.clear();
    }
}

// =============================================================================
// Header mapping
// =============================================================================

/// The closed table mapping spreadsheet column titles to canonical fields.
///
/// Titles are the exact Arabic header texts of the source form export.
/// Lookup is by exact match on the trimmed cell; headers not listed here are
/// silently ignored, so extra spreadsheet columns never break an import.
pub const HEADER_FIELDS: &[(&str, Field)] = &[
    ("طابع زمني", Field::Timestamp),
    ("اسم المكان بالعربي", Field::NameAr),
    ("اسم المكان بالانجليزيه", Field::NameEn),
    ("وصف المكان بالعربي", Field::DescriptionAr),
    ("وصف المكان بالانجليزيه", Field::DescriptionEn),
    ("عنوان المكان بالعربي", Field::AddressAr),
    ("عنوان المكان بالانجليزيه", Field::AddressEn),
    ("المحافظه", Field::Governorate),
    ("المنطقه", Field::Area),
    ("المكان على الخريطه", Field::MapLocation),
    ("نوع المكان", Field::PlaceType),
    ("السعر", Field::Price),
    ("الوحده للسعر", Field::PriceUnit),
    ("السن المناسب للمكان", Field::SuitableAge),
    ("طبيعة المكان", Field::PlaceNature),
    ("لينك الموقع الالكتروني", Field::WebsiteLink),
    ("مواعيد العمل", Field::WorkingHours),
    ("مناسب للعائلات", Field::FamilyFriendly),
    ("مناسب للاطفال", Field::KidsFriendly),
    ("متاح موقف للسيارات (Parking)", Field::Parking),
    ("محتاج حجز؟", Field::ReservationNeeded),
    (
        "لينكات صفحات التواصل الاجتماعي (فيسبوك، انستجرام، الخ)",
        Field::SocialMediaLinks,
    ),
    ("رقم التليفون", Field::PhoneNumber),
    ("صور للمكان", Field::PlacePhotos),
    ("صور المنيو (في حاله مطعم/كافيه)", Field::MenuPhotos),
    ("ملاحظات", Field::Notes),
];

/// Map a header row to an ordered `(column index, field)` table.
///
/// Column order in the spreadsheet is irrelevant; a duplicated header maps
/// both columns to the same field and the later column wins per row.
fn map_headers(headers: &[String]) -> Vec<(usize, Field)> {
    let mut columns = Vec::new();
    for (index, cell) in headers.iter().enumerate() {
        let title = cell.trim();
        if let Some((_, field)) = HEADER_FIELDS.iter().find(|(header, _)| *header == title) {
            columns.push((index, *field));
        }
    }
    columns
}

// =============================================================================
// Record building
// =============================================================================

/// Result of one ingestion pass, with counters for diagnostics.
#[derive(Debug, Clone)]
pub struct ParseReport {
    /// Kept places, in source row order.
    pub places: Vec<Place>,
    /// Encoding the bytes were decoded with ("utf-8" for text input).
    pub encoding: String,
    /// Tokenized rows, header included, blank rows already skipped.
    pub row_count: usize,
    /// Data rows dropped for having no name in either language.
    pub dropped_rows: usize,
    /// Places whose slug fell back to a positional placeholder.
    pub fallback_slugs: usize,
}

/// Parse CSV text into places.
pub fn parse_places(content: &str) -> Vec<Place> {
    parse_report(content).places
}

/// Parse CSV text, keeping the diagnostic counters.
pub fn parse_report(content: &str) -> ParseReport {
    build_report(tokenize(content), "utf-8".to_string())
}

/// Parse raw CSV bytes with encoding auto-detection.
pub fn parse_bytes(bytes: &[u8]) -> CsvResult<ParseReport> {
    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding)?;
    Ok(build_report(tokenize(&content), encoding))
}

/// Read and parse a CSV file.
///
/// A missing or unreadable file is a hard error ([`CsvError::Io`]); there
/// is no fallback dataset.
pub fn read_places_file<P: AsRef<Path>>(path: P) -> CsvResult<ParseReport> {
    let bytes = fs::read(path.as_ref()).map_err(CsvError::Io)?;
    parse_bytes(&bytes)
}

fn build_report(rows: Vec<Vec<String>>, encoding: String) -> ParseReport {
    let row_count = rows.len();
    if row_count < 2 {
        // Header-only or empty content yields no places
        return ParseReport {
            places: Vec::new(),
            encoding,
            row_count,
            dropped_rows: 0,
            fallback_slugs: 0,
        };
    }

    let columns = map_headers(&rows[0]);

    let mut places = Vec::new();
    let mut slugs = SlugSet::new();
    let mut dropped_rows = 0;
    let mut fallback_slugs = 0;

    for (row, values) in rows.iter().enumerate().skip(1) {
        let mut place = Place::default();
        for &(index, field) in &columns {
            if let Some(value) = values.get(index) {
                field.set(&mut place, value.clone());
            }
        }

        // The only content-based validation: a place must be named
        if !place.has_name() {
            dropped_rows += 1;
            continue;
        }

        if slugify(&place.name_en).is_empty() {
            fallback_slugs += 1;
        }
        place.slug = slugs.assign(&place.name_en, row);
        places.push(place);
    }

    ParseReport {
        places,
        encoding,
        row_count,
        dropped_rows,
        fallback_slugs,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "اسم المكان بالعربي,اسم المكان بالانجليزيه,المحافظه,نوع المكان";

    #[test]
    fn test_tokenize_simple_row() {
        let rows = tokenize("a,b,c\n1,2,3");
        assert_eq!(rows, vec![vec!["a", "b", "c"], vec!["1", "2", "3"]]);
    }

    #[test]
    fn test_tokenize_quoted_comma() {
        let rows = tokenize("a,\"b,c\",d");
        assert_eq!(rows, vec![vec!["a", "b,c", "d"]]);
    }

    #[test]
    fn test_tokenize_escaped_quotes() {
        let rows = tokenize("\"he said \"\"hi\"\"\",x");
        assert_eq!(rows, vec![vec!["he said \"hi\"", "x"]]);
    }

    #[test]
    fn test_tokenize_newline_inside_quotes() {
        let rows = tokenize("a,\"line one\nline two\",b");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][1], "line one\nline two");
    }

    #[test]
    fn test_tokenize_crlf_is_one_terminator() {
        let rows = tokenize("a,b\r\nc,d\r\n");
        assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn test_tokenize_bare_cr_terminates_row() {
        let rows = tokenize("a,b\rc,d");
        assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn test_tokenize_skips_blank_rows() {
        let rows = tokenize("a,b\n\n,,\n   ,  \nc,d\n");
        assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn test_tokenize_trims_fields() {
        let rows = tokenize("  a  , b ,c");
        assert_eq!(rows, vec![vec!["a", "b", "c"]]);
    }

    #[test]
    fn test_tokenize_unterminated_quote_is_tolerated() {
        let rows = tokenize("a,\"unclosed value");
        assert_eq!(rows, vec![vec!["a", "unclosed value"]]);
    }

    #[test]
    fn test_tokenize_no_trailing_newline() {
        let rows = tokenize("a,b");
        assert_eq!(rows, vec![vec!["a", "b"]]);
    }

    #[test]
    fn test_parse_basic_places() {
        let csv = format!("{}\nالنادي,The Club,القاهره,نادي\n", HEADER);
        let places = parse_places(&csv);
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].name_ar, "النادي");
        assert_eq!(places[0].name_en, "The Club");
        assert_eq!(places[0].governorate, "القاهره");
        assert_eq!(places[0].place_type, "نادي");
        assert_eq!(places[0].slug, "the-club");
    }

    #[test]
    fn test_unknown_header_is_ignored() {
        let with_extra = "عمود غريب,اسم المكان بالانجليزيه\nxxx,Fun Land\n";
        let places = parse_places(with_extra);
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].name_en, "Fun Land");
        // Value under the unknown column landed nowhere
        assert_eq!(places[0].notes, "");
    }

    #[test]
    fn test_header_reordering_is_irrelevant() {
        let reordered = "المحافظه,اسم المكان بالانجليزيه\nالجيزه,Dream Park\n";
        let places = parse_places(reordered);
        assert_eq!(places[0].governorate, "الجيزه");
        assert_eq!(places[0].name_en, "Dream Park");
    }

    #[test]
    fn test_duplicate_header_later_column_wins() {
        let duplicated =
            "اسم المكان بالانجليزيه,اسم المكان بالانجليزيه\nOld Name,New Name\n";
        let places = parse_places(duplicated);
        assert_eq!(places[0].name_en, "New Name");
    }

    #[test]
    fn test_missing_header_leaves_default() {
        let csv = "اسم المكان بالانجليزيه\nZoo Garden\n";
        let places = parse_places(csv);
        assert_eq!(places[0].governorate, "");
        assert_eq!(places[0].price, "");
    }

    #[test]
    fn test_nameless_rows_are_dropped() {
        let csv = format!("{}\n,,القاهره,مطعم\nالنيل,Nile Spot,الجيزه,كافيه\n", HEADER);
        let report = parse_report(&csv);
        assert_eq!(report.places.len(), 1);
        assert_eq!(report.places[0].name_en, "Nile Spot");
        assert_eq!(report.dropped_rows, 1);
    }

    #[test]
    fn test_arabic_only_name_is_kept_with_fallback_slug() {
        let csv = format!("{}\nحديقة الاورمان,,الجيزه,حديقه\n", HEADER);
        let report = parse_report(&csv);
        assert_eq!(report.places.len(), 1);
        // First data row is row 1 of the tokenized sequence
        assert_eq!(report.places[0].slug, "place-1");
        assert_eq!(report.fallback_slugs, 1);
    }

    #[test]
    fn test_slug_collision_gets_row_suffix() {
        let csv = format!(
            "{}\nأ,Happy Land,القاهره,ملاهي\nب,Happy Land!,الجيزه,ملاهي\n",
            HEADER
        );
        let places = parse_places(&csv);
        assert_eq!(places[0].slug, "happy-land");
        assert_eq!(places[1].slug, "happy-land-2");
    }

    #[test]
    fn test_slugs_unique_across_parse() {
        let csv = format!(
            "{}\nأ,Park,القاهره,\nب,Park,الجيزه,\nج,Park,اسكندريه,\n",
            HEADER
        );
        let places = parse_places(&csv);
        let mut slugs: Vec<_> = places.iter().map(|p| p.slug.clone()).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), places.len());
    }

    #[test]
    fn test_quoted_multiline_description() {
        let csv = "اسم المكان بالانجليزيه,وصف المكان بالانجليزيه\n\
                   Green Park,\"Big lawns,\nshaded seating\"\n";
        let places = parse_places(csv);
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].description_en, "Big lawns,\nshaded seating");
    }

    #[test]
    fn test_header_only_content() {
        let report = parse_report(HEADER);
        assert!(report.places.is_empty());
        assert_eq!(report.row_count, 1);
    }

    #[test]
    fn test_empty_content() {
        assert!(parse_places("").is_empty());
    }

    #[test]
    fn test_detect_utf8() {
        let csv = "اسم المكان بالعربي\nالنادي\n";
        assert_eq!(detect_encoding(csv.as_bytes()), "utf-8");
    }

    #[test]
    fn test_decode_windows_1256() {
        // "من" in windows-1256
        let bytes: &[u8] = &[0xE3, 0xE4];
        let decoded = decode_content(bytes, "windows-1256").unwrap();
        assert_eq!(decoded, "من");
    }

    #[test]
    fn test_decode_unknown_label_is_lossy_utf8() {
        let decoded = decode_content(b"plain", "x-no-such-charset").unwrap();
        assert_eq!(decoded, "plain");
    }

    #[test]
    fn test_parse_bytes_utf8_roundtrip() {
        let csv = format!("{}\nالنادي,The Club,القاهره,نادي\n", HEADER);
        let report = parse_bytes(csv.as_bytes()).unwrap();
        assert_eq!(report.encoding, "utf-8");
        assert_eq!(report.places.len(), 1);
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let err = read_places_file("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, CsvError::Io(_)));
    }
}
