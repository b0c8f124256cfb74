//! Khoroga CLI - build and inspect the places dataset
//!
//! # Main Commands
//!
//! ```bash
//! khoroga export               # Build dist/places.json for the static site
//! khoroga list                 # List places (with optional filters)
//! khoroga show <slug>          # Show one place in full
//! ```
//!
//! # Debug Commands (for development)
//!
//! ```bash
//! khoroga parse places.csv     # Just parse CSV to JSON
//! khoroga facets               # Show distinct governorates and types
//! khoroga check                # Ingestion statistics for the dataset
//! ```
//!
//! The dataset path defaults to `data/places.csv` and can be overridden per
//! command or with the `KHOROGA_DATA` environment variable (a `.env` file is
//! honored).

use clap::{Parser, Subcommand};
use khoroga::{
    filter_places, is_affirmative, read_places_file, split_links, write_dataset, FilterParams,
    Language, PlaceStore,
};
use std::fs;
use std::path::{Path, PathBuf};

/// Default dataset location, relative to the working directory.
const DEFAULT_DATA_PATH: &str = "data/places.csv";

#[derive(Parser)]
#[command(name = "khoroga")]
#[command(about = "Build the bilingual places directory from its CSV export", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a CSV file and output the places as JSON
    Parse {
        /// Input CSV file
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List places, optionally filtered
    List {
        /// Dataset CSV (default: KHOROGA_DATA or data/places.csv)
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Free-text query against both names
        #[arg(short, long)]
        query: Option<String>,

        /// Exact governorate filter
        #[arg(short, long)]
        governorate: Option<String>,

        /// Exact place-type filter
        #[arg(short = 't', long = "type")]
        place_type: Option<String>,

        /// Display language: ar or en
        #[arg(short, long, default_value = "ar")]
        lang: String,
    },

    /// Show a single place by slug
    Show {
        /// The place's slug
        slug: String,

        /// Dataset CSV (default: KHOROGA_DATA or data/places.csv)
        #[arg(short, long)]
        data: Option<PathBuf>,
    },

    /// Show distinct governorates and place types
    Facets {
        /// Dataset CSV (default: KHOROGA_DATA or data/places.csv)
        #[arg(short, long)]
        data: Option<PathBuf>,
    },

    /// Ingestion statistics for the dataset
    Check {
        /// Dataset CSV (default: KHOROGA_DATA or data/places.csv)
        #[arg(short, long)]
        data: Option<PathBuf>,
    },

    /// Build the static dataset artifact for the site
    Export {
        /// Dataset CSV (default: KHOROGA_DATA or data/places.csv)
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Output path for the JSON document
        #[arg(short, long, default_value = "dist/places.json")]
        output: PathBuf,
    },
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse { input, output } => cmd_parse(&input, output.as_deref()),

        Commands::List {
            data,
            query,
            governorate,
            place_type,
            lang,
        } => cmd_list(data, query, governorate, place_type, &lang),

        Commands::Show { slug, data } => cmd_show(&slug, data),

        Commands::Facets { data } => cmd_facets(data),

        Commands::Check { data } => cmd_check(data),

        Commands::Export { data, output } => cmd_export(data, &output),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

/// Resolve the dataset path: explicit flag → KHOROGA_DATA → default.
fn data_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| std::env::var_os("KHOROGA_DATA").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH))
}

fn cmd_parse(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Parsing CSV: {}", input.display());

    let report = read_places_file(input)?;
    eprintln!("   Encoding: {}", report.encoding);
    eprintln!("   Rows: {}", report.row_count);
    if report.dropped_rows > 0 {
        eprintln!("   Dropped (no name): {}", report.dropped_rows);
    }
    eprintln!("✅ Parsed {} places", report.places.len());

    let json = serde_json::to_string_pretty(&report.places)?;
    write_output(&json, output)?;

    Ok(())
}

fn cmd_list(
    data: Option<PathBuf>,
    query: Option<String>,
    governorate: Option<String>,
    place_type: Option<String>,
    lang: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let lang = Language::from_code(lang).ok_or_else(|| format!("Unknown language: {}", lang))?;
    let path = data_path(data);
    let store = PlaceStore::load(&path)?;

    let params = FilterParams {
        query: query.unwrap_or_default(),
        governorate: governorate.unwrap_or_default(),
        place_type: place_type.unwrap_or_default(),
    };
    let places = filter_places(store.all(), &params);

    eprintln!("📍 {} of {} places\n", places.len(), store.len());
    for place in places {
        let name = match place.name(lang) {
            "" => place.name(lang.toggled()),
            name => name,
        };
        let mut location = place.governorate.clone();
        if !place.area.is_empty() {
            if !location.is_empty() {
                location.push_str(" - ");
            }
            location.push_str(&place.area);
        }
        println!("  {} ({})", name, place.slug);
        if !location.is_empty() || !place.place_type.is_empty() {
            println!("     {} | {}", location, place.place_type);
        }
    }

    Ok(())
}

fn cmd_show(slug: &str, data: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let path = data_path(data);
    let store = PlaceStore::load(&path)?;

    let place = store
        .by_slug(slug)
        .ok_or_else(|| format!("Place not found: {}", slug))?;

    println!("📍 {} / {} ({})", place.name_ar, place.name_en, place.slug);
    print_field("Governorate", &place.governorate);
    print_field("Area", &place.area);
    print_field("Type", &place.place_type);
    print_field("Nature", &place.place_nature);
    print_field("Description (ar)", &place.description_ar);
    print_field("Description (en)", &place.description_en);
    print_field("Address (ar)", &place.address_ar);
    print_field("Address (en)", &place.address_en);
    print_field("Working hours", &place.working_hours);
    if !place.price.is_empty() {
        let price = if place.price_unit.is_empty() {
            place.price.clone()
        } else {
            format!("{} / {}", place.price, place.price_unit)
        };
        print_field("Price", &price);
    }
    print_field("Suitable age", &place.suitable_age);
    print_flag("Family friendly", &place.family_friendly);
    print_flag("Kids friendly", &place.kids_friendly);
    print_flag("Parking", &place.parking);
    print_flag("Reservation needed", &place.reservation_needed);
    print_field("Map", &place.map_location);
    print_field("Website", &place.website_link);
    for link in split_links(&place.social_media_links) {
        println!("   Social: {}", link);
    }
    for phone in split_links(&place.phone_number) {
        println!("   Phone: {}", phone);
    }
    print_field("Notes", &place.notes);

    Ok(())
}

fn print_field(label: &str, value: &str) {
    if !value.is_empty() {
        println!("   {}: {}", label, value);
    }
}

fn print_flag(label: &str, value: &str) {
    if !value.is_empty() {
        let mark = if is_affirmative(value) { "✓" } else { "✗" };
        println!("   {}: {} ({})", label, mark, value);
    }
}

fn cmd_facets(data: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let path = data_path(data);
    let store = PlaceStore::load(&path)?;

    println!("🗺️  Governorates ({}):", store.governorates().len());
    for governorate in store.governorates() {
        println!("   - {}", governorate);
    }
    println!("\n🏷️  Place types ({}):", store.place_types().len());
    for place_type in store.place_types() {
        println!("   - {}", place_type);
    }

    Ok(())
}

fn cmd_check(data: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let path = data_path(data);
    eprintln!("📄 Checking: {}", path.display());

    let report = read_places_file(&path)?;
    let store = PlaceStore::from_places(report.places.clone());

    eprintln!("   Encoding: {}", report.encoding);
    eprintln!("   Rows (incl. header): {}", report.row_count);
    eprintln!("   Places kept: {}", report.places.len());
    eprintln!("   Dropped (no name): {}", report.dropped_rows);
    eprintln!("   Fallback slugs: {}", report.fallback_slugs);
    eprintln!("   Governorates: {}", store.governorates().len());
    eprintln!("   Place types: {}", store.place_types().len());

    let missing_english = report
        .places
        .iter()
        .filter(|p| p.name_en.is_empty())
        .count();
    if missing_english > 0 {
        eprintln!("   ⚠️  Places without an English name: {}", missing_english);
    }

    eprintln!("✅ Dataset OK");
    Ok(())
}

fn cmd_export(data: Option<PathBuf>, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let path = data_path(data);
    eprintln!("📄 Building dataset from: {}", path.display());

    let store = PlaceStore::load(&path)?;
    eprintln!("   {} places", store.len());
    eprintln!("   {} governorates, {} place types",
        store.governorates().len(),
        store.place_types().len()
    );

    write_dataset(&store, output)?;
    eprintln!("💾 Dataset written to: {}", output.display());
    eprintln!("✨ Done!");

    Ok(())
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("💾 Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
