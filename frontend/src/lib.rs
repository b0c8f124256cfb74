//! Khoroga - Frontend Leptos Application
//!
//! The bilingual Arabic/English directory site. The dataset is built at
//! deploy time by `khoroga export` and served as a static JSON file; this
//! app fetches it once and handles search, facet filters, and language
//! switching with RTL/LTR entirely client-side.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! │  (language context + one-time dataset resource)              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Router                                                      │
//! │  ├── /               ListingPage (search + facet filters)    │
//! │  ├── /places/:slug   DetailPage  (or not-found)              │
//! │  └── /*              NotFoundView                            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Static configuration (dataset URL, storage keys)
//! - [`types`] - Dataset types and render-time helpers
//! - [`i18n`] - Language context, dictionaries, RTL handling
//! - [`components`] - UI components (Header, Listing, Detail, ...)
//! - [`services`] - Dataset fetching

use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod i18n;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{AppError, AppResult, Dataset, Place};

// Language
pub use i18n::{dictionary, provide_language, use_language, Dictionary, Lang, LanguageContext};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Dataset resource
// =============================================================================

/// The one-time dataset fetch, shared through context.
///
/// Loaded on startup and never refetched: a changed dataset ships with a
/// redeploy, and visitors pick it up on their next page load.
pub type DatasetResource = Resource<(), AppResult<Dataset>>;

/// Access the dataset resource from any component below [`App`].
pub fn use_dataset() -> DatasetResource {
    expect_context::<DatasetResource>()
}

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Khoroga - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Global language state (restores the stored choice, default Arabic)
    provide_language();

    // Fetch the dataset once for the whole app
    let dataset: DatasetResource = create_local_resource(|| (), |_| services::fetch_dataset());
    provide_context(dataset);

    view! {
        <Router>
            <Routes>
                <Route path="/" view=ListingPage/>
                <Route path="/places/:slug" view=DetailPage/>
                <Route path="/*any" view=NotFoundPage/>
            </Routes>
        </Router>
    }
}

/// Catch-all route: header + not-found body.
#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page">
            <Header/>
            <NotFoundView/>
            <Footer/>
        </div>
    }
}
