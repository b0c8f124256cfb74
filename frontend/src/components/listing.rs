use leptos::*;
use leptos_meta::Title;

use crate::components::{Footer, Header, Hero, PlaceCard, SearchFilterBar};
use crate::i18n::use_language;
use crate::use_dataset;

/// The directory home page: hero, filter bar and the card grid.
///
/// Filtering happens entirely client-side over the loaded dataset: the
/// query is a case-insensitive substring match against both name fields,
/// the dropdowns are exact facet matches.
#[component]
pub fn ListingPage() -> impl IntoView {
    let language = use_language();
    let dataset = use_dataset();

    let (query, set_query) = create_signal(String::new());
    let (governorate, set_governorate) = create_signal(String::new());
    let (place_type, set_place_type) = create_signal(String::new());

    let filtered = create_memo(move |_| {
        let query = query.get().to_lowercase();
        let governorate = governorate.get();
        let place_type = place_type.get();

        dataset
            .get()
            .and_then(|result| result.ok())
            .map(|data| {
                data.places
                    .iter()
                    .filter(|place| {
                        if !query.is_empty()
                            && !place.name_ar.to_lowercase().contains(&query)
                            && !place.name_en.to_lowercase().contains(&query)
                        {
                            return false;
                        }
                        if !governorate.is_empty() && place.governorate != governorate {
                            return false;
                        }
                        if !place_type.is_empty() && place.place_type != place_type {
                            return false;
                        }
                        true
                    })
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default()
    });

    view! {
        <Title text="Khoroga - خروجة"/>
        <div class="page">
            <Header/>
            <Hero/>
            {move || match dataset.get() {
                None => view! {
                    <div class="status">{move || language.t().loading}</div>
                }.into_view(),
                Some(Err(e)) => {
                    log::error!("❌ Dataset load failed: {}", e);
                    view! {
                        <div class="status status-error">{move || language.t().load_error}</div>
                    }.into_view()
                }
                Some(Ok(data)) => view! {
                    <SearchFilterBar
                        governorates=data.governorates.clone()
                        place_types=data.place_types.clone()
                        set_query=set_query
                        set_governorate=set_governorate
                        set_place_type=set_place_type
                    />
                    <main class="listing">
                        {move || {
                            let places = filtered.get();
                            if places.is_empty() {
                                view! {
                                    <div class="empty-state">{move || language.t().no_results}</div>
                                }.into_view()
                            } else {
                                view! {
                                    <div class="place-grid">
                                        {places
                                            .into_iter()
                                            .map(|place| view! { <PlaceCard place=place/> })
                                            .collect_view()}
                                    </div>
                                }.into_view()
                            }
                        }}
                    </main>
                }.into_view(),
            }}
            <Footer/>
        </div>
    }
}
