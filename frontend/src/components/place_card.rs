use leptos::*;
use leptos_router::A;

use crate::i18n::{use_language, Lang};
use crate::types::Place;

/// One listing card, linking to the place's detail page.
#[component]
pub fn PlaceCard(place: Place) -> impl IntoView {
    let language = use_language();
    let href = format!("/places/{}", place.slug);

    // Only the name switches with the language; the badges show raw
    // dataset values, which are Arabic in practice.
    let name_ar = place.name_ar.clone();
    let name_en = place.name_en.clone();
    let name = move || match language.lang() {
        Lang::Ar => name_ar.clone(),
        Lang::En => name_en.clone(),
    };

    let location = [place.governorate.as_str(), place.area.as_str()]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" - ");

    let price = if place.price.is_empty() {
        String::new()
    } else if place.price_unit.is_empty() {
        place.price.clone()
    } else {
        format!("{} / {}", place.price, place.price_unit)
    };

    view! {
        <A href=href class="place-card">
            <div class="place-card-photo">
                <span class="place-card-pin">"📍"</span>
                {(!place.place_type.is_empty()).then(|| view! {
                    <span class="place-card-type">{place.place_type.clone()}</span>
                })}
                {(!place.place_nature.is_empty()).then(|| view! {
                    <span class="place-card-nature">{place.place_nature.clone()}</span>
                })}
            </div>
            <div class="place-card-body">
                <h3 class="place-card-name">{name}</h3>
                {(!location.is_empty()).then(|| view! {
                    <div class="place-card-location">"📍 " {location.clone()}</div>
                })}
                <div class="place-card-meta">
                    {(!price.is_empty()).then(|| view! {
                        <span class="place-card-price">"💰 " {price.clone()}</span>
                    })}
                    {(!place.suitable_age.is_empty()).then(|| view! {
                        <span class="place-card-age">"👶 " {place.suitable_age.clone()}</span>
                    })}
                </div>
            </div>
        </A>
    }
}
