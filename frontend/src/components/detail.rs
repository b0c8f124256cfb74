//! Detail view for a single place.

use leptos::*;
use leptos_meta::Title;
use leptos_router::{use_params_map, A};

use crate::components::{Footer, Header};
use crate::i18n::{use_language, Lang};
use crate::types::{is_affirmative, split_links, Place};
use crate::use_dataset;

/// The `/places/:slug` page.
///
/// An unknown slug renders the not-found view, never a crash and never an
/// empty page.
#[component]
pub fn DetailPage() -> impl IntoView {
    let params = use_params_map();
    let language = use_language();
    let dataset = use_dataset();

    let place = create_memo(move |_| {
        let slug = params.with(|p| p.get("slug").cloned().unwrap_or_default());
        dataset
            .get()
            .and_then(|result| result.ok())
            .map(|data| data.places.iter().find(|place| place.slug == slug).cloned())
    });

    let title = move || match place.get().flatten() {
        Some(found) => {
            let name = match language.lang() {
                Lang::Ar => found.name_ar,
                Lang::En => found.name_en,
            };
            format!("{} - Khoroga", name)
        }
        None => "Khoroga - خروجة".to_string(),
    };

    view! {
        <Title text=title/>
        <div class="page">
            <Header/>
            {move || match (dataset.get(), place.get()) {
                (None, _) => view! {
                    <div class="status">{move || language.t().loading}</div>
                }.into_view(),
                (Some(Err(e)), _) => {
                    log::error!("❌ Dataset load failed: {}", e);
                    view! {
                        <div class="status status-error">{move || language.t().load_error}</div>
                    }.into_view()
                }
                (Some(Ok(_)), Some(Some(found))) => view! {
                    <PlaceDetail place=found/>
                }.into_view(),
                _ => view! { <NotFoundView/> }.into_view(),
            }}
            <Footer/>
        </div>
    }
}

/// Full place view: localized texts, info grid, yes/no badges, links.
#[component]
pub fn PlaceDetail(place: Place) -> impl IntoView {
    let language = use_language();

    // Re-render the whole body on language switch; every label and each
    // localized half comes from the current language.
    move || {
        let t = language.t();
        let lang = language.lang();
        let p = place.clone();

        let name = match lang {
            Lang::Ar => p.name_ar.clone(),
            Lang::En => p.name_en.clone(),
        };
        let description = match lang {
            Lang::Ar => p.description_ar.clone(),
            Lang::En => p.description_en.clone(),
        };
        let address = match lang {
            Lang::Ar => p.address_ar.clone(),
            Lang::En => p.address_en.clone(),
        };
        let price = if p.price_unit.is_empty() {
            p.price.clone()
        } else {
            format!("{} / {}", p.price, p.price_unit)
        };
        let social_links: Vec<String> = split_links(&p.social_media_links)
            .into_iter()
            .map(str::to_string)
            .collect();
        let phones: Vec<String> = split_links(&p.phone_number)
            .into_iter()
            .map(str::to_string)
            .collect();

        view! {
            <main class="place-detail" dir=lang.dir()>
                <A href="/" class="back-link">{t.back}</A>

                <section class="detail-photo">
                    <span class="detail-photo-hint">{t.photos}</span>
                </section>

                <section class="detail-title">
                    <h1>{name}</h1>
                    {(!p.place_type.is_empty()).then(|| view! {
                        <span class="type-badge">{p.place_type.clone()}</span>
                    })}
                    {(!description.is_empty()).then(|| view! {
                        <p class="description">{description.clone()}</p>
                    })}
                </section>

                <section class="info-grid">
                    {(!address.is_empty()).then(|| view! {
                        <InfoCard icon="📍" label=t.address value=address.clone()/>
                    })}
                    {(!p.working_hours.is_empty()).then(|| view! {
                        <InfoCard icon="🕐" label=t.working_hours value=p.working_hours.clone()/>
                    })}
                    {(!p.price.is_empty()).then(|| view! {
                        <InfoCard icon="💰" label=t.price value=price.clone()/>
                    })}
                    {(!p.suitable_age.is_empty()).then(|| view! {
                        <InfoCard icon="👶" label=t.age value=p.suitable_age.clone()/>
                    })}
                    {(!p.place_nature.is_empty()).then(|| view! {
                        <InfoCard icon="🌳" label=t.place_nature value=p.place_nature.clone()/>
                    })}
                    {(!phones.is_empty()).then(|| view! {
                        <InfoCard icon="📞" label=t.phone value=phones.join(" - ")/>
                    })}
                </section>

                <section class="tag-row">
                    <TagBadge label=t.family_friendly active=is_affirmative(&p.family_friendly) yes=t.yes no=t.no/>
                    <TagBadge label=t.kids_friendly active=is_affirmative(&p.kids_friendly) yes=t.yes no=t.no/>
                    <TagBadge label=t.parking active=is_affirmative(&p.parking) yes=t.yes no=t.no/>
                    <TagBadge label=t.reservation_needed active=is_affirmative(&p.reservation_needed) yes=t.yes no=t.no/>
                </section>

                <section class="link-row">
                    {(!p.map_location.is_empty()).then(|| view! {
                        <a class="map-link" href=p.map_location.clone() target="_blank" rel="noopener">
                            "🗺️ " {t.view_on_map}
                        </a>
                    })}
                    {(!p.website_link.is_empty()).then(|| view! {
                        <a class="website-link" href=p.website_link.clone() target="_blank" rel="noopener">
                            "🌐 " {t.website}
                        </a>
                    })}
                </section>

                {(!social_links.is_empty()).then(|| view! {
                    <section class="social-links">
                        <h2>{t.social_media}</h2>
                        <ul>
                            {social_links
                                .iter()
                                .map(|link| view! {
                                    <li>
                                        <a href=link.clone() target="_blank" rel="noopener">
                                            {link.clone()}
                                        </a>
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    </section>
                })}

                {(!p.notes.is_empty()).then(|| view! {
                    <section class="notes">
                        <h2>{t.notes}</h2>
                        <p>{p.notes.clone()}</p>
                    </section>
                })}
            </main>
        }
    }
}

/// One labeled cell of the info grid.
#[component]
fn InfoCard(icon: &'static str, label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="info-card">
            <div class="info-label">{icon} " " {label}</div>
            <div class="info-value">{value}</div>
        </div>
    }
}

/// Yes/no badge for the boolean-like free-text fields.
#[component]
fn TagBadge(
    label: &'static str,
    active: bool,
    yes: &'static str,
    no: &'static str,
) -> impl IntoView {
    view! {
        <span class="tag-badge" class:active=active>
            {label} ": " {if active { yes } else { no }}
        </span>
    }
}

/// Shown for unknown slugs and unmatched routes.
#[component]
pub fn NotFoundView() -> impl IntoView {
    let language = use_language();

    view! {
        <main class="not-found">
            <h1>{move || language.t().not_found_title}</h1>
            <p>{move || language.t().not_found_body}</p>
            <A href="/" class="back-link">{move || language.t().back_home}</A>
        </main>
    }
}
