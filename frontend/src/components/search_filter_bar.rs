use leptos::*;

use crate::i18n::use_language;

/// Search input plus the two facet dropdowns.
///
/// The facet option lists come from the dataset (distinct values in
/// first-seen order); the empty option value means "no filter".
#[component]
pub fn SearchFilterBar(
    governorates: Vec<String>,
    place_types: Vec<String>,
    set_query: WriteSignal<String>,
    set_governorate: WriteSignal<String>,
    set_place_type: WriteSignal<String>,
) -> impl IntoView {
    let language = use_language();

    view! {
        <section class="filter-bar" dir=move || language.dir()>
            <input
                type="text"
                class="search-input"
                prop:placeholder=move || language.t().search_placeholder
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />

            <select
                class="facet-select"
                on:change=move |ev| set_governorate.set(event_target_value(&ev))
            >
                <option value="">{move || language.t().all_governorates}</option>
                <For
                    each=move || governorates.clone()
                    key=|governorate| governorate.clone()
                    children=|governorate| {
                        let value = governorate.clone();
                        view! { <option value=value>{governorate}</option> }
                    }
                />
            </select>

            <select
                class="facet-select"
                on:change=move |ev| set_place_type.set(event_target_value(&ev))
            >
                <option value="">{move || language.t().all_types}</option>
                <For
                    each=move || place_types.clone()
                    key=|place_type| place_type.clone()
                    children=|place_type| {
                        let value = place_type.clone();
                        view! { <option value=value>{place_type}</option> }
                    }
                />
            </select>
        </section>
    }
}
