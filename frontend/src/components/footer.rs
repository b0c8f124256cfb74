//! Footer component

use leptos::*;

use crate::config::{APP_NAME, APP_NAME_AR};
use crate::i18n::{use_language, Lang};

#[component]
pub fn Footer() -> impl IntoView {
    let language = use_language();
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer>
            <div class="footer-brand">
                {move || match language.lang() {
                    Lang::Ar => APP_NAME_AR,
                    Lang::En => APP_NAME,
                }}
                <span class="footer-sep">"·"</span>
                <span class="footer-tagline">{move || language.t().site_description}</span>
            </div>
            <div class="footer-copy">
                {move || format!("© {} {}", year, match language.lang() {
                    Lang::Ar => APP_NAME_AR,
                    Lang::En => APP_NAME,
                })}
            </div>
        </footer>
    }
}
