//! Hero section component

use leptos::*;

use crate::config::{APP_NAME, APP_NAME_AR};
use crate::i18n::{use_language, Lang};

#[component]
pub fn Hero() -> impl IntoView {
    let language = use_language();

    view! {
        <div class="hero">
            <h1>
                {move || match language.lang() {
                    Lang::Ar => APP_NAME_AR,
                    Lang::En => APP_NAME,
                }}
            </h1>
            <p class="subtitle">{move || language.t().site_description}</p>
        </div>
    }
}
