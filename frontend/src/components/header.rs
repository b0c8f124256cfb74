use leptos::*;
use leptos_router::A;

use crate::config::{APP_NAME, APP_NAME_AR};
use crate::i18n::{use_language, Lang};

#[component]
pub fn Header() -> impl IntoView {
    let language = use_language();

    let on_toggle = move |_| {
        language.toggle();
    };

    view! {
        <header>
            <div class="header-left">
                <A href="/" class="logo">
                    <span class="logo-pin">"📍"</span>
                    {move || match language.lang() {
                        Lang::Ar => view! {
                            <span class="logo-text">
                                {APP_NAME_AR}
                                <span class="logo-sep">"·"</span>
                                <span class="logo-alt">{APP_NAME}</span>
                            </span>
                        },
                        Lang::En => view! {
                            <span class="logo-text">
                                {APP_NAME}
                                <span class="logo-sep">"·"</span>
                                <span class="logo-alt">{APP_NAME_AR}</span>
                            </span>
                        },
                    }}
                </A>
            </div>
            <div class="header-right">
                <button class="lang-toggle" on:click=on_toggle>
                    {move || match language.lang() {
                        Lang::Ar => "EN",
                        Lang::En => "عربي",
                    }}
                </button>
            </div>
        </header>
    }
}
