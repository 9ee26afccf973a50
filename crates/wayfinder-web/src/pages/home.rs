//! Landing page with the in-page anchor targets of the navbar

use crate::i18n::use_i18n;
use leptos::prelude::*;

const SECTIONS: [(&str, &str, &str); 4] = [
    ("about", "navbar-about", "page-home-about"),
    ("countries", "navbar-countries", "page-home-countries"),
    ("services", "navbar-services", "page-home-services"),
    ("news", "navbar-news", "page-home-news"),
];

/// Landing page
#[component]
pub fn Home() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="page page-home">
            <header class="hero">
                <h1>{move || i18n.t("page-home-title")}</h1>
            </header>
            {SECTIONS
                .into_iter()
                .map(|(id, title, body)| {
                    view! {
                        <section id=id class="home-section">
                            <h2>{move || i18n.t(title)}</h2>
                            <p>{move || i18n.t(body)}</p>
                        </section>
                    }
                })
                .collect_view()}
        </div>
    }
}
