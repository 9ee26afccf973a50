//! Company and course overview, linked from the Services submenu

use crate::i18n::use_i18n;
use leptos::prelude::*;

#[component]
pub fn Course() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <section class="page page-course">
            <h1>{move || i18n.t("page-course-title")}</h1>
            <p>{move || i18n.t("page-course-body")}</p>
        </section>
    }
}
