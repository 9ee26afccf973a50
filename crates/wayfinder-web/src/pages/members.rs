use crate::i18n::use_i18n;
use leptos::prelude::*;

#[component]
pub fn Members() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <section class="page page-members">
            <h1>{move || i18n.t("page-members-title")}</h1>
            <p>{move || i18n.t("page-members-body")}</p>
        </section>
    }
}
