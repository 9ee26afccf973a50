//! Page components

mod course;
mod home;
mod members;

pub use course::Course;
pub use home::Home;
pub use members::Members;

use crate::i18n::use_i18n;
use leptos::prelude::*;

/// Fallback for routes outside the locale tree
#[component]
pub fn NotFound() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <section class="page page-not-found">
            <h1>{move || i18n.t("page-not-found")}</h1>
        </section>
    }
}
