//! Language selector

use leptos::prelude::*;
use wayfinder_core::Locale;

/// `<select>` listing every supported locale, bound to the active one
#[component]
pub fn LanguageSelect(
    locale: RwSignal<Locale>,
    label: Signal<String>,
    on_select: impl Fn(Locale) + 'static,
) -> impl IntoView {
    view! {
        <div class="language-select">
            <select
                class="language-select-input"
                aria-label=move || label.get()
                prop:value=move || locale.get().code()
                on:change=move |e| {
                    let value = event_target_value(&e);
                    match value.parse::<Locale>() {
                        Ok(selected) => on_select(selected),
                        Err(err) => leptos::logging::warn!("Ignoring language selection: {}", err),
                    }
                }
            >
                {Locale::ALL
                    .into_iter()
                    .map(|option| {
                        view! {
                            <option
                                value=option.code()
                                selected=move || locale.get() == option
                            >
                                {option.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
