//! Hamburger control with inline Font Awesome-style SVG icons

use leptos::html::Button;
use leptos::prelude::*;
use wayfinder_core::{MenuState, ToggleIcon};

/// Narrow-viewport menu toggle
#[component]
pub fn MenuToggle(
    state: ReadSignal<MenuState>,
    label: Signal<String>,
    toggle_ref: NodeRef<Button>,
    on_toggle: impl Fn() + 'static,
) -> impl IntoView {
    view! {
        <button
            class="menu-toggle"
            node_ref=toggle_ref
            on:click=move |_| on_toggle()
            aria-label=move || label.get()
            aria-expanded=move || state.get().aria_expanded()
        >
            {move || match state.get().toggle_icon() {
                ToggleIcon::Bars => {
                    view! {
                        <svg xmlns="http://www.w3.org/2000/svg" width="30" height="30" viewBox="0 0 448 512" fill="currentColor">
                            <path d="M0 96C0 78.3 14.3 64 32 64H416c17.7 0 32 14.3 32 32s-14.3 32-32 32H32C14.3 128 0 113.7 0 96zM0 256c0-17.7 14.3-32 32-32H416c17.7 0 32 14.3 32 32s-14.3 32-32 32H32c-17.7 0-32-14.3-32-32zM448 416c0 17.7-14.3 32-32 32H32c-17.7 0-32-14.3-32-32s14.3-32 32-32H416c17.7 0 32 14.3 32 32z"/>
                        </svg>
                    }
                        .into_any()
                }
                ToggleIcon::XMark => {
                    view! {
                        <svg xmlns="http://www.w3.org/2000/svg" width="30" height="30" viewBox="0 0 384 512" fill="currentColor">
                            <path d="M342.6 150.6c12.5-12.5 12.5-32.8 0-45.3s-32.8-12.5-45.3 0L192 210.7 86.6 105.4c-12.5-12.5-32.8-12.5-45.3 0s-12.5 32.8 0 45.3L146.7 256 41.4 361.4c-12.5 12.5-12.5 32.8 0 45.3s32.8 12.5 45.3 0L192 301.3 297.4 406.6c12.5 12.5 32.8 12.5 45.3 0s12.5-32.8 0-45.3L237.3 256 342.6 150.6z"/>
                        </svg>
                    }
                        .into_any()
                }
            }}
        </button>
    }
}
