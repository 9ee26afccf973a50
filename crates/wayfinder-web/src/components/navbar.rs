//! Site navigation bar
//!
//! Logo, link menu, language selector and the narrow-viewport hamburger. Keeps the
//! URL locale prefix in line with the stored preference and drives the menu state
//! machine from window resize and document click events.

use leptos::ev;
use leptos::html::{Button, Div};
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::location::Location;
use leptos_router::NavigateOptions;
use wayfinder_core::{nav_items, LocalizedLocation, MenuEvent, MenuState, NavItem};

use crate::components::{LanguageSelect, MenuToggle};
use crate::i18n::{use_i18n, I18nContext};
use crate::viewport::{event_within, viewport_width};

fn replace_history() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..Default::default()
    }
}

fn current_location(location: &Location, track_path: bool) -> LocalizedLocation {
    let pathname = if track_path {
        location.pathname.get()
    } else {
        location.pathname.get_untracked()
    };
    LocalizedLocation::new(
        pathname,
        location.search.get_untracked(),
        location.hash.get_untracked(),
    )
}

/// Top navigation bar
#[component]
pub fn Navbar() -> impl IntoView {
    let i18n = use_i18n();
    let config = i18n.config();
    let location = use_location();
    let navigate = use_navigate();

    let breakpoint = config.breakpoint_px;

    // Locale sync: on mount and on every path change
    let sync_location = location.clone();
    let sync_navigate = navigate.clone();
    Effect::new(move |_| {
        let current = current_location(&sync_location, true);
        let outcome = i18n.reconcile(&current);
        i18n.locale.set(outcome.locale);
        if let Some(target) = outcome.redirect {
            leptos::logging::log!("Locale redirect {} -> {}", current.pathname, target);
            sync_navigate(&target, replace_history());
        }
    });

    let on_select = move |selected| {
        let current = current_location(&location, false);
        let (target, saved) = i18n.select(&current, selected);
        if let Err(e) = saved {
            leptos::logging::warn!("Language preference not saved: {}", e);
        }
        i18n.locale.set(selected);
        navigate(&target, replace_history());
    };

    // Menu state machine
    let (menu, set_menu) = signal(MenuState::default());
    let menu_ref = NodeRef::<Div>::new();
    let toggle_ref = NodeRef::<Button>::new();
    let apply = move |event: MenuEvent| {
        set_menu.update(|state| *state = state.on_event_with_breakpoint(event, breakpoint));
    };

    if let Some(width) = viewport_width() {
        apply(MenuEvent::Resize { width });
    }
    let resize = window_event_listener(ev::resize, move |_| {
        if let Some(width) = viewport_width() {
            apply(MenuEvent::Resize { width });
        }
    });
    on_cleanup(move || resize.remove());

    // Document click listener, attached only while the dropdown is showing
    Effect::new(move |_| {
        if !menu.get().listens_for_outside_click() {
            return;
        }
        let click = window_event_listener(ev::click, move |event| {
            let in_menu = menu_ref
                .get_untracked()
                .is_some_and(|container| event_within(&event, container.as_ref()));
            let on_toggle = toggle_ref
                .get_untracked()
                .is_some_and(|toggle| event_within(&event, toggle.as_ref()));
            if let Some(click) = menu.get_untracked().document_click(in_menu, on_toggle) {
                apply(click);
            }
        });
        on_cleanup(move || click.remove());
    });

    let logo_alt = move || i18n.t("navbar-logo-alt");

    view! {
        <nav class="navbar">
            <div class="navbar-brand">
                <img src=config.logo_src width="140" alt=logo_alt />
            </div>

            <div class="navbar-menu" node_ref=menu_ref>
                <ul class=move || menu.get().list_class()>
                    {nav_items()
                        .iter()
                        .map(|item| view! { <NavEntry item=*item i18n /> })
                        .collect_view()}
                </ul>
            </div>

            <LanguageSelect
                locale=i18n.locale
                label=Signal::derive(move || i18n.t("navbar-language"))
                on_select
            />

            <MenuToggle
                state=menu
                label=Signal::derive(move || i18n.t("navbar-toggle-menu"))
                toggle_ref
                on_toggle=move || apply(MenuEvent::Toggle)
            />
        </nav>
    }
}

/// One menu entry, with its hover sub-links
#[component]
fn NavEntry(item: NavItem, i18n: I18nContext) -> impl IntoView {
    let has_children = !item.children.is_empty();

    view! {
        <li class="nav-item" class:nav-item-group=has_children>
            <a
                class="nav-link"
                href=move || item.target.href(i18n.locale.get())
            >
                {move || i18n.t(item.key)}
            </a>
            {has_children
                .then(|| {
                    view! {
                        <div class="nav-submenu">
                            {item
                                .children
                                .iter()
                                .map(|child| {
                                    let child = *child;
                                    view! {
                                        <a
                                            class="nav-sublink"
                                            href=move || child.target.href(i18n.locale.get())
                                        >
                                            {move || i18n.t(child.key)}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })}
        </li>
    }
}
