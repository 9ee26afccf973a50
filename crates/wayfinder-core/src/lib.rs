//! wayfinder-core - Core library for wayfinder
//!
//! Platform-free pieces of the localized site navigation: supported locales,
//! locale-prefixed path rewriting, the persisted language preference, the
//! responsive menu state machine, the link table and the message catalogs.

pub mod config;
pub mod error;
pub mod i18n;
pub mod locale;
pub mod menu;
pub mod nav;
pub mod path;
pub mod preference;
pub mod sync;

pub use config::SiteConfig;
pub use error::CoreError;
pub use i18n::Translator;
pub use locale::Locale;
pub use menu::{MenuEvent, MenuState, ToggleIcon, BREAKPOINT_PX};
pub use nav::{nav_items, NavItem, NavTarget};
pub use path::{
    locale_segment, localized_path, path_without_locale, switch_locale, LocalizedLocation,
};
pub use preference::{MemoryStore, PreferenceStore, SessionStore, PREFERRED_LANGUAGE_KEY};
pub use sync::{redirect_for, LocaleSync, Reconciled};
