//! Leptos UI components

mod language_select;
mod menu_toggle;
mod navbar;

pub use language_select::LanguageSelect;
pub use menu_toggle::MenuToggle;
pub use navbar::Navbar;
