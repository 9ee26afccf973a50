//! Navigation link table

use crate::locale::Locale;
use crate::path::localized_path;

/// Where a navigation entry points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    /// In-page anchor on the landing page, e.g. `#about`
    Anchor(&'static str),
    /// Locale-prefixed route, e.g. `members` → `/ja/members`
    Localized(&'static str),
}

impl NavTarget {
    pub fn href(&self, locale: Locale) -> String {
        match self {
            NavTarget::Anchor(id) => format!("#{}", id),
            NavTarget::Localized(route) => localized_path(locale, route),
        }
    }
}

/// One entry of the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    /// Message id in the translation catalog
    pub key: &'static str,
    pub target: NavTarget,
    /// Sub-links revealed on hover
    pub children: &'static [NavItem],
}

const SERVICES_CHILDREN: &[NavItem] = &[NavItem {
    key: "navbar-company",
    target: NavTarget::Localized("course"),
    children: &[],
}];

const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        key: "navbar-about",
        target: NavTarget::Anchor("about"),
        children: &[],
    },
    NavItem {
        key: "navbar-countries",
        target: NavTarget::Anchor("countries"),
        children: &[],
    },
    NavItem {
        key: "navbar-services",
        target: NavTarget::Anchor("services"),
        children: SERVICES_CHILDREN,
    },
    NavItem {
        key: "navbar-news",
        target: NavTarget::Anchor("news"),
        children: &[],
    },
    NavItem {
        key: "navbar-members",
        target: NavTarget::Localized("members"),
        children: &[],
    },
];

/// Menu entries in render order
pub fn nav_items() -> &'static [NavItem] {
    NAV_ITEMS
}
