//! Locale-prefixed URL paths
//!
//! Every localized route looks like `/{locale}/{remainder}`. These helpers split a
//! pathname into its locale segment and remainder, and rebuild it with a different
//! locale while leaving the remainder untouched.

use crate::locale::Locale;

/// First path segment, or `""` when the path has none
///
/// `"/ja/members"` → `"ja"`, `"/"` → `""`.
pub fn locale_segment(path: &str) -> &str {
    path.split('/').nth(1).unwrap_or("")
}

/// Everything after the locale segment, without a leading slash
///
/// Paths with fewer than two segments yield an empty remainder.
pub fn path_without_locale(path: &str) -> String {
    path.split('/').skip(2).collect::<Vec<_>>().join("/")
}

/// Build `/{locale}/{remainder}` (or `/{locale}` for an empty remainder)
pub fn localized_path(locale: Locale, remainder: &str) -> String {
    let remainder = remainder.trim_start_matches('/');
    if remainder.is_empty() {
        format!("/{}", locale.code())
    } else {
        format!("/{}/{}", locale.code(), remainder)
    }
}

/// Substitute `locale` for the first segment of `path`
pub fn switch_locale(path: &str, locale: Locale) -> String {
    localized_path(locale, &path_without_locale(path))
}

/// The parts of a browser location that survive a locale rewrite
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizedLocation {
    pub pathname: String,
    pub search: String,
    pub hash: String,
}

impl LocalizedLocation {
    pub fn new(
        pathname: impl Into<String>,
        search: impl Into<String>,
        hash: impl Into<String>,
    ) -> Self {
        Self {
            pathname: pathname.into(),
            search: search.into(),
            hash: hash.into(),
        }
    }

    /// Locale segment of the pathname
    pub fn locale_segment(&self) -> &str {
        locale_segment(&self.pathname)
    }

    /// Full href with the locale substituted, query and fragment preserved
    pub fn with_locale(&self, locale: Locale) -> String {
        let mut href = switch_locale(&self.pathname, locale);
        push_prefixed(&mut href, '?', &self.search);
        push_prefixed(&mut href, '#', &self.hash);
        href
    }
}

// Routers disagree on whether `search`/`hash` keep their sigil.
fn push_prefixed(href: &mut String, sigil: char, part: &str) {
    let part = part.trim_start_matches(sigil);
    if !part.is_empty() {
        href.push(sigil);
        href.push_str(part);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_segment() {
        assert_eq!(locale_segment("/ja/members"), "ja");
        assert_eq!(locale_segment("/en"), "en");
        assert_eq!(locale_segment("/"), "");
        assert_eq!(locale_segment(""), "");
    }

    #[test]
    fn test_path_without_locale() {
        assert_eq!(path_without_locale("/ja/members"), "members");
        assert_eq!(path_without_locale("/en/a/b/c"), "a/b/c");
        assert_eq!(path_without_locale("/en/members/"), "members/");
    }

    #[test]
    fn test_short_paths_have_empty_remainder() {
        assert_eq!(path_without_locale("/ja"), "");
        assert_eq!(path_without_locale("/"), "");
        assert_eq!(path_without_locale(""), "");
    }

    #[test]
    fn test_switch_locale_preserves_remainder() {
        assert_eq!(switch_locale("/ja/members", Locale::En), "/en/members");
        assert_eq!(switch_locale("/en/course", Locale::Ja), "/ja/course");
        assert_eq!(switch_locale("/en/a/b", Locale::Ja), "/ja/a/b");
    }

    #[test]
    fn test_switch_locale_on_bare_paths() {
        assert_eq!(switch_locale("/", Locale::Ja), "/ja");
        assert_eq!(switch_locale("/en", Locale::Ja), "/ja");
        assert_eq!(switch_locale("", Locale::En), "/en");
    }

    #[test]
    fn test_location_keeps_query_and_hash() {
        let location = LocalizedLocation::new("/ja/members", "?page=2", "#team");
        assert_eq!(location.with_locale(Locale::En), "/en/members?page=2#team");

        let bare = LocalizedLocation::new("/ja/members", "page=2", "team");
        assert_eq!(bare.with_locale(Locale::En), "/en/members?page=2#team");

        let plain = LocalizedLocation::new("/ja", "", "");
        assert_eq!(plain.with_locale(Locale::En), "/en");
    }
}
