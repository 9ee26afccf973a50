//! Keeps the URL locale prefix and the persisted preference in agreement
//!
//! The persisted preference is authoritative: on mount and on every path change the
//! URL is rewritten (history replace) to carry the preferred locale. An explicit
//! selection updates the preference first and then rewrites the URL the same way.

use crate::error::CoreError;
use crate::locale::Locale;
use crate::path::{locale_segment, LocalizedLocation};
use crate::preference::{save_preferred_locale, PreferenceStore, PREFERRED_LANGUAGE_KEY};

/// Outcome of reconciling a location with the preference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciled {
    /// Locale to render with
    pub locale: Locale,
    /// Href to replace the current history entry with, if the URL disagrees
    pub redirect: Option<String>,
}

/// Locale synchronizer bound to one preference store
#[derive(Debug)]
pub struct LocaleSync<S> {
    store: S,
    key: String,
    fallback: Locale,
}

impl<S: PreferenceStore> LocaleSync<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, PREFERRED_LANGUAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            fallback: Locale::DEFAULT,
        }
    }

    /// Locale used when nothing (or nothing supported) is stored
    pub fn with_fallback(mut self, fallback: Locale) -> Self {
        self.fallback = fallback;
        self
    }

    /// Preferred locale, defaulting to the fallback (`en` unless configured)
    pub fn preferred(&self) -> Locale {
        Locale::from_code_or(self.store.get(&self.key).as_deref(), self.fallback)
    }

    /// Run on mount and on every path change
    pub fn reconcile(&self, location: &LocalizedLocation) -> Reconciled {
        let locale = self.preferred();
        let redirect = redirect_for(location, locale);
        if let Some(target) = &redirect {
            tracing::debug!(
                from = %location.pathname,
                to = %target,
                "Locale segment disagrees with preference"
            );
        }
        Reconciled { locale, redirect }
    }

    /// Explicit selection from the language control
    ///
    /// Returns the href to navigate to (history replace). A storage failure is
    /// returned alongside the href rather than instead of it, so callers can log it
    /// and still navigate.
    pub fn select(
        &self,
        location: &LocalizedLocation,
        locale: Locale,
    ) -> (String, Result<(), CoreError>) {
        let saved = save_preferred_locale(&self.store, &self.key, locale);
        (location.with_locale(locale), saved)
    }
}

/// Href to redirect to when the URL locale segment is not `preferred`
pub fn redirect_for(location: &LocalizedLocation, preferred: Locale) -> Option<String> {
    if locale_segment(&location.pathname) == preferred.code() {
        None
    } else {
        Some(location.with_locale(preferred))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preference::MemoryStore;

    fn at(path: &str) -> LocalizedLocation {
        LocalizedLocation::new(path, "", "")
    }

    #[test]
    fn test_mismatch_redirects_to_default() {
        let sync = LocaleSync::new(MemoryStore::new());
        let outcome = sync.reconcile(&at("/ja/members"));
        assert_eq!(outcome.locale, Locale::En);
        assert_eq!(outcome.redirect.as_deref(), Some("/en/members"));
    }

    #[test]
    fn test_matching_segment_does_not_redirect() {
        let sync = LocaleSync::new(MemoryStore::with_locale(Locale::Ja));
        let outcome = sync.reconcile(&at("/ja/course"));
        assert_eq!(outcome.locale, Locale::Ja);
        assert_eq!(outcome.redirect, None);
    }

    #[test]
    fn test_reconcile_is_idempotent_after_redirect() {
        let sync = LocaleSync::new(MemoryStore::with_locale(Locale::Ja));
        let first = sync.reconcile(&at("/en/members"));
        let target = first.redirect.unwrap();
        assert_eq!(target, "/ja/members");
        assert_eq!(sync.reconcile(&at(&target)).redirect, None);
    }

    #[test]
    fn test_select_persists_and_returns_target() {
        let sync = LocaleSync::new(MemoryStore::new());
        let (target, saved) = sync.select(&at("/en/members"), Locale::Ja);
        assert!(saved.is_ok());
        assert_eq!(target, "/ja/members");
        assert_eq!(sync.preferred(), Locale::Ja);
        assert_eq!(sync.reconcile(&at(&target)).redirect, None);
    }

    #[test]
    fn test_select_on_root_path() {
        let sync = LocaleSync::new(MemoryStore::new());
        let (target, _) = sync.select(&at("/"), Locale::Ja);
        assert_eq!(target, "/ja");
    }

    #[test]
    fn test_configured_fallback() {
        let sync = LocaleSync::new(MemoryStore::new()).with_fallback(Locale::Ja);
        assert_eq!(sync.preferred(), Locale::Ja);
        assert_eq!(
            sync.reconcile(&at("/en/members")).redirect.as_deref(),
            Some("/ja/members")
        );

        let stored = LocaleSync::new(MemoryStore::with_locale(Locale::En)).with_fallback(Locale::Ja);
        assert_eq!(stored.preferred(), Locale::En);
    }

    #[test]
    fn test_unsupported_stored_value_uses_fallback() {
        let store = MemoryStore::new();
        store.set(PREFERRED_LANGUAGE_KEY, "klingon").unwrap();
        let sync = LocaleSync::new(&store);
        assert_eq!(sync.preferred(), Locale::En);
        assert_eq!(sync.with_fallback(Locale::Ja).preferred(), Locale::Ja);
    }

    #[test]
    fn test_custom_storage_key() {
        let store = MemoryStore::new();
        let sync = LocaleSync::with_key(&store, "lang");
        sync.select(&at("/en"), Locale::Ja).1.unwrap();
        assert_eq!(store.get("lang").as_deref(), Some("ja"));
        assert_eq!(store.get(PREFERRED_LANGUAGE_KEY), None);
    }
}
