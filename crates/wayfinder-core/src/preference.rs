//! Persisted language preference
//!
//! The site keeps exactly one value across sessions: the visitor's preferred
//! language, stored under [`PREFERRED_LANGUAGE_KEY`] in origin-scoped storage.

use crate::error::CoreError;
use crate::locale::Locale;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Storage key holding the preferred locale code
pub const PREFERRED_LANGUAGE_KEY: &str = "preferredLanguage";

/// Synchronous key-value storage, last write wins
///
/// Implemented over `window.localStorage` in the browser and by [`MemoryStore`]
/// everywhere else.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        (**self).set(key, value)
    }
}

/// In-process preference store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a preferred locale
    pub fn with_locale(locale: Locale) -> Self {
        let store = Self::new();
        store
            .entries
            .write()
            .insert(PREFERRED_LANGUAGE_KEY.to_string(), locale.code().to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store that remembers every write for the rest of the session
///
/// Writes land in an in-process [`MemoryStore`] before reaching `primary`, and reads
/// prefer that copy. A visitor whose browser refuses storage keeps their selection
/// until the page is reloaded; the primary's error is still returned from `set`.
#[derive(Debug, Default)]
pub struct SessionStore<S> {
    primary: S,
    session: MemoryStore,
}

impl<S: PreferenceStore> SessionStore<S> {
    pub fn new(primary: S) -> Self {
        Self {
            primary,
            session: MemoryStore::new(),
        }
    }
}

impl<S: PreferenceStore> PreferenceStore for SessionStore<S> {
    fn get(&self, key: &str) -> Option<String> {
        self.session.get(key).or_else(|| self.primary.get(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        self.session.set(key, value)?;
        self.primary.set(key, value)
    }
}

/// Persist `locale` under `key`
pub fn save_preferred_locale(
    store: &impl PreferenceStore,
    key: &str,
    locale: Locale,
) -> Result<(), CoreError> {
    store.set(key, locale.code())?;
    tracing::debug!(key, locale = locale.code(), "Saved preferred locale");
    Ok(())
}
