//! `window.localStorage` as a preference store

use wayfinder_core::{CoreError, PreferenceStore, SessionStore};

/// Preference store used by the app: `localStorage`, with the session copy keeping
/// selections alive where the browser refuses storage
pub type BrowserPreferences = SessionStore<LocalStorage>;

pub fn browser_preferences() -> BrowserPreferences {
    SessionStore::new(LocalStorage)
}

/// Origin-scoped browser storage
///
/// Storage can be missing (server side) or refused (private browsing, disabled
/// cookies). Reads then return `None` and writes fail with a storage error.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, CoreError> {
        let window = web_sys::window().ok_or_else(|| CoreError::StorageUnavailable {
            message: "no window".to_string(),
        })?;
        window
            .local_storage()
            .map_err(|e| CoreError::StorageUnavailable {
                message: format!("{:?}", e),
            })?
            .ok_or_else(|| CoreError::StorageUnavailable {
                message: "localStorage is disabled".to_string(),
            })
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        match Self::storage() {
            Ok(storage) => storage.get_item(key).ok().flatten(),
            Err(e) => {
                leptos::logging::warn!("{}", e);
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| CoreError::Storage {
                key: key.to_string(),
                message: format!("{:?}", e),
            })
    }
}
