//! Translation context for the Leptos tree

use leptos::prelude::*;
use std::sync::Arc;
use wayfinder_core::{
    CoreError, Locale, LocaleSync, LocalizedLocation, Reconciled, SiteConfig, Translator,
};

use crate::storage::{browser_preferences, BrowserPreferences};

/// Active locale, the catalogs to render it with, and the persisted preference
#[derive(Clone, Copy)]
pub struct I18nContext {
    /// Locale the page is currently rendered in
    pub locale: RwSignal<Locale>,
    translator: StoredValue<Arc<Translator>>,
    config: StoredValue<SiteConfig>,
    sync: StoredValue<LocaleSync<BrowserPreferences>>,
}

impl I18nContext {
    pub fn new(config: SiteConfig) -> Self {
        let translator = Translator::new().unwrap_or_else(|e| {
            leptos::logging::error!("Failed to load message catalogs: {}", e);
            Translator::empty()
        });
        let sync = LocaleSync::with_key(browser_preferences(), config.storage_key.clone())
            .with_fallback(config.default_locale);
        Self {
            locale: RwSignal::new(config.default_locale),
            translator: StoredValue::new(Arc::new(translator)),
            config: StoredValue::new(config),
            sync: StoredValue::new(sync),
        }
    }

    /// Compare `location` with the stored preference, see [`LocaleSync::reconcile`]
    pub fn reconcile(&self, location: &LocalizedLocation) -> Reconciled {
        self.sync.with_value(|sync| sync.reconcile(location))
    }

    /// Persist an explicit selection, see [`LocaleSync::select`]
    pub fn select(
        &self,
        location: &LocalizedLocation,
        locale: Locale,
    ) -> (String, Result<(), CoreError>) {
        self.sync.with_value(|sync| sync.select(location, locale))
    }

    /// Localized string for `key` (tracks the locale signal)
    pub fn t(&self, key: &str) -> String {
        let locale = self.locale.get();
        self.translator.with_value(|t| t.tr(locale, key))
    }

    pub fn config(&self) -> SiteConfig {
        self.config.get_value()
    }
}

/// Provides [`I18nContext`] to its children
#[component]
pub fn I18nProvider(
    #[prop(optional)] config: Option<SiteConfig>,
    children: Children,
) -> impl IntoView {
    provide_context(I18nContext::new(config.unwrap_or_default()));

    children()
}

/// Hook to access the translation context
pub fn use_i18n() -> I18nContext {
    expect_context::<I18nContext>()
}
