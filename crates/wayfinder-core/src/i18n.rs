//! Message catalogs
//!
//! One Fluent resource per locale, embedded at compile time. Lookups never fail:
//! a missing message falls back to the default locale and then to the message id.

use crate::error::CoreError;
use crate::locale::Locale;
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::FluentResource;
use std::collections::HashMap;
use std::fmt;

const EN_FTL: &str = include_str!("../locales/en.ftl");
const JA_FTL: &str = include_str!("../locales/ja.ftl");

fn embedded_source(locale: Locale) -> &'static str {
    match locale {
        Locale::En => EN_FTL,
        Locale::Ja => JA_FTL,
    }
}

/// Translation lookup for all supported locales
pub struct Translator {
    bundles: HashMap<Locale, FluentBundle<FluentResource>>,
}

impl Translator {
    /// Build from the embedded catalogs
    pub fn new() -> Result<Self, CoreError> {
        let mut translator = Self::empty();
        for locale in Locale::ALL {
            translator.add_catalog(locale, embedded_source(locale))?;
        }
        Ok(translator)
    }

    /// Translator with no catalogs; every lookup yields the message id
    pub fn empty() -> Self {
        Self {
            bundles: HashMap::new(),
        }
    }

    /// Parse `source` and add it to the bundle for `locale`
    pub fn add_catalog(&mut self, locale: Locale, source: &str) -> Result<(), CoreError> {
        let resource = FluentResource::try_new(source.to_string()).map_err(|(_, errors)| {
            CoreError::Catalog {
                locale: locale.to_string(),
                message: format!("{} syntax error(s), first: {:?}", errors.len(), errors.first()),
            }
        })?;

        let bundle = self.bundles.entry(locale).or_insert_with(|| {
            let mut bundle = FluentBundle::new_concurrent(vec![locale.langid()]);
            bundle.set_use_isolating(false);
            bundle
        });

        bundle.add_resource(resource).map_err(|errors| CoreError::Catalog {
            locale: locale.to_string(),
            message: format!("{} duplicate message(s)", errors.len()),
        })
    }

    /// Whether `locale` has a message `key`
    pub fn has_message(&self, locale: Locale, key: &str) -> bool {
        self.bundles
            .get(&locale)
            .is_some_and(|bundle| bundle.has_message(key))
    }

    /// Localized string for `key`
    pub fn tr(&self, locale: Locale, key: &str) -> String {
        if let Some(value) = self.lookup(locale, key) {
            return value;
        }
        if locale != Locale::DEFAULT {
            if let Some(value) = self.lookup(Locale::DEFAULT, key) {
                tracing::debug!(key, locale = locale.code(), "Message missing, using default locale");
                return value;
            }
        }
        tracing::warn!(key, locale = locale.code(), "Message missing from all catalogs");
        key.to_string()
    }

    fn lookup(&self, locale: Locale, key: &str) -> Option<String> {
        let bundle = self.bundles.get(&locale)?;
        let pattern = bundle.get_message(key)?.value()?;
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, None, &mut errors);
        if errors.is_empty() {
            Some(value.into_owned())
        } else {
            tracing::warn!(key, ?errors, "Failed to format message");
            None
        }
    }
}

impl fmt::Debug for Translator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translator")
            .field("locales", &self.bundles.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::nav_items;

    #[test]
    fn test_embedded_catalogs_parse() {
        assert!(Translator::new().is_ok());
    }

    #[test]
    fn test_lookup_per_locale() {
        let t = Translator::new().unwrap();
        assert_eq!(t.tr(Locale::En, "navbar-about"), "About");
        assert_eq!(t.tr(Locale::Ja, "navbar-members"), "メンバー");
    }

    #[test]
    fn test_every_nav_key_is_translated() {
        let t = Translator::new().unwrap();
        for locale in Locale::ALL {
            for item in nav_items() {
                assert!(t.has_message(locale, item.key), "{} missing {}", locale, item.key);
                for child in item.children {
                    assert!(t.has_message(locale, child.key));
                }
            }
        }
    }

    #[test]
    fn test_missing_key_falls_back_to_default_locale() {
        let mut t = Translator::empty();
        t.add_catalog(Locale::En, "only-en = Only English").unwrap();
        t.add_catalog(Locale::Ja, "other = ほか").unwrap();
        assert_eq!(t.tr(Locale::Ja, "only-en"), "Only English");
    }

    #[test]
    fn test_missing_everywhere_yields_key() {
        let t = Translator::empty();
        assert_eq!(t.tr(Locale::Ja, "navbar-about"), "navbar-about");
    }

    #[test]
    fn test_invalid_catalog_is_rejected() {
        let mut t = Translator::empty();
        let err = t.add_catalog(Locale::En, "= no id here").unwrap_err();
        assert!(matches!(err, CoreError::Catalog { .. }));
    }

    #[test]
    fn test_duplicate_message_is_rejected() {
        let mut t = Translator::empty();
        t.add_catalog(Locale::En, "a = one").unwrap();
        assert!(t.add_catalog(Locale::En, "a = two").is_err());
    }
}
