//! Supported site locales

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// Language the site is rendered in, and the first segment of every localized URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ja,
}

impl Locale {
    /// Locale used when nothing else is known
    pub const DEFAULT: Locale = Locale::En;

    /// All supported locales, in the order the language control lists them
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ja];

    /// URL prefix and storage value
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ja => "ja",
        }
    }

    /// Label shown in the language control
    pub fn label(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Ja => "Japanese",
        }
    }

    /// Language identifier used to key the Fluent bundles
    pub fn langid(&self) -> LanguageIdentifier {
        match self {
            Locale::En => unic_langid::langid!("en"),
            Locale::Ja => unic_langid::langid!("ja"),
        }
    }

    /// Parse an optional code; missing or unsupported codes yield `fallback`
    pub fn from_code_or(code: Option<&str>, fallback: Locale) -> Locale {
        match code {
            None => fallback,
            Some(code) => code.parse().unwrap_or_else(|e: CoreError| {
                tracing::warn!("{}; using {}", e, fallback);
                fallback
            }),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::ALL
            .into_iter()
            .find(|locale| locale.code() == s)
            .ok_or_else(|| CoreError::UnsupportedLocale {
                code: s.to_string(),
            })
    }
}
