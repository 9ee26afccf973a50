//! Error types for wayfinder-core
//!
//! The navbar itself has no user-visible error states; these errors surface at the
//! edges (parsing codes, touching storage, loading config) and are degraded to
//! defaults by the callers.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for wayfinder operations
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================
    // Locale Errors
    // ===================
    #[error("Unsupported locale: {code:?} (expected one of: en, ja)")]
    UnsupportedLocale { code: String },

    // ===================
    // Storage Errors
    // ===================
    #[error("Preference storage unavailable: {message}")]
    StorageUnavailable { message: String },

    #[error("Failed to write preference {key}: {message}")]
    Storage { key: String, message: String },

    // ===================
    // Config Errors
    // ===================
    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config in {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        message: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    // ===================
    // Catalog Errors
    // ===================
    #[error("Invalid message catalog for {locale}: {message}")]
    Catalog { locale: String, message: String },
}
