//! Error types for i18n operations

use crate::Locale;
use thiserror::Error;

/// Errors that can occur while assembling a locale configuration.
///
/// Locale resolution itself never fails; these cover parsing locale codes,
/// loading bundles and reading settings.
#[derive(Debug, Error)]
pub enum I18nError {
    /// Locale code outside the supported set
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    /// Configuration is missing the bundle for a locale it references
    #[error("No message bundle for locale: {0}")]
    MissingBundle(Locale),

    /// Message file has an unexpected shape
    #[error("Failed to parse message file: {0}")]
    ParseError(String),

    /// Settings could not be read
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parse error
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl From<toml::de::Error> for I18nError {
    fn from(err: toml::de::Error) -> Self {
        I18nError::ConfigError(err.to_string())
    }
}
