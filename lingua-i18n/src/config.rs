//! Locale Configuration
//!
//! The record handed to an i18n runtime at startup: which locale to start
//! in, which one to fall back to, and the bundles for both.

use crate::{I18nError, Locale, LocalePair, Messages, Result, resolve};
use serde::Serialize;

/// Configuration consumed by an i18n runtime.
///
/// Serializes to the shape JavaScript-side runtimes expect:
///
/// ```json
/// { "locale": "zh", "fallbackLocale": "en", "messages": { ... }, "legacy": false }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleConfig {
    /// Initial active locale
    pub locale: Locale,
    /// Locale consulted when a key is missing from the active bundle
    pub fallback_locale: Locale,
    /// Bundles keyed by locale
    pub messages: Messages,
    /// Legacy dual-API mode of the runtime; always off
    legacy: bool,
}

impl LocaleConfig {
    /// Resolve `language` and pair the result with the built-in bundles.
    ///
    /// # Example
    ///
    /// ```
    /// use lingua_i18n::{Locale, LocaleConfig};
    ///
    /// let config = LocaleConfig::for_language("zh-CN");
    /// assert_eq!(config.locale, Locale::Zh);
    /// assert_eq!(config.fallback_locale, Locale::En);
    /// ```
    pub fn for_language(language: &str) -> Self {
        Self::from_pair(resolve(language), Messages::builtin())
    }

    /// Build a configuration from an already resolved pair.
    pub fn from_pair(pair: LocalePair, messages: Messages) -> Self {
        Self {
            locale: pair.primary,
            fallback_locale: pair.fallback,
            messages,
            legacy: false,
        }
    }

    /// Whether the runtime's legacy API mode is requested.
    pub fn legacy(&self) -> bool {
        self.legacy
    }

    /// The primary and fallback locale as a pair.
    pub fn pair(&self) -> LocalePair {
        LocalePair {
            primary: self.locale,
            fallback: self.fallback_locale,
        }
    }

    /// Check that both the active and the fallback locale have a bundle.
    pub fn validate(&self) -> Result<()> {
        for locale in [self.locale, self.fallback_locale] {
            if !self.messages.contains(locale) {
                return Err(I18nError::MissingBundle(locale));
            }
        }
        Ok(())
    }

    /// Serialize to JSON for runtimes outside Rust.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
