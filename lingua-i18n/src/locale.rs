//! Supported Locales
//!
//! The set of locales is closed: every bundle, configuration and runtime
//! call speaks in terms of [`Locale`], never free-form strings.

use crate::{I18nError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported locale.
///
/// # Examples
///
/// ```
/// use lingua_i18n::Locale;
///
/// let zh: Locale = "zh".parse().unwrap();
/// assert_eq!(zh, Locale::Zh);
/// assert_eq!(Locale::En.code(), "en");
/// assert!("fr".parse::<Locale>().is_err());
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English
    #[default]
    En,
    /// Chinese
    Zh,
}

impl Locale {
    /// Every supported locale, in declaration order.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Zh];

    /// Locale code used as the bundle key (`"en"`, `"zh"`).
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }

    /// Human readable name in the locale's own language.
    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Zh => "中文",
        }
    }

    /// The other member of the supported pair.
    pub fn counterpart(&self) -> Locale {
        match self {
            Locale::En => Locale::Zh,
            Locale::Zh => Locale::En,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self> {
        let code = s.trim();
        Locale::ALL
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| I18nError::UnsupportedLocale(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codes() {
        assert_eq!(Locale::from_str("en").unwrap(), Locale::En);
        assert_eq!(Locale::from_str("ZH").unwrap(), Locale::Zh);
        assert_eq!(Locale::from_str(" zh ").unwrap(), Locale::Zh);
    }

    #[test]
    fn test_parse_rejects_tags_and_unknown_codes() {
        assert!(matches!(
            Locale::from_str("zh-CN"),
            Err(I18nError::UnsupportedLocale(_))
        ));
        assert!(Locale::from_str("fr").is_err());
        assert!(Locale::from_str("").is_err());
    }

    #[test]
    fn test_display_matches_code() {
        for locale in Locale::ALL {
            assert_eq!(locale.to_string(), locale.code());
        }
    }

    #[test]
    fn test_counterpart() {
        assert_eq!(Locale::En.counterpart(), Locale::Zh);
        assert_eq!(Locale::Zh.counterpart(), Locale::En);
    }

    #[test]
    fn test_serde_uses_code() {
        assert_eq!(serde_json::to_string(&Locale::Zh).unwrap(), "\"zh\"");
        let locale: Locale = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(locale, Locale::En);
    }
}
