// Settings loading from environment variables and TOML files

use crate::source::{FixedLanguage, SourceChain, default_sources, detect_language};
use crate::{LocaleConfig, Messages, Result, resolve};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Prefix for environment variables read by [`I18nSettings::from_env`].
pub const ENV_PREFIX: &str = "LINGUA";

/// Startup settings for locale selection.
///
/// ```toml
/// language = "zh-CN"
/// messages_dir = "locales"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct I18nSettings {
    /// Language preference that replaces detection when set
    pub language: Option<String>,
    /// Directory with `en.json` / `zh.json` overriding built-in messages
    pub messages_dir: Option<PathBuf>,
}

impl I18nSettings {
    /// Load from `LINGUA_LANGUAGE` and `LINGUA_MESSAGES_DIR`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using a custom variable lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| {
            lookup(&format!("{}_{}", ENV_PREFIX, name)).filter(|v| !v.trim().is_empty())
        };

        Self {
            language: var("LANGUAGE"),
            messages_dir: var("MESSAGES_DIR").map(PathBuf::from),
        }
    }

    /// Parse settings from TOML.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load settings from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Overlay `other` on top of `self`; fields set in `other` win.
    pub fn merge(self, other: I18nSettings) -> Self {
        Self {
            language: other.language.or(self.language),
            messages_dir: other.messages_dir.or(self.messages_dir),
        }
    }

    /// Where the language preference comes from: the configured value if
    /// there is one, otherwise the environment and then the system.
    pub fn source(&self) -> SourceChain {
        match &self.language {
            Some(language) => SourceChain::new().with(FixedLanguage::new(language.clone())),
            None => default_sources(),
        }
    }

    /// Detect, resolve and assemble the locale configuration.
    pub fn build_config(&self) -> Result<LocaleConfig> {
        let language = detect_language(&self.source());

        let mut messages = Messages::builtin();
        if let Some(dir) = &self.messages_dir {
            messages.load_from_dir(dir)?;
        }

        let config = LocaleConfig::from_pair(resolve(&language), messages);
        config.validate()?;
        Ok(config)
    }
}
