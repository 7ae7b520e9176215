//! Built-in Runtime
//!
//! A small translator that consumes a [`LocaleConfig`] directly, for Rust
//! applications that have no external i18n runtime to hand it to.

use crate::{I18nRuntime, Locale, LocaleConfig, Messages, Result};
use parking_lot::RwLock;
use std::sync::Arc;

struct State {
    locale: Locale,
    fallback_locale: Locale,
    messages: Messages,
}

/// Translation lookup with fallback.
///
/// Thread-safe; clones share the same state, so switching the locale on one
/// clone is seen by all of them.
#[derive(Clone)]
pub struct Translator {
    state: Arc<RwLock<State>>,
}

impl Translator {
    /// Create a translator, rejecting configurations without bundles for
    /// the active or fallback locale.
    pub fn new(config: LocaleConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            state: Arc::new(RwLock::new(State {
                locale: config.locale,
                fallback_locale: config.fallback_locale,
                messages: config.messages,
            })),
        })
    }

    /// Get the active locale.
    pub fn locale(&self) -> Locale {
        self.state.read().locale
    }

    /// Get the fallback locale.
    pub fn fallback_locale(&self) -> Locale {
        self.state.read().fallback_locale
    }

    /// Switch the active locale. The fallback locale is left alone.
    pub fn set_locale(&self, locale: Locale) {
        let mut state = self.state.write();
        if state.locale != locale {
            lingua_log::info!("switching locale from {} to {}", state.locale, locale);
            state.locale = locale;
        }
    }

    /// Locales that have a bundle.
    pub fn available_locales(&self) -> Vec<Locale> {
        self.state.read().messages.locales().collect()
    }

    /// Translate a message key.
    ///
    /// Looks up the active locale, then the fallback locale. A key found in
    /// neither is returned as-is.
    pub fn t(&self, key: &str) -> String {
        let state = self.state.read();

        for locale in [state.locale, state.fallback_locale] {
            if let Some(msg) = state.messages.get_bundle(locale).and_then(|b| b.get(key)) {
                if locale != state.locale {
                    lingua_log::debug!("key {:?} served from fallback locale {}", key, locale);
                }
                return msg.to_string();
            }
        }

        lingua_log::warn!("missing translation for key {:?} in {}", key, state.locale);
        key.to_string()
    }

    /// Translate with arguments.
    ///
    /// Replaces `{name}` placeholders with provided values.
    pub fn t_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut result = self.t(key);

        for (name, value) in args {
            let placeholder = format!("{{{}}}", name);
            result = result.replace(&placeholder, value);
        }

        result
    }

    /// Check if a message exists in the active locale, without fallback.
    pub fn te(&self, key: &str) -> bool {
        let state = self.state.read();
        state
            .messages
            .get_bundle(state.locale)
            .is_some_and(|b| b.has(key))
    }
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("Translator")
            .field("locale", &state.locale)
            .field("fallback_locale", &state.fallback_locale)
            .finish_non_exhaustive()
    }
}

/// [`I18nRuntime`] that produces a [`Translator`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TranslatorRuntime;

impl I18nRuntime for TranslatorRuntime {
    type Instance = Translator;

    fn create(&self, config: LocaleConfig) -> Result<Translator> {
        Translator::new(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{I18nError, MessageBundle, resolve};

    fn create_test_translator(language: &str) -> Translator {
        let mut en = MessageBundle::new();
        en.add("hello", "Hello!");
        en.add("greeting", "Hello, {name}!");
        en.add("only.en", "English only");

        let mut zh = MessageBundle::new();
        zh.add("hello", "你好！");
        zh.add("greeting", "你好，{name}！");
        zh.add("only.zh", "仅中文");

        let mut messages = Messages::new();
        messages.add_bundle(Locale::En, en);
        messages.add_bundle(Locale::Zh, zh);

        Translator::new(LocaleConfig::from_pair(resolve(language), messages)).unwrap()
    }

    #[test]
    fn test_simple_translation() {
        assert_eq!(create_test_translator("en-US").t("hello"), "Hello!");
        assert_eq!(create_test_translator("zh-CN").t("hello"), "你好！");
    }

    #[test]
    fn test_translation_with_args() {
        let i18n = create_test_translator("zh-CN");
        assert_eq!(i18n.t_args("greeting", &[("name", "Alice")]), "你好，Alice！");
    }

    #[test]
    fn test_fallback_locale_lookup() {
        let i18n = create_test_translator("zh-CN");
        assert_eq!(i18n.t("only.en"), "English only");

        let i18n = create_test_translator("en-US");
        assert_eq!(i18n.t("only.zh"), "仅中文");
    }

    #[test]
    fn test_missing_key() {
        let i18n = create_test_translator("en");
        assert_eq!(i18n.t("unknown.key"), "unknown.key");
    }

    #[test]
    fn test_te_ignores_fallback() {
        let i18n = create_test_translator("zh-CN");
        assert!(i18n.te("only.zh"));
        assert!(!i18n.te("only.en"));
    }

    #[test]
    fn test_set_locale_is_shared_between_clones() {
        let i18n = create_test_translator("en-US");
        let other = i18n.clone();

        other.set_locale(Locale::Zh);

        assert_eq!(i18n.locale(), Locale::Zh);
        assert_eq!(i18n.fallback_locale(), Locale::Zh);
        assert_eq!(i18n.t("hello"), "你好！");
    }

    #[test]
    fn test_available_locales() {
        let i18n = create_test_translator("");
        assert_eq!(i18n.available_locales(), vec![Locale::En, Locale::Zh]);
    }

    #[test]
    fn test_rejects_config_without_bundles() {
        let config = LocaleConfig::from_pair(resolve("zh"), Messages::new());
        let err = Translator::new(config).unwrap_err();
        assert!(matches!(err, I18nError::MissingBundle(Locale::Zh)));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_concurrent_lookups() {
        let i18n = create_test_translator("zh-CN");

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let i18n = i18n.clone();
                tokio::spawn(async move { i18n.t("hello") })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.await.unwrap(), "你好！");
        }
    }
}
