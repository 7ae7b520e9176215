//! Runtime Seam
//!
//! The i18n runtime that consumes a [`LocaleConfig`] is a collaborator, not
//! part of the resolver. Anything that can be initialized from a
//! configuration implements [`I18nRuntime`]; [`create_i18n`] does the
//! resolve-then-initialize step once at startup.

use crate::source::{LanguageSource, detect_language};
use crate::{LocaleConfig, Result};

/// An i18n runtime that is initialized from a locale configuration.
pub trait I18nRuntime {
    /// The initialized runtime handed back to the application.
    type Instance;

    /// Initialize the runtime. Called once per configuration.
    fn create(&self, config: LocaleConfig) -> Result<Self::Instance>;
}

impl<F, T> I18nRuntime for F
where
    F: Fn(LocaleConfig) -> Result<T>,
{
    type Instance = T;

    fn create(&self, config: LocaleConfig) -> Result<T> {
        self(config)
    }
}

/// Resolve `language`, assemble the configuration with the built-in bundles
/// and initialize `runtime` with it.
///
/// # Example
///
/// ```
/// use lingua_i18n::{create_i18n, Locale, TranslatorRuntime};
///
/// let i18n = create_i18n("zh-CN", &TranslatorRuntime).unwrap();
/// assert_eq!(i18n.locale(), Locale::Zh);
/// assert_eq!(i18n.t("nav.home"), "首页");
/// ```
pub fn create_i18n<R: I18nRuntime>(language: &str, runtime: &R) -> Result<R::Instance> {
    let config = LocaleConfig::for_language(language);
    config.validate()?;
    lingua_log::info!(
        "initializing i18n runtime with locale {} (fallback {})",
        config.locale,
        config.fallback_locale
    );
    runtime.create(config)
}

/// Like [`create_i18n`], reading the preference from `source`.
pub fn create_i18n_from<S, R>(source: &S, runtime: &R) -> Result<R::Instance>
where
    S: LanguageSource + ?Sized,
    R: I18nRuntime,
{
    create_i18n(&detect_language(source), runtime)
}
