//! Locale Selection for Lingua
//!
//! Picks the locale an application starts in from the user's language
//! preference, and pairs it with the message bundles an i18n runtime needs:
//!
//! - **Resolution**: `"zh-CN"` → Chinese with English fallback, anything
//!   else → English with Chinese fallback
//! - **Message bundles**: built-in English and Chinese bundles, optionally
//!   overridden from a directory of JSON files
//! - **Runtime seam**: hand the configuration to any [`I18nRuntime`], or use
//!   the built-in [`Translator`]
//!
//! # Quick Start
//!
//! ```rust
//! use lingua_i18n::{create_i18n, Locale, TranslatorRuntime};
//!
//! let i18n = create_i18n("zh-CN", &TranslatorRuntime)?;
//! assert_eq!(i18n.locale(), Locale::Zh);
//! assert_eq!(i18n.fallback_locale(), Locale::En);
//! assert_eq!(i18n.t_args("app.welcome", &[("name", "Ada")]), "欢迎，Ada！");
//! # Ok::<(), lingua_i18n::I18nError>(())
//! ```
//!
//! # Resolution Only
//!
//! ```rust
//! use lingua_i18n::{resolve, Locale};
//!
//! assert_eq!(resolve("zh-TW").primary, Locale::Zh);
//! assert_eq!(resolve("zhuang").primary, Locale::En);
//! ```

mod config;
mod error;
mod locale;
mod messages;
mod resolve;
mod runtime;
mod settings;
mod source;
mod translator;

pub use config::LocaleConfig;
pub use error::I18nError;
pub use locale::Locale;
pub use messages::{MessageBundle, Messages};
pub use resolve::{LocalePair, is_chinese, resolve};
pub use runtime::{I18nRuntime, create_i18n, create_i18n_from};
pub use settings::{ENV_PREFIX, I18nSettings};
#[cfg(feature = "system-locale")]
pub use source::SystemLanguage;
pub use source::{
    EnvLanguage, FixedLanguage, LanguageSource, SourceChain, default_sources, detect_language,
    normalize_posix_locale,
};
pub use translator::{Translator, TranslatorRuntime};

/// Result type for i18n operations
pub type Result<T> = std::result::Result<T, I18nError>;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        I18nError, I18nRuntime, I18nSettings, LanguageSource, Locale, LocaleConfig, LocalePair,
        Result, Translator, TranslatorRuntime, create_i18n, create_i18n_from, resolve,
    };
}
