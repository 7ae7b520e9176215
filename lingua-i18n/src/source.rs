//! Language Preference Sources
//!
//! Where the ambient language preference comes from. A source is read once
//! at startup; its value goes to [`resolve`](crate::resolve) untouched apart
//! from POSIX-to-BCP 47 normalization for environment variables.

/// Something that can report the user's preferred language.
pub trait LanguageSource {
    /// The preference as a language tag (e.g. `"zh-CN"`), if known.
    fn language(&self) -> Option<String>;
}

impl<S: LanguageSource + ?Sized> LanguageSource for Box<S> {
    fn language(&self) -> Option<String> {
        (**self).language()
    }
}

/// A fixed preference, used for explicit overrides and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedLanguage(pub String);

impl FixedLanguage {
    pub fn new(language: impl Into<String>) -> Self {
        Self(language.into())
    }
}

impl LanguageSource for FixedLanguage {
    fn language(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// The operating system locale, or `navigator.language` on wasm.
#[cfg(feature = "system-locale")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLanguage;

#[cfg(feature = "system-locale")]
impl LanguageSource for SystemLanguage {
    fn language(&self) -> Option<String> {
        sys_locale::get_locale().filter(|tag| !tag.is_empty())
    }
}

/// POSIX locale environment variables.
///
/// Checks `LC_ALL`, `LC_MESSAGES` and `LANG` in that order and uses the
/// first one that names a real locale. `zh_CN.UTF-8` is reported as
/// `zh-CN`; `C` and `POSIX` count as unset.
#[derive(Debug, Clone)]
pub struct EnvLanguage {
    keys: Vec<String>,
    lookup: fn(&str) -> Option<String>,
}

impl EnvLanguage {
    /// Variables consulted by [`EnvLanguage::new`].
    pub const DEFAULT_KEYS: [&'static str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

    pub fn new() -> Self {
        Self::with_keys(Self::DEFAULT_KEYS)
    }

    /// Consult a custom list of variables, in order.
    pub fn with_keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            lookup: |key| std::env::var(key).ok(),
        }
    }

    /// Replace the variable lookup. The process environment is shared and
    /// mutating it is unsafe, so tests go through this.
    pub fn with_lookup(mut self, lookup: fn(&str) -> Option<String>) -> Self {
        self.lookup = lookup;
        self
    }
}

impl Default for EnvLanguage {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageSource for EnvLanguage {
    fn language(&self) -> Option<String> {
        self.keys
            .iter()
            .filter_map(|key| (self.lookup)(key))
            .find_map(|value| normalize_posix_locale(&value))
    }
}

/// Convert a POSIX locale name (`language[_territory][.codeset][@modifier]`)
/// into a BCP 47 style tag.
///
/// ```
/// use lingua_i18n::normalize_posix_locale;
///
/// assert_eq!(normalize_posix_locale("zh_CN.UTF-8").as_deref(), Some("zh-CN"));
/// assert_eq!(normalize_posix_locale("en_US@euro").as_deref(), Some("en-US"));
/// assert_eq!(normalize_posix_locale("C"), None);
/// ```
pub fn normalize_posix_locale(value: &str) -> Option<String> {
    let name = value
        .trim()
        .split(['.', '@'])
        .next()
        .unwrap_or_default();

    if name.is_empty() || name == "C" || name == "POSIX" {
        return None;
    }

    Some(name.replace('_', "-"))
}

/// Tries each source in order and returns the first answer.
#[derive(Default)]
pub struct SourceChain {
    sources: Vec<Box<dyn LanguageSource + Send + Sync>>,
}

impl SourceChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a source; earlier sources take priority.
    pub fn with(mut self, source: impl LanguageSource + Send + Sync + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl std::fmt::Debug for SourceChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceChain")
            .field("sources", &self.sources.len())
            .finish()
    }
}

impl LanguageSource for SourceChain {
    fn language(&self) -> Option<String> {
        self.sources.iter().find_map(|source| source.language())
    }
}

/// Environment variables first, then the system locale.
pub fn default_sources() -> SourceChain {
    let chain = SourceChain::new().with(EnvLanguage::new());
    #[cfg(feature = "system-locale")]
    let chain = chain.with(SystemLanguage);
    chain
}

/// Read the preference from `source`, or an empty string if it has none.
///
/// An empty preference resolves to English.
pub fn detect_language<S: LanguageSource + ?Sized>(source: &S) -> String {
    match source.language() {
        Some(language) => {
            lingua_log::debug!("detected language preference {:?}", language);
            language
        }
        None => {
            lingua_log::debug!("no language preference reported");
            String::new()
        }
    }
}
