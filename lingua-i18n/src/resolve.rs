//! Locale resolution logic.

use crate::Locale;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// `zh` at the start, followed by the end of input or an ASCII non-word
/// character. Equivalent to `^zh\b` with ASCII word characters; Rust's `\b`
/// is Unicode-aware, so the boundary is spelled out.
static CHINESE_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^zh(?:[^0-9A-Za-z_]|$)").expect("static regex is valid")
});

/// Primary and fallback locale selected for a language preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalePair {
    /// Locale the runtime starts in
    pub primary: Locale,
    /// Locale consulted when a key is missing from the primary bundle
    pub fallback: Locale,
}

impl LocalePair {
    fn new(primary: Locale) -> Self {
        Self {
            primary,
            fallback: primary.counterpart(),
        }
    }
}

/// Check whether a language preference names Chinese.
///
/// Case-sensitive, and `zh` must end at a word boundary: `"zh-CN"` matches,
/// `"zhuang"`, `"zh_CN"` and `"ZH"` do not.
pub fn is_chinese(language: &str) -> bool {
    CHINESE_PREFIX.is_match(language)
}

/// Resolve the primary and fallback locale from a language preference
/// string such as `"zh-CN"` or `"en-US"`.
///
/// Total over all inputs: anything that does not name Chinese selects
/// English, with Chinese as the fallback.
///
/// # Example
///
/// ```
/// use lingua_i18n::{resolve, Locale};
///
/// let pair = resolve("zh-CN");
/// assert_eq!((pair.primary, pair.fallback), (Locale::Zh, Locale::En));
///
/// let pair = resolve("fr");
/// assert_eq!((pair.primary, pair.fallback), (Locale::En, Locale::Zh));
/// ```
pub fn resolve(language: &str) -> LocalePair {
    let pair = if is_chinese(language) {
        LocalePair::new(Locale::Zh)
    } else {
        LocalePair::new(Locale::En)
    };
    lingua_log::debug!(
        "resolved language {:?} to {} (fallback {})",
        language,
        pair.primary,
        pair.fallback
    );
    pair
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_chinese_tags_select_chinese() {
        for tag in ["zh", "zh-CN", "zh-TW", "zh-Hans-CN", "zh.UTF-8", "zh CN"] {
            assert_eq!(resolve(tag), LocalePair::new(Locale::Zh), "{tag}");
        }
    }

    #[test]
    fn test_other_tags_select_english() {
        for tag in ["en-US", "en", "fr", "ja-JP", "", "-zh", " zh-CN"] {
            assert_eq!(resolve(tag), LocalePair::new(Locale::En), "{tag}");
        }
    }

    #[test]
    fn test_boundary_is_not_a_prefix_check() {
        assert!(!is_chinese("zhuang"));
        assert!(!is_chinese("zho"));
        assert!(!is_chinese("zh_CN"));
        assert!(!is_chinese("zh1"));
    }

    #[test]
    fn test_case_sensitive() {
        assert!(!is_chinese("ZH-CN"));
        assert!(!is_chinese("Zh"));
    }

    #[test]
    fn test_non_ascii_follower_is_a_boundary() {
        assert!(is_chinese("zhé"));
        assert!(is_chinese("zh中"));
    }

    #[test]
    fn test_fallback_is_the_other_locale() {
        let pair = resolve("zh-CN");
        assert_eq!(pair.primary, Locale::Zh);
        assert_eq!(pair.fallback, Locale::En);

        let pair = resolve("en-US");
        assert_eq!(pair.primary, Locale::En);
        assert_eq!(pair.fallback, Locale::Zh);
    }

    proptest! {
        #[test]
        fn prop_primary_and_fallback_differ(language in ".*") {
            let pair = resolve(&language);
            prop_assert_ne!(pair.primary, pair.fallback);
        }

        #[test]
        fn prop_resolution_is_idempotent(language in ".*") {
            prop_assert_eq!(resolve(&language), resolve(&language));
        }

        #[test]
        fn prop_zh_with_region_is_chinese(region in "[A-Za-z]{2}", sep in "[-. @]") {
            let tag = format!("zh{sep}{region}");
            prop_assert_eq!(resolve(&tag).primary, Locale::Zh);
        }

        #[test]
        fn prop_zh_followed_by_word_char_is_english(rest in "[0-9A-Za-z_][0-9A-Za-z_-]*") {
            let tag = format!("zh{rest}");
            prop_assert_eq!(resolve(&tag).primary, Locale::En);
        }

        #[test]
        fn prop_without_zh_prefix_is_english(language in "[^z].*") {
            prop_assert_eq!(resolve(&language).primary, Locale::En);
        }
    }
}
