//! Message Bundles
//!
//! Per-locale translation tables. Bundles are written as (possibly nested)
//! JSON objects and stored flat, with nested keys joined by dots:
//! `{"nav": {"home": "Home"}}` is looked up as `nav.home`.

use crate::{I18nError, Locale, Result};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

const BUILTIN_EN: &str = include_str!("../locales/en.json");
const BUILTIN_ZH: &str = include_str!("../locales/zh.json");

/// A bundle of messages for a single locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageBundle {
    /// Messages keyed by dotted message ID
    messages: HashMap<String, String>,
}

impl MessageBundle {
    /// Create a new empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a JSON object. Nested objects are flattened into dotted
    /// keys; anything other than strings and objects is rejected.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        let Value::Object(root) = value else {
            return Err(I18nError::ParseError(
                "message bundle must be a JSON object".to_string(),
            ));
        };

        let mut bundle = Self::new();
        bundle.flatten_into(None, root)?;
        Ok(bundle)
    }

    fn flatten_into(&mut self, prefix: Option<&str>, object: Map<String, Value>) -> Result<()> {
        for (key, value) in object {
            let full_key = match prefix {
                Some(prefix) => format!("{}.{}", prefix, key),
                None => key,
            };

            match value {
                Value::String(s) => {
                    self.messages.insert(full_key, s);
                }
                Value::Object(nested) => self.flatten_into(Some(&full_key), nested)?,
                other => {
                    return Err(I18nError::ParseError(format!(
                        "message `{}` must be a string or object, found {}",
                        full_key, other
                    )));
                }
            }
        }
        Ok(())
    }

    /// Add a message.
    pub fn add(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.messages.insert(key.into(), message.into());
    }

    /// Get a message.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(|s| s.as_str())
    }

    /// Check if bundle has a message.
    pub fn has(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    /// Get all message keys.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.messages.keys()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Copy every message from `other` into this bundle, replacing
    /// messages with the same key.
    pub fn merge(&mut self, other: MessageBundle) {
        self.messages.extend(other.messages);
    }

    /// Rebuild the nested JSON shape the bundle was written in.
    ///
    /// A dotted key whose parent is itself a message cannot be nested and
    /// is kept verbatim at the top level.
    pub fn to_nested(&self) -> Value {
        let mut root = Map::new();
        let sorted: BTreeMap<&String, &String> = self.messages.iter().collect();

        for (key, message) in sorted {
            if !insert_nested(&mut root, key, message) {
                root.insert(key.clone(), Value::String(message.clone()));
            }
        }

        Value::Object(root)
    }
}

fn insert_nested(root: &mut Map<String, Value>, key: &str, message: &str) -> bool {
    let mut segments: Vec<&str> = key.split('.').collect();
    let Some(leaf) = segments.pop() else {
        return false;
    };

    let mut node = root;
    for segment in segments {
        let entry = node
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        match entry {
            Value::Object(child) => node = child,
            _ => return false,
        }
    }

    if matches!(node.get(leaf), Some(Value::Object(_))) {
        return false;
    }
    node.insert(leaf.to_string(), Value::String(message.to_string()));
    true
}

impl Serialize for MessageBundle {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_nested().serialize(serializer)
    }
}

/// Collection of message bundles keyed by locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Messages {
    bundles: BTreeMap<Locale, MessageBundle>,
}

impl Messages {
    /// Create a new messages collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// The English and Chinese bundles shipped with the crate.
    pub fn builtin() -> Self {
        let mut messages = Self::new();
        for (locale, source) in [(Locale::En, BUILTIN_EN), (Locale::Zh, BUILTIN_ZH)] {
            // The embedded files are checked by the tests below.
            let bundle = MessageBundle::from_json(source).unwrap_or_default();
            messages.add_bundle(locale, bundle);
        }
        messages
    }

    /// Add a bundle for a locale, replacing any existing one.
    pub fn add_bundle(&mut self, locale: Locale, bundle: MessageBundle) {
        self.bundles.insert(locale, bundle);
    }

    /// Merge a bundle into the existing one for `locale`.
    pub fn merge_bundle(&mut self, locale: Locale, bundle: MessageBundle) {
        self.bundles.entry(locale).or_default().merge(bundle);
    }

    /// Get a bundle for a locale.
    pub fn get_bundle(&self, locale: Locale) -> Option<&MessageBundle> {
        self.bundles.get(&locale)
    }

    /// True when a non-empty bundle exists for `locale`.
    pub fn contains(&self, locale: Locale) -> bool {
        self.bundles.get(&locale).is_some_and(|b| !b.is_empty())
    }

    /// Locales that have a bundle, in `Locale` order.
    pub fn locales(&self) -> impl Iterator<Item = Locale> + '_ {
        self.bundles.keys().copied()
    }

    /// Overlay bundles from a directory on top of the current ones.
    ///
    /// Expected structure:
    /// - `locales/en.json`
    /// - `locales/zh.json`
    ///
    /// Files whose stem is not a supported locale are skipped. Messages in a
    /// file replace messages with the same key; other keys are kept.
    pub fn load_from_dir(&mut self, dir: impl AsRef<Path>) -> Result<()> {
        let dir = dir.as_ref();

        if !dir.is_dir() {
            return Err(I18nError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Directory not found: {:?}", dir),
            )));
        }

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();

            if path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }

            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| I18nError::ParseError(format!("Invalid filename: {:?}", path)))?;

            let Ok(locale) = stem.parse::<Locale>() else {
                lingua_log::warn!("skipping bundle for unsupported locale: {:?}", path);
                continue;
            };

            let content = fs::read_to_string(&path)?;
            let bundle = MessageBundle::from_json(&content)?;
            lingua_log::debug!("loaded {} messages for {} from {:?}", bundle.len(), locale, path);
            self.merge_bundle(locale, bundle);
        }

        Ok(())
    }
}

impl Serialize for Messages {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.bundles.len()))?;
        for (locale, bundle) in &self.bundles {
            map.serialize_entry(locale.code(), bundle)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_flattens_nested_objects() {
        let json = r#"{
            "hello": "Hello!",
            "nav": {
                "home": "Home",
                "menu": { "open": "Open menu" }
            }
        }"#;

        let bundle = MessageBundle::from_json(json).unwrap();

        assert_eq!(bundle.get("hello"), Some("Hello!"));
        assert_eq!(bundle.get("nav.home"), Some("Home"));
        assert_eq!(bundle.get("nav.menu.open"), Some("Open menu"));
        assert_eq!(bundle.len(), 3);
    }

    #[test]
    fn test_from_json_rejects_non_string_values() {
        let err = MessageBundle::from_json(r#"{"count": 3}"#).unwrap_err();
        assert!(matches!(err, I18nError::ParseError(_)));

        let err = MessageBundle::from_json(r#"["not", "an", "object"]"#).unwrap_err();
        assert!(matches!(err, I18nError::ParseError(_)));

        let err = MessageBundle::from_json("{").unwrap_err();
        assert!(matches!(err, I18nError::JsonError(_)));
    }

    #[test]
    fn test_to_nested_restores_shape() {
        let mut bundle = MessageBundle::new();
        bundle.add("nav.home", "Home");
        bundle.add("nav.about", "About");
        bundle.add("title", "Dashboard");

        assert_eq!(
            bundle.to_nested(),
            serde_json::json!({
                "nav": { "home": "Home", "about": "About" },
                "title": "Dashboard"
            })
        );
    }

    #[test]
    fn test_to_nested_keeps_conflicting_key_flat() {
        let mut bundle = MessageBundle::new();
        bundle.add("nav", "Navigation");
        bundle.add("nav.home", "Home");

        assert_eq!(
            bundle.to_nested(),
            serde_json::json!({ "nav": "Navigation", "nav.home": "Home" })
        );
    }

    #[test]
    fn test_merge_overrides_matching_keys() {
        let mut base = MessageBundle::new();
        base.add("save", "Save");
        base.add("cancel", "Cancel");

        let mut overlay = MessageBundle::new();
        overlay.add("save", "Save changes");

        base.merge(overlay);
        assert_eq!(base.get("save"), Some("Save changes"));
        assert_eq!(base.get("cancel"), Some("Cancel"));
    }

    #[test]
    fn test_builtin_bundles_are_complete() {
        let messages = Messages::builtin();
        assert!(messages.contains(Locale::En));
        assert!(messages.contains(Locale::Zh));

        let en = messages.get_bundle(Locale::En).unwrap();
        let zh = messages.get_bundle(Locale::Zh).unwrap();

        let mut en_keys: Vec<_> = en.keys().collect();
        let mut zh_keys: Vec<_> = zh.keys().collect();
        en_keys.sort();
        zh_keys.sort();
        assert_eq!(en_keys, zh_keys);
    }

    #[test]
    fn test_builtin_sources_parse() {
        assert!(MessageBundle::from_json(BUILTIN_EN).is_ok());
        assert!(MessageBundle::from_json(BUILTIN_ZH).is_ok());
    }

    #[test]
    fn test_load_from_dir_overlays_bundles() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("en.json"), r#"{"nav": {"home": "Start"}}"#).unwrap();
        fs::write(dir.path().join("fr.json"), r#"{"nav": {"home": "Accueil"}}"#).unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let mut messages = Messages::builtin();
        messages.load_from_dir(dir.path()).unwrap();

        let en = messages.get_bundle(Locale::En).unwrap();
        assert_eq!(en.get("nav.home"), Some("Start"));
        assert_eq!(en.get("nav.about"), Some("About"));
        assert_eq!(messages.locales().collect::<Vec<_>>(), vec![Locale::En, Locale::Zh]);
    }

    #[test]
    fn test_load_from_missing_dir() {
        let mut messages = Messages::new();
        let err = messages.load_from_dir("/definitely/not/here").unwrap_err();
        assert!(matches!(err, I18nError::IoError(_)));
    }

    #[test]
    fn test_messages_serialize_by_code() {
        let mut messages = Messages::new();
        let mut zh = MessageBundle::new();
        zh.add("nav.home", "首页");
        messages.add_bundle(Locale::Zh, zh);

        let value = serde_json::to_value(&messages).unwrap();
        assert_eq!(value, serde_json::json!({ "zh": { "nav": { "home": "首页" } } }));
    }
}
