//! Translation bundles
//!
//! Bundles use the nested i18next JSON layout, so a key such as
//! `createUniverseV2.databaseSettings.pgCompatibility.label` is a path
//! through nested objects. Lookups never fail: a missing key renders as the
//! fully qualified key itself.

use std::path::Path;

use serde_json::Value;

use crate::error::{WizardError, WizardResult};
use crate::message::RichMessage;

/// Key namespace of the PostgreSQL compatibility field
pub const PG_COMPATIBILITY_NAMESPACE: &str = "createUniverseV2.databaseSettings.pgCompatibility";

/// Key namespace of the analyze dialog
pub const ANALYZE_DIALOG_NAMESPACE: &str = "createUniverseV2.databaseSettings.analyzeDialog";

/// Key namespace of the database settings step
pub const DATABASE_SETTINGS_NAMESPACE: &str = "createUniverseV2.databaseSettings";

/// English bundle shipped with the crate
const ENGLISH_BUNDLE: &str = include_str!("../locales/en.json");

// ============================================================================
// Translations
// ============================================================================

/// A loaded translation bundle
#[derive(Debug, Clone, PartialEq)]
pub struct Translations {
    root: Value,
}

impl Translations {
    /// Parse a bundle from JSON text
    pub fn from_json_str(json: &str) -> WizardResult<Self> {
        let root: Value = serde_json::from_str(json)?;
        if !root.is_object() {
            return Err(WizardError::invalid_bundle(
                "bundle root must be a JSON object",
            ));
        }
        Ok(Self { root })
    }

    /// Load a bundle from a file
    pub fn load(path: &Path) -> WizardResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| WizardError::FileRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_json_str(&json)
    }

    /// The bundled English strings
    pub fn english() -> Self {
        // The embedded bundle is checked by tests; fall back to empty if it
        // ever stops parsing so lookups still degrade to keys.
        Self::from_json_str(ENGLISH_BUNDLE).unwrap_or_else(|err| {
            tracing::error!(error = %err, "embedded English bundle is invalid");
            Self::empty()
        })
    }

    /// A bundle without any strings
    pub fn empty() -> Self {
        Self {
            root: Value::Object(Default::default()),
        }
    }

    /// Overlay another bundle on top of this one
    ///
    /// Keys present in `other` win; everything else is kept.
    pub fn merged(mut self, other: Translations) -> Self {
        merge_values(&mut self.root, other.root);
        self
    }

    /// Look up a fully qualified key
    pub fn get(&self, key: &str) -> Option<&str> {
        key.split('.')
            .try_fold(&self.root, |node, part| node.get(part))
            .and_then(Value::as_str)
    }

    /// Look up a fully qualified key, falling back to the key itself
    pub fn t(&self, key: &str) -> String {
        match self.get(key) {
            Some(value) => value.to_string(),
            None => {
                tracing::debug!(key, "missing translation");
                key.to_string()
            }
        }
    }

    /// Lookups relative to a key namespace
    pub fn scope<'a>(&'a self, namespace: &'a str) -> Scope<'a> {
        Scope {
            bundle: self,
            namespace,
        }
    }
}

impl Default for Translations {
    fn default() -> Self {
        Self::english()
    }
}

fn merge_values(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

// ============================================================================
// Scope
// ============================================================================

/// Translation lookups under a fixed key prefix
#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
    bundle: &'a Translations,
    namespace: &'a str,
}

impl Scope<'_> {
    /// Look up `key` under the namespace
    pub fn t(&self, key: &str) -> String {
        self.bundle.t(&self.qualify(key))
    }

    /// Look up `key` and parse it as a rich message
    pub fn rich(&self, key: &str) -> RichMessage {
        RichMessage::parse(&self.t(key))
    }

    fn qualify(&self, key: &str) -> String {
        if self.namespace.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.namespace, key)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_english_bundle_has_field_keys() {
        let bundle = Translations::english();
        let scope = bundle.scope(PG_COMPATIBILITY_NAMESPACE);
        for key in ["label", "tooltip", "pgSubText", "earlyAccess", "learnMore"] {
            assert!(
                bundle
                    .get(&format!("{PG_COMPATIBILITY_NAMESPACE}.{key}"))
                    .is_some(),
                "missing {key}"
            );
        }
        assert_eq!(scope.t("label"), "Enable PostgreSQL Compatibility");
        assert!(scope.rich("tooltip").has_link());
    }

    #[test]
    fn test_english_bundle_parses() {
        assert!(Translations::from_json_str(ENGLISH_BUNDLE).is_ok());
    }

    #[test]
    fn test_missing_key_falls_back_to_key() {
        let bundle = Translations::empty();
        let scope = bundle.scope(PG_COMPATIBILITY_NAMESPACE);
        assert_eq!(
            scope.t("label"),
            "createUniverseV2.databaseSettings.pgCompatibility.label"
        );
    }

    #[test]
    fn test_non_string_value_falls_back_to_key() {
        let bundle = Translations::from_json_str(r#"{"a": {"b": 3}}"#).unwrap();
        assert_eq!(bundle.t("a.b"), "a.b");
        assert_eq!(bundle.t("a"), "a");
    }

    #[test]
    fn test_bundle_root_must_be_object() {
        let err = Translations::from_json_str("[1, 2]").unwrap_err();
        assert!(matches!(err, WizardError::InvalidBundle(_)));

        let err = Translations::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, WizardError::Json(_)));
    }

    #[test]
    fn test_merged_overrides_only_given_keys() {
        let overlay = Translations::from_json_str(
            r#"{"createUniverseV2": {"databaseSettings": {"pgCompatibility": {"label": "PG-Kompatibilität"}}}}"#,
        )
        .unwrap();
        let bundle = Translations::english().merged(overlay);
        let scope = bundle.scope(PG_COMPATIBILITY_NAMESPACE);

        assert_eq!(scope.t("label"), "PG-Kompatibilität");
        assert!(scope.t("pgSubText").starts_with("Turns on YSQL"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"greeting": {{"hello": "Hallo"}}}}"#).unwrap();

        let bundle = Translations::load(file.path()).unwrap();
        assert_eq!(bundle.scope("greeting").t("hello"), "Hallo");
    }

    #[test]
    fn test_load_missing_file() {
        let err = Translations::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.is_io());
    }
}
