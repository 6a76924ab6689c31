//! Wizard configuration
//!
//! Configuration is read from TOML. Every setting has a default, so an empty
//! file (or no file at all) yields a working wizard.
//!
//! ```toml
//! [field]
//! docs_url = "https://docs.yugabyte.com/preview/explore/ysql-language-features/postgresql-compatibility/"
//!
//! [[releases]]
//! version = "2.20.0.0"
//! pg_compatible = true
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{WizardError, WizardResult};
use crate::i18n::Translations;
use crate::traits::SharedPredicate;

/// Name of the PostgreSQL compatibility field in the shared form state
///
/// The spelling matches the payloads saved by the wizard.
pub const PG_COMPATIBILITY_FIELD: &str = "enablePGCompatibitilty";

/// Documentation page for PostgreSQL compatibility
pub const PG_COMPATIBILITY_DOCS_URL: &str =
    "https://docs.yugabyte.com/preview/explore/ysql-language-features/postgresql-compatibility/";

// ============================================================================
// Field Configuration
// ============================================================================

/// Settings of the PostgreSQL compatibility field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Form field the toggle is bound to
    pub field_name: String,

    /// Outbound documentation link shown in the tooltip and sub-text
    pub docs_url: String,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            field_name: PG_COMPATIBILITY_FIELD.to_string(),
            docs_url: PG_COMPATIBILITY_DOCS_URL.to_string(),
        }
    }
}

// ============================================================================
// Release Catalog
// ============================================================================

/// A database release offered in the version selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseEntry {
    /// Version string, e.g. `2.20.0.0`
    pub version: String,

    /// Whether the release supports PostgreSQL compatibility
    #[serde(default)]
    pub pg_compatible: bool,
}

impl ReleaseEntry {
    pub fn new(version: impl Into<String>, pg_compatible: bool) -> Self {
        Self {
            version: version.into(),
            pg_compatible,
        }
    }
}

fn default_releases() -> Vec<ReleaseEntry> {
    vec![
        ReleaseEntry::new("2.25.1.0", true),
        ReleaseEntry::new("2.20.0.0", true),
        ReleaseEntry::new("2.18.4.0", false),
        ReleaseEntry::new("2.14.0.0", false),
    ]
}

// ============================================================================
// Wizard Configuration
// ============================================================================

/// Top-level configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    /// PostgreSQL compatibility field settings
    pub field: FieldConfig,

    /// Optional translation bundle layered over the English strings
    pub locale_bundle: Option<PathBuf>,

    /// Releases offered by the version selector
    pub releases: Vec<ReleaseEntry>,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            field: FieldConfig::default(),
            locale_bundle: None,
            releases: default_releases(),
        }
    }
}

impl WizardConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(text: &str) -> WizardResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> WizardResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| WizardError::FileRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::info!(path = %path.display(), "loaded wizard configuration");
        Self::from_toml_str(&text)
    }

    /// Check settings that serde cannot express
    pub fn validate(&self) -> WizardResult<()> {
        if self.field.field_name.trim().is_empty() {
            return Err(WizardError::invalid_config("field.field_name must not be empty"));
        }
        let url = &self.field.docs_url;
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(WizardError::invalid_config(format!(
                "field.docs_url must be an http(s) URL, got '{}'",
                self.field.docs_url
            )));
        }
        if let Some(entry) = self.releases.iter().find(|r| r.version.trim().is_empty()) {
            return Err(WizardError::invalid_config(format!(
                "release entry with empty version (pg_compatible = {})",
                entry.pg_compatible
            )));
        }
        Ok(())
    }

    /// English strings, overlaid with the configured bundle if any
    pub fn translations(&self) -> WizardResult<Translations> {
        let english = Translations::english();
        match &self.locale_bundle {
            Some(path) => Ok(english.merged(Translations::load(path)?)),
            None => Ok(english),
        }
    }

    /// Version predicate answering from the release catalog
    ///
    /// Versions missing from the catalog are unsupported.
    pub fn release_predicate(&self) -> SharedPredicate {
        let releases = self.releases.clone();
        SharedPredicate::new(move |version: &str| {
            releases
                .iter()
                .any(|r| r.version == version.trim() && r.pg_compatible)
        })
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
    fn test_empty_file_uses_defaults() {
        let config = WizardConfig::from_toml_str("").unwrap();
        assert_eq!(config, WizardConfig::default());
        assert_eq!(config.field.field_name, "enablePGCompatibitilty");
        assert_eq!(config.field.docs_url, PG_COMPATIBILITY_DOCS_URL);
    }

    #[test]
    fn test_parse_releases() {
        let config = WizardConfig::from_toml_str(
            r#"
            [[releases]]
            version = "2.20.0.0"
            pg_compatible = true

            [[releases]]
            version = "2.14.0.0"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.releases,
            vec![
                ReleaseEntry::new("2.20.0.0", true),
                ReleaseEntry::new("2.14.0.0", false),
            ]
        );
    }

    #[test]
    fn test_release_predicate() {
        let predicate = WizardConfig::default().release_predicate();
        assert!(predicate.is_supported("2.20.0.0"));
        assert!(predicate.is_supported(" 2.25.1.0 "));
        assert!(!predicate.is_supported("2.14.0.0"));
        assert!(!predicate.is_supported("9.9.9.9"));
        assert!(!predicate.is_supported("not-a-version"));
    }

    #[test]
    fn test_rejects_empty_field_name() {
        let err = WizardConfig::from_toml_str("[field]\nfield_name = \"  \"\n").unwrap_err();
        assert!(matches!(err, WizardError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_non_http_docs_url() {
        let err = WizardConfig::from_toml_str("[field]\ndocs_url = \"ftp://docs\"\n").unwrap_err();
        assert!(err.to_string().contains("docs_url"));
    }

    #[test]
    fn test_rejects_bad_toml() {
        let err = WizardConfig::from_toml_str("[field\n").unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn test_load_with_locale_bundle() {
        let mut bundle = tempfile::NamedTempFile::new().unwrap();
        write!(
            bundle,
            r#"{{"createUniverseV2": {{"databaseSettings": {{"pgCompatibility": {{"label": "Compat PG"}}}}}}}}"#
        )
        .unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "locale_bundle = {:?}", bundle.path().display().to_string()).unwrap();

        let config = WizardConfig::load(file.path()).unwrap();
        let strings = config.translations().unwrap();
        assert_eq!(
            strings.t("createUniverseV2.databaseSettings.pgCompatibility.label"),
            "Compat PG"
        );
        assert_eq!(
            strings.t("createUniverseV2.databaseSettings.pgCompatibility.learnMore"),
            "Learn more"
        );
    }
}
