//! Error types for the universe wizard
//!
//! Errors only surface on the fallible edges of the wizard: loading
//! configuration and translation bundles, and version checks supplied by the
//! host. Nothing in the rendering path returns an error; version check
//! failures degrade to "unsupported".

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for the wizard
#[derive(Debug, Error)]
pub enum WizardError {
    // ========================================================================
    // IO Errors
    // ========================================================================
    /// File read error
    #[error("Failed to read file '{path}': {message}")]
    FileRead { path: PathBuf, message: String },

    // ========================================================================
    // Serialization Errors
    // ========================================================================
    /// JSON parse error (translation bundles)
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parse error (configuration files)
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Translation bundle has an unexpected shape
    #[error("Invalid translation bundle: {0}")]
    InvalidBundle(String),

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ========================================================================
    // Version Errors
    // ========================================================================
    /// A version support check could not decide
    #[error("Version check failed for '{version}': {message}")]
    VersionCheck { version: String, message: String },
}

impl WizardError {
    /// Create an invalid configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        WizardError::InvalidConfig(msg.into())
    }

    /// Create an invalid bundle error
    pub fn invalid_bundle(msg: impl Into<String>) -> Self {
        WizardError::InvalidBundle(msg.into())
    }

    /// Create a version check error
    pub fn version_check(version: impl Into<String>, msg: impl Into<String>) -> Self {
        WizardError::VersionCheck {
            version: version.into(),
            message: msg.into(),
        }
    }

    /// Check if this error is an IO error
    pub fn is_io(&self) -> bool {
        matches!(self, WizardError::FileRead { .. })
    }

    /// Check if this error came from parsing a file's contents
    pub fn is_parse(&self) -> bool {
        matches!(
            self,
            WizardError::Json(_) | WizardError::Toml(_) | WizardError::InvalidBundle(_)
        )
    }
}

/// Result type alias for wizard operations
pub type WizardResult<T> = Result<T, WizardError>;

// ============================================================================
// Tests
// ============================================================================
