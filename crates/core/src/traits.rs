//! Core traits for the universe wizard
//!
//! The wizard never decides on its own which database versions offer
//! PostgreSQL compatibility. The host hands in a [`VersionSupportPredicate`]
//! and the field only consumes its answer.

use std::fmt;
use std::sync::Arc;

use crate::error::{WizardError, WizardResult};

// ============================================================================
// VersionSupportPredicate Trait
// ============================================================================

/// Decides whether a database version supports PostgreSQL compatibility
///
/// Implementations must be pure: the same version string always yields the
/// same answer and no side effects happen.
///
/// Any `Fn(&str) -> bool` closure is a predicate. For checks that can fail
/// (for example a parser that rejects malformed versions), wrap them in
/// [`Fallible`].
///
/// # Example
///
/// ```rust
/// use wizard_core::VersionSupportPredicate;
///
/// let predicate = |version: &str| version.starts_with("2.20");
/// assert!(predicate.check("2.20.0.0").unwrap());
/// assert!(!predicate.check("2.14.0.0").unwrap());
/// ```
pub trait VersionSupportPredicate: Send + Sync {
    /// Check a version string
    fn check(&self, version: &str) -> WizardResult<bool>;

    /// Check a version string, treating failures as "unsupported"
    fn is_supported(&self, version: &str) -> bool {
        match self.check(version) {
            Ok(supported) => supported,
            Err(err) => {
                tracing::warn!(
                    version,
                    error = %err,
                    "version check failed, treating as unsupported"
                );
                false
            }
        }
    }
}

impl<F> VersionSupportPredicate for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn check(&self, version: &str) -> WizardResult<bool> {
        Ok(self(version))
    }
}

// ============================================================================
// Fallible Adapter
// ============================================================================

/// Adapts a check returning `Result<bool, E>` into a predicate
pub struct Fallible<F>(pub F);

impl<F, E> VersionSupportPredicate for Fallible<F>
where
    F: Fn(&str) -> Result<bool, E> + Send + Sync,
    E: fmt::Display,
{
    fn check(&self, version: &str) -> WizardResult<bool> {
        (self.0)(version).map_err(|e| WizardError::version_check(version, e.to_string()))
    }
}

// ============================================================================
// Shared Predicate
// ============================================================================

/// Cheaply clonable handle to a predicate
///
/// Equality is pointer identity, so a handle can be passed through component
/// props without forcing re-renders when the same predicate is handed down
/// again.
#[derive(Clone)]
pub struct SharedPredicate(Arc<dyn VersionSupportPredicate>);

impl SharedPredicate {
    /// Wrap a predicate
    pub fn new(predicate: impl VersionSupportPredicate + 'static) -> Self {
        Self(Arc::new(predicate))
    }

    /// Whether `version` supports PostgreSQL compatibility
    pub fn is_supported(&self, version: &str) -> bool {
        self.0.is_supported(version)
    }
}

impl PartialEq for SharedPredicate {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for SharedPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedPredicate").finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
