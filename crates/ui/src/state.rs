//! Shared form state for the wizard
//!
//! Wizard steps share one set of named boolean fields. The values live in a
//! Dioxus signal handed down through context; fields read them by name and
//! write them only through [`FormContext::set`]. A field that has never been
//! written is *unset*, which reads as "off" but is distinguishable from an
//! explicit `false`.

use std::collections::BTreeMap;

use dioxus::prelude::*;

// ============================================================================
// Form Values
// ============================================================================

/// Named boolean field values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    fields: BTreeMap<String, bool>,
}

impl FormValues {
    /// Create an empty set of values
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style initial value
    pub fn with(mut self, name: impl Into<String>, value: bool) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    /// Value of a field; `None` when unset
    pub fn get(&self, name: &str) -> Option<bool> {
        self.fields.get(name).copied()
    }

    /// Set a field, returning whether the value changed
    pub fn set(&mut self, name: &str, value: bool) -> bool {
        match self.fields.get_mut(name) {
            Some(existing) if *existing == value => false,
            Some(existing) => {
                *existing = value;
                true
            }
            None => {
                self.fields.insert(name.to_string(), value);
                true
            }
        }
    }

    /// Forget a field's value
    pub fn unset(&mut self, name: &str) -> bool {
        self.fields.remove(name).is_some()
    }

    /// Number of set fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// ============================================================================
// Form Context
// ============================================================================

/// Handle to the shared form values
///
/// `Copy`, so components can capture it in event handlers freely.
#[derive(Clone, Copy, PartialEq)]
pub struct FormContext {
    values: Signal<FormValues>,
}

impl FormContext {
    /// Wrap a signal holding the form values
    pub fn new(values: Signal<FormValues>) -> Self {
        Self { values }
    }

    /// Read a field and subscribe the caller to changes
    pub fn watch(&self, name: &str) -> Option<bool> {
        self.values.read().get(name)
    }

    /// Read a field without subscribing
    pub fn get(&self, name: &str) -> Option<bool> {
        self.values.peek().get(name)
    }

    /// Write a field
    ///
    /// Writing the current value is a no-op and does not notify watchers.
    pub fn set(&mut self, name: &str, value: bool) {
        if self.get(name) == Some(value) {
            return;
        }
        tracing::debug!(field = name, value, "form field updated");
        self.values.write().set(name, value);
    }

    /// Replace every value, e.g. when restoring saved wizard state
    pub fn reset(&mut self, values: FormValues) {
        tracing::debug!(fields = values.len(), "form reset");
        self.values.set(values);
    }
}

// ============================================================================
// State Hooks (for component use)
// ============================================================================

/// Provide a form context to the component's children
pub fn use_form_provider(initial: impl FnOnce() -> FormValues) -> FormContext {
    let values = use_signal(initial);
    use_context_provider(|| FormContext::new(values))
}

/// The nearest form context
///
/// Panics if no ancestor called [`use_form_provider`], like any missing
/// Dioxus context.
pub fn use_form_context() -> FormContext {
    use_context::<FormContext>()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_is_distinct_from_false() {
        let values = FormValues::new().with("a", false);
        assert_eq!(values.get("a"), Some(false));
        assert_eq!(values.get("b"), None);
    }

    #[test]
    fn test_set_reports_changes() {
        let mut values = FormValues::new();
        assert!(values.set("enablePGCompatibitilty", true));
        assert!(!values.set("enablePGCompatibitilty", true));
        assert!(values.set("enablePGCompatibitilty", false));
        assert_eq!(values.get("enablePGCompatibitilty"), Some(false));
        assert_eq!(values.len(), 1);
    }

    #[test]
    fn test_unset() {
        let mut values = FormValues::new().with("a", true);
        assert!(values.unset("a"));
        assert!(!values.unset("a"));
        assert!(values.is_empty());
    }
}
