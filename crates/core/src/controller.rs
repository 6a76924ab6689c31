//! PostgreSQL compatibility toggle state
//!
//! Everything the toggle field decides lives here as plain data so it can be
//! driven without a renderer:
//!
//! - [`effective_disabled`] combines the caller's flag with version support
//! - [`FieldView`] is what a render shows for a given set of inputs
//! - [`TransitionWatcher`] detects false to true edges after the first
//!   observation
//! - [`ToggleFieldController`] owns the analyze dialog visibility

use crate::i18n::{PG_COMPATIBILITY_NAMESPACE, Translations};
use crate::message::RichMessage;
use crate::traits::SharedPredicate;

/// The toggle is disabled when the caller says so or the version lacks support
pub fn effective_disabled(disabled: bool, is_pg_supported: bool) -> bool {
    disabled || !is_pg_supported
}

// ============================================================================
// Field View
// ============================================================================

/// Tooltip shown around the toggle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Tooltip {
    /// No tooltip
    #[default]
    Empty,
    /// Explains why the toggle is unavailable
    Unsupported(RichMessage),
}

impl Tooltip {
    pub fn is_empty(&self) -> bool {
        matches!(self, Tooltip::Empty)
    }

    /// The message to show, if any
    pub fn message(&self) -> Option<&RichMessage> {
        match self {
            Tooltip::Empty => None,
            Tooltip::Unsupported(message) => Some(message),
        }
    }
}

/// Everything a single render of the field shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub is_pg_supported: bool,
    pub effective_disabled: bool,
    pub tooltip: Tooltip,
    pub label: String,
    pub early_access: String,
    pub sub_text: RichMessage,
}

impl FieldView {
    /// Derive the view from the field's inputs
    ///
    /// Recomputed on every render; nothing here is stored.
    pub fn derive(
        disabled: bool,
        db_version: &str,
        predicate: &SharedPredicate,
        strings: &Translations,
    ) -> Self {
        let t = strings.scope(PG_COMPATIBILITY_NAMESPACE);
        let learn_more = t.t("learnMore");
        let is_pg_supported = predicate.is_supported(db_version);

        let tooltip = if is_pg_supported {
            Tooltip::Empty
        } else {
            Tooltip::Unsupported(t.rich("tooltip").linked(&learn_more))
        };

        Self {
            is_pg_supported,
            effective_disabled: effective_disabled(disabled, is_pg_supported),
            tooltip,
            label: t.t("label"),
            early_access: t.t("earlyAccess"),
            sub_text: t.rich("pgSubText").linked(&learn_more),
        }
    }
}

// ============================================================================
// Transition Watcher
// ============================================================================

/// Detects a value turning on, ignoring the first observation
///
/// The first value seen is the one present at mount (possibly restored from
/// earlier wizard state) and never counts as a transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransitionWatcher {
    previous: Option<bool>,
}

impl TransitionWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `value`; returns true on an off (or unset) to on edge
    pub fn observe(&mut self, value: Option<bool>) -> bool {
        let current = value.unwrap_or(false);
        match self.previous.replace(current) {
            None => false,
            Some(previous) => !previous && current,
        }
    }

    /// Whether the mount observation has happened
    pub fn has_observed(&self) -> bool {
        self.previous.is_some()
    }
}

// ============================================================================
// Toggle Field Controller
// ============================================================================

/// Dialog state of the PostgreSQL compatibility field
///
/// The dialog only ever opens as a consequence of the field value turning
/// on, and only ever closes when the dialog asks to. Turning the field off
/// leaves the dialog alone, and nothing here writes the field value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToggleFieldController {
    watcher: TransitionWatcher,
    dialog_open: bool,
}

impl ToggleFieldController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current field value; returns true if the dialog just opened
    pub fn observe(&mut self, value: Option<bool>) -> bool {
        if !self.watcher.observe(value) {
            return false;
        }
        tracing::debug!("PostgreSQL compatibility enabled, opening analyze dialog");
        self.dialog_open = true;
        true
    }

    /// Close callback handed to the analyze dialog
    pub fn close_dialog(&mut self) {
        if self.dialog_open {
            tracing::debug!("analyze dialog closed");
        }
        self.dialog_open = false;
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }
}

// ============================================================================
// Tests
// ============================================================================
