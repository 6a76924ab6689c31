//! # UI Hooks
//!
//! Custom Dioxus hooks for the wizard UI.
//!
//! - **use_toggle_field**: boolean form field with the analyze dialog state

// ============================================================================
// Module Declarations
// ============================================================================

pub mod use_toggle_field;

// ============================================================================
// Re-exports
// ============================================================================

pub use use_toggle_field::{UseToggleField, use_toggle_field};
