//! # Dialog Components
//!
//! Modal dialogs used by the database settings step.
//!
//! - **AnalyzeDialog**: shown after PostgreSQL compatibility is enabled
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wizard_ui::components::dialogs::AnalyzeDialog;
//!
//! fn MyComponent() -> Element {
//!     let mut open = use_signal(|| true);
//!     rsx! {
//!         AnalyzeDialog {
//!             open: open(),
//!             on_close: move |_| open.set(false),
//!             p { "Run ANALYZE on your tables." }
//!         }
//!     }
//! }
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod analyze_dialog;

// ============================================================================
// Re-exports
// ============================================================================

pub use analyze_dialog::{AnalyzeDialog, AnalyzeDialogProps};
