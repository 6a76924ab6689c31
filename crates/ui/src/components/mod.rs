//! # UI Components
//!
//! Dioxus components for the wizard's database settings step.
//!
//! - **PgCompatibilityField**: the PostgreSQL compatibility toggle
//! - **Tooltip**: hover bubble around a control
//! - **RichText**: translated text with documentation links
//! - **EarlyAccessTag**: early access badge
//! - **Inputs**: switch, checkbox and select
//! - **Dialogs**: the analyze dialog shell
//!
//! ## Component Hierarchy
//!
//! ```text
//! PgCompatibilityField
//! ├── Tooltip
//! │   ├── Switch
//! │   └── RichText (unsupported versions only)
//! ├── EarlyAccessTag
//! ├── RichText (sub-text)
//! └── AnalyzeDialog
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod dialogs;
pub mod early_access_tag;
pub mod inputs;
pub mod pg_compatibility;
pub mod rich_text;
pub mod tooltip;

// ============================================================================
// Re-exports
// ============================================================================

pub use dialogs::{AnalyzeDialog, AnalyzeDialogProps};
pub use early_access_tag::EarlyAccessTag;
pub use inputs::{Checkbox, Select, SelectOption, Switch};
pub use pg_compatibility::{PgCompatibilityField, PgCompatibilityFieldProps};
pub use rich_text::RichText;
pub use tooltip::Tooltip;
