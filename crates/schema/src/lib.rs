//! # dialogspec Schema
//!
//! Validation of editor dialog configurations.
//!
//! A dialog configuration is a loosely-typed [`SpecValue`] tree supplied by a
//! plugin author. This crate checks it against the dialog schema and
//! produces a strongly-typed [`Dialog`]:
//!
//! - **Dialog**: title, size, body, buttons, initial data, lifecycle handlers
//! - **Buttons**: submit, cancel, custom, and menu buttons
//! - **Body**: a single panel or a tab panel of named tabs
//! - **Lint**: advisory warnings for dialogs that validate but look wrong
//! - **Files**: loading and saving `.dialog.json` spec files
//!

// Module declarations
pub mod body;
pub mod button;
pub mod component;
pub mod dialog;
pub mod fields;
pub mod lint;
pub mod reader;
pub mod serialization;

// Re-export commonly used types at crate root
pub use body::{Body, Panel, Tab, TabPanel, validate_body, validate_tab};
pub use button::{ButtonVariant, DialogButton, MenuOptions, validate_button};
pub use component::{BodyComponent, validate_component};
pub use dialog::{DIALOG_SCHEMA, Dialog, LifecycleHandlers, create_dialog, validate, validate_with};
pub use fields::{Presence, SchemaField, schema_fields};
pub use lint::{LintCode, LintReport, LintRule, LintWarning, Linter};
pub use reader::{ErrorMode, FieldReader, FieldResult, ValidationOptions};
pub use serialization::{is_spec_file, load_dialog, load_spec, load_spec_from_str, save_dialog};

// Re-export core types that are commonly used with the schema
pub use dialogspec_core::{
    BodyKind, ButtonAlign, ButtonType, Callable, DialogData, DialogError, DialogEvent,
    DialogInstanceApi, DialogResult, DialogSize, FieldError, FieldErrorKind, FieldPath,
    SchemaError, SpecObject, SpecValue, ToSpec,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Prelude Module
// ============================================================================

/// Convenient re-exports for common usage
pub mod prelude {
    pub use crate::{
        Body,
        // Re-exported from core
        Callable,
        // Core types
        Dialog,
        DialogButton,
        DialogData,
        DialogEvent,
        DialogInstanceApi,
        DialogSize,
        ErrorMode,
        SchemaError,
        SpecValue,
        ValidationOptions,
        // Operations
        create_dialog,
        validate,
        validate_with,
    };
}
