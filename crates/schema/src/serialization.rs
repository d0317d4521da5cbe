//! Loading and saving dialog spec files
//!
//! Dialog configurations live on disk as JSON documents, conventionally
//! named `<name>.dialog.json`. Loading a file yields a raw [`SpecValue`];
//! validation is a separate step so callers can choose their options.

use crate::dialog::{Dialog, validate_with};
use crate::reader::ValidationOptions;
use dialogspec_core::{DialogError, DialogResult, SpecValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::debug;

// ============================================================================
// Constants
// ============================================================================

/// File extension for spec files
pub const SPEC_EXTENSION: &str = "json";

// ============================================================================
// Load Functions
// ============================================================================

/// Load a raw spec from a file
///
/// # Example
///
/// ```rust,ignore
/// use dialogspec_schema::load_spec;
///
/// let spec = load_spec("link.dialog.json").unwrap();
/// println!("title: {:?}", spec.get("title"));
/// ```
pub fn load_spec(path: impl AsRef<Path>) -> DialogResult<SpecValue> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(DialogError::SpecNotFound(path.to_path_buf()));
    }

    let json = std::fs::read_to_string(path).map_err(|e| DialogError::FileRead {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    debug!(path = %path.display(), bytes = json.len(), "Loaded spec file");

    load_spec_from_str(&json).map_err(|e| match e {
        DialogError::Json(je) => DialogError::FileRead {
            path: path.to_path_buf(),
            message: format!("Invalid JSON: {}", je),
        },
        other => other,
    })
}

/// Parse a raw spec from a JSON string
pub fn load_spec_from_str(json: &str) -> DialogResult<SpecValue> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    Ok(SpecValue::from(value))
}

/// Load and validate a dialog from a file
pub fn load_dialog<T: DeserializeOwned + Default>(
    path: impl AsRef<Path>,
    options: &ValidationOptions,
) -> DialogResult<Dialog<T>> {
    let spec = load_spec(path)?;
    Ok(validate_with(&spec, options)?)
}

// ============================================================================
// Save Functions
// ============================================================================

/// Save a dialog as a spec file
///
/// Callbacks cannot be written to JSON and are left out; re-loading the file
/// gives a dialog with no-op handlers.
pub fn save_dialog<T: Serialize>(dialog: &Dialog<T>, path: impl AsRef<Path>) -> DialogResult<()> {
    let path = path.as_ref();

    let json = dialog_to_string(dialog).map_err(|e| DialogError::FileWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| DialogError::DirectoryCreate {
                path: parent.to_path_buf(),
                message: e.to_string(),
            })?;
        }
    }

    std::fs::write(path, json).map_err(|e| DialogError::FileWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    debug!(path = %path.display(), title = %dialog.title, "Saved dialog");
    Ok(())
}

/// Serialize a dialog to pretty-printed JSON
pub fn dialog_to_string<T: Serialize>(dialog: &Dialog<T>) -> DialogResult<String> {
    Ok(serde_json::to_string_pretty(dialog)?)
}

// ============================================================================
// Utility Functions
// ============================================================================

/// Check whether a path looks like a spec file
pub fn is_spec_file(path: impl AsRef<Path>) -> bool {
    path.as_ref()
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(SPEC_EXTENSION))
}

// ============================================================================
// Tests
// ============================================================================
