//! Error types for dialogspec
//!
//! Two layers live here. [`FieldError`] and [`SchemaError`] describe why a
//! configuration failed validation; they are plain values a caller can
//! render and recover from. [`DialogError`] wraps those together with the
//! IO and serialization failures of working with spec files.

use crate::types::FieldPath;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Field Errors
// ============================================================================

/// Why a single field failed validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldErrorKind {
    /// Required field is absent
    #[error("missing required field")]
    MissingRequiredField,

    /// Field has the wrong type
    #[error("expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// Data is well-formed but cannot be read as the caller's type
    #[error("cannot read as {target}: {message}")]
    ConversionFailure { target: String, message: String },

    /// String value is outside its enumerated set
    #[error("'{value}' is not one of [{}]", .allowed.join(", "))]
    EnumViolation { value: String, allowed: Vec<String> },

    /// A `type` tag does not select any known variant
    #[error("unknown type '{value}', expected one of [{}]", .allowed.join(", "))]
    UnknownDiscriminator { value: String, allowed: Vec<String> },

    /// A child schema failed; its path is relative to this error's path
    #[error("{0}")]
    NestedValidationFailure(Box<FieldError>),
}

/// A validation failure at a specific field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Location relative to the schema that reported it
    pub path: FieldPath,
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn new(path: FieldPath, kind: FieldErrorKind) -> Self {
        Self { path, kind }
    }

    pub fn missing(path: FieldPath) -> Self {
        Self::new(path, FieldErrorKind::MissingRequiredField)
    }

    pub fn type_mismatch(
        path: FieldPath,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::new(
            path,
            FieldErrorKind::TypeMismatch {
                expected: expected.into(),
                found: found.into(),
            },
        )
    }

    pub fn conversion_failure(
        path: FieldPath,
        target: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(
            path,
            FieldErrorKind::ConversionFailure {
                target: target.into(),
                message: message.into(),
            },
        )
    }

    pub fn enum_violation(path: FieldPath, value: impl Into<String>, allowed: &[&str]) -> Self {
        Self::new(
            path,
            FieldErrorKind::EnumViolation {
                value: value.into(),
                allowed: allowed.iter().map(|s| s.to_string()).collect(),
            },
        )
    }

    pub fn unknown_discriminator(
        path: FieldPath,
        value: impl Into<String>,
        allowed: &[&str],
    ) -> Self {
        Self::new(
            path,
            FieldErrorKind::UnknownDiscriminator {
                value: value.into(),
                allowed: allowed.iter().map(|s| s.to_string()).collect(),
            },
        )
    }

    /// Wrap a child schema's error under `path`
    pub fn nested(path: FieldPath, child: FieldError) -> Self {
        Self::new(path, FieldErrorKind::NestedValidationFailure(Box::new(child)))
    }

    /// Absolute path of the failing field, through any nesting
    pub fn full_path(&self) -> FieldPath {
        match &self.kind {
            FieldErrorKind::NestedValidationFailure(child) => self.path.join(&child.full_path()),
            _ => self.path.clone(),
        }
    }

    /// The innermost error
    pub fn root_cause(&self) -> &FieldError {
        match &self.kind {
            FieldErrorKind::NestedValidationFailure(child) => child.root_cause(),
            _ => self,
        }
    }

    /// Short machine-readable reason, e.g. `not-in-enum:start,end`
    pub fn reason(&self) -> String {
        match &self.kind {
            FieldErrorKind::MissingRequiredField => "missing".to_string(),
            FieldErrorKind::TypeMismatch { .. } | FieldErrorKind::ConversionFailure { .. } => {
                "wrong-type".to_string()
            }
            FieldErrorKind::EnumViolation { allowed, .. } => {
                format!("not-in-enum:{}", allowed.join(","))
            }
            FieldErrorKind::UnknownDiscriminator { allowed, .. } => {
                format!("unknown-discriminator:{}", allowed.join(","))
            }
            FieldErrorKind::NestedValidationFailure(child) => format!("nested:{}", child.reason()),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cause = self.root_cause();
        let path = self.full_path();
        if path.is_root() {
            write!(f, "{}", cause.kind)
        } else {
            write!(f, "[{}] {}", path, cause.kind)
        }
    }
}

impl std::error::Error for FieldError {}

// ============================================================================
// Schema Error
// ============================================================================

/// Every field error reported while validating one value against a schema
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to validate '{schema}': {}", summarize(.errors))]
pub struct SchemaError {
    /// Name of the schema, e.g. `dialog`
    pub schema: String,
    pub errors: Vec<FieldError>,
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl SchemaError {
    pub fn new(schema: impl Into<String>, errors: Vec<FieldError>) -> Self {
        Self {
            schema: schema.into(),
            errors,
        }
    }

    /// Find the error whose full path renders as `path`
    pub fn find(&self, path: &str) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.full_path().to_string() == path)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

// ============================================================================
// Dialog Error
// ============================================================================

/// The main error type for dialogspec file and validation operations
#[derive(Debug, Error)]
pub enum DialogError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// Configuration failed schema validation
    #[error(transparent)]
    Schema(#[from] SchemaError),

    // ========================================================================
    // IO Errors
    // ========================================================================
    /// Spec file does not exist
    #[error("Spec file not found: {0}")]
    SpecNotFound(PathBuf),

    /// File read error
    #[error("Failed to read file '{path}': {message}")]
    FileRead { path: PathBuf, message: String },

    /// File write error
    #[error("Failed to write file '{path}': {message}")]
    FileWrite { path: PathBuf, message: String },

    /// Directory creation failed
    #[error("Failed to create directory '{path}': {message}")]
    DirectoryCreate { path: PathBuf, message: String },

    // ========================================================================
    // Serialization Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DialogError {
    /// Check if this error is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, DialogError::Schema(_))
    }
}

/// Result type alias using DialogError
pub type DialogResult<T> = Result<T, DialogError>;

// ============================================================================
// Tests
// ============================================================================
