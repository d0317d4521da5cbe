//! Core traits for dialogspec
//!
//! This module defines the traits shared by the schema types: closed
//! string enumerations, conversion back to the raw configuration form,
//! and name lookup.

use crate::value::SpecValue;

// ============================================================================
// Enumerated Trait
// ============================================================================

/// Trait for closed sets of string values
///
/// Implementors list every variant in `ALL`; parsing and the allowed-value
/// list used in error messages are derived from it.
///
/// # Example
///
/// ```rust,ignore
/// use dialogspec_core::{DialogSize, Enumerated};
///
/// assert_eq!(DialogSize::parse("large"), Some(DialogSize::Large));
/// assert_eq!(DialogSize::allowed(), vec!["normal", "medium", "large"]);
/// ```
pub trait Enumerated: Sized + Copy + 'static {
    /// Every variant, in declaration order
    const ALL: &'static [Self];

    /// The wire spelling of this variant
    fn as_str(&self) -> &'static str;

    /// Parse a wire value
    fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == value)
    }

    /// Wire spellings of every variant
    fn allowed() -> Vec<&'static str> {
        Self::ALL.iter().map(|v| v.as_str()).collect()
    }
}

// ============================================================================
// ToSpec Trait
// ============================================================================

/// Trait for validated types that can be turned back into raw configuration
///
/// The produced value re-validates to an equivalent structure, which is
/// what a dialog `redial` relies on.
pub trait ToSpec {
    fn to_spec(&self) -> SpecValue;
}

// ============================================================================
// Named Trait
// ============================================================================

/// Trait for types that have a name
pub trait Named {
    /// Get the name
    fn name(&self) -> &str;
}

// ============================================================================
// Tests
// ============================================================================
