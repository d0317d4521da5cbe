//! Core types used throughout dialogspec
//!
//! This module contains the closed enumerations a dialog configuration may
//! use and the field path type that locates a value inside a configuration.

use crate::traits::Enumerated;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Dialog Size
// ============================================================================

/// Size class of a dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogSize {
    #[default]
    Normal,
    Medium,
    Large,
}

impl Enumerated for DialogSize {
    const ALL: &'static [Self] = &[Self::Normal, Self::Medium, Self::Large];

    fn as_str(&self) -> &'static str {
        match self {
            DialogSize::Normal => "normal",
            DialogSize::Medium => "medium",
            DialogSize::Large => "large",
        }
    }
}

impl fmt::Display for DialogSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Button Types
// ============================================================================

/// Discriminator of a dialog button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonType {
    Submit,
    Cancel,
    Custom,
    Menu,
}

impl ButtonType {
    /// Whether this is the menu variant
    pub fn is_menu(&self) -> bool {
        matches!(self, ButtonType::Menu)
    }
}

impl Enumerated for ButtonType {
    const ALL: &'static [Self] = &[Self::Submit, Self::Cancel, Self::Custom, Self::Menu];

    fn as_str(&self) -> &'static str {
        match self {
            ButtonType::Submit => "submit",
            ButtonType::Cancel => "cancel",
            ButtonType::Custom => "custom",
            ButtonType::Menu => "menu",
        }
    }
}

impl fmt::Display for ButtonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Horizontal placement of a button in the dialog footer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonAlign {
    Start,
    #[default]
    End,
}

impl Enumerated for ButtonAlign {
    const ALL: &'static [Self] = &[Self::Start, Self::End];

    fn as_str(&self) -> &'static str {
        match self {
            ButtonAlign::Start => "start",
            ButtonAlign::End => "end",
        }
    }
}

// ============================================================================
// Body Kind
// ============================================================================

/// Discriminator of a dialog body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyKind {
    Panel,
    TabPanel,
}

impl Enumerated for BodyKind {
    const ALL: &'static [Self] = &[Self::Panel, Self::TabPanel];

    fn as_str(&self) -> &'static str {
        match self {
            BodyKind::Panel => "panel",
            BodyKind::TabPanel => "tabpanel",
        }
    }
}

impl fmt::Display for BodyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Field Paths
// ============================================================================

/// One step of a [`FieldPath`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

/// Dotted/indexed location of a value, e.g. `buttons[0].type`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// The empty path (the value being validated itself)
    pub fn root() -> Self {
        Self::default()
    }

    /// Path consisting of a single key
    pub fn key(key: impl Into<String>) -> Self {
        Self::root().child(key)
    }

    /// Extend with an object key
    pub fn child(&self, key: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Key(key.into()));
        Self { segments }
    }

    /// Extend with an array index
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    /// Prefix `other` with this path
    pub fn join(&self, other: &FieldPath) -> Self {
        let mut segments = self.segments.clone();
        segments.extend(other.segments.iter().cloned());
        Self { segments }
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if i == 0 => write!(f, "{}", key)?,
                PathSegment::Key(key) => write!(f, ".{}", key)?,
                PathSegment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

impl From<&str> for FieldPath {
    fn from(key: &str) -> Self {
        FieldPath::key(key)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_dialog_size_parse() {
        assert_eq!(DialogSize::parse("medium"), Some(DialogSize::Medium));
        assert_eq!(DialogSize::parse("huge"), None);
        assert_eq!(DialogSize::default(), DialogSize::Normal);
        assert_eq!(DialogSize::allowed(), vec!["normal", "medium", "large"]);
    }

    #[test]
    fn test_button_type_parse() {
        assert_eq!(ButtonType::parse("menu"), Some(ButtonType::Menu));
        assert!(ButtonType::Menu.is_menu());
        assert!(!ButtonType::Submit.is_menu());
        assert_eq!(
            ButtonType::allowed(),
            vec!["submit", "cancel", "custom", "menu"]
        );
    }

    #[test]
    fn test_align_defaults_to_end() {
        assert_eq!(ButtonAlign::default(), ButtonAlign::End);
    }

    #[test]
    fn test_body_kind_strings() {
        assert_eq!(BodyKind::TabPanel.as_str(), "tabpanel");
        assert_eq!(BodyKind::parse("panel"), Some(BodyKind::Panel));
    }

    #[test]
    fn test_field_path_display() {
        let path = FieldPath::key("buttons").index(0).child("type");
        assert_eq!(path.to_string(), "buttons[0].type");

        let path = FieldPath::key("body").join(&FieldPath::key("tabs").index(2));
        assert_eq!(path.to_string(), "body.tabs[2]");

        assert_eq!(FieldPath::root().to_string(), "");
        assert!(FieldPath::root().is_root());
    }
}
