//! Body components
//!
//! The widgets inside a panel or tab (inputs, checkboxes, grids, ...) are
//! described by the component library, not by the dialog schema. At this
//! layer each component only needs a string `type`; `name` and `label` are
//! lifted out when present and every other key is kept as-is.

use crate::reader::{FieldReader, FieldResult, ValidationOptions};
use dialogspec_core::{Named, SpecObject, SpecValue, ToSpec};
use serde::Serialize;

/// Keys read by [`validate_component`]; everything else is passed through
const KNOWN_KEYS: &[&str] = &["type", "name", "label"];

/// A single UI component inside a dialog body
#[derive(Debug, Clone, PartialEq)]
pub struct BodyComponent {
    /// Component type, e.g. `input` or `checkbox`
    pub kind: String,
    pub name: Option<String>,
    pub label: Option<String>,
    /// Component-specific fields, unvalidated
    pub props: SpecObject,
}

impl BodyComponent {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: None,
            label: None,
            props: SpecObject::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<SpecValue>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    /// Nested components held in an `items` prop (grids, bars, ...)
    pub fn children(&self) -> &[SpecValue] {
        self.props
            .get("items")
            .and_then(SpecValue::as_array)
            .unwrap_or_default()
    }
}

impl Named for BodyComponent {
    fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

impl ToSpec for BodyComponent {
    fn to_spec(&self) -> SpecValue {
        let mut object = self.props.clone();
        object.insert("type".to_string(), self.kind.clone().into());
        if let Some(name) = &self.name {
            object.insert("name".to_string(), name.clone().into());
        }
        if let Some(label) = &self.label {
            object.insert("label".to_string(), label.clone().into());
        }
        SpecValue::Object(object)
    }
}

impl Serialize for BodyComponent {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_spec().serialize(serializer)
    }
}

/// Validate one body component
pub fn validate_component(
    value: &SpecValue,
    options: ValidationOptions,
) -> FieldResult<BodyComponent> {
    let mut reader = FieldReader::new(value, options)?;

    let kind = reader.required_string("type");
    let name = reader.optional_string("name");
    let label = reader.optional_string("label");

    let (Some(kind), Some(name), Some(label)) = (kind, name, label) else {
        return Err(reader.into_errors());
    };
    reader.finish()?;

    Ok(BodyComponent {
        kind,
        name,
        label,
        props: reader.remaining(KNOWN_KEYS),
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_component_keeps_props() {
        let value: SpecValue = json!({
            "type": "input",
            "name": "url",
            "label": "URL",
            "placeholder": "https://"
        })
        .into();

        let component = validate_component(&value, ValidationOptions::default()).unwrap();
        assert_eq!(component.kind, "input");
        assert_eq!(component.name(), "url");
        assert_eq!(component.label.as_deref(), Some("URL"));
        assert_eq!(component.props.get("placeholder"), Some(&SpecValue::from("https://")));
        assert!(component.children().is_empty());
    }

    #[test]
    fn test_component_requires_type() {
        let value: SpecValue = json!({"name": "url"}).into();
        let errors = validate_component(&value, ValidationOptions::default()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].to_string(), "[type] missing required field");
    }

    #[test]
    fn test_component_round_trips_to_spec() {
        let component = BodyComponent::new("checkbox")
            .with_name("bold")
            .with_label("Bold")
            .with_prop("checked", true);

        let again = validate_component(&component.to_spec(), ValidationOptions::default()).unwrap();
        assert_eq!(again, component);
    }

    #[test]
    fn test_grid_children() {
        let value: SpecValue = json!({
            "type": "grid",
            "columns": 2,
            "items": [{"type": "input", "name": "w"}, {"type": "input", "name": "h"}]
        })
        .into();

        let component = validate_component(&value, ValidationOptions::default()).unwrap();
        assert_eq!(component.children().len(), 2);
    }
}
