//! Field reference for the dialog schema
//!
//! A static description of every key the validators read, used to print
//! the schema from the command line.

use dialogspec_core::{BodyKind, ButtonAlign, ButtonType, DialogSize, Enumerated};
use std::fmt;

/// Whether a field must be present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    Optional,
    /// Filled in when absent; the value describes the default
    Defaulted(&'static str),
}

impl fmt::Display for Presence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Presence::Required => write!(f, "required"),
            Presence::Optional => write!(f, "optional"),
            Presence::Defaulted(default) => write!(f, "default: {}", default),
        }
    }
}

/// One key of one schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaField {
    /// Owning schema, e.g. `dialog` or `button`
    pub schema: &'static str,
    pub key: &'static str,
    pub presence: Presence,
    /// Human-readable value type
    pub value_type: String,
}

impl SchemaField {
    fn new(
        schema: &'static str,
        key: &'static str,
        presence: Presence,
        value_type: impl Into<String>,
    ) -> Self {
        Self {
            schema,
            key,
            presence,
            value_type: value_type.into(),
        }
    }
}

fn one_of<E: Enumerated>() -> String {
    E::allowed().join(" | ")
}

/// Every field read by the validators, grouped by schema
pub fn schema_fields() -> Vec<SchemaField> {
    use Presence::*;

    let mut fields = vec![
        SchemaField::new("dialog", "title", Required, "string"),
        SchemaField::new("dialog", "body", Required, "body"),
        SchemaField::new("dialog", "size", Defaulted("normal"), one_of::<DialogSize>()),
        SchemaField::new("dialog", "buttons", Required, "button[]"),
        SchemaField::new("dialog", "initialData", Defaulted("{}"), "object"),
    ];
    for key in ["onAction", "onChange", "onSubmit", "onClose", "onCancel", "onTabChange"] {
        fields.push(SchemaField::new("dialog", key, Defaulted("no-op"), "lifecycle handler"));
    }

    fields.extend([
        SchemaField::new("button", "type", Required, one_of::<ButtonType>()),
        SchemaField::new("button", "name", Defaulted("generated"), "string"),
        SchemaField::new("button", "text", Required, "string"),
        SchemaField::new("button", "icon", Optional, "string"),
        SchemaField::new("button", "align", Defaulted("end"), one_of::<ButtonAlign>()),
        SchemaField::new("button", "primary", Defaulted("false"), "boolean"),
        SchemaField::new("button", "disabled", Defaulted("false"), "boolean"),
        SchemaField::new("menu button", "tooltip", Optional, "string"),
        SchemaField::new("menu button", "fetch", Defaulted("no-op"), "fetch handler"),
        SchemaField::new("menu button", "onSetup", Defaulted("no-op"), "setup handler"),
        SchemaField::new("body", "type", Required, one_of::<BodyKind>()),
        SchemaField::new("panel", "items", Required, "component[]"),
        SchemaField::new("tabpanel", "tabs", Required, "tab[]"),
        SchemaField::new("tab", "name", Defaulted("generated"), "string"),
        SchemaField::new("tab", "title", Required, "string"),
        SchemaField::new("tab", "items", Required, "component[]"),
        SchemaField::new("component", "type", Required, "string"),
        SchemaField::new("component", "name", Optional, "string"),
        SchemaField::new("component", "label", Optional, "string"),
    ]);
    fields
}
