//! Dialog body schema
//!
//! A body is either a single panel of components or a tab panel holding an
//! ordered list of named tabs. The `type` tag picks the variant, and the
//! variant's own field set validates the rest of the object.

use crate::component::{BodyComponent, validate_component};
use crate::reader::{FieldReader, FieldResult, ValidationOptions};
use dialogspec_core::{BodyKind, Named, SpecValue, ToSpec, id};
use serde::Serialize;

// ============================================================================
// Types
// ============================================================================

/// A flat list of components
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Panel {
    pub items: Vec<BodyComponent>,
}

/// One tab of a tab panel
#[derive(Debug, Clone, PartialEq)]
pub struct Tab {
    pub name: String,
    pub title: String,
    pub items: Vec<BodyComponent>,
}

impl Named for Tab {
    fn name(&self) -> &str {
        &self.name
    }
}

/// An ordered list of tabs
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TabPanel {
    pub tabs: Vec<Tab>,
}

/// Dialog body
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Panel(Panel),
    TabPanel(TabPanel),
}

impl Body {
    pub fn kind(&self) -> BodyKind {
        match self {
            Body::Panel(_) => BodyKind::Panel,
            Body::TabPanel(_) => BodyKind::TabPanel,
        }
    }

    /// Tab names in display order (empty for a plain panel)
    pub fn tab_names(&self) -> Vec<&str> {
        match self {
            Body::Panel(_) => Vec::new(),
            Body::TabPanel(panel) => panel.tabs.iter().map(|t| t.name.as_str()).collect(),
        }
    }

    /// Find a tab by name
    pub fn tab(&self, name: &str) -> Option<&Tab> {
        match self {
            Body::Panel(_) => None,
            Body::TabPanel(panel) => panel.tabs.iter().find(|t| t.name == name),
        }
    }

    /// Every top-level component, across all tabs
    pub fn components(&self) -> Vec<&BodyComponent> {
        match self {
            Body::Panel(panel) => panel.items.iter().collect(),
            Body::TabPanel(panel) => panel.tabs.iter().flat_map(|t| t.items.iter()).collect(),
        }
    }
}

impl Default for Body {
    fn default() -> Self {
        Body::Panel(Panel::default())
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Validate a dialog body, dispatching on its `type`
pub fn validate_body(value: &SpecValue, options: ValidationOptions) -> FieldResult<Body> {
    let mut reader = FieldReader::new(value, options)?;

    let Some(kind) = reader.discriminator::<BodyKind>("type") else {
        return Err(reader.into_errors());
    };
    let body = variant_fields(kind)(&mut reader);

    match body {
        Some(body) => {
            reader.finish()?;
            Ok(body)
        }
        None => Err(reader.into_errors()),
    }
}

type VariantFields = fn(&mut FieldReader<'_>) -> Option<Body>;

/// Field set governing each body variant
fn variant_fields(kind: BodyKind) -> VariantFields {
    match kind {
        BodyKind::Panel => panel_fields,
        BodyKind::TabPanel => tab_panel_fields,
    }
}

fn panel_fields(reader: &mut FieldReader<'_>) -> Option<Body> {
    let items = reader.required_array_of("items", validate_component)?;
    Some(Body::Panel(Panel { items }))
}

fn tab_panel_fields(reader: &mut FieldReader<'_>) -> Option<Body> {
    let tabs = reader.required_array_of("tabs", validate_tab)?;
    Some(Body::TabPanel(TabPanel { tabs }))
}

/// Validate one tab of a tab panel
pub fn validate_tab(value: &SpecValue, options: ValidationOptions) -> FieldResult<Tab> {
    let mut reader = FieldReader::new(value, options)?;

    let name = reader.defaulted_string_with("name", || id::generate(id::TAB_NAME_PREFIX));
    let title = reader.required_string("title");
    let items = reader.required_array_of("items", validate_component);

    let (Some(name), Some(title), Some(items)) = (name, title, items) else {
        return Err(reader.into_errors());
    };
    reader.finish()?;

    Ok(Tab { name, title, items })
}

// ============================================================================
// Spec Conversion
// ============================================================================

fn items_spec(items: &[BodyComponent]) -> SpecValue {
    SpecValue::Array(items.iter().map(ToSpec::to_spec).collect())
}

impl ToSpec for Tab {
    fn to_spec(&self) -> SpecValue {
        SpecValue::from([
            ("name", SpecValue::from(self.name.as_str())),
            ("title", SpecValue::from(self.title.as_str())),
            ("items", items_spec(&self.items)),
        ])
    }
}

impl ToSpec for Body {
    fn to_spec(&self) -> SpecValue {
        let kind = SpecValue::from(self.kind().to_string());
        match self {
            Body::Panel(panel) => {
                SpecValue::from([("type", kind), ("items", items_spec(&panel.items))])
            }
            Body::TabPanel(panel) => SpecValue::from([
                ("type", kind),
                (
                    "tabs",
                    SpecValue::Array(panel.tabs.iter().map(ToSpec::to_spec).collect()),
                ),
            ]),
        }
    }
}

impl Serialize for Body {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_spec().serialize(serializer)
    }
}

// ============================================================================
// Tests
// ============================================================================
