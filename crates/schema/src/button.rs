//! Dialog button schema
//!
//! Buttons share one field set; the `type` tag decides whether the menu-only
//! fields (`tooltip`, `fetch`, `onSetup`) are kept.

use crate::reader::{FieldReader, FieldResult, ValidationOptions};
use dialogspec_core::callback::{noop_fetch, noop_setup};
use dialogspec_core::{
    ButtonAlign, ButtonType, Callable, Enumerated, FetchHandler, MenuButtonInstanceApi,
    MenuContents, Named, SetupHandler, SpecObject, SpecValue, Teardown, ToSpec, id,
};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

// ============================================================================
// Types
// ============================================================================

/// Fields only a menu button carries
#[derive(Clone)]
pub struct MenuOptions {
    pub tooltip: Option<String>,
    pub fetch: FetchHandler,
    pub on_setup: SetupHandler,
}

impl MenuOptions {
    /// Collect everything the button's `fetch` produces
    pub fn fetch_contents(&self) -> Vec<MenuContents> {
        let mut contents = Vec::new();
        (self.fetch)(&mut |c: MenuContents| contents.push(c));
        contents
    }

    /// Run `onSetup` against a live button, returning its teardown
    pub fn setup(&self, api: &mut dyn MenuButtonInstanceApi) -> Teardown {
        (self.on_setup)(api)
    }
}

impl fmt::Debug for MenuOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuOptions")
            .field("tooltip", &self.tooltip)
            .finish_non_exhaustive()
    }
}

impl PartialEq for MenuOptions {
    fn eq(&self, other: &Self) -> bool {
        self.tooltip == other.tooltip
            && Arc::ptr_eq(&self.fetch, &other.fetch)
            && Arc::ptr_eq(&self.on_setup, &other.on_setup)
    }
}

/// What a button does when pressed
#[derive(Debug, Clone, PartialEq)]
pub enum ButtonVariant {
    Submit,
    Cancel,
    Custom,
    Menu(MenuOptions),
}

/// A validated dialog footer button
#[derive(Debug, Clone, PartialEq)]
pub struct DialogButton {
    pub name: String,
    pub text: String,
    pub align: ButtonAlign,
    pub primary: bool,
    pub disabled: bool,
    pub icon: Option<String>,
    pub variant: ButtonVariant,
}

impl DialogButton {
    pub fn button_type(&self) -> ButtonType {
        match self.variant {
            ButtonVariant::Submit => ButtonType::Submit,
            ButtonVariant::Cancel => ButtonType::Cancel,
            ButtonVariant::Custom => ButtonType::Custom,
            ButtonVariant::Menu(_) => ButtonType::Menu,
        }
    }

    pub fn menu(&self) -> Option<&MenuOptions> {
        match &self.variant {
            ButtonVariant::Menu(menu) => Some(menu),
            _ => None,
        }
    }
}

impl Named for DialogButton {
    fn name(&self) -> &str {
        &self.name
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Validate one button
///
/// An absent `name` is replaced by a freshly generated identifier on every
/// call, so the same raw button validated twice gets two different names.
pub fn validate_button(value: &SpecValue, options: ValidationOptions) -> FieldResult<DialogButton> {
    let mut reader = FieldReader::new(value, options)?;

    let kind = reader.discriminator::<ButtonType>("type");
    let name = reader.defaulted_string_with("name", || id::generate(id::BUTTON_NAME_PREFIX));
    let text = reader.required_string("text");
    let icon = reader.optional_string("icon");
    let align = reader.defaulted_enum("align", ButtonAlign::default());
    let primary = reader.defaulted_bool("primary", false);
    let disabled = reader.defaulted_bool("disabled", false);
    let tooltip = reader.optional_string("tooltip");
    let fetch = reader.defaulted_function(
        "fetch",
        |c| match c {
            Callable::Fetch(handler) => Some(handler.clone()),
            _ => None,
        },
        "fetch handler",
        noop_fetch,
    );
    let on_setup = reader.defaulted_function(
        "onSetup",
        |c| match c {
            Callable::Setup(handler) => Some(handler.clone()),
            _ => None,
        },
        "setup handler",
        noop_setup,
    );

    let (
        Some(kind),
        Some(name),
        Some(text),
        Some(icon),
        Some(align),
        Some(primary),
        Some(disabled),
        Some(tooltip),
        Some(fetch),
        Some(on_setup),
    ) = (
        kind, name, text, icon, align, primary, disabled, tooltip, fetch, on_setup,
    )
    else {
        return Err(reader.into_errors());
    };
    reader.finish()?;

    let variant = match kind {
        ButtonType::Submit => ButtonVariant::Submit,
        ButtonType::Cancel => ButtonVariant::Cancel,
        ButtonType::Custom => ButtonVariant::Custom,
        ButtonType::Menu => ButtonVariant::Menu(MenuOptions {
            tooltip,
            fetch,
            on_setup,
        }),
    };

    Ok(DialogButton {
        name,
        text,
        align,
        primary,
        disabled,
        icon,
        variant,
    })
}

// ============================================================================
// Spec Conversion
// ============================================================================

impl ToSpec for DialogButton {
    fn to_spec(&self) -> SpecValue {
        let mut object = SpecObject::new();
        object.insert("type".into(), self.button_type().as_str().into());
        object.insert("name".into(), self.name.as_str().into());
        object.insert("text".into(), self.text.as_str().into());
        object.insert("align".into(), self.align.as_str().into());
        object.insert("primary".into(), self.primary.into());
        object.insert("disabled".into(), self.disabled.into());
        if let Some(icon) = &self.icon {
            object.insert("icon".into(), icon.as_str().into());
        }
        if let ButtonVariant::Menu(menu) = &self.variant {
            if let Some(tooltip) = &menu.tooltip {
                object.insert("tooltip".into(), tooltip.as_str().into());
            }
            object.insert("fetch".into(), Callable::Fetch(menu.fetch.clone()).into());
            object.insert("onSetup".into(), Callable::Setup(menu.on_setup.clone()).into());
        }
        SpecValue::Object(object)
    }
}

impl Serialize for DialogButton {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_spec().serialize(serializer)
    }
}

// ============================================================================
// Tests
// ============================================================================
