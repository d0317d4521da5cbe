//! Dialog schema and validator
//!
//! [`validate`] turns a raw [`SpecValue`] into a fully-populated
//! [`Dialog`]: every optional field defaulted, every callback slot filled,
//! or a [`SchemaError`] listing each field that failed and why.

use crate::body::{Body, validate_body};
use crate::button::{DialogButton, validate_button};
use crate::reader::{FieldReader, FieldResult, ValidationOptions};
use dialogspec_core::callback::noop_lifecycle;
use dialogspec_core::{
    Callable, DialogData, DialogEvent, DialogInstanceApi, DialogSize, Enumerated, FieldError,
    FieldPath, LifecycleHandler, LifecycleSlot, Named, SchemaError, SpecObject, SpecValue, ToSpec,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Schema name used in [`SchemaError`]s
pub const DIALOG_SCHEMA: &str = "dialog";

// ============================================================================
// Lifecycle Handlers
// ============================================================================

/// The six lifecycle callbacks of a dialog, always callable
#[derive(Clone)]
pub struct LifecycleHandlers {
    pub on_action: LifecycleHandler,
    pub on_change: LifecycleHandler,
    pub on_submit: LifecycleHandler,
    pub on_close: LifecycleHandler,
    pub on_cancel: LifecycleHandler,
    pub on_tab_change: LifecycleHandler,
}

impl LifecycleHandlers {
    pub fn get(&self, slot: LifecycleSlot) -> &LifecycleHandler {
        match slot {
            LifecycleSlot::Action => &self.on_action,
            LifecycleSlot::Change => &self.on_change,
            LifecycleSlot::Submit => &self.on_submit,
            LifecycleSlot::Close => &self.on_close,
            LifecycleSlot::Cancel => &self.on_cancel,
            LifecycleSlot::TabChange => &self.on_tab_change,
        }
    }

    fn get_mut(&mut self, slot: LifecycleSlot) -> &mut LifecycleHandler {
        match slot {
            LifecycleSlot::Action => &mut self.on_action,
            LifecycleSlot::Change => &mut self.on_change,
            LifecycleSlot::Submit => &mut self.on_submit,
            LifecycleSlot::Close => &mut self.on_close,
            LifecycleSlot::Cancel => &mut self.on_cancel,
            LifecycleSlot::TabChange => &mut self.on_tab_change,
        }
    }

    /// Read all six slots, defaulting absent ones to no-ops
    fn read(reader: &mut FieldReader<'_>) -> Option<Self> {
        let mut handlers = Self::default();
        let mut complete = true;
        for slot in LifecycleSlot::ALL {
            let handler = reader.defaulted_function(
                slot.key(),
                |c| match c {
                    Callable::Lifecycle(handler) => Some(handler.clone()),
                    _ => None,
                },
                "lifecycle handler",
                noop_lifecycle,
            );
            match handler {
                Some(handler) => *handlers.get_mut(slot) = handler,
                None => complete = false,
            }
        }
        complete.then_some(handlers)
    }
}

impl Default for LifecycleHandlers {
    fn default() -> Self {
        Self {
            on_action: noop_lifecycle(),
            on_change: noop_lifecycle(),
            on_submit: noop_lifecycle(),
            on_close: noop_lifecycle(),
            on_cancel: noop_lifecycle(),
            on_tab_change: noop_lifecycle(),
        }
    }
}

impl fmt::Debug for LifecycleHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LifecycleHandlers { .. }")
    }
}

impl PartialEq for LifecycleHandlers {
    fn eq(&self, other: &Self) -> bool {
        LifecycleSlot::ALL
            .iter()
            .all(|slot| Arc::ptr_eq(self.get(*slot), other.get(*slot)))
    }
}

// ============================================================================
// Dialog
// ============================================================================

/// A validated dialog configuration
///
/// `T` is the shape of the dialog's data; by default an untyped map.
#[derive(Debug, Clone, PartialEq)]
pub struct Dialog<T = DialogData> {
    pub title: String,
    pub size: DialogSize,
    pub body: Body,
    pub buttons: Vec<DialogButton>,
    pub initial_data: T,
    pub handlers: LifecycleHandlers,
}

impl<T> Dialog<T> {
    /// Route an event to the matching lifecycle handler
    pub fn dispatch(&self, api: &mut dyn DialogInstanceApi, event: &DialogEvent) {
        debug!(slot = event.slot().key(), title = %self.title, "Dispatching dialog event");
        (self.handlers.get(event.slot()))(api, event);
    }

    /// Find a button by name
    pub fn button(&self, name: &str) -> Option<&DialogButton> {
        self.buttons.iter().find(|b| b.name() == name)
    }

    pub fn primary_buttons(&self) -> impl Iterator<Item = &DialogButton> {
        self.buttons.iter().filter(|b| b.primary)
    }
}

impl<T: Serialize> ToSpec for Dialog<T> {
    fn to_spec(&self) -> SpecValue {
        let initial_data = serde_json::to_value(&self.initial_data)
            .map(SpecValue::from)
            .unwrap_or_default();

        let mut object = SpecObject::new();
        object.insert("title".into(), self.title.as_str().into());
        object.insert("size".into(), self.size.as_str().into());
        object.insert("body".into(), self.body.to_spec());
        object.insert(
            "buttons".into(),
            SpecValue::Array(self.buttons.iter().map(ToSpec::to_spec).collect()),
        );
        object.insert("initialData".into(), initial_data);
        for slot in LifecycleSlot::ALL {
            object.insert(
                slot.key().into(),
                Callable::Lifecycle(self.handlers.get(slot).clone()).into(),
            );
        }
        SpecValue::Object(object)
    }
}

impl<T: Serialize> Serialize for Dialog<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_spec().serialize(serializer)
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Validate a raw dialog configuration, reporting every invalid field
///
/// # Example
///
/// ```rust,ignore
/// use dialogspec_schema::{Dialog, validate};
/// use serde_json::json;
///
/// let spec = json!({"title": "T", "body": {"type": "panel", "items": []}, "buttons": []});
/// let dialog: Dialog = validate(&spec.into()).unwrap();
/// assert_eq!(dialog.size.as_str(), "normal");
/// ```
pub fn validate<T: DeserializeOwned + Default>(spec: &SpecValue) -> Result<Dialog<T>, SchemaError> {
    validate_with(spec, &ValidationOptions::default())
}

/// Alias of [`validate`]
pub fn create_dialog<T: DeserializeOwned + Default>(
    spec: &SpecValue,
) -> Result<Dialog<T>, SchemaError> {
    validate(spec)
}

/// Validate with explicit options
pub fn validate_with<T: DeserializeOwned + Default>(
    spec: &SpecValue,
    options: &ValidationOptions,
) -> Result<Dialog<T>, SchemaError> {
    match dialog_fields(spec, *options) {
        Ok(dialog) => {
            debug!(
                title = %dialog.title,
                size = %dialog.size,
                body = %dialog.body.kind(),
                buttons = dialog.buttons.len(),
                "Validated dialog"
            );
            Ok(dialog)
        }
        Err(errors) => {
            debug!(errors = errors.len(), "Dialog validation failed");
            Err(SchemaError::new(DIALOG_SCHEMA, errors))
        }
    }
}

fn dialog_fields<T: DeserializeOwned + Default>(
    spec: &SpecValue,
    options: ValidationOptions,
) -> FieldResult<Dialog<T>> {
    let mut reader = FieldReader::new(spec, options)?;

    let title = reader.required_string("title");
    let body = reader.required_with("body", validate_body);
    let size = reader.defaulted_enum("size", DialogSize::default());
    let buttons = reader.required_array_of("buttons", validate_button);
    let initial_data = reader.optional_object("initialData").and_then(|data| match data {
        Some(data) => convert_initial_data(&mut reader, data),
        None => Some(T::default()),
    });
    let handlers = LifecycleHandlers::read(&mut reader);

    let (Some(title), Some(body), Some(size), Some(buttons), Some(initial_data), Some(handlers)) =
        (title, body, size, buttons, initial_data, handlers)
    else {
        return Err(reader.into_errors());
    };
    reader.finish()?;

    Ok(Dialog {
        title,
        size,
        body,
        buttons,
        initial_data,
        handlers,
    })
}

/// Convert the untyped data bag into the caller's data type
fn convert_initial_data<T: DeserializeOwned>(
    reader: &mut FieldReader<'_>,
    data: &SpecObject,
) -> Option<T> {
    let mut functions = Vec::new();
    for (key, value) in data {
        find_functions(value, FieldPath::key(key), &mut functions);
    }
    if !functions.is_empty() {
        for error in functions {
            reader.report(FieldError::nested(FieldPath::key("initialData"), error));
        }
        return None;
    }

    match serde_json::from_value(SpecValue::Object(data.clone()).to_json()) {
        Ok(converted) => Some(converted),
        Err(e) => {
            reader.report(FieldError::conversion_failure(
                FieldPath::key("initialData"),
                short_type_name::<T>(),
                e.to_string(),
            ));
            None
        }
    }
}

/// Callables have no data form, so each one is a type mismatch
fn find_functions(value: &SpecValue, path: FieldPath, found: &mut Vec<FieldError>) {
    match value {
        SpecValue::Function(callable) => {
            found.push(FieldError::type_mismatch(path, "data", callable.kind()));
        }
        SpecValue::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                find_functions(item, path.index(index), found);
            }
        }
        SpecValue::Object(object) => {
            for (key, item) in object {
                find_functions(item, path.child(key.as_str()), found);
            }
        }
        _ => {}
    }
}

/// `LinkData` rather than `my_crate::forms::LinkData`
fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    if full.contains('<') {
        return full;
    }
    full.rsplit("::").next().unwrap_or(full)
}

// ============================================================================
// Tests
// ============================================================================
