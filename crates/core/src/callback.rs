//! Callback types carried by dialog configurations
//!
//! A configuration may hold three shapes of function: lifecycle handlers
//! attached to the dialog itself, and the `fetch`/`onSetup` pair attached to
//! menu buttons. They travel inside a [`SpecValue`](crate::SpecValue) as a
//! [`Callable`], and the schema checks that each slot receives the right
//! shape.
//!
//! The runtime dialog instance is an external collaborator; only its
//! interface is described here.

use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Field values of a dialog, keyed by component name
pub type DialogData = serde_json::Map<String, Value>;

// ============================================================================
// Runtime Instance Interfaces
// ============================================================================

/// Handle to a live dialog, passed to lifecycle handlers
pub trait DialogInstanceApi {
    fn get_data(&self) -> DialogData;
    fn set_data(&mut self, data: DialogData);
    fn disable(&mut self, name: &str);
    fn enable(&mut self, name: &str);
    fn focus(&mut self, name: &str);
    fn show_tab(&mut self, name: &str);
    /// Replace the dialog with a new configuration
    fn redial(&mut self, spec: crate::SpecValue);
    fn block(&mut self, message: &str);
    fn unblock(&mut self);
    fn close(&mut self);
}

/// Handle to a live menu button, passed to `onSetup` handlers
pub trait MenuButtonInstanceApi {
    fn is_disabled(&self) -> bool;
    fn set_disabled(&mut self, state: bool);
    fn is_active(&self) -> bool;
    fn set_active(&mut self, state: bool);
}

// ============================================================================
// Events
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct DialogActionDetails {
    pub name: String,
    pub value: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogChangeDetails {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogTabChangeDetails {
    pub new_tab_name: String,
    pub old_tab_name: String,
}

/// Something that happened to a live dialog
#[derive(Debug, Clone, PartialEq)]
pub enum DialogEvent {
    /// A component fired an action
    Action(DialogActionDetails),
    /// A value changed while the dialog is open
    Change(DialogChangeDetails),
    /// The form has valid data and was submitted
    Submit,
    /// The dialog closed for any reason
    Close,
    /// The dialog was dismissed with Esc or a cancel button
    Cancel,
    TabChange(DialogTabChangeDetails),
}

impl DialogEvent {
    /// The handler slot this event is routed to
    pub fn slot(&self) -> LifecycleSlot {
        match self {
            DialogEvent::Action(_) => LifecycleSlot::Action,
            DialogEvent::Change(_) => LifecycleSlot::Change,
            DialogEvent::Submit => LifecycleSlot::Submit,
            DialogEvent::Close => LifecycleSlot::Close,
            DialogEvent::Cancel => LifecycleSlot::Cancel,
            DialogEvent::TabChange(_) => LifecycleSlot::TabChange,
        }
    }
}

/// The six lifecycle handler slots of a dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleSlot {
    Action,
    Change,
    Submit,
    Close,
    Cancel,
    TabChange,
}

impl LifecycleSlot {
    pub const ALL: [LifecycleSlot; 6] = [
        LifecycleSlot::Action,
        LifecycleSlot::Change,
        LifecycleSlot::Submit,
        LifecycleSlot::Close,
        LifecycleSlot::Cancel,
        LifecycleSlot::TabChange,
    ];

    /// Configuration key of the slot
    pub fn key(&self) -> &'static str {
        match self {
            LifecycleSlot::Action => "onAction",
            LifecycleSlot::Change => "onChange",
            LifecycleSlot::Submit => "onSubmit",
            LifecycleSlot::Close => "onClose",
            LifecycleSlot::Cancel => "onCancel",
            LifecycleSlot::TabChange => "onTabChange",
        }
    }
}

// ============================================================================
// Handler Types
// ============================================================================

/// Contents produced by a menu button's `fetch`
#[derive(Debug, Clone, PartialEq)]
pub enum MenuContents {
    /// Name of a registered menu
    Named(String),
    /// Inline menu items, shaped by the menu component
    Items(Vec<Value>),
}

pub type LifecycleHandler = Arc<dyn Fn(&mut dyn DialogInstanceApi, &DialogEvent) + Send + Sync>;

/// Menu contents provider; hands its result to the success callback
pub type FetchHandler = Arc<dyn Fn(&mut dyn FnMut(MenuContents)) + Send + Sync>;

/// Undoes whatever an `onSetup` handler attached
pub type Teardown = Box<dyn FnOnce(&mut dyn MenuButtonInstanceApi) + Send>;

pub type SetupHandler = Arc<dyn Fn(&mut dyn MenuButtonInstanceApi) -> Teardown + Send + Sync>;

/// A function value inside a configuration
#[derive(Clone)]
pub enum Callable {
    Lifecycle(LifecycleHandler),
    Fetch(FetchHandler),
    Setup(SetupHandler),
}

impl Callable {
    pub fn lifecycle(
        handler: impl Fn(&mut dyn DialogInstanceApi, &DialogEvent) + Send + Sync + 'static,
    ) -> Self {
        Callable::Lifecycle(Arc::new(handler))
    }

    pub fn fetch(handler: impl Fn(&mut dyn FnMut(MenuContents)) + Send + Sync + 'static) -> Self {
        Callable::Fetch(Arc::new(handler))
    }

    pub fn setup(
        handler: impl Fn(&mut dyn MenuButtonInstanceApi) -> Teardown + Send + Sync + 'static,
    ) -> Self {
        Callable::Setup(Arc::new(handler))
    }

    /// Human-readable shape, used in type mismatch errors
    pub fn kind(&self) -> &'static str {
        match self {
            Callable::Lifecycle(_) => "lifecycle handler",
            Callable::Fetch(_) => "fetch handler",
            Callable::Setup(_) => "setup handler",
        }
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.kind())
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Callable::Lifecycle(a), Callable::Lifecycle(b)) => Arc::ptr_eq(a, b),
            (Callable::Fetch(a), Callable::Fetch(b)) => Arc::ptr_eq(a, b),
            (Callable::Setup(a), Callable::Setup(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

// ============================================================================
// No-op Defaults
// ============================================================================

pub fn noop_lifecycle() -> LifecycleHandler {
    Arc::new(|_: &mut dyn DialogInstanceApi, _: &DialogEvent| {})
}

pub fn noop_fetch() -> FetchHandler {
    Arc::new(|_: &mut dyn FnMut(MenuContents)| {})
}

/// Setup that attaches nothing and returns a no-op teardown
pub fn noop_setup() -> SetupHandler {
    Arc::new(|_: &mut dyn MenuButtonInstanceApi| -> Teardown {
        Box::new(|_: &mut dyn MenuButtonInstanceApi| {})
    })
}

// ============================================================================
// Tests
// ============================================================================
