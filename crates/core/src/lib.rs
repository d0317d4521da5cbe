//! # dialogspec Core
//!
//! Core types, traits, and error handling for dialogspec.
//!
//! This crate provides the foundational building blocks used by the schema
//! and CLI crates, including:
//!
//! - **Values**: `SpecValue`, the loosely-typed configuration tree
//! - **Types**: closed enumerations (`DialogSize`, `ButtonType`, ...) and `FieldPath`
//! - **Callbacks**: handler types and the runtime instance interfaces
//! - **Errors**: `FieldError`, `SchemaError`, and `DialogError`
//! - **Ids**: process-wide unique name generation
//!

pub mod callback;
pub mod error;
pub mod id;
pub mod traits;
pub mod types;
pub mod value;

// Re-export commonly used items at crate root
pub use callback::{
    Callable, DialogActionDetails, DialogChangeDetails, DialogData, DialogEvent,
    DialogInstanceApi, DialogTabChangeDetails, FetchHandler, LifecycleHandler, LifecycleSlot,
    MenuButtonInstanceApi, MenuContents, SetupHandler, Teardown,
};
pub use error::{DialogError, DialogResult, FieldError, FieldErrorKind, SchemaError};
pub use traits::{Enumerated, Named, ToSpec};
pub use types::{BodyKind, ButtonAlign, ButtonType, DialogSize, FieldPath, PathSegment};
pub use value::{SpecObject, SpecValue};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
