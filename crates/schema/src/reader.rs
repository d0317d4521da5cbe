//! Field presence readers
//!
//! A [`FieldReader`] walks one object of a configuration and pulls typed
//! fields out of it: required, optional, or defaulted. Every failure is
//! recorded as a [`FieldError`] relative to the object, and a getter that
//! failed returns `None`. Child objects are validated by their own schema
//! and their errors are wrapped as nested failures under the child's key.

use dialogspec_core::{Callable, Enumerated, FieldError, FieldPath, SpecObject, SpecValue};

// ============================================================================
// Options
// ============================================================================

/// How many errors to collect before giving up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorMode {
    /// Report every invalid field
    #[default]
    Accumulate,
    /// Stop at the first invalid field
    FailFast,
}

/// Options shared by every schema in one validation call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationOptions {
    pub error_mode: ErrorMode,
}

impl ValidationOptions {
    pub fn fail_fast() -> Self {
        Self {
            error_mode: ErrorMode::FailFast,
        }
    }
}

/// Result of validating one value against a schema
pub type FieldResult<T> = Result<T, Vec<FieldError>>;

// ============================================================================
// FieldReader
// ============================================================================

/// Reads the fields of one configuration object
pub struct FieldReader<'a> {
    object: &'a SpecObject,
    options: ValidationOptions,
    errors: Vec<FieldError>,
}

impl<'a> FieldReader<'a> {
    /// Start reading `value`, which must be an object
    pub fn new(value: &'a SpecValue, options: ValidationOptions) -> FieldResult<Self> {
        match value {
            SpecValue::Object(object) => Ok(Self {
                object,
                options,
                errors: Vec::new(),
            }),
            other => Err(vec![FieldError::type_mismatch(
                FieldPath::root(),
                "object",
                other.type_name(),
            )]),
        }
    }

    /// Record an error; dropped once fail-fast mode has stopped
    pub fn report(&mut self, error: FieldError) {
        if !self.halted() {
            self.errors.push(error);
        }
    }

    /// True once fail-fast mode has seen an error
    fn halted(&self) -> bool {
        self.options.error_mode == ErrorMode::FailFast && !self.errors.is_empty()
    }

    /// Present, non-null value of `key`
    fn lookup(&self, key: &str) -> Option<&'a SpecValue> {
        self.object.get(key).filter(|v| !v.is_null())
    }

    fn expect_string(&mut self, key: &str, value: &'a SpecValue) -> Option<String> {
        match value.as_str() {
            Some(s) => Some(s.to_string()),
            None => {
                self.report(FieldError::type_mismatch(
                    FieldPath::key(key),
                    "string",
                    value.type_name(),
                ));
                None
            }
        }
    }

    // ========================================================================
    // Strings
    // ========================================================================

    pub fn required_string(&mut self, key: &str) -> Option<String> {
        if self.halted() {
            return None;
        }
        match self.lookup(key) {
            Some(value) => self.expect_string(key, value),
            None => {
                self.report(FieldError::missing(FieldPath::key(key)));
                None
            }
        }
    }

    /// `Some(None)` when absent, `None` when present with the wrong type
    pub fn optional_string(&mut self, key: &str) -> Option<Option<String>> {
        if self.halted() {
            return None;
        }
        match self.lookup(key) {
            Some(value) => self.expect_string(key, value).map(Some),
            None => Some(None),
        }
    }

    /// String defaulted by a provider that runs only when the key is absent
    pub fn defaulted_string_with(
        &mut self,
        key: &str,
        default: impl FnOnce() -> String,
    ) -> Option<String> {
        if self.halted() {
            return None;
        }
        match self.lookup(key) {
            Some(value) => self.expect_string(key, value),
            None => Some(default()),
        }
    }

    // ========================================================================
    // Booleans
    // ========================================================================

    pub fn defaulted_bool(&mut self, key: &str, default: bool) -> Option<bool> {
        if self.halted() {
            return None;
        }
        match self.lookup(key) {
            Some(value) => match value.as_bool() {
                Some(b) => Some(b),
                None => {
                    self.report(FieldError::type_mismatch(
                        FieldPath::key(key),
                        "boolean",
                        value.type_name(),
                    ));
                    None
                }
            },
            None => Some(default),
        }
    }

    // ========================================================================
    // Enumerations
    // ========================================================================

    fn parse_enum<E: Enumerated>(&mut self, key: &str, value: &'a SpecValue) -> Option<E> {
        let raw = self.expect_string(key, value)?;
        match E::parse(&raw) {
            Some(parsed) => Some(parsed),
            None => {
                self.report(FieldError::enum_violation(FieldPath::key(key), raw, &E::allowed()));
                None
            }
        }
    }

    pub fn defaulted_enum<E: Enumerated>(&mut self, key: &str, default: E) -> Option<E> {
        if self.halted() {
            return None;
        }
        match self.lookup(key) {
            Some(value) => self.parse_enum(key, value),
            None => Some(default),
        }
    }

    /// Read a tag that selects which variant governs the rest of the object
    pub fn discriminator<E: Enumerated>(&mut self, key: &str) -> Option<E> {
        let raw = self.required_string(key)?;
        match E::parse(&raw) {
            Some(parsed) => Some(parsed),
            None => {
                self.report(FieldError::unknown_discriminator(
                    FieldPath::key(key),
                    raw,
                    &E::allowed(),
                ));
                None
            }
        }
    }

    // ========================================================================
    // Objects and Arrays
    // ========================================================================

    /// `Some(None)` when absent, `None` when present but not an object
    pub fn optional_object(&mut self, key: &str) -> Option<Option<&'a SpecObject>> {
        if self.halted() {
            return None;
        }
        match self.lookup(key) {
            Some(SpecValue::Object(object)) => Some(Some(object)),
            Some(other) => {
                self.report(FieldError::type_mismatch(
                    FieldPath::key(key),
                    "object",
                    other.type_name(),
                ));
                None
            }
            None => Some(None),
        }
    }

    /// Required field validated by a child schema
    pub fn required_with<T>(
        &mut self,
        key: &str,
        schema: impl FnOnce(&'a SpecValue, ValidationOptions) -> FieldResult<T>,
    ) -> Option<T> {
        if self.halted() {
            return None;
        }
        let Some(value) = self.lookup(key) else {
            self.report(FieldError::missing(FieldPath::key(key)));
            return None;
        };
        match schema(value, self.options) {
            Ok(parsed) => Some(parsed),
            Err(errors) => {
                let path = FieldPath::key(key);
                self.errors
                    .extend(errors.into_iter().map(|e| FieldError::nested(path.clone(), e)));
                None
            }
        }
    }

    /// Required array whose elements are validated by a child schema
    pub fn required_array_of<T>(
        &mut self,
        key: &str,
        mut schema: impl FnMut(&'a SpecValue, ValidationOptions) -> FieldResult<T>,
    ) -> Option<Vec<T>> {
        if self.halted() {
            return None;
        }
        let items = match self.lookup(key) {
            Some(SpecValue::Array(items)) => items,
            Some(other) => {
                self.report(FieldError::type_mismatch(
                    FieldPath::key(key),
                    "array",
                    other.type_name(),
                ));
                return None;
            }
            None => {
                self.report(FieldError::missing(FieldPath::key(key)));
                return None;
            }
        };

        let mut parsed = Vec::with_capacity(items.len());
        let mut failed = false;
        for (index, item) in items.iter().enumerate() {
            if self.halted() {
                return None;
            }
            match schema(item, self.options) {
                Ok(value) => parsed.push(value),
                Err(errors) => {
                    failed = true;
                    let path = FieldPath::key(key).index(index);
                    self.errors
                        .extend(errors.into_iter().map(|e| FieldError::nested(path.clone(), e)));
                }
            }
        }
        (!failed).then_some(parsed)
    }

    // ========================================================================
    // Functions
    // ========================================================================

    /// Function field of a specific callable shape, defaulted when absent
    pub fn defaulted_function<H>(
        &mut self,
        key: &str,
        extract: impl FnOnce(&Callable) -> Option<H>,
        expected: &str,
        default: impl FnOnce() -> H,
    ) -> Option<H> {
        if self.halted() {
            return None;
        }
        match self.lookup(key) {
            Some(SpecValue::Function(callable)) => match extract(callable) {
                Some(handler) => Some(handler),
                None => {
                    self.report(FieldError::type_mismatch(
                        FieldPath::key(key),
                        expected,
                        callable.kind(),
                    ));
                    None
                }
            },
            Some(other) => {
                self.report(FieldError::type_mismatch(
                    FieldPath::key(key),
                    expected,
                    other.type_name(),
                ));
                None
            }
            None => Some(default()),
        }
    }

    // ========================================================================
    // Completion
    // ========================================================================

    /// Entries whose keys are not in `known`
    pub fn remaining(&self, known: &[&str]) -> SpecObject {
        self.object
            .iter()
            .filter(|(k, _)| !known.contains(&k.as_str()))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }

    /// Fail if any field reported an error
    pub fn finish(&mut self) -> FieldResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(std::mem::take(&mut self.errors))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use dialogspec_core::{ButtonAlign, FieldErrorKind, callback::noop_fetch};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn spec(value: serde_json::Value) -> SpecValue {
        value.into()
    }

    #[test]
    fn test_reader_requires_object() {
        let value = spec(json!("nope"));
        let errors = FieldReader::new(&value, ValidationOptions::default())
            .err()
            .unwrap();
        assert_eq!(errors[0].to_string(), "expected object, found string");
    }

    #[test]
    fn test_required_string() {
        let value = spec(json!({"text": "OK", "count": 3}));
        let mut reader = FieldReader::new(&value, ValidationOptions::default()).unwrap();

        assert_eq!(reader.required_string("text"), Some("OK".to_string()));
        assert_eq!(reader.required_string("count"), None);
        assert_eq!(reader.required_string("absent"), None);

        let errors = reader.into_errors();
        assert_eq!(errors.len(), 2);
        assert!(matches!(errors[0].kind, FieldErrorKind::TypeMismatch { .. }));
        assert_eq!(errors[1].kind, FieldErrorKind::MissingRequiredField);
    }

    #[test]
    fn test_null_counts_as_absent() {
        let value = spec(json!({"icon": null, "align": null}));
        let mut reader = FieldReader::new(&value, ValidationOptions::default()).unwrap();

        assert_eq!(reader.optional_string("icon"), Some(None));
        assert_eq!(reader.defaulted_enum("align", ButtonAlign::End), Some(ButtonAlign::End));
        assert!(reader.finish().is_ok());
    }

    #[test]
    fn test_defaulted_provider_runs_only_when_absent() {
        let value = spec(json!({"name": "given"}));
        let mut reader = FieldReader::new(&value, ValidationOptions::default()).unwrap();

        let mut calls = 0;
        let name = reader.defaulted_string_with("name", || {
            calls += 1;
            "generated".to_string()
        });
        assert_eq!(name, Some("given".to_string()));
        assert_eq!(calls, 0);

        let other = reader.defaulted_string_with("other", || {
            calls += 1;
            "generated".to_string()
        });
        assert_eq!(other, Some("generated".to_string()));
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_enum_violation() {
        let value = spec(json!({"align": "middle"}));
        let mut reader = FieldReader::new(&value, ValidationOptions::default()).unwrap();

        assert_eq!(reader.defaulted_enum("align", ButtonAlign::End), None);
        let errors = reader.into_errors();
        assert_eq!(errors[0].reason(), "not-in-enum:start,end");
    }

    #[test]
    fn test_array_errors_are_nested_by_index() {
        let value = spec(json!({"items": ["a", 1, "c", false]}));
        let mut reader = FieldReader::new(&value, ValidationOptions::default()).unwrap();

        let parsed = reader.required_array_of("items", |item, _| match item.as_str() {
            Some(s) => Ok(s.to_string()),
            None => Err(vec![FieldError::type_mismatch(
                FieldPath::root(),
                "string",
                item.type_name(),
            )]),
        });
        assert_eq!(parsed, None);

        let paths: Vec<String> = reader
            .into_errors()
            .iter()
            .map(|e| e.full_path().to_string())
            .collect();
        assert_eq!(paths, vec!["items[1]", "items[3]"]);
    }

    #[test]
    fn test_fail_fast_stops_after_first_error() {
        let value = spec(json!({"a": 1, "b": 2}));
        let mut reader = FieldReader::new(&value, ValidationOptions::fail_fast()).unwrap();

        assert_eq!(reader.required_string("a"), None);
        assert_eq!(reader.required_string("b"), None);
        assert_eq!(reader.required_string("c"), None);
        assert_eq!(reader.into_errors().len(), 1);
    }

    #[test]
    fn test_function_shape_is_checked() {
        let value = SpecValue::from([
            ("fetch", SpecValue::from(Callable::Fetch(noop_fetch()))),
            ("onSetup", SpecValue::from(Callable::Fetch(noop_fetch()))),
            ("onAction", SpecValue::from("not a function")),
        ]);
        let mut reader = FieldReader::new(&value, ValidationOptions::default()).unwrap();

        let fetch = reader.defaulted_function(
            "fetch",
            |c| match c {
                Callable::Fetch(h) => Some(h.clone()),
                _ => None,
            },
            "fetch handler",
            noop_fetch,
        );
        assert!(fetch.is_some());

        let setup = reader.defaulted_function(
            "onSetup",
            |c| match c {
                Callable::Setup(h) => Some(h.clone()),
                _ => None,
            },
            "setup handler",
            dialogspec_core::callback::noop_setup,
        );
        assert!(setup.is_none());

        let action = reader.defaulted_function(
            "onAction",
            |c| match c {
                Callable::Lifecycle(h) => Some(h.clone()),
                _ => None,
            },
            "lifecycle handler",
            dialogspec_core::callback::noop_lifecycle,
        );
        assert!(action.is_none());

        let errors = reader.into_errors();
        assert_eq!(errors[0].to_string(), "[onSetup] expected setup handler, found fetch handler");
        assert_eq!(errors[1].to_string(), "[onAction] expected lifecycle handler, found string");
    }

    #[test]
    fn test_optional_object() {
        let value = spec(json!({"data": {"a": 1}, "empty": null, "bad": [1]}));
        let mut reader = FieldReader::new(&value, ValidationOptions::default()).unwrap();

        let data = reader.optional_object("data").unwrap().unwrap();
        assert_eq!(data.get("a"), Some(&SpecValue::from(json!(1))));
        assert_eq!(reader.optional_object("empty"), Some(None));
        assert_eq!(reader.optional_object("missing"), Some(None));
        assert_eq!(reader.optional_object("bad"), None);

        let errors = reader.finish().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].to_string(), "[bad] expected object, found array");
    }

    #[test]
    fn test_remaining_keeps_unknown_keys() {
        let value = spec(json!({"type": "input", "name": "url", "placeholder": "https://"}));
        let reader = FieldReader::new(&value, ValidationOptions::default()).unwrap();

        let rest = reader.remaining(&["type", "name"]);
        assert_eq!(rest.len(), 1);
        assert!(rest.contains_key("placeholder"));
    }
}
