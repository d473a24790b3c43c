//! The schema-compilation boundary.
//!
//! Declarative schemas are compiled by an external collaborator behind the
//! one-method [`SchemaCompiler`] trait, so alternative schema dialects can
//! be substituted without touching the combinator core. Compilation yields
//! a total, side-effect-free violation function over JSON candidates;
//! [`SchemaValidator`] adapts that function into the [`Validate`] contract.
//!
//! The compiler object is constructed once by the caller and passed
//! explicitly through [`TypeHandler::from_schema`]; there is no ambient or
//! global compiler instance.
//!
//! The default dialect is JSON Schema, via [`JsonSchemaCompiler`] (feature
//! `json-schema`, enabled by default).
//!
//! [`TypeHandler::from_schema`]: crate::handler::TypeHandler::from_schema

use std::fmt;
use std::marker::PhantomData;

use serde::Serialize;

use crate::foundation::{Validate, ValidationError};

#[cfg(feature = "json-schema")]
mod json;
#[cfg(feature = "json-schema")]
pub use json::JsonSchemaCompiler;

// ============================================================================
// COMPILER CONTRACT
// ============================================================================

/// A compiled schema: maps a candidate to the list of violated-rule
/// messages. Empty list means the candidate is valid.
///
/// The function must be total and side-effect-free.
pub type ViolationFn = Box<dyn Fn(&serde_json::Value) -> Vec<String> + Send + Sync>;

/// Compiles a declarative schema into a violation function.
///
/// The schema dialect is opaque to the core; the only requirements are that
/// compilation be deterministic for a given document and that the returned
/// function uphold the [`ViolationFn`] contract.
pub trait SchemaCompiler {
    /// Compiles `schema`, or rejects a malformed document.
    fn compile(&self, schema: &serde_json::Value) -> Result<ViolationFn, SchemaError>;
}

/// A schema document the compiler could not accept.
///
/// A malformed schema is a programmer error, not a data error: the core
/// never recovers from it and propagates it unchanged to the caller.
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum SchemaError {
    /// The schema document itself was rejected by the engine.
    #[error("invalid schema document: {0}")]
    InvalidDocument(String),
}

// ============================================================================
// SCHEMA-BACKED VALIDATOR
// ============================================================================

/// A validator backed by a compiled schema.
///
/// The candidate is serialized to a JSON value and handed to the violation
/// function. Zero messages mean the candidate is valid; exactly one becomes
/// a leaf error; several become a conjunction node, since schema engines
/// report independent constraint violations conjunctively.
///
/// Validators are total: a candidate that cannot be represented as JSON is
/// reported as a validation failure rather than a panic.
pub struct SchemaValidator<T: ?Sized> {
    violations: ViolationFn,
    _marker: PhantomData<fn(&T)>,
}

impl<T: ?Sized> SchemaValidator<T> {
    /// Wraps an already-compiled violation function.
    #[must_use]
    pub fn new(violations: ViolationFn) -> Self {
        Self {
            violations,
            _marker: PhantomData,
        }
    }
}

impl<T: ?Sized> fmt::Debug for SchemaValidator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaValidator").finish_non_exhaustive()
    }
}

impl<T: Serialize + ?Sized> Validate for SchemaValidator<T> {
    type Input = T;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let candidate = match serde_json::to_value(input) {
            Ok(value) => value,
            Err(error) => {
                return Err(ValidationError::message(format!(
                    "candidate is not representable as JSON: {error}"
                )));
            }
        };
        let mut messages = (self.violations)(&candidate);
        match messages.len() {
            0 => Ok(()),
            1 => Err(ValidationError::message(messages.remove(0))),
            _ => Err(ValidationError::all_of(
                messages.into_iter().map(ValidationError::message).collect(),
            )),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // A stub dialect: the "schema" is a list of required substrings.
    struct SubstringCompiler;

    impl SchemaCompiler for SubstringCompiler {
        fn compile(&self, schema: &serde_json::Value) -> Result<ViolationFn, SchemaError> {
            let required: Vec<String> = match schema.as_array() {
                Some(items) => items
                    .iter()
                    .map(|item| match item.as_str() {
                        Some(text) => Ok(text.to_string()),
                        None => Err(SchemaError::InvalidDocument(
                            "expected an array of strings".to_string(),
                        )),
                    })
                    .collect::<Result<_, _>>()?,
                None => {
                    return Err(SchemaError::InvalidDocument(
                        "expected an array of strings".to_string(),
                    ));
                }
            };
            Ok(Box::new(move |candidate| {
                let text = candidate.as_str().unwrap_or_default();
                required
                    .iter()
                    .filter(|needle| !text.contains(needle.as_str()))
                    .map(|needle| format!("should contain {needle}"))
                    .collect()
            }))
        }
    }

    fn validator_for(schema: serde_json::Value) -> SchemaValidator<String> {
        let violations = SubstringCompiler.compile(&schema).unwrap();
        SchemaValidator::new(violations)
    }

    #[test]
    fn no_messages_is_valid() {
        let validator = validator_for(serde_json::json!(["a", "b"]));
        assert!(validator.validate(&"abc".to_string()).is_ok());
    }

    #[test]
    fn one_message_becomes_a_leaf() {
        let validator = validator_for(serde_json::json!(["a", "b"]));
        let error = validator.validate(&"ac".to_string()).unwrap_err();
        assert_eq!(error, ValidationError::message("should contain b"));
    }

    #[test]
    fn several_messages_become_a_conjunction() {
        let validator = validator_for(serde_json::json!(["a", "b"]));
        let error = validator.validate(&"xyz".to_string()).unwrap_err();
        assert_eq!(
            error,
            ValidationError::all_of(vec![
                ValidationError::message("should contain a"),
                ValidationError::message("should contain b"),
            ])
        );
    }

    #[test]
    fn malformed_schema_propagates_unchanged() {
        let result = SubstringCompiler.compile(&serde_json::json!({"not": "an array"}));
        assert!(matches!(result, Err(SchemaError::InvalidDocument(_))));
    }
}
