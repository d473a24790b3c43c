//! JSON Schema dialect of the [`SchemaCompiler`] boundary.
//!
//! Backed by the `jsonschema` crate. Each violation is rendered as
//! `"<instance path> <message>"`, with the path omitted for violations at
//! the candidate root.

use tracing::{debug, warn};

use super::{SchemaCompiler, SchemaError, ViolationFn};

/// The JSON Schema compiler.
///
/// Stateless and `Copy`; construct one at startup and thread it through
/// handler construction.
///
/// # Examples
///
/// ```rust,ignore
/// use branded::prelude::*;
/// use serde_json::json;
///
/// enum PhoneNumber {}
///
/// let compiler = JsonSchemaCompiler::new();
/// let handler = TypeHandler::<String, PhoneNumber>::from_schema(
///     &compiler,
///     &json!({ "pattern": "^[0-9]{10}$" }),
/// )?;
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSchemaCompiler;

impl JsonSchemaCompiler {
    /// Creates the compiler.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SchemaCompiler for JsonSchemaCompiler {
    fn compile(&self, schema: &serde_json::Value) -> Result<ViolationFn, SchemaError> {
        let compiled = match jsonschema::validator_for(schema) {
            Ok(compiled) => compiled,
            Err(error) => {
                warn!(%error, "schema document rejected");
                return Err(SchemaError::InvalidDocument(error.to_string()));
            }
        };
        debug!("schema document compiled");
        Ok(Box::new(move |candidate| {
            compiled
                .iter_errors(candidate)
                .map(|error| {
                    let location = error.instance_path.to_string();
                    if location.is_empty() {
                        error.to_string()
                    } else {
                        format!("{location} {error}")
                    }
                })
                .collect()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn compiles_and_reports_no_violations_for_a_member() {
        let violations = JsonSchemaCompiler::new()
            .compile(&json!({ "pattern": "^[0-9]{10}$" }))
            .unwrap();
        assert!(violations(&json!("0123456789")).is_empty());
    }

    #[test]
    fn reports_the_violated_rule() {
        let violations = JsonSchemaCompiler::new()
            .compile(&json!({ "pattern": "^[0-9]{10}$" }))
            .unwrap();
        let messages = violations(&json!("123"));
        assert_eq!(messages.len(), 1);
        assert!(
            messages[0].contains("^[0-9]{10}$"),
            "message should name the pattern: {}",
            messages[0]
        );
    }

    #[test]
    fn reports_nested_violations_with_their_path() {
        let violations = JsonSchemaCompiler::new()
            .compile(&json!({
                "type": "object",
                "properties": {
                    "code": { "pattern": "^[0-9]{4}$" }
                }
            }))
            .unwrap();
        let messages = violations(&json!({ "code": "abc" }));
        assert_eq!(messages.len(), 1);
        assert!(
            messages[0].contains("/code"),
            "message should carry the instance path: {}",
            messages[0]
        );
    }

    #[test]
    fn rejects_a_malformed_document() {
        // "[" is not a valid regular expression, so the schema itself is bad.
        let result = JsonSchemaCompiler::new().compile(&json!({ "pattern": "[" }));
        assert!(matches!(result, Err(SchemaError::InvalidDocument(_))));
    }
}
