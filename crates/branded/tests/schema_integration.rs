//! Integration tests for schema-backed handlers.
//!
//! The schema dialect here is JSON Schema via [`JsonSchemaCompiler`]; the
//! compiler object is constructed once and passed explicitly to every
//! handler it compiles.

use branded::prelude::*;
use pretty_assertions::assert_eq;
use serde::Serialize;
use serde_json::json;

enum PhoneNumber {}
enum Transfer {}

// ============================================================================
// PHONE NUMBER SCENARIO
// ============================================================================

#[test]
fn schema_handler_brands_a_matching_candidate() {
    let compiler = JsonSchemaCompiler::new();
    let handler = TypeHandler::<String, PhoneNumber>::from_schema(
        &compiler,
        &json!({ "pattern": "^[0-9]{10}$" }),
    )
    .unwrap();

    let phone = handler.cast("0123456789".to_string()).unwrap();
    assert_eq!(phone.into_inner(), "0123456789");
}

#[test]
fn schema_handler_reports_a_single_violation_as_a_leaf() {
    let compiler = JsonSchemaCompiler::new();
    let handler = TypeHandler::<String, PhoneNumber>::from_schema(
        &compiler,
        &json!({ "pattern": "^[0-9]{10}$" }),
    )
    .unwrap();

    let error = handler.cast("123".to_string()).unwrap_err();
    let report = error.validation_error();
    assert!(report.is_message(), "expected a leaf, got: {report:?}");
    assert!(
        report.to_string().contains("^[0-9]{10}$"),
        "report should name the violated pattern: {report}"
    );
    assert_eq!(report, &handler.validate(&"123".to_string()).unwrap_err());
}

#[test]
fn several_violations_become_a_conjunction() {
    let compiler = JsonSchemaCompiler::new();
    let handler = TypeHandler::<String, PhoneNumber>::from_schema(
        &compiler,
        &json!({ "type": "string", "minLength": 4, "pattern": "^[0-9]*$" }),
    )
    .unwrap();

    // "ab" violates both minLength and pattern.
    let error = handler.validate(&"ab".to_string()).unwrap_err();
    assert!(error.is_all(), "expected a conjunction, got: {error:?}");
    assert_eq!(error.leaf_count(), 2);
}

// ============================================================================
// STRUCT CANDIDATES
// ============================================================================

#[derive(Debug, Clone, Serialize)]
struct TransferOrder {
    amount: u64,
    reference: String,
}

#[test]
fn schema_handlers_validate_any_serializable_candidate() {
    let compiler = JsonSchemaCompiler::new();
    let handler = TypeHandler::<TransferOrder, Transfer>::from_schema(
        &compiler,
        &json!({
            "type": "object",
            "properties": {
                "amount": { "minimum": 1 },
                "reference": { "pattern": "^[0-9]{4}$" }
            },
            "required": ["amount", "reference"]
        }),
    )
    .unwrap();

    assert!(handler.is(&TransferOrder {
        amount: 10,
        reference: "2599".to_string(),
    }));

    let error = handler
        .validate(&TransferOrder {
            amount: 10,
            reference: "bad".to_string(),
        })
        .unwrap_err();
    let rendered = error.to_string();
    assert!(
        rendered.contains("/reference"),
        "violation should carry the instance path: {rendered}"
    );
}

// ============================================================================
// COMPILE FAILURES AND COMPOSITION
// ============================================================================

#[test]
fn a_malformed_schema_document_propagates_unchanged() {
    let compiler = JsonSchemaCompiler::new();
    let result = TypeHandler::<String, PhoneNumber>::from_schema(
        &compiler,
        &json!({ "pattern": "[" }),
    );
    assert!(matches!(result, Err(SchemaError::InvalidDocument(_))));
}

#[test]
fn schema_handlers_compose_like_any_other_handler() {
    enum Short {}

    let compiler = JsonSchemaCompiler::new();
    let digits_only = TypeHandler::<String, PhoneNumber>::from_schema(
        &compiler,
        &json!({ "pattern": "^[0-9]*$" }),
    )
    .unwrap();
    let short = TypeHandler::<String, Short>::new(max_length(4));

    let short_digits = intersection(&digits_only, &short);
    assert!(short_digits.is(&"2599".to_string()));
    assert!(!short_digits.is(&"25999".to_string()));
    assert!(!short_digits.is(&"25a9".to_string()));
}
