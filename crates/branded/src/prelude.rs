//! Prelude module for convenient imports.
//!
//! Provides a single `use branded::prelude::*;` import that brings in all
//! commonly needed traits, types, validators, and combinators.
//!
//! # Examples
//!
//! ```rust,ignore
//! use branded::prelude::*;
//!
//! enum PhoneNumber {}
//!
//! let handler = TypeHandler::<String, PhoneNumber>::new(digits().and(exact_length(10)));
//! let phone = handler.cast("0123456789".to_string())?;
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{FnRule, Validate, ValidateExt, ValidationError, from_fn};

// ============================================================================
// BRANDS AND HANDLERS
// ============================================================================

pub use crate::brand::{Branded, Join, Meet};
pub use crate::handler::{CastError, TypeHandler, intersection, union};

// ============================================================================
// VALIDATORS: All built-in rules
// ============================================================================

pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{And, AndAll, Or, OrAny, and, and_all, or, or_any};

// ============================================================================
// SCHEMA BOUNDARY
// ============================================================================

pub use crate::schema::{SchemaCompiler, SchemaError, SchemaValidator, ViolationFn};

#[cfg(feature = "json-schema")]
pub use crate::schema::JsonSchemaCompiler;
