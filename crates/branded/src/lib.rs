//! # branded
//!
//! Branded (nominal) types backed by runtime validation: "make illegal
//! states unrepresentable" at both compile time and run time.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use branded::prelude::*;
//!
//! enum PhoneNumber {}
//!
//! let handler = TypeHandler::<String, PhoneNumber>::new(digits().and(exact_length(10)));
//!
//! // Safe conversion: absence on failure.
//! assert!(handler.create("012345".to_string()).is_none());
//!
//! // Fail-loud conversion for already-established invariants.
//! let phone: Branded<String, PhoneNumber> = handler.cast("0123456789".to_string())?;
//! ```
//!
//! ## Building Blocks
//!
//! - [`Branded<T, Tag>`](brand::Branded): zero-cost nominal wrapper,
//!   minted only through a handler (or the documented
//!   [`unchecked`](brand::Branded::unchecked) bypass).
//! - [`Validate`](foundation::Validate): pure `candidate ->
//!   Result<(), ValidationError>` rules; hand-written, macro-generated
//!   ([`validator!`]), or compiled from a schema
//!   ([`schema::SchemaCompiler`]).
//! - [`TypeHandler`](handler::TypeHandler): the reusable bundle
//!   {validator, guard, create, cast, cast_array} for one brand.
//! - [`intersection`](handler::intersection) /
//!   [`union`](handler::union): merge handlers while preserving both the
//!   structured error value and the type-level brand algebra
//!   ([`Meet`](brand::Meet) / [`Join`](brand::Join)).

pub mod brand;
pub mod combinators;
pub mod foundation;
pub mod handler;
mod macros;
pub mod prelude;
pub mod schema;
pub mod validators;
