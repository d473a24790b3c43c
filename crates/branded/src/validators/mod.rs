//! Built-in rule validators.
//!
//! Hand-written rules with leaf error messages, ready to feed into handlers
//! and combinators:
//!
//! - **Length**: [`ExactLength`], [`MinLength`], [`MaxLength`], [`NotEmpty`]
//! - **Pattern**: [`Digits`], [`Matches`]
//! - **Collection**: [`UniqueItems`]
//!
//! Each validator has a lowercase factory function (`exact_length(4)`,
//! `digits()`, …) for fluent composition.

pub mod collection;
pub mod length;
pub mod pattern;

pub use collection::{UniqueItems, unique_items};
pub use length::{
    ExactLength, MaxLength, MinLength, NotEmpty, exact_length, max_length, min_length, not_empty,
};
pub use pattern::{Digits, Matches, digits, matches};
