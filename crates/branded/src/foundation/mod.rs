//! Core validation types and traits.
//!
//! This module contains the fundamental building blocks of the refinement
//! engine:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`]
//!
//! # Architecture
//!
//! ## 1. Absence of error is validity
//!
//! A validator returns `Result<(), ValidationError>`; there is no separate
//! boolean channel. The derived guard [`Validate::is_valid`] merely
//! collapses the result.
//!
//! ## 2. Structured failure
//!
//! [`ValidationError`] is a tree (leaf messages plus conjunction and
//! disjunction nodes), so a composed validator reports *every* reason a
//! candidate is outside the refined type, in a shape mirroring the
//! composition itself.
//!
//! ## 3. Composition
//!
//! ```rust,ignore
//! let rule = digits().and(exact_length(4).or(exact_length(6)));
//! ```

pub mod error;
pub mod traits;

pub use error::ValidationError;
pub use traits::{FnRule, Validate, ValidateExt, from_fn};
