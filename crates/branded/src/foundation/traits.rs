//! Core traits for the validation system.
//!
//! [`Validate`] is the single source of truth for a refined type's
//! membership: a pure, total function from a candidate to a structured
//! outcome. [`ValidateExt`] layers the fluent combinator API on top of it.

use std::borrow::Cow;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators implement.
///
/// A validator is deterministic, total for inputs of its declared type
/// (it never panics for them; malformed data *outside* the declared type
/// is a caller error, not a validator error), and free of side effects.
///
/// # Type Parameters
///
/// * `Input` - The type being validated (can be `?Sized` for DSTs like `str`)
///
/// # Examples
///
/// ```rust,ignore
/// use branded::foundation::{Validate, ValidationError};
///
/// struct ExactLength {
///     length: usize,
/// }
///
/// impl Validate for ExactLength {
///     type Input = str;
///
///     fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
///         if input.chars().count() == self.length {
///             Ok(())
///         } else {
///             Err(ValidationError::message(format!(
///                 "should be {} characters",
///                 self.length
///             )))
///         }
///     }
/// }
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` types like `str` and `[T]` to write rules against
    /// borrowed views rather than owned values.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// Returns `Ok(())` when the candidate is a member of the refined type;
    /// the returned [`ValidationError`] otherwise explains every reason it
    /// is not.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// The boolean type guard derived from this validator.
    ///
    /// Used purely for narrowing and branching; it carries no information
    /// about *why* a candidate failed; that is [`validate`](Self::validate)'s
    /// job.
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}

// Forwarding impls so validators compose behind references and smart
// pointers; `Arc<dyn Validate>` is how `TypeHandler` erases its rule.

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Arc<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for every [`Validate`] type.
///
/// # Examples
///
/// ```rust,ignore
/// use branded::prelude::*;
///
/// let validator = digits().and(min_length(4)).and(max_length(10));
/// assert!(validator.validate("123456").is_ok());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// Both validators always run; a lone failure is reported unchanged and
    /// a double failure as a conjunction node.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Combines two validators with logical OR.
    ///
    /// Both validators always run; the merged validator succeeds when at
    /// least one of them does, and otherwise reports every alternative's
    /// failure.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }
}

// Automatically implement ValidateExt for all Validate implementations
impl<T: Validate> ValidateExt for T {}

// ============================================================================
// FUNCTION RULES
// ============================================================================

/// A validator wrapping a plain function.
///
/// The function reports `Some(message)` on violation, `None` on success:
/// the hand-written-rule construction path, where the author controls
/// message granularity and no aggregation is applied.
pub struct FnRule<T: ?Sized, F> {
    func: F,
    _marker: PhantomData<fn(&T)>,
}

impl<T: ?Sized, F> std::fmt::Debug for FnRule<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnRule").finish_non_exhaustive()
    }
}

impl<T: ?Sized, F> Validate for FnRule<T, F>
where
    F: Fn(&T) -> Option<String>,
{
    type Input = T;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match (self.func)(input) {
            None => Ok(()),
            Some(message) => Err(ValidationError::Message(Cow::Owned(message))),
        }
    }
}

/// Wraps a plain function as a validator.
///
/// # Examples
///
/// ```rust,ignore
/// use branded::foundation::{Validate, from_fn};
///
/// let different = from_fn(|pair: &(String, String)| {
///     (pair.0 == pair.1).then(|| "should be two different values".to_string())
/// });
/// ```
pub fn from_fn<T: ?Sized, F>(func: F) -> FnRule<T, F>
where
    F: Fn(&T) -> Option<String>,
{
    FnRule {
        func,
        _marker: PhantomData,
    }
}

// ============================================================================
// IMPORT COMBINATOR TYPES
// ============================================================================

pub use crate::combinators::and::And;
pub use crate::combinators::or::Or;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    struct AlwaysFails;

    impl Validate for AlwaysFails {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Err(ValidationError::message("always fails"))
        }
    }

    #[test]
    fn guard_agrees_with_validator() {
        assert!(AlwaysValid.is_valid("test"));
        assert!(!AlwaysFails.is_valid("test"));
    }

    #[test]
    fn forwarding_through_smart_pointers() {
        let boxed: Box<dyn Validate<Input = str>> = Box::new(AlwaysValid);
        assert!(boxed.validate("test").is_ok());

        let shared: Arc<dyn Validate<Input = str> + Send + Sync> = Arc::new(AlwaysFails);
        assert!(shared.validate("test").is_err());
    }

    #[test]
    fn fn_rule_reports_the_leaf_message() {
        let rule = from_fn(|input: &str| {
            (input.len() > 3).then(|| "should be short".to_string())
        });
        assert!(rule.validate("abc").is_ok());
        assert_eq!(
            rule.validate("abcd").unwrap_err(),
            ValidationError::message("should be short")
        );
    }
}
