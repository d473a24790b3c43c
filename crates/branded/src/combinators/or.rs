//! OR combinator - logical disjunction of validators
//!
//! This module provides the [`Or`] combinator which merges validators with
//! logical OR semantics - at least one constituent must pass for the merged
//! validator to succeed.
//!
//! Every constituent always runs, even once one has succeeded: validators
//! are side-effect-free, so the extra evaluations cannot be observed, and a
//! failing merge then reports every alternative's error in a deterministic
//! order.
//!
//! # Examples
//!
//! ```rust,ignore
//! use branded::combinators::Or;
//! use branded::foundation::Validate;
//!
//! let validator = Or::new(exact_length(4), exact_length(6));
//! assert!(validator.validate("1234").is_ok());
//! assert!(validator.validate("123456").is_ok());
//! assert!(validator.validate("12345").is_err()); // neither 4 nor 6
//! ```

use crate::foundation::{Validate, ValidationError};

/// Merges two validators with logical OR.
///
/// If either validator passes the merged validator succeeds. If both fail
/// the merged error is a disjunction node holding both errors, left first,
/// so the report shows every alternative's reason.
///
/// # Type Parameters
///
/// * `L` - The left (first) validator type
/// * `R` - The right (second) validator type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    /// The left (first) validator.
    pub(crate) left: L,
    /// The right (second) validator.
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match (self.left.validate(input), self.right.validate(input)) {
            (Err(left), Err(right)) => Err(ValidationError::any_of(vec![left, right])),
            _ => Ok(()),
        }
    }
}

impl<L, R> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    /// Chains another validator with OR logic.
    pub fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = L::Input>,
    {
        Or::new(self, other)
    }
}

/// Creates an `Or` combinator from two validators.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Or::new(left, right)
}

/// Creates an [`OrAny`] combinator from a vector of validators.
///
/// This is useful when the number of alternatives is only known at runtime.
#[must_use]
pub fn or_any<V>(validators: Vec<V>) -> OrAny<V>
where
    V: Validate,
{
    OrAny { validators }
}

/// Merges a dynamic number of validators with logical OR.
///
/// Every validator runs. The merge succeeds as soon as any constituent
/// does; when all fail the errors are wrapped in a disjunction node in
/// input order. An empty `OrAny` is unsatisfiable (there is no
/// alternative a candidate could meet) and rejects with a leaf error.
#[derive(Debug, Clone)]
pub struct OrAny<V> {
    validators: Vec<V>,
}

impl<V> OrAny<V> {
    /// The alternative validators, in merge order.
    pub fn validators(&self) -> &[V] {
        &self.validators
    }
}

impl<V> Validate for OrAny<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let mut failures = Vec::with_capacity(self.validators.len());
        for validator in &self.validators {
            if let Err(error) = validator.validate(input) {
                failures.push(error);
            }
        }
        if failures.len() < self.validators.len() {
            return Ok(());
        }
        match ValidationError::disjoin(failures) {
            Some(error) => Err(error),
            None => Err(ValidationError::message("no alternatives to satisfy")),
        }
    }
}
