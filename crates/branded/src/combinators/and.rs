//! AND combinator - logical conjunction of validators
//!
//! This module provides the [`And`] combinator which merges validators with
//! logical AND semantics - every constituent must pass for the merged
//! validator to succeed.
//!
//! Every constituent always runs, so the merged error reports *all*
//! violations, not just the first. A lone failure is returned unchanged; two
//! or more become a conjunction node in input order.
//!
//! # Examples
//!
//! ```rust,ignore
//! use branded::combinators::And;
//! use branded::foundation::Validate;
//!
//! let validator = And::new(digits(), exact_length(4));
//! assert!(validator.validate("1234").is_ok());
//! assert!(validator.validate("12a4").is_err()); // digits violation, unwrapped
//! assert!(validator.validate("12a").is_err());  // both violations, as a conjunction
//! ```

use crate::foundation::{Validate, ValidationError};

/// Merges two validators with logical AND.
///
/// Both validators always run. If exactly one fails its error is returned
/// unchanged, with no wrapper around the singleton failure. If both fail the
/// merged error is a conjunction node holding both errors, left first.
///
/// # Type Parameters
///
/// * `L` - The left (first) validator type
/// * `R` - The right (second) validator type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    /// The left (first) validator.
    pub(crate) left: L,
    /// The right (second) validator.
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
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

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match (self.left.validate(input), self.right.validate(input)) {
            (Ok(()), Ok(())) => Ok(()),
            (Err(error), Ok(())) | (Ok(()), Err(error)) => Err(error),
            (Err(left), Err(right)) => Err(ValidationError::all_of(vec![left, right])),
        }
    }
}

impl<L, R> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    /// Chains another validator with AND logic.
    pub fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = L::Input>,
    {
        And::new(self, other)
    }
}

/// Creates an `And` combinator from two validators.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}

/// Creates an [`AndAll`] combinator from a vector of validators.
///
/// This is useful when the number of conjuncts is only known at runtime.
/// An empty vector is vacuously valid.
#[must_use]
pub fn and_all<V>(validators: Vec<V>) -> AndAll<V>
where
    V: Validate,
{
    AndAll { validators }
}

/// Merges a dynamic number of validators with logical AND.
///
/// Every validator runs; the failures (in input order) are merged with the
/// same shape rules as [`And`]: none ⇒ valid, one ⇒ that error unchanged,
/// several ⇒ a conjunction node. A single-element `AndAll` therefore
/// behaves exactly as its one constituent.
#[derive(Debug, Clone)]
pub struct AndAll<V> {
    validators: Vec<V>,
}

impl<V> AndAll<V> {
    /// The constituent validators, in merge order.
    pub fn validators(&self) -> &[V] {
        &self.validators
    }
}

impl<V> Validate for AndAll<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let failures: Vec<ValidationError> = self
            .validators
            .iter()
            .filter_map(|validator| validator.validate(input).err())
            .collect();
        match ValidationError::conjoin(failures) {
            None => Ok(()),
            Some(error) => Err(error),
        }
    }
}
