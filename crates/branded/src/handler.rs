//! Type handlers - the unit of reuse for one branded type.
//!
//! A [`TypeHandler`] bundles the single validator that defines a brand with
//! the operations derived from it:
//!
//! | Operation | Failure behavior |
//! |---|---|
//! | [`validate`](TypeHandler::validate) | structured [`ValidationError`] by value |
//! | [`is`](TypeHandler::is) | `false` (boolean guard, no explanation) |
//! | [`create`](TypeHandler::create) | `None` |
//! | [`cast`](TypeHandler::cast) | [`CastError`] - the loud path for caller-asserted invariants |
//! | [`cast_array`](TypeHandler::cast_array) | first failing element's [`CastError`], no partial result |
//!
//! Handlers are immutable, `Clone + Send + Sync` (the validator is held
//! behind an `Arc`), and compose pairwise: [`intersection`] and [`union`]
//! allocate a new handler whose brand is the type-level [`Meet`] / [`Join`]
//! of the operands' brands, leaving the operands untouched. A handler may
//! therefore be reused as a shared leaf in arbitrarily many compositions.

use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::Serialize;

use crate::brand::{Branded, Join, Meet};
use crate::combinators::{And, Or};
use crate::foundation::{Validate, ValidationError};
use crate::schema::{SchemaCompiler, SchemaError, SchemaValidator};

/// Character cap for the candidate preview embedded in a [`CastError`].
const PREVIEW_LIMIT: usize = 50;

type SharedValidator<T> = Arc<dyn Validate<Input = T> + Send + Sync>;

// ============================================================================
// CAST ERROR
// ============================================================================

/// The failure signal of the `cast` family.
///
/// Where [`create`](TypeHandler::create) collapses a validation failure to
/// absence, `cast` converts it into this dedicated error so "this must
/// already be valid" assumptions fail loudly. It carries a truncated
/// rendering of the offending candidate and the full structured
/// [`ValidationError`].
#[derive(Debug, Clone, thiserror::Error)]
#[error("candidate {candidate} does not satisfy its validator: {error}")]
pub struct CastError {
    candidate: String,
    #[source]
    error: ValidationError,
}

impl CastError {
    /// The truncated `Debug` rendering of the rejected candidate.
    #[must_use]
    pub fn candidate(&self) -> &str {
        &self.candidate
    }

    /// The structured reason the candidate was rejected.
    #[must_use]
    pub fn validation_error(&self) -> &ValidationError {
        &self.error
    }

    /// Consumes the cast error, returning the validation error.
    #[must_use]
    pub fn into_validation_error(self) -> ValidationError {
        self.error
    }
}

fn preview(candidate: &impl fmt::Debug) -> String {
    let rendered = format!("{candidate:?}");
    if rendered.chars().count() < PREVIEW_LIMIT {
        rendered
    } else {
        let mut truncated: String = rendered.chars().take(PREVIEW_LIMIT).collect();
        truncated.push_str("...");
        truncated
    }
}

// ============================================================================
// TYPE HANDLER
// ============================================================================

/// The bundle of operations handling one branded type.
///
/// `T` is the base type of candidates; `Tag` is the brand minted on
/// success. The handler owns exactly one (type-erased) validator and no
/// other state; it holds no reference back to the values it has validated.
///
/// # Examples
///
/// ```rust,ignore
/// use branded::prelude::*;
///
/// enum PhoneNumber {}
///
/// let handler = TypeHandler::<String, PhoneNumber>::new(digits().and(exact_length(10)));
/// let phone = handler.cast("0123456789".to_string())?;
/// ```
pub struct TypeHandler<T, Tag> {
    validator: SharedValidator<T>,
    _tag: PhantomData<fn() -> Tag>,
}

impl<T, Tag> Clone for TypeHandler<T, Tag> {
    fn clone(&self) -> Self {
        Self {
            validator: Arc::clone(&self.validator),
            _tag: PhantomData,
        }
    }
}

impl<T, Tag> fmt::Debug for TypeHandler<T, Tag> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeHandler").finish_non_exhaustive()
    }
}

// Adapts a rule written against a borrowed view (`str`, `[U]`) to the owned
// candidate type the handler traffics in (`String`, `Vec<U>`).
struct BorrowRule<V, T> {
    rule: V,
    _marker: PhantomData<fn(&T)>,
}

impl<V, T> Validate for BorrowRule<V, T>
where
    V: Validate,
    T: Borrow<V::Input>,
{
    type Input = T;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.rule.validate(input.borrow())
    }
}

impl<T: 'static, Tag> TypeHandler<T, Tag> {
    /// Creates a handler from a hand-written rule.
    ///
    /// The rule may be written against the owned candidate type or any view
    /// of it the candidate can [`Borrow`]: a `str` rule handles `String`
    /// candidates, a `[U]` rule handles `Vec<U>` candidates.
    pub fn new<V>(rule: V) -> Self
    where
        V: Validate + Send + Sync + 'static,
        T: Borrow<V::Input>,
    {
        Self::from_shared(Arc::new(BorrowRule {
            rule,
            _marker: PhantomData,
        }))
    }

    fn from_shared(validator: SharedValidator<T>) -> Self {
        Self {
            validator,
            _tag: PhantomData,
        }
    }

    /// Creates a handler from a declarative schema.
    ///
    /// The schema is compiled exactly once, by the explicitly passed
    /// compiler; a malformed schema document is a programmer error and its
    /// [`SchemaError`] is propagated unchanged.
    pub fn from_schema<C>(compiler: &C, schema: &serde_json::Value) -> Result<Self, SchemaError>
    where
        C: SchemaCompiler + ?Sized,
        T: Serialize,
    {
        let violations = compiler.compile(schema)?;
        Ok(Self::new(SchemaValidator::new(violations)))
    }

    /// Runs the handler's validator, reporting why a candidate is outside
    /// the branded type.
    pub fn validate(&self, candidate: &T) -> Result<(), ValidationError> {
        self.validator.validate(candidate)
    }

    /// The boolean type guard: membership test without explanation.
    pub fn is(&self, candidate: &T) -> bool {
        self.validator.is_valid(candidate)
    }

    /// Safe conversion: brands the candidate, or reports absence.
    ///
    /// For call sites that want to branch on failure without caring why.
    pub fn create(&self, candidate: T) -> Option<Branded<T, Tag>> {
        if self.is(&candidate) {
            Some(Branded::from_validated(candidate))
        } else {
            None
        }
    }

    /// Fail-loud conversion: brands the candidate, or signals a
    /// [`CastError`].
    ///
    /// For call sites that have already established the invariant and want
    /// an unmissable signal on violation: top-level wiring, tests,
    /// "should never happen" checks.
    pub fn cast(&self, candidate: T) -> Result<Branded<T, Tag>, CastError>
    where
        T: fmt::Debug,
    {
        match self.validator.validate(&candidate) {
            Ok(()) => Ok(Branded::from_validated(candidate)),
            Err(error) => Err(CastError {
                candidate: preview(&candidate),
                error,
            }),
        }
    }

    /// Lifts [`cast`](Self::cast) over a sequence of candidates.
    ///
    /// Succeeds with every element branded, in order. Fails at the first
    /// element `cast` rejects, propagating that element's [`CastError`];
    /// later elements are not examined and no partial result is returned.
    pub fn cast_array<I>(&self, candidates: I) -> Result<Vec<Branded<T, Tag>>, CastError>
    where
        I: IntoIterator<Item = T>,
        T: fmt::Debug,
    {
        candidates
            .into_iter()
            .map(|candidate| self.cast(candidate))
            .collect()
    }

    /// Merges two handlers into the handler of their intersection brand.
    ///
    /// The new validator is the AND-merge of the operands' validators; the
    /// guard/create/cast quartet is regenerated from it. Operands are
    /// borrowed, never mutated.
    pub fn intersect<Other>(&self, other: &TypeHandler<T, Other>) -> TypeHandler<T, Meet<Tag, Other>> {
        TypeHandler::from_shared(Arc::new(And::new(
            Arc::clone(&self.validator),
            Arc::clone(&other.validator),
        )))
    }

    /// Merges two handlers into the handler of their union brand.
    ///
    /// The new validator is the OR-merge of the operands' validators.
    pub fn union<Other>(&self, other: &TypeHandler<T, Other>) -> TypeHandler<T, Join<Tag, Other>> {
        TypeHandler::from_shared(Arc::new(Or::new(
            Arc::clone(&self.validator),
            Arc::clone(&other.validator),
        )))
    }
}

impl<T: 'static, Tag> Validate for TypeHandler<T, Tag> {
    type Input = T;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.validator.validate(input)
    }
}

/// Merges two handlers by intersection: a candidate belongs to the result
/// iff it passes every constituent. See [`TypeHandler::intersect`].
pub fn intersection<T: 'static, A, B>(
    left: &TypeHandler<T, A>,
    right: &TypeHandler<T, B>,
) -> TypeHandler<T, Meet<A, B>> {
    left.intersect(right)
}

/// Merges two handlers by union: a candidate belongs to the result iff it
/// satisfies at least one constituent. See [`TypeHandler::union`].
pub fn union<T: 'static, A, B>(
    left: &TypeHandler<T, A>,
    right: &TypeHandler<T, B>,
) -> TypeHandler<T, Join<A, B>> {
    left.union(right)
}

// ============================================================================
// TESTS
// ============================================================================
