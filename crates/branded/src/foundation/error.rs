//! The structured validation error value.
//!
//! A validator reports *why* a candidate failed as a small tree: leaf
//! messages, conjunction nodes (everything listed must be fixed), and
//! disjunction nodes (every alternative was tried and failed). Absence of an
//! error, `Ok(())` from [`Validate::validate`](crate::foundation::Validate),
//! is the sole representation of validity; there is no separate boolean.
//!
//! Leaf payloads use `Cow<'static, str>` for zero-allocation in the common
//! case of messages known at compile time.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A recursive validation error.
///
/// # Invariant
///
/// `All` and `Any` nodes are never empty. The smart constructors
/// ([`conjoin`](Self::conjoin), [`disjoin`](Self::disjoin)) uphold this;
/// [`all_of`](Self::all_of) / [`any_of`](Self::any_of) debug-assert it.
///
/// # Examples
///
/// ```rust,ignore
/// use branded::foundation::ValidationError;
///
/// let error = ValidationError::all_of(vec![
///     ValidationError::message("should contain only digits"),
///     ValidationError::any_of(vec![
///         ValidationError::message("should be 4 characters"),
///         ValidationError::message("should be 6 characters"),
///     ]),
/// ]);
/// assert_eq!(error.leaf_count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    /// A single rule violation.
    Message(Cow<'static, str>),

    /// A conjunction: every child must be resolved for the candidate to
    /// become valid.
    All(Vec<ValidationError>),

    /// A disjunction that did not hold: the candidate had to satisfy at
    /// least one alternative and satisfied none.
    Any(Vec<ValidationError>),
}

impl ValidationError {
    /// Creates a leaf error.
    ///
    /// Static strings do not allocate; dynamic messages allocate once.
    pub fn message(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Message(message.into())
    }

    /// Creates a conjunction node from the given sub-errors.
    ///
    /// Callers that may hold zero or one error should prefer
    /// [`conjoin`](Self::conjoin), which applies the merge rules instead of
    /// wrapping unconditionally.
    #[must_use]
    pub fn all_of(errors: Vec<ValidationError>) -> Self {
        debug_assert!(!errors.is_empty(), "All node must not be empty");
        Self::All(errors)
    }

    /// Creates a disjunction node from the given sub-errors.
    #[must_use]
    pub fn any_of(errors: Vec<ValidationError>) -> Self {
        debug_assert!(!errors.is_empty(), "Any node must not be empty");
        Self::Any(errors)
    }

    /// Merges the failures of a conjunction.
    ///
    /// No failures means the conjunction held (`None`). A lone failure is
    /// returned unchanged, with no wrapper around the singleton. Two or
    /// more failures become an `All` node in input order.
    #[must_use]
    pub fn conjoin(mut errors: Vec<ValidationError>) -> Option<Self> {
        match errors.len() {
            0 => None,
            1 => Some(errors.remove(0)),
            _ => Some(Self::All(errors)),
        }
    }

    /// Wraps the failures of a disjunction whose alternatives all failed.
    ///
    /// Unlike [`conjoin`](Self::conjoin) a lone failure is still wrapped:
    /// the `Any` node records that the message is one of several acceptable
    /// outcomes, not an unconditional requirement. `None` only for an empty
    /// input, which callers must handle themselves (an empty disjunction is
    /// unsatisfiable but has no alternatives to report).
    #[must_use]
    pub fn disjoin(errors: Vec<ValidationError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self::Any(errors))
        }
    }

    /// Returns true for a leaf error.
    #[must_use]
    pub fn is_message(&self) -> bool {
        matches!(self, Self::Message(_))
    }

    /// Returns true for a conjunction node.
    #[must_use]
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All(_))
    }

    /// Returns true for a disjunction node.
    #[must_use]
    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any(_))
    }

    /// All leaf messages, depth-first, in report order.
    #[must_use]
    pub fn leaves(&self) -> Vec<&str> {
        match self {
            Self::Message(message) => vec![message.as_ref()],
            Self::All(errors) | Self::Any(errors) => {
                errors.iter().flat_map(ValidationError::leaves).collect()
            }
        }
    }

    /// Number of leaf messages in the tree.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Message(_) => 1,
            Self::All(errors) | Self::Any(errors) => {
                errors.iter().map(ValidationError::leaf_count).sum()
            }
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(message) => f.write_str(message),
            Self::All(errors) => write_group(f, errors, " AND "),
            Self::Any(errors) => write_group(f, errors, " OR "),
        }
    }
}

fn write_group(
    f: &mut fmt::Formatter<'_>,
    errors: &[ValidationError],
    separator: &str,
) -> fmt::Result {
    f.write_str("(")?;
    for (index, error) in errors.iter().enumerate() {
        if index > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{error}")?;
    }
    f.write_str(")")
}

impl std::error::Error for ValidationError {}

// ============================================================================
// TESTS
// ============================================================================
