//! Collection rules.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use crate::foundation::{Validate, ValidationError};

/// Requires every element of a slice to be distinct.
pub struct UniqueItems<T> {
    _marker: PhantomData<fn(&T)>,
}

impl<T> UniqueItems<T> {
    /// Creates the rule.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

// Manual impls: derives would bound `T`, which is phantom.

impl<T> Default for UniqueItems<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for UniqueItems<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for UniqueItems<T> {}

impl<T> fmt::Debug for UniqueItems<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UniqueItems")
    }
}

impl<T: Eq + Hash> Validate for UniqueItems<T> {
    type Input = [T];

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let mut seen = HashSet::with_capacity(input.len());
        if input.iter().all(|item| seen.insert(item)) {
            Ok(())
        } else {
            Err(ValidationError::message("should contain only unique values"))
        }
    }
}

/// Creates a [`UniqueItems`] rule.
#[must_use]
pub fn unique_items<T>() -> UniqueItems<T> {
    UniqueItems::new()
}

// ============================================================================
// TESTS
// ============================================================================
