//! String pattern rules.

use regex::Regex;

use crate::foundation::{Validate, ValidationError};

crate::validator! {
    /// Requires every character to be an ASCII digit.
    ///
    /// The empty string passes vacuously; combine with
    /// [`NotEmpty`](crate::validators::NotEmpty) or a length rule to
    /// exclude it.
    pub Digits for str;
    rule(input) { input.chars().all(|c| c.is_ascii_digit()) }
    message(input) { "should contain only digits" }
    fn digits();
}

/// Requires the candidate to match a regular expression.
///
/// The expression is compiled once, at construction.
#[derive(Debug, Clone)]
pub struct Matches {
    regex: Regex,
}

impl Matches {
    /// Compiles `pattern` into a rule.
    ///
    /// Returns an error for a pattern the regex engine rejects: a
    /// programmer error, reported at construction rather than per
    /// candidate.
    pub fn new(pattern: &str) -> Result<Self, ValidationError> {
        match Regex::new(pattern) {
            Ok(regex) => Ok(Self { regex }),
            Err(error) => Err(ValidationError::message(format!(
                "invalid pattern {pattern}: {error}"
            ))),
        }
    }

    /// Wraps an already-compiled expression.
    #[must_use]
    pub fn from_regex(regex: Regex) -> Self {
        Self { regex }
    }

    /// The source pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

impl Validate for Matches {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if self.regex.is_match(input) {
            Ok(())
        } else {
            Err(ValidationError::message(format!(
                "should match pattern {}",
                self.regex.as_str()
            )))
        }
    }
}

/// Creates a [`Matches`] rule from a pattern.
pub fn matches(pattern: &str) -> Result<Matches, ValidationError> {
    Matches::new(pattern)
}

// ============================================================================
// TESTS
// ============================================================================
