//! String length rules.
//!
//! Length is measured in Unicode scalar values (`chars`), not bytes.

crate::validator! {
    /// Rejects the empty string.
    pub NotEmpty for str;
    rule(input) { !input.is_empty() }
    message(input) { "should not be empty" }
    fn not_empty();
}

crate::validator! {
    /// Requires an exact character count.
    pub ExactLength { length: usize } for str;
    rule(self, input) { input.chars().count() == self.length }
    message(self, input) { format!("should be {} characters", self.length) }
    fn exact_length();
}

crate::validator! {
    /// Requires at least a minimum character count.
    pub MinLength { min: usize } for str;
    rule(self, input) { input.chars().count() >= self.min }
    message(self, input) { format!("should be at least {} characters", self.min) }
    fn min_length();
}

crate::validator! {
    /// Requires at most a maximum character count.
    pub MaxLength { max: usize } for str;
    rule(self, input) { input.chars().count() <= self.max }
    message(self, input) { format!("should be at most {} characters", self.max) }
    fn max_length();
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Validate, ValidationError};

    #[test]
    fn not_empty_accepts_whitespace() {
        assert!(not_empty().validate("hello").is_ok());
        assert!(not_empty().validate(" ").is_ok());
        assert!(not_empty().validate("").is_err());
    }

    #[test]
    fn exact_length_boundaries() {
        let validator = exact_length(4);
        assert!(validator.validate("1234").is_ok());
        assert!(validator.validate("123").is_err());
        assert!(validator.validate("12345").is_err());
    }

    #[test]
    fn exact_length_message() {
        let error = exact_length(6).validate("123").unwrap_err();
        assert_eq!(error, ValidationError::message("should be 6 characters"));
    }

    #[test]
    fn min_length_boundaries() {
        let validator = min_length(5);
        assert!(validator.validate("hello").is_ok());
        assert!(validator.validate("hello world").is_ok());
        assert!(validator.validate("hi").is_err());
    }

    #[test]
    fn max_length_boundaries() {
        let validator = max_length(5);
        assert!(validator.validate("hello").is_ok());
        assert!(validator.validate("hi").is_ok());
        assert!(validator.validate("too long").is_err());
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        // "héllo" is 5 chars but 6 bytes.
        assert!(exact_length(5).validate("h\u{e9}llo").is_ok());
        assert!(min_length(3).validate("\u{1f44b}\u{1f30d}").is_err()); // 2 chars
    }

    #[test]
    fn constructors_agree_with_factories() {
        assert_eq!(ExactLength::new(4), exact_length(4));
        assert_eq!(MinLength::new(2), min_length(2));
        assert_eq!(MaxLength::new(9), max_length(9));
    }
}
