//! Macros for creating and merging validators with minimal boilerplate.
//!
//! - [`validator!`]: complete rule validator (struct + `Validate` impl +
//!   factory fn) from a predicate and a leaf message
//! - [`all_of!`]: AND-merge a fixed list of validators
//! - [`any_of!`]: OR-merge a fixed list of validators

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a complete rule validator: struct definition, [`Validate`]
/// implementation, constructor, and factory function.
///
/// The `rule` block is the membership predicate; the `message` block
/// produces the leaf message reported when the rule does not hold.
/// `#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]` is always applied.
///
/// # Variants
///
/// **Unit validator** (zero-sized, no fields):
/// ```rust,ignore
/// validator! {
///     pub NotEmpty for str;
///     rule(input) { !input.is_empty() }
///     message(input) { "should not be empty" }
///     fn not_empty();
/// }
/// ```
///
/// **Struct with fields** (`new` and the factory take all fields, in
/// order):
/// ```rust,ignore
/// validator! {
///     pub ExactLength { length: usize } for str;
///     rule(self, input) { input.chars().count() == self.length }
///     message(self, input) { format!("should be {} characters", self.length) }
///     fn exact_length();
/// }
/// ```
///
/// [`Validate`]: crate::foundation::Validate
#[macro_export]
macro_rules! validator {
    // ── Unit validator (no fields) + factory fn ──────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        message($minp:ident) $msg:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(
                &self,
                $inp: &Self::Input,
            ) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $minp = $inp;
                    Err($crate::foundation::ValidationError::message($msg))
                }
            }
        }

        #[must_use]
        $vis const fn $factory() -> $name {
            $name
        }
    };

    // ── Struct with fields; `new` and the factory take every field ───────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        message($self2:ident, $minp:ident) $msg:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub const fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(
                &$self_,
                $inp: &Self::Input,
            ) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $minp = $inp;
                    Err($crate::foundation::ValidationError::message($msg))
                }
            }
        }

        #[must_use]
        $vis fn $factory($($field: $fty),+) -> $name {
            $name::new($($field),+)
        }
    };
}

// ============================================================================
// MERGE MACROS
// ============================================================================

/// AND-merges a fixed list of validators, grouping left:
/// `all_of!(a, b, c)` is `And::new(And::new(a, b), c)`.
///
/// A single operand is returned unchanged (AND-merge identity).
#[macro_export]
macro_rules! all_of {
    ($only:expr $(,)?) => { $only };
    ($first:expr, $($rest:expr),+ $(,)?) => {{
        let merged = $first;
        $(let merged = $crate::combinators::And::new(merged, $rest);)+
        merged
    }};
}

/// OR-merges a fixed list of validators, grouping left:
/// `any_of!(a, b, c)` is `Or::new(Or::new(a, b), c)`.
///
/// A single operand is returned unchanged.
#[macro_export]
macro_rules! any_of {
    ($only:expr $(,)?) => { $only };
    ($first:expr, $($rest:expr),+ $(,)?) => {{
        let merged = $first;
        $(let merged = $crate::combinators::Or::new(merged, $rest);)+
        merged
    }};
}
