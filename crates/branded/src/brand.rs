//! Nominal (branded) types.
//!
//! [`Branded<T, Tag>`] attaches a compile-time-only marker to a base type.
//! At runtime a branded value is bit-identical to its base representation
//! (`#[repr(transparent)]`, phantom tag); at compile time two brands over
//! the same base are distinct types, so values that share a representation
//! but differ in validated meaning cannot be mixed.
//!
//! Branded values are minted by a successful `create`/`cast` through the
//! corresponding [`TypeHandler`](crate::handler::TypeHandler), or by the
//! explicit [`Branded::unchecked`] escape hatch.
//!
//! Tags are ordinary marker types, conventionally uninhabited:
//!
//! ```rust,ignore
//! enum PhoneNumber {}
//! type Phone = Branded<String, PhoneNumber>;
//! ```
//!
//! [`Meet`] and [`Join`] combine tags the way handler intersection/union
//! combines validators, giving the type-level counterpart of the runtime
//! merge.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::Deref;

use serde::{Serialize, Serializer};

// ============================================================================
// BRANDED VALUE
// ============================================================================

/// A value of the base type `T` refined by the brand `Tag`.
///
/// The wrapper carries no runtime payload: `size_of::<Branded<T, Tag>>()`
/// equals `size_of::<T>()` and every trait impl forwards to the inner
/// value. `Deref` gives read-only access; there is deliberately no
/// `DerefMut` and no `Deserialize`, both of which would let a value drift
/// outside the validated set.
#[repr(transparent)]
pub struct Branded<T, Tag> {
    value: T,
    _tag: PhantomData<fn() -> Tag>,
}

impl<T, Tag> Branded<T, Tag> {
    /// Mints a branded value from a candidate the handler has validated.
    pub(crate) const fn from_validated(value: T) -> Self {
        Self {
            value,
            _tag: PhantomData,
        }
    }

    /// Brands a value **without validating it**.
    ///
    /// This is the deliberate, auditable bypass of the validated
    /// construction path, the moral equivalent of an unchecked type
    /// assertion. It is intentionally permitted and intentionally unsafe in
    /// the "skips the invariant" sense (it is memory-safe). Reach for it in
    /// tests and in call sites that established the invariant by other
    /// means; everywhere else, go through a
    /// [`TypeHandler`](crate::handler::TypeHandler).
    #[must_use]
    pub const fn unchecked(value: T) -> Self {
        Self {
            value,
            _tag: PhantomData,
        }
    }

    /// Consumes the brand, returning the base value.
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Borrows the base value.
    pub const fn get(&self) -> &T {
        &self.value
    }
}

// Manual impls: derives would bound `Tag`, which is phantom.

impl<T: Clone, Tag> Clone for Branded<T, Tag> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            _tag: PhantomData,
        }
    }
}

impl<T: Copy, Tag> Copy for Branded<T, Tag> {}

impl<T: fmt::Debug, Tag> fmt::Debug for Branded<T, Tag> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl<T: fmt::Display, Tag> fmt::Display for Branded<T, Tag> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl<T: PartialEq, Tag> PartialEq for Branded<T, Tag> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq, Tag> Eq for Branded<T, Tag> {}

impl<T: PartialOrd, Tag> PartialOrd for Branded<T, Tag> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Ord, Tag> Ord for Branded<T, Tag> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T: Hash, Tag> Hash for Branded<T, Tag> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T, Tag> Deref for Branded<T, Tag> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T, Tag> AsRef<T> for Branded<T, Tag> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<T: Serialize, Tag> Serialize for Branded<T, Tag> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

// ============================================================================
// TAG ALGEBRA
// ============================================================================

/// The type-level intersection of two brands.
///
/// `Branded<T, Meet<A, B>>` is the brand minted by
/// [`intersection`](crate::handler::intersection): its members satisfy both
/// `A`'s and `B`'s validators. Never constructed; used only as a type
/// argument.
pub struct Meet<A, B>(PhantomData<(A, B)>);

/// The type-level union of two brands.
///
/// `Branded<T, Join<A, B>>` is the brand minted by
/// [`union`](crate::handler::union): its members satisfy at least one of
/// `A`'s and `B`'s validators. Never constructed; used only as a type
/// argument.
pub struct Join<A, B>(PhantomData<(A, B)>);

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    enum Meter {}
    enum Second {}

    #[test]
    fn zero_runtime_overhead() {
        assert_eq!(
            std::mem::size_of::<Branded<u64, Meter>>(),
            std::mem::size_of::<u64>()
        );
    }

    #[test]
    fn brands_over_the_same_base_are_distinct_types() {
        fn speed(distance: Branded<u64, Meter>, time: Branded<u64, Second>) -> u64 {
            *distance / *time
        }

        let distance = Branded::<u64, Meter>::unchecked(10);
        let time = Branded::<u64, Second>::unchecked(5);
        // speed(time, distance) would not compile.
        assert_eq!(speed(distance, time), 2);
    }

    #[test]
    fn forwards_equality_and_hashing() {
        let a = Branded::<String, Meter>::unchecked("ten".to_string());
        let b = Branded::<String, Meter>::unchecked("ten".to_string());
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn deref_and_accessors() {
        let value = Branded::<String, Meter>::unchecked("0123".to_string());
        assert_eq!(value.len(), 4);
        assert_eq!(value.get(), "0123");
        assert_eq!(value.into_inner(), "0123");
    }

    #[test]
    fn debug_and_display_are_transparent() {
        let value = Branded::<u64, Meter>::unchecked(42);
        assert_eq!(format!("{value:?}"), "42");
        assert_eq!(format!("{value}"), "42");
    }

    #[test]
    fn serializes_as_the_base_value() {
        let value = Branded::<String, Meter>::unchecked("ten".to_string());
        assert_eq!(serde_json::to_string(&value).unwrap(), "\"ten\"");
    }
}
