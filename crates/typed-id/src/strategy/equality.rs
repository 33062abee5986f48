//! Equality and hashing strategies.

use std::hash::{Hash, Hasher};

use super::{EqualityResolved, EqualityRule};
use crate::TypedId;

/// How two identifiers of type `K` are compared and hashed.
pub trait EqualityStrategy<K: TypedId> {
    /// Reported in [`Resolution`](super::Resolution).
    const RULE: EqualityRule;

    /// Returns `true` if the identifiers wrapping `lhs` and `rhs` are equal.
    fn eq(lhs: &K::Raw, rhs: &K::Raw) -> bool;

    /// Feeds the identifier wrapping `raw` into `state`.
    fn hash<H: Hasher>(raw: &K::Raw, state: &mut H);
}

/// Compares and hashes the raw value.
///
/// Two raw values that happen to serialize identically still compare unequal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByRaw {}

impl<K> EqualityStrategy<K> for ByRaw
where
    K: TypedId,
    K::Raw: Eq + Hash,
{
    const RULE: EqualityRule = EqualityRule::Raw;

    fn eq(lhs: &K::Raw, rhs: &K::Raw) -> bool {
        lhs == rhs
    }

    fn hash<H: Hasher>(raw: &K::Raw, state: &mut H) {
        raw.hash(state);
    }
}

/// Compares and hashes the serialized form of the raw value.
///
/// Converts on every comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BySerialized {}

impl<K> EqualityStrategy<K> for BySerialized
where
    K: TypedId,
    K::Serialized: Eq + Hash,
{
    const RULE: EqualityRule = EqualityRule::Serialized;

    fn eq(lhs: &K::Raw, rhs: &K::Raw) -> bool {
        K::to_serialized(lhs) == K::to_serialized(rhs)
    }

    fn hash<H: Hasher>(raw: &K::Raw, state: &mut H) {
        K::to_serialized(raw).hash(state);
    }
}

/// `PartialEq::eq` for identifiers declared with [`typed_id_traits!`](crate::typed_id_traits!).
pub fn eq<K: EqualityResolved>(lhs: &K, rhs: &K) -> bool {
    <K::Equality as EqualityStrategy<K>>::eq(lhs.raw(), rhs.raw())
}

/// `Hash::hash` for identifiers declared with [`typed_id_traits!`](crate::typed_id_traits!).
pub fn hash<K: EqualityResolved, H: Hasher>(id: &K, state: &mut H) {
    <K::Equality as EqualityStrategy<K>>::hash(id.raw(), state);
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;

    use super::*;
    use crate::strategy::Resolution;

    fn hash_of<K: EqualityResolved>(id: &K) -> u64 {
        let mut hasher = DefaultHasher::new();
        hash(id, &mut hasher);
        hasher.finish()
    }

    crate::typed_id! {
        #[derive(Debug)]
        struct CounterId(u32);
    }

    // Both sides hashable, but the serialized form only keeps the low byte.
    crate::typed_id! {
        #[derive(Debug)]
        struct LowByteId(u32) as u8 {
            fn to_serialized(raw: &u32) -> u8 {
                (*raw & 0xff) as u8
            }

            fn to_raw(serialized: &u8) -> Option<u32> {
                Some(u32::from(*serialized))
            }
        }
    }

    // Floats cannot hash; the bit pattern can.
    crate::typed_id! {
        #[derive(Debug)]
        struct RatioId(f64) as u64 {
            fn to_serialized(raw: &f64) -> u64 {
                raw.to_bits()
            }

            fn to_raw(serialized: &u64) -> Option<f64> {
                Some(f64::from_bits(*serialized))
            }
        }
    }

    #[test]
    fn hashable_raw_compares_raw() {
        assert_eq!(Resolution::of::<CounterId>().equality, EqualityRule::Raw);
        assert!(eq(&CounterId::from_raw(4), &CounterId::from_raw(4)));
        assert!(!eq(&CounterId::from_raw(4), &CounterId::from_raw(5)));
    }

    #[test]
    fn raw_wins_when_both_sides_hash() {
        assert_eq!(Resolution::of::<LowByteId>().equality, EqualityRule::Raw);
        // 0x101 and 0x001 share a serialized form but are distinct raw values.
        assert_ne!(LowByteId::from_raw(0x101), LowByteId::from_raw(0x001));
    }

    #[test]
    fn unhashable_raw_compares_serialized() {
        assert_eq!(Resolution::of::<RatioId>().equality, EqualityRule::Serialized);
        assert_eq!(RatioId::from_raw(f64::NAN), RatioId::from_raw(f64::NAN));
        // Equal as floats, distinct as bit patterns.
        assert_ne!(RatioId::from_raw(0.0), RatioId::from_raw(-0.0));
    }

    #[test]
    fn equal_identifiers_hash_equally() {
        assert_eq!(hash_of(&CounterId::from_raw(9)), hash_of(&CounterId::from_raw(9)));
        assert_eq!(hash_of(&RatioId::from_raw(0.5)), hash_of(&RatioId::from_raw(0.5)));
    }
}
