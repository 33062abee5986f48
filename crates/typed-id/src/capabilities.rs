//! Capability model for raw and serialized identifier representations.
//!
//! Every type that can appear as a [`TypedId::Raw`](crate::TypedId::Raw) or
//! [`TypedId::Serialized`](crate::TypedId::Serialized) declares, at the type
//! level, which capabilities it offers. The strategy resolver in
//! [`crate::strategy`] keys its selection tables on these flags.
//!
//! A declared [`Yes`] is a claim, not a proof. The strategy that the claim
//! selects carries the real trait bounds (`Hash`, `Display`, `Serialize`, ...),
//! so a false claim fails to compile instead of silently falling back to a
//! different strategy.
//!
//! Only this crate can declare capabilities for foreign types. Declarations
//! are built in for the primitives, `String`, `Box<str>`, `Arc<str>`, byte
//! buffers, the `NonZero*` integers, and the `std::net` address types.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6};
use std::num::{
    NonZeroI128, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI8, NonZeroIsize, NonZeroU128,
    NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU8, NonZeroUsize,
};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Yes {}
    impl Sealed for super::No {}
}

// ---------------------------------------------------------------------------
// Type-level booleans
// ---------------------------------------------------------------------------

/// A type-level boolean. Implemented only by [`Yes`] and [`No`].
pub trait Flag: sealed::Sealed + 'static {
    /// The runtime value of this flag.
    const VALUE: bool;
}

/// The capability is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Yes {}

/// The capability is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum No {}

impl Flag for Yes {
    const VALUE: bool = true;
}

impl Flag for No {
    const VALUE: bool = false;
}

// ---------------------------------------------------------------------------
// Capability declarations
// ---------------------------------------------------------------------------

/// Static capability flags of a type.
///
/// Prefer the [`capabilities!`](crate::capabilities!) macro over a manual impl.
pub trait Capabilities {
    /// Value equality (`PartialEq`).
    ///
    /// Gates the identity conversion: only a type declaring `Yes` here is its
    /// own serialized form without a hand-written [`Conversion`](crate::Conversion).
    type Equality: Flag;

    /// Hash-based equality (`Eq + Hash`).
    type Hash: Flag;

    /// Lossless two-way text conversion.
    ///
    /// The description strategies need `Display`. The text-only codec and
    /// [`TypedId::parse`](crate::TypedId::parse) also need `FromStr`.
    type Text: Flag;

    /// Direct structured coding through serde (`Serialize + DeserializeOwned`).
    type Wire: Flag;

    /// The type is exactly `String`.
    ///
    /// Selects the plain-string codec, which needs no intermediate parse step.
    /// Declaring `Yes` for any other type leaves its identifiers uncodable.
    type IsString: Flag;
}

/// Runtime snapshot of a type's [`Capabilities`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CapabilitySet {
    /// Value equality.
    pub equality: bool,
    /// Hash-based equality.
    pub hash: bool,
    /// Lossless text conversion.
    pub text: bool,
    /// Direct serde coding.
    pub wire: bool,
    /// Exactly `String`.
    pub string: bool,
}

impl CapabilitySet {
    /// Returns the declared capabilities of `T`.
    pub const fn of<T: Capabilities>() -> Self {
        Self {
            equality: <T::Equality as Flag>::VALUE,
            hash: <T::Hash as Flag>::VALUE,
            text: <T::Text as Flag>::VALUE,
            wire: <T::Wire as Flag>::VALUE,
            string: <T::IsString as Flag>::VALUE,
        }
    }
}

// ---------------------------------------------------------------------------
// Declaration macro
// Generates: one `Capabilities` impl per listed type. `string` defaults to `No`.
// ---------------------------------------------------------------------------

/// Declares the [`Capabilities`] of one or more types.
///
/// The types must be local to the calling crate. To use a foreign type that
/// has no built-in declaration, wrap it in a local newtype and declare that:
///
/// ```
/// use typed_id::{capabilities, typed_id, TypedId};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// pub struct Millis(std::time::Duration);
///
/// capabilities!(Millis => { equality: Yes, hash: Yes, text: No, wire: No });
///
/// typed_id! {
///     #[derive(Debug, Clone, Copy)]
///     pub struct TimeoutId(Millis) as u64 {
///         fn to_serialized(raw: &Millis) -> u64 {
///             u64::try_from(raw.0.as_millis()).unwrap_or(u64::MAX)
///         }
///
///         fn to_raw(serialized: &u64) -> Option<Millis> {
///             Some(Millis(std::time::Duration::from_millis(*serialized)))
///         }
///     }
/// }
///
/// let id = TimeoutId::from_raw(Millis(std::time::Duration::from_millis(250)));
/// assert_eq!(serde_json::to_string(&id).unwrap(), "250");
/// assert_eq!(id.to_string(), "250");
/// ```
///
/// Capabilities of a local type:
///
/// ```
/// use typed_id::{capabilities, CapabilitySet};
///
/// #[derive(Debug, Clone, PartialEq)]
/// pub struct Token(u128);
///
/// capabilities!(Token => { equality: Yes, hash: No, text: No, wire: No });
///
/// assert!(!CapabilitySet::of::<Token>().hash);
/// ```
#[macro_export]
macro_rules! capabilities {
    (
        $($ty:ty),+ $(,)? => {
            equality: $equality:ident,
            hash: $hash:ident,
            text: $text:ident,
            wire: $wire:ident,
            string: $string:ident $(,)?
        }
    ) => {
        $(
            impl $crate::capabilities::Capabilities for $ty {
                type Equality = $crate::capabilities::$equality;
                type Hash = $crate::capabilities::$hash;
                type Text = $crate::capabilities::$text;
                type Wire = $crate::capabilities::$wire;
                type IsString = $crate::capabilities::$string;
            }
        )+
    };
    (
        $($ty:ty),+ $(,)? => {
            equality: $equality:ident,
            hash: $hash:ident,
            text: $text:ident,
            wire: $wire:ident $(,)?
        }
    ) => {
        $crate::capabilities! {
            $($ty),+ => {
                equality: $equality,
                hash: $hash,
                text: $text,
                wire: $wire,
                string: No,
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Built-in declarations
// ---------------------------------------------------------------------------

crate::capabilities! {
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    bool, char => { equality: Yes, hash: Yes, text: Yes, wire: Yes }
}

// Floats have no total equality, so they cannot hash.
crate::capabilities! {
    f32, f64 => { equality: Yes, hash: No, text: Yes, wire: Yes }
}

crate::capabilities! {
    NonZeroU8, NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize,
    NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize
        => { equality: Yes, hash: Yes, text: Yes, wire: Yes }
}

crate::capabilities! {
    String => { equality: Yes, hash: Yes, text: Yes, wire: Yes, string: Yes }
}

// Coded as strings, but not `String`, so the direct codec applies.
crate::capabilities! {
    Box<str>, Arc<str> => { equality: Yes, hash: Yes, text: Yes, wire: Yes }
}

crate::capabilities! {
    IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6
        => { equality: Yes, hash: Yes, text: Yes, wire: Yes }
}

crate::capabilities! {
    Vec<u8> => { equality: Yes, hash: Yes, text: No, wire: Yes }
}

// serde only codes arrays up to 32 elements; longer arrays fail to resolve a codec.
impl<const N: usize> Capabilities for [u8; N] {
    type Equality = Yes;
    type Hash = Yes;
    type Text = No;
    type Wire = Yes;
    type IsString = No;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_have_every_capability_but_string() {
        let set = CapabilitySet::of::<u64>();
        assert!(set.equality && set.hash && set.text && set.wire);
        assert!(!set.string);
    }

    #[test]
    fn floats_cannot_hash() {
        let set = CapabilitySet::of::<f64>();
        assert!(set.equality);
        assert!(!set.hash);
        assert!(set.text);
    }

    #[test]
    fn string_is_the_only_plain_string() {
        assert!(CapabilitySet::of::<String>().string);
        assert!(!CapabilitySet::of::<char>().string);
        assert!(!CapabilitySet::of::<Vec<u8>>().string);
    }

    #[test]
    fn non_zero_integers_have_every_capability_but_string() {
        let set = CapabilitySet::of::<NonZeroU64>();
        assert!(set.equality && set.hash && set.text && set.wire);
        assert!(!set.string);
        assert_eq!(CapabilitySet::of::<NonZeroI32>(), set);
    }

    #[test]
    fn shared_strs_are_coded_directly() {
        for set in [CapabilitySet::of::<Box<str>>(), CapabilitySet::of::<Arc<str>>()] {
            assert!(set.hash && set.text && set.wire);
            assert!(!set.string);
        }
    }

    #[test]
    fn network_addresses_have_every_capability_but_string() {
        let set = CapabilitySet::of::<IpAddr>();
        assert!(set.equality && set.hash && set.text && set.wire);
        assert!(!set.string);
        assert_eq!(CapabilitySet::of::<SocketAddrV6>(), set);
    }

    #[test]
    fn byte_arrays_have_no_text_form() {
        let set = CapabilitySet::of::<[u8; 16]>();
        assert!(set.hash && set.wire);
        assert!(!set.text);
    }

    #[test]
    fn capability_set_serializes_as_flags() {
        let json = serde_json::to_value(CapabilitySet::of::<f32>()).unwrap();
        assert_eq!(json["hash"], serde_json::Value::Bool(false));
        assert_eq!(json["wire"], serde_json::Value::Bool(true));
    }
}
