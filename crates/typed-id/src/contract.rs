//! The conversion contract every identifier type fulfils.
//!
//! An identifier owns a `Raw` value and can convert it to and from a
//! `Serialized` representation. `Raw -> Serialized` is total;
//! `Serialized -> Raw` is partial and must succeed for every value that
//! `Raw -> Serialized` produces. Lossy round trips are not allowed: a
//! serialized value either converts back to an equal raw value or is rejected.

use std::fmt;
use std::str::FromStr;

use crate::capabilities::{Capabilities, Yes};
use crate::IdError;

// ---------------------------------------------------------------------------
// Identifier contract
// ---------------------------------------------------------------------------

/// A strongly-typed identifier wrapping a `Raw` domain value.
///
/// Implemented by the identifier newtype itself, usually through
/// [`typed_id!`](crate::typed_id!). Equality, hashing, `Display`, and serde
/// support are then derived from the capabilities of `Raw` and `Serialized`
/// by [`typed_id_traits!`](crate::typed_id_traits!).
pub trait TypedId: Sized {
    /// Type name used in decode diagnostics.
    const NAME: &'static str;

    /// The in-memory value. Shared freely between threads.
    type Raw: Capabilities + Send + Sync;

    /// The on-the-wire representation.
    type Serialized: Capabilities + fmt::Debug + Send + Sync;

    /// Wraps a raw value, taking ownership of it.
    fn from_raw(raw: Self::Raw) -> Self;

    /// Returns the wrapped raw value.
    fn raw(&self) -> &Self::Raw;

    /// Converts a raw value to its serialized representation. Never fails.
    fn to_serialized(raw: &Self::Raw) -> Self::Serialized;

    /// Converts a serialized value back to a raw value.
    ///
    /// Returns `None` when `serialized` does not correspond to any valid raw
    /// value. Must return `Some` for everything [`Self::to_serialized`] produces.
    fn to_raw(serialized: &Self::Serialized) -> Option<Self::Raw>;

    /// Returns the serialized representation of this identifier.
    fn serialized(&self) -> Self::Serialized {
        Self::to_serialized(self.raw())
    }

    /// Builds an identifier from its serialized representation.
    fn try_from_serialized(serialized: &Self::Serialized) -> Result<Self, IdError> {
        Self::to_raw(serialized)
            .map(Self::from_raw)
            .ok_or_else(|| IdError::unconvertible_value::<Self>(serialized))
    }

    /// Parses an identifier from the canonical text of its serialized
    /// representation.
    fn parse(text: &str) -> Result<Self, IdError>
    where
        Self::Serialized: FromStr,
    {
        text.parse::<Self::Serialized>()
            .ok()
            .and_then(|serialized| Self::to_raw(&serialized))
            .map(Self::from_raw)
            .ok_or_else(|| IdError::unconvertible_string::<Self>(text))
    }
}

/// Explicit description for identifiers whose `Raw` and `Serialized` types
/// both lack a text form.
///
/// Such identifiers do not implement `Display` until this is provided. An
/// impl on an identifier whose `Raw` or `Serialized` type has a text form is
/// never called: the text form is used instead.
pub trait Describe: TypedId {
    /// Writes a human-readable description of `raw`.
    fn describe(raw: &Self::Raw, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

// ---------------------------------------------------------------------------
// Reusable conversions
// ---------------------------------------------------------------------------

/// A reusable `Raw -> S` conversion pair, implemented on the raw type.
///
/// [`typed_id!`](crate::typed_id!) uses it when an identifier is declared as
/// `struct Name(Raw) as S;`.
pub trait Conversion<S>: Sized {
    /// Total conversion into `S`.
    fn to_serialized(&self) -> S;

    /// Partial conversion back from `S`.
    fn from_serialized(serialized: &S) -> Option<Self>;
}

/// A raw value declaring value equality is its own serialized form.
impl<T> Conversion<T> for T
where
    T: Capabilities<Equality = Yes> + Clone + PartialEq,
{
    fn to_serialized(&self) -> T {
        self.clone()
    }

    fn from_serialized(serialized: &T) -> Option<Self> {
        Some(serialized.clone())
    }
}
