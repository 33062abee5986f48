//! Macros for declaring identifier newtypes.
//!
//! A declaration names the raw type, the serialized type, and the conversions
//! between them. Nothing else is written by hand: the generated trait impls
//! call into [`crate::strategy`], which picks each behaviour from the declared
//! capabilities of the two types. A declaration whose capabilities leave a
//! behaviour without a strategy is rejected by the compiler at the macro call.
//!
//! [`typed_id!`](crate::typed_id!) declares the newtype and its [`TypedId`](crate::TypedId)
//! impl. [`typed_id_traits!`](crate::typed_id_traits!) derives the standard
//! traits from the resolved strategies and is also usable on its own for
//! hand-written `TypedId` impls.

// ---------------------------------------------------------------------------
// Macro for declaring identifier newtypes.
// Generates: tuple struct with a private field, TypedId impl, and the traits
// from typed_id_traits!. Caller-supplied attributes land on the struct, so
// derive Debug/Clone/Copy there but never PartialEq, Eq, or Hash.
// ---------------------------------------------------------------------------

/// Declares an identifier newtype.
///
/// Three forms are accepted:
///
/// ```
/// use typed_id::{typed_id, TypedId};
///
/// // Raw value is its own serialized form.
/// typed_id! {
///     /// Identifies a customer account.
///     #[derive(Debug, Clone, Copy)]
///     pub struct AccountId(u64);
/// }
///
/// // Serialized through the raw type's `Conversion<String>` impl.
/// typed_id! {
///     #[derive(Debug, Clone, Copy)]
///     pub struct SessionId(uuid::Uuid) as String;
/// }
///
/// // Inline conversions.
/// typed_id! {
///     #[derive(Debug, Clone, Copy)]
///     pub struct LevelId(f64) as u64 {
///         fn to_serialized(raw: &f64) -> u64 {
///             raw.to_bits()
///         }
///
///         fn to_raw(serialized: &u64) -> Option<f64> {
///             Some(f64::from_bits(*serialized))
///         }
///     }
/// }
///
/// assert_eq!(AccountId::from_raw(2), AccountId::from_raw(2));
/// assert_eq!(LevelId::from_raw(0.5).to_string(), "0.5");
/// ```
///
/// ## Rejected declarations
///
/// Neither `Raw` nor `Serialized` is hashable:
///
/// ```compile_fail
/// typed_id::typed_id! {
///     #[derive(Debug, Clone, Copy)]
///     pub struct GaugeId(f64);
/// }
/// ```
///
/// Neither side has a text form and no [`Describe`](crate::Describe) impl is given:
///
/// ```compile_fail
/// typed_id::typed_id! {
///     #[derive(Debug, Clone)]
///     pub struct BlobId(Vec<u8>);
/// }
/// ```
///
/// `Serialized` is neither wire-codable nor text-convertible:
///
/// ```compile_fail
/// use std::fmt;
///
/// use typed_id::{capabilities, typed_id, Describe};
///
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// pub struct Opaque(u32);
///
/// capabilities!(Opaque => { equality: Yes, hash: Yes, text: No, wire: No });
///
/// typed_id! {
///     #[derive(Debug, Clone)]
///     pub struct OpaqueId(Opaque);
/// }
///
/// impl Describe for OpaqueId {
///     fn describe(raw: &Opaque, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "{}", raw.0)
///     }
/// }
/// ```
///
/// A declared capability the type does not have. `Tag` claims `hash: Yes`
/// without implementing `Hash`, and equality does not fall back to the
/// hashable `u32`:
///
/// ```compile_fail
/// use typed_id::{capabilities, typed_id};
///
/// #[derive(Debug, Clone, PartialEq)]
/// pub struct Tag(u32);
///
/// capabilities!(Tag => { equality: Yes, hash: Yes, text: No, wire: No });
///
/// typed_id! {
///     #[derive(Debug, Clone)]
///     pub struct TagId(Tag) as u32 {
///         fn to_serialized(raw: &Tag) -> u32 {
///             raw.0
///         }
///
///         fn to_raw(serialized: &u32) -> Option<Tag> {
///             Some(Tag(*serialized))
///         }
///     }
/// }
/// ```
///
/// The single-type form on a type that does not declare value equality:
///
/// ```compile_fail
/// use std::fmt;
///
/// use typed_id::{capabilities, typed_id, Describe};
///
/// #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
/// pub struct Handle(u32);
///
/// capabilities!(Handle => { equality: No, hash: Yes, text: No, wire: Yes });
///
/// typed_id! {
///     #[derive(Debug, Clone)]
///     pub struct HandleId(Handle);
/// }
///
/// impl Describe for HandleId {
///     fn describe(raw: &Handle, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "{}", raw.0)
///     }
/// }
/// ```
#[macro_export]
macro_rules! typed_id {
    (
        $(#[$attr:meta])*
        $vis:vis struct $name:ident($raw:ty);
    ) => {
        $crate::typed_id! {
            $(#[$attr])*
            $vis struct $name($raw) as $raw;
        }
    };
    (
        $(#[$attr:meta])*
        $vis:vis struct $name:ident($raw:ty) as $serialized:ty;
    ) => {
        $crate::typed_id! {
            $(#[$attr])*
            $vis struct $name($raw) as $serialized {
                fn to_serialized(raw: &$raw) -> $serialized {
                    <$raw as $crate::Conversion<$serialized>>::to_serialized(raw)
                }

                fn to_raw(serialized: &$serialized) -> ::core::option::Option<$raw> {
                    <$raw as $crate::Conversion<$serialized>>::from_serialized(serialized)
                }
            }
        }
    };
    (
        $(#[$attr:meta])*
        $vis:vis struct $name:ident($raw:ty) as $serialized:ty {
            $($conversions:tt)*
        }
    ) => {
        $(#[$attr])*
        $vis struct $name($raw);

        impl $crate::TypedId for $name {
            const NAME: &'static str = ::core::stringify!($name);
            type Raw = $raw;
            type Serialized = $serialized;

            fn from_raw(raw: $raw) -> Self {
                Self(raw)
            }

            fn raw(&self) -> &$raw {
                &self.0
            }

            $($conversions)*
        }

        $crate::typed_id_traits!($name);
    };
}

// ---------------------------------------------------------------------------
// Macro for the standard traits of an identifier.
// Generates: PartialEq, Eq, Hash, Display, Serialize, Deserialize, each
// delegating to the strategy resolved for the type.
// ---------------------------------------------------------------------------

/// Implements `PartialEq`, `Eq`, `Hash`, `Display`, `Serialize`, and
/// `Deserialize` for a [`TypedId`](crate::TypedId) type.
///
/// An identifier whose capabilities resolve no equality or codec strategy, or
/// that needs an explicit description without implementing
/// [`Describe`](crate::Describe), fails to compile here.
#[macro_export]
macro_rules! typed_id_traits {
    ($name:ty) => {
        impl ::core::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                $crate::strategy::equality::eq(self, other)
            }
        }

        impl ::core::cmp::Eq for $name {}

        impl ::core::hash::Hash for $name {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                $crate::strategy::equality::hash(self, state)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                $crate::strategy::description::describe(self, f)
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::strategy::codec::encode(self, serializer)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                $crate::strategy::codec::decode(deserializer)
            }
        }
    };
}
