//! Encode/decode strategies on top of serde.
//!
//! The strategies only decide what is written and read; the byte-level work
//! belongs to whatever `Serializer`/`Deserializer` the caller supplies. Errors
//! from those are propagated unchanged. A wire value that decodes cleanly but
//! does not convert to a raw value becomes an [`IdError`].

use std::fmt::Display;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{CodecResolved, CodecRule};
use crate::{IdError, TypedId};

/// How an identifier of type `K` is encoded and decoded.
pub trait CodecStrategy<K: TypedId> {
    /// Reported in [`Resolution`](super::Resolution).
    const RULE: CodecRule;

    /// Writes the identifier wrapping `raw` as a single value.
    fn encode<S: Serializer>(raw: &K::Raw, serializer: S) -> Result<S::Ok, S::Error>;

    /// Reads a single value and converts it to a raw value.
    fn decode<'de, D: Deserializer<'de>>(deserializer: D) -> Result<K::Raw, D::Error>;
}

/// Codes the serialized value directly, with no text intermediate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direct {}

impl<K> CodecStrategy<K> for Direct
where
    K: TypedId,
    K::Serialized: Serialize + DeserializeOwned,
{
    const RULE: CodecRule = CodecRule::Direct;

    fn encode<S: Serializer>(raw: &K::Raw, serializer: S) -> Result<S::Ok, S::Error> {
        K::to_serialized(raw).serialize(serializer)
    }

    fn decode<'de, D: Deserializer<'de>>(deserializer: D) -> Result<K::Raw, D::Error> {
        let serialized = <K::Serialized as Deserialize<'de>>::deserialize(deserializer)?;
        K::to_raw(&serialized)
            .ok_or_else(|| IdError::unconvertible_value::<K>(&serialized).into_de())
    }
}

/// Codes the canonical text of the serialized value as a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViaText {}

impl<K> CodecStrategy<K> for ViaText
where
    K: TypedId,
    K::Serialized: Display + FromStr,
{
    const RULE: CodecRule = CodecRule::Text;

    fn encode<S: Serializer>(raw: &K::Raw, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&K::to_serialized(raw))
    }

    fn decode<'de, D: Deserializer<'de>>(deserializer: D) -> Result<K::Raw, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse::<K::Serialized>()
            .ok()
            .and_then(|serialized| K::to_raw(&serialized))
            .ok_or_else(|| IdError::unconvertible_string::<K>(&text).into_de())
    }
}

/// Codes a `String` serialized value as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlainString {}

impl<K> CodecStrategy<K> for PlainString
where
    K: TypedId<Serialized = String>,
{
    const RULE: CodecRule = CodecRule::PlainString;

    fn encode<S: Serializer>(raw: &K::Raw, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&K::to_serialized(raw))
    }

    fn decode<'de, D: Deserializer<'de>>(deserializer: D) -> Result<K::Raw, D::Error> {
        let text = String::deserialize(deserializer)?;
        K::to_raw(&text).ok_or_else(|| IdError::unconvertible_string::<K>(&text).into_de())
    }
}

/// `Serialize::serialize` for identifiers declared with
/// [`typed_id_traits!`](crate::typed_id_traits!).
pub fn encode<K: CodecResolved, S: Serializer>(id: &K, serializer: S) -> Result<S::Ok, S::Error> {
    <K::Codec as CodecStrategy<K>>::encode(id.raw(), serializer)
}

/// `Deserialize::deserialize` for identifiers declared with
/// [`typed_id_traits!`](crate::typed_id_traits!).
pub fn decode<'de, K: CodecResolved, D: Deserializer<'de>>(deserializer: D) -> Result<K, D::Error> {
    <K::Codec as CodecStrategy<K>>::decode(deserializer).map(K::from_raw)
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use super::*;
    use crate::strategy::Resolution;

    /// A base-36 code with a text form but no serde impls.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    struct Base36(u32);

    crate::capabilities!(Base36 => { equality: Yes, hash: Yes, text: Yes, wire: No });

    impl fmt::Display for Base36 {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut digits = Vec::new();
            let mut rest = self.0;
            loop {
                digits.push(std::char::from_digit(rest % 36, 36).unwrap_or('0'));
                rest /= 36;
                if rest == 0 {
                    break;
                }
            }
            digits.iter().rev().try_for_each(|c| write!(f, "{c}"))
        }
    }

    impl FromStr for Base36 {
        type Err = std::num::ParseIntError;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            u32::from_str_radix(s, 36).map(Self)
        }
    }

    crate::typed_id! {
        #[derive(Debug)]
        struct TicketId(u32) as Base36 {
            fn to_serialized(raw: &u32) -> Base36 {
                Base36(*raw)
            }

            fn to_raw(serialized: &Base36) -> Option<u32> {
                Some(serialized.0)
            }
        }
    }

    crate::typed_id! {
        #[derive(Debug)]
        struct ShardId(u8);
    }

    crate::typed_id! {
        #[derive(Debug)]
        struct NameId(String);
    }

    // Only even raw values are legal.
    crate::typed_id! {
        #[derive(Debug)]
        struct EvenId(u32) as u32 {
            fn to_serialized(raw: &u32) -> u32 {
                *raw
            }

            fn to_raw(serialized: &u32) -> Option<u32> {
                (serialized % 2 == 0).then_some(*serialized)
            }
        }
    }

    #[test]
    fn text_only_serialized_is_coded_as_string() {
        assert_eq!(Resolution::of::<TicketId>().codec, CodecRule::Text);

        let json = serde_json::to_string(&TicketId::from_raw(36)).unwrap();
        assert_eq!(json, "\"10\"");

        let back: TicketId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TicketId::from_raw(36));
    }

    #[test]
    fn unparseable_text_is_data_corruption() {
        let err = serde_json::from_str::<TicketId>("\"not base 36!\"").unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("data corrupted: TicketId"), "{message}");
        assert!(message.contains("not base 36!"), "{message}");
    }

    #[test]
    fn wire_codable_serialized_is_coded_directly() {
        assert_eq!(Resolution::of::<ShardId>().codec, CodecRule::Direct);
        assert_eq!(serde_json::to_string(&ShardId::from_raw(3)).unwrap(), "3");
    }

    #[test]
    fn string_serialized_is_coded_as_plain_string() {
        assert_eq!(Resolution::of::<NameId>().codec, CodecRule::PlainString);
        assert_eq!(serde_json::to_string(&NameId::from_raw("a\"b".into())).unwrap(), r#""a\"b""#);
    }

    #[test]
    fn rejected_direct_value_is_data_corruption() {
        let err = serde_json::from_str::<EvenId>("3").unwrap_err();
        let message = err.to_string();
        let expected = "data corrupted: EvenId not convertible from decoded serialization value: 3";
        assert!(message.starts_with(expected), "{message}");
        assert_eq!(serde_json::from_str::<EvenId>("4").unwrap(), EvenId::from_raw(4));
    }

    #[test]
    fn upstream_errors_pass_through() {
        let err = serde_json::from_str::<ShardId>("\"three\"").unwrap_err();
        assert!(err.is_data());
        assert!(!err.to_string().contains("data corrupted"));

        let err = serde_json::from_str::<ShardId>("300").unwrap_err();
        assert!(!err.to_string().contains("data corrupted"));
    }
}
