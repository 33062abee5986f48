//! Description strategies backing `Display`.

use std::fmt::{self, Display};

use super::{DescriptionResolved, DescriptionRule};
use crate::{Describe, TypedId};

/// How an identifier of type `K` is described.
pub trait DescriptionStrategy<K: TypedId> {
    /// Reported in [`Resolution`](super::Resolution).
    const RULE: DescriptionRule;

    /// Writes the description of the identifier wrapping `raw`.
    fn describe(raw: &K::Raw, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Uses the raw value's `Display`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawText {}

impl<K> DescriptionStrategy<K> for RawText
where
    K: TypedId,
    K::Raw: Display,
{
    const RULE: DescriptionRule = DescriptionRule::Raw;

    fn describe(raw: &K::Raw, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(raw, f)
    }
}

/// Uses the serialized value's `Display`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SerializedText {}

impl<K> DescriptionStrategy<K> for SerializedText
where
    K: TypedId,
    K::Serialized: Display,
{
    const RULE: DescriptionRule = DescriptionRule::Serialized;

    fn describe(raw: &K::Raw, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&K::to_serialized(raw), f)
    }
}

/// Defers to the identifier's [`Describe`] impl.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Explicit {}

impl<K> DescriptionStrategy<K> for Explicit
where
    K: Describe,
{
    const RULE: DescriptionRule = DescriptionRule::Explicit;

    fn describe(raw: &K::Raw, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        K::describe(raw, f)
    }
}

/// `Display::fmt` for identifiers declared with [`typed_id_traits!`](crate::typed_id_traits!).
pub fn describe<K: DescriptionResolved>(id: &K, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    <K::Description as DescriptionStrategy<K>>::describe(id.raw(), f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::Resolution;

    // Both sides have text; the serialized form is zero-padded hex.
    crate::typed_id! {
        #[derive(Debug)]
        struct ChannelId(u16) as String {
            fn to_serialized(raw: &u16) -> String {
                format!("{raw:04x}")
            }

            fn to_raw(serialized: &String) -> Option<u16> {
                u16::from_str_radix(serialized, 16).ok()
            }
        }
    }

    crate::typed_id! {
        #[derive(Debug)]
        struct DigestId(Vec<u8>) as String {
            fn to_serialized(raw: &Vec<u8>) -> String {
                raw.iter().map(|byte| format!("{byte:02x}")).collect()
            }

            fn to_raw(serialized: &String) -> Option<Vec<u8>> {
                if serialized.len() % 2 != 0 {
                    return None;
                }
                (0..serialized.len())
                    .step_by(2)
                    .map(|i| u8::from_str_radix(serialized.get(i..i + 2)?, 16).ok())
                    .collect()
            }
        }
    }

    crate::typed_id! {
        #[derive(Debug)]
        struct FrameId([u8; 4]);
    }

    impl Describe for FrameId {
        fn describe(raw: &[u8; 4], f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}.{}.{}.{}", raw[0], raw[1], raw[2], raw[3])
        }
    }

    crate::typed_id! {
        #[derive(Debug)]
        struct LaneId(u8);
    }

    impl Describe for LaneId {
        fn describe(raw: &u8, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "lane-{raw}")
        }
    }

    #[test]
    fn raw_text_wins_over_serialized_text() {
        assert_eq!(Resolution::of::<ChannelId>().description, DescriptionRule::Raw);
        assert_eq!(ChannelId::from_raw(255).to_string(), "255");
    }

    #[test]
    fn serialized_text_used_when_raw_has_none() {
        assert_eq!(Resolution::of::<DigestId>().description, DescriptionRule::Serialized);
        assert_eq!(DigestId::from_raw(vec![0xde, 0xad]).to_string(), "dead");
    }

    #[test]
    fn explicit_description_when_neither_has_text() {
        assert_eq!(Resolution::of::<FrameId>().description, DescriptionRule::Explicit);
        assert_eq!(FrameId::from_raw([10, 0, 0, 1]).to_string(), "10.0.0.1");
    }

    #[test]
    fn describe_impl_is_unused_when_a_text_form_exists() {
        assert_eq!(Resolution::of::<LaneId>().description, DescriptionRule::Raw);
        assert_eq!(LaneId::from_raw(3).to_string(), "3");
    }

    #[test]
    fn description_honours_formatter_flags() {
        assert_eq!(format!("{:>5}", ChannelId::from_raw(7)), "    7");
    }
}
