//! UUID-backed identifiers.
//!
//! [`Uuid`] has every capability, so an identifier declared as
//! `struct Name(Uuid);` compares, describes, and codes through the UUID
//! itself. Two alternative serialized forms are provided: the hyphenated
//! string and the raw 16 bytes.

use uuid::Uuid;

use crate::{Conversion, TypedId};

crate::capabilities! {
    Uuid => { equality: Yes, hash: Yes, text: Yes, wire: Yes }
}

/// Hyphenated lowercase text. Parsing accepts every format [`Uuid::parse_str`] does.
impl Conversion<String> for Uuid {
    fn to_serialized(&self) -> String {
        self.hyphenated().to_string()
    }

    fn from_serialized(serialized: &String) -> Option<Self> {
        Uuid::parse_str(serialized).ok()
    }
}

/// Big-endian bytes. Every 16-byte value is a valid UUID.
impl Conversion<[u8; 16]> for Uuid {
    fn to_serialized(&self) -> [u8; 16] {
        *self.as_bytes()
    }

    fn from_serialized(serialized: &[u8; 16]) -> Option<Self> {
        Some(Uuid::from_bytes(*serialized))
    }
}

/// Random generation for identifiers backed by a [`Uuid`].
pub trait RandomId: TypedId<Raw = Uuid> {
    /// Generates a new random (v4) identifier.
    fn new_random() -> Self {
        Self::from_raw(Uuid::new_v4())
    }
}

impl<K> RandomId for K where K: TypedId<Raw = Uuid> {}
