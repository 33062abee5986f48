//! Error type for identifier conversion failures.
//!
//! Only the decode direction can fail. Upstream failures of the wire service
//! (malformed input, type mismatch) are returned unchanged by the serde
//! implementations; [`IdError`] covers the case where a well-formed wire value
//! does not correspond to any valid raw identifier.

use thiserror::Error;

use crate::TypedId;

/// A decoded value that does not map to a valid raw identifier.
///
/// Both variants read as "data corrupted" and name the identifier type along
/// with the offending value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    /// A value read directly in the serialized representation was rejected
    /// by [`TypedId::to_raw`].
    #[error("data corrupted: {id_type} not convertible from decoded serialization value: {value}")]
    UnconvertibleValue {
        /// Name of the identifier type being decoded.
        id_type: &'static str,
        /// `Debug` rendering of the serialized value.
        value: String,
    },

    /// A string read from the wire either failed to parse into the serialized
    /// representation or was rejected by [`TypedId::to_raw`].
    #[error("data corrupted: {id_type} not convertible from decoded string value: {value}")]
    UnconvertibleString {
        /// Name of the identifier type being decoded.
        id_type: &'static str,
        /// The string exactly as decoded.
        value: String,
    },
}

impl IdError {
    /// Builds an [`IdError::UnconvertibleValue`] for `K`.
    pub fn unconvertible_value<K: TypedId>(serialized: &K::Serialized) -> Self {
        let value = format!("{serialized:?}");
        tracing::debug!(
            id_type = K::NAME,
            value = %value,
            "serialized value rejected by identifier conversion"
        );
        Self::UnconvertibleValue {
            id_type: K::NAME,
            value,
        }
    }

    /// Builds an [`IdError::UnconvertibleString`] for `K`.
    pub fn unconvertible_string<K: TypedId>(text: &str) -> Self {
        tracing::debug!(
            id_type = K::NAME,
            value = text,
            "string rejected by identifier conversion"
        );
        Self::UnconvertibleString {
            id_type: K::NAME,
            value: text.to_owned(),
        }
    }

    /// Returns the name of the identifier type that failed to decode.
    pub fn id_type(&self) -> &'static str {
        match self {
            Self::UnconvertibleValue { id_type, .. }
            | Self::UnconvertibleString { id_type, .. } => *id_type,
        }
    }

    /// Returns the offending value as it appears in the diagnostic.
    pub fn value(&self) -> &str {
        match self {
            Self::UnconvertibleValue { value, .. }
            | Self::UnconvertibleString { value, .. } => value,
        }
    }

    /// Converts this error into the error type of a serde deserializer.
    pub(crate) fn into_de<E: serde::de::Error>(self) -> E {
        E::custom(self)
    }
}
