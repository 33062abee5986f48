//! Compile-time strategy resolution.
//!
//! For each identifier type exactly one strategy is selected per concern:
//! equality and hashing, description, and encode/decode. Selection is a
//! lookup in a table keyed by a tuple of capability [`Flag`]s. The table
//! entries are disjoint impls, so the choice is unambiguous and made entirely
//! by the type checker. A key with no entry means the identifier is not
//! well-formed and fails to compile.
//!
//! ## Precedence
//!
//! Equality and hashing, keyed on `(Raw::Hash, Serialized::Hash)`:
//!
//! 1. `Raw` hashable: compare and hash `Raw` directly, even when `Serialized`
//!    is hashable too.
//! 2. Otherwise `Serialized` hashable: compare and hash `to_serialized(raw)`.
//! 3. Otherwise: no entry.
//!
//! Description, keyed on `(Raw::Text, Serialized::Text)`:
//!
//! 1. `Raw` has a text form: `Raw`'s `Display`, even when `Serialized` has one.
//! 2. Otherwise `Serialized` has a text form: `Display` of `to_serialized(raw)`.
//! 3. Otherwise: the identifier's own [`Describe`](crate::Describe) impl.
//!
//! Encode/decode, keyed on `(Serialized::Wire, Serialized::Text, Serialized::IsString)`:
//!
//! 1. `Serialized` is exactly `String`: plain string on the wire.
//! 2. `Serialized` is wire-codable, with or without a text form: `Serialized`
//!    directly on the wire, no text intermediate.
//! 3. `Serialized` has only a text form: its canonical text on the wire.
//! 4. Otherwise: no entry.
//!
//! `String` is also wire-codable and has a text form. Both the direct and the
//! plain-string codec put the same JSON string on the wire; the plain-string
//! codec is preferred because it skips the parse step.

pub mod codec;
pub mod description;
pub mod equality;

use serde::{Deserialize, Serialize};

use crate::capabilities::{Capabilities, Flag, No, Yes};
use crate::TypedId;

pub use codec::{CodecStrategy, Direct, PlainString, ViaText};
pub use description::{DescriptionStrategy, Explicit, RawText, SerializedText};
pub use equality::{ByRaw, BySerialized, EqualityStrategy};

type RawOf<K> = <K as TypedId>::Raw;
type SerializedOf<K> = <K as TypedId>::Serialized;

/// Selection key for the equality table.
pub type EqualityKey<K> = (
    <RawOf<K> as Capabilities>::Hash,
    <SerializedOf<K> as Capabilities>::Hash,
);

/// Selection key for the description table.
pub type DescriptionKey<K> = (
    <RawOf<K> as Capabilities>::Text,
    <SerializedOf<K> as Capabilities>::Text,
);

/// Selection key for the codec table.
pub type CodecKey<K> = (
    <SerializedOf<K> as Capabilities>::Wire,
    <SerializedOf<K> as Capabilities>::Text,
    <SerializedOf<K> as Capabilities>::IsString,
);

// ---------------------------------------------------------------------------
// Selection tables
// ---------------------------------------------------------------------------

/// Equality table entry for a capability key.
pub trait SelectEquality {
    /// The selected strategy.
    type Strategy;
}

impl<S: Flag> SelectEquality for (Yes, S) {
    type Strategy = ByRaw;
}

impl SelectEquality for (No, Yes) {
    type Strategy = BySerialized;
}

/// Description table entry for a capability key.
pub trait SelectDescription {
    /// The selected strategy.
    type Strategy;
}

impl<S: Flag> SelectDescription for (Yes, S) {
    type Strategy = RawText;
}

impl SelectDescription for (No, Yes) {
    type Strategy = SerializedText;
}

impl SelectDescription for (No, No) {
    type Strategy = Explicit;
}

/// Codec table entry for a capability key.
pub trait SelectCodec {
    /// The selected strategy.
    type Strategy;
}

impl<W: Flag, T: Flag> SelectCodec for (W, T, Yes) {
    type Strategy = PlainString;
}

impl<T: Flag> SelectCodec for (Yes, T, No) {
    type Strategy = Direct;
}

impl SelectCodec for (No, Yes, No) {
    type Strategy = ViaText;
}

// ---------------------------------------------------------------------------
// Resolved identifiers
// ---------------------------------------------------------------------------

/// An identifier with a resolved equality and hashing strategy.
pub trait EqualityResolved: TypedId {
    /// The selected strategy.
    type Equality: EqualityStrategy<Self>;
}

impl<K> EqualityResolved for K
where
    K: TypedId,
    EqualityKey<K>: SelectEquality,
    <EqualityKey<K> as SelectEquality>::Strategy: EqualityStrategy<K>,
{
    type Equality = <EqualityKey<K> as SelectEquality>::Strategy;
}

/// An identifier with a resolved description strategy.
pub trait DescriptionResolved: TypedId {
    /// The selected strategy.
    type Description: DescriptionStrategy<Self>;
}

impl<K> DescriptionResolved for K
where
    K: TypedId,
    DescriptionKey<K>: SelectDescription,
    <DescriptionKey<K> as SelectDescription>::Strategy: DescriptionStrategy<K>,
{
    type Description = <DescriptionKey<K> as SelectDescription>::Strategy;
}

/// An identifier with a resolved encode/decode strategy.
pub trait CodecResolved: TypedId {
    /// The selected strategy.
    type Codec: CodecStrategy<Self>;
}

impl<K> CodecResolved for K
where
    K: TypedId,
    CodecKey<K>: SelectCodec,
    <CodecKey<K> as SelectCodec>::Strategy: CodecStrategy<K>,
{
    type Codec = <CodecKey<K> as SelectCodec>::Strategy;
}

/// An identifier with every strategy resolved.
pub trait WellFormed: EqualityResolved + DescriptionResolved + CodecResolved {}

impl<K> WellFormed for K where K: EqualityResolved + DescriptionResolved + CodecResolved {}

// ---------------------------------------------------------------------------
// Resolution report
// ---------------------------------------------------------------------------

/// Which value equality and hashing operate on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EqualityRule {
    /// The raw value.
    Raw,
    /// The serialized form of the raw value.
    Serialized,
}

/// Where an identifier's `Display` output comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DescriptionRule {
    /// The raw value's text form.
    Raw,
    /// The serialized value's text form.
    Serialized,
    /// The identifier's [`Describe`](crate::Describe) impl.
    Explicit,
}

/// What an identifier puts on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodecRule {
    /// The serialized value, coded directly.
    Direct,
    /// The canonical text of the serialized value.
    Text,
    /// The serialized value, which is a `String`.
    PlainString,
}

/// The strategies selected for an identifier type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    /// Equality and hashing.
    pub equality: EqualityRule,
    /// Description.
    pub description: DescriptionRule,
    /// Encode/decode.
    pub codec: CodecRule,
}

impl Resolution {
    /// Returns the strategies selected for `K`.
    pub fn of<K: WellFormed>() -> Self {
        Self {
            equality: <<K as EqualityResolved>::Equality as EqualityStrategy<K>>::RULE,
            description: <<K as DescriptionResolved>::Description as DescriptionStrategy<K>>::RULE,
            codec: <<K as CodecResolved>::Codec as CodecStrategy<K>>::RULE,
        }
    }
}
