//! Strongly-typed identifiers with capability-resolved behaviour.
//!
//! An identifier wraps a `Raw` domain value (an integer, a string, a UUID, an
//! opaque struct) and converts it to and from a `Serialized` representation.
//! Equality, hashing, `Display`, and serde support are not written by hand:
//! they are selected at compile time from what `Raw` and `Serialized` are
//! capable of, following a fixed precedence that always prefers the raw value.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`capabilities`] | Type-level capability flags and built-in declarations |
//! | [`contract`] | The [`TypedId`] conversion contract, [`Conversion`], [`Describe`] |
//! | [`strategy`] | Strategy selection tables and the strategies themselves |
//! | [`identifiers`] | The [`typed_id!`] and [`typed_id_traits!`] declaration macros |
//! | [`errors`] | [`IdError`] |
//!
//! ## Example
//!
//! ```
//! use typed_id::{typed_id, TypedId};
//!
//! typed_id! {
//!     /// Identifies an invoice.
//!     #[derive(Debug, Clone, Copy)]
//!     pub struct InvoiceId(u64);
//! }
//!
//! let id = InvoiceId::from_raw(2);
//! assert_eq!(serde_json::to_string(&id).unwrap(), "2");
//! assert_eq!(serde_json::from_str::<InvoiceId>("2").unwrap(), id);
//! assert_eq!(id.to_string(), "2");
//! ```

pub mod capabilities;
pub mod contract;
pub mod errors;
pub mod identifiers;
pub mod strategy;
#[cfg(feature = "uuid")]
pub mod uuid_support;

// Re-export the core surface at the crate root.
pub use capabilities::{Capabilities, CapabilitySet, Flag, No, Yes};
pub use contract::{Conversion, Describe, TypedId};
pub use errors::IdError;
pub use strategy::{
    CodecResolved, CodecRule, DescriptionResolved, DescriptionRule, EqualityResolved, EqualityRule,
    Resolution, WellFormed,
};
#[cfg(feature = "uuid")]
pub use uuid_support::RandomId;

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
