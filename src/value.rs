//! Codec layers for field values.
//!
//! A field's on-wire form is a fixed-width integer. Its decoded form depends
//! on the field type: a bare scalar, a named code, a physical quantity, a
//! boolean, or a calendar timestamp. Each shape is produced by a small codec
//! struct wrapping one of the base types in [`base`]:
//!
//! - [`base::Plain`] decodes the base type's primitive unchanged.
//! - [`known::Known`] overlays a table of named codes, falling back to the
//!   bare integer for codes the table does not carry.
//! - [`scale::Scaled`] applies a linear transform to a physical quantity.
//! - [`scale::KnownOrScaled`] tries the code table first and routes unmatched
//!   codes through the scale.
//! - [`variant::Variants`] decodes a closed set of named variants, and
//!   [`variant::Boolean`] the protocol's two-valued enumeration.
//! - [`time::DateTime`] converts second offsets from the protocol's reference
//!   instant into calendar timestamps.
//!
//! All codecs implement [`Codec`], so a field type can be held as a
//! `&'static dyn Codec` and driven uniformly by a framing layer. Every
//! operation is pure and allocation-free; encoded bytes are returned in a
//! fixed-capacity [`RawBytes`] buffer.
//!
//! An absent field (one holding its base type's invalid marker) decodes to
//! `None`, never to an error, and `None` encodes back to the exact marker
//! pattern. Wrapping layers pass `None` through untouched.

use chrono::NaiveDateTime;
use thiserror::Error;
use tinyvec::ArrayVec;

pub mod base;
pub mod known;
pub mod scale;
pub mod time;
pub mod variant;

/// Bytes produced by encoding a single field value.
///
/// Sized for the widest base type; narrower types fill a prefix.
pub type RawBytes = ArrayVec<[u8; 8]>;

/// A decoded field value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// An unsigned integer, either a bare scalar or a code no table matched.
    Uint(u64),
    /// A signed integer scalar.
    Int(i64),
    /// A floating-point scalar.
    Float(f64),
    /// The name a table associates with a code.
    Label(&'static str),
    /// A two-valued field.
    Bool(bool),
    /// A physically scaled quantity.
    Quantity(Quantity),
    /// A calendar timestamp, in the wall-clock sense; any zone is applied by
    /// the surrounding decoder.
    Timestamp(NaiveDateTime),
}

/// A physical quantity and the unit it is measured in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity {
    pub value: f64,
    pub unit: &'static str,
}

/// An error decoding a field value.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Fewer bytes were supplied than the field's width requires.
    #[error("Expected {expected} bytes for the field, found {found}.")]
    UnexpectedEnd { expected: usize, found: usize },
}

/// An error encoding a field value.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The value does not fit the field's storage width.
    #[error("Value does not fit the field's width.")]
    Overflow,
    /// The value's encoding would equal the field's invalid marker, making it
    /// indistinguishable from an absent field.
    #[error("Encoding would equal the field's invalid marker.")]
    Reserved,
    /// No code in the field's table corresponds to the label.
    #[error("No code corresponds to the label \"{0}\".")]
    UnknownVariant(&'static str),
    /// The value's shape does not belong to the field type.
    #[error("Value does not match the field's type.")]
    Mismatched,
}

/// A two-way converter between a field's wire bytes and its decoded value.
///
/// Implementations are stateless descriptors; decoding and encoding are pure
/// functions of the arguments and the descriptor's static configuration, and
/// are safe to call concurrently.
pub trait Codec {
    /// The number of bytes one value of this field occupies on the wire.
    fn width(&self) -> usize;

    /// Decode a value from the head of `r`.
    ///
    /// Returns `None` when the field holds its invalid marker. Errs when `r`
    /// carries fewer than [`width`](Codec::width) bytes.
    fn decode(&self, r: &[u8], is_little_endian: bool) -> Result<Option<Value>, DecodeError>;

    /// Encode a value, `None` standing for an absent field.
    fn encode(&self, v: Option<Value>, is_little_endian: bool) -> Result<RawBytes, EncodeError>;
}
