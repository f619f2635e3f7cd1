//! Closed sets of named variants.

use super::base::{BaseType, U8};
use super::known::Known;
use super::{Codec, DecodeError, EncodeError, RawBytes, Value};

/// A base type whose codes form a closed set of named variants.
///
/// Unlike [`Known`], whose table deliberately names only part of a field's
/// range, an enumeration's table is declared total over the field's legal
/// domain. A code outside the table is out-of-spec rather than expected, but
/// newer devices do produce them, so decoding falls back to the bare integer
/// the same way the partial tables do instead of failing. Encoding a label
/// the table does not carry is always an error.
#[derive(Debug)]
pub struct Variants<B: BaseType> {
    table: Known<B>,
}

impl<B: BaseType> Variants<B> {
    /// Build a field type from a table sorted ascending by code.
    pub const fn new(table: &'static [(B::Raw, &'static str)]) -> Self {
        Self {
            table: Known::new(table),
        }
    }
}

impl<B: BaseType> Variants<B>
where
    B::Raw: Ord,
{
    /// The variant declared for a code, if any.
    pub fn variant(&self, code: B::Raw) -> Option<&'static str> {
        self.table.label(code)
    }

    /// The code declared for a variant, if any.
    pub fn code(&self, variant: &str) -> Option<B::Raw> {
        self.table.code(variant)
    }
}

impl<B: BaseType> Codec for Variants<B>
where
    B::Raw: Ord,
{
    fn width(&self) -> usize {
        self.table.width()
    }

    fn decode(&self, r: &[u8], is_little_endian: bool) -> Result<Option<Value>, DecodeError> {
        self.table.decode(r, is_little_endian)
    }

    fn encode(&self, v: Option<Value>, is_little_endian: bool) -> Result<RawBytes, EncodeError> {
        self.table.encode(v, is_little_endian)
    }
}

/// The protocol's two-valued enumeration.
///
/// Stored as a `uint8`, `0` for false and `1` for true. Other codes are
/// out-of-spec and decode to the bare integer.
#[derive(Debug)]
pub struct Boolean;

impl Boolean {
    pub const fn new() -> Self {
        Self
    }
}

impl Codec for Boolean {
    fn width(&self) -> usize {
        1
    }

    fn decode(&self, r: &[u8], is_little_endian: bool) -> Result<Option<Value>, DecodeError> {
        Ok(U8::decode(r, is_little_endian)?.map(|code| match code {
            0 => Value::Bool(false),
            1 => Value::Bool(true),
            code => Value::Uint(code.into()),
        }))
    }

    fn encode(&self, v: Option<Value>, is_little_endian: bool) -> Result<RawBytes, EncodeError> {
        match v {
            None => U8::encode(None, is_little_endian),
            Some(Value::Bool(b)) => U8::encode(Some(b.into()), is_little_endian),
            Some(v) => U8::encode(Some(U8::from_value(v)?), is_little_endian),
        }
    }
}
