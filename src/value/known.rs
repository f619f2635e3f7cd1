//! Tables naming some of a base type's codes.

use either::Either::{self, Left, Right};

use super::base::BaseType;
use super::{Codec, DecodeError, EncodeError, RawBytes, Value};

/// A base type overlaid with a table naming some of its codes.
///
/// The table is partial by design: codes it does not carry are not errors,
/// they decode to the bare integer, keeping reserved and
/// manufacturer-specific codes usable. Encoding is symmetric: labels look up
/// their code, bare integers pass through unchanged.
#[derive(Debug)]
pub struct Known<B: BaseType> {
    table: &'static [(B::Raw, &'static str)],
}

impl<B: BaseType> Known<B> {
    /// Build a field type from a table sorted ascending by code.
    pub const fn new(table: &'static [(B::Raw, &'static str)]) -> Self {
        Self { table }
    }
}

impl<B: BaseType> Known<B>
where
    B::Raw: Ord,
{
    /// The label the table carries for a code, if any.
    pub fn label(&self, code: B::Raw) -> Option<&'static str> {
        debug_assert!(self.table.is_sorted_by_key(|&(code, _)| code));

        self.table
            .binary_search_by(|&(c, _)| c.cmp(&code))
            .ok()
            .map(|i| self.table[i].1)
    }

    /// The code the table carries for a label, if any.
    pub fn code(&self, label: &str) -> Option<B::Raw> {
        self.table
            .iter()
            .find(|&&(_, l)| l == label)
            .map(|&(c, _)| c)
    }

    /// Resolve a code against the table, `Right` carrying codes the table
    /// does not name.
    pub fn resolve(&self, code: B::Raw) -> Either<&'static str, B::Raw> {
        match self.label(code) {
            Some(label) => Left(label),
            None => Right(code),
        }
    }
}

impl<B: BaseType> Codec for Known<B>
where
    B::Raw: Ord,
{
    fn width(&self) -> usize {
        size_of::<B::Bytes>()
    }

    fn decode(&self, r: &[u8], is_little_endian: bool) -> Result<Option<Value>, DecodeError> {
        Ok(B::decode(r, is_little_endian)?.map(|code| match self.resolve(code) {
            Left(label) => Value::Label(label),
            Right(code) => B::to_value(code),
        }))
    }

    fn encode(&self, v: Option<Value>, is_little_endian: bool) -> Result<RawBytes, EncodeError> {
        match v {
            None => B::encode(None, is_little_endian),
            Some(Value::Label(label)) => {
                let code = self
                    .code(label)
                    .ok_or(EncodeError::UnknownVariant(label))?;

                B::encode(Some(code), is_little_endian)
            }
            Some(v) => B::encode(Some(B::from_value(v)?), is_little_endian),
        }
    }
}
