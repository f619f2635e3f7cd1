//! Linear transforms between raw integers and physical quantities.

use core::marker::PhantomData;

use either::Either::{Left, Right};

use super::base::BaseType;
use super::known::Known;
use super::{Codec, DecodeError, EncodeError, Quantity, RawBytes, Value};

/// A linear transform attached to a field: `physical = raw / scale - offset`.
#[derive(Debug, Clone, Copy)]
pub struct Scale {
    pub scale: f64,
    pub offset: f64,
    pub unit: &'static str,
}

impl Scale {
    /// The physical quantity a raw value stands for.
    pub fn physical(&self, raw: f64) -> f64 {
        raw / self.scale - self.offset
    }

    /// The unrounded raw value of a physical quantity.
    pub fn raw(&self, physical: f64) -> f64 {
        (physical + self.offset) * self.scale
    }
}

/// A base type carrying a physically scaled quantity.
///
/// Decoding divides by the scale and subtracts the offset; encoding inverts
/// the transform, rounding halves away from zero, and refuses results that
/// fall outside the base type's range or on its invalid marker. Scaling is
/// lossy: a round-trip is exact only to the scale's resolution.
#[derive(Debug)]
pub struct Scaled<B> {
    scale: Scale,
    _phantom: PhantomData<B>,
}

impl<B> Scaled<B> {
    pub const fn new(scale: f64, offset: f64, unit: &'static str) -> Self {
        Self {
            scale: Scale {
                scale,
                offset,
                unit,
            },
            _phantom: PhantomData,
        }
    }
}

impl<B: BaseType> Scaled<B> {
    fn quantity(&self, raw: B::Raw) -> Value {
        Value::Quantity(Quantity {
            value: self.scale.physical(B::to_f64(raw)),
            unit: self.scale.unit,
        })
    }

    fn narrow(&self, q: Quantity) -> Result<B::Raw, EncodeError> {
        // No conversion between units is attempted.
        if q.unit != self.scale.unit {
            return Err(EncodeError::Mismatched);
        }

        B::from_physical(self.scale.raw(q.value))
    }
}

impl<B: BaseType> Codec for Scaled<B> {
    fn width(&self) -> usize {
        size_of::<B::Bytes>()
    }

    fn decode(&self, r: &[u8], is_little_endian: bool) -> Result<Option<Value>, DecodeError> {
        Ok(B::decode(r, is_little_endian)?.map(|raw| self.quantity(raw)))
    }

    fn encode(&self, v: Option<Value>, is_little_endian: bool) -> Result<RawBytes, EncodeError> {
        match v {
            None => B::encode(None, is_little_endian),
            Some(Value::Quantity(q)) => B::encode(Some(self.narrow(q)?), is_little_endian),
            Some(_) => Err(EncodeError::Mismatched),
        }
    }
}

/// A field mixing named codes with a scaled quantity.
///
/// A handful of fields reserve a few codes for symbolic states while the
/// rest of the range is a numeric reading: a weight of `0xFFFE` means a
/// measurement is still in progress, any other code is a reading in
/// hundredths of a kilogram. Decoding consults the code table first and
/// routes unmatched codes through the scale; the base type's invalid marker
/// stays invalid and reaches neither. Swapping the order would turn the
/// symbolic codes into nonsense quantities.
///
/// Encoding mirrors the decode order: labels look up their code, quantities
/// apply the scale, and bare integers pass through unchanged.
#[derive(Debug)]
pub struct KnownOrScaled<B: BaseType> {
    known: Known<B>,
    scaled: Scaled<B>,
}

impl<B: BaseType> KnownOrScaled<B> {
    /// Build a field type from a table sorted ascending by code and a scale.
    pub const fn new(
        table: &'static [(B::Raw, &'static str)],
        scale: f64,
        offset: f64,
        unit: &'static str,
    ) -> Self {
        Self {
            known: Known::new(table),
            scaled: Scaled::new(scale, offset, unit),
        }
    }
}

impl<B: BaseType> Codec for KnownOrScaled<B>
where
    B::Raw: Ord,
{
    fn width(&self) -> usize {
        size_of::<B::Bytes>()
    }

    fn decode(&self, r: &[u8], is_little_endian: bool) -> Result<Option<Value>, DecodeError> {
        Ok(B::decode(r, is_little_endian)?.map(|code| match self.known.resolve(code) {
            Left(label) => Value::Label(label),
            Right(raw) => self.scaled.quantity(raw),
        }))
    }

    fn encode(&self, v: Option<Value>, is_little_endian: bool) -> Result<RawBytes, EncodeError> {
        match v {
            None => B::encode(None, is_little_endian),
            Some(Value::Label(label)) => {
                let code = self
                    .known
                    .code(label)
                    .ok_or(EncodeError::UnknownVariant(label))?;

                B::encode(Some(code), is_little_endian)
            }
            Some(Value::Quantity(q)) => B::encode(Some(self.scaled.narrow(q)?), is_little_endian),
            Some(v) => B::encode(Some(B::from_value(v)?), is_little_endian),
        }
    }
}
