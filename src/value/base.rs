//! Fixed-width base types and their invalid markers.
//!
//! Every field is stored as one of the base types below. Each reserves one
//! bit pattern as an *invalid marker*, written when a device has no value
//! for the field. Two marker conventions exist and are fixed per type, never
//! inferred from a value's magnitude:
//!
//! - Standard types (`U8`, `U16`, ..., `I64`) reserve the all-bits-set
//!   pattern, `2^W - 1` for the unsigned types.
//! - The `Z`-suffixed types reserve zero instead. These hold bit-flag sets,
//!   where all-bits-set is a legitimate "every flag on" value.
//!
//! Decoding yields `None` for the marker pattern, and `None` encodes back to
//! the exact marker bytes. Encoding a present value that happens to equal
//! the marker is refused, keeping decode-then-encode an identity.

use core::fmt::Debug;
use core::marker::PhantomData;

use super::{Codec, DecodeError, EncodeError, RawBytes, Value};

/// A fixed-width storage type for field values.
pub trait BaseType {
    /// The primitive this base type decodes to.
    type Raw: Copy + PartialEq + Debug + 'static;
    /// The on-wire bytes of one value.
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default;

    /// The reserved pattern marking an absent field.
    const INVALID: Self::Raw;

    /// Reinterpret on-wire bytes as the primitive, if not the invalid marker.
    fn from_bytes(r: Self::Bytes, is_little_endian: bool) -> Option<Self::Raw>;

    /// Produce the on-wire bytes of a value, `None` standing for an absent
    /// field.
    fn to_bytes(v: Option<Self::Raw>, is_little_endian: bool)
    -> Result<Self::Bytes, EncodeError>;

    /// Wrap a raw value in the corresponding [`Value`] arm.
    fn to_value(v: Self::Raw) -> Value;

    /// Extract a raw value from the corresponding [`Value`] arm.
    fn from_value(v: Value) -> Result<Self::Raw, EncodeError>;

    /// Widen a raw value for scale arithmetic.
    fn to_f64(v: Self::Raw) -> f64;

    /// Narrow a scaled result to a raw value, rounding halves away from zero.
    fn from_physical(v: f64) -> Result<Self::Raw, EncodeError>;

    /// Decode a raw value from the head of `r`.
    fn decode(r: &[u8], is_little_endian: bool) -> Result<Option<Self::Raw>, DecodeError> {
        let mut b = <Self::Bytes as Default>::default();
        let width = b.as_ref().len();

        let Some(head) = r.get(..width) else {
            return Err(DecodeError::UnexpectedEnd {
                expected: width,
                found: r.len(),
            });
        };

        b.as_mut().copy_from_slice(head);
        Ok(Self::from_bytes(b, is_little_endian))
    }

    /// Encode a raw value, `None` standing for an absent field.
    fn encode(v: Option<Self::Raw>, is_little_endian: bool) -> Result<RawBytes, EncodeError> {
        let b = Self::to_bytes(v, is_little_endian)?;

        let mut out = RawBytes::new();
        out.extend_from_slice(b.as_ref());
        Ok(out)
    }
}

/// Round to the nearest integer, halves away from zero.
fn round_half_away(v: f64) -> Result<i128, EncodeError> {
    if !v.is_finite() {
        return Err(EncodeError::Overflow);
    }

    let shifted = if v < 0.0 { v - 0.5 } else { v + 0.5 };

    Ok(shifted as i128)
}

macro_rules! base_type {
    (@bytes $raw:ident, $invalid:ident) => {
        type Raw = $raw;
        type Bytes = [u8; size_of::<$raw>()];

        const INVALID: $raw = $raw::$invalid;

        fn from_bytes(r: Self::Bytes, is_little_endian: bool) -> Option<$raw> {
            let x = if is_little_endian {
                $raw::from_le_bytes(r)
            } else {
                $raw::from_be_bytes(r)
            };

            if x != Self::INVALID { Some(x) } else { None }
        }

        fn to_bytes(
            v: Option<$raw>,
            is_little_endian: bool,
        ) -> Result<Self::Bytes, EncodeError> {
            let x = match v {
                Some(x) if x == Self::INVALID => return Err(EncodeError::Reserved),
                Some(x) => x,
                None => Self::INVALID,
            };

            Ok(if is_little_endian {
                x.to_le_bytes()
            } else {
                x.to_be_bytes()
            })
        }
    };
    (unsigned $t:ident, $raw:ident, $invalid:ident, $(#[$attr:meta])*) => {
        $(#[$attr])*
        #[derive(Debug)]
        pub struct $t;

        impl BaseType for $t {
            base_type!(@bytes $raw, $invalid);

            fn to_value(v: $raw) -> Value {
                Value::Uint(v.into())
            }

            fn from_value(v: Value) -> Result<$raw, EncodeError> {
                match v {
                    Value::Uint(x) => x.try_into().map_err(|_| EncodeError::Overflow),
                    _ => Err(EncodeError::Mismatched),
                }
            }

            fn to_f64(v: $raw) -> f64 {
                v as f64
            }

            fn from_physical(v: f64) -> Result<$raw, EncodeError> {
                round_half_away(v)?
                    .try_into()
                    .map_err(|_| EncodeError::Overflow)
            }
        }
    };
    (signed $t:ident, $raw:ident, $invalid:ident, $(#[$attr:meta])*) => {
        $(#[$attr])*
        #[derive(Debug)]
        pub struct $t;

        impl BaseType for $t {
            base_type!(@bytes $raw, $invalid);

            fn to_value(v: $raw) -> Value {
                Value::Int(v.into())
            }

            fn from_value(v: Value) -> Result<$raw, EncodeError> {
                match v {
                    Value::Int(x) => x.try_into().map_err(|_| EncodeError::Overflow),
                    _ => Err(EncodeError::Mismatched),
                }
            }

            fn to_f64(v: $raw) -> f64 {
                v as f64
            }

            fn from_physical(v: f64) -> Result<$raw, EncodeError> {
                round_half_away(v)?
                    .try_into()
                    .map_err(|_| EncodeError::Overflow)
            }
        }
    };
    (float $t:ident, $raw:ident, $invalid:ident, $(#[$attr:meta])*) => {
        $(#[$attr])*
        #[derive(Debug)]
        pub struct $t;

        impl BaseType for $t {
            base_type!(@bytes $raw, $invalid);

            fn to_value(v: $raw) -> Value {
                Value::Float(v.into())
            }

            fn from_value(v: Value) -> Result<$raw, EncodeError> {
                match v {
                    Value::Float(x) => Ok(x as $raw),
                    _ => Err(EncodeError::Mismatched),
                }
            }

            fn to_f64(v: $raw) -> f64 {
                v.into()
            }

            fn from_physical(v: f64) -> Result<$raw, EncodeError> {
                Ok(v as $raw)
            }
        }
    };
}

base_type!(unsigned U8, u8, MAX, /** `uint8`, `enum`, `byte` */);
base_type!(unsigned U8Z, u8, MIN, /** `uint8z`, `string` */);
base_type!(unsigned U16, u16, MAX, /** `uint16` */);
base_type!(unsigned U16Z, u16, MIN, /** `uint16z` */);
base_type!(unsigned U32, u32, MAX, /** `uint32` */);
base_type!(unsigned U32Z, u32, MIN, /** `uint32z` */);
base_type!(unsigned U64, u64, MAX, /** `uint64` */);
base_type!(unsigned U64Z, u64, MIN, /** `uint64z` */);

base_type!(signed I8, i8, MAX, /** `sint8` */);
base_type!(signed I16, i16, MAX, /** `sint16` */);
base_type!(signed I32, i32, MAX, /** `sint32` */);
base_type!(signed I64, i64, MAX, /** `sint64` */);

base_type!(float F32, f32, MAX, /** `float32` */);
base_type!(float F64, f64, MAX, /** `float64` */);

/// A field carrying its base type's primitive unchanged.
#[derive(Debug)]
pub struct Plain<B>(PhantomData<B>);

impl<B> Plain<B> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<B: BaseType> Codec for Plain<B> {
    fn width(&self) -> usize {
        size_of::<B::Bytes>()
    }

    fn decode(&self, r: &[u8], is_little_endian: bool) -> Result<Option<Value>, DecodeError> {
        Ok(B::decode(r, is_little_endian)?.map(B::to_value))
    }

    fn encode(&self, v: Option<Value>, is_little_endian: bool) -> Result<RawBytes, EncodeError> {
        let v = v.map(B::from_value).transpose()?;
        B::encode(v, is_little_endian)
    }
}
