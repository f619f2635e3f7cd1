//! Calendar timestamps against the protocol's reference instant.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

use super::base::{BaseType, U32};
use super::{Codec, DecodeError, EncodeError, RawBytes, Value};

/// A field counting seconds since 00:00, December 31, 1989.
///
/// Stored as a `uint32`. The timestamp carries no zone: absolute fields hold
/// UTC seconds and local fields hold wall-clock seconds, a distinction the
/// surrounding decoder makes when interpreting the decoded value. The
/// arithmetic is identical for both.
#[derive(Debug)]
pub struct DateTime;

impl DateTime {
    pub const fn new() -> Self {
        Self
    }
}

/// The instant offsets are counted from.
fn reference() -> NaiveDateTime {
    // A literal, always-valid calendar date.
    NaiveDate::from_ymd_opt(1989, 12, 31)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

impl Codec for DateTime {
    fn width(&self) -> usize {
        4
    }

    fn decode(&self, r: &[u8], is_little_endian: bool) -> Result<Option<Value>, DecodeError> {
        Ok(U32::decode(r, is_little_endian)?
            .map(|offset| Value::Timestamp(reference() + TimeDelta::seconds(offset.into()))))
    }

    fn encode(&self, v: Option<Value>, is_little_endian: bool) -> Result<RawBytes, EncodeError> {
        match v {
            None => U32::encode(None, is_little_endian),
            Some(Value::Timestamp(t)) => {
                if t < reference() {
                    return Err(EncodeError::Overflow);
                }

                let offset = t.signed_duration_since(reference()).num_seconds();
                let offset = u32::try_from(offset).map_err(|_| EncodeError::Overflow)?;

                U32::encode(Some(offset), is_little_endian)
            }
            Some(_) => Err(EncodeError::Mismatched),
        }
    }
}
