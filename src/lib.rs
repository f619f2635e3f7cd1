#![no_std]

//! Typed field value codecs for Garmin's Flexible and Interoperable Data
//! Transfer protocol.
//!
//! Cogset converts the raw fixed-width integers stored in FIT record fields
//! to and from domain values: plain scalars, named codes, bit-flag sets,
//! physically scaled quantities, and calendar timestamps counted from the
//! protocol's 1989-12-31 reference instant. Each conversion preserves
//! round-trip fidelity and keeps "field absent" (a reserved marker pattern)
//! distinct from every decoded value.
//!
//! The crate covers values only. Record framing, definition messages, cyclic
//! redundancy checks, and I/O belong to a surrounding decoder, which resolves
//! each field's byte slice, width, and endianness before handing the bytes to
//! a codec from this crate.
//!
//! Most users should begin with the field types in the [`profile`] module and
//! the [`value::Codec`] trait they implement. Applications composing their
//! own field types can build them from the layers in the [`value`] module.

pub mod profile;
pub mod value;
