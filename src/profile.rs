//! Field types of the global profile.
//!
//! The protocol's profile assigns message fields semantic types: tables of
//! named codes, closed enumerations, scales, flag sets, and timestamp
//! interpretations. This module carries those assignments as static data
//! over the codecs in [`crate::value`]. It adds no behavior of its own, and
//! every item lives for the whole process.
//!
//! The set here covers the types common across file kinds. Fields the
//! profile leaves untyped are plain scalars; decode those with
//! [`crate::value::base::Plain`] directly.

pub mod flags;
pub mod types;
