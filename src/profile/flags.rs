//! Typed views over bit-flag fields.
//!
//! Flag fields use the zero-marker base types: each bit is one capability,
//! and a value with several bits set carries several capabilities at once.
//! The code tables in [`super::types`] name the single-bit codes; the
//! containers here give combined values typed accessors. Build one from the
//! raw integer the field decodes to.

use tartan_bitfield::{Bitfield, bitfield_accessors};

/// Same expansion as [`tartan_bitfield::bitfield`], but with a public inner
/// field so callers can construct a container straight from its raw integer.
macro_rules! bitfield {
    [
        $( #[$meta:meta] )*
        $vis:vis struct $struct:ident($underlying_type:ty) {
            $($body:tt)*
        }
    ] => {
        $( #[$meta] )*
        #[repr(transparent)]
        #[derive(Default, Clone, Copy, PartialEq, Eq)]
        $vis struct $struct(pub $underlying_type);

        impl $struct {
            bitfield_accessors! { $($body)* }
        }

        impl Bitfield<$underlying_type> for $struct {}

        impl ::core::convert::From<$underlying_type> for $struct {
            #[inline(always)]
            fn from(val: $underlying_type) -> Self { Self(val) }
        }

        impl ::core::convert::From<$struct> for $underlying_type {
            #[inline(always)]
            fn from(val: $struct) -> Self { val.0 }
        }

        impl ::core::fmt::Debug for $struct {
            fn fmt(&self, f: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
                let mut struct_out = f.debug_struct(stringify!($struct));
                struct_out.field("<value>", &self.0);
                self.fmt_fields(&mut struct_out);
                struct_out.finish()
            }
        }
    };
}

bitfield! {
    /// Permitted operations on a file.
    pub struct FileFlags(u8) {
        [1] pub read,
        [2] pub write,
        [3] pub erase,
    }
}

bitfield! {
    /// Sports a device supports, first page.
    pub struct SportBits0(u8) {
        [0] pub generic,
        [1] pub running,
        [2] pub cycling,
        [3] pub transition,
        [4] pub fitness_equipment,
        [5] pub swimming,
        [6] pub basketball,
        [7] pub soccer,
    }
}

bitfield! {
    /// Processing applied to a course file.
    pub struct CourseCapabilities(u32) {
        [0] pub processed,
        [1] pub valid,
        [2] pub time,
        [3] pub distance,
        [4] pub position,
        [5] pub heart_rate,
        [6] pub power,
        [7] pub cadence,
        [8] pub training,
        [9] pub navigation,
    }
}

bitfield! {
    /// Workout features a device supports.
    pub struct WorkoutCapabilities(u32) {
        [0] pub interval,
        [1] pub custom,
        [2] pub fitness_equipment,
        [3] pub firstbeat,
        [4] pub new_leaf,
        [5] pub tcx,
        [7] pub speed,
        [8] pub heart_rate,
        [9] pub distance,
        [10] pub cadence,
        [11] pub power,
        [12] pub grade,
        [13] pub resistance,
        [14] pub protected,
    }
}

bitfield! {
    /// Connectivity features a device supports.
    pub struct ConnectivityCapabilities(u32) {
        [0] pub bluetooth,
        [1] pub bluetooth_le,
        [2] pub ant,
        [3] pub activity_upload,
        [4] pub course_download,
        [5] pub workout_download,
        [6] pub live_track,
        [7] pub weather_conditions,
        [8] pub weather_alerts,
        [9] pub gps_ephemeris_download,
        [10] pub explicit_archive,
        [11] pub setup_incomplete,
    }
}
