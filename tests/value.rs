use chrono::NaiveDate;

use cogset::value::base::{BaseType, I16, Plain, U8, U8Z, U16, U16Z, U32};
use cogset::value::known::Known;
use cogset::value::scale::{KnownOrScaled, Scaled};
use cogset::value::time::DateTime;
use cogset::value::variant::{Boolean, Variants};
use cogset::value::{Codec, DecodeError, EncodeError, Quantity, Value};

#[test]
fn primitive_round_trip() {
    assert_eq!(U16::decode(&[0x34, 0x12], true).unwrap(), Some(0x1234));
    assert_eq!(U16::decode(&[0x34, 0x12], false).unwrap(), Some(0x3412));

    assert_eq!(&U16::encode(Some(0x1234), true).unwrap()[..], [0x34, 0x12]);
    assert_eq!(&U16::encode(Some(0x1234), false).unwrap()[..], [0x12, 0x34]);

    assert_eq!(I16::decode(&[0xFE, 0xFF], true).unwrap(), Some(-2));
    assert_eq!(&I16::encode(Some(-2), true).unwrap()[..], [0xFE, 0xFF]);
}

#[test]
fn primitive_invalid_marker() {
    assert_eq!(U8::decode(&[0xFF], true).unwrap(), None);
    assert_eq!(U16::decode(&[0xFF, 0xFF], true).unwrap(), None);
    assert_eq!(U32::decode(&[0xFF; 4], true).unwrap(), None);

    assert_eq!(&U8::encode(None, true).unwrap()[..], [0xFF]);
    assert_eq!(&U16::encode(None, false).unwrap()[..], [0xFF, 0xFF]);
}

#[test]
fn zero_marker_types() {
    // Zero is the marker; all-bits-set is an ordinary value.
    assert_eq!(U8Z::decode(&[0x00], true).unwrap(), None);
    assert_eq!(U8Z::decode(&[0xFF], true).unwrap(), Some(0xFF));
    assert_eq!(U16Z::decode(&[0x00, 0x00], true).unwrap(), None);
    assert_eq!(U16Z::decode(&[0xFF, 0xFF], true).unwrap(), Some(0xFFFF));

    assert_eq!(&U16Z::encode(None, true).unwrap()[..], [0x00, 0x00]);
}

#[test]
fn encoding_marker_pattern_as_value_is_refused() {
    assert!(matches!(
        U8::encode(Some(0xFF), true),
        Err(EncodeError::Reserved)
    ));
    assert!(matches!(
        U16Z::encode(Some(0), true),
        Err(EncodeError::Reserved)
    ));
}

#[test]
fn truncated_input() {
    assert!(matches!(
        U32::decode(&[0x01, 0x02], true),
        Err(DecodeError::UnexpectedEnd {
            expected: 4,
            found: 2,
        })
    ));
}

#[test]
fn plain_codec_wraps_primitive() {
    let field = Plain::<U16>::new();

    assert_eq!(field.width(), 2);
    assert_eq!(
        field.decode(&[0x34, 0x12], true).unwrap(),
        Some(Value::Uint(0x1234))
    );
    assert_eq!(
        &field.encode(Some(Value::Uint(0x1234)), true).unwrap()[..],
        [0x34, 0x12]
    );

    assert!(matches!(
        field.encode(Some(Value::Uint(0x1_0000)), true),
        Err(EncodeError::Overflow)
    ));
    assert!(matches!(
        field.encode(Some(Value::Bool(true)), true),
        Err(EncodeError::Mismatched)
    ));
}

static STATUS: Known<U8> = Known::new(&[(1, "New"), (5, "Critical")]);

#[test]
fn known_codes_decode_to_labels() {
    assert_eq!(
        STATUS.decode(&[5], true).unwrap(),
        Some(Value::Label("Critical"))
    );
    assert_eq!(&STATUS.encode(Some(Value::Label("Critical")), true).unwrap()[..], [5]);
}

#[test]
fn unlisted_codes_fall_back_to_the_integer() {
    assert_eq!(STATUS.decode(&[9], true).unwrap(), Some(Value::Uint(9)));
    assert_eq!(&STATUS.encode(Some(Value::Uint(9)), true).unwrap()[..], [9]);
}

#[test]
fn known_invalid_propagates() {
    assert_eq!(STATUS.decode(&[0xFF], true).unwrap(), None);
    assert_eq!(&STATUS.encode(None, true).unwrap()[..], [0xFF]);
}

#[test]
fn unknown_label_is_refused() {
    assert!(matches!(
        STATUS.encode(Some(Value::Label("Bogus")), true),
        Err(EncodeError::UnknownVariant("Bogus"))
    ));
}

static TENTHS: Scaled<U16> = Scaled::new(10.0, 0.0, "x");

#[test]
fn scaled_decode_applies_the_transform() {
    assert_eq!(
        TENTHS.decode(&[0x8F, 0x02], true).unwrap(),
        Some(Value::Quantity(Quantity {
            value: 65.5,
            unit: "x",
        }))
    );
}

#[test]
fn scaled_encode_inverts_the_transform() {
    let quantity = Value::Quantity(Quantity {
        value: 65.5,
        unit: "x",
    });

    // 65.5 * 10 = 655 = 0x028F.
    assert_eq!(&TENTHS.encode(Some(quantity), true).unwrap()[..], [0x8F, 0x02]);
}

#[test]
fn scaled_with_offset() {
    let altitude = Scaled::<U16>::new(5.0, 500.0, "m");

    // 3000 / 5 - 500 = 100.
    assert_eq!(
        altitude.decode(&[0xB8, 0x0B], true).unwrap(),
        Some(Value::Quantity(Quantity {
            value: 100.0,
            unit: "m",
        }))
    );

    let quantity = Value::Quantity(Quantity {
        value: 100.0,
        unit: "m",
    });
    assert_eq!(&altitude.encode(Some(quantity), true).unwrap()[..], [0xB8, 0x0B]);
}

#[test]
fn scaled_rounds_halves_away_from_zero() {
    let quantity = Value::Quantity(Quantity {
        value: 6.45,
        unit: "x",
    });

    // 6.45 * 10 = 64.5, rounded away from zero.
    assert_eq!(&TENTHS.encode(Some(quantity), true).unwrap()[..], [65, 0]);

    let grade = Scaled::<I16>::new(10.0, 0.0, "%");
    let quantity = Value::Quantity(Quantity {
        value: -6.45,
        unit: "%",
    });

    let raw = grade.encode(Some(quantity), true).unwrap();
    assert_eq!(i16::from_le_bytes([raw[0], raw[1]]), -65);
}

#[test]
fn scaled_range_and_marker_collisions_are_refused() {
    let bare = Scaled::<U8>::new(1.0, 0.0, "x");

    assert!(matches!(
        bare.encode(
            Some(Value::Quantity(Quantity {
                value: 300.0,
                unit: "x",
            })),
            true,
        ),
        Err(EncodeError::Overflow)
    ));

    // Rounds onto the invalid marker.
    assert!(matches!(
        bare.encode(
            Some(Value::Quantity(Quantity {
                value: 255.0,
                unit: "x",
            })),
            true,
        ),
        Err(EncodeError::Reserved)
    ));
}

#[test]
fn scaled_unit_mismatch_is_refused() {
    assert!(matches!(
        TENTHS.encode(
            Some(Value::Quantity(Quantity {
                value: 65.5,
                unit: "kg",
            })),
            true,
        ),
        Err(EncodeError::Mismatched)
    ));
}

#[test]
fn scaled_invalid_propagates() {
    assert_eq!(TENTHS.decode(&[0xFF, 0xFF], true).unwrap(), None);
}

static WEIGHT: KnownOrScaled<U16> =
    KnownOrScaled::new(&[(0xFFFE, "Calculating")], 100.0, 0.0, "kg");

#[test]
fn composite_routes_codes_before_quantities() {
    // The reserved code is symbolic, not a 655.34 kg reading.
    assert_eq!(
        WEIGHT.decode(&[0xFE, 0xFF], true).unwrap(),
        Some(Value::Label("Calculating"))
    );

    // 7500 / 100 = 75 kg.
    assert_eq!(
        WEIGHT.decode(&[0x4C, 0x1D], true).unwrap(),
        Some(Value::Quantity(Quantity {
            value: 75.0,
            unit: "kg",
        }))
    );

    // The base type's marker is neither a label nor a reading.
    assert_eq!(WEIGHT.decode(&[0xFF, 0xFF], true).unwrap(), None);
}

#[test]
fn composite_encode_mirrors_the_order() {
    assert_eq!(
        &WEIGHT.encode(Some(Value::Label("Calculating")), true).unwrap()[..],
        [0xFE, 0xFF]
    );

    let quantity = Value::Quantity(Quantity {
        value: 75.0,
        unit: "kg",
    });
    assert_eq!(&WEIGHT.encode(Some(quantity), true).unwrap()[..], [0x4C, 0x1D]);

    // Bare integers pass through unchanged.
    assert_eq!(
        &WEIGHT.encode(Some(Value::Uint(0x1D4C)), true).unwrap()[..],
        [0x4C, 0x1D]
    );

    assert_eq!(&WEIGHT.encode(None, true).unwrap()[..], [0xFF, 0xFF]);
}

static TRIGGER: Variants<U8> = Variants::new(&[(0, "Manual"), (1, "Time")]);

#[test]
fn variants_decode_and_encode() {
    assert_eq!(
        TRIGGER.decode(&[1], true).unwrap(),
        Some(Value::Label("Time"))
    );
    assert_eq!(&TRIGGER.encode(Some(Value::Label("Manual")), true).unwrap()[..], [0]);

    assert!(matches!(
        TRIGGER.encode(Some(Value::Label("Bogus")), true),
        Err(EncodeError::UnknownVariant("Bogus"))
    ));
}

#[test]
fn undeclared_variant_codes_fall_back_to_the_integer() {
    assert_eq!(TRIGGER.decode(&[9], true).unwrap(), Some(Value::Uint(9)));
    assert_eq!(TRIGGER.decode(&[0xFF], true).unwrap(), None);
}

#[test]
fn boolean_codes() {
    let field = Boolean::new();

    assert_eq!(field.decode(&[0], true).unwrap(), Some(Value::Bool(false)));
    assert_eq!(field.decode(&[1], true).unwrap(), Some(Value::Bool(true)));
    assert_eq!(field.decode(&[7], true).unwrap(), Some(Value::Uint(7)));
    assert_eq!(field.decode(&[0xFF], true).unwrap(), None);

    assert_eq!(&field.encode(Some(Value::Bool(true)), true).unwrap()[..], [1]);
    assert_eq!(&field.encode(None, true).unwrap()[..], [0xFF]);
}

#[test]
fn timestamps_count_from_the_reference_instant() {
    let field = DateTime::new();

    let reference = NaiveDate::from_ymd_opt(1989, 12, 31)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    assert_eq!(
        field.decode(&[0, 0, 0, 0], true).unwrap(),
        Some(Value::Timestamp(reference))
    );

    let next_day = NaiveDate::from_ymd_opt(1990, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    // 86400 = 0x00015180.
    assert_eq!(
        field.decode(&[0x80, 0x51, 0x01, 0x00], true).unwrap(),
        Some(Value::Timestamp(next_day))
    );

    assert_eq!(
        &field.encode(Some(Value::Timestamp(reference)), true).unwrap()[..],
        [0, 0, 0, 0]
    );
    assert_eq!(
        &field.encode(Some(Value::Timestamp(next_day)), true).unwrap()[..],
        [0x80, 0x51, 0x01, 0x00]
    );
}

#[test]
fn timestamps_before_the_reference_are_refused() {
    let field = DateTime::new();

    let before = NaiveDate::from_ymd_opt(1989, 12, 30)
        .unwrap()
        .and_hms_opt(23, 59, 59)
        .unwrap();

    assert!(matches!(
        field.encode(Some(Value::Timestamp(before)), true),
        Err(EncodeError::Overflow)
    ));
}

#[test]
fn timestamp_invalid_propagates() {
    let field = DateTime::new();

    assert_eq!(field.decode(&[0xFF; 4], true).unwrap(), None);
    assert_eq!(&field.encode(None, true).unwrap()[..], [0xFF; 4]);
}

#[test]
fn field_types_dispatch_as_trait_objects() {
    let fields: [&dyn Codec; 4] = [&STATUS, &TENTHS, &WEIGHT, &TRIGGER];

    assert_eq!(fields[0].width(), 1);
    assert_eq!(fields[1].width(), 2);

    assert_eq!(
        fields[3].decode(&[0], true).unwrap(),
        Some(Value::Label("Manual"))
    );
    assert_eq!(
        fields[2].decode(&[0xFE, 0xFF], true).unwrap(),
        Some(Value::Label("Calculating"))
    );
}
