use cogset::profile::flags::{ConnectivityCapabilities, FileFlags, SportBits0};
use cogset::profile::types;
use cogset::value::{Codec, Quantity, Value};

#[test]
fn message_numbers() {
    assert_eq!(
        types::MESG_NUM.decode(&[20, 0], true).unwrap(),
        Some(Value::Label("Record"))
    );
    assert_eq!(
        &types::MESG_NUM.encode(Some(Value::Label("Weight Scale")), true).unwrap()[..],
        [30, 0]
    );

    // A manufacturer-specific message number passes through.
    assert_eq!(
        types::MESG_NUM.decode(&[0x42, 0xFF], true).unwrap(),
        Some(Value::Uint(0xFF42))
    );
}

#[test]
fn manufacturers_and_products() {
    assert_eq!(
        types::MANUFACTURER.decode(&[1, 0], true).unwrap(),
        Some(Value::Label("Garmin"))
    );
    assert_eq!(
        types::MANUFACTURER.decode(&[255, 0], true).unwrap(),
        Some(Value::Label("Development"))
    );
    assert_eq!(
        types::PRODUCT.decode(&[0xFE, 0xFF], true).unwrap(),
        Some(Value::Label("Garmin Connect"))
    );
}

#[test]
fn battery_status() {
    assert_eq!(
        types::BATTERY_STATUS.decode(&[5], true).unwrap(),
        Some(Value::Label("Critical"))
    );
    assert_eq!(types::BATTERY_STATUS.decode(&[0xFF], true).unwrap(), None);
}

#[test]
fn file_kinds() {
    assert_eq!(
        types::FILE.decode(&[4], true).unwrap(),
        Some(Value::Label("Activity"))
    );
    assert_eq!(&types::FILE.encode(Some(Value::Label("Course")), true).unwrap()[..], [6]);
}

#[test]
fn sports() {
    assert_eq!(types::SPORT.variant(2), Some("Cycling"));
    assert_eq!(types::SPORT.code("All"), Some(254));
    assert_eq!(types::SUB_SPORT.variant(17), Some("Lap Swimming"));
}

#[test]
fn weight_scale_readings() {
    assert_eq!(
        types::WEIGHT.decode(&[0x4C, 0x1D], true).unwrap(),
        Some(Value::Quantity(Quantity {
            value: 75.0,
            unit: "kg",
        }))
    );
    assert_eq!(
        types::WEIGHT.decode(&[0xFE, 0xFF], true).unwrap(),
        Some(Value::Label("Calculating"))
    );
}

#[test]
fn scaled_fields() {
    // 2750 fifths of a meter, offset 500 m: 50 m.
    assert_eq!(
        types::ALTITUDE.decode(&[0xBE, 0x0A], true).unwrap(),
        Some(Value::Quantity(Quantity {
            value: 50.0,
            unit: "m",
        }))
    );

    // 2.5 m/s.
    assert_eq!(
        types::SPEED.decode(&[0xC4, 0x09], true).unwrap(),
        Some(Value::Quantity(Quantity {
            value: 2.5,
            unit: "m/s",
        }))
    );
}

#[test]
fn single_bit_flag_codes_decode_to_labels() {
    assert_eq!(
        types::FILE_FLAGS.decode(&[0x02], true).unwrap(),
        Some(Value::Label("Read"))
    );

    // A combination is not in the table; the integer falls through for the
    // typed containers below.
    assert_eq!(
        types::FILE_FLAGS.decode(&[0x0E], true).unwrap(),
        Some(Value::Uint(0x0E))
    );

    // Zero-marker family: zero means absent.
    assert_eq!(types::FILE_FLAGS.decode(&[0x00], true).unwrap(), None);
}

#[test]
fn flag_containers() {
    let flags = FileFlags(0x0E);
    assert!(flags.read());
    assert!(flags.write());
    assert!(flags.erase());

    let flags = FileFlags(0x02);
    assert!(flags.read());
    assert!(!flags.write());

    let sports = SportBits0(0x24);
    assert!(sports.cycling());
    assert!(sports.swimming());
    assert!(!sports.running());

    let connectivity = ConnectivityCapabilities(0x0000_0003);
    assert!(connectivity.bluetooth());
    assert!(connectivity.bluetooth_le());
    assert!(!connectivity.ant());
}

#[test]
fn timestamps_share_one_codec() {
    let raw = [0x80, 0x51, 0x01, 0x00];

    let absolute = types::DATE_TIME.decode(&raw, true).unwrap();
    let local = types::LOCAL_DATE_TIME.decode(&raw, true).unwrap();

    assert_eq!(absolute, local);
}
