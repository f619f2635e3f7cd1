//! Static field type definitions.
//!
//! Tables are sorted ascending by code. Labels follow the profile's
//! published names.

use crate::value::base::{I16, U8, U8Z, U16, U32, U32Z};
use crate::value::known::Known;
use crate::value::scale::{KnownOrScaled, Scaled};
use crate::value::time::DateTime;
use crate::value::variant::{Boolean, Variants};

/// Seconds since the reference instant, UTC.
pub static DATE_TIME: DateTime = DateTime::new();

/// Seconds since the reference instant, in the device's wall-clock time.
pub static LOCAL_DATE_TIME: DateTime = DateTime::new();

pub static BOOL: Boolean = Boolean::new();

/// Registered device manufacturers. Codes outside the registry decode to
/// their bare integer.
pub static MANUFACTURER: Known<U16> = Known::new(&[
    (1, "Garmin"),
    (2, "Garmin FR405 ANTFS"),
    (3, "Zephyr"),
    (4, "Dayton"),
    (5, "IDT"),
    (6, "SRM"),
    (7, "Quarq"),
    (8, "iBike"),
    (9, "Saris"),
    (10, "Spark HK"),
    (11, "Tanita"),
    (12, "Echowell"),
    (13, "Dynastream OEM"),
    (14, "Nautilus"),
    (15, "Dynastream"),
    (16, "Timex"),
    (17, "Metrigear"),
    (18, "Xelic"),
    (19, "Beurer"),
    (20, "Cardiosport"),
    (21, "A&D"),
    (23, "Suunto"),
    (255, "Development"),
]);

/// Manufacturer product codes. The registry names only a handful; the rest
/// decode to their bare integer.
pub static PRODUCT: Known<U16> = Known::new(&[
    (1551, "Garmin Fēnix"),
    (65534, "Garmin Connect"),
]);

pub static MESSAGE_INDEX: Known<U16> = Known::new(&[
    (0x0FFF, "Mask"),
    (0x7000, "Reserved"),
    (0x8000, "Selected"),
]);

pub static LEFT_RIGHT_BALANCE: Known<U8> = Known::new(&[
    (0x7F, "Mask"),
    (0x80, "Right"),
]);

pub static LEFT_RIGHT_BALANCE_100: Known<U16> = Known::new(&[
    (0x3FFF, "Mask"),
    (0x8000, "Right"),
]);

pub static DEVICE_INDEX: Known<U8> = Known::new(&[(0, "Creator")]);

pub static BATTERY_STATUS: Known<U8> = Known::new(&[
    (1, "New"),
    (2, "Good"),
    (3, "Ok"),
    (4, "Low"),
    (5, "Critical"),
]);

/// Global message numbers. 0xFF00 through 0xFFFE are reserved for
/// manufacturer-specific messages.
pub static MESG_NUM: Known<U16> = Known::new(&[
    (0, "File ID"),
    (1, "Capabilities"),
    (2, "Device Settings"),
    (3, "User Profile"),
    (4, "HRM Profile"),
    (5, "SDM Profile"),
    (6, "Bike Profile"),
    (7, "Zones Target"),
    (8, "HR Zone"),
    (9, "Power Zone"),
    (10, "Met Zone"),
    (12, "Sport"),
    (15, "Goal"),
    (18, "Session"),
    (19, "Lap"),
    (20, "Record"),
    (21, "Event"),
    (23, "Device Info"),
    (26, "Workout"),
    (27, "Workout Step"),
    (28, "Schedule"),
    (30, "Weight Scale"),
    (31, "Course"),
    (32, "Course Point"),
    (33, "Totals"),
    (34, "Activity"),
    (35, "Software"),
    (37, "File Capabilities"),
    (38, "Mesg Capabilities"),
    (39, "Field Capabilities"),
    (49, "File Creator"),
    (51, "Blood Pressure"),
    (53, "Speed Zone"),
    (55, "Monitoring"),
    (78, "HRV"),
    (101, "Length"),
    (103, "Monitoring Info"),
    (105, "Pad"),
    (106, "Slave Device"),
    (132, "Cadence Zone"),
    (145, "Memo Glob"),
    (0xFF00, "Mfg Range Min"),
    (0xFFFE, "Mfg Range Max"),
]);

/// Body weight in hundredths of a kilogram, with one code reserved for a
/// measurement still in progress.
pub static WEIGHT: KnownOrScaled<U16> =
    KnownOrScaled::new(&[(0xFFFE, "Calculating")], 100.0, 0.0, "kg");

/// Altitude in fifths of a meter, offset 500 m below sea level.
pub static ALTITUDE: Scaled<U16> = Scaled::new(5.0, 500.0, "m");

/// Speed in thousandths of a meter per second.
pub static SPEED: Scaled<U16> = Scaled::new(1000.0, 0.0, "m/s");

/// Distance in hundredths of a meter.
pub static DISTANCE: Scaled<U32> = Scaled::new(100.0, 0.0, "m");

/// Grade in hundredths of a percent.
pub static GRADE: Scaled<I16> = Scaled::new(100.0, 0.0, "%");

pub static COURSE_CAPABILITIES: Known<U32Z> = Known::new(&[
    (0x0000_0001, "Processed"),
    (0x0000_0002, "Valid"),
    (0x0000_0004, "Time"),
    (0x0000_0008, "Distance"),
    (0x0000_0010, "Position"),
    (0x0000_0020, "Heart Rate"),
    (0x0000_0040, "Power"),
    (0x0000_0080, "Cadence"),
    (0x0000_0100, "Training"),
    (0x0000_0200, "Navigation"),
]);

pub static WORKOUT_CAPABILITIES: Known<U32Z> = Known::new(&[
    (0x0000_0001, "Interval"),
    (0x0000_0002, "Custom"),
    (0x0000_0004, "Fitness Equipment"),
    (0x0000_0008, "Firstbeat"),
    (0x0000_0010, "New Leaf"),
    (0x0000_0020, "TCX"),
    (0x0000_0080, "Speed"),
    (0x0000_0100, "Heart Rate"),
    (0x0000_0200, "Distance"),
    (0x0000_0400, "Cadence"),
    (0x0000_0800, "Power"),
    (0x0000_1000, "Grade"),
    (0x0000_2000, "Resistance"),
    (0x0000_4000, "Protected"),
]);

pub static CONNECTIVITY_CAPABILITIES: Known<U32Z> = Known::new(&[
    (0x0000_0001, "Bluetooth"),
    (0x0000_0002, "Bluetooth LE"),
    (0x0000_0004, "ANT"),
    (0x0000_0008, "Activity Upload"),
    (0x0000_0010, "Course Download"),
    (0x0000_0020, "Workout Download"),
    (0x0000_0040, "Live Track"),
    (0x0000_0080, "Weather Conditions"),
    (0x0000_0100, "Weather Alerts"),
    (0x0000_0200, "GPS Ephemeris Download"),
    (0x0000_0400, "Explicit Archive"),
    (0x0000_0800, "Setup Incomplete"),
]);

pub static SPORT_BITS_0: Known<U8Z> = Known::new(&[
    (0x01, "Generic"),
    (0x02, "Running"),
    (0x04, "Cycling"),
    (0x08, "Transition"),
    (0x10, "Fitness Equipment"),
    (0x20, "Swimming"),
    (0x40, "Basketball"),
    (0x80, "Soccer"),
]);

pub static FILE_FLAGS: Known<U8Z> = Known::new(&[
    (0x02, "Read"),
    (0x04, "Write"),
    (0x08, "Erase"),
]);

pub static FILE: Variants<U8> = Variants::new(&[
    (1, "Device"),
    (2, "Settings"),
    (3, "Sport"),
    (4, "Activity"),
    (5, "Workout"),
    (6, "Course"),
    (7, "Schedules"),
    (9, "Weight"),
    (10, "Totals"),
    (11, "Goals"),
    (14, "Blood Pressure"),
    (15, "Monitoring A"),
    (20, "Activity Summary"),
    (28, "Monitoring Daily"),
    (32, "Monitoring B"),
]);

pub static ACTIVITY: Variants<U8> = Variants::new(&[
    (0, "Manual"),
    (1, "Auto Multi Sport"),
]);

pub static EVENT: Variants<U8> = Variants::new(&[
    (0, "Timer"),
    (3, "Workout"),
    (4, "Workout Step"),
    (5, "Power Down"),
    (6, "Power Up"),
    (7, "Off Course"),
    (8, "Session"),
    (9, "Lap"),
    (10, "Course Point"),
    (11, "Battery"),
    (12, "Virtual Partner Pace"),
    (13, "HR High Alert"),
    (14, "HR Low Alert"),
    (15, "Speed High Alert"),
    (16, "Speed Low Alert"),
    (17, "Cad High Alert"),
    (18, "Cad Low Alert"),
    (19, "Power High Alert"),
    (20, "Power Low Alert"),
    (21, "Recovery HR"),
    (22, "Battery Low"),
    (23, "Time Duration Alert"),
    (24, "Distance Duration Alert"),
    (25, "Calorie Duration Alert"),
    (26, "Activity"),
    (27, "Fitness Equipment"),
    (28, "Length"),
    (32, "User Marker"),
    (33, "Sport Point"),
    (36, "Calibration"),
    (42, "Front Gear Change"),
    (43, "Rear Gear Change"),
]);

pub static EVENT_TYPE: Variants<U8> = Variants::new(&[
    (0, "Start"),
    (1, "Stop"),
    (2, "Consecutive Depreciated"),
    (3, "Marker"),
    (4, "Stop All"),
    (5, "Begin Depreciated"),
    (6, "End Depreciated"),
    (7, "End All Depreciated"),
    (8, "Stop Disable"),
    (9, "Stop Disable All"),
]);

pub static SPORT: Variants<U8> = Variants::new(&[
    (0, "Generic"),
    (1, "Running"),
    (2, "Cycling"),
    (3, "Transition"),
    (4, "Fitness Equipment"),
    (5, "Swimming"),
    (6, "Basketball"),
    (7, "Soccer"),
    (8, "Tennis"),
    (9, "American Football"),
    (10, "Training"),
    (11, "Walking"),
    (12, "Cross Country Skiing"),
    (13, "Alpine Skiing"),
    (14, "Snowboarding"),
    (15, "Rowing"),
    (16, "Mountaineering"),
    (17, "Hiking"),
    (18, "Multisport"),
    (19, "Padding"),
    (254, "All"),
]);

pub static SUB_SPORT: Variants<U8> = Variants::new(&[
    (0, "Generic"),
    (1, "Treadmill"),
    (2, "Street"),
    (3, "Trail"),
    (4, "Track"),
    (5, "Spin"),
    (6, "Indoor Cycling"),
    (7, "Road"),
    (8, "Mountain"),
    (9, "Downhill"),
    (10, "Recumbent"),
    (11, "Cyclocross"),
    (12, "Hand Cycling"),
    (13, "Track Cycling"),
    (14, "Indoor Rowing"),
    (15, "Elliptical"),
    (16, "Stair Climbing"),
    (17, "Lap Swimming"),
    (18, "Open Water"),
    (19, "Flexibility Training"),
    (20, "Strength Training"),
    (21, "Warm Up"),
    (22, "Match"),
    (23, "Exercise"),
    (24, "Challenge"),
    (25, "Indoor Skiing"),
    (26, "Cardio Training"),
    (254, "All"),
]);

pub static SESSION_TRIGGER: Variants<U8> = Variants::new(&[
    (0, "Activity End"),
    (1, "Manual"),
    (2, "Auto Multi Sport"),
    (3, "Fitness Equipment"),
]);

pub static SWIM_STROKE: Variants<U8> = Variants::new(&[
    (0, "Freestyle"),
    (1, "Backstroke"),
    (2, "Breaststroke"),
    (3, "Butterfly"),
    (4, "Drill"),
    (5, "Mixed"),
    (6, "IM"),
]);

pub static DISPLAY_MEASURE: Variants<U8> = Variants::new(&[
    (0, "Metric"),
    (1, "Statute"),
]);

pub static INTENSITY: Variants<U8> = Variants::new(&[
    (0, "Active"),
    (1, "Rest"),
    (2, "Warm Up"),
    (3, "Cool Down"),
]);

pub static LAP_TRIGGER: Variants<U8> = Variants::new(&[
    (0, "Manual"),
    (1, "Time"),
    (2, "Distance"),
    (3, "Position Start"),
    (4, "Position Lap"),
    (5, "Position Waypoint"),
    (6, "Position Marked"),
    (7, "Session End"),
    (8, "Fitness Equipment"),
]);

pub static LENGTH_TYPE: Variants<U8> = Variants::new(&[
    (0, "Idle"),
    (1, "Active"),
]);

pub static ACTIVITY_TYPE: Variants<U8> = Variants::new(&[
    (0, "Generic"),
    (1, "Running"),
    (2, "Cycling"),
    (3, "Transition"),
    (4, "Fitness Equipment"),
    (5, "Swimming"),
    (6, "Walking"),
    (254, "All"),
]);

pub static STROKE_TYPE: Variants<U8> = Variants::new(&[
    (0, "No Event"),
    (1, "Other"),
    (2, "Serve"),
    (3, "Forehand"),
    (4, "Backhand"),
    (5, "Smash"),
]);

pub static BODY_LOCATION: Variants<U8> = Variants::new(&[
    (0, "Left Leg"),
    (1, "Left Calf"),
    (2, "Left Shin"),
    (3, "Left Hamstring"),
    (4, "Left Quad"),
    (5, "Left Glute"),
    (6, "Right Leg"),
    (7, "Right Calf"),
    (8, "Right Shin"),
    (9, "Right Hamstring"),
    (10, "Right Quad"),
    (11, "Right Glute"),
    (12, "Torso Back"),
    (13, "Left Lower Back"),
    (14, "Left Upper Back"),
    (15, "Right Lower Back"),
    (16, "Right Upper Back"),
    (17, "Torso Front"),
    (18, "Left Abdomen"),
    (19, "Left Chest"),
    (20, "Right Abdomen"),
    (21, "Right Chest"),
    (22, "Left Arm"),
    (23, "Left Shoulder"),
    (24, "Left Bicep"),
    (25, "Left Tricep"),
    (26, "Left Brachioradialis"),
    (27, "Left Forearm Extensors"),
    (28, "Right Arm"),
    (29, "Right Shoulder"),
    (30, "Right Bicep"),
    (31, "Right Tricep"),
    (32, "Right Brachioradialis"),
    (33, "Right Forearm Extensors"),
    (34, "Neck"),
    (35, "Throat"),
]);

pub static ANT_NETWORK: Variants<U8> = Variants::new(&[
    (0, "Public"),
    (1, "Ant+"),
    (2, "AntFS"),
    (3, "Private"),
]);

pub static SOURCE_TYPE: Variants<U8> = Variants::new(&[
    (0, "Ant"),
    (1, "Ant+"),
    (2, "Bluetooth"),
    (3, "Bluetooth Low Energy"),
    (4, "WiFi"),
    (5, "Local"),
]);

pub static HR_TYPE: Variants<U8> = Variants::new(&[
    (0, "Normal"),
    (1, "Irregular"),
]);

pub static BP_STATUS: Variants<U8> = Variants::new(&[
    (0, "No Error"),
    (1, "Error Incomplete Data"),
    (2, "Error Non Measurement"),
    (3, "Error Data out of Range"),
    (4, "Error Irregular Heart Rate"),
]);

pub static COURSE_POINT: Variants<U8> = Variants::new(&[
    (0, "Generic"),
    (1, "Summit"),
    (2, "Valley"),
    (3, "Water"),
    (4, "Food"),
    (5, "Danger"),
    (6, "Left"),
    (7, "Right"),
    (8, "Straight"),
    (9, "First Aid"),
    (10, "Fourth Category"),
    (11, "Third Category"),
    (12, "Second Category"),
    (13, "First Category"),
    (14, "Hors Catégorie"),
    (15, "Spring"),
    (16, "Left Fork"),
    (17, "Right Fork"),
    (18, "Middle Fork"),
    (19, "Slight Left"),
    (20, "Sharp Left"),
    (21, "Slight Right"),
    (22, "Sharp Right"),
    (23, "U Turn"),
]);

pub static MESG_COUNT: Variants<U8> = Variants::new(&[
    (0, "Num per File"),
    (1, "Max per File"),
    (2, "Max per File Type"),
]);

pub static GOAL: Variants<U8> = Variants::new(&[
    (0, "Time"),
    (1, "Distance"),
    (2, "Calories"),
    (3, "Frequency"),
    (4, "Steps"),
]);

pub static GOAL_RECURRENCE: Variants<U8> = Variants::new(&[
    (0, "Off"),
    (1, "Daily"),
    (2, "Weekly"),
    (3, "Monthly"),
    (4, "Yearly"),
    (5, "Custom"),
]);

pub static SCHEDULE: Variants<U8> = Variants::new(&[
    (0, "Workout"),
    (1, "Course"),
]);

pub static HR_ZONE_CALC: Variants<U8> = Variants::new(&[
    (0, "Custom"),
    (1, "Percent Max HR"),
    (2, "Percent HRR"),
]);

pub static PWR_ZONE_CALC: Variants<U8> = Variants::new(&[
    (0, "Custom"),
    (1, "Percent FTP"),
]);
