/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Earliest year a journal route may point at (inclusive)
pub const EARLIEST_YEAR: u16 = 1990;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Upper bound for a day when the month is unknown
pub const MAX_DAY: u8 = 31;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';

/// Filled star glyph
pub const STAR_FILLED: char = '★';
/// Empty star glyph
pub const STAR_EMPTY: char = '☆';
/// Default number of stars in a rating
pub const DEFAULT_RATING_MAXIMUM: u8 = 5;

/// Opening delimiter around a life-log segment in journal markup
pub const SEGMENT_OPEN: &str = "[[";
/// Closing delimiter around a life-log segment in journal markup
pub const SEGMENT_CLOSE: &str = "]]";
/// Separator between the verb and the side-data index of a life-log segment
pub const SEGMENT_FIELD_SEPARATOR: char = '|';
