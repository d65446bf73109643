use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_DAY, MAX_MONTH, MAX_YEAR, MIN_DAY,
};
use crate::RouteError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// Accepted route tokens for each month, January first.
///
/// Matching is ASCII case-insensitive and exact: no trimming, no prefixes.
/// Both validation and normalization resolve months through this table.
const MONTH_ALIASES: [&[&str]; 12] = [
    &["january", "jan", "01", "1"],
    &["february", "feb", "02", "2"],
    &["march", "mar", "03", "3"],
    &["april", "apr", "04", "4"],
    &["may", "05", "5"],
    &["june", "jun", "06", "6"],
    &["july", "jul", "07", "7"],
    &["august", "aug", "08", "8"],
    &["september", "sep", "sept", "09", "9"],
    &["october", "oct", "10"],
    &["november", "nov", "11"],
    &["december", "dec", "12"],
];

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `RouteError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, RouteError> {
        let non_zero = NonZeroU16::new(value).ok_or(RouteError::InvalidYear(value))?;
        if value > MAX_YEAR {
            return Err(RouteError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = RouteError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `RouteError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, RouteError> {
        let non_zero = NonZeroU8::new(value).ok_or(RouteError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(RouteError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Resolves a route token ("jan", "January", "01", "1", ...) to a month.
    pub fn from_alias(token: &str) -> Option<Self> {
        MONTH_ALIASES
            .iter()
            .zip(1..=MAX_MONTH)
            .find(|(aliases, _)| aliases.iter().any(|alias| alias.eq_ignore_ascii_case(token)))
            .and_then(|(_, number)| NonZeroU8::new(number))
            .map(Self)
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Two-digit canonical code, "01" through "12"
    pub fn code(self) -> String {
        format!("{:02}", self.get())
    }

    /// Lowercase English month name
    pub fn name(self) -> &'static str {
        MONTH_ALIASES[usize::from(self.get() - 1)][0]
    }

    /// Number of days in this month, February depending on `leap`
    pub const fn days(self, leap: bool) -> u8 {
        if self.get() == FEBRUARY && leap {
            FEBRUARY_DAYS_LEAP
        } else {
            DAYS_IN_MONTH[self.get() as usize]
        }
    }
}

impl TryFrom<u8> for Month {
    type Error = RouteError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// # Errors
    /// Returns `RouteError::InvalidDay` if the value is 0 or invalid for the given year and month.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, RouteError> {
        let invalid = RouteError::InvalidDay {
            month,
            day: value,
            year,
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;

        if month == 0 || month > MAX_MONTH || value > days_in_month(year, month) {
            return Err(invalid);
        }

        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = RouteError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // No year/month context here, so only the widest month bound applies
        if !(MIN_DAY..=MAX_DAY).contains(&value) {
            return Err(RouteError::InvalidDay {
                month: 0,
                day: value,
                year: 0,
            });
        }
        let non_zero = NonZeroU8::new(value).ok_or(RouteError::InvalidDay {
            month: 0,
            day: value,
            year: 0,
        })?;
        Ok(Self(non_zero))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Upper day bound when month and year may be unknown.
///
/// Unknown month allows 31 days. An unknown year is treated as non-leap.
pub fn max_day(month: Option<Month>, year: Option<u16>) -> u8 {
    month.map_or(MAX_DAY, |month| month.days(year.is_some_and(is_leap_year)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_new_valid() {
        assert!(Year::new(1).is_ok());
        assert!(Year::new(2000).is_ok());
        assert!(Year::new(9999).is_ok());
    }

    #[test]
    fn test_year_new_invalid() {
        assert!(matches!(Year::new(0), Err(RouteError::InvalidYear(0))));
        assert!(matches!(Year::new(10000), Err(RouteError::InvalidYear(10000))));
    }

    #[test]
    fn test_year_serde() {
        let year = Year::new(2024).unwrap();
        let json = serde_json::to_string(&year).unwrap();
        assert_eq!(json, "2024");

        let parsed: Year = serde_json::from_str(&json).unwrap();
        assert_eq!(year, parsed);

        assert!(serde_json::from_str::<Year>("0").is_err());
    }

    #[test]
    fn test_month_new_bounds() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
        assert!(matches!(Month::new(0), Err(RouteError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(RouteError::InvalidMonth(13))));
    }

    #[test]
    fn test_month_from_alias_cases() {
        struct TestCase {
            token:    &'static str,
            expected: Option<u8>,
        }

        let cases = [
            TestCase { token: "january", expected: Some(1) },
            TestCase { token: "JAN", expected: Some(1) },
            TestCase { token: "Feb", expected: Some(2) },
            TestCase { token: "02", expected: Some(2) },
            TestCase { token: "2", expected: Some(2) },
            TestCase { token: "may", expected: Some(5) },
            TestCase { token: "sep", expected: Some(9) },
            TestCase { token: "Sept", expected: Some(9) },
            TestCase { token: "9", expected: Some(9) },
            TestCase { token: "10", expected: Some(10) },
            TestCase { token: "DECEMBER", expected: Some(12) },
            TestCase { token: "13", expected: None },
            TestCase { token: "0", expected: None },
            TestCase { token: "00", expected: None },
            TestCase { token: "010", expected: None },
            TestCase { token: " jan", expected: None },
            TestCase { token: "janu", expected: None },
            TestCase { token: "", expected: None },
        ];

        for case in &cases {
            assert_eq!(
                Month::from_alias(case.token).map(Month::get),
                case.expected,
                "token {:?}",
                case.token
            );
        }
    }

    #[test]
    fn test_month_code_and_name() {
        let month = Month::new(4).unwrap();
        assert_eq!(month.code(), "04");
        assert_eq!(month.name(), "april");
        assert_eq!(Month::new(12).unwrap().code(), "12");
        assert_eq!(Month::new(12).unwrap().name(), "december");
    }

    #[test]
    fn test_every_month_name_resolves_to_itself() {
        for m in 1..=12 {
            let month = Month::new(m).unwrap();
            assert_eq!(Month::from_alias(month.name()), Some(month));
            assert_eq!(Month::from_alias(&month.code()), Some(month));
            assert_eq!(Month::from_alias(&m.to_string()), Some(month));
        }
    }

    #[test]
    fn test_day_new_valid() {
        // January - 31 days
        assert!(Day::new(1, 2024, 1).is_ok());
        assert!(Day::new(31, 2024, 1).is_ok());

        // February non-leap - 28 days
        assert!(Day::new(28, 2023, 2).is_ok());
        assert!(Day::new(29, 2023, 2).is_err());

        // February leap year - 29 days
        assert!(Day::new(29, 2024, 2).is_ok());
        assert!(Day::new(30, 2024, 2).is_err());

        // April - 30 days
        assert!(Day::new(30, 2024, 4).is_ok());
        assert!(Day::new(31, 2024, 4).is_err());
    }

    #[test]
    fn test_day_new_invalid() {
        assert!(matches!(Day::new(0, 2024, 1), Err(RouteError::InvalidDay { .. })));
        assert!(matches!(
            Day::new(32, 2024, 1),
            Err(RouteError::InvalidDay {
                month: 1,
                day: 32,
                year: 2024
            })
        ));
        assert!(Day::new(1, 2024, 13).is_err());
    }

    #[test]
    fn test_day_try_from_u8() {
        let day: Day = 15.try_into().unwrap();
        assert_eq!(day.get(), 15);

        let result: Result<Day, _> = 0.try_into();
        assert!(result.is_err());
        let result: Result<Day, _> = 32.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year:        u16,
            is_leap:     bool,
            description: &'static str,
        }

        let cases = [
            TestCase { year: 2020, is_leap: true, description: "divisible by 4" },
            TestCase { year: 2024, is_leap: true, description: "divisible by 4" },
            TestCase { year: 2019, is_leap: false, description: "not divisible by 4" },
            TestCase { year: 2021, is_leap: false, description: "not divisible by 4" },
            TestCase { year: 1900, is_leap: false, description: "century not divisible by 400" },
            TestCase { year: 2100, is_leap: false, description: "century not divisible by 400" },
            TestCase { year: 2000, is_leap: true, description: "divisible by 400" },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description
            );
        }
    }

    #[test]
    fn test_days_in_month_30_day_months() {
        for month in [4, 6, 9, 11] {
            assert_eq!(days_in_month(2024, month), 30, "Month {month} should have 30 days");
        }
    }

    #[test]
    fn test_max_day_without_context() {
        let april = Month::new(4).ok();
        let february = Month::new(2).ok();

        assert_eq!(max_day(None, None), 31);
        assert_eq!(max_day(None, Some(2020)), 31);
        assert_eq!(max_day(april, None), 30);
        assert_eq!(max_day(february, None), 28);
        assert_eq!(max_day(february, Some(2019)), 28);
        assert_eq!(max_day(february, Some(2020)), 29);
        assert_eq!(max_day(february, Some(1900)), 28);
    }
}
