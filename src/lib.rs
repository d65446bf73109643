mod config;
mod consts;
mod content;
mod grouping;
mod prelude;
mod rating;
mod rules;
mod types;

pub use config::{Config, ConfigError};
pub use consts::*;
pub use content::{format_content, render_footnotes, Block, ContentKind, Formatted, JournalData};
pub use grouping::{sort_by_month, MonthGrouped};
pub use rating::{star_rating, StarRating};
pub use rules::{standardise_date_route, valid_day, valid_month, valid_year, DateRules};
pub use types::{days_in_month, is_leap_year, Day, Month, Year};

use crate::prelude::*;
use std::cmp::Ordering;
use std::str::FromStr;

/// A journal route date with varying levels of precision.
///
/// `/2021` addresses a year, `/2021/apr` a month and `/2021/apr/5` a day;
/// the variant records which of those the route named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum RouteDate {
    /// Full date with day, month, and year
    #[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
    Day {
        year: types::Year,
        month: types::Month,
        day: types::Day,
    },
    /// Month and year only
    #[display(fmt = "{:04}-{:02}", "year.get()", "month.get()")]
    Month {
        year: types::Year,
        month: types::Month,
    },
    /// Year only
    #[display(fmt = "{:04}", "year.get()")]
    Year { year: types::Year },
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum RouteError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Year {year} outside journal range {earliest}-{latest}")]
    YearOutOfRange { year: u16, earliest: u16, latest: u16 },
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Unresolvable month: {_0:?}")]
    UnresolvableMonth(String),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Cannot have day {_0} without month")]
    DayWithoutMonth(String),
    #[display(fmt = "Route has no year")]
    MissingYear,
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for RouteError {}

impl RouteDate {
    /// Creates a full date from already validated parts
    pub const fn new_day(year: types::Year, month: types::Month, day: types::Day) -> Self {
        Self::Day { year, month, day }
    }

    /// Creates a month route from already validated parts
    pub const fn new_month(year: types::Year, month: types::Month) -> Self {
        Self::Month { year, month }
    }

    /// Creates a year route
    pub const fn new_year(year: types::Year) -> Self {
        Self::Year { year }
    }

    /// Returns the day component if present (as u8 for convenience)
    pub const fn day(&self) -> Option<u8> {
        match self {
            Self::Day { day, .. } => Some(day.get()),
            Self::Month { .. } | Self::Year { .. } => None,
        }
    }

    /// Returns the month component if present (as u8 for convenience)
    pub const fn month(&self) -> Option<u8> {
        match self {
            Self::Day { month, .. } | Self::Month { month, .. } => Some(month.get()),
            Self::Year { .. } => None,
        }
    }

    /// Returns the year component (always present)
    pub const fn year(&self) -> u16 {
        match self {
            Self::Day { year, .. } | Self::Month { year, .. } | Self::Year { year } => year.get(),
        }
    }

    /// Earliest concrete (year, month, day) represented by this value.
    pub const fn lower_bound(&self) -> (u16, u8, u8) {
        match *self {
            Self::Day { year, month, day } => (year.get(), month.get(), day.get()),
            Self::Month { year, month } => (year.get(), month.get(), MIN_DAY),
            Self::Year { year } => (year.get(), JANUARY, MIN_DAY),
        }
    }

    /// Rank used for ordering ties on the same `lower_bound`:
    /// less precise comes first: Year < Month < Day.
    #[inline]
    const fn precision_rank(&self) -> u8 {
        match *self {
            Self::Year { .. } => 0,
            Self::Month { .. } => 1,
            Self::Day { .. } => 2,
        }
    }

    /// Helper to parse u16 with better error messages
    fn parse_u16(s: &str) -> Result<u16, RouteError> {
        s.parse::<u16>()
            .map_err(|_| RouteError::InvalidFormat(s.to_owned()))
    }

    /// Helper to parse u8 with better error messages
    fn parse_u8(s: &str) -> Result<u8, RouteError> {
        s.parse::<u8>()
            .map_err(|_| RouteError::InvalidFormat(s.to_owned()))
    }
}

impl FromStr for RouteDate {
    type Err = RouteError;

    /// Parses the canonical forms produced by `Display`: `YYYY`, `YYYY-MM`, `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(RouteError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        match parts.as_slice() {
            [year] => Ok(Self::Year {
                year: types::Year::new(Self::parse_u16(year)?)?,
            }),
            [year, month] => Ok(Self::Month {
                year: types::Year::new(Self::parse_u16(year)?)?,
                month: types::Month::new(Self::parse_u8(month)?)?,
            }),
            [year, month, day] => {
                let year_u16 = Self::parse_u16(year)?;
                let month_u8 = Self::parse_u8(month)?;
                let day_u8 = Self::parse_u8(day)?;

                Ok(Self::Day {
                    year: types::Year::new(year_u16)?,
                    month: types::Month::new(month_u8)?,
                    day: types::Day::new(day_u8, year_u16, month_u8)?,
                })
            }
            _ => Err(RouteError::InvalidFormat(format!(
                "Too many {} separators: expected 0-2, found {}",
                DATE_SEPARATOR,
                parts.len() - 1
            ))),
        }
    }
}

impl PartialOrd for RouteDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RouteDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.lower_bound()
            .cmp(&other.lower_bound())
            .then_with(|| self.precision_rank().cmp(&other.precision_rank()))
    }
}

impl serde::Serialize for RouteDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for RouteDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
