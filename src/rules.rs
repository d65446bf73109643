//! Validation and normalization of date fragments taken from journal URLs.

use chrono::Datelike;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use crate::{
    config::Config,
    types::{self, max_day, Month},
    RouteDate, RouteError, EARLIEST_YEAR,
};

static YEAR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}$").expect("year pattern compiles"));

static DAY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{1,2}$").expect("day pattern compiles"));

/// Year bounds applied to route fragments.
///
/// The latest year is supplied by the caller, so results only depend on
/// the wall clock when built through [`DateRules::today`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRules {
    earliest_year: u16,
    current_year: u16,
}

impl DateRules {
    pub const fn new(current_year: u16) -> Self {
        Self {
            earliest_year: EARLIEST_YEAR,
            current_year,
        }
    }

    /// Rules with the current year read from the local clock
    pub fn today() -> Self {
        let year = chrono::Local::now().year();
        Self::new(u16::try_from(year).unwrap_or(u16::MAX))
    }

    pub const fn from_config(config: &Config, current_year: u16) -> Self {
        Self {
            earliest_year: config.earliest_year,
            current_year,
        }
    }

    pub const fn earliest_year(&self) -> u16 {
        self.earliest_year
    }

    pub const fn current_year(&self) -> u16 {
        self.current_year
    }

    /// Exactly four digits, between the earliest journal year and the current year.
    pub fn valid_year(&self, year: &str) -> bool {
        YEAR_PATTERN.is_match(year)
            && year
                .parse::<u16>()
                .is_ok_and(|value| (self.earliest_year..=self.current_year).contains(&value))
    }

    /// Checks every supplied fragment; absent fragments are accepted.
    ///
    /// The day check always sees the month and year fragments, even when
    /// those are absent or invalid themselves.
    pub fn valid_date_route(
        &self,
        year: Option<&str>,
        month: Option<&str>,
        day: Option<&str>,
    ) -> bool {
        let year_ok = year.is_none_or(|year| self.valid_year(year));
        let month_ok = month.is_none_or(valid_month);
        let day_ok = day.is_none_or(|day| valid_day(day, month, year));

        if !(year_ok && month_ok && day_ok) {
            debug!(?year, ?month, ?day, year_ok, month_ok, day_ok, "rejecting date route");
        }

        year_ok && month_ok && day_ok
    }

    /// Validates route fragments and builds the typed date they address.
    ///
    /// # Errors
    /// Returns the first `RouteError` found among the fragments. A month or
    /// day without a year, and a day without a month, are rejected.
    pub fn parse_route(
        &self,
        year: Option<&str>,
        month: Option<&str>,
        day: Option<&str>,
    ) -> Result<RouteDate, RouteError> {
        let result = self.build_route(year, month, day);
        if let Err(err) = &result {
            debug!(?year, ?month, ?day, %err, "route did not parse");
        }
        result
    }

    fn build_route(
        &self,
        year: Option<&str>,
        month: Option<&str>,
        day: Option<&str>,
    ) -> Result<RouteDate, RouteError> {
        let year = match year {
            Some(year) => self.checked_year(year)?,
            None if month.is_some() || day.is_some() => return Err(RouteError::MissingYear),
            None => return Err(RouteError::EmptyInput),
        };

        let Some(month) = month else {
            return match day {
                Some(day) => Err(RouteError::DayWithoutMonth(day.to_owned())),
                None => Ok(RouteDate::new_year(year)),
            };
        };
        let month =
            Month::from_alias(month).ok_or_else(|| RouteError::UnresolvableMonth(month.to_owned()))?;

        let Some(day) = day else {
            return Ok(RouteDate::new_month(year, month));
        };
        if !DAY_PATTERN.is_match(day) {
            return Err(RouteError::InvalidFormat(day.to_owned()));
        }
        let value = day
            .parse::<u8>()
            .map_err(|_| RouteError::InvalidFormat(day.to_owned()))?;
        let day = types::Day::new(value, year.get(), month.get())?;

        Ok(RouteDate::new_day(year, month, day))
    }

    fn checked_year(&self, year: &str) -> Result<types::Year, RouteError> {
        if !YEAR_PATTERN.is_match(year) {
            return Err(RouteError::InvalidFormat(year.to_owned()));
        }
        let value = year
            .parse::<u16>()
            .map_err(|_| RouteError::InvalidFormat(year.to_owned()))?;
        if !(self.earliest_year..=self.current_year).contains(&value) {
            return Err(RouteError::YearOutOfRange {
                year: value,
                earliest: self.earliest_year,
                latest: self.current_year,
            });
        }
        types::Year::new(value)
    }
}

/// Year check with the default earliest year.
pub fn valid_year(year: &str, current_year: u16) -> bool {
    DateRules::new(current_year).valid_year(year)
}

/// Whether the token names a month ("jan", "January", "01", "1", ...).
pub fn valid_month(month: &str) -> bool {
    Month::from_alias(month).is_some()
}

/// Whether `day` can fall in the given month and year.
///
/// Without a month every day up to 31 passes. February without a year is
/// held to 28 days.
pub fn valid_day(day: &str, month: Option<&str>, year: Option<&str>) -> bool {
    let month = month.and_then(Month::from_alias);
    let year = year.and_then(|year| year.parse::<u16>().ok());
    let upper = max_day(month, year);

    DAY_PATTERN.is_match(day) && day.parse::<u8>().is_ok_and(|value| (1..=upper).contains(&value))
}

/// Builds the canonical `YYYY-MM-DD` identifier for already validated fragments.
///
/// Only the month is resolved. Single-character days are zero-padded and
/// everything else passes through untouched.
///
/// # Errors
/// Returns `RouteError::UnresolvableMonth` if the month matches no alias.
pub fn standardise_date_route(day: &str, month: &str, year: &str) -> Result<String, RouteError> {
    let Some(standard_month) = Month::from_alias(month) else {
        warn!(month, "cannot standardise route with unknown month");
        return Err(RouteError::UnresolvableMonth(month.to_owned()));
    };

    let standard_day = if day.chars().count() == 1 {
        format!("0{day}")
    } else {
        day.to_owned()
    };

    Ok(format!("{year}-{}-{standard_day}", standard_month.code()))
}
