use std::fmt;

use crate::consts::{DEFAULT_RATING_MAXIMUM, STAR_EMPTY, STAR_FILLED};

/// A rating shown as a fixed-width row of stars.
///
/// Values above the maximum are shown as a full row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StarRating {
    value: u8,
    maximum: u8,
}

impl StarRating {
    /// Rating out of the default five stars
    pub const fn new(value: u8) -> Self {
        Self {
            value,
            maximum: DEFAULT_RATING_MAXIMUM,
        }
    }

    pub const fn out_of(self, maximum: u8) -> Self {
        Self { maximum, ..self }
    }

    pub const fn value(&self) -> u8 {
        self.value
    }

    pub const fn maximum(&self) -> u8 {
        self.maximum
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for star in 1..=self.maximum {
            let glyph = if star <= self.value { STAR_FILLED } else { STAR_EMPTY };
            write!(f, "{glyph}")?;
        }
        Ok(())
    }
}

/// `value` filled stars followed by empty ones up to `maximum`
pub fn star_rating(value: u8, maximum: u8) -> String {
    StarRating::new(value).out_of(maximum).to_string()
}
