//! Card expiry dates in the `MM/YY` format.
use chrono::{Datelike, Local};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{error, fmt, str::FromStr, sync::LazyLock};

/// An error resulting from parsing an expiry date from a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseExpiryError;

impl fmt::Display for ParseExpiryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid expiry date, expected the `MM/YY` format")
    }
}

impl error::Error for ParseExpiryError {}

/// A card expiry date with a 1-12 month and a two-digit year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expiry {
    /// Expiry month.
    month: u32,
    /// Two-digit expiry year.
    year: u32,
}

impl Expiry {
    /// Attempts to create a new instance.
    #[inline]
    pub fn try_new(month: u32, year: u32) -> Result<Self, ParseExpiryError> {
        if (1..=12).contains(&month) && year <= 99 {
            Ok(Self { month, year })
        } else {
            Err(ParseExpiryError)
        }
    }

    /// Returns the month in the range 1-12.
    #[inline]
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the two-digit year.
    #[inline]
    pub fn year(&self) -> u32 {
        self.year
    }

    /// Returns `true` if the date lies before the current local month.
    #[inline]
    pub fn is_expired(&self) -> bool {
        let now = Local::now();
        self.is_expired_at(now.year().rem_euclid(100) as u32, now.month())
    }

    /// Returns `true` if the date lies before the given two-digit year
    /// and 1-12 month. A card expiring in the current month is still valid.
    #[inline]
    pub fn is_expired_at(&self, current_year: u32, current_month: u32) -> bool {
        self.year < current_year || (self.year == current_year && self.month < current_month)
    }
}

impl fmt::Display for Expiry {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02}/{:02}", self.month, self.year)
    }
}

impl FromStr for Expiry {
    type Err = ParseExpiryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        static EXPIRY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^(0[1-9]|1[0-2])/([0-9]{2})$").expect("invalid expiry pattern")
        });

        let captures = EXPIRY_PATTERN.captures(s).ok_or(ParseExpiryError)?;
        let month = captures[1].parse().map_err(|_| ParseExpiryError)?;
        let year = captures[2].parse().map_err(|_| ParseExpiryError)?;
        Ok(Self { month, year })
    }
}
