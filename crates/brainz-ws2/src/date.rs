// SPDX-License-Identifier: GPL-3.0-or-later

//! Partial-precision dates as used by MusicBrainz (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`).

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("expected YYYY, YYYY-MM or YYYY-MM-DD")]
    Shape,

    #[error("{0} out of range")]
    OutOfRange(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatePrecision {
    Absent,
    Year,
    YearMonth,
    Full,
}

/// A calendar date that may only be known to the year or month.
///
/// `Absent` stands for an empty or missing value and is never equal to a real
/// date. Ordering puts `Absent` first, then compares year, month and day, with
/// an unknown component sorting before any known one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FlexibleDate {
    #[default]
    Absent,
    Year(i32),
    YearMonth(i32, u32),
    Full(NaiveDate),
}

impl FlexibleDate {
    /// Parses a date of variable precision. Empty (or all-whitespace) input
    /// yields [`FlexibleDate::Absent`].
    pub fn parse(raw: &str) -> Result<Self, DateError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Self::Absent);
        }

        let parts: Vec<&str> = raw.split('-').collect();
        match parts.as_slice() {
            [year] => {
                let year = component(year, 4)? as i32;
                NaiveDate::from_ymd_opt(year, 1, 1).ok_or(DateError::OutOfRange("year"))?;
                Ok(Self::Year(year))
            }
            [year, month] => {
                let year = component(year, 4)? as i32;
                let month = component(month, 2)?;
                NaiveDate::from_ymd_opt(year, month, 1).ok_or(DateError::OutOfRange("month"))?;
                Ok(Self::YearMonth(year, month))
            }
            [year, month, day] => {
                let year = component(year, 4)? as i32;
                let month = component(month, 2)?;
                let day = component(day, 2)?;
                if !(1..=12).contains(&month) {
                    return Err(DateError::OutOfRange("month"));
                }
                NaiveDate::from_ymd_opt(year, month, day)
                    .map(Self::Full)
                    .ok_or(DateError::OutOfRange("day"))
            }
            _ => Err(DateError::Shape),
        }
    }

    pub fn precision(&self) -> DatePrecision {
        match self {
            Self::Absent => DatePrecision::Absent,
            Self::Year(_) => DatePrecision::Year,
            Self::YearMonth(..) => DatePrecision::YearMonth,
            Self::Full(_) => DatePrecision::Full,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn year(&self) -> Option<i32> {
        match *self {
            Self::Absent => None,
            Self::Year(y) | Self::YearMonth(y, _) => Some(y),
            Self::Full(date) => Some(date.year()),
        }
    }

    pub fn month(&self) -> Option<u32> {
        match *self {
            Self::YearMonth(_, m) => Some(m),
            Self::Full(date) => Some(date.month()),
            _ => None,
        }
    }

    pub fn day(&self) -> Option<u32> {
        match *self {
            Self::Full(date) => Some(date.day()),
            _ => None,
        }
    }

    /// First calendar day covered by this value.
    pub fn earliest(&self) -> Option<NaiveDate> {
        match *self {
            Self::Absent => None,
            Self::Year(y) => NaiveDate::from_ymd_opt(y, 1, 1),
            Self::YearMonth(y, m) => NaiveDate::from_ymd_opt(y, m, 1),
            Self::Full(date) => Some(date),
        }
    }

    fn sort_key(&self) -> Option<(i32, Option<u32>, Option<u32>)> {
        self.year().map(|y| (y, self.month(), self.day()))
    }
}

fn component(text: &str, width: usize) -> Result<u32, DateError> {
    if text.len() != width || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateError::Shape);
    }
    text.parse().map_err(|_| DateError::Shape)
}

impl Ord for FlexibleDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for FlexibleDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for FlexibleDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for FlexibleDate {
    fn from(date: NaiveDate) -> Self {
        Self::Full(date)
    }
}

impl fmt::Display for FlexibleDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => Ok(()),
            Self::Year(y) => write!(f, "{y:04}"),
            Self::YearMonth(y, m) => write!(f, "{y:04}-{m:02}"),
            Self::Full(date) => write!(f, "{}", date.format("%Y-%m-%d")),
        }
    }
}

impl Serialize for FlexibleDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FlexibleDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(|e| serde::de::Error::custom(format!("{raw:?}: {e}")))
    }
}
