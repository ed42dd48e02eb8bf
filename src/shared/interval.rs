//! Human interval tokens (`"5m"`, `"1h"`, `"1M"`, `"1 year"`).
//!
//! An [`Interval`] knows whether it is a fixed span of time or a calendar
//! step. Fixed intervals are added as a constant [`TimeDelta`]; calendar
//! intervals are added as whole [`Months`], so month length and leap years are
//! respected.

use chrono::{DateTime, Months, TimeDelta, TimeZone};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Failure to parse an interval token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntervalParseError {
    #[error("Empty interval")]
    Empty,

    #[error("Interval `{0}` has no numeric magnitude")]
    MissingMagnitude(String),

    #[error("Interval `{0}` has an invalid magnitude")]
    InvalidMagnitude(String),

    #[error("Interval `{0}` has a zero magnitude")]
    ZeroMagnitude(String),

    #[error("Interval `{token}` has an unknown unit `{unit}`")]
    UnknownUnit { token: String, unit: String },
}

// ─── IntervalUnit ────────────────────────────────────────────────────────────

/// Unit part of an interval token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

impl IntervalUnit {
    /// Canonical short suffix.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Second => "s",
            Self::Minute => "m",
            Self::Hour => "h",
            Self::Day => "d",
            Self::Week => "w",
            Self::Month => "M",
            Self::Quarter => "Q",
            Self::Year => "y",
        }
    }

    /// Match a unit suffix. `m` is minutes and `M` is months; the long forms
    /// are case-insensitive.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "s" => return Some(Self::Second),
            "m" => return Some(Self::Minute),
            "h" | "H" => return Some(Self::Hour),
            "d" | "D" => return Some(Self::Day),
            "w" | "W" => return Some(Self::Week),
            "M" => return Some(Self::Month),
            "q" | "Q" => return Some(Self::Quarter),
            "y" | "Y" => return Some(Self::Year),
            _ => {}
        }

        match suffix.to_ascii_lowercase().as_str() {
            "sec" | "secs" | "second" | "seconds" => Some(Self::Second),
            "min" | "mins" | "minute" | "minutes" => Some(Self::Minute),
            "hr" | "hrs" | "hour" | "hours" => Some(Self::Hour),
            "day" | "days" => Some(Self::Day),
            "week" | "weeks" => Some(Self::Week),
            "mo" | "month" | "months" => Some(Self::Month),
            "quarter" | "quarters" => Some(Self::Quarter),
            "yr" | "year" | "years" => Some(Self::Year),
            _ => None,
        }
    }

    /// Seconds in one unit, or `None` for calendar units.
    fn fixed_seconds(&self) -> Option<i64> {
        match self {
            Self::Second => Some(1),
            Self::Minute => Some(60),
            Self::Hour => Some(3_600),
            Self::Day => Some(86_400),
            Self::Week => Some(604_800),
            Self::Month | Self::Quarter | Self::Year => None,
        }
    }

    /// Months in one unit, or `None` for fixed units.
    fn calendar_months(&self) -> Option<u32> {
        match self {
            Self::Month => Some(1),
            Self::Quarter => Some(3),
            Self::Year => Some(12),
            _ => None,
        }
    }
}

impl fmt::Display for IntervalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── IntervalKind ────────────────────────────────────────────────────────────

/// How one interval step is applied to a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalKind {
    /// Constant length.
    Fixed(TimeDelta),
    /// Whole calendar months (months, quarters, years).
    Calendar(Months),
}

// ─── Interval ────────────────────────────────────────────────────────────────

/// A parsed interval: positive magnitude plus unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    magnitude: u32,
    unit: IntervalUnit,
}

impl Interval {
    pub fn new(magnitude: u32, unit: IntervalUnit) -> Result<Self, IntervalParseError> {
        if magnitude == 0 {
            return Err(IntervalParseError::ZeroMagnitude(format!("0{}", unit)));
        }
        Ok(Self { magnitude, unit })
    }

    pub fn minutes(magnitude: u32) -> Result<Self, IntervalParseError> {
        Self::new(magnitude, IntervalUnit::Minute)
    }

    pub fn magnitude(&self) -> u32 {
        self.magnitude
    }

    pub fn unit(&self) -> IntervalUnit {
        self.unit
    }

    pub fn kind(&self) -> IntervalKind {
        match (self.unit.fixed_seconds(), self.unit.calendar_months()) {
            (Some(secs), _) => {
                IntervalKind::Fixed(TimeDelta::seconds(secs * i64::from(self.magnitude)))
            }
            (None, Some(months)) => {
                IntervalKind::Calendar(Months::new(months.saturating_mul(self.magnitude)))
            }
            (None, None) => unreachable!("every unit is either fixed or calendar"),
        }
    }

    pub fn is_calendar(&self) -> bool {
        matches!(self.kind(), IntervalKind::Calendar(_))
    }

    /// Fixed and shorter than one hour.
    pub fn is_sub_hourly(&self) -> bool {
        match self.kind() {
            IntervalKind::Fixed(delta) => delta < TimeDelta::hours(1),
            IntervalKind::Calendar(_) => false,
        }
    }

    /// `origin` advanced by `steps` intervals, or `None` when the result is
    /// out of range.
    ///
    /// Calendar steps are taken from `origin` in one jump, so a month-end
    /// anchor stays on month ends: Jan 31 + 1M is Feb 28/29 and Jan 31 + 2M
    /// is Mar 31. Days that do not exist in the target month clamp to its
    /// last day.
    pub fn advance<Tz: TimeZone>(
        &self,
        origin: DateTime<Tz>,
        steps: u32,
    ) -> Option<DateTime<Tz>> {
        match self.kind() {
            IntervalKind::Fixed(delta) => {
                let total = delta.checked_mul(i32::try_from(steps).ok()?)?;
                origin.checked_add_signed(total)
            }
            IntervalKind::Calendar(months) => {
                let total = months.as_u32().checked_mul(steps)?;
                origin.checked_add_months(Months::new(total))
            }
        }
    }

    /// `origin` moved back by one interval.
    pub fn rewind<Tz: TimeZone>(&self, origin: DateTime<Tz>) -> Option<DateTime<Tz>> {
        match self.kind() {
            IntervalKind::Fixed(delta) => origin.checked_sub_signed(delta),
            IntervalKind::Calendar(months) => origin.checked_sub_months(months),
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.magnitude, self.unit)
    }
}

impl FromStr for Interval {
    type Err = IntervalParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.is_empty() {
            return Err(IntervalParseError::Empty);
        }

        let split = token
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(token.len());
        let (digits, suffix) = token.split_at(split);

        if digits.is_empty() {
            return Err(IntervalParseError::MissingMagnitude(token.to_string()));
        }
        let magnitude: u32 = digits
            .parse()
            .map_err(|_| IntervalParseError::InvalidMagnitude(token.to_string()))?;
        if magnitude == 0 {
            return Err(IntervalParseError::ZeroMagnitude(token.to_string()));
        }

        let suffix = suffix.trim_start();
        let unit =
            IntervalUnit::from_suffix(suffix).ok_or_else(|| IntervalParseError::UnknownUnit {
                token: token.to_string(),
                unit: suffix.to_string(),
            })?;

        Ok(Self { magnitude, unit })
    }
}

impl Serialize for Interval {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Interval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
