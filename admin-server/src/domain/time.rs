//! Time-of-day handling for flight legs.
//!
//! The booking API exchanges leg times as "HH:MM" strings with no date or
//! time zone attached. A leg's position in absolute time comes from pairing
//! a time-of-day with a day offset: the number of days after the flight
//! cycle's start date on which the event occurs. This module provides the
//! time-of-day type and the offset-aware instant arithmetic.

use chrono::{NaiveTime, Timelike};
use std::fmt;
use std::str::FromStr;

/// Minutes in a day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Upper bound on day offsets accepted from the form (ten years).
/// Keeps instant arithmetic far away from `u32` saturation.
pub const MAX_DAY_OFFSET: u32 = 3650;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A time of day with minute precision.
///
/// Valid by construction: hour is 0-23, minute is 0-59.
///
/// # Examples
///
/// ```
/// use admin_server::domain::TimeOfDay;
///
/// let t = TimeOfDay::parse_hhmm("14:30").unwrap();
/// assert_eq!(t.hour(), 14);
/// assert_eq!(t.minute(), 30);
/// assert_eq!(t.to_string(), "14:30");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeOfDay {
    time: NaiveTime,
}

impl TimeOfDay {
    /// Create a time of day from hour and minute components.
    ///
    /// Returns `Err` if the hour exceeds 23 or the minute exceeds 59.
    pub fn new(hour: u32, minute: u32) -> Result<Self, TimeError> {
        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| TimeError::new("hour must be 0-23 and minute 0-59"))?;
        Ok(Self { time })
    }

    /// Parse a time from strict "HH:MM" format.
    ///
    /// # Examples
    ///
    /// ```
    /// use admin_server::domain::TimeOfDay;
    ///
    /// assert!(TimeOfDay::parse_hhmm("00:00").is_ok());
    /// assert!(TimeOfDay::parse_hhmm("23:59").is_ok());
    ///
    /// // Invalid formats
    /// assert!(TimeOfDay::parse_hhmm("930").is_err());
    /// assert!(TimeOfDay::parse_hhmm("9:30").is_err());
    /// assert!(TimeOfDay::parse_hhmm("24:00").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        let (hh, mm) = s
            .split_once(':')
            .ok_or_else(|| TimeError::new("expected HH:MM"))?;

        let hour = digit_pair(hh).ok_or_else(|| TimeError::new("hour must be two digits"))?;
        let minute = digit_pair(mm).ok_or_else(|| TimeError::new("minute must be two digits"))?;

        Self::new(hour, minute)
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    /// Minutes since midnight (0-1439).
    pub fn minutes_from_midnight(&self) -> u32 {
        self.hour() * 60 + self.minute()
    }

    /// The absolute instant of this time on a given day offset, expressed
    /// in minutes elapsed since midnight of the cycle's start date.
    ///
    /// Saturates at `u32::MAX` rather than overflowing; offsets are capped
    /// at [`MAX_DAY_OFFSET`] well before that on the way in.
    ///
    /// # Examples
    ///
    /// ```
    /// use admin_server::domain::TimeOfDay;
    ///
    /// let t = TimeOfDay::parse_hhmm("13:00").unwrap();
    /// assert_eq!(t.instant_minutes(0), 780);
    /// assert_eq!(t.instant_minutes(1), 780 + 1440);
    /// ```
    pub fn instant_minutes(&self, day_offset: u32) -> u32 {
        day_offset
            .saturating_mul(MINUTES_PER_DAY)
            .saturating_add(self.minutes_from_midnight())
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hhmm(s)
    }
}

impl fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeOfDay({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// A field of exactly two ASCII digits. Rejects signs, whitespace, and
/// anything `str::parse` would quietly tolerate.
fn digit_pair(s: &str) -> Option<u32> {
    match s.as_bytes() {
        &[tens, units] if tens.is_ascii_digit() && units.is_ascii_digit() => {
            Some(u32::from(tens - b'0') * 10 + u32::from(units - b'0'))
        }
        _ => None,
    }
}
