//! Reference timezone used to turn a calendar date into an instant range
//! and to localize timestamps typed without an offset.

use crate::errors::{AppError, AppResult};
use chrono::{
    DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc,
};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceZone {
    /// System timezone at run time.
    Local,
    Fixed(FixedOffset),
}

impl ReferenceZone {
    /// Accepts `local`, `Z`/`UTC`, or an offset such as `+01:00`, `-0530`.
    pub fn parse(s: &str) -> AppResult<Self> {
        let raw = s.trim();
        match raw.to_lowercase().as_str() {
            "local" | "" => return Ok(Self::Local),
            "z" | "utc" => return Ok(Self::Fixed(Utc.fix())),
            _ => {}
        }

        let mut chars = raw.chars();
        let sign = match chars.next() {
            Some('+') => 1,
            Some('-') => -1,
            _ => return Err(AppError::InvalidTimezone(s.to_string())),
        };

        let digits: String = chars.filter(|c| *c != ':').collect();
        if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(AppError::InvalidTimezone(s.to_string()));
        }

        let hours: i32 = digits[..2]
            .parse()
            .map_err(|_| AppError::InvalidTimezone(s.to_string()))?;
        let minutes: i32 = digits[2..]
            .parse()
            .map_err(|_| AppError::InvalidTimezone(s.to_string()))?;
        if minutes >= 60 {
            return Err(AppError::InvalidTimezone(s.to_string()));
        }

        FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
            .map(Self::Fixed)
            .ok_or_else(|| AppError::InvalidTimezone(s.to_string()))
    }

    /// Attach this zone to a wall-clock time. For `Local`, an ambiguous time
    /// resolves to the earlier instant; a skipped time is an error.
    pub fn localize(&self, naive: NaiveDateTime) -> AppResult<DateTime<FixedOffset>> {
        self.localize_with(naive, false)
    }

    /// Inclusive instant range `[00:00:00.000000, 23:59:59.999999]` of `date`.
    pub fn day_bounds(
        &self,
        date: NaiveDate,
    ) -> AppResult<(DateTime<FixedOffset>, DateTime<FixedOffset>)> {
        let start = self.localize_with(date.and_time(NaiveTime::MIN), false)?;
        let end = self.localize_with(date.and_time(END_OF_DAY), true)?;
        Ok((start, end))
    }

    pub fn now(&self) -> DateTime<FixedOffset> {
        match self {
            Self::Local => Local::now().fixed_offset(),
            Self::Fixed(off) => Utc::now().with_timezone(off),
        }
    }

    fn localize_with(&self, naive: NaiveDateTime, latest: bool) -> AppResult<DateTime<FixedOffset>> {
        match self {
            Self::Fixed(off) => off
                .from_local_datetime(&naive)
                .single()
                .ok_or_else(|| AppError::InvalidTimestamp(naive.to_string())),
            Self::Local => {
                let res = Local.from_local_datetime(&naive);
                let picked = if latest { res.latest() } else { res.earliest() };
                picked.map(|dt| dt.fixed_offset()).ok_or_else(|| {
                    AppError::InvalidTimestamp(format!(
                        "{} does not exist in the local timezone",
                        naive
                    ))
                })
            }
        }
    }
}

impl fmt::Display for ReferenceZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Fixed(off) => write!(f, "{}", off),
        }
    }
}

const END_OF_DAY: NaiveTime = match NaiveTime::from_hms_micro_opt(23, 59, 59, 999_999) {
    Some(t) => t,
    None => panic!("invalid end-of-day time"),
};
