use crate::domain::ports::{SystemTimeSource, TimeSource};
use crate::utils::error::{ClockError, Result};
use crate::utils::validation::{validate_non_negative, validate_range};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

pub const MAX_HOUR: i32 = 23;
pub const MAX_MINUTE: i32 = 59;
pub const MAX_SECOND: i32 = 59;

const HOURS_PER_DAY: i32 = 24;
const MINUTES_PER_HOUR: i64 = 60;

/// A 24-hour time of day. Every field is always in range; setters reject
/// out-of-range values and leave the field as it was.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "ClockFields", into = "ClockFields")]
pub struct Clock {
    hour: u8,
    minute: u8,
    second: u8,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ClockFields {
    hour: i32,
    minute: i32,
    second: i32,
}

impl Clock {
    pub fn new(hour: i32, minute: i32, second: i32) -> Result<Self> {
        validate_range("hour", hour, 0, MAX_HOUR)?;
        validate_range("minute", minute, 0, MAX_MINUTE)?;
        validate_range("second", second, 0, MAX_SECOND)?;

        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
            second: second as u8,
        })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> u8 {
        self.second
    }

    pub fn set_hour(&mut self, hour: i32) -> Result<()> {
        validate_range("hour", hour, 0, MAX_HOUR)?;
        self.hour = hour as u8;
        Ok(())
    }

    pub fn set_minute(&mut self, minute: i32) -> Result<()> {
        validate_range("minute", minute, 0, MAX_MINUTE)?;
        self.minute = minute as u8;
        Ok(())
    }

    pub fn set_second(&mut self, second: i32) -> Result<()> {
        validate_range("second", second, 0, MAX_SECOND)?;
        self.second = second as u8;
        Ok(())
    }

    /// Moves the hour forward, wrapping past midnight. An amount that is a
    /// whole number of days leaves the hour untouched.
    pub fn advance_hour(&mut self, amount: i32) -> Result<()> {
        validate_non_negative("hours", amount)?;

        let step = amount % HOURS_PER_DAY;
        if step != 0 {
            let mut hour = i32::from(self.hour) + step;
            if hour >= HOURS_PER_DAY {
                hour -= HOURS_PER_DAY;
            }
            self.set_hour(hour)?;
        }
        Ok(())
    }

    /// Moves the minute forward, carrying whole hours through [`Clock::advance_hour`].
    pub fn advance_minute(&mut self, amount: i32) -> Result<()> {
        validate_non_negative("minutes", amount)?;

        let total = i64::from(self.minute) + i64::from(amount);
        // total <= i32::MAX + 59, so the carried hours always fit in i32
        let carried_hours = (total / MINUTES_PER_HOUR) as i32;
        let minute = (total % MINUTES_PER_HOUR) as i32;

        self.advance_hour(carried_hours)?;
        self.set_minute(minute)
    }

    /// -1, 0 or 1 as `self` is earlier than, equal to or later than `other`.
    pub fn compare(&self, other: &Clock) -> i32 {
        self.cmp(other) as i32
    }

    pub fn equals(&self, other: &Clock) -> bool {
        self == other
    }

    pub fn set_to_current_time(&mut self) -> Result<()> {
        self.set_from_source(&SystemTimeSource)
    }

    /// Overwrites all three fields from `source`. Nothing changes unless the
    /// whole reading is valid.
    pub fn set_from_source(&mut self, source: &dyn TimeSource) -> Result<()> {
        let now = source.now();
        let reading = Clock::new(
            to_field("hour", now.hour)?,
            to_field("minute", now.minute)?,
            to_field("second", now.second)?,
        )?;

        tracing::trace!(clock = %reading, "read host wall-clock time");
        *self = reading;
        Ok(())
    }

    fn key(&self) -> (u8, u8, u8) {
        (self.hour, self.minute, self.second)
    }
}

fn to_field(field: &str, value: u32) -> Result<i32> {
    i32::try_from(value)
        .map_err(|_| ClockError::invalid_argument(field, value, "value does not fit a clock field"))
}

impl Default for Clock {
    fn default() -> Self {
        Self {
            hour: 23,
            minute: 58,
            second: 0,
        }
    }
}

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.hour, self.minute, self.second)
    }
}

impl Ord for Clock {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl PartialOrd for Clock {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Clock {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Clock {}

impl Hash for Clock {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl FromStr for Clock {
    type Err = ClockError;

    /// Parses `H:M:S`; zero padding is accepted but not required.
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.trim().split(':').collect();
        if parts.len() != 3 {
            return Err(ClockError::invalid_argument(
                "clock",
                s,
                "expected exactly three fields as H:M:S",
            ));
        }

        let mut fields = [0i32; 3];
        for (slot, part) in fields.iter_mut().zip(&parts) {
            *slot = part.trim().parse().map_err(|_| {
                ClockError::invalid_argument("clock", s, format!("'{}' is not an integer", part))
            })?;
        }

        Clock::new(fields[0], fields[1], fields[2])
    }
}

impl TryFrom<ClockFields> for Clock {
    type Error = ClockError;

    fn try_from(fields: ClockFields) -> Result<Self> {
        Clock::new(fields.hour, fields.minute, fields.second)
    }
}

impl From<Clock> for ClockFields {
    fn from(clock: Clock) -> Self {
        Self {
            hour: i32::from(clock.hour),
            minute: i32::from(clock.minute),
            second: i32::from(clock.second),
        }
    }
}
