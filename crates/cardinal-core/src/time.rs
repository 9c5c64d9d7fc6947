//! Wall-clock snapshots and the sources that produce them.

use chrono::{Local, Timelike};
use thiserror::Error;

/// Errors raised when building a [`ClockTime`] from raw fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClockTimeError {
    #[error("hour {0} is out of range (0-23)")]
    Hour(u32),
    #[error("minute {0} is out of range (0-59)")]
    Minute(u32),
    #[error("second {0} is out of range (0-59)")]
    Second(u32),
}

/// A validated hour/minute/second snapshot taken at render time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
    second: u32,
}

impl ClockTime {
    /// Build a snapshot, rejecting fields outside their clock ranges.
    pub fn new(hour: u32, minute: u32, second: u32) -> Result<Self, ClockTimeError> {
        if hour > 23 {
            return Err(ClockTimeError::Hour(hour));
        }
        if minute > 59 {
            return Err(ClockTimeError::Minute(minute));
        }
        if second > 59 {
            return Err(ClockTimeError::Second(second));
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// Snapshot any chrono time value.
    ///
    /// chrono keeps leap seconds in the nanosecond field, so `second()` is
    /// always within 0-59 and the conversion cannot fail.
    pub fn from_timelike<T: Timelike>(value: &T) -> Self {
        Self {
            hour: value.hour(),
            minute: value.minute(),
            second: value.second(),
        }
    }

    /// Hour of day (0-23).
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Minute of hour (0-59).
    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Second of minute (0-59).
    pub fn second(&self) -> u32 {
        self.second
    }
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Anything that can hand out the current time.
pub trait ClockSource {
    fn now(&self) -> ClockTime;
}

/// The host's local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl ClockSource for LocalClock {
    fn now(&self) -> ClockTime {
        ClockTime::from_timelike(&Local::now())
    }
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedClock(pub ClockTime);

impl ClockSource for FixedClock {
    fn now(&self) -> ClockTime {
        self.0
    }
}
