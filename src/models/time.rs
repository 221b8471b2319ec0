use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Minutes in a full day; `TimeOfDay` values are always below this.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Error raised when a time string cannot be parsed as `HH:MM` or `HH:MM:SS`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time format: {input:?}")]
pub struct InvalidTimeFormat {
    pub input: String,
}

impl InvalidTimeFormat {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

/// Wall-clock time within one day, stored as minutes since midnight.
///
/// All schedule arithmetic happens on this representation; `HH:MM` strings
/// only exist at the parsing and serialization boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    /// Build from raw minutes since midnight.
    pub const fn from_minutes(minutes: u32) -> Self {
        Self(minutes)
    }

    /// Build from an hour/minute pair. Returns `None` when out of range.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if hour >= 24 || minute >= 60 {
            return None;
        }
        Some(Self(hour * 60 + minute))
    }

    /// Parse `HH:MM` or `HH:MM:SS` into a minute-granularity time.
    ///
    /// Seconds are validated and then truncated: the grid never places
    /// anything finer than a minute.
    pub fn parse(input: &str) -> Result<Self, InvalidTimeFormat> {
        let parts: Vec<&str> = input.split(':').collect();
        if parts.len() != 2 && parts.len() != 3 {
            return Err(InvalidTimeFormat::new(input));
        }

        let hour: u32 = parts[0]
            .parse()
            .map_err(|_| InvalidTimeFormat::new(input))?;
        let minute: u32 = parts[1]
            .parse()
            .map_err(|_| InvalidTimeFormat::new(input))?;
        if parts.len() == 3 {
            let second: u32 = parts[2]
                .parse()
                .map_err(|_| InvalidTimeFormat::new(input))?;
            if second >= 60 {
                return Err(InvalidTimeFormat::new(input));
            }
        }

        Self::from_hm(hour, minute).ok_or_else(|| InvalidTimeFormat::new(input))
    }

    /// Minutes since midnight.
    pub fn minutes(&self) -> u32 {
        self.0
    }

    /// Minutes from `self` to `later`, saturating at zero when `later`
    /// precedes `self`.
    pub fn minutes_until(&self, later: TimeOfDay) -> u32 {
        later.0.saturating_sub(self.0)
    }

    /// Advance by `minutes`, or `None` when the result would leave the day.
    pub fn plus_minutes(self, minutes: u32) -> Option<TimeOfDay> {
        let total = self.0 + minutes;
        if total >= MINUTES_PER_DAY {
            return None;
        }
        Some(Self(total))
    }

    /// Step back by `minutes`, or `None` when the result would underflow
    /// midnight.
    pub fn minus_minutes(self, minutes: u32) -> Option<TimeOfDay> {
        self.0.checked_sub(minutes).map(Self)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

// Grid JSON carries display-ready "HH:MM" labels, so TimeOfDay crosses the
// serde boundary as a string rather than a bare minute count.
impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        TimeOfDay::parse(&raw).map_err(serde::de::Error::custom)
    }
}
