use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const MINUTES_PER_DAY: u32 = 24 * 60;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid clock time {0:?}, expected HH:MM")]
    InvalidClockTime(String),
    #[error("Invalid duration {0:?}, expected <hours>h <minutes>m")]
    InvalidDuration(String),
}

/// Time of day on a 24-hour clock, minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
}

impl ClockTime {
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    /// Wraps past midnight, so any minute count is accepted.
    pub fn from_minutes_since_midnight(minutes: u32) -> Self {
        let minutes = minutes % MINUTES_PER_DAY;
        Self {
            hour: minutes / 60,
            minute: minutes % 60,
        }
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn minutes_since_midnight(&self) -> u32 {
        self.hour * 60 + self.minute
    }

    /// Adds `duration` to this time of day.
    ///
    /// Returns the resulting clock time together with the number of midnights
    /// crossed on the way.
    pub fn add_duration(self, duration: FlightDuration) -> (ClockTime, u32) {
        let total = self.minutes_since_midnight() + duration.total_minutes();
        (
            ClockTime::from_minutes_since_midnight(total),
            total / MINUTES_PER_DAY,
        )
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for ClockTime {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidClockTime(s.to_string());
        let (hour, minute) = s.split_once(':').ok_or_else(invalid)?;
        let hour = parse_digits(hour, 2, 2).ok_or_else(invalid)?;
        let minute = parse_digits(minute, 2, 2).ok_or_else(invalid)?;
        ClockTime::new(hour, minute).ok_or_else(invalid)
    }
}

/// Elapsed flight time, rendered as `<hours>h <minutes>m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FlightDuration {
    hours: u32,
    minutes: u32,
}

impl FlightDuration {
    pub fn new(hours: u32, minutes: u32) -> Option<Self> {
        (minutes < 60).then_some(Self { hours, minutes })
    }

    pub fn from_minutes(total: u32) -> Self {
        Self {
            hours: total / 60,
            minutes: total % 60,
        }
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn total_minutes(&self) -> u32 {
        self.hours * 60 + self.minutes
    }
}

impl fmt::Display for FlightDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m", self.hours, self.minutes)
    }
}

impl FromStr for FlightDuration {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidDuration(s.to_string());
        let body = s.strip_suffix('m').ok_or_else(invalid)?;
        let (hours, minutes) = body.split_once("h ").ok_or_else(invalid)?;
        let hours = parse_digits(hours, 1, 3).ok_or_else(invalid)?;
        let minutes = parse_digits(minutes, 1, 2).ok_or_else(invalid)?;
        FlightDuration::new(hours, minutes).ok_or_else(invalid)
    }
}

fn parse_digits(s: &str, min_len: usize, max_len: usize) -> Option<u32> {
    if s.len() < min_len || s.len() > max_len || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

macro_rules! string_serde {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(de::Error::custom)
            }
        }
    };
}

string_serde!(ClockTime);
string_serde!(FlightDuration);
