//! Calendar quarter labels
//!
//! Quarterly series (trade balance, automaker income) are keyed by labels
//! of the form `"2024Q3"`. `Quarter` parses, orders, and displays those
//! labels; on the wire it is a plain string.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Errors from parsing a quarter label
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuarterError {
    /// Not of the form `<year>Q<1-4>`
    #[error("invalid quarter label: {0:?}")]
    InvalidLabel(String),

    /// Quarter number outside 1..=4
    #[error("quarter out of range: {0}")]
    OutOfRange(u8),
}

/// A calendar quarter, e.g. `2024Q3`
///
/// Orders chronologically (year first, then quarter).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quarter {
    pub year: i32,
    pub quarter: u8,
}

impl Quarter {
    /// Create a quarter, validating the quarter number
    pub fn new(year: i32, quarter: u8) -> Result<Self, QuarterError> {
        if !(1..=4).contains(&quarter) {
            return Err(QuarterError::OutOfRange(quarter));
        }
        Ok(Self { year, quarter })
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Q{}", self.year, self.quarter)
    }
}

impl FromStr for Quarter {
    type Err = QuarterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, quarter) = s
            .split_once(['Q', 'q'])
            .ok_or_else(|| QuarterError::InvalidLabel(s.to_string()))?;
        let year: i32 = year
            .trim()
            .parse()
            .map_err(|_| QuarterError::InvalidLabel(s.to_string()))?;
        let quarter: u8 = quarter
            .trim()
            .parse()
            .map_err(|_| QuarterError::InvalidLabel(s.to_string()))?;
        Self::new(year, quarter)
    }
}

impl Serialize for Quarter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Quarter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
