//! Manufacturing PMI readings

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// PMI value separating expansion from contraction
pub const PMI_NEUTRAL: f64 = 50.0;

/// One monthly manufacturing PMI reading
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PmiReading {
    /// First day of the survey month
    pub date: NaiveDate,

    /// Diffusion index value
    pub value: f64,
}

impl PmiReading {
    /// Whether the reading signals expansion (above 50)
    pub fn is_expansion(&self) -> bool {
        self.value > PMI_NEUTRAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expansion_threshold() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert!(PmiReading { date, value: 50.3 }.is_expansion());
        assert!(!PmiReading { date, value: 48.7 }.is_expansion());
        assert!(!PmiReading { date, value: PMI_NEUTRAL }.is_expansion());
    }

    #[test]
    fn test_round_trip() {
        let reading = PmiReading {
            date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            value: 49.0,
        };
        let json = serde_json::to_string(&reading).unwrap();
        let back: PmiReading = serde_json::from_str(&json).unwrap();
        assert_eq!(back, reading);
    }
}
