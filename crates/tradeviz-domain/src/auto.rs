//! Automaker quarterly operating income

use serde::{Deserialize, Serialize};

use crate::quarter::Quarter;

/// One automaker's operating income for one quarter
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AutoIncome {
    /// Manufacturer name as shown on the bar chart
    pub manufacturer: String,

    pub quarter: Quarter,

    /// Operating income in billions of USD (negative for a loss)
    pub operating_income: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let record = AutoIncome {
            manufacturer: "Toyota".to_string(),
            quarter: "2025Q1".parse().unwrap(),
            operating_income: 7.9,
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: AutoIncome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_quarter_serializes_as_label() {
        let record = AutoIncome {
            manufacturer: "Ford".to_string(),
            quarter: "2024Q4".parse().unwrap(),
            operating_income: -0.5,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["quarter"], "2024Q4");
    }
}
