//! Cross-country tariff-rate comparison
//!
//! Backing rows for the globe visualization: one average applied tariff
//! rate per country.

use serde::{Deserialize, Serialize};

/// One country's average applied tariff rate
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CountryTariffRate {
    /// ISO 3166-1 alpha-3 code, matching the globe geometry ids
    pub country_code: String,

    /// Display name
    pub country: String,

    /// Average applied tariff rate, percent
    pub rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let row = CountryTariffRate {
            country_code: "CHN".to_string(),
            country: "China".to_string(),
            rate: 17.5,
        };
        let json = serde_json::to_string(&row).unwrap();
        let back: CountryTariffRate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, row);
    }
}
