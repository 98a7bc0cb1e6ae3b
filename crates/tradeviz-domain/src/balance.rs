//! Bilateral US-China goods trade by quarter

use serde::{Deserialize, Serialize};

use crate::quarter::Quarter;

/// US goods trade with China for one quarter, in billions of USD
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TradeBalance {
    pub quarter: Quarter,

    /// US exports to China
    pub exports: f64,

    /// US imports from China
    pub imports: f64,
}

impl TradeBalance {
    /// Net balance (exports minus imports; negative is a US deficit)
    pub fn balance(&self) -> f64 {
        self.exports - self.imports
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_sign() {
        let q = TradeBalance {
            quarter: "2024Q2".parse().unwrap(),
            exports: 32.4,
            imports: 106.9,
        };
        assert!(q.balance() < 0.0);
        assert!((q.balance() + 74.5).abs() < 1e-9);
    }

    #[test]
    fn test_round_trip() {
        let q = TradeBalance {
            quarter: "2024Q2".parse().unwrap(),
            exports: 32.4,
            imports: 106.9,
        };
        let json = serde_json::to_string(&q).unwrap();
        let back: TradeBalance = serde_json::from_str(&json).unwrap();
        assert_eq!(back, q);
    }
}
