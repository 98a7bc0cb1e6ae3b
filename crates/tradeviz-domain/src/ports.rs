//! Port container throughput
//!
//! Monthly twenty-foot-equivalent-unit (TEU) counts for the three tracked
//! US container ports. The port set is closed; each port carries its label
//! and its series color from the shared ports palette.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A tracked container port
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Port {
    LongBeach,
    LosAngeles,
    NyNj,
}

impl Port {
    /// All tracked ports in legend order
    pub fn all() -> [Port; 3] {
        [Port::LongBeach, Port::LosAngeles, Port::NyNj]
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Port::LongBeach => "Long Beach",
            Port::LosAngeles => "Los Angeles",
            Port::NyNj => "New York / New Jersey",
        }
    }

    /// Series color from the shared ports palette
    pub fn series_color(&self) -> &'static str {
        let palette = &tradeviz_style::theme().colors.palettes.ports;
        match self {
            Port::LongBeach => palette.long_beach,
            Port::LosAngeles => palette.los_angeles,
            Port::NyNj => palette.ny_nj,
        }
    }
}

/// One monthly container-throughput reading for one port
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContainerVolume {
    pub port: Port,

    /// First day of the reading month
    pub date: NaiveDate,

    /// Throughput in TEUs
    pub teu: f64,
}
