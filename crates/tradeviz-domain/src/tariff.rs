//! Tariff actions over time
//!
//! Each record is one dated tariff action together with the four bilateral
//! average-rate series at that date. The `tariff_action` field name on the
//! wire is kept from the upstream dataset.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A dated tariff action with the four bilateral rate series
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TariffAction {
    /// Human-readable description of the action
    #[serde(rename = "tariff_action")]
    pub action: String,

    /// Date the action took effect
    pub date: NaiveDate,

    /// Chinese average tariff rate on rest-of-world goods, percent
    pub chinese_tariffs_row: f64,

    /// Chinese average tariff rate on US goods, percent
    pub chinese_tariffs_us: f64,

    /// US average tariff rate on Chinese goods, percent
    pub us_tariffs_chinese: f64,

    /// US average tariff rate on rest-of-world goods, percent
    pub us_tariffs_row: f64,
}

/// One of the four tariff-rate series
///
/// Ties a series to its rate field and to its color in the shared tariff
/// palette, so legends and lines for the same series always agree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TariffSeries {
    ChineseUs,
    UsChinese,
    ChineseRow,
    UsRow,
}

impl TariffSeries {
    /// All series in legend order
    pub fn all() -> [TariffSeries; 4] {
        [
            TariffSeries::ChineseUs,
            TariffSeries::UsChinese,
            TariffSeries::ChineseRow,
            TariffSeries::UsRow,
        ]
    }

    /// Legend label
    pub fn label(&self) -> &'static str {
        match self {
            TariffSeries::ChineseUs => "Chinese tariffs on US goods",
            TariffSeries::UsChinese => "US tariffs on Chinese goods",
            TariffSeries::ChineseRow => "Chinese tariffs on ROW goods",
            TariffSeries::UsRow => "US tariffs on ROW goods",
        }
    }

    /// Series color from the shared tariff palette
    pub fn series_color(&self) -> &'static str {
        let palette = &tradeviz_style::theme().colors.palettes.tariff;
        match self {
            TariffSeries::ChineseUs => palette.chinese_us,
            TariffSeries::UsChinese => palette.us_chinese,
            TariffSeries::ChineseRow => palette.chinese_row,
            TariffSeries::UsRow => palette.us_row,
        }
    }

    /// The rate this series reads from a record
    pub fn rate(&self, action: &TariffAction) -> f64 {
        match self {
            TariffSeries::ChineseUs => action.chinese_tariffs_us,
            TariffSeries::UsChinese => action.us_tariffs_chinese,
            TariffSeries::ChineseRow => action.chinese_tariffs_row,
            TariffSeries::UsRow => action.us_tariffs_row,
        }
    }
}
