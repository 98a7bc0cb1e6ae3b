//! tradeviz-domain - dataset record shapes for the tradeviz charts
//!
//! One module per dataset kind consumed by the charts:
//! - **TariffAction**: dated tariff actions with the four bilateral rate series
//! - **PmiReading**: manufacturing PMI by month
//! - **ContainerVolume**: monthly container throughput (TEU) per port
//! - **AutoIncome**: automaker quarterly operating income
//! - **CountryTariffRate**: cross-country tariff rates for the globe view
//! - **TradeBalance**: bilateral US-China goods trade by quarter
//! - **TimelineEvent / TimelinePoint**: scroll-timeline narrative events and
//!   the combined per-date record merging the dated series
//!
//! These are data-interchange shapes: parsing and loading happen upstream,
//! rendering happens downstream. Records arrive here already structured.

pub mod auto;
pub mod balance;
pub mod country;
pub mod pmi;
pub mod ports;
pub mod quarter;
pub mod tariff;
pub mod timeline;

pub use auto::*;
pub use balance::*;
pub use country::*;
pub use pmi::*;
pub use ports::*;
pub use quarter::*;
pub use tariff::*;
pub use timeline::*;
