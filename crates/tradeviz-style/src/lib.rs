//! tradeviz-style - shared styling tokens for the tradeviz charts
//!
//! Every chart on the trade timeline page (line charts, bar charts, the
//! globe, the scroll timeline) draws from one immutable set of visual
//! constants so that colors, fonts, and spacing stay identical across
//! independently implemented renderers.
//!
//! # Key Components
//!
//! - **ChartColors**: semantic color groups plus per-chart series palettes
//! - **ChartTypography**: font stack and closed size/weight scales
//! - **ChartSpacing**: chart margins and tooltip/legend padding pairs
//! - **Derived styles**: line, point, axis, grid, tooltip, and legend
//!   bundles computed once from the base tokens
//! - **TransitionSpec**: duration + easing descriptor for animating a
//!   visual property, applied by the renderer
//!
//! The whole set is exposed through [`theme()`], a process-wide value
//! constructed once and read-only thereafter. Renderers either access the
//! token groups as plain fields or address individual colors by dotted
//! path (`"palettes.tariff.chineseUS"`); an unknown path is a programming
//! error and fails with [`StyleError::TokenNotFound`] rather than falling
//! back to a default color.

pub mod color;
pub mod error;
pub mod spacing;
pub mod styles;
pub mod theme;
pub mod transition;
pub mod typography;

pub use color::*;
pub use error::*;
pub use spacing::*;
pub use styles::*;
pub use theme::*;
pub use transition::*;
pub use typography::*;
