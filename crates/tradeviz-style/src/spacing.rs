//! Spacing tokens
//!
//! Numeric pixel values for chart margins and for the tooltip and legend
//! padding pairs. Padding pairs know how to render themselves as the CSS
//! shorthand `"<y>px <x>px"`, which is how the derived tooltip and legend
//! styles consume them.

use serde::Serialize;

/// Chart margin in pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ChartMargin {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

/// A horizontal/vertical padding pair in pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PaddingPair {
    pub x: u32,
    pub y: u32,
}

impl PaddingPair {
    /// CSS padding shorthand, vertical first: `"10px 12px"`
    pub fn css(&self) -> String {
        format!("{}px {}px", self.y, self.x)
    }
}

/// All spacing tokens
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ChartSpacing {
    pub margin: ChartMargin,
    pub tooltip_padding: PaddingPair,
    pub legend_padding: PaddingPair,
}

impl ChartSpacing {
    pub fn new() -> Self {
        Self {
            margin: ChartMargin {
                top: 50,
                right: 140,
                bottom: 70,
                left: 90,
            },
            tooltip_padding: PaddingPair { x: 12, y: 10 },
            legend_padding: PaddingPair { x: 20, y: 15 },
        }
    }
}

impl Default for ChartSpacing {
    fn default() -> Self {
        Self::new()
    }
}
