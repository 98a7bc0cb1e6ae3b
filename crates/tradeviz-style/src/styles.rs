//! Derived style bundles
//!
//! Ready-to-apply style records for the recurring chart furniture: lines,
//! points, axes, grid, tooltip, and legend. Each bundle is built once from
//! the base color/typography/spacing tokens rather than re-declaring
//! literals, so editing a base token updates every bundle that references
//! it.

use serde::Serialize;

use crate::color::ChartColors;
use crate::spacing::ChartSpacing;
use crate::transition::TransitionSpec;
use crate::typography::ChartTypography;

/// SVG stroke-dasharray patterns for line series
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DashPatterns {
    pub solid: &'static str,
    pub dashed: &'static str,
    pub dotted: &'static str,
}

/// Line series styling
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LineStyle {
    pub stroke_width: f32,
    pub stroke_width_thick: f32,
    pub stroke_width_thin: f32,
    pub dash: DashPatterns,
    /// Transition applied when a line series is redrawn
    pub transition: TransitionSpec,
}

impl LineStyle {
    pub fn new() -> Self {
        Self {
            stroke_width: 3.0,
            stroke_width_thick: 3.5,
            stroke_width_thin: 2.5,
            dash: DashPatterns {
                solid: "none",
                dashed: "5,5",
                dotted: "2,4",
            },
            transition: TransitionSpec::default(),
        }
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self::new()
    }
}

/// Data point (circle) styling
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PointStyle {
    pub radius: f32,
    pub radius_hover: f32,
    pub stroke_width: f32,
    pub stroke_color: &'static str,
}

impl PointStyle {
    pub fn new() -> Self {
        Self {
            radius: 5.0,
            radius_hover: 7.0,
            stroke_width: 2.0,
            stroke_color: "#ffffff",
        }
    }
}

impl Default for PointStyle {
    fn default() -> Self {
        Self::new()
    }
}

/// Axis line, tick, and label styling
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AxisStyle {
    pub stroke_width: f32,
    pub stroke_color: &'static str,
    pub tick_size: u32,
    pub tick_line_color: &'static str,
    pub label_font_size: &'static str,
    pub label_font_weight: u16,
    pub label_color: &'static str,
    pub tick_font_size: &'static str,
    pub tick_color: &'static str,
}

impl AxisStyle {
    pub fn new(colors: &ChartColors, typography: &ChartTypography) -> Self {
        Self {
            stroke_width: 1.5,
            stroke_color: colors.neutral.gray300,
            tick_size: 6,
            tick_line_color: colors.neutral.gray400,
            label_font_size: typography.sizes.base,
            label_font_weight: typography.weights.semibold,
            label_color: colors.neutral.gray700,
            tick_font_size: typography.sizes.sm,
            tick_color: colors.neutral.gray600,
        }
    }
}

/// Background grid styling
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GridStyle {
    pub stroke_width: f32,
    pub stroke_color: &'static str,
    pub stroke_dasharray: &'static str,
    pub opacity: f32,
}

impl GridStyle {
    pub fn new(colors: &ChartColors) -> Self {
        Self {
            stroke_width: 1.0,
            stroke_color: colors.neutral.gray200,
            stroke_dasharray: "3,3",
            opacity: 0.6,
        }
    }
}

/// Tooltip container styling
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TooltipStyle {
    pub background_color: &'static str,
    pub border_color: &'static str,
    pub border_radius: &'static str,
    /// CSS padding shorthand composed from the tooltip padding pair
    pub padding: String,
    pub box_shadow: &'static str,
    pub font_size: &'static str,
    pub font_family: &'static str,
    pub min_width: &'static str,
}

impl TooltipStyle {
    pub fn new(colors: &ChartColors, typography: &ChartTypography, spacing: &ChartSpacing) -> Self {
        Self {
            background_color: "rgba(255, 255, 255, 0.98)",
            border_color: colors.neutral.gray300,
            border_radius: "8px",
            padding: spacing.tooltip_padding.css(),
            box_shadow: "0 4px 12px rgba(0, 0, 0, 0.15)",
            font_size: typography.sizes.sm,
            font_family: typography.font_family,
            min_width: "140px",
        }
    }
}

/// Legend container and item styling
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LegendStyle {
    pub font_size: &'static str,
    pub font_family: &'static str,
    pub item_height: u32,
    pub item_spacing: u32,
    pub background_color: &'static str,
    pub border_color: &'static str,
    pub border_radius: &'static str,
    /// CSS padding shorthand composed from the legend padding pair
    pub padding: String,
}

impl LegendStyle {
    pub fn new(colors: &ChartColors, typography: &ChartTypography, spacing: &ChartSpacing) -> Self {
        Self {
            font_size: typography.sizes.sm,
            font_family: typography.font_family,
            item_height: 22,
            item_spacing: 8,
            background_color: "rgba(255, 255, 255, 0.9)",
            border_color: colors.neutral.gray200,
            border_radius: "6px",
            padding: spacing.legend_padding.css(),
        }
    }
}

/// A reference to one of the six derived style bundles, for name-based lookup
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DerivedStyle<'a> {
    Line(&'a LineStyle),
    Point(&'a PointStyle),
    Axis(&'a AxisStyle),
    Grid(&'a GridStyle),
    Tooltip(&'a TooltipStyle),
    Legend(&'a LegendStyle),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tooltip_padding_composed_from_spacing() {
        let colors = ChartColors::new();
        let typography = ChartTypography::new();
        let spacing = ChartSpacing::new();
        let tooltip = TooltipStyle::new(&colors, &typography, &spacing);
        assert_eq!(tooltip.padding, "10px 12px");
        assert_eq!(tooltip.padding, spacing.tooltip_padding.css());
    }

    #[test]
    fn test_legend_padding_composed_from_spacing() {
        let colors = ChartColors::new();
        let typography = ChartTypography::new();
        let spacing = ChartSpacing::new();
        let legend = LegendStyle::new(&colors, &typography, &spacing);
        assert_eq!(legend.padding, "15px 20px");
    }

    #[test]
    fn test_axis_references_base_tokens() {
        let colors = ChartColors::new();
        let typography = ChartTypography::new();
        let axis = AxisStyle::new(&colors, &typography);
        assert_eq!(axis.stroke_color, colors.neutral.gray300);
        assert_eq!(axis.label_font_size, typography.sizes.base);
        assert_eq!(axis.label_font_weight, typography.weights.semibold);
    }

    #[test]
    fn test_grid_references_neutral_scale() {
        let colors = ChartColors::new();
        let grid = GridStyle::new(&colors);
        assert_eq!(grid.stroke_color, colors.neutral.gray200);
        assert!((grid.opacity - 0.6).abs() < f32::EPSILON);
    }

    #[test]
    fn test_line_transition_default() {
        let line = LineStyle::new();
        assert_eq!(line.transition.duration_ms, 150);
    }
}
