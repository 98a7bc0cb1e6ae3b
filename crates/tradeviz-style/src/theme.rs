//! The process-wide chart theme
//!
//! [`ChartTheme`] bundles every token group and derived style behind one
//! value, constructed once at first access and immutable thereafter.
//! Renderers share the single [`theme()`] instance instead of building
//! their own, which is what keeps independently written charts visually
//! identical.

use lazy_static::lazy_static;
use serde::Serialize;

use crate::color::ChartColors;
use crate::error::{StyleError, StyleResult};
use crate::spacing::ChartSpacing;
use crate::styles::{
    AxisStyle, DerivedStyle, GridStyle, LegendStyle, LineStyle, PointStyle, TooltipStyle,
};
use crate::transition::TransitionSpec;
use crate::typography::ChartTypography;

/// All styling tokens for the tradeviz charts
///
/// The base groups (`colors`, `typography`, `spacing`) hold the raw
/// tokens; the remaining fields are the derived bundles computed from
/// them at construction. Fields are public for compile-time-checked
/// access; the `color`/`derived` methods cover callers that address
/// tokens by name.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartTheme {
    pub colors: ChartColors,
    pub typography: ChartTypography,
    pub spacing: ChartSpacing,
    pub line: LineStyle,
    pub point: PointStyle,
    pub axis: AxisStyle,
    pub grid: GridStyle,
    pub tooltip: TooltipStyle,
    pub legend: LegendStyle,
}

impl ChartTheme {
    /// Build the theme, deriving the style bundles from the base tokens
    pub fn new() -> Self {
        let colors = ChartColors::new();
        let typography = ChartTypography::new();
        let spacing = ChartSpacing::new();

        let line = LineStyle::new();
        let point = PointStyle::new();
        let axis = AxisStyle::new(&colors, &typography);
        let grid = GridStyle::new(&colors);
        let tooltip = TooltipStyle::new(&colors, &typography, &spacing);
        let legend = LegendStyle::new(&colors, &typography, &spacing);

        Self {
            colors,
            typography,
            spacing,
            line,
            point,
            axis,
            grid,
            tooltip,
            legend,
        }
    }

    /// Resolve a color by dotted path (see [`ChartColors::resolve`])
    pub fn color(&self, path: &str) -> StyleResult<&'static str> {
        self.colors.resolve(path)
    }

    /// Look up a font size by scale name
    pub fn font_size(&self, name: &str) -> StyleResult<&'static str> {
        self.typography.size(name)
    }

    /// Look up a font weight by scale name
    pub fn font_weight(&self, name: &str) -> StyleResult<u16> {
        self.typography.weight(name)
    }

    /// Look up a derived style bundle by name
    ///
    /// Known names are `line`, `point`, `axis`, `grid`, `tooltip`, and
    /// `legend`.
    pub fn derived(&self, name: &str) -> StyleResult<DerivedStyle<'_>> {
        match name {
            "line" => Ok(DerivedStyle::Line(&self.line)),
            "point" => Ok(DerivedStyle::Point(&self.point)),
            "axis" => Ok(DerivedStyle::Axis(&self.axis)),
            "grid" => Ok(DerivedStyle::Grid(&self.grid)),
            "tooltip" => Ok(DerivedStyle::Tooltip(&self.tooltip)),
            "legend" => Ok(DerivedStyle::Legend(&self.legend)),
            _ => Err(StyleError::not_found(format!("styles.{}", name))),
        }
    }

    /// Transition for redrawing a line series
    ///
    /// With no override this returns the theme's standard line transition;
    /// an explicit duration is returned verbatim. Pure in either case: the
    /// theme itself is never modified.
    pub fn line_transition(&self, duration_ms: Option<u32>) -> TransitionSpec {
        TransitionSpec::new(
            duration_ms.unwrap_or(self.line.transition.duration_ms),
            self.line.transition.easing,
        )
    }
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static! {
    static ref THEME: ChartTheme = ChartTheme::new();
}

/// The shared theme instance used by every chart
pub fn theme() -> &'static ChartTheme {
    &THEME
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition::Easing;

    #[test]
    fn test_theme_is_shared_and_stable() {
        let a = theme();
        let b = theme();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a, &ChartTheme::new());
    }

    #[test]
    fn test_color_lookup_through_theme() {
        assert_eq!(theme().color("palettes.tariff.chineseUS").unwrap(), "#ef4444");
        assert!(theme().color("palettes.unknown.series").is_err());
    }

    #[test]
    fn test_derived_lookup() {
        assert!(matches!(theme().derived("tooltip").unwrap(), DerivedStyle::Tooltip(_)));
        assert!(matches!(theme().derived("grid").unwrap(), DerivedStyle::Grid(_)));
        assert_eq!(
            theme().derived("shadow"),
            Err(StyleError::not_found("styles.shadow"))
        );
    }

    #[test]
    fn test_line_transition_default_and_override() {
        let theme = theme();

        let default = theme.line_transition(None);
        assert_eq!(default.duration_ms, 150);
        assert_eq!(default.easing, Easing::Linear);

        let overridden = theme.line_transition(Some(400));
        assert_eq!(overridden.duration_ms, 400);

        // The override does not touch the stored default.
        assert_eq!(theme.line_transition(None).duration_ms, 150);
    }

    #[test]
    fn test_getters_idempotent() {
        let first = theme().derived("legend").unwrap();
        let second = theme().derived("legend").unwrap();
        match (first, second) {
            (DerivedStyle::Legend(a), DerivedStyle::Legend(b)) => assert_eq!(a, b),
            _ => panic!("legend lookup changed shape between calls"),
        }
        assert_eq!(theme().font_size("sm").unwrap(), theme().font_size("sm").unwrap());
    }

    #[test]
    fn test_theme_serializes() {
        let json = serde_json::to_value(theme()).unwrap();
        assert_eq!(json["tooltip"]["padding"], "10px 12px");
        assert_eq!(json["colors"]["primary"]["blue"], "#2563eb");
    }
}
