//! Typography tokens
//!
//! Font family stack plus closed size and weight scales. Sizes are pixel
//! strings ready to assign to a text element; weights are numeric CSS
//! weights. Unknown keys fail with a token lookup error.

use serde::Serialize;

use crate::error::{StyleError, StyleResult};

/// Font size scale, `xs` through `2xl`, as pixel strings
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FontSizes {
    pub xs: &'static str,
    pub sm: &'static str,
    pub base: &'static str,
    pub md: &'static str,
    pub lg: &'static str,
    pub xl: &'static str,
    #[serde(rename = "2xl")]
    pub xxl: &'static str,
}

impl FontSizes {
    fn get(&self, key: &str) -> Option<&'static str> {
        match key {
            "xs" => Some(self.xs),
            "sm" => Some(self.sm),
            "base" => Some(self.base),
            "md" => Some(self.md),
            "lg" => Some(self.lg),
            "xl" => Some(self.xl),
            "2xl" => Some(self.xxl),
            _ => None,
        }
    }
}

/// Font weight scale, `normal` through `bold`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FontWeights {
    pub normal: u16,
    pub medium: u16,
    pub semibold: u16,
    pub bold: u16,
}

impl FontWeights {
    fn get(&self, key: &str) -> Option<u16> {
        match key {
            "normal" => Some(self.normal),
            "medium" => Some(self.medium),
            "semibold" => Some(self.semibold),
            "bold" => Some(self.bold),
            _ => None,
        }
    }
}

/// All typography tokens
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ChartTypography {
    /// Font family stack shared by every text element on the charts
    pub font_family: &'static str,
    pub sizes: FontSizes,
    pub weights: FontWeights,
}

impl ChartTypography {
    pub fn new() -> Self {
        Self {
            font_family: "'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Roboto', sans-serif",
            sizes: FontSizes {
                xs: "11px",
                sm: "12px",
                base: "13px",
                md: "14px",
                lg: "16px",
                xl: "18px",
                xxl: "20px",
            },
            weights: FontWeights {
                normal: 400,
                medium: 500,
                semibold: 600,
                bold: 700,
            },
        }
    }

    /// Look up a font size by name (`xs`, `sm`, `base`, `md`, `lg`, `xl`, `2xl`)
    pub fn size(&self, name: &str) -> StyleResult<&'static str> {
        self.sizes
            .get(name)
            .ok_or_else(|| StyleError::not_found(format!("typography.sizes.{}", name)))
    }

    /// Look up a font weight by name (`normal`, `medium`, `semibold`, `bold`)
    pub fn weight(&self, name: &str) -> StyleResult<u16> {
        self.weights
            .get(name)
            .ok_or_else(|| StyleError::not_found(format!("typography.weights.{}", name)))
    }
}

impl Default for ChartTypography {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("xs", "11px")]
    #[case("sm", "12px")]
    #[case("base", "13px")]
    #[case("md", "14px")]
    #[case("lg", "16px")]
    #[case("xl", "18px")]
    #[case("2xl", "20px")]
    fn test_size_scale(#[case] name: &str, #[case] expected: &str) {
        let typography = ChartTypography::new();
        assert_eq!(typography.size(name).unwrap(), expected);
    }

    #[test]
    fn test_weight_scale() {
        let typography = ChartTypography::new();
        assert_eq!(typography.weight("normal").unwrap(), 400);
        assert_eq!(typography.weight("bold").unwrap(), 700);
    }

    #[test]
    fn test_unknown_keys_fail() {
        let typography = ChartTypography::new();
        assert!(typography.size("3xl").is_err());
        assert!(typography.weight("black").is_err());
    }
}
