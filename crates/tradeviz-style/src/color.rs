//! Chart color tokens
//!
//! Colors are organized into semantic groups (primary series, secondary
//! accents, semantic status, neutral grayscale) plus named per-chart
//! palettes. Values are CSS color strings fixed at compile time; nothing
//! here changes after construction.
//!
//! The tariff palette keeps two spellings for each series key (camelCase
//! and snake_case) because the tariff charts were written against both
//! naming conventions at different times. Both spellings resolve to one
//! underlying field, so the pair can never drift apart.

use serde::Serialize;

use crate::error::{StyleError, StyleResult};

/// Primary data series colors
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PrimaryColors {
    pub blue: &'static str,
    pub teal: &'static str,
    pub indigo: &'static str,
    pub purple: &'static str,
}

impl PrimaryColors {
    fn get(&self, key: &str) -> Option<&'static str> {
        match key {
            "blue" => Some(self.blue),
            "teal" => Some(self.teal),
            "indigo" => Some(self.indigo),
            "purple" => Some(self.purple),
            _ => None,
        }
    }
}

/// Secondary/accent colors
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SecondaryColors {
    pub orange: &'static str,
    pub pink: &'static str,
    pub green: &'static str,
    pub amber: &'static str,
}

impl SecondaryColors {
    fn get(&self, key: &str) -> Option<&'static str> {
        match key {
            "orange" => Some(self.orange),
            "pink" => Some(self.pink),
            "green" => Some(self.green),
            "amber" => Some(self.amber),
            _ => None,
        }
    }
}

/// Semantic status colors
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SemanticColors {
    pub success: &'static str,
    pub warning: &'static str,
    pub danger: &'static str,
    pub info: &'static str,
}

impl SemanticColors {
    fn get(&self, key: &str) -> Option<&'static str> {
        match key {
            "success" => Some(self.success),
            "warning" => Some(self.warning),
            "danger" => Some(self.danger),
            "info" => Some(self.info),
            _ => None,
        }
    }
}

/// Neutral grayscale, light to dark
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NeutralColors {
    pub gray50: &'static str,
    pub gray100: &'static str,
    pub gray200: &'static str,
    pub gray300: &'static str,
    pub gray400: &'static str,
    pub gray500: &'static str,
    pub gray600: &'static str,
    pub gray700: &'static str,
    pub gray800: &'static str,
    pub gray900: &'static str,
}

impl NeutralColors {
    fn get(&self, key: &str) -> Option<&'static str> {
        match key {
            "gray50" => Some(self.gray50),
            "gray100" => Some(self.gray100),
            "gray200" => Some(self.gray200),
            "gray300" => Some(self.gray300),
            "gray400" => Some(self.gray400),
            "gray500" => Some(self.gray500),
            "gray600" => Some(self.gray600),
            "gray700" => Some(self.gray700),
            "gray800" => Some(self.gray800),
            "gray900" => Some(self.gray900),
            _ => None,
        }
    }
}

/// Series colors for the bilateral tariff-rate charts
///
/// Resolvable under both the camelCase keys (`chineseUS`, `usChinese`,
/// `chineseROW`, `usROW`) and the snake_case keys (`chinese_us`,
/// `us_chinese`, `chinese_row`, `us_row`). One field backs each pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TariffPalette {
    /// Chinese tariffs on US goods
    pub chinese_us: &'static str,
    /// US tariffs on Chinese goods
    pub us_chinese: &'static str,
    /// Chinese tariffs on the rest of the world
    pub chinese_row: &'static str,
    /// US tariffs on the rest of the world
    pub us_row: &'static str,
}

impl TariffPalette {
    fn get(&self, key: &str) -> Option<&'static str> {
        match key {
            "chineseUS" | "chinese_us" => Some(self.chinese_us),
            "usChinese" | "us_chinese" => Some(self.us_chinese),
            "chineseROW" | "chinese_row" => Some(self.chinese_row),
            "usROW" | "us_row" => Some(self.us_row),
            _ => None,
        }
    }
}

/// Series colors for the container-throughput chart, one per port
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PortsPalette {
    pub long_beach: &'static str,
    pub los_angeles: &'static str,
    pub ny_nj: &'static str,
}

impl PortsPalette {
    fn get(&self, key: &str) -> Option<&'static str> {
        match key {
            "longBeach" | "long_beach" => Some(self.long_beach),
            "losAngeles" | "los_angeles" => Some(self.los_angeles),
            "nyNj" | "ny_nj" => Some(self.ny_nj),
            _ => None,
        }
    }
}

/// Series colors for the import-price/inflation chart
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct InflationPalette {
    pub import_price: &'static str,
    pub inflation_rate: &'static str,
    pub core_pce: &'static str,
}

impl InflationPalette {
    fn get(&self, key: &str) -> Option<&'static str> {
        match key {
            "importPrice" | "import_price" => Some(self.import_price),
            "inflationRate" | "inflation_rate" => Some(self.inflation_rate),
            "corePCE" | "core_pce" => Some(self.core_pce),
            _ => None,
        }
    }
}

/// Named per-chart palettes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ChartPalettes {
    pub tariff: TariffPalette,
    pub ports: PortsPalette,
    pub inflation: InflationPalette,
}

impl ChartPalettes {
    fn get(&self, palette: &str, key: &str) -> Option<&'static str> {
        match palette {
            "tariff" => self.tariff.get(key),
            "ports" => self.ports.get(key),
            "inflation" => self.inflation.get(key),
            _ => None,
        }
    }
}

/// All chart color tokens
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ChartColors {
    pub primary: PrimaryColors,
    pub secondary: SecondaryColors,
    pub semantic: SemanticColors,
    pub neutral: NeutralColors,
    pub palettes: ChartPalettes,
}

impl ChartColors {
    /// The fixed color set used by every chart
    pub fn new() -> Self {
        Self {
            primary: PrimaryColors {
                blue: "#2563eb",
                teal: "#0d9488",
                indigo: "#6366f1",
                purple: "#7c3aed",
            },
            secondary: SecondaryColors {
                orange: "#f97316",
                pink: "#ec4899",
                green: "#10b981",
                amber: "#f59e0b",
            },
            semantic: SemanticColors {
                success: "#10b981",
                warning: "#f59e0b",
                danger: "#ef4444",
                info: "#3b82f6",
            },
            neutral: NeutralColors {
                gray50: "#f9fafb",
                gray100: "#f3f4f6",
                gray200: "#e5e7eb",
                gray300: "#d1d5db",
                gray400: "#9ca3af",
                gray500: "#6b7280",
                gray600: "#4b5563",
                gray700: "#374151",
                gray800: "#1f2937",
                gray900: "#111827",
            },
            palettes: ChartPalettes {
                tariff: TariffPalette {
                    chinese_us: "#ef4444",
                    us_chinese: "#3b82f6",
                    chinese_row: "#f59e0b",
                    us_row: "#ec4899",
                },
                ports: PortsPalette {
                    long_beach: "#2563eb",
                    los_angeles: "#0d9488",
                    ny_nj: "#6366f1",
                },
                inflation: InflationPalette {
                    import_price: "#10b981",
                    inflation_rate: "#3b82f6",
                    core_pce: "#f97316",
                },
            },
        }
    }

    /// Resolve a color by dotted path
    ///
    /// Paths have the form `"<group>.<key>"` for the four semantic groups
    /// or `"palettes.<chart>.<series>"` for the per-chart palettes, e.g.
    /// `"primary.blue"` or `"palettes.tariff.chineseUS"`.
    ///
    /// # Examples
    /// ```
    /// use tradeviz_style::ChartColors;
    /// let colors = ChartColors::new();
    /// assert_eq!(colors.resolve("semantic.danger").unwrap(), "#ef4444");
    /// assert!(colors.resolve("semantic.purple").is_err());
    /// ```
    pub fn resolve(&self, path: &str) -> StyleResult<&'static str> {
        let mut parts = path.split('.');
        let value = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some("primary"), Some(key), None, None) => self.primary.get(key),
            (Some("secondary"), Some(key), None, None) => self.secondary.get(key),
            (Some("semantic"), Some(key), None, None) => self.semantic.get(key),
            (Some("neutral"), Some(key), None, None) => self.neutral.get(key),
            (Some("palettes"), Some(palette), Some(key), None) => self.palettes.get(palette, key),
            _ => None,
        };
        value.ok_or_else(|| StyleError::not_found(path))
    }

    /// Every color leaf as a `(path, value)` pair
    ///
    /// Paths use the canonical snake_case palette keys; the camelCase
    /// spellings are aliases of the same values and are not listed twice.
    pub fn entries(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("primary.blue", self.primary.blue),
            ("primary.teal", self.primary.teal),
            ("primary.indigo", self.primary.indigo),
            ("primary.purple", self.primary.purple),
            ("secondary.orange", self.secondary.orange),
            ("secondary.pink", self.secondary.pink),
            ("secondary.green", self.secondary.green),
            ("secondary.amber", self.secondary.amber),
            ("semantic.success", self.semantic.success),
            ("semantic.warning", self.semantic.warning),
            ("semantic.danger", self.semantic.danger),
            ("semantic.info", self.semantic.info),
            ("neutral.gray50", self.neutral.gray50),
            ("neutral.gray100", self.neutral.gray100),
            ("neutral.gray200", self.neutral.gray200),
            ("neutral.gray300", self.neutral.gray300),
            ("neutral.gray400", self.neutral.gray400),
            ("neutral.gray500", self.neutral.gray500),
            ("neutral.gray600", self.neutral.gray600),
            ("neutral.gray700", self.neutral.gray700),
            ("neutral.gray800", self.neutral.gray800),
            ("neutral.gray900", self.neutral.gray900),
            ("palettes.tariff.chinese_us", self.palettes.tariff.chinese_us),
            ("palettes.tariff.us_chinese", self.palettes.tariff.us_chinese),
            ("palettes.tariff.chinese_row", self.palettes.tariff.chinese_row),
            ("palettes.tariff.us_row", self.palettes.tariff.us_row),
            ("palettes.ports.long_beach", self.palettes.ports.long_beach),
            ("palettes.ports.los_angeles", self.palettes.ports.los_angeles),
            ("palettes.ports.ny_nj", self.palettes.ports.ny_nj),
            ("palettes.inflation.import_price", self.palettes.inflation.import_price),
            ("palettes.inflation.inflation_rate", self.palettes.inflation.inflation_rate),
            ("palettes.inflation.core_pce", self.palettes.inflation.core_pce),
        ]
    }
}

impl Default for ChartColors {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn is_valid_css_color(value: &str) -> bool {
        if let Some(hex) = value.strip_prefix('#') {
            return hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit());
        }
        value.starts_with("rgba(") && value.ends_with(')')
    }

    #[test]
    fn test_resolve_group_paths() {
        let colors = ChartColors::new();
        assert_eq!(colors.resolve("primary.blue").unwrap(), "#2563eb");
        assert_eq!(colors.resolve("neutral.gray900").unwrap(), "#111827");
        assert_eq!(
            colors.resolve("palettes.ports.long_beach").unwrap(),
            colors.palettes.ports.long_beach
        );
    }

    #[test]
    fn test_resolve_unknown_path_fails() {
        let colors = ChartColors::new();
        for path in [
            "palettes.unknown.series",
            "primary.magenta",
            "primary",
            "primary.blue.extra",
            "",
        ] {
            assert_eq!(
                colors.resolve(path),
                Err(StyleError::not_found(path)),
                "path {:?} should not resolve",
                path
            );
        }
    }

    #[rstest]
    #[case("palettes.tariff.chineseUS", "palettes.tariff.chinese_us")]
    #[case("palettes.tariff.usChinese", "palettes.tariff.us_chinese")]
    #[case("palettes.tariff.chineseROW", "palettes.tariff.chinese_row")]
    #[case("palettes.tariff.usROW", "palettes.tariff.us_row")]
    fn test_tariff_aliases_resolve_identically(#[case] camel: &str, #[case] snake: &str) {
        let colors = ChartColors::new();
        assert_eq!(colors.resolve(camel).unwrap(), colors.resolve(snake).unwrap());
    }

    #[test]
    fn test_tariff_legacy_values() {
        let colors = ChartColors::new();
        assert_eq!(colors.resolve("palettes.tariff.chinese_us").unwrap(), "#ef4444");
        assert_eq!(colors.resolve("palettes.tariff.us_chinese").unwrap(), "#3b82f6");
    }

    #[test]
    fn test_all_leaves_are_valid_css_colors() {
        let colors = ChartColors::new();
        for (path, value) in colors.entries() {
            assert!(is_valid_css_color(value), "{} = {:?} is not a valid color", path, value);
        }
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let colors = ChartColors::new();
        for (path, _) in colors.entries() {
            assert_eq!(colors.resolve(path).unwrap(), colors.resolve(path).unwrap());
        }
    }
}
