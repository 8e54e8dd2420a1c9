//! Design tokens shared by every chart variant.

/// Font family applied to legend and axis text.
pub const FONT_FAMILY: &str = "system-ui, 'Segoe UI', 'Hiragino Sans', sans-serif";

/// Surface color behind tooltips.
pub const BACKGROUND_COLOR: &str = "#ffffff";

/// Default text color for tooltip titles and bodies.
pub const TEXT_COLOR: &str = "#23221f";

/// Border and grid-line color.
pub const BORDER_COLOR: &str = "#d6d3d0";

/// Ordered series colors, assigned to datasets by position.
pub const CHART_COLORS: [&str; 6] = [
    "#0071c1", "#f56121", "#007b43", "#970b3f", "#0f7f85", "#7c4199",
];

/// Ordered line-dash patterns paired with `CHART_COLORS`. The first series
/// draws solid.
pub const BORDER_DASHES: [&[f64]; 6] = [
    &[],
    &[8.0, 4.0],
    &[2.0, 2.0],
    &[12.0, 4.0, 4.0, 4.0],
    &[6.0, 6.0],
    &[4.0, 2.0, 8.0, 2.0],
];

/// Stroke width of line-style legend swatches.
pub const LEGEND_LINE_WIDTH: f64 = 4.0;

/// Width reserved for a legend swatch.
pub const LEGEND_SWATCH_WIDTH: i64 = 48;

/// Tooltip border width. Always supplied internally.
pub const TOOLTIP_BORDER_WIDTH: i64 = 1;

/// Tooltip corner radius. Always supplied internally.
pub const TOOLTIP_CORNER_RADIUS: i64 = 4;

/// Parallel color and dash lookup tables indexed by dataset position.
///
/// Lookups wrap around, so any index is valid for any dataset count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    colors: &'static [&'static str],
    dashes: &'static [&'static [f64]],
}

impl Palette {
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            colors: &CHART_COLORS,
            dashes: &BORDER_DASHES,
        }
    }

    #[must_use]
    pub fn color(&self, index: usize) -> &'static str {
        self.colors[index % self.colors.len()]
    }

    #[must_use]
    pub fn dash(&self, index: usize) -> &'static [f64] {
        self.dashes[index % self.dashes.len()]
    }

    /// Number of distinct entries before assignments repeat.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::standard()
    }
}
