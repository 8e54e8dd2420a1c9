//! Legend-label fragments and the line-chart label factory.

use crate::core::{Dataset, LegendLabelEntry, OptionValue, OptionsTree, PointStyle};

use super::theme::{FONT_FAMILY, LEGEND_LINE_WIDTH, LEGEND_SWATCH_WIDTH, Palette};
use super::variant::ChartVariant;

/// Builds one legend entry per dataset, in dataset order.
///
/// Entry styling comes from the standard palette keyed by dataset position,
/// so the legend always agrees with the rendered series. This is the
/// function stored under `generateLabels` in line-chart options; line
/// swatches read as short line segments rather than filled boxes.
#[must_use]
pub fn line_legend_labels(datasets: &[Dataset]) -> Vec<LegendLabelEntry> {
    let palette = Palette::standard();
    datasets
        .iter()
        .enumerate()
        .map(|(index, dataset)| LegendLabelEntry {
            text: dataset.label.clone(),
            stroke_style: palette.color(index).to_owned(),
            line_dash: palette.dash(index).to_vec(),
            line_width: LEGEND_LINE_WIDTH,
            point_style: PointStyle::Line,
        })
        .collect()
}

/// Legend `labels` fragment for the given variant.
///
/// Line charts defer entry generation to [`line_legend_labels`] so dash
/// patterns show up in the legend; bar charts use static rectangular
/// swatches and need no factory.
#[must_use]
pub fn legend_labels_fragment(variant: ChartVariant) -> OptionsTree {
    let font = OptionsTree::new().with("family", FONT_FAMILY);
    match variant {
        ChartVariant::Line => OptionsTree::new()
            .with("font", font)
            .with("usePointStyle", true)
            .with("pointStyleWidth", LEGEND_SWATCH_WIDTH)
            .with(
                "generateLabels",
                OptionValue::LegendLabels(line_legend_labels),
            ),
        ChartVariant::Bar => OptionsTree::new()
            .with("font", font)
            .with("pointStyle", PointStyle::Rect.as_str())
            .with("pointStyleWidth", LEGEND_SWATCH_WIDTH),
    }
}
