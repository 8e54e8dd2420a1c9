use serde::{Deserialize, Serialize};

use crate::core::Dataset;
use crate::error::{ChartError, ChartResult};

use super::theme::Palette;
use super::variant::ChartVariant;

/// Labels and datasets handed to the renderer alongside composed options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartData {
    #[must_use]
    pub fn new(labels: Vec<String>, datasets: Vec<Dataset>) -> Self {
        Self { labels, datasets }
    }

    /// Returns a copy with palette styles assigned by dataset position.
    ///
    /// Only fields the caller left unset are filled: border and background
    /// colors for both variants, plus the dash pattern for line charts, so
    /// rendered series match the legend entries built from the same
    /// palette. Caller-set values always win.
    #[must_use]
    pub fn with_palette_styles(&self, variant: ChartVariant) -> Self {
        let palette = Palette::standard();
        let datasets = self
            .datasets
            .iter()
            .enumerate()
            .map(|(index, dataset)| {
                let mut styled = dataset.clone();
                if styled.border_color.is_none() {
                    styled.border_color = Some(palette.color(index).to_owned());
                }
                if styled.background_color.is_none() {
                    styled.background_color = Some(palette.color(index).to_owned());
                }
                if variant == ChartVariant::Line && styled.border_dash.is_none() {
                    styled.border_dash = Some(palette.dash(index).to_vec());
                }
                styled
            })
            .collect();
        Self {
            labels: self.labels.clone(),
            datasets,
        }
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart data json: {e}")))
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart data json: {e}")))
    }
}
