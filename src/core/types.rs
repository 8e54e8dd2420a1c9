use serde::{Deserialize, Serialize};

/// Swatch shape drawn for a legend item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointStyle {
    Line,
    Rect,
}

impl PointStyle {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Rect => "rect",
        }
    }
}

/// One legend item, keyed to a dataset by its position in the dataset list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendLabelEntry {
    pub text: String,
    pub stroke_style: String,
    pub line_dash: Vec<f64>,
    pub line_width: f64,
    pub point_style: PointStyle,
}

/// A single caller-supplied series. Its position in the dataset list keys
/// palette color and dash assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    #[serde(default)]
    pub data: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_dash: Option<Vec<f64>>,
}

impl Dataset {
    #[must_use]
    pub fn new(label: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            data,
            border_color: None,
            background_color: None,
            border_dash: None,
        }
    }

    #[must_use]
    pub fn with_border_color(mut self, color: impl Into<String>) -> Self {
        self.border_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_border_dash(mut self, dash: Vec<f64>) -> Self {
        self.border_dash = Some(dash);
        self
    }
}

/// Factory stored inside an options tree for deferred legend-label
/// generation. Plain function pointers only, which keeps option values
/// `Clone` and `PartialEq`.
pub type LegendLabelFactory = fn(&[Dataset]) -> Vec<LegendLabelEntry>;
