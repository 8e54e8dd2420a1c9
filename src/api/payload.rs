use serde_json::{Map, Value};

use crate::core::{OptionPath, OptionsTree};
use crate::error::{ChartError, ChartResult};

use super::composer::compose_chart_options;
use super::dataset::ChartData;
use super::variant::ChartVariant;

/// A draw-ready chart: palette-styled data plus fully composed options.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPayload {
    pub variant: ChartVariant,
    pub data: ChartData,
    pub options: OptionsTree,
}

impl ChartPayload {
    /// Composes options for the variant, styles the datasets, and plumbs
    /// an optional title through as a plain rendering option. The title is
    /// set after composition, so it never competes with caller options.
    #[must_use]
    pub fn new(
        variant: ChartVariant,
        data: ChartData,
        title: Option<&str>,
        options: &OptionsTree,
    ) -> Self {
        let mut composed = compose_chart_options(variant, options);
        if let Some(text) = title {
            composed.set_path(
                &OptionPath::parse("plugins.title"),
                OptionsTree::new().with("display", true).with("text", text),
            );
        }
        Self {
            variant,
            data: data.with_palette_styles(variant),
            options: composed,
        }
    }

    #[must_use]
    pub fn bar(data: ChartData, title: Option<&str>, options: &OptionsTree) -> Self {
        Self::new(ChartVariant::Bar, data, title, options)
    }

    #[must_use]
    pub fn line(data: ChartData, title: Option<&str>, options: &OptionsTree) -> Self {
        Self::new(ChartVariant::Line, data, title, options)
    }

    /// Serializes the payload to the renderer's JSON document shape.
    /// Function-valued options are dropped, as JSON has no form for them.
    pub fn to_json_value(&self) -> ChartResult<Value> {
        let data = serde_json::to_value(&self.data)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart data: {e}")))?;
        let mut document = Map::new();
        document.insert("type".to_owned(), Value::String(self.variant.as_str().to_owned()));
        document.insert("data".to_owned(), data);
        document.insert("options".to_owned(), self.options.to_json_value());
        Ok(Value::Object(document))
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        let document = self.to_json_value()?;
        serde_json::to_string_pretty(&document).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart payload json: {e}"))
        })
    }
}
