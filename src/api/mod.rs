pub mod composer;
pub mod dataset;
pub mod legend;
pub mod payload;
pub mod protected;
pub mod theme;
pub mod variant;

pub use composer::{
    compose_bar_chart_options, compose_chart_options, compose_line_chart_options,
};
pub use dataset::ChartData;
pub use legend::{legend_labels_fragment, line_legend_labels};
pub use payload::ChartPayload;
pub use protected::{ProtectedFieldSet, StrippedOptions, tooltip_style_defaults};
pub use theme::Palette;
pub use variant::ChartVariant;
