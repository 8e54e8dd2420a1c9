pub mod merge;
pub mod path;
pub mod types;
pub mod value;

mod json;

pub use merge::deep_merge;
pub use path::OptionPath;
pub use types::{Dataset, LegendLabelEntry, LegendLabelFactory, PointStyle};
pub use value::{OptionValue, OptionsTree};
