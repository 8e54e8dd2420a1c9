use serde::{Deserialize, Serialize};

/// Chart families the composition engine knows how to configure.
///
/// The variant selects structural scale defaults and legend behavior and is
/// fixed for the lifetime of one composition call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartVariant {
    Bar,
    Line,
}

impl ChartVariant {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Line => "line",
        }
    }
}
