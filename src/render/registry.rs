//! One-time registration of the components the external renderer needs.

use std::sync::OnceLock;

use tracing::debug;

use crate::extensions::KEYBOARD_NAVIGATION_EXTENSION_ID;

/// Drawing primitives and plugins the renderer must have registered
/// before the first draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RendererComponent {
    CategoryScale,
    LinearScale,
    PointElement,
    LineElement,
    BarElement,
    ArcElement,
    Title,
    Tooltip,
    Legend,
    Filler,
    DataLabels,
    KeyboardNavigation,
}

impl RendererComponent {
    /// Every component a chart may need, in registration order.
    pub const ALL: [RendererComponent; 12] = [
        Self::CategoryScale,
        Self::LinearScale,
        Self::PointElement,
        Self::LineElement,
        Self::BarElement,
        Self::ArcElement,
        Self::Title,
        Self::Tooltip,
        Self::Legend,
        Self::Filler,
        Self::DataLabels,
        Self::KeyboardNavigation,
    ];

    /// Stable id the renderer registers the component under.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::CategoryScale => "category",
            Self::LinearScale => "linear",
            Self::PointElement => "point",
            Self::LineElement => "line",
            Self::BarElement => "bar",
            Self::ArcElement => "arc",
            Self::Title => "title",
            Self::Tooltip => "tooltip",
            Self::Legend => "legend",
            Self::Filler => "filler",
            Self::DataLabels => "datalabels",
            Self::KeyboardNavigation => KEYBOARD_NAVIGATION_EXTENSION_ID,
        }
    }
}

static REGISTERED_COMPONENTS: OnceLock<Vec<RendererComponent>> = OnceLock::new();

/// Registers every chart component with the process-wide registry.
///
/// The registration happens once per process; repeated calls are no-ops.
/// Returns `true` when this call performed the registration.
pub fn register_chart_components() -> bool {
    let mut registered_now = false;
    REGISTERED_COMPONENTS.get_or_init(|| {
        registered_now = true;
        debug!(count = RendererComponent::ALL.len(), "registered chart renderer components");
        RendererComponent::ALL.to_vec()
    });
    registered_now
}

/// Components registered so far. Empty before the first
/// [`register_chart_components`] call.
#[must_use]
pub fn registered_components() -> &'static [RendererComponent] {
    REGISTERED_COMPONENTS.get().map_or(&[], Vec::as_slice)
}
