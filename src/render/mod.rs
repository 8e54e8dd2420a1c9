pub mod registry;

pub use registry::{RendererComponent, register_chart_components, registered_components};
