//! aster-charts: chart option composition for the Aster design system.
//!
//! The crate turns caller-supplied partial options plus a chart variant
//! into complete options for the external renderer: internal defaults are
//! layered under caller overrides, tooltip styling stays under
//! design-system control, and legend entries derive deterministically from
//! dataset order.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod render;
pub mod telemetry;

pub use api::{
    ChartData, ChartPayload, ChartVariant, compose_bar_chart_options, compose_chart_options,
    compose_line_chart_options,
};
pub use error::{ChartError, ChartResult};
