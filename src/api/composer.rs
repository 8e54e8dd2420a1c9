//! Layered composition of renderer options from internal defaults and
//! caller overrides.
//!
//! Composition runs in three stages: base defaults are assembled with the
//! legend fragment and the protected tooltip styling, caller options
//! (minus protected fields) deep-merge on top, and variant scale defaults
//! merge underneath the result. Caller values win on leaf conflicts
//! everywhere except protected paths, which are stripped before the merge
//! ever sees them.

use crate::core::{OptionValue, OptionsTree, deep_merge};
use crate::extensions::KEYBOARD_NAVIGATION_EVENTS;

use super::legend::legend_labels_fragment;
use super::protected::{ProtectedFieldSet, tooltip_style_defaults};
use super::theme::BORDER_COLOR;
use super::variant::ChartVariant;

/// Pointer events every chart listens for, ahead of extension events.
const POINTER_EVENTS: [&str; 5] = ["mousemove", "mouseout", "click", "touchstart", "touchmove"];

fn interaction_events() -> OptionValue {
    let events = POINTER_EVENTS
        .iter()
        .chain(KEYBOARD_NAVIGATION_EVENTS.iter())
        .map(|event| OptionValue::from(*event))
        .collect();
    OptionValue::Seq(events)
}

/// Internal plugin defaults with the caller's remaining plugin entries
/// spliced in. The splice replaces same-named internal entries wholesale;
/// a caller supplying `plugins.legend` takes over that entry entirely.
fn base_plugin_defaults(variant: ChartVariant, caller_plugins: &OptionsTree) -> OptionsTree {
    let mut plugins = OptionsTree::new()
        .with(
            "legend",
            OptionsTree::new()
                .with("position", "bottom")
                .with("labels", legend_labels_fragment(variant)),
        )
        .with("tooltip", tooltip_style_defaults());
    for (key, value) in caller_plugins.iter() {
        plugins.insert(key, value.clone());
    }
    plugins
}

fn compose_base(variant: ChartVariant, options: &OptionsTree) -> OptionsTree {
    let mut sanitized = ProtectedFieldSet::standard().strip(options).sanitized;
    // A plugins entry that is not a tree carries nothing mergeable and is
    // rebuilt as empty, so it can never displace the internal plugins.
    let caller_plugins = sanitized
        .get("plugins")
        .and_then(OptionValue::as_tree)
        .cloned()
        .unwrap_or_default();
    sanitized.insert("plugins", caller_plugins.clone());

    let defaults = OptionsTree::new()
        .with("animation", false)
        .with("responsive", true)
        .with("maintainAspectRatio", false)
        .with("events", interaction_events())
        .with("plugins", base_plugin_defaults(variant, &caller_plugins));

    deep_merge(&defaults, &sanitized)
}

fn grid_color_defaults() -> OptionsTree {
    OptionsTree::new().with("grid", OptionsTree::new().with("color", BORDER_COLOR))
}

fn variant_scale_defaults(variant: ChartVariant) -> OptionsTree {
    let y = match variant {
        ChartVariant::Bar => OptionsTree::new()
            .with("beginAtZero", true)
            .with("grid", OptionsTree::new().with("color", BORDER_COLOR)),
        ChartVariant::Line => grid_color_defaults(),
    };
    OptionsTree::new().with(
        "scales",
        OptionsTree::new().with("x", grid_color_defaults()).with("y", y),
    )
}

/// Composes complete renderer options for the given variant.
///
/// Caller options win over internal defaults on leaf conflicts, protected
/// tooltip styling always comes out as the internal constants, and variant
/// scale defaults fill whatever the caller left unspecified.
#[must_use]
pub fn compose_chart_options(variant: ChartVariant, options: &OptionsTree) -> OptionsTree {
    deep_merge(&variant_scale_defaults(variant), &compose_base(variant, options))
}

/// Bar chart options: grid colors on both axes and a zero-based y axis.
#[must_use]
pub fn compose_bar_chart_options(options: &OptionsTree) -> OptionsTree {
    compose_chart_options(ChartVariant::Bar, options)
}

/// Line chart options: grid colors on both axes, y axis left free.
#[must_use]
pub fn compose_line_chart_options(options: &OptionsTree) -> OptionsTree {
    compose_chart_options(ChartVariant::Line, options)
}
