use aster_charts::api::theme::BORDER_COLOR;
use aster_charts::compose_bar_chart_options;
use aster_charts::core::{OptionPath, OptionValue, OptionsTree};

fn bool_at(tree: &OptionsTree, dotted: &str) -> Option<bool> {
    tree.get_path(&OptionPath::parse(dotted))
        .and_then(OptionValue::as_bool)
}

fn i64_at(tree: &OptionsTree, dotted: &str) -> Option<i64> {
    tree.get_path(&OptionPath::parse(dotted))
        .and_then(OptionValue::as_i64)
}

fn str_at<'a>(tree: &'a OptionsTree, dotted: &str) -> Option<&'a str> {
    tree.get_path(&OptionPath::parse(dotted))
        .and_then(OptionValue::as_str)
}

#[test]
fn bar_options_deep_merge_caller_settings_with_internal_defaults() {
    let caller = OptionsTree::new().with(
        "scales",
        OptionsTree::new().with(
            "y",
            OptionsTree::new()
                .with("ticks", OptionsTree::new().with("stepSize", 50i64))
                .with("grid", OptionsTree::new().with("display", false)),
        ),
    );

    let composed = compose_bar_chart_options(&caller);

    // internal defaults survive
    assert_eq!(bool_at(&composed, "scales.y.beginAtZero"), Some(true));
    assert_eq!(str_at(&composed, "scales.y.grid.color"), Some(BORDER_COLOR));

    // caller settings land
    assert_eq!(i64_at(&composed, "scales.y.ticks.stepSize"), Some(50));
    assert_eq!(bool_at(&composed, "scales.y.grid.display"), Some(false));
}

#[test]
fn bar_options_keep_begin_at_zero_beside_suggested_max() {
    let caller = OptionsTree::new().with(
        "scales",
        OptionsTree::new().with("y", OptionsTree::new().with("suggestedMax", 150i64)),
    );

    let composed = compose_bar_chart_options(&caller);

    assert_eq!(i64_at(&composed, "scales.y.suggestedMax"), Some(150));
    assert_eq!(bool_at(&composed, "scales.y.beginAtZero"), Some(true));
}

#[test]
fn bar_caller_settings_beat_variant_scale_defaults() {
    let caller = OptionsTree::new().with(
        "scales",
        OptionsTree::new()
            .with(
                "x",
                OptionsTree::new().with("grid", OptionsTree::new().with("color", "#000000")),
            )
            .with("y", OptionsTree::new().with("beginAtZero", false)),
    );

    let composed = compose_bar_chart_options(&caller);

    // the caller wins on keys the variant defaults also set
    assert_eq!(bool_at(&composed, "scales.y.beginAtZero"), Some(false));
    assert_eq!(str_at(&composed, "scales.x.grid.color"), Some("#000000"));

    // the sibling default the caller never touched still fills in
    assert_eq!(str_at(&composed, "scales.y.grid.color"), Some(BORDER_COLOR));
}

#[test]
fn bar_options_merge_x_axis_grid_settings() {
    let caller = OptionsTree::new().with(
        "scales",
        OptionsTree::new().with(
            "x",
            OptionsTree::new().with(
                "grid",
                OptionsTree::new().with("display", false).with("lineWidth", 2i64),
            ),
        ),
    );

    let composed = compose_bar_chart_options(&caller);

    assert_eq!(str_at(&composed, "scales.x.grid.color"), Some(BORDER_COLOR));
    assert_eq!(bool_at(&composed, "scales.x.grid.display"), Some(false));
    assert_eq!(i64_at(&composed, "scales.x.grid.lineWidth"), Some(2));
}

#[test]
fn bar_options_pass_through_additional_plugins() {
    let caller = OptionsTree::new().with(
        "plugins",
        OptionsTree::new().with(
            "datalabels",
            OptionsTree::new()
                .with("display", true)
                .with("anchor", "end")
                .with("align", "end"),
        ),
    );

    let composed = compose_bar_chart_options(&caller);

    assert_eq!(bool_at(&composed, "plugins.datalabels.display"), Some(true));
    assert_eq!(str_at(&composed, "plugins.datalabels.anchor"), Some("end"));
    assert_eq!(str_at(&composed, "plugins.datalabels.align"), Some("end"));

    // internal plugin defaults stay beside the addition
    assert_eq!(str_at(&composed, "plugins.legend.position"), Some("bottom"));
    assert_eq!(i64_at(&composed, "plugins.tooltip.borderWidth"), Some(1));
}

#[test]
fn bar_options_merge_multiple_scales_at_once() {
    let caller = OptionsTree::new().with(
        "scales",
        OptionsTree::new()
            .with(
                "x",
                OptionsTree::new()
                    .with("ticks", OptionsTree::new().with("maxRotation", 45i64))
                    .with("grid", OptionsTree::new().with("display", false)),
            )
            .with(
                "y",
                OptionsTree::new()
                    .with("ticks", OptionsTree::new().with("stepSize", 50i64))
                    .with("suggestedMax", 150i64)
                    .with("grid", OptionsTree::new().with("drawBorder", false)),
            ),
    );

    let composed = compose_bar_chart_options(&caller);

    assert_eq!(i64_at(&composed, "scales.x.ticks.maxRotation"), Some(45));
    assert_eq!(bool_at(&composed, "scales.x.grid.display"), Some(false));
    assert_eq!(str_at(&composed, "scales.x.grid.color"), Some(BORDER_COLOR));

    assert_eq!(bool_at(&composed, "scales.y.beginAtZero"), Some(true));
    assert_eq!(i64_at(&composed, "scales.y.ticks.stepSize"), Some(50));
    assert_eq!(i64_at(&composed, "scales.y.suggestedMax"), Some(150));
    assert_eq!(bool_at(&composed, "scales.y.grid.drawBorder"), Some(false));
    assert_eq!(str_at(&composed, "scales.y.grid.color"), Some(BORDER_COLOR));
}

#[test]
fn bar_options_without_caller_input_carry_base_defaults() {
    let composed = compose_bar_chart_options(&OptionsTree::new());

    assert_eq!(bool_at(&composed, "animation"), Some(false));
    assert_eq!(bool_at(&composed, "responsive"), Some(true));
    assert_eq!(bool_at(&composed, "maintainAspectRatio"), Some(false));
    assert_eq!(str_at(&composed, "plugins.legend.position"), Some("bottom"));
    assert_eq!(str_at(&composed, "scales.x.grid.color"), Some(BORDER_COLOR));
    assert_eq!(str_at(&composed, "scales.y.grid.color"), Some(BORDER_COLOR));
    assert_eq!(bool_at(&composed, "scales.y.beginAtZero"), Some(true));

    let events: Vec<&str> = composed
        .get("events")
        .and_then(OptionValue::as_seq)
        .expect("events sequence")
        .iter()
        .filter_map(OptionValue::as_str)
        .collect();
    assert_eq!(
        events,
        vec!["mousemove", "mouseout", "click", "touchstart", "touchmove", "keydown", "keyup"]
    );
}

#[test]
fn bar_caller_events_concatenate_after_defaults() {
    let caller = OptionsTree::new().with("events", vec![OptionValue::from("wheel")]);

    let composed = compose_bar_chart_options(&caller);
    let events: Vec<&str> = composed
        .get("events")
        .and_then(OptionValue::as_seq)
        .expect("events sequence")
        .iter()
        .filter_map(OptionValue::as_str)
        .collect();

    assert_eq!(events.len(), 8);
    assert_eq!(events.first(), Some(&"mousemove"));
    assert_eq!(events.last(), Some(&"wheel"));
}

#[test]
fn bar_legend_labels_use_rect_point_style() {
    let composed = compose_bar_chart_options(&OptionsTree::new());

    assert_eq!(str_at(&composed, "plugins.legend.labels.pointStyle"), Some("rect"));
    assert_eq!(i64_at(&composed, "plugins.legend.labels.pointStyleWidth"), Some(48));
    assert!(
        composed
            .get_path(&OptionPath::parse("plugins.legend.labels.generateLabels"))
            .is_none()
    );
}
