use housing_scrolly::api::{ChartConfig, HighlightBandConfig, StepId};
use housing_scrolly::core::{Color, MAX_TICK_COUNT};
use housing_scrolly::error::ChartError;

#[test]
fn empty_json_is_the_default_config() {
    let config = ChartConfig::from_json_str("{}").expect("config");
    assert_eq!(config, ChartConfig::default());
    assert_eq!(config.mount_selector, "#chart-2");
    assert_eq!(config.initial_size.width, 600);
    assert_eq!(config.palette.len(), 10);
    assert_eq!(config.resize_debounce_ms, 200);
    assert_eq!(config.step_triggers.get("highlight-bar"), Some(&StepId::FullWithBar));
}

#[test]
fn json_round_trip_preserves_config() {
    let config = ChartConfig::default()
        .with_initial_size(900, 640)
        .with_highlight_regions(vec!["Pacific".to_owned()])
        .with_resize_debounce_ms(50);
    let json = config.to_json_pretty().expect("json");
    assert!(json.contains(r##""focus_color": "#ff0000""##));
    assert_eq!(ChartConfig::from_json_str(&json).expect("parse"), config);
}

#[test]
fn partial_json_overrides_fields() {
    let config = ChartConfig::from_json_str(
        r##"{"palette": ["#000", "#ffffff"], "focus_region": "Pacific", "title": "Prices"}"##,
    )
    .expect("config");
    assert_eq!(config.palette, vec![Color::BLACK, Color::WHITE]);
    assert_eq!(config.focus_tag(), "pacific");
    assert_eq!(config.title, "Prices");
    assert_eq!(
        config.highlight_tags(),
        vec!["mountain", "pacific", "westsouthcentral", "southatlantic"]
    );
}

#[test]
fn invalid_configs_are_rejected() {
    let cases = [
        r#"{"palette": []}"#,
        r#"{"palette": ["teal-ish"]}"#,
        r#"{"mount_selector": "  "}"#,
        r#"{"initial_size": {"width": 150, "height": 700}}"#,
        r#"{"focus_region": "42"}"#,
        r#"{"x_tick_count": 0}"#,
        r#"{"y_tick_count": 1000000}"#,
        r#"{"marker_radius": -1.0}"#,
        r##"{"highlight_band": {"anchor_month": "December-16", "span_start_month": "March-17", "span_end_month": "February-17", "fill": "#c2dfff"}}"##,
        r##"{"highlight_band": {"anchor_month": "Dec 2016", "span_start_month": "November-16", "span_end_month": "February-17", "fill": "#c2dfff"}}"##,
    ];
    for json in cases {
        assert!(ChartConfig::from_json_str(json).is_err(), "accepted {json}");
    }
}

#[test]
fn tick_count_bound_is_inclusive() {
    let json = format!(r#"{{"x_tick_count": {MAX_TICK_COUNT}, "y_tick_count": 1}}"#);
    let config = ChartConfig::from_json_str(&json).expect("config");
    assert_eq!(config.x_tick_count, MAX_TICK_COUNT);

    let json = format!(r#"{{"x_tick_count": {}}}"#, MAX_TICK_COUNT + 1);
    assert!(ChartConfig::from_json_str(&json).is_err());
}

#[test]
fn every_step_needs_exactly_one_trigger() {
    let mut missing = ChartConfig::default();
    missing.step_triggers.shift_remove("all-lines");
    let err = missing.validate().expect_err("missing binding");
    assert!(matches!(err, ChartError::InvalidData(message) if message.contains("all-visible")));

    let mut duplicated = ChartConfig::default();
    duplicated
        .step_triggers
        .insert("second-us-line".to_owned(), StepId::UsOnly);
    assert!(duplicated.validate().is_err());

    let mut renamed = ChartConfig::default();
    renamed.step_triggers.shift_remove("blank-chart-two");
    renamed
        .step_triggers
        .insert("intro".to_owned(), StepId::Blank);
    assert!(renamed.validate().is_ok());
}

#[test]
fn band_builder_replaces_months() {
    let band = HighlightBandConfig {
        anchor_month: "January-17".to_owned(),
        span_start_month: "January-17".to_owned(),
        span_end_month: "March-17".to_owned(),
        fill: Color::GRAY,
    };
    let config = ChartConfig::default()
        .with_highlight_band(band.clone())
        .validate()
        .expect("valid");
    assert_eq!(config.highlight_band, band);
}
