use skewt_rs::SkewChartConfig;
use skewt_rs::core::{Viewport, YScale};

#[test]
fn config_round_trips_through_json() {
    let config = SkewChartConfig::new(Viewport::new(1000, 1000), -50.0, 50.0, 1050.0, 100.0)
        .with_shear_deg(45.0)
        .with_x_tick_step(5.0)
        .with_y_scale(YScale::Linear);

    let json = serde_json::to_string(&config).expect("serializes");
    let restored: SkewChartConfig = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(restored, config);
}

#[test]
fn missing_fields_fall_back_to_skewt_defaults() {
    let json = r#"{
        "viewport": { "width": 800, "height": 800 },
        "x_min": -50.0,
        "x_max": 50.0,
        "y_bottom": 1050.0,
        "y_top": 100.0
    }"#;

    let config: SkewChartConfig = serde_json::from_str(json).expect("deserializes");
    assert_eq!(config.y_scale, YScale::Log10);
    assert_eq!(config.shear_deg, 30.0);
    assert_eq!(config.x_tick_step, 10.0);
    assert_eq!(config.projection, "skewx");
    assert_eq!(config.y_tick_levels.len(), 10);
    assert_eq!(config.y_tick_levels.first().copied(), Some(100.0));
    assert_eq!(config.y_tick_levels.last().copied(), Some(1000.0));
}
