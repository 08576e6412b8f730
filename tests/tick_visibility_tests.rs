use skewt_rs::axes::SkewTick;
use skewt_rs::core::AxisInterval;

#[test]
fn default_location_ticks_are_visible_on_both_edges() {
    let tick = SkewTick::new(None);
    let lower = AxisInterval::new(-50.0, 50.0);
    let upper = AxisInterval::new(-107.7, -7.7);

    assert!(tick.bottom_mark_visible(lower));
    assert!(tick.bottom_label_visible(lower));
    assert!(tick.top_mark_visible(upper));
    assert!(tick.top_label_visible(upper));
    assert!(tick.grid_visible(AxisInterval::new(-107.7, 50.0)));
}

#[test]
fn edges_are_gated_independently() {
    let lower = AxisInterval::new(-50.0, 50.0);
    let upper = AxisInterval::new(-107.7, -7.7);

    // Inside both (the windows overlap between -50 and -7.7).
    let shared = SkewTick::new(Some(-20.0));
    assert!(shared.bottom_mark_visible(lower));
    assert!(shared.top_mark_visible(upper));

    // Bottom only.
    let bottom_only = SkewTick::new(Some(30.0));
    assert!(bottom_only.bottom_mark_visible(lower));
    assert!(!bottom_only.top_mark_visible(upper));

    // Top only.
    let top_only = SkewTick::new(Some(-90.0));
    assert!(!top_only.bottom_mark_visible(lower));
    assert!(top_only.top_mark_visible(upper));
}

#[test]
fn containment_is_inclusive_at_interval_bounds() {
    let lower = AxisInterval::new(-50.0, 50.0);
    assert!(SkewTick::new(Some(-50.0)).needs_lower(lower));
    assert!(SkewTick::new(Some(50.0)).needs_lower(lower));
    assert!(!SkewTick::new(Some(50.0 + 1e-9)).needs_lower(lower));

    let upper = AxisInterval::new(-107.7, -7.7);
    assert!(SkewTick::new(Some(-107.7)).needs_upper(upper));
    assert!(SkewTick::new(Some(-7.7)).needs_upper(upper));
}

#[test]
fn upper_interval_order_does_not_matter() {
    // A reversed pair, as a mirrored shear direction could produce.
    let upper = AxisInterval::new(-7.7, -107.7);
    assert!(SkewTick::new(Some(-50.0)).needs_upper(upper));
    assert!(!SkewTick::new(Some(0.0)).needs_upper(upper));
}

#[test]
fn gridline_uses_the_combined_view_interval() {
    let view = AxisInterval::new(-107.7, 50.0);

    // Outside both single-edge windows is irrelevant for the gridline; only
    // the combined span counts.
    let tick = SkewTick::new(Some(-60.0));
    assert!(tick.grid_visible(view));

    let outside = SkewTick::new(Some(60.0));
    assert!(!outside.grid_visible(view));

    let disabled = SkewTick::new(Some(-60.0)).with_grid_enabled(false);
    assert!(!disabled.grid_visible(view));
}

#[test]
fn own_flags_participate_in_the_final_visibility() {
    let lower = AxisInterval::new(-50.0, 50.0);
    let upper = AxisInterval::new(-107.7, -7.7);

    let tick = SkewTick::new(Some(-20.0))
        .with_bottom_mark_enabled(false)
        .with_top_label_enabled(false);

    assert!(!tick.bottom_mark_visible(lower));
    assert!(tick.bottom_label_visible(lower));
    assert!(tick.top_mark_visible(upper));
    assert!(!tick.top_label_visible(upper));
}
