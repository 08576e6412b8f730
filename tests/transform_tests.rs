use approx::assert_relative_eq;
use proptest::prelude::*;
use skewt_rs::SkewError;
use skewt_rs::core::{DataPoint, SkewTransform, Viewport, YScale};

fn standard_transform() -> SkewTransform {
    SkewTransform::new(
        YScale::Log10,
        (-50.0, 50.0),
        (1050.0, 100.0),
        30.0,
        Viewport::new(800, 800),
    )
    .expect("standard transform builds")
}

#[test]
fn shear_is_applied_in_normalized_axes_space() {
    let transform = standard_transform();
    let tan_theta = 30.0_f64.to_radians().tan();

    // Two points with the same pressure (same axes Y) but different X keep
    // their axes-space separation; the shear offset depends only on Y.
    let left = transform.data_to_axes(DataPoint::new(-50.0, 500.0));
    let right = transform.data_to_axes(DataPoint::new(50.0, 500.0));
    assert_relative_eq!(right.x - left.x, 1.0, epsilon = 1e-12);
    assert_relative_eq!(right.y, left.y, epsilon = 1e-12);
    assert_relative_eq!(left.x, left.y * tan_theta, epsilon = 1e-12);

    // Against the shear formula directly: x' = x_norm + y_norm * tan(theta).
    let probe = transform.data_to_axes(DataPoint::new(0.0, 300.0));
    let x_norm = 0.5;
    assert_relative_eq!(probe.x, x_norm + probe.y * tan_theta, epsilon = 1e-12);
}

#[test]
fn upper_reference_points_round_trip() {
    let transform = standard_transform();
    for corner in [DataPoint::new(0.0, 1.0), DataPoint::new(1.0, 1.0)] {
        let data = transform.axes_to_data(corner);
        let back = transform.data_to_axes(data);
        assert_relative_eq!(back.x, corner.x, epsilon = 1e-9);
        assert_relative_eq!(back.y, corner.y, epsilon = 1e-9);
    }
}

#[test]
fn linear_y_scale_composes_the_same_way() {
    let transform = SkewTransform::new(
        YScale::Linear,
        (0.0, 10.0),
        (0.0, 100.0),
        45.0,
        Viewport::new(400, 400),
    )
    .expect("linear transform builds");

    let top_left = transform.data_to_axes(DataPoint::new(0.0, 100.0));
    assert_relative_eq!(top_left.x, 1.0, epsilon = 1e-12);
    assert_relative_eq!(top_left.y, 1.0, epsilon = 1e-12);
}

#[test]
fn degenerate_configurations_fail_fast() {
    let viewport = Viewport::new(800, 800);

    let ninety = SkewTransform::new(YScale::Log10, (-50.0, 50.0), (1050.0, 100.0), 90.0, viewport);
    assert!(matches!(ninety, Err(SkewError::SingularTransform(_))));

    let flipped_ninety =
        SkewTransform::new(YScale::Log10, (-50.0, 50.0), (1050.0, 100.0), 270.0, viewport);
    assert!(matches!(flipped_ninety, Err(SkewError::SingularTransform(_))));

    let zero_width =
        SkewTransform::new(YScale::Log10, (25.0, 25.0), (1050.0, 100.0), 30.0, viewport);
    assert!(matches!(zero_width, Err(SkewError::InvalidData(_))));

    let zero_height =
        SkewTransform::new(YScale::Log10, (-50.0, 50.0), (500.0, 500.0), 30.0, viewport);
    assert!(matches!(zero_height, Err(SkewError::InvalidData(_))));

    let negative_log_domain =
        SkewTransform::new(YScale::Log10, (-50.0, 50.0), (1050.0, -5.0), 30.0, viewport);
    assert!(matches!(negative_log_domain, Err(SkewError::InvalidData(_))));

    let empty_viewport = SkewTransform::new(
        YScale::Log10,
        (-50.0, 50.0),
        (1050.0, 100.0),
        30.0,
        Viewport::new(800, 0),
    );
    assert!(matches!(
        empty_viewport,
        Err(SkewError::InvalidViewport { .. })
    ));
}

#[test]
fn negative_shear_angles_are_accepted() {
    let transform = SkewTransform::new(
        YScale::Log10,
        (-50.0, 50.0),
        (1050.0, 100.0),
        -30.0,
        Viewport::new(800, 800),
    )
    .expect("negative shear builds");

    let top = transform.data_to_axes(DataPoint::new(-50.0, 100.0));
    assert!(top.x < 0.0);
}

#[test]
fn gridline_blend_ignores_log_curvature() {
    let transform = standard_transform();

    // A vertical gridline endpoint at axes Y = 0 sits exactly on the bottom
    // pixel row, at 1 on the top row, regardless of the log Y scale.
    let (x_bottom, y_bottom) = transform.grid_to_device(0.0, 0.0);
    let (x_top, y_top) = transform.grid_to_device(0.0, 1.0);
    assert_relative_eq!(y_bottom, 800.0, epsilon = 1e-9);
    assert_relative_eq!(y_top, 0.0, epsilon = 1e-9);

    let tan_theta = 30.0_f64.to_radians().tan();
    assert_relative_eq!(x_top - x_bottom, tan_theta * 800.0, epsilon = 1e-9);
}

proptest! {
    #[test]
    fn device_round_trip_is_lossless(
        x in -60.0..60.0_f64,
        pressure in 100.0..1050.0_f64,
    ) {
        let transform = standard_transform();
        let point = DataPoint::new(x, pressure);
        let (x_px, y_px) = transform.data_to_device(point);
        let back = transform.device_to_data(x_px, y_px);
        prop_assert!((back.x - point.x).abs() < 1e-6);
        prop_assert!((back.y - point.y).abs() / point.y < 1e-9);
    }

    #[test]
    fn axes_round_trip_is_lossless(
        x in 0.0..1.0_f64,
        y in 0.0..1.0_f64,
    ) {
        let transform = standard_transform();
        let data = transform.axes_to_data(DataPoint::new(x, y));
        let back = transform.data_to_axes(data);
        prop_assert!((back.x - x).abs() < 1e-9);
        prop_assert!((back.y - y).abs() < 1e-9);
    }
}
