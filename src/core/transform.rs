//! The composed Skew-T coordinate transform.
//!
//! Composition order is fixed: Y scale, then limits normalization into the
//! unit square, then the fixed-angle shear, then the viewport map. The shear
//! has to happen in normalized-axes space so it pivots around the plot box
//! origin; shearing in data or device space gives a different picture.

use crate::core::affine::Affine2;
use crate::core::scale::YScale;
use crate::core::types::{DataPoint, Viewport};
use crate::error::{SkewError, SkewResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkewTransform {
    y_scale: YScale,
    x_limits: (f64, f64),
    y_limits: (f64, f64),
    shear_deg: f64,
    viewport: Viewport,
    to_axes_map: Affine2,
    to_data_map: Affine2,
    axes_device_map: Affine2,
    device_axes_map: Affine2,
    grid_device_map: Affine2,
}

impl SkewTransform {
    /// Builds the composed transform for the current view state.
    ///
    /// `x_limits` and `y_limits` are `(bottom-edge value, top-edge value)` in
    /// the order the caller displays them; an inverted pressure axis passes
    /// `(1050.0, 100.0)`. Fails fast on a malformed configuration instead of
    /// producing NaN geometry downstream.
    pub fn new(
        y_scale: YScale,
        x_limits: (f64, f64),
        y_limits: (f64, f64),
        shear_deg: f64,
        viewport: Viewport,
    ) -> SkewResult<Self> {
        if !viewport.is_valid() {
            return Err(SkewError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        if !x_limits.0.is_finite() || !x_limits.1.is_finite() || x_limits.0 == x_limits.1 {
            return Err(SkewError::InvalidData(
                "x view limits must be finite and non-degenerate".to_owned(),
            ));
        }

        y_scale.check_limits(y_limits.0, y_limits.1)?;

        if !shear_deg.is_finite() || shear_deg.to_radians().cos().abs() < 1e-12 {
            return Err(SkewError::SingularTransform(format!(
                "shear angle {shear_deg} deg has no finite tangent"
            )));
        }
        let tan_theta = shear_deg.to_radians().tan();

        let x_span = x_limits.1 - x_limits.0;
        let scaled_y0 = y_scale.forward(y_limits.0);
        let scaled_y1 = y_scale.forward(y_limits.1);
        let y_span = scaled_y1 - scaled_y0;

        let limits_to_axes = Affine2::scale_translate(
            1.0 / x_span,
            1.0 / y_span,
            -x_limits.0 / x_span,
            -scaled_y0 / y_span,
        );
        let shear = Affine2::shear_x(tan_theta);
        let to_axes_map = limits_to_axes.then(shear);
        let to_data_map = to_axes_map.invert()?;

        // Unit square to pixels, Y flipped so axes y=1 is the top row.
        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);
        let axes_device_map = Affine2::scale_translate(width, -height, 0.0, height);
        let device_axes_map = axes_device_map.invert()?;

        // Gridline blend: X goes through normalization, Y is passed through
        // as an axes coordinate, then both get the shear and viewport map.
        // This keeps vertical gridlines pinned to the plot box instead of
        // following the data's own log curvature.
        let grid_device_map = Affine2::scale_translate(1.0 / x_span, 1.0, -x_limits.0 / x_span, 0.0)
            .then(shear)
            .then(axes_device_map);

        Ok(Self {
            y_scale,
            x_limits,
            y_limits,
            shear_deg,
            viewport,
            to_axes_map,
            to_data_map,
            axes_device_map,
            device_axes_map,
            grid_device_map,
        })
    }

    #[must_use]
    pub fn y_scale(&self) -> YScale {
        self.y_scale
    }

    #[must_use]
    pub fn x_limits(&self) -> (f64, f64) {
        self.x_limits
    }

    #[must_use]
    pub fn y_limits(&self) -> (f64, f64) {
        self.y_limits
    }

    #[must_use]
    pub fn shear_deg(&self) -> f64 {
        self.shear_deg
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Data coordinates to normalized-axes coordinates (pre-viewport).
    #[must_use]
    pub fn data_to_axes(&self, point: DataPoint) -> DataPoint {
        let (x, y) = self
            .to_axes_map
            .apply(point.x, self.y_scale.forward(point.y));
        DataPoint::new(x, y)
    }

    /// Normalized-axes coordinates back to data coordinates.
    #[must_use]
    pub fn axes_to_data(&self, point: DataPoint) -> DataPoint {
        let (x, scaled_y) = self.to_data_map.apply(point.x, point.y);
        DataPoint::new(x, self.y_scale.inverse(scaled_y))
    }

    /// Data coordinates straight through to device pixels.
    #[must_use]
    pub fn data_to_device(&self, point: DataPoint) -> (f64, f64) {
        let axes = self.data_to_axes(point);
        self.axes_device_map.apply(axes.x, axes.y)
    }

    /// Device pixels back to data coordinates.
    #[must_use]
    pub fn device_to_data(&self, x_px: f64, y_px: f64) -> DataPoint {
        let (x, y) = self.device_axes_map.apply(x_px, y_px);
        self.axes_to_data(DataPoint::new(x, y))
    }

    /// Normalized-axes coordinates to device pixels.
    #[must_use]
    pub fn axes_to_device(&self, x_axes: f64, y_axes: f64) -> (f64, f64) {
        self.axes_device_map.apply(x_axes, y_axes)
    }

    /// Gridline blend: `(data X, axes Y)` to device pixels.
    #[must_use]
    pub fn grid_to_device(&self, x_data: f64, y_axes: f64) -> (f64, f64) {
        self.grid_device_map.apply(x_data, y_axes)
    }
}
